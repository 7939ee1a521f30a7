//! Hub network CLI library.
//!
//! This crate provides the pieces shared by the `hubnet-cli` binary and its
//! tests: locating the hub catalog and rendering command output.

pub mod output;
pub mod source;
