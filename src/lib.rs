//! Workspace root package (tooling only).
