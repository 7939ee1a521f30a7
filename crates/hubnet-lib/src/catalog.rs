//! Hub catalog loading and lookup.
//!
//! The catalog is reference data: a table of named locations with coordinates
//! and a tier. Records are read from CSV, validated one at a time, and indexed
//! by hub id and city name. A bad record is logged and skipped; only a
//! structurally unusable header aborts the load.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::CatalogConfig;
use crate::error::{Error, ParseError, Result};
use crate::geo::Coordinates;

/// Identifier of a hub, unique within a catalog.
pub type HubId = String;

/// Hub table compiled into the library.
const BUILTIN_HUBS: &str = include_str!("../data/hubs.csv");

/// Number of columns every record must carry.
const REQUIRED_FIELDS: usize = 5;

/// Minimum Jaro-Winkler similarity for a name to be suggested.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Network tier of a hub.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HubTier {
    /// Primary terminal, chained to the other majors.
    Major,
    /// Secondary location attached to its nearest major.
    Sub,
}

impl HubTier {
    /// Parse a tier label case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("major") {
            Some(HubTier::Major)
        } else if value.eq_ignore_ascii_case("sub") {
            Some(HubTier::Sub)
        } else {
            None
        }
    }
}

impl fmt::Display for HubTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            HubTier::Major => "major",
            HubTier::Sub => "sub",
        };
        f.write_str(value)
    }
}

/// A named location in the hub network.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hub {
    pub id: HubId,
    pub name: String,
    pub region: String,
    pub tier: HubTier,
    pub coordinates: Coordinates,
}

impl Hub {
    /// Create a hub, deriving its identifier from region and city.
    pub fn new(
        region: impl Into<String>,
        name: impl Into<String>,
        tier: HubTier,
        coordinates: Coordinates,
    ) -> Self {
        let region = region.into();
        let name = name.into();
        Self {
            id: hub_id(&region, &name),
            name,
            region,
            tier,
            coordinates,
        }
    }

    pub fn is_major(&self) -> bool {
        self.tier == HubTier::Major
    }
}

/// Derive the `<REGION3>-<CITY5>` identifier used for hubs.
///
/// Only alphanumeric characters count toward the prefixes, so
/// `("Maharashtra", "Navi Mumbai")` becomes `MAH-NAVIM`. Distinct places
/// sharing a prefix get a numeric suffix from the catalog (`WES-KOLKA-2`).
pub fn hub_id(region: &str, city: &str) -> HubId {
    let prefix = |value: &str, len: usize| {
        value
            .chars()
            .filter(|c| c.is_alphanumeric())
            .take(len)
            .flat_map(char::to_uppercase)
            .collect::<String>()
    };
    format!("{}-{}", prefix(region, 3), prefix(city, 5))
}

/// A record rejected during load.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedRecord {
    /// One-based line number in the source, when known.
    pub line: Option<u64>,
    pub error: ParseError,
}

/// Column positions resolved from the header row.
#[derive(Debug, Clone, Copy)]
struct Columns {
    region: usize,
    city: usize,
    latitude: usize,
    longitude: usize,
    tier: usize,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let normalize = |s: &str| {
            s.to_ascii_lowercase()
                .chars()
                .filter(|c| c.is_ascii_alphanumeric())
                .collect::<String>()
        };
        let normalized: Vec<String> = headers.iter().map(normalize).collect();

        let find = |synonyms: &[&str]| {
            synonyms
                .iter()
                .find_map(|alt| normalized.iter().position(|header| header == alt))
        };

        let region = find(&["region", "state", "province"]);
        let city = find(&["city", "name"]);
        let latitude = find(&["latitude", "lat"]);
        let longitude = find(&["longitude", "lon", "lng", "long"]);
        let tier = find(&["tier", "type"]);

        match (region, city, latitude, longitude, tier) {
            (Some(region), Some(city), Some(latitude), Some(longitude), Some(tier)) => Ok(Self {
                region,
                city,
                latitude,
                longitude,
                tier,
            }),
            _ => {
                let missing: Vec<&str> = [
                    ("region", region),
                    ("city", city),
                    ("latitude", latitude),
                    ("longitude", longitude),
                    ("tier", tier),
                ]
                .iter()
                .filter(|(_, index)| index.is_none())
                .map(|(name, _)| *name)
                .collect();
                Err(Error::CatalogHeader {
                    message: format!(
                        "missing required columns: {}. Available: {}",
                        missing.join(", "),
                        headers.iter().collect::<Vec<_>>().join(", ")
                    ),
                })
            }
        }
    }

    fn parse(&self, record: &StringRecord) -> std::result::Result<Hub, ParseError> {
        if record.len() < REQUIRED_FIELDS {
            return Err(ParseError::TooFewFields {
                expected: REQUIRED_FIELDS,
                found: record.len(),
            });
        }

        let region = required_field(record, self.region, "region")?;
        let city = required_field(record, self.city, "city")?;
        let latitude = coordinate_field(record, self.latitude, "latitude", 90.0)?;
        let longitude = coordinate_field(record, self.longitude, "longitude", 180.0)?;
        let tier_value = required_field(record, self.tier, "tier")?;
        let tier = HubTier::parse(tier_value).ok_or_else(|| ParseError::UnknownTier {
            value: tier_value.to_string(),
        })?;

        Ok(Hub::new(
            region,
            city,
            tier,
            Coordinates {
                latitude,
                longitude,
            },
        ))
    }
}

fn required_field<'r>(
    record: &'r StringRecord,
    index: usize,
    field: &'static str,
) -> std::result::Result<&'r str, ParseError> {
    match record.get(index) {
        Some(value) if !value.is_empty() => Ok(value),
        Some(_) => Err(ParseError::MissingField { field }),
        None => Err(ParseError::TooFewFields {
            expected: index + 1,
            found: record.len(),
        }),
    }
}

fn coordinate_field(
    record: &StringRecord,
    index: usize,
    field: &'static str,
    limit: f64,
) -> std::result::Result<f64, ParseError> {
    let raw = required_field(record, index, field)?;
    let value: f64 = raw.parse().map_err(|_| ParseError::InvalidNumber {
        field,
        value: raw.to_string(),
    })?;
    if !value.is_finite() || value.abs() > limit {
        return Err(ParseError::OutOfRange { field, value });
    }
    Ok(value)
}

/// Validated, indexed collection of hubs.
#[derive(Debug, Clone, Default)]
pub struct HubCatalog {
    hubs: Vec<Hub>,
    by_id: HashMap<HubId, usize>,
    by_city: HashMap<String, usize>,
    by_place: HashMap<(String, String), usize>,
    skipped: Vec<SkippedRecord>,
    truncated: usize,
    source: Option<PathBuf>,
}

impl HubCatalog {
    /// Load the hub table bundled with the library.
    pub fn builtin() -> Result<Self> {
        Self::from_reader(BUILTIN_HUBS.as_bytes())
    }

    /// Load the bundled hub table with explicit configuration.
    pub fn builtin_with(config: &CatalogConfig) -> Result<Self> {
        Self::from_reader_with(BUILTIN_HUBS.as_bytes(), config)
    }

    /// Load a catalog from a CSV file using configuration from the environment.
    pub fn from_path(path: &Path) -> Result<Self> {
        Self::from_path_with(path, &CatalogConfig::from_env())
    }

    /// Load a catalog from a CSV file with explicit configuration.
    pub fn from_path_with(path: &Path, config: &CatalogConfig) -> Result<Self> {
        let file = fs::File::open(path)?;
        let mut catalog = Self::from_reader_with(file, config)?;
        catalog.source = Some(path.to_path_buf());
        Ok(catalog)
    }

    /// Load a catalog from a reader with default configuration.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with(reader, &CatalogConfig::default())
    }

    /// Load a catalog from a reader (file, in-memory buffer, ...).
    ///
    /// The first row must be a header naming the region, city, latitude,
    /// longitude and tier columns. Records that fail validation are skipped
    /// and reported through [`HubCatalog::skipped`].
    pub fn from_reader_with<R: Read>(reader: R, config: &CatalogConfig) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let columns = Columns::from_headers(csv_reader.headers()?)?;
        let mut catalog = Self::default();

        for entry in csv_reader.records() {
            if catalog.hubs.len() >= config.max_hubs {
                catalog.truncated += 1;
                continue;
            }

            let (line, parsed) = match entry {
                Ok(record) => (
                    record.position().map(|pos| pos.line()),
                    columns.parse(&record),
                ),
                Err(err) => (
                    err.position().map(|pos| pos.line()),
                    Err(ParseError::Malformed {
                        message: err.to_string(),
                    }),
                ),
            };

            match parsed {
                Ok(hub) => catalog.insert(hub, line),
                Err(error) => catalog.skip(line, error),
            }
        }

        if catalog.truncated > 0 {
            warn!(
                max_hubs = config.max_hubs,
                truncated = catalog.truncated,
                "hub catalog exceeds size limit; extra records ignored"
            );
        }

        debug!(
            hubs = catalog.hubs.len(),
            skipped = catalog.skipped.len(),
            "loaded hub catalog"
        );

        Ok(catalog)
    }

    /// Build a catalog from hubs constructed in code.
    ///
    /// Hubs with invalid coordinates or a repeated region and city are skipped just
    /// as they would be when parsed from CSV.
    pub fn from_hubs(hubs: impl IntoIterator<Item = Hub>) -> Self {
        let mut catalog = Self::default();
        for hub in hubs {
            if !hub.coordinates.is_valid() {
                let (field, value) = if hub.coordinates.latitude.is_finite()
                    && hub.coordinates.latitude.abs() <= 90.0
                {
                    ("longitude", hub.coordinates.longitude)
                } else {
                    ("latitude", hub.coordinates.latitude)
                };
                catalog.skip(None, ParseError::OutOfRange { field, value });
                continue;
            }
            catalog.insert(hub, None);
        }
        catalog
    }

    fn insert(&mut self, mut hub: Hub, line: Option<u64>) {
        let place = (hub.region.to_lowercase(), hub.name.to_lowercase());
        if let Some(&existing) = self.by_place.get(&place) {
            let id = self.hubs[existing].id.clone();
            self.skip(line, ParseError::DuplicateHub { id });
            return;
        }

        if self.by_id.contains_key(&hub.id) {
            let base = hub.id.clone();
            let mut suffix = 2;
            while self.by_id.contains_key(&hub.id) {
                hub.id = format!("{base}-{suffix}");
                suffix += 1;
            }
            debug!(base = %base, id = %hub.id, city = %hub.name, "hub id prefix collision");
        }

        let index = self.hubs.len();
        self.by_id.insert(hub.id.clone(), index);
        self.by_city.entry(hub.name.to_lowercase()).or_insert(index);
        self.by_place.insert(place, index);
        self.hubs.push(hub);
    }

    fn skip(&mut self, line: Option<u64>, error: ParseError) {
        warn!(line, %error, "skipping hub record");
        self.skipped.push(SkippedRecord { line, error });
    }

    /// All valid hubs in load order.
    pub fn hubs(&self) -> &[Hub] {
        &self.hubs
    }

    pub fn len(&self) -> usize {
        self.hubs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hubs.is_empty()
    }

    /// Records rejected during load.
    pub fn skipped(&self) -> &[SkippedRecord] {
        &self.skipped
    }

    /// Number of records ignored because the size limit was reached.
    pub fn truncated(&self) -> usize {
        self.truncated
    }

    /// File the catalog was read from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Lookup a hub by its identifier.
    pub fn find_by_id(&self, id: &str) -> Option<&Hub> {
        self.by_id.get(id).map(|&index| &self.hubs[index])
    }

    /// Lookup a hub by city name, ignoring case.
    ///
    /// When several regions share a city name the first loaded hub wins.
    pub fn find_by_city(&self, name: &str) -> Option<&Hub> {
        self.by_city
            .get(&name.trim().to_lowercase())
            .map(|&index| &self.hubs[index])
    }

    /// Resolve a hub by identifier first, then by city name.
    ///
    /// Identifiers are matched case-insensitively.
    pub fn resolve(&self, key: &str) -> Option<&Hub> {
        let key = key.trim();
        self.find_by_id(key)
            .or_else(|| self.find_by_id(&key.to_uppercase()))
            .or_else(|| self.find_by_city(key))
    }

    /// Major hubs in load order.
    pub fn majors(&self) -> impl Iterator<Item = &Hub> {
        self.hubs.iter().filter(|hub| hub.tier == HubTier::Major)
    }

    /// Sub hubs in load order.
    pub fn subs(&self) -> impl Iterator<Item = &Hub> {
        self.hubs.iter().filter(|hub| hub.tier == HubTier::Sub)
    }

    /// Hubs grouped by region, regions sorted by name.
    pub fn regions(&self) -> BTreeMap<&str, Vec<&Hub>> {
        let mut regions: BTreeMap<&str, Vec<&Hub>> = BTreeMap::new();
        for hub in &self.hubs {
            regions.entry(hub.region.as_str()).or_default().push(hub);
        }
        regions
    }

    /// City names and hub ids similar to `name`, best match first.
    pub fn fuzzy_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = name.trim().to_lowercase();
        let mut scored: Vec<(f64, &str)> = self
            .hubs
            .iter()
            .flat_map(|hub| {
                let by_name = strsim::jaro_winkler(&needle, &hub.name.to_lowercase());
                let by_id = strsim::jaro_winkler(&needle, &hub.id.to_lowercase());
                [(by_name, hub.name.as_str()), (by_id, hub.id.as_str())]
            })
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));

        let mut matches: Vec<String> = Vec::new();
        for (_, candidate) in scored {
            if matches.len() >= limit {
                break;
            }
            if !matches.iter().any(|existing| existing == candidate) {
                matches.push(candidate.to_string());
            }
        }
        matches
    }
}

impl FromStr for HubCatalog {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Self::from_reader(text.as_bytes())
    }
}
