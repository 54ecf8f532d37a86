//! Point-of-service location directory.
//!
//! A fixed catalog of ATMs and branches, loaded once and read-only for
//! the life of the process. Proximity search lives in [`search`] and
//! reads the catalog as a constant input.

mod catalog;
mod search;

pub use search::{haversine_miles, Nearby};

use serde::{Deserialize, Serialize};

/// What kind of point of service a location is.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationKind {
    /// Automated teller machine.
    Atm,
    /// Full-service branch.
    Branch,
}

impl LocationKind {
    /// Parse from the query-string form used by the HTTP API.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "atm" => Some(LocationKind::Atm),
            "branch" => Some(LocationKind::Branch),
            _ => None,
        }
    }
}

/// Operating hours for a span of days.
///
/// Both fields are free text ("Monday-Friday", "9:00 AM - 5:00 PM") and
/// are never parsed, only displayed.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Hours {
    /// Day-range label.
    pub days: String,
    /// Hours within that range.
    pub hours: String,
}

/// One entry in the location directory.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Location {
    /// Opaque identifier.
    pub id: String,
    /// ATM or branch.
    pub kind: LocationKind,
    /// Display name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Two-letter state code.
    pub state: String,
    /// Postal code.
    pub zip: String,
    /// Contact phone, if staffed.
    pub phone: Option<String>,
    /// Operating hours, in display order.
    pub hours: Vec<Hours>,
    /// Free-text capability tags ("Cash Withdrawal", ...).
    pub services: Vec<String>,
    /// Free-text amenity tags ("Drive-through", ...).
    pub features: Vec<String>,
    /// Latitude in decimal degrees (WGS84).
    pub latitude: f64,
    /// Longitude in decimal degrees (WGS84).
    pub longitude: f64,
}

/// The immutable location directory.
pub struct Catalog {
    locations: Vec<Location>,
}

impl Catalog {
    /// The builtin demo catalog (San Francisco Bay Area).
    pub fn builtin() -> Self {
        Self {
            locations: catalog::builtin_locations(),
        }
    }

    /// Build a catalog from an explicit location list.
    pub fn new(locations: Vec<Location>) -> Self {
        Self { locations }
    }

    /// Look up a location by id.
    pub fn get(&self, id: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }

    /// All locations, in catalog order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Number of catalog entries.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_integrity() {
        let catalog = Catalog::builtin();
        assert!(!catalog.is_empty());

        // Ids are unique
        let mut ids: Vec<&str> = catalog.locations().iter().map(|l| l.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());

        for location in catalog.locations() {
            assert!((-90.0..=90.0).contains(&location.latitude));
            assert!((-180.0..=180.0).contains(&location.longitude));
            assert!(!location.hours.is_empty());
            assert!(!location.services.is_empty());
        }
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::builtin();
        let first = &catalog.locations()[0];
        assert!(catalog.get(&first.id).is_some());
        assert!(catalog.get("no-such-location").is_none());
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(LocationKind::parse("atm"), Some(LocationKind::Atm));
        assert_eq!(LocationKind::parse("branch"), Some(LocationKind::Branch));
        assert_eq!(LocationKind::parse("ATM"), None);
        assert_eq!(LocationKind::parse(""), None);
    }

    #[test]
    fn test_location_serializes_kind_lowercase() {
        let catalog = Catalog::builtin();
        let json = serde_json::to_value(&catalog.locations()[0]).unwrap();
        let kind = json.get("kind").unwrap().as_str().unwrap();
        assert!(kind == "atm" || kind == "branch");
    }
}
