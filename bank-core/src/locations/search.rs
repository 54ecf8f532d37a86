//! Proximity search over the location catalog.

use std::cmp::Ordering;

use super::{Catalog, Location, LocationKind};

/// Mean Earth radius in miles, for the haversine formula.
const EARTH_RADIUS_MILES: f64 = 3959.0;

/// A catalog entry paired with its distance from the query point.
///
/// Distance is derived per search and never stored on the location
/// itself.
#[derive(Clone, Copy, Debug)]
pub struct Nearby<'a> {
    /// The matched catalog entry.
    pub location: &'a Location,
    /// Great-circle distance from the query point, in miles.
    pub distance_miles: f64,
}

/// Great-circle distance in miles between two WGS84 coordinates.
pub fn haversine_miles(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_MILES * a.sqrt().atan2((1.0 - a).sqrt())
}

impl Catalog {
    /// Find catalog entries within `radius_miles` of a query point.
    ///
    /// Results are sorted by ascending distance; entries at equal
    /// distance keep their catalog order. Coordinates are taken as-is;
    /// rejecting missing or non-numeric input is the caller's job.
    pub fn search_nearby(
        &self,
        lat: f64,
        lng: f64,
        radius_miles: f64,
        kind: Option<LocationKind>,
    ) -> Vec<Nearby<'_>> {
        let mut matches: Vec<Nearby<'_>> = self
            .locations()
            .iter()
            .filter(|l| kind.map_or(true, |k| l.kind == k))
            .map(|l| Nearby {
                location: l,
                distance_miles: haversine_miles(lat, lng, l.latitude, l.longitude),
            })
            .filter(|n| n.distance_miles <= radius_miles)
            .collect();

        // Stable sort: catalog order breaks distance ties.
        matches.sort_by(|a, b| {
            a.distance_miles
                .partial_cmp(&b.distance_miles)
                .unwrap_or(Ordering::Equal)
        });

        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Union Square, San Francisco
    const QUERY: (f64, f64) = (37.7880, -122.4075);

    #[test]
    fn test_distance_is_non_negative_and_symmetric() {
        let catalog = Catalog::builtin();
        for location in catalog.locations() {
            let there = haversine_miles(QUERY.0, QUERY.1, location.latitude, location.longitude);
            let back = haversine_miles(location.latitude, location.longitude, QUERY.0, QUERY.1);
            assert!(there >= 0.0);
            assert!((there - back).abs() < 1e-9);
        }
    }

    #[test]
    fn test_distance_zero_at_same_point() {
        let d = haversine_miles(QUERY.0, QUERY.1, QUERY.0, QUERY.1);
        assert_eq!(d, 0.0);
    }

    #[test]
    fn test_known_distance_sf_to_la() {
        // San Francisco to Los Angeles is ~347 miles great-circle.
        let d = haversine_miles(37.7749, -122.4194, 34.0522, -118.2437);
        assert!((340.0..355.0).contains(&d), "got {}", d);
    }

    #[test]
    fn test_results_within_radius_and_sorted() {
        let catalog = Catalog::builtin();
        let results = catalog.search_nearby(QUERY.0, QUERY.1, 25.0, None);
        assert!(!results.is_empty());

        let mut previous = 0.0;
        for nearby in &results {
            assert!(nearby.distance_miles <= 25.0);
            assert!(nearby.distance_miles >= previous);
            previous = nearby.distance_miles;
        }
    }

    #[test]
    fn test_radius_filter_excludes_far_entries() {
        let catalog = Catalog::builtin();
        let wide = catalog.search_nearby(QUERY.0, QUERY.1, 50.0, None);
        let narrow = catalog.search_nearby(QUERY.0, QUERY.1, 3.0, None);
        assert!(narrow.len() < wide.len());
        // Palo Alto is ~25 miles out, never within 3.
        assert!(narrow.iter().all(|n| n.location.id != "br-paloalto"));
    }

    #[test]
    fn test_kind_filter() {
        let catalog = Catalog::builtin();
        let atms = catalog.search_nearby(QUERY.0, QUERY.1, 50.0, Some(LocationKind::Atm));
        assert!(!atms.is_empty());
        assert!(atms.iter().all(|n| n.location.kind == LocationKind::Atm));
    }

    #[test]
    fn test_empty_when_nothing_in_range() {
        let catalog = Catalog::builtin();
        // Middle of the Atlantic
        let results = catalog.search_nearby(30.0, -40.0, 25.0, None);
        assert!(results.is_empty());
    }

    #[test]
    fn test_search_is_deterministic() {
        let catalog = Catalog::builtin();
        let a = catalog.search_nearby(QUERY.0, QUERY.1, 25.0, None);
        let b = catalog.search_nearby(QUERY.0, QUERY.1, 25.0, None);
        let ids_a: Vec<&str> = a.iter().map(|n| n.location.id.as_str()).collect();
        let ids_b: Vec<&str> = b.iter().map(|n| n.location.id.as_str()).collect();
        assert_eq!(ids_a, ids_b);
    }
}
