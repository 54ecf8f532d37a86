//! The builtin demo location catalog.

use super::{Hours, Location, LocationKind};

fn hours(spans: &[(&str, &str)]) -> Vec<Hours> {
    spans
        .iter()
        .map(|(days, hours)| Hours {
            days: (*days).to_string(),
            hours: (*hours).to_string(),
        })
        .collect()
}

fn strings(tags: &[&str]) -> Vec<String> {
    tags.iter().map(|t| (*t).to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn branch(
    id: &str,
    name: &str,
    address: &str,
    city: &str,
    zip: &str,
    phone: &str,
    latitude: f64,
    longitude: f64,
) -> Location {
    Location {
        id: id.to_string(),
        kind: LocationKind::Branch,
        name: name.to_string(),
        address: address.to_string(),
        city: city.to_string(),
        state: "CA".to_string(),
        zip: zip.to_string(),
        phone: Some(phone.to_string()),
        hours: hours(&[
            ("Monday-Friday", "9:00 AM - 5:00 PM"),
            ("Saturday", "9:00 AM - 1:00 PM"),
            ("Sunday", "Closed"),
        ]),
        services: strings(&[
            "Cash Withdrawal",
            "Deposits",
            "Notary Services",
            "Safe Deposit Boxes",
            "Financial Advisory",
        ]),
        features: strings(&["Wheelchair Accessible", "Parking"]),
        latitude,
        longitude,
    }
}

fn atm(
    id: &str,
    name: &str,
    address: &str,
    city: &str,
    zip: &str,
    latitude: f64,
    longitude: f64,
) -> Location {
    Location {
        id: id.to_string(),
        kind: LocationKind::Atm,
        name: name.to_string(),
        address: address.to_string(),
        city: city.to_string(),
        state: "CA".to_string(),
        zip: zip.to_string(),
        phone: None,
        hours: hours(&[("Monday-Sunday", "24 Hours")]),
        services: strings(&["Cash Withdrawal", "Check Deposit", "Balance Inquiry"]),
        features: strings(&["24/7 Access"]),
        latitude,
        longitude,
    }
}

/// The fixed demo catalog: San Francisco Bay Area ATMs and branches.
pub(super) fn builtin_locations() -> Vec<Location> {
    let mut locations = vec![
        branch(
            "br-market",
            "Market Street Branch",
            "464 California St",
            "San Francisco",
            "94104",
            "(415) 555-0134",
            37.7936,
            -122.4004,
        ),
        branch(
            "br-mission",
            "Mission District Branch",
            "2601 Mission St",
            "San Francisco",
            "94110",
            "(415) 555-0171",
            37.7556,
            -122.4189,
        ),
        branch(
            "br-sunset",
            "Sunset Branch",
            "2099 Irving St",
            "San Francisco",
            "94122",
            "(415) 555-0148",
            37.7636,
            -122.4797,
        ),
        branch(
            "br-oakland",
            "Oakland Downtown Branch",
            "1200 Broadway",
            "Oakland",
            "94612",
            "(510) 555-0126",
            37.8027,
            -122.2720,
        ),
        branch(
            "br-paloalto",
            "Palo Alto Branch",
            "400 University Ave",
            "Palo Alto",
            "94301",
            "(650) 555-0183",
            37.4478,
            -122.1600,
        ),
        atm(
            "atm-embarcadero",
            "Embarcadero Center ATM",
            "4 Embarcadero Center",
            "San Francisco",
            "94111",
            37.7952,
            -122.3961,
        ),
        atm(
            "atm-castro",
            "Castro Street ATM",
            "443 Castro St",
            "San Francisco",
            "94114",
            37.7609,
            -122.4350,
        ),
        atm(
            "atm-berkeley",
            "Berkeley Shattuck ATM",
            "2150 Shattuck Ave",
            "Berkeley",
            "94704",
            37.8702,
            -122.2681,
        ),
        atm(
            "atm-sfo",
            "SFO International Terminal ATM",
            "San Francisco International Airport",
            "San Francisco",
            "94128",
            37.6152,
            -122.3899,
        ),
    ];

    // Per-location amenities beyond the defaults
    if let Some(oakland) = locations.iter_mut().find(|l| l.id == "br-oakland") {
        oakland.features.push("Drive-through".to_string());
    }
    if let Some(market) = locations.iter_mut().find(|l| l.id == "br-market") {
        market
            .services
            .push("Foreign Currency Exchange".to_string());
    }

    locations
}
