//! Address record and the query that produces it.

use serde::{Deserialize, Serialize};

use crate::{reference, rng::IdentityRng, types::COUNTRY};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressRecord {
    pub street: String,
    pub city: String,
    pub state: String,
    pub state_full_name: String,
    pub zip_code: String,
    pub full_address: String,
    pub country: String,
}

impl AddressRecord {
    /// Build a record; `full_address` and `state_full_name` are derived here
    /// so they cannot drift from the parts.
    pub fn new(street: String, city: String, state: &str, zip_code: String) -> Self {
        let state_full_name = reference::state_full_name(state).unwrap_or(state).to_string();
        let full_address = format_full_address(&street, &city, state, &zip_code);
        Self {
            street,
            city,
            state: state.to_string(),
            state_full_name,
            zip_code,
            full_address,
            country: COUNTRY.to_string(),
        }
    }
}

pub fn format_full_address(street: &str, city: &str, state: &str, zip_code: &str) -> String {
    format!("{street}, {city}, {state} {zip_code}")
}

/// The normalized (state, city) pair a tier is asked about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressQuery {
    pub state: String,
    pub city: Option<String>,
}

// ── Synthetic address parts ─────────────────────────────────────────

const STREET_NAMES: &[&str] = &[
    "Main", "Oak", "Park", "First", "Second", "Third", "Elm", "Pine", "Cedar", "Washington",
    "Jefferson", "Lincoln", "Madison", "Jackson", "Adams", "Franklin", "Monroe", "Grant",
    "Church", "School", "Mill", "River", "Hill", "Lake", "Sunset", "Valley", "Grove",
];

const STREET_TYPES: &[&str] = &[
    "St", "Ave", "Dr", "Blvd", "Rd", "Ln", "Ct", "Pl", "Terrace", "Way", "Circle",
];

/// `"{100-9999} {Name} {Type}"`. Three draws: number, name, type.
pub fn synthesize_street(rng: &mut IdentityRng) -> String {
    let number = rng.int_in_range(100, 9999);
    let name = rng.pick(STREET_NAMES);
    let street_type = rng.pick(STREET_TYPES);
    format!("{number} {name} {street_type}")
}

/// Five-digit ZIP shape. No validation against real ZIP ranges.
pub fn synthesize_zip(rng: &mut IdentityRng) -> String {
    rng.digits(5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::StreamSlot;

    #[test]
    fn full_address_is_derived_from_parts() {
        let record = AddressRecord::new("12 Oak St".into(), "Denver".into(), "CO", "80202".into());
        assert_eq!(record.full_address, "12 Oak St, Denver, CO 80202");
        assert_eq!(record.state_full_name, "Colorado");
        assert_eq!(record.country, "United States");
    }

    #[test]
    fn unknown_state_echoes_code_as_full_name() {
        let record = AddressRecord::new("1 Main St".into(), "Nowhere".into(), "ZZ", "00000".into());
        assert_eq!(record.state, "ZZ");
        assert_eq!(record.state_full_name, "ZZ");
    }

    #[test]
    fn synthetic_street_has_number_name_type() {
        let mut rng = IdentityRng::new(5, StreamSlot::Address);
        for _ in 0..200 {
            let street = synthesize_street(&mut rng);
            let parts: Vec<&str> = street.split(' ').collect();
            assert_eq!(parts.len(), 3, "unexpected street shape: {street}");
            let number: u64 = parts[0].parse().expect("numeric house number");
            assert!((100..=9999).contains(&number));
            assert!(STREET_NAMES.contains(&parts[1]));
            assert!(STREET_TYPES.contains(&parts[2]));
        }
    }

    #[test]
    fn record_serializes_camel_case() {
        let record = AddressRecord::new("1 Main St".into(), "Austin".into(), "TX", "73301".into());
        let json = serde_json::to_string(&record).expect("serialize");
        assert!(json.contains("stateFullName"));
        assert!(json.contains("zipCode"));
        assert!(json.contains("fullAddress"));
    }
}
