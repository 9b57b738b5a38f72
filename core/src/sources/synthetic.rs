//! Synthetic city-list tier. Always succeeds.
//!
//! Draw order (part of the seed contract):
//!   1. city (only when the caller did not supply one)
//!   2. street number, street name, street type
//!   3. ZIP digits

use crate::{
    address::{synthesize_street, synthesize_zip, AddressQuery, AddressRecord},
    name_generator::NameGenerator,
    reference,
    rng::IdentityRng,
};

#[derive(Debug, Clone, Default)]
pub struct SyntheticSource;

impl SyntheticSource {
    pub fn new() -> Self {
        Self
    }

    pub fn generate(&self, query: &AddressQuery, rng: &mut IdentityRng) -> AddressRecord {
        let city = match &query.city {
            Some(city) => city.clone(),
            None => match reference::cities_for_state(&query.state) {
                Some(cities) => rng.pick(cities).to_string(),
                None => NameGenerator::generate_city_name(rng),
            },
        };
        let street = synthesize_street(rng);
        let zip_code = synthesize_zip(rng);
        AddressRecord::new(street, city, &query.state, zip_code)
    }
}
