//! Full-record composition: person fields plus a resolved address.
//!
//! The same seed is forwarded to both the person generator and the address
//! resolver. Their streams are independent (separate stream slots), so the
//! person fields do not depend on which address tier answered.

use crate::{
    config::ResolverConfig,
    error::IdentityResult,
    generator::PersonGenerator,
    person::{GenerateOptions, PersonRecord},
    resolver::{AddressResolver, Resolution},
};

pub struct IdentityComposer {
    generator: PersonGenerator,
    resolver: AddressResolver,
}

/// A composed record together with how its address was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedRecord {
    pub person: PersonRecord,
    pub resolution: Resolution,
}

impl IdentityComposer {
    pub fn new(generator: PersonGenerator, resolver: AddressResolver) -> Self {
        Self { generator, resolver }
    }

    pub fn from_config(config: &ResolverConfig) -> IdentityResult<Self> {
        Ok(Self::new(
            PersonGenerator::new(),
            AddressResolver::from_config(config)?,
        ))
    }

    pub fn generator(&self) -> &PersonGenerator {
        &self.generator
    }

    pub fn resolver(&self) -> &AddressResolver {
        &self.resolver
    }

    pub async fn compose_full_record(&self, options: &GenerateOptions) -> PersonRecord {
        self.compose_detailed(options).await.person
    }

    pub async fn compose_detailed(&self, options: &GenerateOptions) -> ComposedRecord {
        let mut person = self.generator.generate(options);
        let resolution = self
            .resolver
            .resolve_detailed(
                options.state.as_deref(),
                options.city.as_deref(),
                options.seed,
            )
            .await;
        person.apply_address(&resolution.address);
        ComposedRecord { person, resolution }
    }

    /// `count` records. Seeded batches use `seed + i` for record `i`, so the
    /// whole batch replays from one seed.
    pub async fn compose_batch(&self, options: &GenerateOptions, count: usize) -> Vec<PersonRecord> {
        let mut records = Vec::with_capacity(count);
        for i in 0..count {
            let item_options = GenerateOptions {
                seed: options.seed.map(|seed| seed.wrapping_add(i as i64)),
                ..options.clone()
            };
            records.push(self.compose_full_record(&item_options).await);
        }
        log::info!("composed {} records", records.len());
        records
    }
}
