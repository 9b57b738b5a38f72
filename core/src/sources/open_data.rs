//! Per-state government open-data tier.
//!
//! No state exposes a usable address endpoint yet, so this tier always
//! reports "no result". It is kept as the first slot in the chain so a real
//! integration can replace it without touching the resolver.

use async_trait::async_trait;

use super::{AddressSource, SourceTier};
use crate::{
    address::{AddressQuery, AddressRecord},
    error::SourceError,
    rng::IdentityRng,
};

#[derive(Debug, Clone, Default)]
pub struct OpenDataSource;

impl OpenDataSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl AddressSource for OpenDataSource {
    fn tier(&self) -> SourceTier {
        SourceTier::OpenData
    }

    fn requires_throttle(&self) -> bool {
        false
    }

    async fn lookup(
        &self,
        query: &AddressQuery,
        _rng: &mut IdentityRng,
    ) -> Result<Option<AddressRecord>, SourceError> {
        log::debug!("open data: no integration for state {}", query.state);
        Ok(None)
    }
}
