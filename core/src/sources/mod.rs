//! Address source tiers.
//!
//! RULE: A network tier never raises past the resolver. Every failure is a
//! `SourceError` which the resolver records as `TierOutcome::Recovered`
//! and treats exactly like "no result".
//!
//! Priority order is fixed by the resolver: open data, geocoding, synthetic.
//! The synthetic tier is not an `AddressSource`; it is the infallible backstop.

mod nominatim;
mod open_data;
mod synthetic;

pub use nominatim::{
    NominatimIdentity, NominatimSource, DEFAULT_CANDIDATE_LIMIT, DEFAULT_ENDPOINT, DEFAULT_USER_AGENT,
};
pub use open_data::OpenDataSource;
pub use synthetic::SyntheticSource;

use async_trait::async_trait;
use serde::Serialize;

use crate::{
    address::{AddressQuery, AddressRecord},
    error::SourceError,
    rng::IdentityRng,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceTier {
    OpenData,
    Geocoding,
    Synthetic,
}

impl SourceTier {
    pub fn name(&self) -> &'static str {
        match self {
            Self::OpenData => "open_data",
            Self::Geocoding => "geocoding",
            Self::Synthetic => "synthetic",
        }
    }
}

/// The contract every network-backed tier must fulfill.
#[async_trait]
pub trait AddressSource: Send + Sync {
    fn tier(&self) -> SourceTier;

    /// Whether the resolver must await the shared rate limiter before calling.
    fn requires_throttle(&self) -> bool;

    /// `Ok(None)` means the tier legitimately has nothing to offer.
    ///
    /// The returned record's `state` must be `query.state`.
    async fn lookup(
        &self,
        query: &AddressQuery,
        rng: &mut IdentityRng,
    ) -> Result<Option<AddressRecord>, SourceError>;
}

/// Tagged result of one tier attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TierOutcome {
    Found(AddressRecord),
    NoResult,
    Recovered(SourceError),
}

impl From<Result<Option<AddressRecord>, SourceError>> for TierOutcome {
    fn from(result: Result<Option<AddressRecord>, SourceError>) -> Self {
        match result {
            Ok(Some(record)) => Self::Found(record),
            Ok(None) => Self::NoResult,
            Err(error) => Self::Recovered(error),
        }
    }
}

