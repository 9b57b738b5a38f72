//! Address resolution: the tiered source chain.
//!
//! CHAIN ORDER (fixed, first success wins):
//!   1. Open-data tier      (no integration yet, always "no result")
//!   2. Geocoding tier      (rate limited)
//!   3. Synthetic tier      (infallible backstop, not a network source)
//!
//! RULES:
//!   - `resolve` never fails. Tier errors are logged and skipped.
//!   - Unseeded calls consult the cache before tier 1 and store the result
//!     under the requested (state, city) key.
//!   - Seeded calls bypass the cache entirely, in both directions.
//!   - The rate limiter is awaited only before tiers that ask for it.

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;

use crate::{
    address::{AddressQuery, AddressRecord},
    address_cache::AddressCache,
    config::ResolverConfig,
    error::{IdentityError, IdentityResult},
    rate_limiter::RateLimiter,
    reference,
    rng::{IdentityRng, StreamSlot},
    sources::{
        AddressSource, NominatimIdentity, NominatimSource, OpenDataSource, SourceTier,
        SyntheticSource, TierOutcome,
    },
    types::Seed,
};

/// Where a resolved address came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServedBy {
    Cache,
    Tier(SourceTier),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub address: AddressRecord,
    pub served_by: ServedBy,
}

impl Resolution {
    /// True when re-running with the same seed is guaranteed to give the
    /// same address: the synthetic tier or a cache hit served it.
    pub fn is_reproducible(&self) -> bool {
        matches!(
            self.served_by,
            ServedBy::Cache | ServedBy::Tier(SourceTier::Synthetic)
        )
    }
}

pub struct AddressResolver {
    sources: Vec<Box<dyn AddressSource>>,
    synthetic: SyntheticSource,
    cache: Arc<AddressCache>,
    limiter: Arc<RateLimiter>,
    ambient: Mutex<IdentityRng>,
    seeded_network_lookups: bool,
}

impl AddressResolver {
    /// Resolver with an explicit network chain. `sources` are tried in order
    /// before the synthetic backstop.
    pub fn new(
        sources: Vec<Box<dyn AddressSource>>,
        cache: Arc<AddressCache>,
        limiter: Arc<RateLimiter>,
    ) -> Self {
        Self {
            sources,
            synthetic: SyntheticSource::new(),
            cache,
            limiter,
            ambient: Mutex::new(IdentityRng::from_entropy(StreamSlot::Address)),
            seeded_network_lookups: true,
        }
    }

    /// Build the standard chain (open data, then geocoding unless offline).
    pub fn from_config(config: &ResolverConfig) -> IdentityResult<Self> {
        if config.candidate_limit == 0 {
            return Err(IdentityError::InvalidConfig {
                reason: "candidate_limit must be at least 1".into(),
            });
        }

        let mut sources: Vec<Box<dyn AddressSource>> = vec![Box::new(OpenDataSource::new())];
        if config.offline {
            log::info!("resolver: offline, geocoding tier disabled");
        } else {
            let endpoint = url::Url::parse(&config.geocoding_endpoint)?;
            let identity = NominatimIdentity {
                user_agent: config.user_agent.clone(),
                candidate_limit: config.candidate_limit,
            };
            let geocoder =
                NominatimSource::with_identity(endpoint, config.request_timeout(), identity)?;
            sources.push(Box::new(geocoder));
        }

        let cache = Arc::new(AddressCache::new(config.cache_ttl()));
        let limiter = Arc::new(RateLimiter::new(config.min_request_interval()));
        Ok(Self::new(sources, cache, limiter)
            .with_seeded_network_lookups(config.seeded_network_lookups))
    }

    pub fn with_seeded_network_lookups(mut self, enabled: bool) -> Self {
        self.seeded_network_lookups = enabled;
        self
    }

    /// Replace the entropy-seeded ambient stream (tests and replays).
    pub fn with_ambient_seed(mut self, seed: Seed) -> Self {
        self.ambient = Mutex::new(IdentityRng::new(seed, StreamSlot::Address));
        self
    }

    pub fn cache(&self) -> &Arc<AddressCache> {
        &self.cache
    }

    pub fn rate_limiter(&self) -> &Arc<RateLimiter> {
        &self.limiter
    }

    pub async fn resolve(
        &self,
        state: Option<&str>,
        city: Option<&str>,
        seed: Option<Seed>,
    ) -> AddressRecord {
        self.resolve_detailed(state, city, seed).await.address
    }

    /// Any state, any city.
    pub async fn random_address(&self, seed: Option<Seed>) -> AddressRecord {
        self.resolve(None, None, seed).await
    }

    pub async fn address_for(&self, state: &str, city: &str, seed: Option<Seed>) -> AddressRecord {
        self.resolve(Some(state), Some(city), seed).await
    }

    pub async fn resolve_detailed(
        &self,
        state: Option<&str>,
        city: Option<&str>,
        seed: Option<Seed>,
    ) -> Resolution {
        let state = state.filter(|s| !s.is_empty());
        let city = city.filter(|c| !c.is_empty());

        let cache_key = match seed {
            Some(_) => None,
            None => Some(AddressCache::key(state, city)),
        };
        if let Some(key) = &cache_key {
            if let Some(address) = self.cache.get(key) {
                log::debug!("resolver: cache hit for {key}");
                return Resolution {
                    address,
                    served_by: ServedBy::Cache,
                };
            }
            log::debug!("resolver: cache miss for {key}");
        }

        let mut rng = match seed {
            Some(seed) => IdentityRng::new(seed, StreamSlot::Address),
            None => self.fork_ambient(),
        };
        let query = AddressQuery {
            state: match state {
                Some(code) => code.to_owned(),
                None => rng.pick(reference::STATES).code.to_owned(),
            },
            city: city.map(str::to_owned),
        };

        let (address, tier) = self.run_chain(&query, &mut rng, seed.is_some()).await;
        if let Some(key) = cache_key {
            self.cache.insert(key, address.clone());
        }
        Resolution {
            address,
            served_by: ServedBy::Tier(tier),
        }
    }

    async fn run_chain(
        &self,
        query: &AddressQuery,
        rng: &mut IdentityRng,
        seeded: bool,
    ) -> (AddressRecord, SourceTier) {
        if seeded && !self.seeded_network_lookups {
            log::debug!("resolver: seeded request, network tiers skipped");
        } else {
            for source in &self.sources {
                let tier = source.tier();
                if source.requires_throttle() {
                    self.limiter.throttle().await;
                }
                match TierOutcome::from(source.lookup(query, rng).await) {
                    TierOutcome::Found(address) => {
                        log::debug!("resolver: {} tier served {}", tier.name(), query.state);
                        return (address, tier);
                    }
                    TierOutcome::NoResult => {
                        log::debug!("resolver: {} tier had no result", tier.name());
                    }
                    TierOutcome::Recovered(error) => {
                        log::warn!(
                            "resolver: {} tier failed for {}: {error}",
                            tier.name(),
                            query.state
                        );
                    }
                }
            }
        }
        (self.synthetic.generate(query, rng), SourceTier::Synthetic)
    }

    fn fork_ambient(&self) -> IdentityRng {
        self.ambient
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .fork()
    }
}
