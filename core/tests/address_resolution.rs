//! Address chain behaviour with scripted network tiers.
//!
//! Verifies:
//!   - Failing or empty network tiers fall through to the synthetic tier
//!   - The first successful tier wins and later tiers are not called
//!   - Unseeded results are cached for the TTL; seeded calls bypass the cache
//!   - Throttled tiers are never called less than the minimum interval apart
//!   - Unknown states degrade gracefully

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

use synthid_core::{
    address::{AddressQuery, AddressRecord},
    address_cache::{AddressCache, DEFAULT_CACHE_TTL},
    error::SourceError,
    rate_limiter::{RateLimiter, DEFAULT_MIN_INTERVAL},
    resolver::{AddressResolver, ServedBy},
    rng::IdentityRng,
    sources::{AddressSource, SourceTier},
};

#[derive(Clone, Copy)]
enum Script {
    Fail,
    Empty,
    /// Street is "{call number} Test St", so repeated lookups differ.
    Counting,
}

struct ScriptedSource {
    tier: SourceTier,
    throttled: bool,
    script: Script,
    calls: Arc<Mutex<Vec<Instant>>>,
}

impl ScriptedSource {
    fn new(tier: SourceTier, throttled: bool, script: Script) -> (Self, Arc<Mutex<Vec<Instant>>>) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let source = Self {
            tier,
            throttled,
            script,
            calls: Arc::clone(&calls),
        };
        (source, calls)
    }
}

#[async_trait]
impl AddressSource for ScriptedSource {
    fn tier(&self) -> SourceTier {
        self.tier
    }

    fn requires_throttle(&self) -> bool {
        self.throttled
    }

    async fn lookup(
        &self,
        query: &AddressQuery,
        _rng: &mut IdentityRng,
    ) -> Result<Option<AddressRecord>, SourceError> {
        let call_number = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(Instant::now());
            calls.len()
        };
        match self.script {
            Script::Fail => Err(SourceError::Status { status: 503 }),
            Script::Empty => Ok(None),
            Script::Counting => Ok(Some(AddressRecord::new(
                format!("{call_number} Test St"),
                query.city.clone().unwrap_or_else(|| "Testville".into()),
                &query.state,
                "12345".into(),
            ))),
        }
    }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn resolver_with(sources: Vec<Box<dyn AddressSource>>) -> AddressResolver {
    AddressResolver::new(
        sources,
        Arc::new(AddressCache::default()),
        Arc::new(RateLimiter::default()),
    )
    .with_ambient_seed(3)
}

fn failing_network() -> AddressResolver {
    let (open_data, _) = ScriptedSource::new(SourceTier::OpenData, false, Script::Empty);
    let (geocoder, _) = ScriptedSource::new(SourceTier::Geocoding, true, Script::Fail);
    resolver_with(vec![Box::new(open_data), Box::new(geocoder)])
}

fn assert_synthetic_street(street: &str) {
    let parts: Vec<&str> = street.split(' ').collect();
    assert_eq!(parts.len(), 3, "street should be '<number> <Name> <Type>': {street}");
    let number: u32 = parts[0].parse().expect("house number");
    assert!((100..=9999).contains(&number));
    assert!(parts[1].chars().next().is_some_and(|c| c.is_ascii_uppercase()));
    assert!(parts[2].chars().next().is_some_and(|c| c.is_ascii_uppercase()));
}

#[tokio::test(start_paused = true)]
async fn failing_network_falls_back_to_synthetic_tier() {
    init_logging();
    let resolver = failing_network();
    let resolution = resolver
        .resolve_detailed(Some("CA"), Some("Los Angeles"), Some(42))
        .await;

    let address = &resolution.address;
    assert_eq!(resolution.served_by, ServedBy::Tier(SourceTier::Synthetic));
    assert_eq!(address.state, "CA");
    assert_eq!(address.city, "Los Angeles");
    assert_eq!(address.state_full_name, "California");
    assert_synthetic_street(&address.street);
    assert_eq!(address.zip_code.len(), 5);
    assert!(address.zip_code.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(
        address.full_address,
        format!("{}, Los Angeles, CA {}", address.street, address.zip_code)
    );
}

#[tokio::test(start_paused = true)]
async fn seeded_fallback_is_reproducible() {
    let a = failing_network().resolve(Some("CA"), Some("Los Angeles"), Some(42)).await;
    let b = failing_network().resolve(Some("CA"), Some("Los Angeles"), Some(42)).await;
    assert_eq!(a, b);
}

#[tokio::test(start_paused = true)]
async fn resolve_never_fails_and_echoes_requested_state() {
    let resolver = failing_network();
    let cases = [
        (Some("TX"), Some("Austin")),
        (Some("TX"), None),
        (Some("ZZ"), None),
        (Some("zz"), Some("Lowercase")),
        (None, Some("Springfield")),
        (None, None),
    ];
    for (i, (state, city)) in cases.into_iter().enumerate() {
        let address = resolver.resolve(state, city, Some(i as i64)).await;
        assert!(!address.street.is_empty());
        assert!(!address.city.is_empty());
        assert!(!address.zip_code.is_empty());
        if let Some(state) = state {
            assert_eq!(address.state, state);
        }
        if let Some(city) = city {
            assert_eq!(address.city, city);
        }
    }
}

#[tokio::test(start_paused = true)]
async fn first_successful_tier_wins() {
    let (open_data, open_calls) = ScriptedSource::new(SourceTier::OpenData, false, Script::Counting);
    let (geocoder, geo_calls) = ScriptedSource::new(SourceTier::Geocoding, true, Script::Counting);
    let resolver = resolver_with(vec![Box::new(open_data), Box::new(geocoder)]);

    let resolution = resolver.resolve_detailed(Some("OH"), None, Some(1)).await;
    assert_eq!(resolution.served_by, ServedBy::Tier(SourceTier::OpenData));
    assert_eq!(resolution.address.street, "1 Test St");
    assert_eq!(open_calls.lock().unwrap().len(), 1);
    assert!(geo_calls.lock().unwrap().is_empty(), "later tiers must not be called");
}

#[tokio::test(start_paused = true)]
async fn geocoding_serves_when_open_data_is_empty() {
    let (open_data, _) = ScriptedSource::new(SourceTier::OpenData, false, Script::Empty);
    let (geocoder, _) = ScriptedSource::new(SourceTier::Geocoding, true, Script::Counting);
    let resolver = resolver_with(vec![Box::new(open_data), Box::new(geocoder)]);

    let resolution = resolver.resolve_detailed(Some("WA"), Some("Seattle"), None).await;
    assert_eq!(resolution.served_by, ServedBy::Tier(SourceTier::Geocoding));
    assert_eq!(resolution.address.state, "WA");
    assert!(!resolution.is_reproducible());
}

#[tokio::test(start_paused = true)]
async fn unseeded_results_are_cached_for_ttl() {
    let (geocoder, calls) = ScriptedSource::new(SourceTier::Geocoding, true, Script::Counting);
    let resolver = resolver_with(vec![Box::new(geocoder)]);

    let first = resolver.resolve(Some("MA"), Some("Boston"), None).await;
    tokio::time::advance(DEFAULT_CACHE_TTL - Duration::from_secs(1)).await;
    let second = resolver.resolve_detailed(Some("MA"), Some("Boston"), None).await;

    assert_eq!(second.served_by, ServedBy::Cache);
    assert_eq!(first, second.address);
    assert_eq!(calls.lock().unwrap().len(), 1);
    assert_eq!(resolver.cache().get("MA-Boston"), Some(first.clone()));

    tokio::time::advance(Duration::from_secs(1)).await;
    let third = resolver.resolve(Some("MA"), Some("Boston"), None).await;
    assert_eq!(calls.lock().unwrap().len(), 2, "expired entry must trigger a fresh lookup");
    assert_ne!(first, third);
    assert_eq!(resolver.cache().get("MA-Boston"), Some(third));
}

#[tokio::test(start_paused = true)]
async fn seeded_calls_bypass_the_cache() {
    let (geocoder, calls) = ScriptedSource::new(SourceTier::Geocoding, true, Script::Counting);
    let resolver = resolver_with(vec![Box::new(geocoder)]);

    let unseeded = resolver.resolve(Some("GA"), Some("Atlanta"), None).await;
    let seeded = resolver.resolve_detailed(Some("GA"), Some("Atlanta"), Some(8)).await;

    assert_ne!(seeded.served_by, ServedBy::Cache, "seeded calls must not read the cache");
    assert_eq!(calls.lock().unwrap().len(), 2);
    assert_eq!(resolver.cache().len(), 1, "seeded calls must not write the cache");
    assert_eq!(resolver.cache().get("GA-Atlanta"), Some(unseeded));
}

#[tokio::test(start_paused = true)]
async fn cache_key_distinguishes_random_placeholders() {
    let resolver = failing_network();
    let any_state = resolver.resolve(None, None, None).await;
    let _texas = resolver.resolve(Some("TX"), None, None).await;

    assert_eq!(resolver.cache().len(), 2);
    assert_eq!(resolver.cache().get("random-random"), Some(any_state.clone()));
    assert!(resolver.cache().get("TX-random").is_some());
    assert_eq!(resolver.random_address(None).await, any_state);
}

#[tokio::test(start_paused = true)]
async fn throttled_tier_calls_are_spaced_by_min_interval() {
    let (geocoder, calls) = ScriptedSource::new(SourceTier::Geocoding, true, Script::Fail);
    let resolver = resolver_with(vec![Box::new(geocoder)]);

    for seed in 0..4 {
        resolver.resolve(Some("CO"), None, Some(seed)).await;
    }

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 4);
    for pair in calls.windows(2) {
        assert!(
            pair[1] - pair[0] >= DEFAULT_MIN_INTERVAL,
            "calls {:?} apart",
            pair[1] - pair[0]
        );
    }
}

#[tokio::test(start_paused = true)]
async fn unthrottled_tier_does_not_wait() {
    let (open_data, calls) = ScriptedSource::new(SourceTier::OpenData, false, Script::Empty);
    let resolver = resolver_with(vec![Box::new(open_data)]);

    let start = Instant::now();
    for seed in 0..3 {
        resolver.resolve(Some("NE"), None, Some(seed)).await;
    }
    assert_eq!(Instant::now(), start);
    assert_eq!(calls.lock().unwrap().len(), 3);
}

#[tokio::test(start_paused = true)]
async fn seeded_requests_can_be_pinned_to_synthetic_tier() {
    let (geocoder, calls) = ScriptedSource::new(SourceTier::Geocoding, true, Script::Counting);
    let resolver = resolver_with(vec![Box::new(geocoder)]).with_seeded_network_lookups(false);

    let seeded = resolver.resolve_detailed(Some("NV"), None, Some(5)).await;
    assert_eq!(seeded.served_by, ServedBy::Tier(SourceTier::Synthetic));
    assert!(calls.lock().unwrap().is_empty());

    let unseeded = resolver.resolve_detailed(Some("NV"), None, None).await;
    assert_eq!(unseeded.served_by, ServedBy::Tier(SourceTier::Geocoding));
}

#[tokio::test(start_paused = true)]
async fn convenience_lookup_keeps_state_and_city() {
    let address = failing_network().address_for("IL", "Chicago", Some(3)).await;
    assert_eq!(address.state, "IL");
    assert_eq!(address.city, "Chicago");
    assert_eq!(address.state_full_name, "Illinois");
}
