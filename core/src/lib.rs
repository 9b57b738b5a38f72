//! Synthetic, internally consistent US identity records for testing.
//!
//! Nothing produced here is real personal data. Financial and identity
//! fields are shaped like the real thing and validated against nothing.

pub mod address;
pub mod address_cache;
pub mod catalog;
pub mod composer;
pub mod config;
pub mod draw;
pub mod error;
pub mod generator;
pub mod name_generator;
pub mod person;
pub mod rate_limiter;
pub mod reference;
pub mod resolver;
pub mod rng;
pub mod sources;
pub mod types;

pub use address::AddressRecord;
pub use composer::IdentityComposer;
pub use config::ResolverConfig;
pub use error::{IdentityError, IdentityResult, SourceError};
pub use generator::PersonGenerator;
pub use person::{Gender, GenerateOptions, PersonRecord};
pub use resolver::AddressResolver;
