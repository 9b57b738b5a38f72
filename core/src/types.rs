//! Shared primitive types used across the crate.

/// A caller-supplied seed. Any integer, negative included.
/// Absent means "ambient randomness, caching allowed".
pub type Seed = i64;

/// A two-letter US state code such as `"CA"`. Unrecognized codes are echoed.
pub type StateCode = String;

/// Constant country value carried by every address and person record.
pub const COUNTRY: &str = "United States";
