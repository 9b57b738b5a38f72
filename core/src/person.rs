//! Person record, generation options and the gender constraint.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{address::AddressRecord, types::Seed};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    /// Case-insensitive. `"random"` is not a gender; callers map it to `None`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Self::Male),
            "female" | "f" => Ok(Self::Female),
            other => Err(format!("unrecognized gender '{other}'")),
        }
    }
}

/// Inputs to generation. `state`/`city` are not consumed by the person
/// generator; they are forwarded to the address resolver by the composer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOptions {
    pub state: Option<String>,
    pub city: Option<String>,
    /// `None` means unconstrained.
    pub gender: Option<Gender>,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
    pub seed: Option<Seed>,
}

impl GenerateOptions {
    pub fn seeded(seed: Seed) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_location(mut self, state: &str, city: Option<&str>) -> Self {
        self.state = Some(state.to_owned());
        self.city = city.map(str::to_owned);
        self
    }

    pub fn with_age_range(mut self, min_age: u32, max_age: u32) -> Self {
        self.min_age = Some(min_age);
        self.max_age = Some(max_age);
        self
    }
}

/// The full record shape consumed by presentation and export collaborators.
/// Field names are part of the contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    // ── Identity ─────────────────────────────────
    pub full_name: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub birthday: String,
    pub title: String,
    pub hair_color: String,
    pub country: String,

    // ── Address (filled from the resolver) ───────
    pub street: String,
    pub city: String,
    pub state: String,
    pub state_full_name: String,
    pub zip_code: String,

    // ── Contact ──────────────────────────────────
    pub phone: String,
    pub email: String,
    pub full_address: String,

    // ── Employment ───────────────────────────────
    pub occupation: String,
    pub company: String,
    pub company_size: String,
    pub industry: String,
    pub status: String,
    pub salary: String,

    // ── Financial (synthetic, never issuer-valid) ─
    pub ssn: String,
    pub card_type: String,
    pub card_number: String,
    pub cvv: u16,
    pub expiry: String,

    // ── Account / security ───────────────────────
    pub username: String,
    pub password: String,

    // ── Physical ─────────────────────────────────
    pub height: String,
    pub weight: String,
    pub blood_type: String,

    // ── Technical fingerprint ────────────────────
    pub os: String,
    pub guid: String,
    pub user_agent: String,

    // ── Other ────────────────────────────────────
    pub education: String,
    pub website: String,
    pub security_question: String,
    pub security_answer: String,
}

impl PersonRecord {
    /// Copy the six address-shaped fields into this record's placeholders.
    pub fn apply_address(&mut self, address: &AddressRecord) {
        self.street = address.street.clone();
        self.city = address.city.clone();
        self.state = address.state.clone();
        self.state_full_name = address.state_full_name.clone();
        self.zip_code = address.zip_code.clone();
        self.full_address = address.full_address.clone();
    }

    pub fn has_address(&self) -> bool {
        !self.full_address.is_empty()
    }
}
