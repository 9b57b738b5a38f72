//! Seeded person generation.
//!
//! RULES:
//!   - One stream per call: a fresh seeded stream when a seed is given,
//!     otherwise a child forked from this generator's ambient stream.
//!     A seeded call never touches the ambient stream.
//!   - Fields are drawn strictly in DRAW_ORDER (see draw.rs).
//!   - Address fields are left empty; the composer fills them.

use std::sync::{Mutex, PoisonError};

use chrono::{Datelike, Duration, Months, NaiveDate, Utc};
use uuid::Builder;

use crate::{
    catalog::{self, CardIssuer},
    draw::{DrawStep, DRAW_ORDER},
    name_generator::NameGenerator,
    person::{Gender, GenerateOptions, PersonRecord},
    rng::{IdentityRng, StreamSlot},
    types::{Seed, COUNTRY},
};

pub const DEFAULT_MIN_AGE: u32 = 18;
pub const DEFAULT_MAX_AGE: u32 = 80;
pub const SALARY_MIN: u64 = 35_000;
pub const SALARY_MAX: u64 = 250_000;

pub struct PersonGenerator {
    ambient: Mutex<IdentityRng>,
    reference_date: Option<NaiveDate>,
}

impl PersonGenerator {
    pub fn new() -> Self {
        Self {
            ambient: Mutex::new(IdentityRng::from_entropy(StreamSlot::Person)),
            reference_date: None,
        }
    }

    /// Replace the entropy-seeded ambient stream (tests and replays).
    pub fn with_ambient_seed(mut self, seed: Seed) -> Self {
        self.ambient = Mutex::new(IdentityRng::new(seed, StreamSlot::Person));
        self
    }

    /// Pin "today" for birthdate and card-expiry arithmetic.
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    pub fn generate(&self, options: &GenerateOptions) -> PersonRecord {
        let mut rng = match options.seed {
            Some(seed) => IdentityRng::new(seed, StreamSlot::Person),
            None => self
                .ambient
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .fork(),
        };
        let today = self
            .reference_date
            .unwrap_or_else(|| Utc::now().date_naive());

        let mut draft = Draft::new(options, today);
        for step in DRAW_ORDER {
            draft.apply(*step, &mut rng);
        }
        log::debug!(
            "generated person {} (seed {:?})",
            draft.record.full_name,
            options.seed
        );
        draft.record
    }
}

impl Default for PersonGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Intermediate state carried between draw steps.
struct Draft<'a> {
    options: &'a GenerateOptions,
    today: NaiveDate,
    gender: Gender,
    first_name: &'static str,
    last_name: &'static str,
    age: u32,
    card_issuer: &'static CardIssuer,
    record: PersonRecord,
}

impl<'a> Draft<'a> {
    fn new(options: &'a GenerateOptions, today: NaiveDate) -> Self {
        Self {
            options,
            today,
            gender: Gender::Male,
            first_name: "",
            last_name: "",
            age: DEFAULT_MIN_AGE,
            card_issuer: &catalog::CARD_ISSUERS[0],
            record: PersonRecord {
                country: COUNTRY.to_string(),
                ..PersonRecord::default()
            },
        }
    }

    fn apply(&mut self, step: DrawStep, rng: &mut IdentityRng) {
        match step {
            DrawStep::Gender => {
                self.gender = match self.options.gender {
                    Some(gender) => gender,
                    None => *rng.pick(&[Gender::Male, Gender::Female]),
                };
                self.record.gender = self.gender.as_str().to_string();
            }
            DrawStep::Name => {
                self.first_name = NameGenerator::generate_first_name(rng, self.gender);
                self.last_name = NameGenerator::generate_last_name(rng);
                self.record.first_name = self.first_name.to_string();
                self.record.last_name = self.last_name.to_string();
                self.record.full_name = format!("{} {}", self.first_name, self.last_name);
            }
            DrawStep::Age => {
                let (min, max) = age_bounds(self.options);
                self.age = rng.int_in_range(u64::from(min), u64::from(max)) as u32;
            }
            DrawStep::Birthday => {
                let birthday = birthdate_for_age(self.today, self.age, rng);
                self.record.birthday =
                    format!("{}/{}/{}", birthday.month(), birthday.day(), birthday.year());
            }
            DrawStep::Title => {
                let titles = match self.options.gender {
                    Some(Gender::Male) => catalog::MALE_TITLES,
                    Some(Gender::Female) => catalog::FEMALE_TITLES,
                    None => catalog::NEUTRAL_TITLES,
                };
                self.record.title = rng.pick(titles).to_string();
            }
            DrawStep::HairColor => {
                self.record.hair_color = rng.pick(catalog::HAIR_COLORS).to_string();
            }
            DrawStep::Phone => self.record.phone = phone_number(rng),
            DrawStep::Email => {
                self.record.email = email_address(self.first_name, self.last_name, rng);
            }
            DrawStep::Occupation => {
                let descriptor = rng.pick(catalog::JOB_DESCRIPTORS);
                let area = rng.pick(catalog::JOB_AREAS);
                let role = rng.pick(catalog::JOB_ROLES);
                self.record.occupation = format!("{descriptor} {area} {role}");
            }
            DrawStep::Company => {
                self.record.company = NameGenerator::generate_company_name(rng);
            }
            DrawStep::CompanySize => {
                self.record.company_size = rng.pick(catalog::COMPANY_SIZES).to_string();
            }
            DrawStep::Industry => {
                self.record.industry = rng.pick(catalog::INDUSTRIES).to_string();
            }
            DrawStep::EmploymentStatus => {
                self.record.status = rng.pick(catalog::EMPLOYMENT_STATUSES).to_string();
            }
            DrawStep::Salary => {
                self.record.salary = format_salary(rng.int_in_range(SALARY_MIN, SALARY_MAX));
            }
            DrawStep::Ssn => {
                let area = rng.digits(3);
                let group = rng.digits(2);
                let serial = rng.digits(4);
                self.record.ssn = format!("{area}-{group}-{serial}");
            }
            DrawStep::CardIssuer => {
                self.card_issuer = rng.pick(catalog::CARD_ISSUERS);
                self.record.card_type = self.card_issuer.name.to_string();
            }
            DrawStep::CardNumber => {
                self.record.card_number = card_number(self.card_issuer, rng);
            }
            DrawStep::Cvv => self.record.cvv = rng.int_in_range(0, 999) as u16,
            DrawStep::Expiry => {
                let year = self.today.year() + rng.int_in_range(1, 5) as i32;
                let month = rng.int_in_range(1, 12);
                self.record.expiry = format!("{month:02}/{:02}", year.rem_euclid(100));
            }
            DrawStep::Username => {
                self.record.username = username(self.first_name, self.last_name, rng);
            }
            DrawStep::Password => {
                self.record.password = (0..catalog::PASSWORD_LENGTH)
                    .map(|_| char::from(*rng.pick(catalog::PASSWORD_CHARSET)))
                    .collect();
            }
            DrawStep::SecurityQuestion => {
                let index = rng.int_in_range(0, catalog::SECURITY_PAIRS.len() as u64 - 1);
                let (question, answer) = catalog::SECURITY_PAIRS[index as usize];
                self.record.security_question = question.to_string();
                self.record.security_answer = answer.to_string();
            }
            DrawStep::Height => {
                let feet = rng.int_in_range(5, 6);
                let inches = rng.int_in_range(0, 11);
                self.record.height = format!("{feet}'{inches}\"");
            }
            DrawStep::Weight => {
                self.record.weight = format!("{} lbs", rng.int_in_range(110, 220));
            }
            DrawStep::BloodType => {
                self.record.blood_type = rng.pick(catalog::BLOOD_TYPES).to_string();
            }
            DrawStep::OperatingSystem => {
                self.record.os = rng.pick(catalog::OPERATING_SYSTEMS).to_string();
            }
            DrawStep::Guid => {
                self.record.guid = Builder::from_random_bytes(rng.bytes16())
                    .into_uuid()
                    .to_string();
            }
            DrawStep::UserAgent => self.record.user_agent = user_agent(rng),
            DrawStep::Education => {
                self.record.education = rng.pick(catalog::EDUCATION_LEVELS).to_string();
            }
            DrawStep::Website => {
                let first = rng.pick(catalog::WEBSITE_WORDS);
                let second = rng.pick(catalog::WEBSITE_WORDS);
                let tld = rng.pick(catalog::WEBSITE_TLDS);
                self.record.website = format!("https://{first}-{second}.{tld}");
            }
        }
    }
}

// ── Field helpers ────────────────────────────────────────────────────

/// [min_age, max_age] when both are supplied and positive, else [18, 80].
fn age_bounds(options: &GenerateOptions) -> (u32, u32) {
    match (options.min_age, options.max_age) {
        (Some(min), Some(max)) if min > 0 && max > 0 => (min.min(max), min.max(max)),
        _ => (DEFAULT_MIN_AGE, DEFAULT_MAX_AGE),
    }
}

/// A date on which someone turns exactly `age` within the year ending `today`.
fn birthdate_for_age(today: NaiveDate, age: u32, rng: &mut IdentityRng) -> NaiveDate {
    let latest = today
        .checked_sub_months(Months::new(age.saturating_mul(12)))
        .unwrap_or(today);
    let earliest = latest
        .checked_sub_months(Months::new(12))
        .and_then(|d| d.succ_opt())
        .unwrap_or(latest);
    let span = (latest - earliest).num_days().max(0) as u64;
    earliest + Duration::days(rng.int_in_range(0, span) as i64)
}

/// NXX-NXX-XXXX: area and exchange codes lead with 2–9.
fn phone_number(rng: &mut IdentityRng) -> String {
    let area_lead = rng.int_in_range(2, 9);
    let area_rest = rng.digits(2);
    let exchange_lead = rng.int_in_range(2, 9);
    let exchange_rest = rng.digits(2);
    let line = rng.digits(4);
    format!("{area_lead}{area_rest}-{exchange_lead}{exchange_rest}-{line}")
}

fn email_address(first: &str, last: &str, rng: &mut IdentityRng) -> String {
    let first = first.to_ascii_lowercase();
    let last = last.to_ascii_lowercase();
    let local = match rng.next_u64_below(4) {
        0 => format!("{first}.{last}"),
        1 => format!("{first}_{last}"),
        2 => format!("{first}.{last}{}", rng.int_in_range(1, 99)),
        _ => format!("{first}{last}{}", rng.int_in_range(1, 99)),
    };
    let provider = rng.pick(catalog::EMAIL_PROVIDERS);
    format!("{local}@{provider}")
}

fn username(first: &str, last: &str, rng: &mut IdentityRng) -> String {
    let first = first.to_ascii_lowercase();
    let last = last.to_ascii_lowercase();
    match rng.next_u64_below(4) {
        0 => format!("{first}.{last}"),
        1 => format!("{first}_{last}"),
        2 => format!("{first}{}", rng.int_in_range(1, 999)),
        _ => format!("{first}.{last}{}", rng.int_in_range(1, 99)),
    }
}

/// Issuer-shaped digits grouped with dashes. Not Luhn-valid by intent.
fn card_number(issuer: &CardIssuer, rng: &mut IdentityRng) -> String {
    let prefix = *rng.pick(issuer.prefixes);
    let digits = format!("{prefix}{}", rng.digits(issuer.length() - prefix.len()));

    let mut groups = Vec::with_capacity(issuer.groups.len());
    let mut start = 0;
    for size in issuer.groups {
        groups.push(&digits[start..start + size]);
        start += size;
    }
    groups.join("-")
}

fn user_agent(rng: &mut IdentityRng) -> String {
    match rng.next_u64_below(5) {
        0 => {
            let major = rng.int_in_range(110, 131);
            let build = rng.int_in_range(4000, 6999);
            let patch = rng.int_in_range(0, 199);
            format!(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/{major}.0.{build}.{patch} Safari/537.36"
            )
        }
        1 => {
            let macos = rng.int_in_range(1, 7);
            let major = rng.int_in_range(110, 131);
            let build = rng.int_in_range(4000, 6999);
            format!(
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_{macos}) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/{major}.0.{build}.0 Safari/537.36"
            )
        }
        2 => {
            let platform = rng.pick(&[
                "Windows NT 10.0; Win64; x64",
                "X11; Linux x86_64",
                "X11; Ubuntu; Linux x86_64",
            ]);
            let version = rng.int_in_range(110, 132);
            format!("Mozilla/5.0 ({platform}; rv:{version}.0) Gecko/20100101 Firefox/{version}.0")
        }
        3 => {
            let macos = rng.int_in_range(1, 7);
            let major = rng.int_in_range(15, 17);
            let minor = rng.int_in_range(0, 6);
            format!(
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_{macos}) AppleWebKit/605.1.15 \
                 (KHTML, like Gecko) Version/{major}.{minor} Safari/605.1.15"
            )
        }
        _ => {
            let major = rng.int_in_range(15, 17);
            let minor = rng.int_in_range(0, 6);
            format!(
                "Mozilla/5.0 (iPhone; CPU iPhone OS {major}_{minor} like Mac OS X) \
                 AppleWebKit/605.1.15 (KHTML, like Gecko) Version/{major}.{minor} \
                 Mobile/15E148 Safari/604.1"
            )
        }
    }
}

/// `125000` -> `"$125,000"`.
pub fn format_salary(amount: u64) -> String {
    format!("${}", group_thousands(amount))
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
