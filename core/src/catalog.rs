//! Fixed value lists drawn from by the person generator.
//!
//! RULE: Order within each list is part of the seed contract. Editing a
//! list changes which value a given seed selects; treat it like a change
//! to DRAW_ORDER.

pub const MALE_TITLES: &[&str] = &["Mr.", "Dr."];
pub const FEMALE_TITLES: &[&str] = &["Ms.", "Mrs.", "Dr.", "Miss"];
pub const NEUTRAL_TITLES: &[&str] = &["Dr.", "Prof."];

pub const HAIR_COLORS: &[&str] = &["Black", "Brown", "Blonde", "Red", "Gray", "Auburn"];

pub const EMAIL_PROVIDERS: &[&str] = &["gmail.com", "yahoo.com", "hotmail.com", "outlook.com"];

pub const JOB_DESCRIPTORS: &[&str] = &[
    "Senior", "Lead", "Junior", "Principal", "Chief", "Corporate", "Regional", "District",
    "National", "Global", "Internal", "Product", "Customer", "Dynamic", "Future", "Legacy",
];

pub const JOB_AREAS: &[&str] = &[
    "Solutions", "Program", "Brand", "Security", "Research", "Marketing", "Implementation",
    "Integration", "Operations", "Infrastructure", "Communications", "Quality", "Accounts",
    "Data", "Creative", "Applications", "Optimization", "Mobility", "Metrics", "Usability",
];

pub const JOB_ROLES: &[&str] = &[
    "Supervisor", "Associate", "Executive", "Liaison", "Officer", "Manager", "Engineer",
    "Specialist", "Director", "Coordinator", "Administrator", "Architect", "Analyst",
    "Designer", "Planner", "Technician", "Developer", "Consultant", "Strategist", "Agent",
];

pub const COMPANY_SIZES: &[&str] = &[
    "1-10 employees",
    "11-50 employees",
    "51-200 employees",
    "201-500 employees",
    "500+ employees",
];

pub const INDUSTRIES: &[&str] = &[
    "Technology", "Finance", "Healthcare", "Education", "Retail",
    "Manufacturing", "Real Estate", "Consulting", "Media", "Government",
    "Non-profit", "Energy", "Transportation", "Agriculture", "Entertainment",
];

pub const EMPLOYMENT_STATUSES: &[&str] = &[
    "Full-time", "Part-time", "Contract", "Freelance", "Self-employed", "Temporary",
];

pub struct CardIssuer {
    pub name: &'static str,
    pub prefixes: &'static [&'static str],
    /// Digit group sizes; their sum is the card length.
    pub groups: &'static [usize],
}

impl CardIssuer {
    pub fn length(&self) -> usize {
        self.groups.iter().sum()
    }
}

pub const CARD_ISSUERS: &[CardIssuer] = &[
    CardIssuer { name: "Visa", prefixes: &["4"], groups: &[4, 4, 4, 4] },
    CardIssuer { name: "Mastercard", prefixes: &["51", "52", "53", "54", "55"], groups: &[4, 4, 4, 4] },
    CardIssuer { name: "American Express", prefixes: &["34", "37"], groups: &[4, 6, 5] },
    CardIssuer { name: "Discover", prefixes: &["6011", "65"], groups: &[4, 4, 4, 4] },
    CardIssuer { name: "JCB", prefixes: &["3528", "3589"], groups: &[4, 4, 4, 4] },
    CardIssuer { name: "Diners Club", prefixes: &["36", "38"], groups: &[4, 6, 4] },
];

pub const PASSWORD_LENGTH: usize = 12;
pub const PASSWORD_CHARSET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_";

/// Question and its designed answer share one entry so they cannot drift.
pub const SECURITY_PAIRS: &[(&str, &str)] = &[
    ("What was your first pet's name?", "Fluffy"),
    ("What city were you born in?", "New York"),
    ("What is your mother's maiden name?", "Smith"),
    ("What high school did you attend?", "Lincoln High"),
    ("What is your favorite color?", "Blue"),
    ("What was the name of your elementary school?", "Oak Elementary"),
    ("What is your father's middle name?", "Robert"),
    ("What is your favorite movie?", "Titanic"),
    ("What is your favorite food?", "Pizza"),
    ("What street did you grow up on?", "Main Street"),
];

pub const BLOOD_TYPES: &[&str] = &["A+", "A-", "B+", "B-", "O+", "O-", "AB+", "AB-"];

pub const OPERATING_SYSTEMS: &[&str] = &[
    "Windows 11",
    "Windows 10",
    "macOS Sonoma",
    "macOS Ventura",
    "Ubuntu 22.04",
    "Debian 12",
    "CentOS Stream 9",
    "Fedora 39",
];

pub const EDUCATION_LEVELS: &[&str] = &[
    "High School",
    "Associate Degree",
    "Bachelor's Degree",
    "Master's Degree",
    "Doctorate",
    "Professional Degree",
];

pub const WEBSITE_WORDS: &[&str] = &[
    "bright", "blue", "north", "silver", "quick", "green", "summit", "harbor", "maple",
    "cedar", "pixel", "orbit", "river", "stone", "signal", "atlas", "willow", "copper",
];

pub const WEBSITE_TLDS: &[&str] = &["com", "net", "org", "info", "biz", "io"];
