//! The draw-order contract for person generation.
//!
//! RULE: Every seed-derived field is a pure function of the seed and this
//! sequence. The generator walks DRAW_ORDER front to back on one stream.
//! Inserting, removing or reordering a step changes every later field for
//! every seed, so any such change must bump DRAW_ORDER_VERSION.
//!
//! Draws consumed per step (one "draw" = one u64 from the stream):
//!   Gender            0 if constrained, else 1
//!   Name              2 (first, last)
//!   Age               1
//!   Birthday          1 (day offset within the age year)
//!   Title             1
//!   HairColor         1
//!   Phone             10 (area lead + 2, exchange lead + 2, line 4)
//!   Email             2 or 3 (pattern, optional number, provider)
//!   Occupation        3 (descriptor, area, role)
//!   Company           4 or 5
//!   CompanySize       1
//!   Industry          1
//!   EmploymentStatus  1
//!   Salary            1
//!   Ssn               9
//!   CardIssuer        1
//!   CardNumber        1 + remaining digits
//!   Cvv               1
//!   Expiry            2 (year offset, month)
//!   Username          1 or 2 (pattern, optional number)
//!   Password          12
//!   SecurityQuestion  1 (index selects the paired answer too)
//!   Height            2 (feet, inches)
//!   Weight            1
//!   BloodType         1
//!   OperatingSystem   1
//!   Guid              2
//!   UserAgent         template + version draws
//!   Education         1
//!   Website           3 (word, word, tld)

pub const DRAW_ORDER_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DrawStep {
    Gender,
    Name,
    Age,
    Birthday,
    Title,
    HairColor,
    Phone,
    Email,
    Occupation,
    Company,
    CompanySize,
    Industry,
    EmploymentStatus,
    Salary,
    Ssn,
    CardIssuer,
    CardNumber,
    Cvv,
    Expiry,
    Username,
    Password,
    SecurityQuestion,
    Height,
    Weight,
    BloodType,
    OperatingSystem,
    Guid,
    UserAgent,
    Education,
    Website,
}

/// NEVER reorder. Append only, and bump DRAW_ORDER_VERSION.
pub const DRAW_ORDER: &[DrawStep] = &[
    DrawStep::Gender,
    DrawStep::Name,
    DrawStep::Age,
    DrawStep::Birthday,
    DrawStep::Title,
    DrawStep::HairColor,
    DrawStep::Phone,
    DrawStep::Email,
    DrawStep::Occupation,
    DrawStep::Company,
    DrawStep::CompanySize,
    DrawStep::Industry,
    DrawStep::EmploymentStatus,
    DrawStep::Salary,
    DrawStep::Ssn,
    DrawStep::CardIssuer,
    DrawStep::CardNumber,
    DrawStep::Cvv,
    DrawStep::Expiry,
    DrawStep::Username,
    DrawStep::Password,
    DrawStep::SecurityQuestion,
    DrawStep::Height,
    DrawStep::Weight,
    DrawStep::BloodType,
    DrawStep::OperatingSystem,
    DrawStep::Guid,
    DrawStep::UserAgent,
    DrawStep::Education,
    DrawStep::Website,
];
