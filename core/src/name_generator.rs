//! Deterministic name generation using curated name lists.
//!
//! Provides realistic, diverse names for people, companies and
//! fallback city names. All generation is deterministic (same RNG seed = same names).

use crate::{person::Gender, rng::IdentityRng};

/// Deterministic name generator using curated name lists
pub struct NameGenerator;

impl NameGenerator {
    /// Generate first name from the curated list for `gender`. One draw.
    pub fn generate_first_name(rng: &mut IdentityRng, gender: Gender) -> &'static str {
        match gender {
            Gender::Male => *rng.pick(Self::male_first_names()),
            Gender::Female => *rng.pick(Self::female_first_names()),
        }
    }

    /// Generate last name from curated list. One draw.
    pub fn generate_last_name(rng: &mut IdentityRng) -> &'static str {
        *rng.pick(Self::last_names())
    }

    /// Generate a company name.
    ///
    /// Format: "Prefix Industry Suffix" or "LastName Industry Suffix".
    pub fn generate_company_name(rng: &mut IdentityRng) -> String {
        let prefix = *rng.pick(Self::business_prefixes());
        let industry = *rng.pick(Self::business_industries());
        let suffix = *rng.pick(Self::business_suffixes());

        if rng.chance(0.5) {
            format!("{prefix} {industry} {suffix}")
        } else {
            format!("{} {industry} {suffix}", Self::generate_last_name(rng))
        }
    }

    /// Generate a plausible town name, used when a state has no city list.
    ///
    /// Format: "[Direction ]Root+suffix", e.g. "North Harrisville".
    pub fn generate_city_name(rng: &mut IdentityRng) -> String {
        let root = Self::generate_last_name(rng);
        let suffix = *rng.pick(Self::city_suffixes());
        if rng.chance(0.5) {
            let prefix = *rng.pick(Self::city_prefixes());
            format!("{prefix} {root}{suffix}")
        } else {
            format!("{root}{suffix}")
        }
    }

    fn male_first_names() -> &'static [&'static str] {
        &[
            "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph",
            "Thomas", "Charles", "Christopher", "Daniel", "Matthew", "Anthony", "Mark",
            "Donald", "Steven", "Paul", "Andrew", "Joshua", "Kenneth", "Kevin", "Brian",
            "George", "Timothy", "Ronald", "Edward", "Jason", "Jeffrey", "Ryan",
            "Jacob", "Gary", "Nicholas", "Eric", "Jonathan", "Stephen", "Larry", "Justin",
            "Scott", "Brandon", "Benjamin", "Samuel", "Raymond", "Gregory", "Frank",
            "Alexander", "Patrick", "Jack", "Dennis", "Jerry", "Tyler", "Aaron", "Jose",
            "Adam", "Nathan", "Henry", "Douglas", "Zachary", "Peter", "Kyle", "Noah",
            "Ethan", "Jeremy", "Walter", "Christian", "Keith", "Roger", "Terry", "Austin",
            "Sean", "Gerald", "Carl", "Harold", "Dylan", "Arthur", "Lawrence", "Jordan",
            "Jesse", "Bryan", "Billy", "Bruce", "Gabriel", "Juan", "Albert", "Willie",
            "Elijah", "Logan", "Joe", "Mason", "Roy", "Ralph", "Eugene", "Russell",
            "Bobby", "Victor", "Martin", "Ernest", "Phillip", "Todd", "Craig",
        ]
    }

    fn female_first_names() -> &'static [&'static str] {
        &[
            "Mary", "Patricia", "Jennifer", "Linda", "Barbara", "Elizabeth", "Susan",
            "Jessica", "Sarah", "Karen", "Lisa", "Nancy", "Betty", "Margaret", "Sandra",
            "Ashley", "Kimberly", "Emily", "Donna", "Michelle", "Carol", "Amanda", "Dorothy",
            "Melissa", "Deborah", "Stephanie", "Rebecca", "Sharon", "Laura", "Cynthia",
            "Kathleen", "Amy", "Angela", "Shirley", "Anna", "Brenda", "Pamela", "Emma",
            "Nicole", "Helen", "Samantha", "Katherine", "Christine", "Debra", "Rachel",
            "Carolyn", "Janet", "Catherine", "Maria", "Heather", "Diane", "Ruth", "Julie",
            "Olivia", "Joyce", "Virginia", "Victoria", "Kelly", "Lauren", "Christina",
            "Joan", "Evelyn", "Judith", "Megan", "Andrea", "Cheryl", "Hannah", "Jacqueline",
            "Martha", "Gloria", "Teresa", "Ann", "Sara", "Madison", "Frances", "Kathryn",
            "Janice", "Jean", "Abigail", "Alice", "Judy", "Sophia", "Grace", "Denise",
            "Amber", "Doris", "Marilyn", "Danielle", "Beverly", "Isabella", "Theresa",
            "Diana", "Natalie", "Brittany", "Charlotte", "Marie", "Kayla", "Alexis",
            "Lori", "Ava", "Mia", "Sofia", "Ella",
        ]
    }

    fn last_names() -> &'static [&'static str] {
        &[
            "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
            "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
            "Thomas", "Taylor", "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson",
            "White", "Harris", "Sanchez", "Clark", "Ramirez", "Lewis", "Robinson",
            "Walker", "Young", "Allen", "King", "Wright", "Scott", "Torres", "Nguyen",
            "Hill", "Flores", "Green", "Adams", "Nelson", "Baker", "Hall", "Rivera",
            "Campbell", "Mitchell", "Carter", "Roberts", "Gomez", "Phillips", "Evans",
            "Turner", "Diaz", "Parker", "Cruz", "Edwards", "Collins", "Reyes", "Stewart",
            "Morris", "Morales", "Murphy", "Cook", "Rogers", "Gutierrez", "Ortiz", "Morgan",
            "Cooper", "Peterson", "Bailey", "Reed", "Kelly", "Howard", "Ramos", "Kim",
            "Cox", "Ward", "Richardson", "Watson", "Brooks", "Chavez", "Wood", "James",
            "Bennett", "Gray", "Mendoza", "Ruiz", "Hughes", "Price", "Alvarez", "Castillo",
            "Sanders", "Patel", "Myers", "Long", "Ross", "Foster", "Jimenez", "Powell",
            "Jenkins", "Perry", "Russell", "Sullivan", "Bell", "Coleman", "Butler", "Henderson",
            "Barnes", "Gonzales", "Fisher", "Vasquez", "Simmons", "Romero", "Jordan", "Patterson",
            "Alexander", "Hamilton", "Graham", "Reynolds", "Griffin", "Wallace", "Moreno", "West",
            "Cole", "Hayes", "Bryant", "Herrera", "Gibson", "Ellis", "Tran", "Medina",
            "Aguilar", "Stevens", "Murray", "Ford", "Castro", "Marshall", "Owens", "Harrison",
            "Fernandez", "McDonald", "Woods", "Washington", "Kennedy", "Wells", "Vargas", "Henry",
            "Chen", "Freeman", "Webb", "Tucker", "Guzman", "Hawkins", "Crawford", "Olson",
            "Simpson", "Porter", "Hunter", "Gordon", "Mendez", "Silva", "Shaw", "Snyder",
            "Mason", "Dixon", "Munoz", "Hunt", "Hicks", "Holmes", "Palmer", "Wagner",
            "Black", "Robertson", "Boyd", "Rose", "Stone", "Salazar", "Fox", "Warren",
            "Mills", "Meyer", "Rice", "Schmidt", "Garza", "Daniels", "Hampton", "Nichols",
            "Stephens", "Soto", "Weaver", "Ryan", "Gardner", "Payne", "Grant", "Dunn",
        ]
    }

    fn business_prefixes() -> &'static [&'static str] {
        &[
            "Premier", "Elite", "First", "Superior", "Quality", "Professional",
            "Advanced", "Reliable", "Trusted", "Expert", "Precision", "Metro",
            "City", "Valley", "Mountain", "Coastal", "Central", "United",
            "American", "National", "Global", "Universal", "Prime", "Best",
        ]
    }

    fn business_suffixes() -> &'static [&'static str] {
        &[
            "LLC", "Inc", "Corp", "Co", "Group", "Associates", "Partners",
            "Solutions", "Services", "Enterprises", "Industries", "Holdings",
            "Ventures", "Consulting", "Systems", "Technologies", "Capital",
        ]
    }

    fn business_industries() -> &'static [&'static str] {
        &[
            "Construction", "Plumbing", "Electric", "HVAC", "Landscaping",
            "Consulting", "Marketing", "Design", "Development", "Accounting",
            "Legal", "Medical", "Dental", "Auto", "Retail", "Restaurant",
            "Cleaning", "Security", "Transportation", "Logistics", "Real Estate",
            "Insurance", "Financial", "Technology", "Manufacturing", "Wholesale",
        ]
    }

    fn city_prefixes() -> &'static [&'static str] {
        &["North", "South", "East", "West", "New", "Lake", "Port", "Fort", "Mount"]
    }

    fn city_suffixes() -> &'static [&'static str] {
        &["ville", "town", "burgh", "field", "port", "ton", "wood", "view", "land", "berg"]
    }
}
