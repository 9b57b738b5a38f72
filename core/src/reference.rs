//! Static US reference tables: state codes, full names, representative cities.
//!
//! These are inputs to the resolver, not part of its logic. Order matters:
//! random state selection indexes into STATES, so appending is safe but
//! reordering changes which state a given seed selects.

pub struct StateInfo {
    pub code: &'static str,
    pub name: &'static str,
    pub cities: &'static [&'static str],
}

pub static STATES: &[StateInfo] = &[
    StateInfo { code: "AL", name: "Alabama", cities: &["Birmingham", "Montgomery", "Mobile", "Huntsville", "Tuscaloosa"] },
    StateInfo { code: "AK", name: "Alaska", cities: &["Anchorage", "Fairbanks", "Juneau", "Sitka", "Ketchikan"] },
    StateInfo { code: "AZ", name: "Arizona", cities: &["Phoenix", "Tucson", "Mesa", "Chandler", "Scottsdale", "Flagstaff"] },
    StateInfo { code: "AR", name: "Arkansas", cities: &["Little Rock", "Fort Smith", "Fayetteville", "Springdale", "Jonesboro"] },
    StateInfo { code: "CA", name: "California", cities: &["Los Angeles", "San Diego", "San Jose", "San Francisco", "Fresno", "Sacramento", "Oakland"] },
    StateInfo { code: "CO", name: "Colorado", cities: &["Denver", "Colorado Springs", "Aurora", "Fort Collins", "Boulder"] },
    StateInfo { code: "CT", name: "Connecticut", cities: &["Bridgeport", "New Haven", "Hartford", "Stamford", "Waterbury"] },
    StateInfo { code: "DE", name: "Delaware", cities: &["Wilmington", "Dover", "Newark", "Middletown", "Smyrna"] },
    StateInfo { code: "DC", name: "District of Columbia", cities: &["Washington"] },
    StateInfo { code: "FL", name: "Florida", cities: &["Jacksonville", "Miami", "Tampa", "Orlando", "St. Petersburg", "Tallahassee"] },
    StateInfo { code: "GA", name: "Georgia", cities: &["Atlanta", "Augusta", "Columbus", "Savannah", "Athens"] },
    StateInfo { code: "HI", name: "Hawaii", cities: &["Honolulu", "Hilo", "Kailua", "Pearl City", "Kapolei"] },
    StateInfo { code: "ID", name: "Idaho", cities: &["Boise", "Meridian", "Nampa", "Idaho Falls", "Pocatello"] },
    StateInfo { code: "IL", name: "Illinois", cities: &["Chicago", "Aurora", "Naperville", "Joliet", "Rockford", "Springfield"] },
    StateInfo { code: "IN", name: "Indiana", cities: &["Indianapolis", "Fort Wayne", "Evansville", "South Bend", "Carmel"] },
    StateInfo { code: "IA", name: "Iowa", cities: &["Des Moines", "Cedar Rapids", "Davenport", "Sioux City", "Iowa City"] },
    StateInfo { code: "KS", name: "Kansas", cities: &["Wichita", "Overland Park", "Kansas City", "Olathe", "Topeka"] },
    StateInfo { code: "KY", name: "Kentucky", cities: &["Louisville", "Lexington", "Bowling Green", "Owensboro", "Covington"] },
    StateInfo { code: "LA", name: "Louisiana", cities: &["New Orleans", "Baton Rouge", "Shreveport", "Lafayette", "Lake Charles"] },
    StateInfo { code: "ME", name: "Maine", cities: &["Portland", "Lewiston", "Bangor", "South Portland", "Auburn"] },
    StateInfo { code: "MD", name: "Maryland", cities: &["Baltimore", "Frederick", "Rockville", "Gaithersburg", "Annapolis"] },
    StateInfo { code: "MA", name: "Massachusetts", cities: &["Boston", "Worcester", "Springfield", "Cambridge", "Lowell"] },
    StateInfo { code: "MI", name: "Michigan", cities: &["Detroit", "Grand Rapids", "Warren", "Ann Arbor", "Lansing"] },
    StateInfo { code: "MN", name: "Minnesota", cities: &["Minneapolis", "St. Paul", "Rochester", "Duluth", "Bloomington"] },
    StateInfo { code: "MS", name: "Mississippi", cities: &["Jackson", "Gulfport", "Southaven", "Hattiesburg", "Biloxi"] },
    StateInfo { code: "MO", name: "Missouri", cities: &["Kansas City", "St. Louis", "Springfield", "Columbia", "Independence"] },
    StateInfo { code: "MT", name: "Montana", cities: &["Billings", "Missoula", "Great Falls", "Bozeman", "Helena"] },
    StateInfo { code: "NE", name: "Nebraska", cities: &["Omaha", "Lincoln", "Bellevue", "Grand Island", "Kearney"] },
    StateInfo { code: "NV", name: "Nevada", cities: &["Las Vegas", "Henderson", "Reno", "North Las Vegas", "Carson City"] },
    StateInfo { code: "NH", name: "New Hampshire", cities: &["Manchester", "Nashua", "Concord", "Dover", "Portsmouth"] },
    StateInfo { code: "NJ", name: "New Jersey", cities: &["Newark", "Jersey City", "Paterson", "Elizabeth", "Trenton"] },
    StateInfo { code: "NM", name: "New Mexico", cities: &["Albuquerque", "Las Cruces", "Rio Rancho", "Santa Fe", "Roswell"] },
    StateInfo { code: "NY", name: "New York", cities: &["New York", "Buffalo", "Rochester", "Yonkers", "Syracuse", "Albany"] },
    StateInfo { code: "NC", name: "North Carolina", cities: &["Charlotte", "Raleigh", "Greensboro", "Durham", "Winston-Salem"] },
    StateInfo { code: "ND", name: "North Dakota", cities: &["Fargo", "Bismarck", "Grand Forks", "Minot", "West Fargo"] },
    StateInfo { code: "OH", name: "Ohio", cities: &["Columbus", "Cleveland", "Cincinnati", "Toledo", "Akron", "Dayton"] },
    StateInfo { code: "OK", name: "Oklahoma", cities: &["Oklahoma City", "Tulsa", "Norman", "Broken Arrow", "Edmond"] },
    StateInfo { code: "OR", name: "Oregon", cities: &["Portland", "Salem", "Eugene", "Gresham", "Bend"] },
    StateInfo { code: "PA", name: "Pennsylvania", cities: &["Philadelphia", "Pittsburgh", "Allentown", "Erie", "Reading", "Harrisburg"] },
    StateInfo { code: "RI", name: "Rhode Island", cities: &["Providence", "Warwick", "Cranston", "Pawtucket", "Newport"] },
    StateInfo { code: "SC", name: "South Carolina", cities: &["Charleston", "Columbia", "North Charleston", "Greenville", "Rock Hill"] },
    StateInfo { code: "SD", name: "South Dakota", cities: &["Sioux Falls", "Rapid City", "Aberdeen", "Brookings", "Pierre"] },
    StateInfo { code: "TN", name: "Tennessee", cities: &["Nashville", "Memphis", "Knoxville", "Chattanooga", "Clarksville"] },
    StateInfo { code: "TX", name: "Texas", cities: &["Houston", "San Antonio", "Dallas", "Austin", "Fort Worth", "El Paso"] },
    StateInfo { code: "UT", name: "Utah", cities: &["Salt Lake City", "West Valley City", "Provo", "Ogden", "St. George"] },
    StateInfo { code: "VT", name: "Vermont", cities: &["Burlington", "South Burlington", "Rutland", "Barre", "Montpelier"] },
    StateInfo { code: "VA", name: "Virginia", cities: &["Virginia Beach", "Norfolk", "Chesapeake", "Richmond", "Arlington"] },
    StateInfo { code: "WA", name: "Washington", cities: &["Seattle", "Spokane", "Tacoma", "Vancouver", "Bellevue", "Olympia"] },
    StateInfo { code: "WV", name: "West Virginia", cities: &["Charleston", "Huntington", "Morgantown", "Parkersburg", "Wheeling"] },
    StateInfo { code: "WI", name: "Wisconsin", cities: &["Milwaukee", "Madison", "Green Bay", "Kenosha", "Racine"] },
    StateInfo { code: "WY", name: "Wyoming", cities: &["Cheyenne", "Casper", "Laramie", "Gillette", "Rock Springs"] },
];

pub fn state_info(code: &str) -> Option<&'static StateInfo> {
    STATES.iter().find(|s| s.code == code)
}

pub fn state_full_name(code: &str) -> Option<&'static str> {
    state_info(code).map(|s| s.name)
}

pub fn cities_for_state(code: &str) -> Option<&'static [&'static str]> {
    state_info(code).map(|s| s.cities)
}

pub fn is_known_state(code: &str) -> bool {
    state_info(code).is_some()
}
