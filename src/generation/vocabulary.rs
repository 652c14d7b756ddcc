use rand::Rng;

/// Word lists for one region. Every region fills every list, so no lookup
/// can come back empty.
#[derive(Debug)]
pub struct RegionalVocabulary {
    pub states: &'static [&'static str],
    pub place_suffixes: &'static [&'static str],
    pub hotel_prefixes: &'static [&'static str],
    pub restaurant_types: &'static [&'static str],
    pub local_dishes: &'static [&'static str],
    pub cuisines: &'static [&'static str],
    /// Honorifics prepended to build a localized (Devanagari) name.
    pub local_prefixes: &'static [&'static str],
}

pub static NORTH: RegionalVocabulary = RegionalVocabulary {
    states: &[
        "Punjab",
        "Haryana",
        "Himachal Pradesh",
        "Uttarakhand",
        "Uttar Pradesh",
        "Rajasthan",
        "Delhi",
    ],
    place_suffixes: &["Ghat", "Mandir", "Fort", "Palace", "Garden", "Bazaar", "Gate", "Chowk"],
    hotel_prefixes: &["Hotel", "Royal", "Heritage", "Palace", "Grand", "The", "Crown"],
    restaurant_types: &["Dhaba", "Restaurant", "Punjabi", "Tandoor", "Mughlai"],
    local_dishes: &[
        "Dal Makhani",
        "Butter Chicken",
        "Naan",
        "Paratha",
        "Lassi",
        "Chole Bhature",
        "Rajma",
    ],
    cuisines: &["North Indian", "Punjabi", "Mughlai", "Tandoor", "Chinese", "Continental"],
    local_prefixes: &["श्री", "गुरु", "राजा"],
};

pub static SOUTH: RegionalVocabulary = RegionalVocabulary {
    states: &["Tamil Nadu", "Karnataka", "Kerala", "Andhra Pradesh", "Telangana"],
    place_suffixes: &["Temple", "Kovil", "Palace", "Beach", "Hills", "Falls", "Backwaters"],
    hotel_prefixes: &["Hotel", "Resort", "Beach", "Heritage", "The", "Royal", "Paradise"],
    restaurant_types: &["Restaurant", "Mess", "Hotel", "Udupi", "Chettinad"],
    local_dishes: &[
        "Dosa",
        "Idli",
        "Sambar",
        "Rasam",
        "Biryani",
        "Fish Curry",
        "Payasam",
        "Uttapam",
    ],
    cuisines: &[
        "South Indian",
        "Tamil",
        "Kerala",
        "Udupi",
        "Chettinad",
        "Andhra",
        "Hyderabadi",
    ],
    local_prefixes: &["श्री", "स्वामी", "राजा"],
};

pub static EAST: RegionalVocabulary = RegionalVocabulary {
    states: &["West Bengal", "Odisha", "Jharkhand", "Bihar", "Assam", "Tripura"],
    place_suffixes: &["Kali Mandir", "Ghat", "Bazaar", "Museum", "Park", "Bridge"],
    hotel_prefixes: &["Hotel", "The", "Royal", "Heritage", "Bengal", "Eastern"],
    restaurant_types: &["Restaurant", "Bengali", "Fish", "Sweet Shop"],
    local_dishes: &[
        "Fish Curry",
        "Rice",
        "Mishti Doi",
        "Rosogolla",
        "Sandesh",
        "Hilsa",
        "Panta Bhat",
    ],
    cuisines: &["Bengali", "Odia", "Assamese", "Chinese", "Mughlai"],
    local_prefixes: &["श्री", "महा", "बाबा"],
};

pub static WEST: RegionalVocabulary = RegionalVocabulary {
    states: &["Maharashtra", "Gujarat", "Goa", "Rajasthan"],
    place_suffixes: &["Beach", "Fort", "Market", "Temple", "Gardens", "Chowpatty"],
    hotel_prefixes: &["Hotel", "Beach", "Sea", "Heritage", "The", "Royal", "Taj"],
    restaurant_types: &["Restaurant", "Gujarati", "Maharashtrian", "Goan", "Seafood"],
    local_dishes: &[
        "Vada Pav",
        "Pav Bhaji",
        "Dhokla",
        "Thali",
        "Fish Curry",
        "Modak",
        "Puran Poli",
    ],
    cuisines: &[
        "Gujarati",
        "Maharashtrian",
        "Goan",
        "Rajasthani",
        "Street Food",
        "Seafood",
    ],
    local_prefixes: &["श्री", "छत्रपति", "राजा"],
};

/// Settlement-name stems shared by every region.
pub static SETTLEMENT_STEMS: &[&str] = &[
    "Anandpur",
    "Suryapur",
    "Shantinagar",
    "Ramgarh",
    "Kamalpura",
    "Mayurbhanj",
    "Chandanpur",
    "Sukhdevpur",
    "Narsinghpur",
    "Rajendranagar",
    "Krishnapura",
    "Govindpur",
    "Balarampur",
    "Shivapur",
    "Ganeshnagar",
    "Lakshmipur",
    "Saraswatipur",
    "Hanumangarh",
    "Bhimpur",
];

/// Picks one word uniformly. Tables are static and non-empty.
pub fn pick<R: Rng + ?Sized>(rng: &mut R, words: &[&'static str]) -> &'static str {
    words[rng.gen_range(0..words.len())]
}

pub fn pick_settlement<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, SETTLEMENT_STEMS)
}

/// Owned copies of the first `n` words, for list-valued entity fields.
pub fn first_n(words: &[&'static str], n: usize) -> Vec<String> {
    words.iter().take(n).map(|w| w.to_string()).collect()
}
