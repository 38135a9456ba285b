//! Static word lists used by the entity tagger.
//!
//! Every entry is lowercase. Multi-word entries are joined by single spaces
//! and matched against consecutive tokens.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Longest phrase, in tokens, found in [`PLACES`] or [`ORGANIZATIONS`].
pub(crate) const MAX_PHRASE_TOKENS: usize = 4;

pub(crate) const PLACES: &[&str] = &[
    // Australia
    "australia",
    "adelaide",
    "albany",
    "alice springs",
    "ballarat",
    "bendigo",
    "brisbane",
    "broome",
    "bundaberg",
    "bunbury",
    "cairns",
    "canberra",
    "darwin",
    "dubbo",
    "geelong",
    "geraldton",
    "gladstone",
    "gold coast",
    "hobart",
    "kalgoorlie",
    "launceston",
    "mackay",
    "melbourne",
    "mildura",
    "new south wales",
    "newcastle",
    "northern territory",
    "nsw",
    "nt",
    "perth",
    "port augusta",
    "port hedland",
    "queensland",
    "qld",
    "rockhampton",
    "south australia",
    "sunshine coast",
    "sydney",
    "tasmania",
    "toowoomba",
    "townsville",
    "victoria",
    "wagga wagga",
    "western australia",
    "wollongong",
    // Countries and regions
    "afghanistan",
    "africa",
    "america",
    "argentina",
    "asia",
    "bali",
    "bangladesh",
    "brazil",
    "britain",
    "burma",
    "cambodia",
    "canada",
    "chile",
    "china",
    "east timor",
    "egypt",
    "england",
    "europe",
    "fiji",
    "france",
    "germany",
    "greece",
    "india",
    "indonesia",
    "iran",
    "iraq",
    "ireland",
    "israel",
    "italy",
    "japan",
    "kenya",
    "korea",
    "lebanon",
    "libya",
    "malaysia",
    "mexico",
    "middle east",
    "myanmar",
    "nauru",
    "nepal",
    "new zealand",
    "nigeria",
    "north korea",
    "pakistan",
    "palestine",
    "papua new guinea",
    "philippines",
    "png",
    "russia",
    "samoa",
    "saudi arabia",
    "scotland",
    "singapore",
    "solomon islands",
    "south africa",
    "south korea",
    "spain",
    "sri lanka",
    "sudan",
    "syria",
    "taiwan",
    "thailand",
    "timor",
    "tonga",
    "turkey",
    "uk",
    "ukraine",
    "united kingdom",
    "united states",
    "usa",
    "vanuatu",
    "vietnam",
    "wales",
    "zimbabwe",
    // Cities
    "auckland",
    "baghdad",
    "bangkok",
    "beijing",
    "berlin",
    "chicago",
    "delhi",
    "dubai",
    "gaza",
    "hong kong",
    "jakarta",
    "jerusalem",
    "kabul",
    "london",
    "los angeles",
    "moscow",
    "mumbai",
    "new york",
    "paris",
    "rome",
    "san francisco",
    "seoul",
    "shanghai",
    "tokyo",
    "washington",
    "wellington",
];

pub(crate) const ORGANIZATIONS: &[&str] = &[
    "abc",
    "accc",
    "afl",
    "afp",
    "al qaeda",
    "amazon",
    "anz",
    "apple",
    "asic",
    "asio",
    "asx",
    "bbc",
    "bhp",
    "bhp billiton",
    "boeing",
    "cba",
    "cia",
    "cnn",
    "coles",
    "commonwealth bank",
    "csiro",
    "eu",
    "european union",
    "facebook",
    "fbi",
    "fifa",
    "google",
    "greenpeace",
    "hamas",
    "hezbollah",
    "imf",
    "ioc",
    "microsoft",
    "nab",
    "nasa",
    "nato",
    "nrl",
    "opec",
    "qantas",
    "rba",
    "red cross",
    "reserve bank",
    "rio tinto",
    "rspca",
    "salvation army",
    "taliban",
    "telstra",
    "tesla",
    "toyota",
    "twitter",
    "un",
    "unicef",
    "united nations",
    "virgin australia",
    "westpac",
    "wikileaks",
    "woolworths",
    "world bank",
];

/// Trailing words that turn a preceding name into an organization.
pub(crate) const ORG_SUFFIXES: &[&str] = &[
    "agency",
    "airlines",
    "airways",
    "association",
    "authority",
    "bank",
    "club",
    "co",
    "commission",
    "company",
    "corp",
    "corporation",
    "council",
    "department",
    "fc",
    "foundation",
    "group",
    "holdings",
    "inc",
    "industries",
    "institute",
    "limited",
    "llc",
    "ltd",
    "ministry",
    "motors",
    "party",
    "plc",
    "society",
    "union",
    "university",
];

/// Titles that introduce a person's name.
pub(crate) const HONORIFICS: &[&str] = &[
    "captain",
    "coach",
    "dame",
    "dr",
    "gov",
    "governor",
    "judge",
    "king",
    "lord",
    "mayor",
    "minister",
    "mr",
    "mrs",
    "ms",
    "pm",
    "pope",
    "premier",
    "president",
    "prince",
    "princess",
    "prof",
    "professor",
    "queen",
    "rev",
    "sen",
    "senator",
    "sir",
];

/// Common given names that are not also everyday English words.
pub(crate) const GIVEN_NAMES: &[&str] = &[
    "alan", "alexander", "andrew", "angela", "anna", "anthony", "barack", "ben", "boris",
    "brendan", "bruce", "charles", "chris", "christopher", "daniel", "david", "donald",
    "elizabeth", "emma", "fiona", "george", "hillary", "jacinda", "james", "jane", "jason",
    "jennifer", "jessica", "jim", "joe", "john", "julia", "julie", "karen", "kevin", "kim",
    "kylie", "lisa", "malcolm", "margaret", "maria", "mary", "matthew", "michael", "nicola",
    "paul", "peter", "rachel", "richard", "robert", "sarah", "scott", "shane", "simon",
    "stephen", "steve", "susan", "thomas", "tony", "vladimir", "wayne", "xi",
];

/// Function words that never start or continue a name.
pub(crate) const STOP_WORDS: &[&str] = &[
    "a", "about", "after", "against", "all", "an", "and", "are", "as", "at", "be", "been",
    "before", "but", "by", "can", "could", "did", "do", "does", "for", "from", "had", "has",
    "have", "he", "her", "his", "how", "i", "if", "in", "into", "is", "it", "its", "new",
    "no", "not", "of", "off", "on", "or", "our", "out", "over", "says", "she", "should",
    "so", "than", "that", "the", "their", "they", "this", "to", "up", "us", "was", "we",
    "were", "what", "when", "where", "who", "why", "will", "with", "would", "you",
];

/// Common headline verbs and nouns that end a lowercase name.
pub(crate) const NON_NAME_WORDS: &[&str] = &[
    "accuses", "announces", "appeals", "asks", "backs", "blames", "calls", "claims", "denies",
    "faces", "gets", "gives", "joins", "makes", "meets", "named", "opens", "plans", "quits",
    "seeks", "sets", "signs", "slams", "takes", "tells", "told", "urges", "visits", "vows",
    "wants",
];

fn set(words: &'static [&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

pub(crate) static PLACE_SET: LazyLock<HashSet<&'static str>> = LazyLock::new(|| set(PLACES));
pub(crate) static ORG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| set(ORGANIZATIONS));
pub(crate) static ORG_SUFFIX_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| set(ORG_SUFFIXES));
pub(crate) static HONORIFIC_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| set(HONORIFICS));
pub(crate) static GIVEN_NAME_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| set(GIVEN_NAMES));
pub(crate) static NON_NAME_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| set(NON_NAME_WORDS));
pub(crate) static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| set(STOP_WORDS));
