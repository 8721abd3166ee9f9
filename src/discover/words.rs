//! Built-in candidate words for random handle sampling
//!
//! Common first names and everyday words. Entries shorter than the minimum
//! handle length are kept here for completeness and dropped when the pool
//! is built.

/// Common first names
pub const COMMON_NAMES: &[&str] = &[
    // A-D
    "aaron", "abigail", "adrian", "aiden", "alexander", "alexis", "alice", "amanda",
    "amelia", "andrea", "andrew", "angela", "anthony", "ariana", "arthur", "audrey",
    "austin", "bella", "benjamin", "bianca", "blake", "brandon", "brian", "brooke",
    "caleb", "camila", "carlos", "caroline", "carter", "charles", "charlotte", "chloe",
    "christian", "claire", "connor", "daniel", "david", "delilah", "dominic", "dylan",
    // E-J
    "eleanor", "elena", "elijah", "elizabeth", "ellie", "emily", "emma", "ethan",
    "evelyn", "ezekiel", "felix", "fiona", "gabriel", "gavin", "grace", "hannah",
    "harper", "henry", "hudson", "hunter", "isaac", "isabella", "isaiah", "jackson",
    "jacob", "james", "jasmine", "jason", "jeremiah", "jessica", "jonathan", "joseph",
    "joshua", "julia", "julian", "justin",
    // K-N
    "kayla", "kevin", "kimberly", "landon", "layla", "leonardo", "liliana", "lincoln",
    "logan", "lucas", "lucy", "madison", "matthew", "maverick", "maya", "melanie",
    "michael", "miles", "mila", "nathan", "natalie", "nicholas", "noah", "nora",
    // O-Z
    "oliver", "olivia", "owen", "parker", "penelope", "peyton", "quinn", "rachel",
    "riley", "robert", "ruby", "ryan", "samantha", "samuel", "sarah", "savannah",
    "scarlett", "sebastian", "sophia", "stella", "sydney", "taylor", "thomas", "tristan",
    "valentina", "victoria", "violet", "william", "wyatt", "xavier", "zachary", "zoey",
];

/// Everyday words that make memorable handles
pub const COMMON_WORDS: &[&str] = &[
    // Nature
    "amber", "aurora", "autumn", "blossom", "breeze", "canyon", "cedar", "clover",
    "comet", "coral", "crystal", "desert", "ember", "forest", "frost", "galaxy",
    "glacier", "harbor", "island", "jungle", "lagoon", "maple", "meadow", "meteor",
    "misty", "nebula", "ocean", "orchid", "pebble", "planet", "prairie", "rainbow",
    "river", "sahara", "shadow", "sierra", "spring", "storm", "summit", "sunset",
    "thunder", "tundra", "valley", "willow", "winter",
    // Animals
    "badger", "beaver", "condor", "coyote", "dolphin", "eagle", "falcon", "ferret",
    "gecko", "heron", "jaguar", "koala", "lizard", "llama", "lobster", "mantis",
    "otter", "panda", "panther", "parrot", "pelican", "penguin", "puffin", "rabbit",
    "raven", "salmon", "shark", "sparrow", "tiger", "toucan", "turtle", "walrus",
    "whale", "zebra",
    // Things & ideas
    "anchor", "arrow", "beacon", "bridge", "candle", "castle", "cipher", "compass",
    "cosmic", "dream", "echo", "engine", "fable", "garden", "glimmer", "harmony",
    "horizon", "journey", "lantern", "legend", "liberty", "lucky", "marble", "melody",
    "mirror", "mosaic", "nomad", "oasis", "orbit", "paper", "pixel", "pocket",
    "prism", "quest", "riddle", "rocket", "saga", "signal", "silver", "sketch",
    "spark", "spirit", "stellar", "story", "thistle", "timber", "token", "velvet",
    "vertex", "voyage", "wander", "wonder",
    // Food
    "apple", "biscuit", "butter", "cherry", "cinnamon", "cocoa", "cookie", "ginger",
    "honey", "lemon", "mango", "muffin", "nutmeg", "olive", "pepper", "pickle",
    "pretzel", "saffron", "sugar", "waffle",
];

/// All built-in candidates, names first
pub fn builtin_words() -> impl Iterator<Item = &'static str> {
    COMMON_NAMES.iter().chain(COMMON_WORDS.iter()).copied()
}
