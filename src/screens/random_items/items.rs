//! Sample item generation.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// One list entry: a name shown in the list and a longer description shown
/// on the detail screen.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    pub name: String,
    pub description: String,
}

const WORDS: &[&str] = &[
    "anchor", "basil", "cobalt", "drift", "ember", "fathom", "garnet",
    "harbor", "indigo", "juniper", "kestrel", "lantern", "meadow", "nimbus",
    "orchard", "pebble", "quartz", "ripple", "saffron", "thicket", "umber",
    "vesper", "willow", "xylem", "yarrow", "zenith", "alder", "birch",
    "cinder", "dapple", "echo", "fennel", "gully", "heather", "inkwell",
    "jetty", "knoll", "linnet", "marrow", "nettle", "osprey", "prairie",
    "quill", "russet", "sorrel", "tundra", "upland", "vellum",
];

const SENTENCES: &[&str] = &[
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
    "Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua.",
    "Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris.",
    "Duis aute irure dolor in reprehenderit in voluptate velit esse.",
    "Excepteur sint occaecat cupidatat non proident, sunt in culpa.",
    "Qui officia deserunt mollit anim id est laborum.",
    "Nisi ut aliquip ex ea commodo consequat.",
    "Cillum dolore eu fugiat nulla pariatur.",
];

/// Generate `count` items with dictionary-word names and one to four
/// lorem-ipsum sentences as descriptions. A fixed `seed` makes the set
/// reproducible run to run.
pub fn generate_items(count: usize, seed: Option<u64>) -> Vec<Item> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    (0..count)
        .map(|_| {
            let word = WORDS.choose(&mut rng).copied().unwrap_or("item");
            let sentences = rng.gen_range(1..=4);
            Item {
                name: capitalize(word),
                description: lorem(&mut rng, sentences),
            }
        })
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn lorem(rng: &mut StdRng, sentences: usize) -> String {
    (0..sentences)
        .map(|_| SENTENCES.choose(rng).copied().unwrap_or(SENTENCES[0]))
        .collect::<Vec<_>>()
        .join(" ")
}
