//! Built-in random sentence generation for `--random-sentence` mode.
//!
//! Produces short "The <adjective> <noun> <verb> the <noun>." sentences
//! from fixed word lists. Sentences always end with a period; the image
//! command strips it for filename purposes only, never before hashing.

use rand::Rng;

const ADJECTIVES: &[&str] = &[
    "quiet", "crimson", "hollow", "gentle", "rusty", "vivid", "pale", "curious", "restless",
    "amber", "distant", "mellow", "brisk", "faded", "luminous", "stubborn",
];

const NOUNS: &[&str] = &[
    "river", "lantern", "fox", "mountain", "clock", "garden", "sparrow", "harbor", "mirror",
    "engine", "meadow", "compass", "violin", "glacier", "ember", "archive",
];

// Third-person singular, to agree with the singular subject.
const VERBS: &[&str] = &[
    "follows", "ignores", "circles", "outlasts", "remembers", "crosses", "shadows", "carries",
    "awakens", "measures", "repaints", "borrows",
];

/// Generate one random sentence.
pub fn simple_sentence() -> String {
    let mut rng = rand::thread_rng();
    format!(
        "The {} {} {} the {}.",
        pick(&mut rng, ADJECTIVES),
        pick(&mut rng, NOUNS),
        pick(&mut rng, VERBS),
        pick(&mut rng, NOUNS),
    )
}

fn pick<'a, R: Rng>(rng: &mut R, words: &'a [&'a str]) -> &'a str {
    words[rng.gen_range(0..words.len())]
}
