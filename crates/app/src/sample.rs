//! Sample text generation for the walkthrough.
//!
//! When no input is specified, we generate text with interesting
//! compression characteristics: a skewed letter distribution (roughly
//! English-shaped) broken into words and sentences, so the frequency
//! table and code lengths are worth looking at.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Letters weighted so common ones dominate, like running text does.
/// Skew is what gives Huffman coding something to exploit.
const WEIGHTED_LETTERS: &[(char, u32)] = &[
    ('e', 12),
    ('t', 9),
    ('a', 8),
    ('o', 8),
    ('i', 7),
    ('n', 7),
    ('s', 6),
    ('h', 6),
    ('r', 6),
    ('d', 4),
    ('l', 4),
    ('u', 3),
    ('c', 3),
    ('m', 2),
    ('w', 2),
    ('f', 2),
    ('g', 2),
    ('y', 2),
    ('p', 2),
    ('b', 1),
    ('v', 1),
    ('k', 1),
];

/// Generate sample text of approximately `length` symbols.
///
/// Deterministic for a given seed. Words run 2-9 letters; sentences run
/// 4-11 words and end with a period.
pub fn generate_sample_text(seed: u64, length: usize) -> String {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let total_weight: u32 = WEIGHTED_LETTERS.iter().map(|&(_, w)| w).sum();

    let mut text = String::with_capacity(length);
    let mut words_left_in_sentence = rng.gen_range(4..=11);

    while text.chars().count() < length {
        let word_len = rng.gen_range(2..=9);
        for _ in 0..word_len {
            text.push(pick_letter(&mut rng, total_weight));
        }

        words_left_in_sentence -= 1;
        if words_left_in_sentence == 0 {
            text.push('.');
            words_left_in_sentence = rng.gen_range(4..=11);
        }
        text.push(' ');
    }

    // Trim to the requested symbol count
    text.chars().take(length).collect()
}

fn pick_letter(rng: &mut ChaCha8Rng, total_weight: u32) -> char {
    let mut roll = rng.gen_range(0..total_weight);
    for &(letter, weight) in WEIGHTED_LETTERS {
        if roll < weight {
            return letter;
        }
        roll -= weight;
    }
    // Weights sum to total_weight, so the loop always returns
    'e'
}
