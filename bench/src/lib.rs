//! Generated corpora shared by the benchmarks and the memory report.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEED: u64 = 20221019;

/// Returns `n` distinct lowercase words of 3 to 12 letters, sorted.
///
/// Letters are drawn from a skewed distribution so that words share prefixes
/// the way natural vocabularies do.
pub fn generate_patterns(n: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut patterns = BTreeSet::new();
    while patterns.len() < n {
        let len = rng.gen_range(3..=12);
        patterns.insert(random_word(&mut rng, len));
    }
    patterns.into_iter().collect()
}

/// Returns `n` lowercase haystacks of `len` letters each.
pub fn generate_haystacks(n: usize, len: usize) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(SEED + 1);
    (0..n).map(|_| random_word(&mut rng, len)).collect()
}

fn random_word<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| {
            // min of two draws favors the head of the alphabet
            let c = rng.gen_range(0..26u8).min(rng.gen_range(0..26u8));
            char::from(b'a' + c)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_patterns() {
        let patterns = generate_patterns(1000);
        assert_eq!(1000, patterns.len());
        assert!(patterns.windows(2).all(|w| w[0] < w[1]));
        assert!(patterns
            .iter()
            .all(|p| (3..=12).contains(&p.len()) && p.bytes().all(|b| b.is_ascii_lowercase())));
        assert_eq!(patterns, generate_patterns(1000));
    }
}
