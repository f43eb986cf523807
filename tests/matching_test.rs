use acpma::alphabet::Lowercase;
use acpma::{AhoCorasickBuilder, LowercaseAhoCorasick, Transitions};

fn records(patterns: &[&str], haystack: &str) -> Vec<(String, usize, usize)> {
    let check = |transitions| {
        let pma = AhoCorasickBuilder::new(Lowercase)
            .transitions(transitions)
            .build(patterns)
            .unwrap();
        pma.find_overlapping(haystack)
            .unwrap()
            .into_iter()
            .map(|m| (patterns[m.pattern()].to_string(), m.start(), m.end()))
            .collect::<Vec<_>>()
    };
    let lazy = check(Transitions::Lazy);
    assert_eq!(lazy, check(Transitions::Eager));
    lazy
}

fn record(pattern: &str, start: usize, end: usize) -> (String, usize, usize) {
    (pattern.to_string(), start, end)
}

#[test]
fn test_suffix_of_another_pattern() {
    let found = records(&["he", "she"], "ashe");
    assert!(found.contains(&record("she", 1, 3)));
    assert!(found.contains(&record("he", 2, 3)));
    assert_eq!(2, found.len());
}

#[test]
fn test_overlapping_occurrences() {
    assert_eq!(vec![record("aa", 0, 1), record("aa", 1, 2)], records(&["aa"], "aaa"));
}

#[test]
fn test_common_prefix() {
    let found = records(&["he", "hers", "his"], "ahishers");
    assert!(found.contains(&record("his", 1, 3)));
    assert!(found.contains(&record("hers", 4, 7)));
    assert!(found.contains(&record("he", 4, 5)));
    assert_eq!(3, found.len());
}

#[test]
fn test_absent_pattern() {
    let found = records(&["fox", "dog", "cat"], "thequickbrownfoxjumpsoverthelazydog");
    assert_eq!(vec![record("fox", 13, 15), record("dog", 32, 34)], found);
}

#[test]
fn test_reuse_after_error() {
    let pma = LowercaseAhoCorasick::new(["fox"]).unwrap();
    assert!(pma.find_overlapping("the fox").is_err());
    assert_eq!(1, pma.find_overlapping("thefox").unwrap().len());
}

#[test]
fn test_reference_presentation() {
    let patterns = ["he", "she", "hers", "his"];
    let pma = LowercaseAhoCorasick::new(patterns).unwrap();
    let lines: Vec<_> = pma
        .find_overlapping("ahishers")
        .unwrap()
        .iter()
        .map(|m| {
            format!(
                "Word {} appears from {} to {}",
                patterns[m.pattern()],
                m.start(),
                m.end()
            )
        })
        .collect();
    assert_eq!(
        vec![
            "Word his appears from 1 to 3",
            "Word he appears from 4 to 5",
            "Word she appears from 3 to 5",
            "Word hers appears from 4 to 7",
        ],
        lines
    );
}
