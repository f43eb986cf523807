use crate::alphabet::{Alphabet, Bytes, CharMap, Lowercase, Unicode};

#[test]
fn test_lowercase() {
    assert_eq!(26, Lowercase.len());
    assert_eq!(Some(0), Lowercase.index('a'));
    assert_eq!(Some(25), Lowercase.index('z'));
    assert_eq!(None, Lowercase.index('A'));
    assert_eq!(None, Lowercase.index('`'));
    assert_eq!(None, Lowercase.index('{'));
    assert_eq!(None, Lowercase.index('é'));
}

#[test]
fn test_bytes_and_unicode() {
    assert_eq!(256, Bytes.len());
    assert_eq!(Some(255), Bytes.index(0xff));
    assert_eq!(0x110000, Unicode.len());
    assert_eq!(Some(0x10ffff), Unicode.index('\u{10ffff}'));
    assert_eq!(Some(0x3042), Unicode.index('あ'));
}

#[test]
fn test_char_map_dense() {
    let mapper = CharMap::new("gattaca".chars());
    assert!(mapper.is_dense());
    assert_eq!(4, mapper.len());
    assert_eq!(Some(0), mapper.index('g'));
    assert_eq!(Some(1), mapper.index('a'));
    assert_eq!(Some(2), mapper.index('t'));
    assert_eq!(Some(3), mapper.index('c'));
    assert_eq!(None, mapper.index('b'));
    assert_eq!(None, mapper.index('z')); // out-of-range
}

#[test]
fn test_char_map_hashed() {
    let mapper = CharMap::new("猫犬鳥".chars());
    assert!(!mapper.is_dense());
    assert_eq!(3, mapper.len());
    assert_eq!(Some(0), mapper.index('猫'));
    assert_eq!(Some(2), mapper.index('鳥'));
    assert_eq!(None, mapper.index('魚'));
    assert_eq!(None, mapper.index('a'));
}

#[test]
fn test_char_map_empty() {
    let mapper = CharMap::new("".chars());
    assert!(mapper.is_empty());
    assert_eq!(None, mapper.index('a'));
}
