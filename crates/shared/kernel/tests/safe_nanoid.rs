use plume_kernel::SAFE_ALPHABET;
use plume_kernel::safe_nanoid;

#[test]
fn default_ids_are_twelve_safe_characters() {
    let id = safe_nanoid!();
    assert_eq!(id.len(), 12);
    assert!(id.chars().all(|ch| SAFE_ALPHABET.contains(&ch)), "unexpected character in {id}");
}

#[test]
fn sized_ids_differ() {
    let first = safe_nanoid!(20);
    let second = safe_nanoid!(20);
    assert_eq!(first.len(), 20);
    assert_ne!(first, second);
}
