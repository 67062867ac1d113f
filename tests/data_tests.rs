//! Integration tests for the static content tables
//!
//! These tests verify:
//! - Icon lookups for present and absent keys
//! - Icon key uniqueness
//! - Motto selection determinism and coverage

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use vorteks::data::{self, MOTTOS, MottoError};

#[test]
fn test_icon_keys_unique() {
    let keys: HashSet<&str> = data::icon_entries().iter().map(|(k, _)| *k).collect();
    assert_eq!(keys.len(), data::icon_entries().len());
    assert_eq!(data::icon_count(), keys.len());
}

#[test]
fn test_every_icon_key_resolves() {
    for (key, glyph) in data::icon_entries() {
        let found = data::glyph_for(key).unwrap();
        assert!(!found.is_empty());
        assert_eq!(found, *glyph);
    }
}

#[test]
fn test_missing_icon_is_none() {
    assert_eq!(data::glyph_for("definitely_not_an_ability"), None);
    assert!(data::require_glyph("definitely_not_an_ability").is_err());
}

#[test]
fn test_seeded_pick_is_reproducible() {
    let first = data::pick_motto(&mut ChaCha8Rng::seed_from_u64(2024)).unwrap();
    let second = data::pick_motto(&mut ChaCha8Rng::seed_from_u64(2024)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_picks_cover_every_motto() {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut seen = HashSet::new();

    for _ in 0..(MOTTOS.len() * 200) {
        seen.insert(data::pick_motto(&mut rng).unwrap());
        if seen.len() == MOTTOS.len() {
            break;
        }
    }

    assert_eq!(seen.len(), MOTTOS.len());
}

#[test]
fn test_empty_collection_error() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let empty: [&str; 0] = [];
    assert_eq!(
        data::pick_from(&empty, &mut rng),
        Err(MottoError::EmptyCollection)
    );
}

proptest! {
    #[test]
    fn prop_glyph_lookup_never_panics(key in ".*") {
        let glyph = data::glyph_for(&key);
        let known = data::icon_entries().iter().any(|(k, _)| *k == key);
        prop_assert_eq!(glyph.is_some(), known);
    }

    #[test]
    fn prop_pick_is_always_a_motto(seed in any::<u64>()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let motto = data::pick_motto(&mut rng).unwrap();
        prop_assert!(MOTTOS.contains(&motto));
    }

    #[test]
    fn prop_pick_is_deterministic(seed in any::<u64>()) {
        let a = data::pick_motto(&mut ChaCha8Rng::seed_from_u64(seed));
        let b = data::pick_motto(&mut ChaCha8Rng::seed_from_u64(seed));
        prop_assert_eq!(a, b);
    }
}
