use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

/// Start screen flavor text. The start screen picks one at random.
pub const MOTTOS: &[&str] = &[
    "Spin the odds. Break the cycle.",
    "Every card is a current. Ride it or drown.",
    "The vortex remembers every hand.",
    "Fortune favors the reckless.",
    "Draw fast. Think faster.",
    "One swap can turn the tide.",
    "Chaos is just strategy you haven't met yet.",
    "Hold nothing sacred. Discard everything.",
    "Your deck is a storm. Aim it.",
    "Peek, plot, pounce.",
    "Lucky is a skill.",
    "Stay in the eye of the storm.",
    "The last card standing writes the story.",
    "Shuffle up. Settle nothing.",
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MottoError {
    #[error("Cannot pick from an empty motto list")]
    EmptyCollection,
}

/// Pick a motto uniformly at random from [`MOTTOS`].
///
/// Reproducibility is entirely up to the caller's rng: the same seeded
/// generator yields the same motto.
pub fn pick_motto<R: Rng + ?Sized>(rng: &mut R) -> Result<&'static str, MottoError> {
    pick_from(MOTTOS, rng)
}

/// Pick uniformly from an arbitrary list.
///
/// # Errors
///
/// [`MottoError::EmptyCollection`] if `list` is empty.
pub fn pick_from<'a, R: Rng + ?Sized>(list: &[&'a str], rng: &mut R) -> Result<&'a str, MottoError> {
    list.choose(rng).copied().ok_or(MottoError::EmptyCollection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_mottos_not_empty() {
        assert!(!MOTTOS.is_empty());
        assert!(MOTTOS.iter().all(|m| !m.trim().is_empty()));
    }

    #[test]
    fn test_pick_is_member() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let motto = pick_motto(&mut rng).unwrap();
        assert!(MOTTOS.contains(&motto));
    }

    #[test]
    fn test_same_seed_same_pick() {
        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(pick_motto(&mut a), pick_motto(&mut b));
        }
    }

    #[test]
    fn test_empty_list_errors() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(pick_from(&[], &mut rng), Err(MottoError::EmptyCollection));
    }

    #[test]
    fn test_single_entry_always_picked() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..10 {
            assert_eq!(pick_from(&["only"], &mut rng), Ok("only"));
        }
    }
}
