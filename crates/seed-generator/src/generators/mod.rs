//! Field-level value generators.
//!
//! Each function draws one field value from the supplied RNG. The record
//! generator composes them and enforces the cross-field constraints.

pub mod identity;
pub mod timestamp;

pub use identity::{
    email_from_name, generate_full_name, generate_phone_number, PHONE_NUMBER_LENGTH,
};
pub use timestamp::generate_timestamp_between;

use rand::Rng;

/// Pick one element uniformly from a non-empty slice.
///
/// Callers guarantee the slice is non-empty (validated configuration or a
/// constant table).
pub fn pick<T: Copy, R: Rng>(rng: &mut R, values: &[T]) -> T {
    values[rng.gen_range(0..values.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_pick_stays_within_values() {
        let mut rng = StdRng::seed_from_u64(7);
        let values = [10, 20, 30];
        for _ in 0..100 {
            assert!(values.contains(&pick(&mut rng, &values)));
        }
    }

    #[test]
    fn test_pick_single_value() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick(&mut rng, &["only"]), "only");
    }
}
