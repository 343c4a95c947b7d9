//! Name, phone number and email generators.

use rand::Rng;

/// Number of digits in a generated phone number.
pub const PHONE_NUMBER_LENGTH: usize = 10;

/// Upper bound (exclusive) of the numeric suffix in generated names.
const NAME_SUFFIX_RANGE: u32 = 1_000_000;

/// Generate a name of the form `Employee <n>`.
pub fn generate_full_name<R: Rng>(rng: &mut R) -> String {
    format!("Employee {}", rng.gen_range(0..NAME_SUFFIX_RANGE))
}

/// Generate a phone number of [`PHONE_NUMBER_LENGTH`] decimal digits.
///
/// Leading zeros are kept so every number has the same length.
pub fn generate_phone_number<R: Rng>(rng: &mut R) -> String {
    (0..PHONE_NUMBER_LENGTH)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

/// Derive an email address by stripping whitespace from the name.
pub fn email_from_name(full_name: &str, domain: &str) -> String {
    let local: String = full_name.chars().filter(|c| !c.is_whitespace()).collect();
    format!("{local}@{domain}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_full_name_format() {
        let mut rng = StdRng::seed_from_u64(42);
        let name = generate_full_name(&mut rng);
        let suffix = name.strip_prefix("Employee ").unwrap();
        assert!(suffix.parse::<u32>().unwrap() < NAME_SUFFIX_RANGE);
    }

    #[test]
    fn test_phone_number_is_fixed_length_digits() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let phone = generate_phone_number(&mut rng);
            assert_eq!(phone.len(), PHONE_NUMBER_LENGTH);
            assert!(phone.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_email_from_name() {
        assert_eq!(
            email_from_name("Employee 123456", "company.com"),
            "Employee123456@company.com"
        );
        assert_eq!(email_from_name("a\tb c", "x.org"), "abc@x.org");
    }
}
