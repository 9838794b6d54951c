//! Credential and identifier generation.

use rand::Rng;
use rand::distributions::Alphanumeric;
use rand::rngs::OsRng;

/// Length of generated passwords and hpfeeds secrets.
pub const PASSWORD_LENGTH: usize = 32;

/// Length of the random suffix on generated hpfeeds idents.
pub const IDENT_SUFFIX_LENGTH: usize = 8;

/// Draw `length` characters uniformly from `[A-Za-z0-9]` using the OS CSPRNG.
pub fn generate(length: usize) -> String {
    OsRng.sample_iter(&Alphanumeric).take(length).map(char::from).collect()
}

/// Generate a password of the default length.
pub fn generate_password() -> String {
    generate(PASSWORD_LENGTH)
}

/// Build a correlation ident such as `hpfeeds-cif-Ab3dE9xQ`.
pub fn generate_ident(prefix: &str) -> String {
    format!("{}-{}", prefix, generate(IDENT_SUFFIX_LENGTH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn password_has_default_length() {
        assert_eq!(generate_password().len(), PASSWORD_LENGTH);
    }

    #[test]
    fn repeated_calls_differ() {
        assert_ne!(generate(IDENT_SUFFIX_LENGTH), generate(IDENT_SUFFIX_LENGTH));
        assert_ne!(generate_password(), generate_password());
    }

    #[test]
    fn ident_keeps_prefix() {
        let ident = generate_ident("hpfeeds-cif");
        assert!(ident.starts_with("hpfeeds-cif-"));
        assert_eq!(ident.len(), "hpfeeds-cif-".len() + IDENT_SUFFIX_LENGTH);
    }

    proptest! {
        #[test]
        fn output_is_alphanumeric_of_requested_length(n in 1usize..256) {
            let value = generate(n);
            prop_assert_eq!(value.chars().count(), n);
            prop_assert!(value.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }
}
