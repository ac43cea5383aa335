use rand::{Rng, RngCore};
use uuid::Uuid;

use crate::generators::GeneratorRegistry;

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_fn("uuiddigit", uuid_digit);
    registry.register_fn("uuidhyphenated", uuid_hyphenated);
}

/// Random v4 UUID as 32 lower-case hex digits.
pub fn uuid_digit(rng: &mut dyn RngCore) -> String {
    random_uuid(rng).simple().to_string()
}

pub fn uuid_hyphenated(rng: &mut dyn RngCore) -> String {
    random_uuid(rng).hyphenated().to_string()
}

fn random_uuid(rng: &mut dyn RngCore) -> Uuid {
    let bytes: [u8; 16] = rng.random();
    uuid::Builder::from_random_bytes(bytes).into_uuid()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn digit_form_is_32_hex_chars() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let value = uuid_digit(&mut rng);
        assert_eq!(value.len(), 32);
        assert!(value.chars().all(|c| c.is_ascii_hexdigit()));
        let parsed = Uuid::parse_str(&value).expect("valid uuid");
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn hyphenated_form_parses() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let value = uuid_hyphenated(&mut rng);
        assert_eq!(value.matches('-').count(), 4);
        assert!(Uuid::parse_str(&value).is_ok());
    }
}
