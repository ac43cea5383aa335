use fake::Fake;
use fake::faker::lorem::raw::{Paragraph, Sentence, Word};
use fake::locales::EN;
use rand::RngCore;

use crate::generators::GeneratorRegistry;

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_fn("word", word);
    registry.register_fn("sentence", sentence);
    registry.register_fn("paragraph", paragraph);
}

fn word(rng: &mut dyn RngCore) -> String {
    Word(EN).fake_with_rng(rng)
}

fn sentence(rng: &mut dyn RngCore) -> String {
    Sentence(EN, 4..10).fake_with_rng(rng)
}

fn paragraph(rng: &mut dyn RngCore) -> String {
    Paragraph(EN, 3..6).fake_with_rng(rng)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn word_is_a_single_token() {
        let mut rng = ChaCha8Rng::seed_from_u64(31);
        for _ in 0..20 {
            let value = word(&mut rng);
            assert!(!value.is_empty());
            assert!(!value.contains(char::is_whitespace), "{value}");
        }
    }

    #[test]
    fn sentence_word_count_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(32);
        for _ in 0..20 {
            let value = sentence(&mut rng);
            let words = value.split_whitespace().count();
            assert!((4..10).contains(&words), "{value}");
        }
    }

    #[test]
    fn paragraph_is_longer_than_one_sentence() {
        let mut rng = ChaCha8Rng::seed_from_u64(33);
        for _ in 0..20 {
            let value = paragraph(&mut rng);
            assert!(value.split_whitespace().count() >= 3 * 4, "{value}");
        }
    }
}
