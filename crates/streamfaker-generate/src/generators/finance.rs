use fake::Fake;
use fake::faker::creditcard::raw::CreditCardNumber;
use fake::faker::currency::raw::CurrencyCode;
use fake::locales::EN;
use rand::{Rng, RngCore};

use crate::generators::{GeneratorRegistry, pick};

const CARD_TYPES: &[&str] = &[
    "VISA",
    "MasterCard",
    "American Express",
    "Discover",
    "Diners Club International",
    "JCB",
];

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_fn("amountwithcurrency", amount_with_currency);
    registry.register_fn("ccnumber", cc_number);
    registry.register_fn("cctype", |rng| pick(CARD_TYPES, rng));
    registry.register_fn("currency", currency);
}

fn amount_with_currency(rng: &mut dyn RngCore) -> String {
    let code = currency(rng);
    let cents: u64 = rng.random_range(0..=10_000_000);
    format!("{code} {}.{:02}", cents / 100, cents % 100)
}

fn cc_number(rng: &mut dyn RngCore) -> String {
    CreditCardNumber(EN).fake_with_rng(rng)
}

fn currency(rng: &mut dyn RngCore) -> String {
    CurrencyCode(EN).fake_with_rng(rng)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn amount_has_code_and_two_decimals() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        for _ in 0..20 {
            let value = amount_with_currency(&mut rng);
            let (code, amount) = value.split_once(' ').expect("code and amount");
            assert!(!code.is_empty());
            let (_, decimals) = amount.split_once('.').expect("decimal point");
            assert_eq!(decimals.len(), 2, "{value}");
            assert!(amount.parse::<f64>().is_ok(), "{value}");
        }
    }
}
