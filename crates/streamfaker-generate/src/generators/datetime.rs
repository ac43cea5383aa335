use chrono::{DateTime, Datelike, Utc};
use fake::Fake;
use fake::faker::address::raw::TimeZone;
use fake::locales::EN;
use rand::{Rng, RngCore};

use crate::generators::{GeneratorRegistry, pick};

/// Upper bound for generated unix times (2026-01-01T00:00:00Z). A fixed bound
/// keeps seeded runs reproducible across days.
pub const MAX_UNIX_TIME: i64 = 1_767_225_600;

const CENTURIES: &[&str] = &[
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", "XI", "XII", "XIII", "XIV",
    "XV", "XVI", "XVII", "XVIII", "XIX", "XX", "XXI",
];
const TIME_PERIODS: &[&str] = &["AM", "PM"];

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_fn("century", |rng| pick(CENTURIES, rng));
    registry.register_fn("date", |rng| random_datetime(rng).format("%Y-%m-%d").to_string());
    registry.register_fn("dayofmonth", |rng| random_datetime(rng).day().to_string());
    registry.register_fn("dayofweek", |rng| random_datetime(rng).format("%A").to_string());
    registry.register_fn("monthname", |rng| random_datetime(rng).format("%B").to_string());
    registry.register_fn("randomunixtime", |rng| random_unix_time(rng).to_string());
    registry.register_fn("unixtime", |rng| random_unix_time(rng).to_string());
    registry.register_fn("timestring", |rng| random_datetime(rng).format("%H:%M:%S").to_string());
    registry.register_fn("timeperiod", |rng| pick(TIME_PERIODS, rng));
    registry.register_fn("timestamp", |rng| {
        random_datetime(rng).format("%Y-%m-%d %H:%M:%S").to_string()
    });
    registry.register_fn("timezone", timezone);
    registry.register_fn("yearstring", |rng| random_datetime(rng).year().to_string());
}

fn random_unix_time(rng: &mut dyn RngCore) -> i64 {
    rng.random_range(0..MAX_UNIX_TIME)
}

fn random_datetime(rng: &mut dyn RngCore) -> DateTime<Utc> {
    DateTime::from_timestamp(random_unix_time(rng), 0).unwrap_or_default()
}

fn timezone(rng: &mut dyn RngCore) -> String {
    TimeZone(EN).fake_with_rng(rng)
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn formats_parse_back() {
        let registry = GeneratorRegistry::new();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let generate = |id: &str, rng: &mut ChaCha8Rng| {
            registry
                .generator(id)
                .unwrap_or_else(|| panic!("missing generator {id}"))
                .generate(rng)
        };

        let date = generate("date", &mut rng);
        assert!(NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_ok(), "{date}");

        let time = generate("timestring", &mut rng);
        assert!(NaiveTime::parse_from_str(&time, "%H:%M:%S").is_ok(), "{time}");

        let timestamp = generate("timestamp", &mut rng);
        assert!(
            NaiveDateTime::parse_from_str(&timestamp, "%Y-%m-%d %H:%M:%S").is_ok(),
            "{timestamp}"
        );

        let unix: i64 = generate("unixtime", &mut rng).parse().expect("integer");
        assert!((0..MAX_UNIX_TIME).contains(&unix));

        let day: u32 = generate("dayofmonth", &mut rng).parse().expect("integer");
        assert!((1..=31).contains(&day));

        let period = generate("timeperiod", &mut rng);
        assert!(period == "AM" || period == "PM");
    }
}
