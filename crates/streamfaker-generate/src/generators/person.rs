use fake::Fake;
use fake::faker::name::raw::{FirstName, LastName, Name};
use fake::faker::phone_number::raw::PhoneNumber;
use fake::locales::{EN, ZH_CN};
use rand::{Rng, RngCore};

use crate::generators::{GeneratorRegistry, pick};

const FEMALE_FIRST_NAMES: &[&str] = &[
    "Abigail", "Alice", "Amelia", "Charlotte", "Chloe", "Emily", "Emma", "Grace", "Hannah",
    "Isabella", "Lily", "Mia", "Olivia", "Sophia", "Zoe",
];
const MALE_FIRST_NAMES: &[&str] = &[
    "Aiden", "Benjamin", "Daniel", "Ethan", "Gabriel", "Henry", "Jack", "James", "Liam",
    "Lucas", "Mason", "Noah", "Oliver", "Samuel", "William",
];
const FEMALE_TITLES: &[&str] = &["Mrs.", "Ms.", "Miss", "Dr.", "Prof.", "Lady", "Queen", "Princess"];
const MALE_TITLES: &[&str] = &["Mr.", "Dr.", "Prof.", "Lord", "King", "Prince"];
const GENDERS: &[&str] = &["Male", "Female"];
const TOLL_FREE_PREFIXES: &[&str] = &["800", "833", "844", "855", "866", "877", "888"];

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_fn("name", name);
    registry.register_fn("firstname", first_name);
    registry.register_fn("firstnamefemale", |rng| pick(FEMALE_FIRST_NAMES, rng));
    registry.register_fn("firstnamemale", |rng| pick(MALE_FIRST_NAMES, rng));
    registry.register_fn("lastname", last_name);
    registry.register_fn("chinesename", chinese_name);
    registry.register_fn("chinesefirstname", chinese_first_name);
    registry.register_fn("chineselastname", chinese_last_name);
    registry.register_fn("gender", |rng| pick(GENDERS, rng));
    registry.register_fn("titlefemale", |rng| pick(FEMALE_TITLES, rng));
    registry.register_fn("titlemale", |rng| pick(MALE_TITLES, rng));
    registry.register_fn("phonenumber", phone_number);
    registry.register_fn("e164phonenumber", e164_phone_number);
    registry.register_fn("tollfreephonenumber", toll_free_phone_number);
}

fn name(rng: &mut dyn RngCore) -> String {
    Name(EN).fake_with_rng(rng)
}

fn first_name(rng: &mut dyn RngCore) -> String {
    FirstName(EN).fake_with_rng(rng)
}

fn last_name(rng: &mut dyn RngCore) -> String {
    LastName(EN).fake_with_rng(rng)
}

fn chinese_name(rng: &mut dyn RngCore) -> String {
    Name(ZH_CN).fake_with_rng(rng)
}

fn chinese_first_name(rng: &mut dyn RngCore) -> String {
    FirstName(ZH_CN).fake_with_rng(rng)
}

fn chinese_last_name(rng: &mut dyn RngCore) -> String {
    LastName(ZH_CN).fake_with_rng(rng)
}

fn phone_number(rng: &mut dyn RngCore) -> String {
    PhoneNumber(EN).fake_with_rng(rng)
}

// North American numbering: area and exchange codes never start with 0 or 1.
fn e164_phone_number(rng: &mut dyn RngCore) -> String {
    let area = rng.random_range(200..=999);
    let exchange = rng.random_range(200..=999);
    let line = rng.random_range(0..=9999);
    format!("+1{area}{exchange}{line:04}")
}

fn toll_free_phone_number(rng: &mut dyn RngCore) -> String {
    let prefix = pick(TOLL_FREE_PREFIXES, rng);
    let exchange = rng.random_range(200..=999);
    let line = rng.random_range(0..=9999);
    format!("({prefix}) {exchange}-{line:04}")
}
