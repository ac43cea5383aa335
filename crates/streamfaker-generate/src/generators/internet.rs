use fake::Fake;
use fake::faker::internet::raw::{DomainSuffix, IPv4, IPv6, MACAddress, Password, SafeEmail, Username};
use fake::faker::lorem::raw::Word;
use fake::locales::EN;
use rand::distr::Alphanumeric;
use rand::{Rng, RngCore};

use crate::generators::GeneratorRegistry;

const PASSWORD_LEN: std::ops::Range<usize> = 8..16;

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_fn("email", email);
    registry.register_fn("username", username);
    registry.register_fn("password", password);
    registry.register_fn("domainname", domain_name);
    registry.register_fn("url", url);
    registry.register_fn("ipv4", ipv4);
    registry.register_fn("ipv6", ipv6);
    registry.register_fn("macaddress", mac_address);
    registry.register_fn("jwt", jwt);
}

fn email(rng: &mut dyn RngCore) -> String {
    SafeEmail(EN).fake_with_rng(rng)
}

fn username(rng: &mut dyn RngCore) -> String {
    Username(EN).fake_with_rng(rng)
}

fn password(rng: &mut dyn RngCore) -> String {
    Password(EN, PASSWORD_LEN).fake_with_rng(rng)
}

fn domain_name(rng: &mut dyn RngCore) -> String {
    let word: String = Word(EN).fake_with_rng(rng);
    let suffix: String = DomainSuffix(EN).fake_with_rng(rng);
    format!("{}.{suffix}", word.to_lowercase())
}

fn url(rng: &mut dyn RngCore) -> String {
    format!("https://www.{}/", domain_name(rng))
}

fn ipv4(rng: &mut dyn RngCore) -> String {
    IPv4(EN).fake_with_rng(rng)
}

fn ipv6(rng: &mut dyn RngCore) -> String {
    IPv6(EN).fake_with_rng(rng)
}

fn mac_address(rng: &mut dyn RngCore) -> String {
    MACAddress(EN).fake_with_rng(rng)
}

/// Three dot-separated segments shaped like header, payload and signature.
/// The segments are random and carry no decodable claims.
fn jwt(rng: &mut dyn RngCore) -> String {
    let header = alphanumeric(rng, 36);
    let payload = alphanumeric(rng, 96);
    let signature = alphanumeric(rng, 43);
    format!("{header}.{payload}.{signature}")
}

fn alphanumeric(rng: &mut dyn RngCore, len: usize) -> String {
    (0..len).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}
