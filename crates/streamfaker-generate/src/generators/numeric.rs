use rand::{Rng, RngCore};

use crate::generators::GeneratorRegistry;

pub fn register(registry: &mut GeneratorRegistry) {
    registry.register_fn("randomint", |rng| rng.random_range(0..=100_u32).to_string());
    registry.register_fn("randomfloat", |rng| (rng.random::<f64>() * 100.0).to_string());
    registry.register_fn("randomfactor", |rng| rng.random::<f64>().to_string());
    registry.register_fn("latitude", latitude);
    registry.register_fn("longitude", longitude);
}

fn latitude(rng: &mut dyn RngCore) -> String {
    rng.random_range(-90.0..=90.0_f64).to_string()
}

fn longitude(rng: &mut dyn RngCore) -> String {
    rng.random_range(-180.0..=180.0_f64).to_string()
}
