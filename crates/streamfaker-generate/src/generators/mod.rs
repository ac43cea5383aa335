use std::collections::BTreeMap;
use std::fmt;

use rand::RngCore;
use rand::seq::IndexedRandom;

pub mod datetime;
pub mod finance;
pub mod identifiers;
pub mod internet;
pub mod numeric;
pub mod person;
pub mod text;

/// A named value producer.
///
/// Generators draw only from the supplied random source, so a seeded source
/// yields a reproducible stream of values.
pub trait Generator: Send + Sync {
    fn id(&self) -> &'static str;
    fn generate(&self, rng: &mut dyn RngCore) -> String;
}

/// Generator backed by a plain function.
pub struct FnGenerator {
    id: &'static str,
    produce: fn(&mut dyn RngCore) -> String,
}

impl FnGenerator {
    pub const fn new(id: &'static str, produce: fn(&mut dyn RngCore) -> String) -> Self {
        Self { id, produce }
    }
}

impl Generator for FnGenerator {
    fn id(&self) -> &'static str {
        self.id
    }

    fn generate(&self, rng: &mut dyn RngCore) -> String {
        (self.produce)(rng)
    }
}

/// Immutable name-to-generator dispatch table.
pub struct GeneratorRegistry {
    generators: BTreeMap<&'static str, Box<dyn Generator>>,
}

impl GeneratorRegistry {
    /// Registry with every built-in generator.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        person::register(&mut registry);
        internet::register(&mut registry);
        finance::register(&mut registry);
        datetime::register(&mut registry);
        numeric::register(&mut registry);
        text::register(&mut registry);
        identifiers::register(&mut registry);
        registry
    }

    fn empty() -> Self {
        Self {
            generators: BTreeMap::new(),
        }
    }

    /// Register a generator, replacing any previous one with the same id.
    fn register_generator(&mut self, generator: Box<dyn Generator>) {
        self.generators.insert(generator.id(), generator);
    }

    pub fn register_fn(&mut self, id: &'static str, produce: fn(&mut dyn RngCore) -> String) {
        self.register_generator(Box::new(FnGenerator::new(id, produce)));
    }

    pub fn generator(&self, id: &str) -> Option<&dyn Generator> {
        self.generators.get(id).map(|generator| generator.as_ref())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.generators.contains_key(id)
    }

    /// Registered ids in sorted order.
    pub fn generator_ids(&self) -> Vec<&'static str> {
        self.generators.keys().copied().collect()
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratorRegistry")
            .field("generators", &self.generator_ids())
            .finish()
    }
}

pub(crate) fn pick(values: &[&'static str], rng: &mut dyn RngCore) -> String {
    values.choose(rng).copied().unwrap_or_default().to_string()
}
