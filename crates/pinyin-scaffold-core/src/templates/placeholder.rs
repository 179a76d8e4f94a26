//! Typed placeholder keys and substitution sets.

use std::collections::BTreeMap;
use std::fmt;

use serde_json::{Map, Value};

/// Every placeholder a template body may reference.
///
/// Bodies spell them as `{{key}}`, where `key` is [`Placeholder::key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Placeholder {
    /// The project name.
    Student,
    /// Checksum-derived seed.
    Seed,
    /// Index of the selected template in its pool.
    TemplateIndex,
    /// Human-readable label of the selected template.
    TemplateLabel,
    /// Seed passed to `java.util.Random` by the sorting driver.
    SampleSeed,
    /// Number of values the sorting driver draws.
    SampleLen,
    /// Exclusive upper bound of each drawn value.
    SampleBound,
    /// The drawn values, formatted like `Arrays.toString`.
    Sample,
    /// HSL hue of a site's color scheme.
    Hue,
    /// Avatar text.
    Initials,
}

impl Placeholder {
    pub const ALL: [Placeholder; 10] = [
        Self::Student,
        Self::Seed,
        Self::TemplateIndex,
        Self::TemplateLabel,
        Self::SampleSeed,
        Self::SampleLen,
        Self::SampleBound,
        Self::Sample,
        Self::Hue,
        Self::Initials,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Seed => "seed",
            Self::TemplateIndex => "template_index",
            Self::TemplateLabel => "template_label",
            Self::SampleSeed => "sample_seed",
            Self::SampleLen => "sample_len",
            Self::SampleBound => "sample_bound",
            Self::Sample => "sample",
            Self::Hue => "hue",
            Self::Initials => "initials",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Values bound to placeholders for one render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitutions {
    values: BTreeMap<Placeholder, String>,
}

impl Substitutions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `placeholder` to `value`, replacing any earlier binding.
    pub fn with(mut self, placeholder: Placeholder, value: impl ToString) -> Self {
        self.values.insert(placeholder, value.to_string());
        self
    }

    pub fn get(&self, placeholder: Placeholder) -> Option<&str> {
        self.values.get(&placeholder).map(String::as_str)
    }

    pub fn contains(&self, placeholder: Placeholder) -> bool {
        self.values.contains_key(&placeholder)
    }

    /// The Handlebars data context: a flat JSON object of string values.
    pub fn to_context(&self) -> Value {
        let map: Map<String, Value> = self
            .values
            .iter()
            .map(|(p, v)| (p.key().to_string(), Value::String(v.clone())))
            .collect();
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_roundtrip() {
        for p in Placeholder::ALL {
            assert_eq!(Placeholder::from_key(p.key()), Some(p));
        }
        assert_eq!(Placeholder::from_key("STUDENT"), None);
    }

    #[test]
    fn test_with_replaces_binding() {
        let subs = Substitutions::new()
            .with(Placeholder::Seed, 1)
            .with(Placeholder::Seed, 2);
        assert_eq!(subs.get(Placeholder::Seed), Some("2"));
        assert!(!subs.contains(Placeholder::Student));
    }

    #[test]
    fn test_context_is_flat_object() {
        let subs = Substitutions::new()
            .with(Placeholder::Student, "hutao")
            .with(Placeholder::Hue, 120);
        assert_eq!(
            subs.to_context(),
            serde_json::json!({ "student": "hutao", "hue": "120" })
        );
    }
}
