//! Variant Resolver
//!
//! Maps a symbolic variant name to its `VariantConfig`. The set of names is
//! closed at construction and always contains the default.

use std::collections::BTreeMap;

use thiserror::Error;

use super::suggest::closest;
use crate::domain::entities::VariantConfig;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VariantError {
    #[error("unknown variant '{name}'{}; known variants: {}", did_you_mean(.suggestion), .known.join(", "))]
    UnknownVariant {
        name: String,
        known: Vec<String>,
        suggestion: Option<String>,
    },

    #[error("default variant '{name}' is not among the configured variants")]
    MissingDefault { name: String },
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{}'?)", s),
        None => String::new(),
    }
}

#[derive(Debug, Clone)]
pub struct VariantResolver {
    default: String,
    variants: BTreeMap<String, VariantConfig>,
}

impl VariantResolver {
    pub fn new<I>(default: impl Into<String>, variants: I) -> Result<Self, VariantError>
    where
        I: IntoIterator<Item = (String, VariantConfig)>,
    {
        let default = default.into();
        let variants: BTreeMap<_, _> = variants.into_iter().collect();
        if !variants.contains_key(&default) {
            return Err(VariantError::MissingDefault { name: default });
        }
        Ok(Self { default, variants })
    }

    pub fn default_name(&self) -> &str {
        &self.default
    }

    /// Recognized names, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variants.keys().map(|s| s.as_str())
    }

    pub fn resolve(&self, name: &str) -> Result<&VariantConfig, VariantError> {
        self.variants
            .get(name)
            .ok_or_else(|| VariantError::UnknownVariant {
                name: name.to_string(),
                known: self.names().map(str::to_string).collect(),
                suggestion: closest(name, self.names()).map(str::to_string),
            })
    }

    /// Resolve `name`, or the default when none was supplied.
    /// Returns the name actually used alongside the config.
    pub fn resolve_or_default<'a>(
        &'a self,
        name: Option<&'a str>,
    ) -> Result<(&'a str, &'a VariantConfig), VariantError> {
        let name = name.unwrap_or(self.default.as_str());
        self.resolve(name).map(|config| (name, config))
    }
}
