//! Tri-state configuration values.
//!
//! Declarative configuration distinguishes three states for every field:
//! null (not set), unknown (set but not resolvable yet at plan time), and
//! known (a concrete value). The request builder only acts on known
//! values, so the distinction is load-bearing rather than cosmetic.

use serde::{Deserialize, Serialize};

/// A configuration value that may be null, unknown, or known.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigValue<T> {
    /// The field was not set.
    #[default]
    Null,
    /// The field was set but its value is not yet known.
    Unknown,
    /// The field carries a concrete value.
    Known(T),
}

impl<T> ConfigValue<T> {
    /// Returns true if the value is null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns true if the value is unknown.
    #[must_use]
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Returns true if the value is known.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Returns the known value, if any.
    #[must_use]
    pub const fn as_known(&self) -> Option<&T> {
        match self {
            Self::Known(value) => Some(value),
            Self::Null | Self::Unknown => None,
        }
    }

    /// Converts into the known value, if any.
    #[must_use]
    pub fn into_known(self) -> Option<T> {
        match self {
            Self::Known(value) => Some(value),
            Self::Null | Self::Unknown => None,
        }
    }

    /// Maps the known value through `f`, preserving null/unknown.
    #[must_use]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ConfigValue<U> {
        match self {
            Self::Known(value) => ConfigValue::Known(f(value)),
            Self::Null => ConfigValue::Null,
            Self::Unknown => ConfigValue::Unknown,
        }
    }
}

impl<T> From<Option<T>> for ConfigValue<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Known)
    }
}

impl ConfigValue<String> {
    /// Returns the known string as a slice, if any.
    #[must_use]
    pub fn as_deref(&self) -> Option<&str> {
        self.as_known().map(String::as_str)
    }
}

// Serialized as `null` for both Null and Unknown: unknown is a plan-time
// artifact and never round-trips through persisted state.
impl<T: Serialize> Serialize for ConfigValue<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Known(value) => value.serialize(serializer),
            Self::Null | Self::Unknown => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ConfigValue<T> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<T>::deserialize(deserializer)?.into())
    }
}
