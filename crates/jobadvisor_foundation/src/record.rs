//! Persistent field records.
//!
//! A [`Record`] is the untyped shape of a profile as supplied by a caller:
//! field names mapped to scalar values. Records are persistent (structural
//! sharing via `im`), so building one field at a time is cheap.

use std::fmt;
use std::sync::Arc;

use im::OrdMap;

use crate::value::Value;

/// A persistent, name-ordered map from field name to value.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: OrdMap<Arc<str>, Value>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new record with `field` set to `value`.
    #[must_use]
    pub fn with(&self, field: &str, value: impl Into<Value>) -> Self {
        Self {
            fields: self.fields.update(field.into(), value.into()),
        }
    }

    /// Sets `field` to `value` in place.
    pub fn set(&mut self, field: &str, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Returns a new record without `field`.
    #[must_use]
    pub fn without(&self, field: &str) -> Self {
        Self {
            fields: self.fields.without(field),
        }
    }

    /// Gets the value of a field.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns true if the field is present.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_ref(), v))
    }
}

impl<K: AsRef<str>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Self::new();
        for (k, v) in iter {
            record.set(k.as_ref(), v);
        }
        record
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
