//! Typed access to raw configuration tables.
//!
//! # Responsibilities
//! - Read named fields with the expected type
//! - Turn absent or mistyped fields into `MissingField` errors that name
//!   the record they came from
//! - Coerce integers the way config authors expect (`"30"` and `30.0`
//!   both read as 30)

use toml::{Table, Value};

use crate::config::error::{ConfigError, ConfigResult};

/// A configuration table together with a label describing where it sits in
/// the document, e.g. `server 'main' host 'localhost'`.
#[derive(Debug, Clone)]
pub struct ConfigRecord<'a> {
    table: &'a Table,
    context: String,
}

impl<'a> ConfigRecord<'a> {
    /// Wrap a table.
    pub fn new(table: &'a Table, context: impl Into<String>) -> Self {
        Self {
            table,
            context: context.into(),
        }
    }

    /// Wrap a value if it is a table.
    pub fn from_value(value: &'a Value, context: impl Into<String>) -> Option<Self> {
        value.as_table().map(|table| Self::new(table, context))
    }

    /// Same table under a new label.
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self {
            table: self.table,
            context: context.into(),
        }
    }

    /// Location label used in error messages and logs.
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Raw field value.
    pub fn get(&self, field: &str) -> Option<&'a Value> {
        self.table.get(field)
    }

    /// Number of fields in the record.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    fn missing(&self, field: &str) -> ConfigError {
        ConfigError::missing(self.context.as_str(), field)
    }

    /// Required string field.
    pub fn str(&self, field: &str) -> ConfigResult<&'a str> {
        self.get(field)
            .and_then(Value::as_str)
            .ok_or_else(|| self.missing(field))
    }

    /// Required integer field.
    pub fn int(&self, field: &str) -> ConfigResult<i64> {
        self.get(field)
            .and_then(coerce_int)
            .ok_or_else(|| self.missing(field))
    }

    /// Required flag. Accepts booleans and integers (non-zero is true).
    pub fn flag(&self, field: &str) -> ConfigResult<bool> {
        match self.get(field) {
            Some(Value::Boolean(b)) => Ok(*b),
            Some(value) => coerce_int(value)
                .map(|n| n != 0)
                .ok_or_else(|| self.missing(field)),
            None => Err(self.missing(field)),
        }
    }

    /// Required nested table.
    pub fn table(&self, field: &str) -> ConfigResult<ConfigRecord<'a>> {
        self.get(field)
            .and_then(Value::as_table)
            .map(|table| ConfigRecord::new(table, format!("{} {}", self.context, field)))
            .ok_or_else(|| self.missing(field))
    }

    /// Required array.
    pub fn array(&self, field: &str) -> ConfigResult<&'a [Value]> {
        self.get(field)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .ok_or_else(|| self.missing(field))
    }

    /// Walk an array of tables in order. Each element is checked lazily, so
    /// a malformed entry only fails once iteration reaches it.
    pub fn records(
        &self,
        field: &'a str,
    ) -> ConfigResult<impl Iterator<Item = ConfigResult<ConfigRecord<'a>>> + 'a> {
        let items = self.array(field)?;
        let parent = self.context.clone();

        Ok(items.iter().enumerate().map(move |(i, value)| {
            // 1-based, as config authors count entries
            let label = format!("{}[{}]", field, i + 1);
            ConfigRecord::from_value(value, format!("{} {}", parent, label))
                .ok_or_else(|| ConfigError::missing(parent.as_str(), label))
        }))
    }

    /// Fields of the record in document order.
    pub fn entries(&self) -> impl Iterator<Item = (&'a str, &'a Value)> + 'a {
        let table = self.table;
        table.iter().map(|(key, value)| (key.as_str(), value))
    }
}

fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Integer(n) => Some(*n),
        Value::Float(f) if f.fract() == 0.0 => Some(*f as i64),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
