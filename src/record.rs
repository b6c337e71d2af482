//! Delimited text records.

use itertools::Itertools;

/// A record read from a delimited file: an ordered list of text fields.
///
/// Fields are addressed by their 0-based position. Records in one file
/// need not all have the same number of fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    /// A record with the given fields.
    pub fn new(fields: Vec<String>) -> Self {
        Self { fields }
    }

    /// The field at position `idx`, if the record has that many fields.
    pub fn field(&self, idx: usize) -> Option<&str> {
        self.fields.get(idx).map(String::as_str)
    }

    /// All fields, in order.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Vec<String>> for Record {
    fn from(fields: Vec<String>) -> Self {
        Self::new(fields)
    }
}

impl<S: Into<String>> FromIterator<S> for Record {
    fn from_iter<T: IntoIterator<Item = S>>(fields: T) -> Self {
        Self::new(fields.into_iter().map_into().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_access() {
        let record: Record = ["2024-01-05", "Ada Lovelace", "Programming"]
            .into_iter()
            .collect();
        assert_eq!(record.len(), 3);
        assert_eq!(record.field(1), Some("Ada Lovelace"));
        assert_eq!(record.field(3), None);
    }
}
