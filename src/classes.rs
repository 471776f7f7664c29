//! The class table shared by the record builder and the label map emitter.

use indexmap::IndexMap;

/// Known class labels and their ids, in label map order.
pub const CLASS_TABLE: [(&str, i64); 20] = [
    ("ba", 1),
    ("ca", 2),
    ("da", 3),
    ("dha", 4),
    ("ga", 5),
    ("ha", 6),
    ("ja", 7),
    ("ka", 8),
    ("la", 9),
    ("ma", 10),
    ("na", 11),
    ("nga", 12),
    ("nya", 13),
    ("pa", 14),
    ("ra", 15),
    ("sa", 16),
    ("ta", 17),
    ("tha", 18),
    ("wa", 19),
    ("ya", 20),
];

/// Ordered mapping from class label to integer id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassMap {
    ids: IndexMap<String, i64>,
}

impl Default for ClassMap {
    fn default() -> Self {
        CLASS_TABLE.iter().copied().collect()
    }
}

impl<'a> FromIterator<(&'a str, i64)> for ClassMap {
    fn from_iter<I: IntoIterator<Item = (&'a str, i64)>>(iter: I) -> Self {
        Self {
            ids: iter
                .into_iter()
                .map(|(name, id)| (name.to_string(), id))
                .collect(),
        }
    }
}

impl ClassMap {
    /// Id of `label`, or `None` when the label is not in the table.
    pub fn class_id(&self, label: &str) -> Option<i64> {
        self.ids.get(label).copied()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.ids.iter().map(|(name, &id)| (name.as_str(), id))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
