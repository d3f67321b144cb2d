use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Marker trait for the value type stored in a [`Column`].
///
/// Categorical values only need equality and stable hashing for frequency
/// counting; `Display` is used by the tree renderer and `Send + Sync` by the
/// parallel tree builder. Blanket-implemented for every qualifying type, so
/// `String`, `&'static str` and small integer codes all work out of the box.
pub trait CategoricalValue:
    Debug + Display + Clone + PartialEq + Eq + Hash + Send + Sync + 'static
{
}

impl<T> CategoricalValue for T where
    T: Debug + Display + Clone + PartialEq + Eq + Hash + Send + Sync + 'static
{
}

/// One named column of categorical values, one entry per row.
///
/// Row order is significant: every column of a table, including the target,
/// is aligned by position. Filtering never mutates a column in place; it
/// produces a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column<V: CategoricalValue> {
    name: String,
    values: Vec<V>,
}

impl<V: CategoricalValue> Column<V> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: Vec::new(),
        }
    }

    pub fn with_values(name: impl Into<String>, values: Vec<V>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[V] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at row `i`. Indexing past the end is a contract violation and
    /// panics.
    pub fn get(&self, i: usize) -> &V {
        &self.values[i]
    }

    pub fn push(&mut self, value: V) {
        self.values.push(value);
    }

    /// True iff every value equals the first one; vacuously true for empty
    /// and single-element columns.
    pub fn all_equal(&self) -> bool {
        match self.values.first() {
            Some(first) => self.values.iter().all(|v| v == first),
            None => true,
        }
    }

    /// Distinct values in first-occurrence order.
    pub fn distinct_values(&self) -> Vec<V> {
        self.value_counts().into_iter().map(|(v, _)| v).collect()
    }

    /// Number of rows holding exactly `value`.
    pub fn frequency_of(&self, value: &V) -> usize {
        self.values.iter().filter(|v| *v == value).count()
    }

    /// Frequency table of the column's values, keyed in first-occurrence
    /// order. The ordering is what makes majority votes and split fan-out
    /// deterministic, so callers rely on it.
    pub fn value_counts(&self) -> Vec<(V, usize)> {
        let mut counts: HashMap<&V, usize> = HashMap::new();
        let mut order: Vec<&V> = Vec::new();

        for value in &self.values {
            if let Some(count) = counts.get_mut(value) {
                *count += 1;
            } else {
                counts.insert(value, 1);
                order.push(value);
            }
        }

        order
            .into_iter()
            .map(|value| (value.clone(), counts[value]))
            .collect()
    }
}
