use std::collections::HashMap;
use std::error::Error;

use rand::seq::SliceRandom;
use rand::{rngs::StdRng, SeedableRng};

use crate::data::column::{CategoricalValue, Column};

/// A collection of aligned feature columns plus one designated target column.
///
/// The target is never part of the feature list. Every structural operation
/// returns a brand-new table; a `Table` is effectively immutable after
/// construction, which is what lets the tree builder hold ancestor tables
/// across the recursion (and grow sibling subtrees in parallel) without ever
/// seeing one change underneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<V: CategoricalValue> {
    columns: Vec<Column<V>>,
    target: Column<V>,
}

impl<V: CategoricalValue> Table<V> {
    /// Builds a table, checking that every feature column has the same
    /// number of rows as the target.
    pub fn new(columns: Vec<Column<V>>, target: Column<V>) -> Result<Self, Box<dyn Error>> {
        for column in &columns {
            if column.len() != target.len() {
                return Err(format!(
                    "Column {:?} has {} rows but the target has {}.",
                    column.name(),
                    column.len(),
                    target.len()
                )
                .into());
            }
        }
        Ok(Self { columns, target })
    }

    pub fn columns(&self) -> &[Column<V>] {
        &self.columns
    }

    pub fn target(&self) -> &Column<V> {
        &self.target
    }

    pub fn num_rows(&self) -> usize {
        self.target.len()
    }

    /// True iff no feature columns remain to split on.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn all_targets_identical(&self) -> bool {
        self.target.all_equal()
    }

    /// Shannon entropy of a column in bits, `H(X) = -Σ p(x) log2 p(x)` over
    /// the empirical distribution of its values.
    pub fn entropy(&self, column: &Column<V>) -> f64 {
        let total = column.len() as f64;
        column
            .value_counts()
            .iter()
            .map(|(_, count)| {
                let p = *count as f64 / total;
                -p * p.log2()
            })
            .sum()
    }

    /// Conditional entropy `H(Y|X) = Σ_v P(X=v) · H(Y | X=v)`, where
    /// `H(Y|X=v)` is the entropy of `y` restricted to rows where `x == v`.
    pub fn conditional_entropy(&self, y: &Column<V>, x: &Column<V>) -> f64 {
        let total = x.len() as f64;
        x.value_counts()
            .iter()
            .map(|(value, count)| {
                let p = *count as f64 / total;
                p * self.entropy(&filter_column(y, x, value))
            })
            .sum()
    }

    /// Information gain `IG(Y|X) = H(Y) - H(Y|X)`.
    pub fn information_gain(&self, y: &Column<V>, x: &Column<V>) -> f64 {
        self.entropy(y) - self.conditional_entropy(y, x)
    }

    /// Index of the feature column with maximum information gain against the
    /// target. Ties keep the earliest column: only a strictly greater gain
    /// replaces the running best. Calling this on a table with no feature
    /// columns is a contract violation and panics.
    pub fn best_split(&self) -> usize {
        let mut best_index = 0;
        let mut best_gain = self.information_gain(&self.target, &self.columns[0]);

        for (index, column) in self.columns.iter().enumerate().skip(1) {
            let gain = self.information_gain(&self.target, column);
            if gain > best_gain {
                best_index = index;
                best_gain = gain;
            }
        }

        best_index
    }

    /// New table holding only the rows where `columns[column_index] ==
    /// value`, with that column removed from the result and the target
    /// filtered under the same row mask.
    pub fn filter_on(&self, column_index: usize, value: &V) -> Self {
        let filter = &self.columns[column_index];

        let columns = self
            .columns
            .iter()
            .enumerate()
            .filter(|(index, _)| *index != column_index)
            .map(|(_, column)| filter_column(column, filter, value))
            .collect();
        let target = filter_column(&self.target, filter, value);

        Self { columns, target }
    }

    /// Most frequent target value. The first-seen value seeds the running
    /// best and only a strictly greater count replaces it, so ties resolve
    /// to the earliest value in row order. Panics on a zero-row table.
    pub fn majority_target(&self) -> V {
        let counts = self.target.value_counts();
        let (mut majority, mut majority_count) = counts
            .first()
            .cloned()
            .expect("majority vote over an empty target column");

        for (value, count) in counts.into_iter().skip(1) {
            if count > majority_count {
                majority = value;
                majority_count = count;
            }
        }

        majority
    }

    /// Position of a feature column by name, in the stored ordering.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.name() == name)
    }

    /// Name-to-position map over the feature columns. Built from the
    /// original column ordering; predictions index rows through this map, so
    /// it stays valid even though filtered tables drop columns.
    pub fn column_indices(&self) -> HashMap<String, usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(index, column)| (column.name().to_string(), index))
            .collect()
    }

    /// Column-major to row-major conversion: one `Vec<V>` per row, feature
    /// columns only, in stored column order.
    pub fn rows(&self) -> Vec<Vec<V>> {
        (0..self.num_rows())
            .map(|row| {
                self.columns
                    .iter()
                    .map(|column| column.get(row).clone())
                    .collect()
            })
            .collect()
    }

    /// Splits the rows into a training table and a test table after a
    /// shuffle, seeded for reproducibility when `seed` is given.
    pub fn train_test_split(
        &self,
        train_size: f64,
        seed: Option<u64>,
    ) -> Result<(Self, Self), Box<dyn Error>> {
        if !(0.0..=1.0).contains(&train_size) {
            return Err("Train size should be between 0.0 and 1.0".into());
        }
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut indices = (0..self.num_rows()).collect::<Vec<_>>();
        indices.shuffle(&mut rng);
        let train_size = (self.num_rows() as f64 * train_size).floor() as usize;

        let train = self.select_rows(&indices[..train_size]);
        let test = self.select_rows(&indices[train_size..]);
        Ok((train, test))
    }

    fn select_rows(&self, indices: &[usize]) -> Self {
        let columns = self
            .columns
            .iter()
            .map(|column| {
                Column::with_values(
                    column.name(),
                    indices.iter().map(|&i| column.get(i).clone()).collect(),
                )
            })
            .collect();
        let target = Column::with_values(
            self.target.name(),
            indices.iter().map(|&i| self.target.get(i).clone()).collect(),
        );

        Self { columns, target }
    }
}

/// Values of `column` restricted to the rows where `filter == value`. The
/// two columns must be row-aligned.
fn filter_column<V: CategoricalValue>(column: &Column<V>, filter: &Column<V>, value: &V) -> Column<V> {
    let values = column
        .values()
        .iter()
        .zip(filter.values())
        .filter(|(_, filter_value)| *filter_value == value)
        .map(|(kept, _)| kept.clone())
        .collect();

    Column::with_values(column.name(), values)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn weather_table() -> Table<&'static str> {
        let weather = Column::with_values("weather", vec!["sunny", "rainy", "sunny", "rainy"]);
        let play = Column::with_values("play", vec!["yes", "no", "no", "no"]);
        Table::new(vec![weather], play).unwrap()
    }

    #[test]
    fn test_new_rejects_misaligned_columns() {
        let short = Column::with_values("short", vec!["a"]);
        let target = Column::with_values("target", vec!["x", "y"]);
        assert!(Table::new(vec![short], target).is_err());
    }

    #[test]
    fn test_entropy_of_uniform_column_is_zero() {
        let table = weather_table();
        let pure = Column::with_values("pure", vec!["no", "no", "no"]);
        assert_relative_eq!(table.entropy(&pure), 0.0);
    }

    #[test]
    fn test_entropy_of_fair_coin_is_one_bit() {
        let table = weather_table();
        let coin = Column::with_values("coin", vec!["heads", "tails"]);
        assert_relative_eq!(table.entropy(&coin), 1.0);
    }

    #[test]
    fn test_entropy_of_skewed_target() {
        let table = weather_table();
        // 1 yes, 3 no: H = -(1/4)log2(1/4) - (3/4)log2(3/4)
        assert_relative_eq!(table.entropy(table.target()), 0.8112781244591328, epsilon = 1e-12);
    }

    #[test]
    fn test_conditional_entropy() {
        let table = weather_table();
        // H(play|weather=sunny) = 1.0, H(play|weather=rainy) = 0.0,
        // each value covering half of the rows.
        let conditional = table.conditional_entropy(table.target(), &table.columns()[0]);
        assert_relative_eq!(conditional, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_information_gain_bounds() {
        let table = weather_table();
        let gain = table.information_gain(table.target(), &table.columns()[0]);
        let target_entropy = table.entropy(table.target());
        assert!(gain >= 0.0);
        assert!(gain <= target_entropy);
        assert_relative_eq!(gain, 0.8112781244591328 - 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_best_split_prefers_informative_column() {
        let noise = Column::with_values("noise", vec!["x", "y", "x", "y"]);
        let signal = Column::with_values("signal", vec!["a", "a", "b", "b"]);
        let target = Column::with_values("target", vec!["p", "p", "q", "q"]);
        let table = Table::new(vec![noise, signal], target).unwrap();

        assert_eq!(table.best_split(), 1);
    }

    #[test]
    fn test_best_split_tie_keeps_first_column() {
        let first = Column::with_values("first", vec!["a", "a", "b", "b"]);
        let second = Column::with_values("second", vec!["a", "a", "b", "b"]);
        let target = Column::with_values("target", vec!["p", "p", "q", "q"]);
        let table = Table::new(vec![first, second], target).unwrap();

        assert_eq!(table.best_split(), 0);
    }

    #[test]
    fn test_filter_on_preserves_row_alignment() {
        let weather = Column::with_values("weather", vec!["sunny", "rainy", "sunny", "rainy"]);
        let wind = Column::with_values("wind", vec!["weak", "strong", "strong", "weak"]);
        let play = Column::with_values("play", vec!["yes", "no", "no", "no"]);
        let table = Table::new(vec![weather, wind], play).unwrap();

        let filtered = table.filter_on(0, &"sunny");

        // The filter column is gone and the surviving rows line up with the
        // original rows 0 and 2.
        assert_eq!(filtered.columns().len(), 1);
        assert_eq!(filtered.columns()[0].name(), "wind");
        assert_eq!(filtered.columns()[0].values(), &["weak", "strong"]);
        assert_eq!(filtered.target().values(), &["yes", "no"]);
    }

    #[test]
    fn test_majority_target() {
        let table = weather_table();
        assert_eq!(table.majority_target(), "no");
    }

    #[test]
    fn test_majority_target_tie_resolves_to_first_seen() {
        let feature = Column::with_values("feature", vec!["a", "b"]);
        let target = Column::with_values("target", vec!["yes", "no"]);
        let table = Table::new(vec![feature], target).unwrap();

        assert_eq!(table.majority_target(), "yes");
    }

    #[test]
    fn test_column_indices_follow_stored_order() {
        let first = Column::with_values("first", vec!["a"]);
        let second = Column::with_values("second", vec!["b"]);
        let target = Column::with_values("target", vec!["t"]);
        let table = Table::new(vec![first, second], target).unwrap();

        let indices = table.column_indices();
        assert_eq!(indices["first"], 0);
        assert_eq!(indices["second"], 1);
        assert_eq!(table.column_index("second"), Some(1));
        assert_eq!(table.column_index("missing"), None);
    }

    #[test]
    fn test_rows_transposes_feature_columns() {
        let weather = Column::with_values("weather", vec!["sunny", "rainy"]);
        let wind = Column::with_values("wind", vec!["weak", "strong"]);
        let play = Column::with_values("play", vec!["yes", "no"]);
        let table = Table::new(vec![weather, wind], play).unwrap();

        assert_eq!(
            table.rows(),
            vec![vec!["sunny", "weak"], vec!["rainy", "strong"]]
        );
    }

    #[test]
    fn test_train_test_split_sizes() {
        let feature = Column::with_values("feature", vec!["a", "b", "c", "d"]);
        let target = Column::with_values("target", vec!["p", "q", "p", "q"]);
        let table = Table::new(vec![feature], target).unwrap();

        let (train, test) = table.train_test_split(0.75, Some(42)).unwrap();
        assert_eq!(train.num_rows(), 3);
        assert_eq!(test.num_rows(), 1);
        assert_eq!(train.columns().len(), 1);
    }

    #[test]
    fn test_train_test_split_rejects_bad_fraction() {
        let table = weather_table();
        assert!(table.train_test_split(1.5, None).is_err());
    }
}
