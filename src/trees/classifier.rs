//! ID3 Decision Tree Classifier
use std::collections::HashMap;
use std::error::Error;

use log::debug;
use rayon::prelude::*;

use crate::data::column::CategoricalValue;
use crate::data::table::Table;
use crate::trees::node::TreeNode;

/// Decision tree classifier for categorical data, trained with the ID3
/// information-gain criterion.
///
/// `fit` grows one child per distinct value of the highest-gain column and
/// recurses on the filtered sub-table until no features remain or the node
/// is pure. Alongside the tree it captures an immutable column-name-to-index
/// map over the training table's original column ordering; prediction
/// indexes input rows through that map, so it stays correct even though
/// filtered tables drop columns during growth.
pub struct DecisionTreeClassifier<V: CategoricalValue> {
    root: Option<TreeNode<V>>,
    column_indices: HashMap<String, usize>,
}

impl<V: CategoricalValue> Default for DecisionTreeClassifier<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: CategoricalValue> DecisionTreeClassifier<V> {
    pub fn new() -> Self {
        Self {
            root: None,
            column_indices: HashMap::new(),
        }
    }

    /// Builds the tree from a training table. Errors on a table with zero
    /// rows; refitting replaces the previous tree entirely.
    pub fn fit(&mut self, table: &Table<V>) -> Result<(), Box<dyn Error>> {
        if table.num_rows() == 0 {
            return Err("Cannot fit on a table with zero rows.".into());
        }

        self.column_indices = table.column_indices();
        self.root = Some(Self::grow(table));
        Ok(())
    }

    /// The learned tree, if fitted. Render it with its `Display` impl.
    pub fn root(&self) -> Option<&TreeNode<V>> {
        self.root.as_ref()
    }

    fn grow(table: &Table<V>) -> TreeNode<V> {
        // The majority vote is stored on every node, internal ones included;
        // it is the prediction fallback for values unseen during training.
        let mut node = TreeNode::new(table.majority_target());

        // No features left, or a pure node: this is a leaf.
        if table.is_empty() || table.all_targets_identical() {
            return node;
        }

        let split_index = table.best_split();
        let split_column = &table.columns()[split_index];
        let name = split_column.name();
        debug!(
            "splitting {} rows on column {:?} ({} feature columns remaining)",
            table.num_rows(),
            name,
            table.columns().len()
        );

        // Filtered sub-tables are disjoint and nothing is mutated after
        // creation, so sibling subtrees can grow in parallel. The ordered
        // collect keeps children in first-occurrence order of the values.
        node.children = split_column
            .distinct_values()
            .into_par_iter()
            .map(|value| {
                let filtered = table.filter_on(split_index, &value);
                let mut child = Self::grow(&filtered);
                child.split_column = Some(name.to_string());
                child.split_value = Some(value);
                child
            })
            .collect();

        node
    }

    /// Predicts the label for one row, laid out in the training table's
    /// original feature-column order. Errors if the classifier has not been
    /// fitted. A row value unseen during training is not an error: the walk
    /// stops and returns the majority label of the deepest matching node.
    pub fn predict<'a>(&'a self, row: &[V]) -> Result<&'a V, Box<dyn Error>> {
        let root = self
            .root
            .as_ref()
            .ok_or("Classifier has not been fitted.")?;
        Ok(self.walk(root, row))
    }

    fn walk<'a>(&self, node: &'a TreeNode<V>, row: &[V]) -> &'a V {
        if node.is_leaf() || row.is_empty() {
            return &node.majority_label;
        }

        for child in &node.children {
            let name = child
                .split_column
                .as_deref()
                .expect("non-root node without a split column");
            let value = child
                .split_value
                .as_ref()
                .expect("non-root node without a split value");
            // The map was built from the same training columns the tree was
            // grown on, so the name is always present.
            let index = self.column_indices[name];
            if &row[index] == value {
                return self.walk(child, row);
            }
        }

        // No child matches: the row carries a value this column never showed
        // during training. Fall back to this node's own majority vote.
        &node.majority_label
    }

    /// Predicts every row of a held-out table. The table must share the
    /// training table's feature-column ordering.
    pub fn predict_table(&self, table: &Table<V>) -> Result<Vec<V>, Box<dyn Error>> {
        table
            .rows()
            .iter()
            .map(|row| self.predict(row).cloned())
            .collect()
    }
}
