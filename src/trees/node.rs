use std::fmt;

use crate::data::column::CategoricalValue;

/// One node of a learned decision tree.
///
/// A node with no children is a leaf and predicts its majority label. Nodes
/// are immutable once the tree is built and only ever walked downward, so
/// each node simply owns its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode<V: CategoricalValue> {
    /// Name of the column the parent split on; `None` only at the root.
    pub split_column: Option<String>,
    /// Value of that column this branch represents; `None` only at the root.
    pub split_value: Option<V>,
    /// Majority vote over the target values that reached this node. Stored
    /// on every node, not just leaves: it is the fallback prediction when an
    /// input row carries a value no child was trained on.
    pub majority_label: V,
    /// One child per distinct value of the chosen split column, in
    /// first-occurrence order. Empty for leaves.
    pub children: Vec<TreeNode<V>>,
}

impl<V: CategoricalValue> TreeNode<V> {
    pub fn new(majority_label: V) -> Self {
        Self {
            split_column: None,
            split_value: None,
            majority_label,
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    fn fmt_subtree(&self, f: &mut fmt::Formatter<'_>, prefix: &str, is_tail: bool) -> fmt::Result {
        let mut label = match (&self.split_column, &self.split_value) {
            (Some(column), Some(value)) => format!("{}:{}", column, value),
            _ => "root".to_string(),
        };
        if self.is_leaf() {
            label.push('─');
            label.push_str(&self.majority_label.to_string());
        }

        writeln!(f, "{}{}{}", prefix, if is_tail { "└── " } else { "├── " }, label)?;

        let child_prefix = format!("{}{}", prefix, if is_tail { "    " } else { "│   " });
        let last = self.children.len().saturating_sub(1);
        for (index, child) in self.children.iter().enumerate() {
            child.fmt_subtree(f, &child_prefix, index == last)?;
        }
        Ok(())
    }
}

/// Indented depth-first listing of the tree: internal nodes as
/// `<column>:<value>`, leaves additionally suffixed with their majority
/// label. Purely cosmetic; prediction never looks at this.
impl<V: CategoricalValue> fmt::Display for TreeNode<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_subtree(f, "", true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_leaf() {
        let node: TreeNode<&str> = TreeNode::new("yes");
        assert!(node.is_leaf());
        assert_eq!(node.split_column, None);
        assert_eq!(node.split_value, None);
    }

    #[test]
    fn test_display_renders_indented_listing() {
        let mut sunny = TreeNode::new("yes");
        sunny.split_column = Some("weather".to_string());
        sunny.split_value = Some("sunny");

        let mut rainy = TreeNode::new("no");
        rainy.split_column = Some("weather".to_string());
        rainy.split_value = Some("rainy");

        let mut root = TreeNode::new("no");
        root.children = vec![sunny, rainy];

        let rendered = root.to_string();
        let expected = "\
└── root
    ├── weather:sunny─yes
    └── weather:rainy─no
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_display_renders_lone_leaf_with_label() {
        let root: TreeNode<&str> = TreeNode::new("a");
        assert_eq!(root.to_string(), "└── root─a\n");
    }
}
