//! # Rusty-id3
//!
//! `rusty-id3` builds ID3 decision trees from labeled categorical tabular
//! data and predicts labels for unseen rows. Columns are named sequences of
//! discrete values; the splitting criterion is information gain over the
//! target's Shannon entropy, and prediction walks the tree with a graceful
//! fallback to the nearest majority label for values never seen in training.
//!
//! ## Getting Started
//!
//! To use `rusty-id3`, add the following to your `Cargo.toml` file:
//!
//! ```toml
//! [dependencies]
//! rusty-id3 = "*"
//! ```
//!
//! ## Example Usage
//!
//! As a quick example, here's how you can train a tree on an in-memory table
//! and classify new rows:
//!
//! ```rust
//! use rusty_id3::data::column::Column;
//! use rusty_id3::data::table::Table;
//! use rusty_id3::trees::classifier::DecisionTreeClassifier;
//!
//! let weather = Column::with_values("weather", vec!["sunny", "rainy", "sunny", "rainy"]);
//! let play = Column::with_values("play", vec!["yes", "no", "no", "no"]);
//! let table = Table::new(vec![weather], play).unwrap();
//!
//! let mut model = DecisionTreeClassifier::new();
//! model.fit(&table).unwrap();
//!
//! assert_eq!(model.predict(&["sunny"]).unwrap(), &"yes");
//! assert_eq!(model.predict(&["rainy"]).unwrap(), &"no");
//! // Unseen values fall back to the majority label instead of erroring.
//! assert_eq!(model.predict(&["cloudy"]).unwrap(), &"no");
//! ```

/// Columns, tables and CSV ingestion
pub mod data;
/// Functions for evaluating model performance
pub mod metrics;
/// Decision trees
pub mod trees;
