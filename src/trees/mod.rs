/// ID3 decision tree classifier
pub mod classifier;
/// Learned tree nodes and rendering
pub mod node;
