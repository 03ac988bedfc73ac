/// Defines the decision tree weak learner.
pub mod dtree;
/// Defines the classifier produced by `DecisionTree`.
pub mod dtree_classifier;
/// Defines a builder for `DecisionTree`.
pub mod builder;
/// Defines the splitting criteria.
pub mod split_by;

/// Defines the inner representations of `DecisionTreeClassifier`.
mod node;


pub use dtree::DecisionTree;
pub use dtree_classifier::DecisionTreeClassifier;
pub use builder::DecisionTreeBuilder;
pub use split_by::SplitBy;
