//! The variable catalogue.
//!
//! Variables form a forest: each root is a base color (primary, secondary,
//! the two "wrong answer" colors) and every descendant derives its default
//! from its parent. The catalogue is pure data, built once and never mutated.
//!
//! - [`VariableDefinition`]: one named color slot
//! - [`VariableRegistry`]: the validated, ordered catalogue plus hard-coded defaults
//! - [`HierarchyNode`] / [`build_hierarchy`]: the nested tree used for display

mod definition;
mod hierarchy;
mod registry;

pub use definition::VariableDefinition;
pub use hierarchy::{build_hierarchy, HierarchyNode};
pub use registry::{VariableRegistry, GAME_DEFAULTS};
