//! Token element types
//!
//! One module per token kind, plus [`Entity`], the sum type tying them
//! together, and the property map used by blocks.

pub mod block;
pub mod entity;
pub mod enumeration;
pub mod namespace;
pub mod properties;
pub mod property;
pub mod variable;

pub use block::BlockToken;
pub use entity::{Entity, EntityKind};
pub use enumeration::EnumerationToken;
pub use namespace::NamespaceToken;
pub use properties::{Properties, PropertyValue};
pub use property::PropertyToken;
pub use variable::VariableToken;
