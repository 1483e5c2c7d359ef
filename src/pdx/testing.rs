//! Testing utilities for token tree assertions
//!
//! A fluent API for asserting on parsed entities, so parser tests read as a
//! description of the expected tree:
//!
//! ```rust,ignore
//! use pdx::testing::assert_entities;
//!
//! let entities = pdx::parse("foo = { bar = 1 }").unwrap();
//!
//! assert_entities(&entities)
//!     .count(1)
//!     .entity(0, |entity| {
//!         entity.assert_block()
//!             .name("foo")
//!             .property("bar", "1")
//!             .child_count(0);
//!     });
//! ```

mod testing_assertions;

pub use testing_assertions::{
    assert_entities, BlockAssertion, EntitiesAssertion, EntityAssertion, EnumerationAssertion,
    NamespaceAssertion, PropertyAssertion, VariableAssertion,
};
