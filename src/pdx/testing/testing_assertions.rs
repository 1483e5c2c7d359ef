//! Fluent assertion API for parsed entities

use crate::pdx::ast::{
    AstNode, BlockToken, Entity, EnumerationToken, NamespaceToken, PropertyToken, PropertyValue,
    VariableToken,
};

fn assert_text(actual: &str, expected: &str, context: &str) {
    assert_eq!(
        actual, expected,
        "{}: Expected '{}', but got '{}'",
        context, expected, actual
    );
}

// ============================================================================
// Entry Point
// ============================================================================

/// Create an assertion builder for a list of top-level entities
pub fn assert_entities(entities: &[Entity]) -> EntitiesAssertion<'_> {
    EntitiesAssertion { entities }
}

// ============================================================================
// Entity List Assertions
// ============================================================================

pub struct EntitiesAssertion<'a> {
    entities: &'a [Entity],
}

impl<'a> EntitiesAssertion<'a> {
    /// Assert the number of top-level entities
    pub fn count(self, expected: usize) -> Self {
        let actual = self.entities.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} entities, found {}: [{}]",
            expected,
            actual,
            summarize(self.entities)
        );
        self
    }

    /// Assert on a specific entity by index
    pub fn entity<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(EntityAssertion<'a>),
    {
        assert!(
            index < self.entities.len(),
            "Entity index {} out of bounds ({} entities)",
            index,
            self.entities.len()
        );

        assertion(EntityAssertion {
            entity: &self.entities[index],
            context: format!("entities[{}]", index),
        });
        self
    }
}

fn summarize(entities: &[Entity]) -> String {
    entities
        .iter()
        .map(|entity| format!("{} {}", entity.kind(), entity.name()))
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Entity Assertions
// ============================================================================

pub struct EntityAssertion<'a> {
    entity: &'a Entity,
    context: String,
}

impl<'a> EntityAssertion<'a> {
    fn wrong_kind(&self, expected: &str) -> ! {
        panic!(
            "{}: Expected {}, found {}",
            self.context,
            expected,
            self.entity.display_label()
        )
    }

    /// Assert this entity is a block and return block-specific assertions
    pub fn assert_block(self) -> BlockAssertion<'a> {
        match self.entity {
            Entity::Block(block) => BlockAssertion {
                block,
                context: self.context,
            },
            _ => self.wrong_kind("Block"),
        }
    }

    /// Assert this entity is a property
    pub fn assert_property(self) -> PropertyAssertion<'a> {
        match self.entity {
            Entity::Property(property) => PropertyAssertion {
                property,
                context: self.context,
            },
            _ => self.wrong_kind("Property"),
        }
    }

    /// Assert this entity is an enumeration
    pub fn assert_enumeration(self) -> EnumerationAssertion<'a> {
        match self.entity {
            Entity::Enumeration(enumeration) => EnumerationAssertion {
                enumeration,
                context: self.context,
            },
            _ => self.wrong_kind("Enumeration"),
        }
    }

    /// Assert this entity is a variable
    pub fn assert_variable(self) -> VariableAssertion<'a> {
        match self.entity {
            Entity::Variable(variable) => VariableAssertion {
                variable,
                context: self.context,
            },
            _ => self.wrong_kind("Variable"),
        }
    }

    /// Assert this entity is a namespace
    pub fn assert_namespace(self) -> NamespaceAssertion<'a> {
        match self.entity {
            Entity::Namespace(namespace) => NamespaceAssertion {
                namespace,
                context: self.context,
            },
            _ => self.wrong_kind("Namespace"),
        }
    }
}

// ============================================================================
// Block Assertions
// ============================================================================

pub struct BlockAssertion<'a> {
    block: &'a BlockToken,
    context: String,
}

impl<'a> BlockAssertion<'a> {
    /// Assert the block name
    pub fn name(self, expected: &str) -> Self {
        assert_text(self.block.name(), expected, &self.context);
        self
    }

    /// Assert the number of distinct property names
    pub fn property_count(self, expected: usize) -> Self {
        let actual = self.block.properties().len();
        assert_eq!(
            actual,
            expected,
            "{}: Expected {} properties, found {} ({})",
            self.context,
            expected,
            actual,
            self.block.properties().keys().collect::<Vec<_>>().join(", ")
        );
        self
    }

    /// Assert a scalar property value
    pub fn property(self, name: &str, expected: &str) -> Self {
        match self.block.property(name) {
            Some(PropertyValue::Scalar(value)) => {
                assert_text(value, expected, &format!("{}.{}", self.context, name));
            }
            Some(PropertyValue::List(values)) => panic!(
                "{}: Expected property '{}' = '{}', found list {:?}",
                self.context, name, expected, values
            ),
            None => panic!(
                "{}: Expected property '{}', block has none",
                self.context, name
            ),
        }
        self
    }

    /// Assert a list-valued property (an enumeration folded into the block)
    pub fn list(self, name: &str, expected: &[&str]) -> Self {
        match self.block.property(name) {
            Some(PropertyValue::List(values)) => assert_eq!(
                values, expected,
                "{}: Unexpected items in list '{}'",
                self.context, name
            ),
            Some(PropertyValue::Scalar(value)) => panic!(
                "{}: Expected list '{}', found scalar '{}'",
                self.context, name, value
            ),
            None => panic!("{}: Expected list '{}', block has none", self.context, name),
        }
        self
    }

    /// Assert the block has no property called `name`
    pub fn no_property(self, name: &str) -> Self {
        assert!(
            !self.block.properties().contains_key(name),
            "{}: Expected no property '{}'",
            self.context,
            name
        );
        self
    }

    /// Assert the number of nested blocks
    pub fn child_count(self, expected: usize) -> Self {
        let actual = self.block.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} child blocks, found {}",
            self.context, expected, actual
        );
        self
    }

    /// Assert on a nested block by position
    pub fn child<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        let children = self.block.children();
        assert!(
            index < children.len(),
            "{}: Child index {} out of bounds ({} children)",
            self.context,
            index,
            children.len()
        );
        assertion(BlockAssertion {
            block: &children[index],
            context: format!("{}.children[{}]", self.context, index),
        });
        self
    }

    /// Assert on the nested block that `includes()` reports for `name`
    pub fn include<F>(self, name: &str, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        let block = self.block.include(name).unwrap_or_else(|| {
            panic!("{}: Expected a child block named '{}'", self.context, name)
        });
        assertion(BlockAssertion {
            block,
            context: format!("{}.{}", self.context, name),
        });
        self
    }
}

// ============================================================================
// Scalar Assertions
// ============================================================================

pub struct PropertyAssertion<'a> {
    property: &'a PropertyToken,
    context: String,
}

impl<'a> PropertyAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_text(self.property.name(), expected, &self.context);
        self
    }

    pub fn value(self, expected: &str) -> Self {
        assert_text(self.property.value(), expected, &self.context);
        self
    }

    /// Assert the value starts with `prefix`
    pub fn value_starts_with(self, prefix: &str) -> Self {
        assert!(
            self.property.value().starts_with(prefix),
            "{}: Expected value to start with '{}', but got '{}'",
            self.context,
            prefix,
            self.property.value()
        );
        self
    }
}

pub struct VariableAssertion<'a> {
    variable: &'a VariableToken,
    context: String,
}

impl<'a> VariableAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_text(self.variable.name(), expected, &self.context);
        self
    }

    pub fn value(self, expected: &str) -> Self {
        assert_text(self.variable.value(), expected, &self.context);
        self
    }
}

pub struct NamespaceAssertion<'a> {
    namespace: &'a NamespaceToken,
    context: String,
}

impl<'a> NamespaceAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_text(self.namespace.name(), expected, &self.context);
        self
    }
}

pub struct EnumerationAssertion<'a> {
    enumeration: &'a EnumerationToken,
    context: String,
}

impl<'a> EnumerationAssertion<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_text(self.enumeration.name(), expected, &self.context);
        self
    }

    /// Assert the items in source order
    pub fn values(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.enumeration.values(),
            expected,
            "{}: Unexpected enumeration items",
            self.context
        );
        self
    }

    /// Assert any item contains `substring`
    pub fn any_value_contains(self, substring: &str) -> Self {
        assert!(
            self.enumeration
                .iter()
                .any(|value| value.contains(substring)),
            "{}: Expected an item containing '{}', found {:?}",
            self.context,
            substring,
            self.enumeration.values()
        );
        self
    }
}
