//! Declarative schema model for resources
//!
//! Schemas describe the attribute surface of a resource: names, types,
//! required/optional/computed flags, and sensitivity. The runtime uses them
//! for configuration decoding and documentation; providers build them once
//! with the fluent builders and cache the result.

use std::collections::HashMap;

/// Attribute type system. `SingleNested` models an optional nested
/// configuration object (at most one instance), not a collection.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeType {
    String,
    Number,
    Bool,
    List(Box<AttributeType>),
    SingleNested(Vec<Attribute>),
}

/// A single configuration attribute
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub r#type: AttributeType,
    pub description: String,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    pub sensitive: bool,
}

/// Schema for a managed resource, keyed by attribute name.
/// Version is incremented when a change requires state migration.
#[derive(Debug, Clone)]
pub struct ResourceSchema {
    pub version: i64,
    pub attributes: HashMap<String, Attribute>,
}

/// Fluent builder for a single attribute
pub struct AttributeBuilder {
    attribute: Attribute,
}

impl AttributeBuilder {
    fn new(name: &str, r#type: AttributeType) -> Self {
        Self {
            attribute: Attribute {
                name: name.to_string(),
                r#type,
                description: String::new(),
                required: false,
                optional: false,
                computed: false,
                sensitive: false,
            },
        }
    }

    pub fn string(name: &str) -> Self {
        Self::new(name, AttributeType::String)
    }

    pub fn number(name: &str) -> Self {
        Self::new(name, AttributeType::Number)
    }

    pub fn bool(name: &str) -> Self {
        Self::new(name, AttributeType::Bool)
    }

    pub fn list_of_strings(name: &str) -> Self {
        Self::new(name, AttributeType::List(Box::new(AttributeType::String)))
    }

    pub fn single_nested(name: &str, attributes: Vec<Attribute>) -> Self {
        Self::new(name, AttributeType::SingleNested(attributes))
    }

    pub fn required(mut self) -> Self {
        self.attribute.required = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.attribute.optional = true;
        self
    }

    pub fn computed(mut self) -> Self {
        self.attribute.computed = true;
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.attribute.sensitive = true;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.attribute.description = description.into();
        self
    }

    pub fn build(self) -> Attribute {
        self.attribute
    }
}

/// Fluent builder for a resource schema
#[derive(Default)]
pub struct SchemaBuilder {
    attributes: Vec<Attribute>,
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attribute(mut self, attribute: AttributeBuilder) -> Self {
        self.attributes.push(attribute.build());
        self
    }

    pub fn build_resource(self, version: i64) -> ResourceSchema {
        ResourceSchema {
            version,
            attributes: self
                .attributes
                .into_iter()
                .map(|a| (a.name.clone(), a))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_flags_and_description() {
        let schema = SchemaBuilder::new()
            .attribute(
                AttributeBuilder::string("url")
                    .required()
                    .description("URL path"),
            )
            .attribute(AttributeBuilder::string("token").optional().sensitive())
            .attribute(AttributeBuilder::number("weight").computed())
            .build_resource(0);

        assert_eq!(schema.version, 0);
        assert_eq!(schema.attributes.len(), 3);

        let url = &schema.attributes["url"];
        assert!(url.required);
        assert!(!url.optional);
        assert_eq!(url.description, "URL path");
        assert_eq!(url.r#type, AttributeType::String);

        assert!(schema.attributes["token"].sensitive);
        assert!(schema.attributes["weight"].computed);
    }

    #[test]
    fn list_and_nested_types() {
        let schema = SchemaBuilder::new()
            .attribute(AttributeBuilder::list_of_strings("fields").optional())
            .attribute(
                AttributeBuilder::single_nested(
                    "notification",
                    vec![
                        AttributeBuilder::string("to").required().build(),
                        AttributeBuilder::bool("enabled").optional().build(),
                    ],
                )
                .optional(),
            )
            .build_resource(1);

        assert_eq!(
            schema.attributes["fields"].r#type,
            AttributeType::List(Box::new(AttributeType::String))
        );

        match &schema.attributes["notification"].r#type {
            AttributeType::SingleNested(nested) => {
                assert_eq!(nested.len(), 2);
                assert_eq!(nested[0].name, "to");
                assert!(nested[0].required);
            }
            other => panic!("expected SingleNested, got {:?}", other),
        }
    }
}
