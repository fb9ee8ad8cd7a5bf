use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;
use strata_utils::Identifier;
use thiserror::Error;

use crate::properties::{Property, PropertyValue};

/// Failure to read or change a property on a [`BlockState`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The block has no property with this name and domain.
    #[error("block {block} has no property {property}")]
    Missing {
        /// The block being modified.
        block: Identifier,
        /// Name of the requested property.
        property: String,
    },
    /// The value lies outside the property's domain.
    #[error("value {value} is not allowed for property {property}")]
    InvalidValue {
        /// Name of the property.
        property: String,
        /// The rejected value.
        value: String,
    },
}

/// A block type: its identifier, its properties and the default value of each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockDefinition {
    /// Namespaced block identifier.
    pub key: Identifier,
    /// Declared properties, in declaration order.
    pub properties: Vec<Property>,
    /// Default value for each entry of `properties`.
    pub defaults: Vec<PropertyValue>,
}

impl BlockDefinition {
    /// A block without properties.
    #[must_use]
    pub fn new(key: Identifier) -> Self {
        Self {
            key,
            properties: Vec::new(),
            defaults: Vec::new(),
        }
    }

    /// Adds a property defaulting to the first value of its domain.
    #[must_use]
    pub fn with_property(mut self, property: Property) -> Self {
        let default = property
            .domain
            .first()
            .unwrap_or(PropertyValue::Bool(false));
        self.properties.push(property);
        self.defaults.push(default);
        self
    }

    /// Adds a property with an explicit default.
    ///
    /// A default outside the domain falls back to the domain's first value.
    #[must_use]
    pub fn with_default(mut self, property: Property, default: PropertyValue) -> Self {
        let default = if property.domain.contains(&default) {
            default
        } else {
            property
                .domain
                .first()
                .unwrap_or(PropertyValue::Bool(false))
        };
        self.properties.push(property);
        self.defaults.push(default);
        self
    }

    fn index_of(&self, property: &Property) -> Option<usize> {
        self.properties.iter().position(|p| p == property)
    }

    fn index_of_name(&self, name: &str) -> Option<usize> {
        self.properties.iter().position(|p| p.name == name)
    }
}

/// A block plus a value for each of its properties.
#[derive(Clone)]
pub struct BlockState {
    definition: Arc<BlockDefinition>,
    values: SmallVec<[PropertyValue; 4]>,
}

impl BlockState {
    /// The default state of `definition`.
    #[must_use]
    pub fn default_of(definition: Arc<BlockDefinition>) -> Self {
        let values = definition.defaults.iter().cloned().collect();
        Self { definition, values }
    }

    /// The block identifier.
    #[must_use]
    pub fn block(&self) -> &Identifier {
        &self.definition.key
    }

    /// The definition this state belongs to.
    #[must_use]
    pub fn definition(&self) -> &BlockDefinition {
        &self.definition
    }

    /// True for `air`, `cave_air` and `void_air`.
    #[must_use]
    pub fn is_air(&self) -> bool {
        let key = self.block();
        key.is_vanilla() && matches!(&*key.path, "air" | "cave_air" | "void_air")
    }

    /// Iterates over every property and its current value.
    pub fn properties(&self) -> impl Iterator<Item = (&Property, &PropertyValue)> {
        self.definition.properties.iter().zip(self.values.iter())
    }

    /// True if the block declares this exact property.
    #[must_use]
    pub fn has_property(&self, property: &Property) -> bool {
        self.definition.index_of(property).is_some()
    }

    /// Looks up a declared property by name.
    #[must_use]
    pub fn property_named(&self, name: &str) -> Option<&Property> {
        self.definition
            .index_of_name(name)
            .map(|i| &self.definition.properties[i])
    }

    /// Value of the given property, if the block declares it.
    #[must_use]
    pub fn try_get_value(&self, property: &Property) -> Option<&PropertyValue> {
        self.definition.index_of(property).map(|i| &self.values[i])
    }

    /// Value of the property with the given name.
    #[must_use]
    pub fn get_value_by_name(&self, name: &str) -> Option<&PropertyValue> {
        self.definition.index_of_name(name).map(|i| &self.values[i])
    }

    /// Returns a copy of this state with `property` set to `value`.
    pub fn set_value(
        &self,
        property: &Property,
        value: impl Into<PropertyValue>,
    ) -> Result<Self, PropertyError> {
        let index = self
            .definition
            .index_of(property)
            .ok_or_else(|| PropertyError::Missing {
                block: self.block().clone(),
                property: property.name.to_string(),
            })?;
        self.set_at(index, value.into())
    }

    /// Returns a copy of this state with the property named `name` set to `value`.
    pub fn set_value_by_name(
        &self,
        name: &str,
        value: PropertyValue,
    ) -> Result<Self, PropertyError> {
        let index = self
            .definition
            .index_of_name(name)
            .ok_or_else(|| PropertyError::Missing {
                block: self.block().clone(),
                property: name.to_string(),
            })?;
        self.set_at(index, value)
    }

    /// Parses `raw` in the domain of the named property and sets it.
    pub fn with_serialized(&self, name: &str, raw: &str) -> Result<Self, PropertyError> {
        let property = self.property_named(name).ok_or_else(|| PropertyError::Missing {
            block: self.block().clone(),
            property: name.to_string(),
        })?;
        let value = property
            .domain
            .parse(raw)
            .ok_or_else(|| PropertyError::InvalidValue {
                property: name.to_string(),
                value: raw.to_string(),
            })?;
        self.set_value_by_name(name, value)
    }

    fn set_at(&self, index: usize, value: PropertyValue) -> Result<Self, PropertyError> {
        let property = &self.definition.properties[index];
        if !property.domain.contains(&value) {
            return Err(PropertyError::InvalidValue {
                property: property.name.to_string(),
                value: value.to_string(),
            });
        }
        let mut next = self.clone();
        next.values[index] = value;
        Ok(next)
    }
}

impl PartialEq for BlockState {
    fn eq(&self, other: &Self) -> bool {
        self.definition.key == other.definition.key && self.values == other.values
    }
}

impl Eq for BlockState {}

impl fmt::Display for BlockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.block())?;
        if self.values.is_empty() {
            return Ok(());
        }
        f.write_str("[")?;
        for (i, (property, value)) in self.properties().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}={value}", property.name)?;
        }
        f.write_str("]")
    }
}

impl fmt::Debug for BlockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlockState({self})")
    }
}
