//! Placeable tokens.

use crate::error::QuartoError;
use crate::property::{Property, derive_properties};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Identity of a token, unique within a board.
pub type TokenId = u32;

/// A token with a fixed id and the properties derived from it.
///
/// Two tokens are equal when their id and property count match. The derived
/// properties take no part in equality, so two tokens with randomly padded
/// properties still compare equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    id: TokenId,
    property_count: usize,
    properties: Vec<Property>,
}

impl Token {
    /// Creates token `id`, deriving its properties.
    ///
    /// # Errors
    ///
    /// Returns [`QuartoError::InvalidArgument`] if `property_count` is zero.
    pub fn new(id: TokenId, property_count: usize, rng: &mut impl Rng) -> Result<Self, QuartoError> {
        let properties = derive_properties(id, property_count, rng)?;
        Ok(Self {
            id,
            property_count,
            properties,
        })
    }

    /// Returns the token id.
    pub fn id(&self) -> TokenId {
        self.id
    }

    /// Returns the configured property count.
    pub fn property_count(&self) -> usize {
        self.property_count
    }

    /// Returns the derived properties, most significant digit first.
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Checks whether this token exhibits `property`.
    pub fn has(&self, property: Property) -> bool {
        self.properties.contains(&property)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.property_count == other.property_count
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.property_count.hash(state);
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}
