//! Token properties and their derivation from a token id.
//!
//! A token's id is written in binary, zero-padded to the configured property
//! count, and each digit (most significant first) picks one side of a trait
//! pair. Ids wider than the property count keep every digit, so their list is
//! longer. Only the first four digits have a fixed trait; any further digit is
//! filled with a property drawn from the full set of eight.

use crate::error::QuartoError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Number of digits with a fixed trait pair.
pub const STANDARD_PROPERTY_COUNT: usize = 4;

/// One of the eight traits a token may exhibit.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum Property {
    /// Colour digit 0.
    Black,
    /// Colour digit 1.
    White,
    /// Shape digit 0.
    Square,
    /// Shape digit 1.
    Cylindrical,
    /// Size digit 0.
    Small,
    /// Size digit 1.
    Big,
    /// Fill digit 1.
    Solid,
    /// Fill digit 0.
    Hollow,
}

impl Property {
    /// Returns the property selected by `bit` at a fixed digit position.
    ///
    /// Returns `None` for positions beyond the fourth.
    pub fn for_digit(position: usize, bit: bool) -> Option<Self> {
        let pair = match position {
            0 => (Property::Black, Property::White),
            1 => (Property::Square, Property::Cylindrical),
            2 => (Property::Small, Property::Big),
            3 => (Property::Hollow, Property::Solid),
            _ => return None,
        };
        Some(if bit { pair.1 } else { pair.0 })
    }
}

/// How digits beyond the fourth are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PropertyPadding {
    /// Draw from the thread-local generator; not reproducible.
    #[default]
    Random,
    /// Draw from a generator seeded with the given value.
    Seeded(u64),
}

impl PropertyPadding {
    /// Builds the generator used for one board's worth of tokens.
    pub(crate) fn generator(self) -> StdRng {
        match self {
            PropertyPadding::Random => StdRng::from_rng(&mut rand::rng()),
            PropertyPadding::Seeded(seed) => StdRng::seed_from_u64(seed),
        }
    }
}

/// Derives the ordered property list of token `id`.
///
/// The result has one entry per binary digit of `id` zero-padded to
/// `property_count`, so exactly `property_count` entries whenever
/// `id < 2^property_count`. The first four entries are determined by `id`;
/// every further slot consumes one draw from `rng`.
///
/// # Errors
///
/// Returns [`QuartoError::InvalidArgument`] if `property_count` is zero.
#[instrument(skip(rng))]
pub fn derive_properties(
    id: u32,
    property_count: usize,
    rng: &mut impl Rng,
) -> Result<Vec<Property>, QuartoError> {
    if property_count == 0 {
        return Err(QuartoError::invalid(
            "the number of properties has to be at least one.",
        ));
    }

    let all: Vec<Property> = Property::iter().collect();
    let width = u32::BITS - id.leading_zeros();
    let digits = property_count.max(width as usize);

    let properties: Vec<Property> = (0..digits)
        .rev()
        .enumerate()
        .map(|(position, shift)| {
            let bit = u32::try_from(shift)
                .ok()
                .and_then(|shift| id.checked_shr(shift))
                .is_some_and(|value| value & 1 == 1);
            Property::for_digit(position, bit)
                .unwrap_or_else(|| all[rng.random_range(0..all.len())])
        })
        .collect();

    debug!(id, ?properties, "Derived token properties");
    Ok(properties)
}
