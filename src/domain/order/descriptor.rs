//! Canonical order descriptor and its wire form.
//!
//! The descriptor is created fresh each turn and never persisted. Its wire
//! form is a deliberate legacy interchange format: the three fields joined
//! in fixed order with a reserved separator token, consumed verbatim by the
//! downstream trade-event pipeline and card actions.

use thiserror::Error;

/// Reserved separator token between wire segments.
pub const FIELD_SEPARATOR: &str = "|SEP|";

/// Error raised when a wire string does not split into exactly three segments.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DescriptorParseError {
    #[error("Expected 3 descriptor segments, got {actual}")]
    WrongSegmentCount { actual: usize },
}

/// Normalized {quantity, stock, price} record for one utterance.
///
/// Each field, when present, is already canonical: unit and modifier
/// suffixes stripped by the normalizer. Absent fields serialize to empty
/// segments, never to placeholder words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDescriptor {
    pub quantity: Option<String>,
    pub stock: Option<String>,
    pub price: Option<String>,
}

impl OrderDescriptor {
    /// True when all three fields are present.
    ///
    /// This is the routing threshold for emitting a trade event: no
    /// partial order is ever sent downstream.
    pub fn is_complete(&self) -> bool {
        self.quantity.is_some() && self.stock.is_some() && self.price.is_some()
    }

    /// Serializes to the wire form: quantity, stock, price joined with
    /// [`FIELD_SEPARATOR`], absent fields as empty segments.
    pub fn to_wire(&self) -> String {
        [
            self.quantity.as_deref().unwrap_or(""),
            self.stock.as_deref().unwrap_or(""),
            self.price.as_deref().unwrap_or(""),
        ]
        .join(FIELD_SEPARATOR)
    }

    /// Parses a wire string back into the three fields.
    ///
    /// Requires exactly three segments; empty segments become absent
    /// fields.
    pub fn from_wire(wire: &str) -> Result<Self, DescriptorParseError> {
        let segments: Vec<&str> = wire.split(FIELD_SEPARATOR).collect();
        if segments.len() != 3 {
            return Err(DescriptorParseError::WrongSegmentCount {
                actual: segments.len(),
            });
        }

        let field = |s: &str| {
            if s.is_empty() {
                None
            } else {
                Some(s.to_string())
            }
        };

        Ok(Self {
            quantity: field(segments[0]),
            stock: field(segments[1]),
            price: field(segments[2]),
        })
    }
}
