//! Order domain: canonical descriptors and entity normalization.

mod descriptor;
mod normalizer;

pub use descriptor::{DescriptorParseError, OrderDescriptor, FIELD_SEPARATOR};
pub use normalizer::{
    EntityNormalizer, GreetingSlots, Normalization, PRICE_ENTITY, QUANTITY_ENTITY, STOCK_ENTITY,
};

/// Side of a trade order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeSide {
    Buy,
    Sell,
}
