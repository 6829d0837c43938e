//! Entity normalization.
//!
//! Converts the recognizer's noisy, possibly-partial entity candidates into
//! a canonical [`OrderDescriptor`], plus the name/city side channel that
//! feeds the persisted greeting state. Per field, the first non-empty
//! candidate wins; later candidates are never aggregated.

use crate::domain::recognition::RecognitionResult;

use super::descriptor::OrderDescriptor;

/// Entity type carrying the order quantity.
pub const QUANTITY_ENTITY: &str = "수량";
/// Entity type carrying the stock name.
pub const STOCK_ENTITY: &str = "종목";
/// Entity type carrying the unit price.
pub const PRICE_ENTITY: &str = "단가";

/// Share counters stripped from the end of a quantity.
const SHARE_COUNTERS: [&str; 2] = ["주", "개"];

/// Currency suffix stripped from a literal price.
const CURRENCY_SUFFIX: &str = "원";

/// Price modifier phrases and their canonical two-letter codes, in match
/// priority order. Exactly one substitution is applied per price.
const PRICE_MODIFIERS: [(&str, &str); 5] = [
    ("시장가", "mp"),
    ("현재가", "cp"),
    ("하한가", "lp"),
    ("상한가", "hp"),
    ("시간외단일가", "tp"),
];

/// Recognized aliases for the greeting name slot.
const NAME_ENTITIES: [&str; 2] = ["Name", "Name_PatternAny"];
/// Recognized aliases for the greeting city slot.
const CITY_ENTITIES: [&str; 2] = ["City", "City_PatternAny"];

/// Name/city values recognized this turn, destined for the greeting state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GreetingSlots {
    pub name: Option<String>,
    pub city: Option<String>,
}

impl GreetingSlots {
    /// True when neither slot was recognized.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.city.is_none()
    }
}

/// Everything the normalizer extracts from one turn's entities.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Normalization {
    pub order: OrderDescriptor,
    pub greeting: GreetingSlots,
}

/// Normalizes raw entity candidates into canonical values.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntityNormalizer;

impl EntityNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Runs every extraction rule over one turn's recognition result.
    ///
    /// Pure: the returned value is the only output. Unicode text passes
    /// through untouched except for the documented suffix/phrase rules;
    /// no locale-dependent case folding is applied.
    pub fn normalize(&self, recognition: &RecognitionResult) -> Normalization {
        Normalization {
            order: OrderDescriptor {
                quantity: self
                    .first_text(recognition, QUANTITY_ENTITY)
                    .map(|t| normalize_quantity(&t)),
                stock: self
                    .first_text(recognition, STOCK_ENTITY)
                    .map(|t| normalize_stock(&t)),
                price: self
                    .first_text(recognition, PRICE_ENTITY)
                    .map(|t| normalize_price(&t)),
            },
            greeting: GreetingSlots {
                name: self.first_alias_text(recognition, &NAME_ENTITIES),
                city: self.first_alias_text(recognition, &CITY_ENTITIES),
            },
        }
    }

    fn first_text(&self, recognition: &RecognitionResult, entity_type: &str) -> Option<String> {
        recognition
            .first_candidate(entity_type)
            .map(|c| c.text.clone())
    }

    fn first_alias_text(
        &self,
        recognition: &RecognitionResult,
        aliases: &[&str],
    ) -> Option<String> {
        aliases
            .iter()
            .find_map(|alias| self.first_text(recognition, alias))
            .map(|t| capitalize_first(&t))
    }
}

/// Strips one trailing share counter, leaving all other text unchanged.
fn normalize_quantity(text: &str) -> String {
    for counter in SHARE_COUNTERS {
        if let Some(rest) = text.strip_suffix(counter) {
            return rest.to_string();
        }
    }
    text.to_string()
}

/// Removes all whitespace from a stock name.
fn normalize_stock(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Applies exactly one price substitution, first match wins.
///
/// Either the literal currency suffix is stripped, or one modifier phrase
/// is replaced by its canonical code; otherwise the text is used verbatim.
fn normalize_price(text: &str) -> String {
    if let Some(rest) = text.strip_suffix(CURRENCY_SUFFIX) {
        return rest.to_string();
    }
    for (phrase, code) in PRICE_MODIFIERS {
        if text.contains(phrase) {
            return text.replace(phrase, code);
        }
    }
    text.to_string()
}

/// Uppercases the first character only, via Unicode simple uppercase.
/// Uncased scripts pass through byte-for-byte.
fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
