//! Response composition.
//!
//! Pure presentation transforms: confirmation text and cards for complete
//! orders, and the welcome card for newly joined members. The composer
//! never mutates a descriptor. All text is UTF-8 end to end; the legacy
//! codepage round-trip of the source system was a behavioral no-op and is
//! not reproduced here.

pub mod messages;

use crate::domain::dialog::{CardAction, CardAttachment, CHANGE_ACCOUNT_TARGET};
use crate::domain::order::{OrderDescriptor, TradeSide};

/// Share counter appended after the quantity in confirmation text.
const SHARE_COUNTER: &str = "주";

/// A composed user-facing response: text plus its card payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
    pub text: String,
    pub card: CardAttachment,
}

/// Builds confirmation and welcome compositions.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseComposer;

impl ResponseComposer {
    pub fn new() -> Self {
        Self
    }

    /// Composes the order confirmation for a complete descriptor.
    ///
    /// Text is stock name, quantity with its share counter, price code and
    /// the side's trailing confirmation phrase, in that fixed order. The
    /// card's confirm action embeds the wire descriptor so downstream
    /// systems replay the exact trade parameters without re-parsing
    /// natural language.
    pub fn compose(&self, side: TradeSide, order: &OrderDescriptor) -> Composition {
        let text = format!(
            "{} {}{} {} {}",
            order.stock.as_deref().unwrap_or_default(),
            order.quantity.as_deref().unwrap_or_default(),
            SHARE_COUNTER,
            order.price.as_deref().unwrap_or_default(),
            confirmation_phrase(side),
        );

        let card = CardAttachment {
            title: card_title(side).to_string(),
            body: text.clone(),
            actions: vec![
                CardAction::new("계좌 변경", CHANGE_ACCOUNT_TARGET),
                CardAction::new("확인", order.to_wire()),
            ],
        };

        Composition { text, card }
    }

    /// Welcome card for one newly joined member.
    pub fn welcome_card(&self, bot_name: &str, member_name: &str) -> CardAttachment {
        CardAttachment {
            title: "환영합니다!".to_string(),
            body: format!(
                "{}님, 안녕하세요. {}입니다.\n종목, 수량, 단가를 말씀하시면 주문을 도와드려요.",
                member_name, bot_name
            ),
            actions: Vec::new(),
        }
    }
}

fn confirmation_phrase(side: TradeSide) -> &'static str {
    match side {
        TradeSide::Buy => messages::BUY_CONFIRMATION_PHRASE,
        TradeSide::Sell => messages::SELL_CONFIRMATION_PHRASE,
    }
}

fn card_title(side: TradeSide) -> &'static str {
    match side {
        TradeSide::Buy => "매수 확인",
        TradeSide::Sell => "매도 확인",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_order() -> OrderDescriptor {
        OrderDescriptor {
            quantity: Some("1".to_string()),
            stock: Some("신한지주".to_string()),
            price: Some("cp".to_string()),
        }
    }

    #[test]
    fn test_buy_composition_text() {
        let composition = ResponseComposer::new().compose(TradeSide::Buy, &complete_order());

        assert_eq!(composition.text, "신한지주 1주 cp 매수하시겠습니까?");
        assert!(composition.text.ends_with(messages::BUY_CONFIRMATION_PHRASE));
    }

    #[test]
    fn test_sell_composition_text() {
        let composition = ResponseComposer::new().compose(TradeSide::Sell, &complete_order());

        assert!(composition.text.ends_with(messages::SELL_CONFIRMATION_PHRASE));
    }

    #[test]
    fn test_card_embeds_wire_descriptor() {
        let order = complete_order();

        let composition = ResponseComposer::new().compose(TradeSide::Buy, &order);

        let confirm = &composition.card.actions[1];
        assert_eq!(confirm.value, order.to_wire());
        assert_eq!(confirm.value, "1|SEP|신한지주|SEP|cp");
    }

    #[test]
    fn test_card_carries_static_change_account_action() {
        let composition = ResponseComposer::new().compose(TradeSide::Buy, &complete_order());

        assert_eq!(composition.card.actions[0].value, CHANGE_ACCOUNT_TARGET);
    }

    #[test]
    fn test_compose_does_not_mutate_descriptor() {
        let order = complete_order();
        let before = order.clone();

        let _ = ResponseComposer::new().compose(TradeSide::Sell, &order);

        assert_eq!(order, before);
    }

    #[test]
    fn test_welcome_card_names_member_and_bot() {
        let card = ResponseComposer::new().welcome_card("트레이드 파일럿", "지민");

        assert_eq!(card.title, "환영합니다!");
        assert!(card.body.contains("지민"));
        assert!(card.body.contains("트레이드 파일럿"));
        assert!(card.actions.is_empty());
    }
}
