//! Fixed user-facing message strings.
//!
//! User-visible output is always one of these messages, never a raw error.

/// Trailing phrase of a buy confirmation.
pub const BUY_CONFIRMATION_PHRASE: &str = "매수하시겠습니까?";

/// Trailing phrase of a sell confirmation.
pub const SELL_CONFIRMATION_PHRASE: &str = "매도하시겠습니까?";

/// Prompt when an order is missing one or more of stock, quantity, price.
pub const INCOMPLETE_ORDER_PROMPT: &str = "종목, 수량, 단가를 모두 말씀해 주세요.";

/// Fallback for unrecognized intents.
pub const DID_NOT_UNDERSTAND: &str = "죄송해요, 무슨 말씀인지 이해하지 못했어요.";

/// Acknowledgement for a balance inquiry.
pub const BALANCE_ACK: &str = "계좌 잔고를 조회할게요.";

/// Cancellation acknowledged, an active sub-dialog was cancelled.
pub const CANCEL_CONFIRMED: &str = "진행 중인 작업을 취소했어요.";

/// Cancel requested with nothing in progress.
pub const NOTHING_TO_CANCEL: &str = "취소할 작업이 없어요.";

/// Fixed two-line help message.
pub const HELP_TEXT: &str =
    "주식 매수/매도 주문과 계좌 잔고 조회를 도와드려요.\n예: \"신한지주 1주 현재가 매수\"";
