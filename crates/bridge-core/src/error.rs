use crate::card::Card;
use thiserror::Error;

/// Failures raised while building hands and deals or parsing their notation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BridgeError {
    #[error("invalid card {0:?}")]
    InvalidCard(String),
    #[error("card {0} not found in hand")]
    CardNotFound(Card),
    #[error("malformed notation {notation:?}: {reason}")]
    MalformedNotation { notation: String, reason: &'static str },
    #[error("a deal needs 52 cards, got {0}")]
    InvalidDeck(usize),
}

impl BridgeError {
    pub(crate) fn malformed(notation: &str, reason: &'static str) -> Self {
        BridgeError::MalformedNotation {
            notation: notation.to_string(),
            reason,
        }
    }
}
