pub mod suit;
pub mod rank;
pub mod strain;
pub mod card;
pub mod hand;
pub mod board;
pub mod deal;
pub mod error;
pub mod io;

pub use suit::Suit;
pub use rank::Rank;
pub use strain::Strain;
pub use card::Card;
pub use hand::{Distribution, Hand};
pub use board::{Partnership, Position};
pub use deal::Deal;
pub use error::BridgeError;
