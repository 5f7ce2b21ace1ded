// cspell:ignore AKQJ
use crate::board::Position;
use crate::deal::Deal;
use crate::error::BridgeError;
use crate::hand::Hand;
use crate::suit::Suit;

/// Encodes a hand as `spades.hearts.diamonds.clubs`, keeping each suit's rank order.
pub fn export_hand(hand: &Hand) -> String {
    Suit::PBN
        .iter()
        .map(|&suit| hand.holding(suit).iter().map(|r| r.to_char()).collect::<String>())
        .collect::<Vec<_>>()
        .join(".")
}

pub fn import_hand(hand_str: &str) -> Result<Hand, BridgeError> {
    let suits: Vec<&str> = hand_str.split('.').collect();
    if suits.len() != 4 {
        return Err(BridgeError::malformed(hand_str, "a hand needs exactly four suits"));
    }

    let mut hand = Hand::new();
    for (suit, ranks) in Suit::PBN.into_iter().zip(suits) {
        hand.add_holding(suit, ranks)?;
    }
    Ok(hand)
}

/// Encodes a deal as `"<start>:<hand> <hand> <hand> <hand>"`, clockwise from `start`.
pub fn export_deal(deal: &Deal, start: Position) -> String {
    let mut s = format!("{}:", start.to_char());
    let mut current_pos = start;
    for i in 0..4 {
        if i > 0 {
            s.push(' ');
        }
        s.push_str(&export_hand(deal.hand(current_pos)));
        current_pos = current_pos.next();
    }
    s
}

pub fn import_deal(deal_str: &str) -> Result<Deal, BridgeError> {
    let parts: Vec<&str> = deal_str.trim().split(':').collect();
    let &[seat, hands] = parts.as_slice() else {
        return Err(BridgeError::malformed(deal_str, "expected <seat>:<hands>"));
    };

    let mut seat_chars = seat.chars();
    let mut current_pos = match (seat_chars.next(), seat_chars.next()) {
        (Some(c), None) => Position::from_char(c)
            .ok_or_else(|| BridgeError::malformed(deal_str, "unknown seat letter"))?,
        _ => return Err(BridgeError::malformed(deal_str, "unknown seat letter")),
    };

    let hand_strs: Vec<&str> = hands.split_whitespace().collect();
    if hand_strs.len() != 4 {
        return Err(BridgeError::malformed(deal_str, "a deal needs exactly four hands"));
    }

    let mut deal = Deal::default();
    for hand_str in hand_strs {
        *deal.hand_mut(current_pos) = import_hand(hand_str)?;
        current_pos = current_pos.next();
    }
    Ok(deal)
}

/// Renders the PBN tag line for a deal, `[Deal "N:..."]`.
pub fn export_deal_tag(deal: &Deal) -> String {
    format!("[Deal \"{}\"]", export_deal(deal, Position::North))
}

/// Reads a deal from a PBN `[Deal "..."]` tag line.
pub fn import_deal_tag(line: &str) -> Result<Deal, BridgeError> {
    let inner = line
        .trim()
        .strip_prefix("[Deal \"")
        .and_then(|rest| rest.strip_suffix("\"]"))
        .ok_or_else(|| BridgeError::malformed(line, "expected a [Deal \"...\"] tag"))?;
    import_deal(inner)
}
