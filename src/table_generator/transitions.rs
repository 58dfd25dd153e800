//! Per-table successor functions.
//!
//! Each one unpacks an identifier, folds the raw 1..52 card into the domain
//! the table tracks (0 folds to the skip sentinel), appends it, validates,
//! and returns the canonical successor — or `None` to prune the branch.

use crate::constants::{card_rank, card_suit, ANY_CARD, SKIP_BOARD};
use crate::hand_id::PartialHand;

/// Flush-suit table: cards fold to their suit.
pub fn step_flush_suits(id: u64, new_card: u8) -> Option<u64> {
    let folded = if new_card == 0 {
        SKIP_BOARD
    } else {
        card_suit(new_card)
    };
    let mut hand = PartialHand::unpack(id);
    hand.push(folded);
    Some(hand.pack())
}

/// Flush-rank table for one tracked suit: matching cards fold to rank + 1
/// (2..14, so every suited rank sorts above the any-card sentinel), all
/// other cards fold to [`ANY_CARD`].
pub fn step_flush_ranks(id: u64, new_card: u8, flush_suit: u8) -> Option<u64> {
    let folded = if new_card == 0 {
        SKIP_BOARD
    } else if card_suit(new_card) == flush_suit {
        2 + ((new_card - 1) >> 2)
    } else {
        ANY_CARD
    };

    let mut hand = PartialHand::unpack(id);
    if folded != ANY_CARD && folded != SKIP_BOARD {
        // a suited rank may appear at most once
        let duplicate = hand.pocket[..hand.n_pocket]
            .iter()
            .chain(hand.board[..hand.n_board].iter())
            .any(|&card| card == folded);
        if duplicate {
            return None;
        }
    }
    hand.push(folded);

    let suited_pocket = hand.pocket[..hand.n_pocket]
        .iter()
        .filter(|&&card| card != ANY_CARD)
        .count();
    let suited_board = hand.board[..hand.n_board]
        .iter()
        .filter(|&&card| card != ANY_CARD && card != SKIP_BOARD)
        .count();

    // prune branches that can never reach two suited pocket cards plus
    // three suited board cards
    if hand.n_board == 4 && suited_board <= 1 {
        return None;
    }
    if hand.n_board == 5 && suited_board <= 2 {
        return None;
    }
    if hand.n_board == 5 && hand.n_pocket == 3 && suited_pocket == 0 {
        return None;
    }
    if hand.n_board == 5 && hand.n_pocket == 4 && suited_pocket <= 1 {
        return None;
    }
    Some(hand.pack())
}

/// No-flush table: cards fold to their rank.
pub fn step_no_flush(id: u64, new_card: u8) -> Option<u64> {
    let folded = if new_card == 0 {
        SKIP_BOARD
    } else {
        card_rank(new_card)
    };
    let mut hand = PartialHand::unpack(id);
    hand.push(folded);

    let mut rank_counts = [0u8; 14];
    for &card in hand.pocket[..hand.n_pocket]
        .iter()
        .chain(hand.board[..hand.n_board].iter())
    {
        if card != SKIP_BOARD {
            rank_counts[usize::from(card)] += 1;
        }
    }
    if rank_counts.iter().any(|&count| count > 4) {
        return None;
    }
    Some(hand.pack())
}
