//! Terminal evaluators for complete 9-slot identifiers.
//!
//! Each one scores the best five-card hand formed by exactly two pocket
//! cards and three board cards, skipping padded board slots. A terminal
//! called on an identifier that is too short to hold seven real cards is a
//! generator bug and panics with the offending hand.

use crate::cactus;
use crate::constants::{board_perm_count, ANY_CARD, BOARD_PERMS, POCKET_PERMS, SKIP_BOARD};
use crate::hand_id::PartialHand;

/// Suit 1..4 that holds a flush under the two-pocket/three-board rule, or
/// -1 when none does. Suit counts are capped at what a hand can actually
/// use: two pocket cards and three board cards.
pub fn eval_flush_suits(id: u64) -> i32 {
    let hand = PartialHand::unpack(id);
    let mut pocket_suits = [0u8; 5];
    let mut board_suits = [0u8; 5];
    for &suit in &hand.pocket[..hand.n_pocket] {
        let suit = usize::from(suit);
        pocket_suits[suit] = (pocket_suits[suit] + 1).min(2);
    }
    for &suit in &hand.board[..hand.n_board] {
        if suit != SKIP_BOARD {
            let suit = usize::from(suit);
            board_suits[suit] = (board_suits[suit] + 1).min(3);
        }
    }
    for suit in 1..=4 {
        if pocket_suits[suit] + board_suits[suit] >= 5 {
            return suit as i32;
        }
    }
    -1
}

/// Best straight-flush-or-flush score in the tracked suit, or -1 when the
/// identifier cannot supply two suited pocket cards and three suited board
/// cards. Cards are the suited-rank folding: 2..14, or the any-card
/// sentinel.
pub fn eval_flush_ranks(id: u64) -> i32 {
    let hand = PartialHand::unpack(id);
    let (board, n_board) = hand.board_without_skips();
    let pocket = hand.pocket;
    if pocket[0] == 0 || pocket[1] == 0 || board[0] == 0 || board[1] == 0 || board[2] == 0 {
        panic!("flush-rank terminal on a short hand: {hand}");
    }
    // groups are sorted descending, so if the lead slots hold the any-card
    // sentinel there are not enough suited cards anywhere
    if pocket[0] == ANY_CARD
        || pocket[1] == ANY_CARD
        || board[0] == ANY_CARD
        || board[1] == ANY_CARD
        || board[2] == ANY_CARD
    {
        return -1;
    }

    let n_board_perms = board_perm_count(hand.n_pocket + n_board);
    let mut best = u16::MAX;
    for pocket_perm in &POCKET_PERMS {
        for board_perm in &BOARD_PERMS[..n_board_perms] {
            let five = [
                pocket[pocket_perm[0]],
                pocket[pocket_perm[1]],
                board[board_perm[0]],
                board[board_perm[1]],
                board[board_perm[2]],
            ];
            // suited ranks are 2..14; anything else is a sentinel
            if five.iter().any(|&card| !(2..=14).contains(&card)) {
                continue;
            }
            let mask = five.iter().fold(0u16, |mask, &card| mask | 1 << (card - 2));
            best = best.min(cactus::flush_rank(mask));
        }
    }
    cactus::cactus_to_ray(best)
}

/// Best score ignoring suits. Cards are the rank folding 1..13; they are
/// re-suited round-robin so the five-card oracle sees plausible cards, and
/// no two-plus-three selection of them can land five in one suit.
pub fn eval_no_flush(id: u64) -> i32 {
    let hand = PartialHand::unpack(id);
    let (board, n_board) = hand.board_without_skips();
    if hand.n_pocket < 4 || n_board < 3 {
        panic!("no-flush terminal on a short hand: {hand}");
    }

    let mut suit = 0u8;
    let mut pocket_cards = [0u32; 4];
    for (slot, &rank) in hand.pocket[..hand.n_pocket].iter().enumerate() {
        pocket_cards[slot] = cactus::card_to_cactus(rank, suit % 4 + 1);
        suit += 1;
    }
    let mut board_cards = [0u32; 5];
    for (slot, &rank) in board[..n_board].iter().enumerate() {
        board_cards[slot] = cactus::card_to_cactus(rank, suit % 4 + 1);
        suit += 1;
    }

    let n_board_perms = board_perm_count(hand.n_pocket + n_board);
    let mut best = u16::MAX;
    for pocket_perm in &POCKET_PERMS {
        for board_perm in &BOARD_PERMS[..n_board_perms] {
            let five = [
                pocket_cards[pocket_perm[0]],
                pocket_cards[pocket_perm[1]],
                board_cards[board_perm[0]],
                board_cards[board_perm[1]],
                board_cards[board_perm[2]],
            ];
            best = best.min(cactus::eval_five_no_flush(five));
        }
    }
    cactus::cactus_to_ray(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{HAND_CATEGORY_SHIFT, SKIP_BOARD};
    use crate::hand_id::PartialHand;

    fn packed(pocket: [u8; 4], board: [u8; 5]) -> u64 {
        let mut hand = PartialHand::default();
        for card in board {
            hand.push(card);
        }
        for card in pocket {
            hand.push(card);
        }
        hand.pack()
    }

    #[test]
    fn test_flush_suits_two_pocket_three_board() {
        // two spades in the pocket and three on the board make a flush
        let id = packed([4, 4, 1, 2], [4, 4, 4, 1, 2]);
        assert_eq!(eval_flush_suits(id), 4);
        // three on the board alone do not
        let id = packed([1, 1, 2, 2], [4, 4, 4, 3, 3]);
        assert_eq!(eval_flush_suits(id), -1);
    }

    #[test]
    fn test_flush_suits_board_contribution_is_capped() {
        // five suited board cards still only supply three
        let id = packed([1, 1, 2, 2], [4, 4, 4, 4, 4]);
        assert_eq!(eval_flush_suits(id), -1);
        // one suited pocket card is one short of the two that play
        let id = packed([4, 1, 1, 2], [4, 4, 4, 4, 4]);
        assert_eq!(eval_flush_suits(id), -1);
        let id = packed([4, 4, 1, 2], [4, 4, 4, 4, 4]);
        assert_eq!(eval_flush_suits(id), 4);
    }

    #[test]
    fn test_flush_suits_ignores_skips() {
        let id = packed([3, 3, 1, 2], [SKIP_BOARD, SKIP_BOARD, 3, 3, 3]);
        assert_eq!(eval_flush_suits(id), 3);
    }

    #[test]
    fn test_flush_ranks_royal() {
        // suited pocket T 9 with suited A K Q on the board: five suited
        // cards but no straight among them
        let id = packed(
            [10, 9, ANY_CARD, ANY_CARD],
            [14, 13, 12, ANY_CARD, ANY_CARD],
        );
        let score = eval_flush_ranks(id);
        assert_eq!(score >> HAND_CATEGORY_SHIFT, 6);

        // pocket A K, board Q J T: a royal flush
        let id = packed([14, 13, ANY_CARD, ANY_CARD], [12, 11, 10, ANY_CARD, ANY_CARD]);
        assert_eq!(eval_flush_ranks(id), 36874);
    }

    #[test]
    fn test_flush_ranks_requires_suited_pocket_pair() {
        // board full of suited ranks but a single suited pocket card
        let id = packed(
            [14, ANY_CARD, ANY_CARD, ANY_CARD],
            [13, 12, 11, 10, 9],
        );
        assert_eq!(eval_flush_ranks(id), -1);
    }

    #[test]
    fn test_flush_ranks_skips_disqualify_selections() {
        // a skipped slot never completes a five-card flush
        let id = packed([14, 13, ANY_CARD, ANY_CARD], [SKIP_BOARD, 12, 11, 10, ANY_CARD]);
        assert_eq!(eval_flush_ranks(id), 36874);
    }

    #[test]
    fn test_no_flush_quads() {
        // pocket A A, board A A 2: quad aces with a deuce
        let id = packed([13, 13, 3, 4], [13, 13, 1, 1, 2]);
        let score = eval_no_flush(id);
        assert_eq!(score >> HAND_CATEGORY_SHIFT, 8);
    }

    #[test]
    fn test_no_flush_uses_exactly_two_pocket_cards() {
        // three aces in the pocket only ever contribute two of them
        let trips_in_pocket = packed([13, 13, 13, 1], [13, 5, 6, 7, 8]);
        assert_eq!(eval_no_flush(trips_in_pocket) >> HAND_CATEGORY_SHIFT, 4);
        // one pocket ace over a board holding the other three makes quads
        let single = packed([13, 1, 2, 3], [13, 13, 13, 7, 8]);
        assert_eq!(eval_no_flush(single) >> HAND_CATEGORY_SHIFT, 8);
        let no_third_on_board = packed([13, 1, 2, 3], [13, 13, 5, 7, 8]);
        assert_eq!(eval_no_flush(no_third_on_board) >> HAND_CATEGORY_SHIFT, 4);
    }

    #[test]
    fn test_no_flush_seven_card_padding() {
        // pocket A K with Q J T on the board is a broadway straight whether
        // or not the two low board cards exist
        let full = packed([13, 12, 2, 3], [11, 10, 9, 5, 4]);
        let padded = packed([13, 12, 2, 3], [SKIP_BOARD, SKIP_BOARD, 11, 10, 9]);
        assert_eq!(eval_no_flush(padded), eval_no_flush(full));
        assert_eq!(eval_no_flush(padded) >> HAND_CATEGORY_SHIFT, 5);
    }

    #[test]
    #[should_panic(expected = "short hand")]
    fn test_no_flush_short_hand_panics() {
        eval_no_flush(packed([13, 12, 0, 0], [11, 10, 9, 0, 0]));
    }
}
