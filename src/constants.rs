/// Number of cards in a standard deck
pub const CARD_COUNT: u8 = 52;

/// Number of ranks in a standard deck
/// (2 -> A)
pub const RANK_COUNT: u8 = 13;

/// Number of suits in a standard deck
pub const SUIT_COUNT: u8 = 4;

/// Category of a score sits above this shift (1 high card .. 9 straight flush)
pub const HAND_CATEGORY_SHIFT: u8 = 12;

/// Sentinel stored for a skipped board slot; pads 7- and 8-card hands
/// out to the uniform 9-slot representation
pub const SKIP_BOARD: u8 = 53;

/// Sentinel for a card that is not of the tracked suit in the flush-rank
/// table; sorts below every suited rank
pub const ANY_CARD: u8 = 1;

/// The six ways to pick two pocket cards out of four
pub const POCKET_PERMS: [[usize; 2]; 6] = [[0, 1], [0, 2], [0, 3], [1, 2], [1, 3], [2, 3]];

/// The ten ways to pick three board cards out of five; the first 1 / 4 / 10
/// rows are the legal triples for 3-, 4- and 5-card boards
pub const BOARD_PERMS: [[usize; 3]; 10] = [
    [0, 1, 2],
    [0, 1, 3],
    [0, 2, 3],
    [1, 2, 3],
    [0, 1, 4],
    [0, 2, 4],
    [0, 3, 4],
    [1, 2, 4],
    [1, 3, 4],
    [2, 3, 4],
];

/// Prime per rank, used by the five-card oracle's multiplicative keys
pub const RANK_PRIMES: [u32; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

/// Number of legal board triples for a hand with `n_cards` total cards
pub const fn board_perm_count(n_cards: usize) -> usize {
    match n_cards {
        9 => 10,
        8 => 4,
        7 => 1,
        _ => 0,
    }
}

/// Suit of a raw 1..52 card, in 1..4
#[inline]
pub const fn card_suit(card: u8) -> u8 {
    ((card - 1) & 3) + 1
}

/// Rank of a raw 1..52 card, in 1..13 (2 through Ace)
#[inline]
pub const fn card_rank(card: u8) -> u8 {
    ((card - 1) >> 2) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_decomposition() {
        // card 1 is the 2 of the first suit, card 52 the ace of the last
        assert_eq!(card_suit(1), 1);
        assert_eq!(card_rank(1), 1);
        assert_eq!(card_suit(52), 4);
        assert_eq!(card_rank(52), 13);
        // 4 * (rank - 2) + suit round trips for the whole deck
        for card in 1..=CARD_COUNT {
            assert_eq!(4 * (card_rank(card) - 1) + card_suit(card), card);
        }
    }

    #[test]
    fn test_board_perm_count() {
        assert_eq!(board_perm_count(9), 10);
        assert_eq!(board_perm_count(8), 4);
        assert_eq!(board_perm_count(7), 1);
        assert_eq!(board_perm_count(6), 0);
    }
}
