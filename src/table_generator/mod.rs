//! Builds the hand-rank table.
//!
//! Three tables share one address space: a flush-suit table that detects
//! whether a flush exists and on which suit, a flush-rank table that scores
//! flushes for one tracked suit (the other three suits read the same blocks
//! through a shifted base pointer), and a no-flush table that scores hands
//! by rank alone. Each is an implicit automaton whose states are the
//! identifiers of [`crate::hand_id`] and whose transition blocks are filled
//! by [`assemble`].

pub mod assemble;
pub mod enumerate;
pub mod terminals;
pub mod transitions;

use log::info;

/// Block width for the flush-suit and no-flush tables: one slot per card
/// plus the skip slot
pub const BLOCK_SIZE: usize = 53;
/// Flush-rank blocks carry three extra dummy slots so the suit-shifted
/// views stay in bounds
pub const FLUSH_RANK_BLOCK_SIZE: usize = 56;
/// Start of the flush-suit chain: the empty identifier's block
pub const FLUSH_SUIT_START: usize = 106;

/// Generates the complete table.
///
/// `hand_ranks[0]` holds the no-flush region base and `hand_ranks[1]` the
/// flush-rank region base; queries chain from `FLUSH_SUIT_START`,
/// `hand_ranks[0] + 53` and `hand_ranks[1] + 56` as described in the crate
/// docs. The result is on the order of 600 million entries.
pub fn generate_hand_ranks() -> Vec<i32> {
    info!("enumerating flush-suit identifiers");
    let id_flush_suits = enumerate::generate_ids(transitions::step_flush_suits);
    info!("enumerating flush-rank identifiers for the tracked suit");
    let id_flush_ranks = enumerate::generate_ids(|id, card| transitions::step_flush_ranks(id, card, 4));
    info!("enumerating no-flush identifiers");
    let id_no_flush = enumerate::generate_ids(transitions::step_no_flush);

    let offset_flush_suits = BLOCK_SIZE;
    let offset_flush_ranks = offset_flush_suits + BLOCK_SIZE + id_flush_suits.len() * BLOCK_SIZE;
    let offset_no_flush = offset_flush_ranks
        + FLUSH_RANK_BLOCK_SIZE
        + id_flush_ranks.len() * FLUSH_RANK_BLOCK_SIZE;
    let table_len = offset_no_flush + BLOCK_SIZE + id_no_flush.len() * BLOCK_SIZE;
    assert!(
        table_len <= i32::MAX as usize,
        "table of {table_len} entries exceeds 32-bit addressing"
    );
    info!(
        "allocating {} entries ({} MiB)",
        table_len,
        table_len * 4 >> 20
    );

    let mut hand_ranks = vec![0i32; table_len];
    hand_ranks[0] = offset_no_flush as i32;
    hand_ranks[1] = offset_flush_ranks as i32;

    info!("filling flush-suit blocks ({} identifiers)", id_flush_suits.len());
    // a hand with no flush leaves the chain with 0; the fan-in hands out
    // the no-flush base so the two chains share their first lookup
    assemble::process_ids(
        &id_flush_suits,
        offset_flush_suits,
        offset_no_flush as i32,
        &mut hand_ranks,
        transitions::step_flush_suits,
        terminals::eval_flush_suits,
        |value| if value == -1 { 0 } else { value },
        BLOCK_SIZE,
        0,
    );

    info!("filling flush-rank blocks ({} identifiers)", id_flush_ranks.len());
    assemble::process_ids(
        &id_flush_ranks,
        offset_flush_ranks,
        0,
        &mut hand_ranks,
        |id, card| transitions::step_flush_ranks(id, card, 4),
        terminals::eval_flush_ranks,
        move |value| {
            if value == -1 {
                offset_flush_ranks as i32
            } else {
                value
            }
        },
        FLUSH_RANK_BLOCK_SIZE,
        1,
    );

    info!("filling no-flush blocks ({} identifiers)", id_no_flush.len());
    assemble::process_ids(
        &id_no_flush,
        offset_no_flush,
        0,
        &mut hand_ranks,
        transitions::step_no_flush,
        terminals::eval_no_flush,
        move |value| {
            if value == -1 {
                offset_no_flush as i32
            } else {
                value
            }
        },
        BLOCK_SIZE,
        0,
    );

    info!("table generation complete");
    hand_ranks
}
