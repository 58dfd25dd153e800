//! Breadth-first enumeration of reachable partial-hand identifiers.

use log::{debug, info};

/// Keeps the pending-successor buffer bounded between dedup passes.
const DEDUP_TRIGGER: usize = 1 << 25;

/// Enumerates every identifier reachable from the empty hand in at most
/// eight steps of `step`, including the empty hand itself.
///
/// The first two cards may be the board-skip `0`; from the third card on
/// only real cards are offered. Each generation is sorted and deduplicated
/// before it seeds the next; the returned list is sorted in its entirety,
/// and that order is what assigns every identifier its block index.
pub fn generate_ids<F>(step: F) -> Vec<u64>
where
    F: Fn(u64, u8) -> Option<u64>,
{
    let mut id_list: Vec<u64> = vec![0];
    let mut current: Vec<u64> = vec![0];
    let mut next: Vec<u64> = Vec::new();

    for n_cards in 1..=8u32 {
        let min_card = if n_cards <= 2 { 0 } else { 1 };
        let mut generated: u64 = 0;
        let mut dedup_watermark = DEDUP_TRIGGER;
        for &id in &current {
            for new_card in min_card..=52u8 {
                if let Some(new_id) = step(id, new_card) {
                    next.push(new_id);
                    generated += 1;
                }
            }
            if next.len() >= dedup_watermark {
                next.sort_unstable();
                next.dedup();
                dedup_watermark = next.len() + DEDUP_TRIGGER;
            }
        }
        next.sort_unstable();
        next.dedup();
        debug!(
            "{n_cards}-card generation: {generated} successors, {} unique",
            next.len()
        );
        id_list.extend_from_slice(&next);
        std::mem::swap(&mut current, &mut next);
        next.clear();
    }

    id_list.sort_unstable();
    info!("enumerated {} identifiers", id_list.len());
    id_list
}
