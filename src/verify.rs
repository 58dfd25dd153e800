//! Exhaustive cross-check against a reference 7-card table.
//!
//! The reference table is the classic single-board-rank format: chains
//! start at slot 53, and a five- or six-card path takes one extra bare
//! lookup to finalize its score. Both tables share the same score
//! convention, so every sorted 7-, 8- and 9-card combination of distinct
//! cards must score identically through either route.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

use log::info;
use thiserror::Error;

use crate::constants::{board_perm_count, BOARD_PERMS, POCKET_PERMS};
use crate::table_generator::FLUSH_SUIT_START;

/// The first disagreement found, if any.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VerifyError {
    #[error("scores disagree for cards {cards:?}: reference {reference}, table {table}")]
    Mismatch {
        /// Board in slots 0..5 (leading zeros for short hands), pocket in 5..9
        cards: [u8; 9],
        reference: i32,
        table: i32,
    },
}

/// C(52,7), C(52,8), C(52,9)
const EXPECTED: [u64; 3] = [133_784_560, 752_538_150, 3_679_075_400];

/// Checks every sorted combination of 7, 8 and 9 distinct cards, comparing
/// the table's chained score against the best of all two-pocket/three-board
/// subhands through the reference table. Returns the total number of
/// combinations verified, or the first mismatch.
pub fn verify_against_reference(
    hand_ranks: &[i32],
    reference: &[i32],
    n_threads: usize,
) -> Result<u64, VerifyError> {
    let n_threads = n_threads.max(1);
    let mut total = 0u64;
    for k in 0..3usize {
        info!(
            "checking all {}-card combinations on {n_threads} threads",
            7 + k
        );
        let stop = AtomicBool::new(false);
        let failure: Mutex<Option<VerifyError>> = Mutex::new(None);
        let count = AtomicU64::new(0);
        crossbeam::scope(|scope| {
            for thread_id in 0..n_threads {
                let stop = &stop;
                let failure = &failure;
                let count = &count;
                scope.spawn(move |_| {
                    let checked = check_combinations(
                        hand_ranks, reference, k, thread_id, n_threads, stop, failure,
                    );
                    count.fetch_add(checked, Ordering::Relaxed);
                });
            }
        })
        .unwrap();
        if let Some(error) = failure.into_inner().unwrap() {
            return Err(error);
        }
        let verified = count.into_inner();
        info!("{verified} / {} combinations verified", EXPECTED[k]);
        total += verified;
    }
    Ok(total)
}

/// Walks the combinations whose third card falls to `thread_id` and checks
/// them, carrying the flush-suit and no-flush chains incrementally the way
/// the table is meant to be used.
fn check_combinations(
    hand_ranks: &[i32],
    reference: &[i32],
    k: usize,
    thread_id: usize,
    n_threads: usize,
    stop: &AtomicBool,
    failure: &Mutex<Option<VerifyError>>,
) -> u64 {
    let n_board_perms = board_perm_count(7 + k);
    let no_flush_start = hand_ranks[0] as usize + 53;
    let flush_rank_start = hand_ranks[1] as usize + 56;
    let first_real = 2 - k;

    let mut cards = [0u8; 9];
    let mut board_paths = [0usize; 10];
    let mut checked = 0u64;

    let (c0_min, c0_max) = if k == 2 { (1, 52) } else { (0, 0) };
    for c0 in c0_min..=c0_max {
        cards[0] = c0;
        let fs0 = hand_ranks[FLUSH_SUIT_START + c0 as usize] as usize;
        let nf0 = hand_ranks[no_flush_start + c0 as usize] as usize;
        let (c1_min, c1_max) = if k == 0 { (0, 0) } else { (c0 + 1, 52) };
        for c1 in c1_min..=c1_max {
            cards[1] = c1;
            let fs1 = hand_ranks[fs0 + c1 as usize] as usize;
            let nf1 = hand_ranks[nf0 + c1 as usize] as usize;
            for c2 in (c1 + 1)..=52 {
                if usize::from(c2) % n_threads != thread_id {
                    continue;
                }
                if stop.load(Ordering::Relaxed) {
                    return checked;
                }
                cards[2] = c2;
                let fs2 = hand_ranks[fs1 + c2 as usize] as usize;
                let nf2 = hand_ranks[nf1 + c2 as usize] as usize;
                for c3 in (c2 + 1)..=52 {
                    cards[3] = c3;
                    let fs3 = hand_ranks[fs2 + c3 as usize] as usize;
                    let nf3 = hand_ranks[nf2 + c3 as usize] as usize;
                    for c4 in (c3 + 1)..=52 {
                        cards[4] = c4;
                        let fs4 = hand_ranks[fs3 + c4 as usize] as usize;
                        let nf4 = hand_ranks[nf3 + c4 as usize] as usize;

                        // the board is complete; resolve its triples once
                        // through the reference table
                        for (slot, perm) in BOARD_PERMS[..n_board_perms].iter().enumerate() {
                            let mut path = 53usize;
                            for &position in perm {
                                path = reference
                                    [path + usize::from(cards[first_real + position])]
                                    as usize;
                            }
                            board_paths[slot] = path;
                        }

                        for c5 in (c4 + 1)..=52 {
                            cards[5] = c5;
                            let fs5 = hand_ranks[fs4 + c5 as usize] as usize;
                            let nf5 = hand_ranks[nf4 + c5 as usize] as usize;
                            for c6 in (c5 + 1)..=52 {
                                cards[6] = c6;
                                let fs6 = hand_ranks[fs5 + c6 as usize] as usize;
                                let nf6 = hand_ranks[nf5 + c6 as usize] as usize;
                                for c7 in (c6 + 1)..=52 {
                                    cards[7] = c7;
                                    let fs7 = hand_ranks[fs6 + c7 as usize] as usize;
                                    let nf7 = hand_ranks[nf6 + c7 as usize] as usize;
                                    for c8 in (c7 + 1)..=52 {
                                        cards[8] = c8;
                                        let flush_suit = hand_ranks[fs7 + c8 as usize];
                                        let mut score = hand_ranks[nf7 + c8 as usize];
                                        if flush_suit != 0 {
                                            let shift = (4 - flush_suit) as usize;
                                            let mut slot = flush_rank_start;
                                            for &card in &cards {
                                                slot = hand_ranks
                                                    [slot + shift + usize::from(card)]
                                                    as usize;
                                            }
                                            score = score.max(slot as i32);
                                        }

                                        let mut reference_score = 0i32;
                                        for pocket_perm in &POCKET_PERMS {
                                            for &board_path in &board_paths[..n_board_perms] {
                                                let five = reference[board_path
                                                    + usize::from(cards[5 + pocket_perm[0]])]
                                                    as usize;
                                                let six = reference[five
                                                    + usize::from(cards[5 + pocket_perm[1]])]
                                                    as usize;
                                                reference_score =
                                                    reference_score.max(reference[six]);
                                            }
                                        }

                                        checked += 1;
                                        if score != reference_score {
                                            let mut guard = failure.lock().unwrap();
                                            if guard.is_none() {
                                                *guard = Some(VerifyError::Mismatch {
                                                    cards,
                                                    reference: reference_score,
                                                    table: score,
                                                });
                                            }
                                            stop.store(true, Ordering::Relaxed);
                                            return checked;
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
    checked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_reports_the_combination() {
        let error = VerifyError::Mismatch {
            cards: [0, 0, 1, 2, 3, 4, 5, 6, 7],
            reference: 4097,
            table: 8193,
        };
        let message = error.to_string();
        assert!(message.contains("[0, 0, 1, 2, 3, 4, 5, 6, 7]"));
        assert!(message.contains("4097"));
        assert!(message.contains("8193"));
    }
}
