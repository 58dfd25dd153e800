//! # Omaha Ranks
//! Generator and evaluator for a 7/8/9-card Omaha hand-rank lookup table.
//!
//! The table is a single array of 32-bit integers in which three chained
//! lookup tables live side by side: a flush-suit detector, a flush scorer
//! for one tracked suit (shared by all four suits through a shifted base
//! pointer), and a suit-blind scorer. Evaluating a hand is nine array
//! indexings per chain, no branching, no sorting. Scores are
//! `category * 4096 + rank` with category 1 (high card) through 9
//! (straight flush); higher is better. The best five-card hand always uses
//! exactly two of the four pocket cards and three board cards.
//!
//! Cards are numbered 1..52: `card = 4 * (rank - 2) + suit` with suits
//! 1..4. Card 0 is only meaningful as a leading board entry, where it
//! stands for a missing board slot.
//!
//! ## Evaluating hands
//!
//! ```no_run
//! use omaha_ranks::{generate_hand_ranks, eval9, eval7};
//!
//! let hand_ranks = generate_hand_ranks();
//! // board first (5 cards), then the pocket (4 cards)
//! let score = eval9(&hand_ranks, &[52, 48, 44, 40, 36, 1, 5, 9, 13]);
//! assert!(score >> 12 >= 1 && score >> 12 <= 9);
//! // 3-card boards pad two leading zeros internally
//! assert_eq!(
//!     eval7(&hand_ranks, &[52, 48, 44, 1, 5, 9, 13]),
//!     eval9(&hand_ranks, &[0, 0, 52, 48, 44, 1, 5, 9, 13]),
//! );
//! ```
//!
//! ## Table layout
//!
//! Queries chase pointers through three regions:
//!
//! - flush suit: nine lookups from slot 106, board cards first, yielding 0
//!   or the flush suit 1..4;
//! - no flush: nine lookups from `hand_ranks[0] + 53`, yielding a score;
//! - flush ranks, only when a flush exists: nine lookups from
//!   `hand_ranks[1] + 56` with `4 - suit` added at every step, yielding the
//!   flush score. The final score is the larger of the two scores.
//!
//! Pass zero for the first board card to evaluate an 8-card hand, and two
//! zeros for the first two board cards for a 7-card hand; [`eval8`] and
//! [`eval7`] do this for you.

pub mod cactus;
pub mod constants;
pub mod hand_id;
pub mod omaha_evaluator;
pub mod table_generator;
pub mod table_io;
pub mod verify;

pub use omaha_evaluator::{eval7, eval8, eval9, OmahaEvaluator};
pub use table_generator::generate_hand_ranks;
pub use verify::{verify_against_reference, VerifyError};

use std::path::Path;

use log::info;
use thiserror::Error;

/// Everything that can fail in [`raygen9`].
#[derive(Debug, Error)]
pub enum RaygenError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Verify(#[from] VerifyError),
}

/// Generates the table, writes it to `output`, and, when `test` is set and
/// a reference table is given, cross-checks it exhaustively. The table file
/// is written before verification runs, so a mismatch still leaves the
/// table on disk.
pub fn raygen9(
    output: &Path,
    reference7: Option<&Path>,
    test: bool,
    n_threads: usize,
) -> Result<(), RaygenError> {
    let hand_ranks = generate_hand_ranks();
    table_io::write_ranks(output, &hand_ranks)?;
    info!(
        "wrote {} entries to {}",
        hand_ranks.len(),
        output.display()
    );
    if let (true, Some(reference7)) = (test, reference7) {
        let reference = table_io::read_ranks(reference7)?;
        let verified = verify_against_reference(&hand_ranks, &reference, n_threads)?;
        info!("all {verified} combinations verified");
    }
    Ok(())
}
