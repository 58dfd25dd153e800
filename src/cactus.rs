//! Five-card scoring oracle.
//!
//! Classic five-card evaluation over the 7462 equivalence classes of poker
//! hands, producing the traditional class numbers (1 is a royal flush, 7462
//! the worst high card). The class tables are computed once on first use by
//! enumerating every rank multiset, ordering the classes by hand strength
//! and keying them three ways: a 13-bit rank mask for flushes, the same
//! mask for unsuited five-distinct-rank hands, and a prime product for
//! everything with a repeated rank.
//!
//! [`cactus_to_ray`] converts a class into the score format the rank tables
//! store: hand category times 4096 plus the rank within the category,
//! higher is better.

use lazy_static::lazy_static;

use crate::constants::{RANK_COUNT, RANK_PRIMES};

/// Total number of distinct five-card hand classes
pub const CLASS_COUNT: u16 = 7462;

/// Rank-mask tables cover every 13-bit mask
const RANK_MASK_SIZE: usize = 0x2000;

lazy_static! {
    static ref TABLES: Tables = Tables::build();
}

struct Tables {
    /// Class per rank mask for five suited cards
    flushes: Vec<u16>,
    /// Class per rank mask for five distinct unsuited ranks
    unique5: Vec<u16>,
    /// Sorted prime products of hands with a repeated rank
    products: Vec<u32>,
    /// Class for the matching entry of `products`
    values: Vec<u16>,
}

impl Tables {
    fn build() -> Self {
        let classes = enumerate_classes();
        debug_assert_eq!(classes.len(), usize::from(CLASS_COUNT));

        let mut flushes = vec![0u16; RANK_MASK_SIZE];
        let mut unique5 = vec![0u16; RANK_MASK_SIZE];
        let mut paired: Vec<(u32, u16)> = Vec::new();

        for (position, class) in classes.iter().enumerate() {
            let value = (position + 1) as u16;
            if class.distinct() {
                let mask = class
                    .ranks
                    .iter()
                    .fold(0usize, |mask, &rank| mask | 1 << rank);
                if class.flush {
                    flushes[mask] = value;
                } else {
                    unique5[mask] = value;
                }
            } else {
                let product = class
                    .ranks
                    .iter()
                    .map(|&rank| RANK_PRIMES[usize::from(rank)])
                    .product();
                paired.push((product, value));
            }
        }
        paired.sort_unstable();

        Tables {
            flushes,
            unique5,
            products: paired.iter().map(|&(product, _)| product).collect(),
            values: paired.iter().map(|&(_, value)| value).collect(),
        }
    }

    fn lookup_product(&self, product: u32) -> u16 {
        match self.products.binary_search(&product) {
            Ok(index) => self.values[index],
            Err(_) => panic!("no five-card class for prime product {product}"),
        }
    }
}

/// One equivalence class: five ranks in non-increasing order plus a flush
/// flag, with a precomputed strength key for ordering.
struct Class {
    ranks: [u8; 5],
    flush: bool,
    /// (category, tiebreaks), compared descending; category 8 is a straight
    /// flush, 0 a high card
    key: (u8, [u8; 5]),
}

impl Class {
    fn new(ranks: [u8; 5], flush: bool) -> Self {
        let key = strength_key(ranks, flush);
        Class { ranks, flush, key }
    }

    fn distinct(&self) -> bool {
        self.ranks.windows(2).all(|pair| pair[0] > pair[1])
    }
}

/// Every five-card class, strongest first.
fn enumerate_classes() -> Vec<Class> {
    let mut classes = Vec::with_capacity(usize::from(CLASS_COUNT));
    let n = RANK_COUNT;
    for r1 in 0..n {
        for r2 in 0..=r1 {
            for r3 in 0..=r2 {
                for r4 in 0..=r3 {
                    for r5 in 0..=r4 {
                        if r1 == r5 {
                            // five of a kind
                            continue;
                        }
                        let ranks = [r1, r2, r3, r4, r5];
                        classes.push(Class::new(ranks, false));
                        if ranks.windows(2).all(|pair| pair[0] > pair[1]) {
                            classes.push(Class::new(ranks, true));
                        }
                    }
                }
            }
        }
    }
    classes.sort_unstable_by(|a, b| b.key.cmp(&a.key));
    classes
}

/// Rank of the top card of a straight, or None. Expects non-increasing
/// distinct ranks; the wheel counts as a 5-high straight.
fn straight_high(ranks: [u8; 5]) -> Option<u8> {
    if ranks == [12, 3, 2, 1, 0] {
        Some(3)
    } else if ranks[0] == ranks[4] + 4 {
        Some(ranks[0])
    } else {
        None
    }
}

fn strength_key(ranks: [u8; 5], flush: bool) -> (u8, [u8; 5]) {
    let mut counts = [0u8; 13];
    for &rank in &ranks {
        counts[usize::from(rank)] += 1;
    }
    // groups ordered by multiplicity first, rank second; flattening them in
    // that order is exactly the tiebreak order for every unpaired-to-quads
    // category
    let mut groups: Vec<(u8, u8)> = counts
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count > 0)
        .map(|(rank, &count)| (count, rank as u8))
        .collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));

    let distinct = groups.len() == 5;
    let straight = if distinct { straight_high(ranks) } else { None };

    let category = match (flush, straight, groups[0].0, groups.get(1).map(|g| g.0)) {
        (true, Some(_), _, _) => 8,
        (true, None, _, _) => 5,
        (false, Some(_), _, _) => 4,
        (false, None, 4, _) => 7,
        (false, None, 3, Some(2)) => 6,
        (false, None, 3, _) => 3,
        (false, None, 2, Some(2)) => 2,
        (false, None, 2, _) => 1,
        (false, None, _, _) => 0,
    };

    let mut tiebreaks = [0u8; 5];
    match straight {
        Some(high) => tiebreaks[0] = high,
        None => {
            for (slot, &(_, rank)) in groups.iter().enumerate() {
                tiebreaks[slot] = rank;
            }
        }
    }
    (category, tiebreaks)
}

/// Classic 32-bit card encoding for a 1..13 rank and 1..4 suit:
/// `prime | (r << 8) | suit bit | rank bit`.
pub fn card_to_cactus(rank: u8, suit: u8) -> u32 {
    let r = u32::from(rank - 1);
    RANK_PRIMES[r as usize] | (r << 8) | 1 << (suit + 11) | 1 << (16 + r)
}

/// Class of five cards in the classic encoding, suits ignored.
pub fn eval_five_no_flush(cards: [u32; 5]) -> u16 {
    let tables = &*TABLES;
    let mask = (cards.iter().fold(0, |mask, &card| mask | card) >> 16) as usize;
    let class = tables.unique5[mask];
    if class != 0 {
        class
    } else {
        let product = cards.iter().map(|&card| card & 0xff).product();
        tables.lookup_product(product)
    }
}

/// Class of five suited cards, keyed by their 13-bit rank mask.
pub fn flush_rank(mask: u16) -> u16 {
    TABLES.flushes[usize::from(mask)]
}

/// Converts a class (1 best .. 7462 worst) into the table score format:
/// `category * 4096 + rank within category`, higher is better.
pub fn cactus_to_ray(class: u16) -> i32 {
    let r = 7463 - i32::from(class);
    match r {
        1..=1277 => r + 4096,             // high card
        1278..=4137 => r - 1277 + 8192,   // pair
        4138..=4995 => r - 4137 + 12288,  // two pair
        4996..=5853 => r - 4995 + 16384,  // three of a kind
        5854..=5863 => r - 5853 + 20480,  // straight
        5864..=7140 => r - 5863 + 24576,  // flush
        7141..=7296 => r - 7140 + 28672,  // full house
        7297..=7452 => r - 7296 + 32768,  // four of a kind
        7453..=7462 => r - 7452 + 36864,  // straight flush
        _ => panic!("five-card class out of range: {class}"),
    }
}
