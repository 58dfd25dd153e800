//! Microbenchmarks for the hot paths of table generation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use omaha_ranks::cactus;
use omaha_ranks::constants::{card_rank, card_suit};
use omaha_ranks::table_generator::transitions::step_no_flush;

/// Simple LCG for deterministic card streams
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Lcg { state: seed }
    }

    fn next(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state >> 33
    }

    fn next_hand(&mut self, len: usize) -> Vec<u8> {
        let mut cards = Vec::with_capacity(len);
        while cards.len() < len {
            let card = (self.next() % 52) as u8 + 1;
            if !cards.contains(&card) {
                cards.push(card);
            }
        }
        cards
    }
}

fn bench_five_card_oracle(c: &mut Criterion) {
    let mut lcg = Lcg::new(12345);
    let hands: Vec<[u32; 5]> = (0..10_000)
        .map(|_| {
            let cards = lcg.next_hand(5);
            [
                cactus::card_to_cactus(card_rank(cards[0]), card_suit(cards[0])),
                cactus::card_to_cactus(card_rank(cards[1]), card_suit(cards[1])),
                cactus::card_to_cactus(card_rank(cards[2]), card_suit(cards[2])),
                cactus::card_to_cactus(card_rank(cards[3]), card_suit(cards[3])),
                cactus::card_to_cactus(card_rank(cards[4]), card_suit(cards[4])),
            ]
        })
        .collect();

    c.bench_function("five_card_oracle", |b| {
        b.iter(|| {
            for hand in &hands {
                black_box(cactus::eval_five_no_flush(black_box(*hand)));
            }
        })
    });
}

fn bench_no_flush_step(c: &mut Criterion) {
    let mut lcg = Lcg::new(54321);
    let hands: Vec<Vec<u8>> = (0..1_000).map(|_| lcg.next_hand(9)).collect();

    c.bench_function("no_flush_step_chain", |b| {
        b.iter(|| {
            for hand in &hands {
                let mut id = 0u64;
                for &card in hand {
                    // distinct real cards never trip the rank cap
                    id = step_no_flush(id, card).unwrap();
                }
                black_box(id);
            }
        })
    });
}

criterion_group!(benches, bench_five_card_oracle, bench_no_flush_step);
criterion_main!(benches);
