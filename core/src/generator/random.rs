use alloc::vec::Vec;

use super::*;

/// Draws `pairs` distinct symbols uniformly from the pool without replacement,
/// doubles them, and deals the whole deck in uniformly random order. The full
/// reshuffle means no positional bias survives from pool ordering.
///
/// Seeding is the caller's concern; equal seeds and inputs yield equal decks.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomDeckGenerator {
    seed: u64,
}

impl RandomDeckGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl DeckGenerator for RandomDeckGenerator {
    fn generate(self, pairs: PairCount, pool: &SymbolPool) -> Result<Deck> {
        use rand::prelude::*;

        if pool.len() < usize::from(pairs) {
            log::warn!(
                "Symbol pool holds {} symbols, {} pairs requested",
                pool.len(),
                pairs
            );
            return Err(GameError::NotEnoughSymbols);
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);

        let mut chosen: Vec<Symbol> = pool.symbols().to_vec();
        chosen.shuffle(&mut rng);
        chosen.truncate(usize::from(pairs));

        let mut cards = chosen.clone();
        cards.extend(chosen);
        cards.shuffle(&mut rng);

        Deck::from_symbols(cards)
    }
}
