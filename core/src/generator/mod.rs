use crate::*;
pub use random::*;

mod random;

/// Strategy that turns a symbol pool into a playable deck.
pub trait DeckGenerator {
    fn generate(self, pairs: PairCount, pool: &SymbolPool) -> Result<Deck>;
}
