#![no_std]

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::ops::Index;
use serde::{Deserialize, Serialize};

pub use card::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use symbols::*;
pub use types::*;

mod card;
mod engine;
mod error;
mod generator;
mod symbols;
mod types;

/// Board dimensions supplied by the host's configuration layer.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub size: Coord2,
}

impl BoardConfig {
    pub const fn new_unchecked(size: Coord2) -> Self {
        Self { size }
    }

    pub fn new((size_x, size_y): Coord2) -> Self {
        let size_x = size_x.clamp(1, Coord::MAX);
        let size_y = size_y.clamp(1, Coord::MAX);
        Self::new_unchecked((size_x, size_y))
    }

    pub const fn total_cards(&self) -> CardCount {
        mult(self.size.0, self.size.1)
    }

    /// Hosts supply even card totals; an odd total floors.
    pub const fn pair_count(&self) -> PairCount {
        self.total_cards() / 2
    }
}

/// Difficulty tiers of the stock game, fixing grid shape and move allowance.
///
/// Arbitrary non-tier boards are supported through [`BoardConfig`] directly.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardSize {
    Easy,
    Medium,
    Hard,
}

impl BoardSize {
    pub const fn card_count(self) -> CardCount {
        use BoardSize::*;
        match self {
            Easy => 8,
            Medium => 18,
            Hard => 24,
        }
    }

    pub const fn width(self) -> Coord {
        use BoardSize::*;
        match self {
            Easy => 2,
            Medium => 3,
            Hard => 4,
        }
    }

    pub const fn height(self) -> Coord {
        (self.card_count() / self.width() as CardCount) as Coord
    }

    pub const fn pair_count(self) -> PairCount {
        self.card_count() / 2
    }

    /// Moves the player may spend before the host declares the game over.
    pub const fn move_limit(self) -> MoveCount {
        use BoardSize::*;
        match self {
            Easy => 6,
            Medium => 12,
            Hard => 18,
        }
    }

    pub const fn config(self) -> BoardConfig {
        BoardConfig::new_unchecked((self.width(), self.height()))
    }

    /// Tier whose board holds exactly `cards` cards, if any.
    pub const fn from_card_count(cards: CardCount) -> Option<BoardSize> {
        use BoardSize::*;
        match cards {
            8 => Some(Easy),
            18 => Some(Medium),
            24 => Some(Hard),
            _ => None,
        }
    }
}

/// Fixed arrangement of `2P` symbols, immutable for the whole session.
///
/// Visible card state lives in the engine, not here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Symbol>,
}

impl Deck {
    /// Builds a deck from an explicit arrangement, validating that it is
    /// non-empty and that every symbol appears exactly twice.
    pub fn from_symbols(symbols: Vec<Symbol>) -> Result<Self> {
        if symbols.is_empty() {
            return Err(GameError::EmptyDeck);
        }

        let mut occurrences: BTreeMap<&Symbol, CardCount> = BTreeMap::new();
        for symbol in &symbols {
            *occurrences.entry(symbol).or_default() += 1;
        }
        if occurrences.values().any(|&count| count != 2) {
            return Err(GameError::UnpairedSymbols);
        }

        Ok(Self { cards: symbols })
    }

    pub fn card_count(&self) -> CardCount {
        self.cards.len().try_into().unwrap()
    }

    pub fn pair_count(&self) -> PairCount {
        self.card_count() / 2
    }

    pub fn validate_index(&self, index: CardIndex) -> Result<CardIndex> {
        if usize::from(index) < self.cards.len() {
            Ok(index)
        } else {
            Err(GameError::InvalidIndex)
        }
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.cards
    }
}

impl Index<CardIndex> for Deck {
    type Output = Symbol;

    fn index(&self, index: CardIndex) -> &Self::Output {
        &self.cards[usize::from(index)]
    }
}

/// Outcome of revealing one card.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlipOutcome {
    NoMatch,
    Match,
    Won,
}

impl FlipOutcome {
    /// Whether this flip completed a matching pair.
    pub const fn is_match(self) -> bool {
        use FlipOutcome::*;
        match self {
            NoMatch => false,
            Match => true,
            Won => true,
        }
    }
}
