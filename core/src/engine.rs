use alloc::vec::Vec;
use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

/// Owns the deck and the whole session state, driven by one `flip_card` per tap.
///
/// Gameplay legality is the host's concern: the engine does not reject flips on
/// matched cards, flips after the game is won, or a re-flip of the card that is
/// currently pending (which registers as a trivial self-match). Hosts gate on
/// `is_face_up` and `has_won` before calling `flip_card`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchEngine {
    deck: Deck,
    board: Vec<CardFace>,
    pending: Option<CardIndex>,
    flip_count: Saturating<FlipCount>,
    pairs_found: Saturating<PairCount>,
}

impl MatchEngine {
    pub fn new(deck: Deck) -> Self {
        let board = alloc::vec![CardFace::Down; usize::from(deck.card_count())];
        Self {
            deck,
            board,
            pending: None,
            flip_count: Saturating(0),
            pairs_found: Saturating(0),
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn card_count(&self) -> CardCount {
        self.deck.card_count()
    }

    pub fn total_pairs(&self) -> PairCount {
        self.deck.pair_count()
    }

    pub fn pairs_found(&self) -> PairCount {
        self.pairs_found.0
    }

    pub fn flip_count(&self) -> FlipCount {
        self.flip_count.0
    }

    /// Completed two-flip moves; an in-progress odd flip does not count yet.
    pub fn moves_made(&self) -> MoveCount {
        self.flip_count.0 / 2
    }

    pub fn has_won(&self) -> bool {
        self.pairs_found.0 == self.deck.pair_count()
    }

    pub fn face_at(&self, index: CardIndex) -> Result<CardFace> {
        let index = self.deck.validate_index(index)?;
        Ok(self.board[usize::from(index)])
    }

    pub fn is_face_up(&self, index: CardIndex) -> Result<bool> {
        Ok(self.face_at(index)?.is_face_up())
    }

    pub fn is_matched(&self, index: CardIndex) -> Result<bool> {
        Ok(self.face_at(index)?.is_matched())
    }

    pub fn symbol_at(&self, index: CardIndex) -> Result<&Symbol> {
        let index = self.deck.validate_index(index)?;
        Ok(&self.deck[index])
    }

    /// Reveals the card at `index` and resolves it against the pending card, if
    /// any. Returns whether this flip completed a pair.
    pub fn flip_card(&mut self, index: CardIndex) -> Result<FlipOutcome> {
        use FlipOutcome::*;

        let index = self.deck.validate_index(index)?;
        self.flip_count += 1;

        let Some(prior) = self.pending.take() else {
            self.restore_unmatched();
            self.turn_up(index);
            self.pending = Some(index);
            return Ok(NoMatch);
        };

        self.turn_up(index);

        if self.deck[prior] != self.deck[index] {
            return Ok(NoMatch);
        }

        self.board[usize::from(prior)] = CardFace::Matched;
        self.board[usize::from(index)] = CardFace::Matched;
        self.pairs_found += 1;
        log::debug!(
            "matched pair {} of {}",
            self.pairs_found.0,
            self.deck.pair_count()
        );

        if self.has_won() {
            log::debug!("all pairs found after {} flips", self.flip_count.0);
            Ok(Won)
        } else {
            Ok(Match)
        }
    }

    /// Hides the leftovers of an unresolved mismatch; matched cards stay up.
    fn restore_unmatched(&mut self) {
        for face in &mut self.board {
            if *face == CardFace::Up {
                *face = CardFace::Down;
            }
        }
    }

    fn turn_up(&mut self, index: CardIndex) {
        let face = &mut self.board[usize::from(index)];
        if !face.is_matched() {
            *face = CardFace::Up;
        }
    }
}
