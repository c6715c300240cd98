use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Card index out of range")]
    InvalidIndex,
    #[error("Symbol pool has fewer symbols than requested pairs")]
    NotEnoughSymbols,
    #[error("Deck has no cards")]
    EmptyDeck,
    #[error("Deck symbols do not form exact pairs")]
    UnpairedSymbols,
}

pub type Result<T> = core::result::Result<T, GameError>;
