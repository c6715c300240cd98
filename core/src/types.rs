/// Single coordinate axis used for board width and height.
pub type Coord = u8;

/// Two-dimensional board size `(width, height)`.
pub type Coord2 = (Coord, Coord);

/// Zero-based position of a card in the deck, the only handle callers use.
pub type CardIndex = u16;

/// Count type used for card totals.
pub type CardCount = u16;

/// Count type used for pair totals.
pub type PairCount = u16;

/// Counter for individual card reveals.
pub type FlipCount = u32;

/// Counter for completed two-flip moves.
pub type MoveCount = u32;

pub const fn mult(a: Coord, b: Coord) -> CardCount {
    let a = a as CardCount;
    let b = b as CardCount;
    a.saturating_mul(b)
}
