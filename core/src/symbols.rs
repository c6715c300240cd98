use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Names of the stock icon faces, addressed by `Symbol::Icon` index.
pub const BUILTIN_ICONS: [&str; 12] = [
    "face", "flower", "gift", "heart", "home", "lightning", "moon", "plane", "school", "send",
    "star", "work",
];

/// Opaque card-face identifier; the engine only ever compares these for equality.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Symbol {
    /// Index into [`BUILTIN_ICONS`].
    Icon(u16),
    /// Reference to an externally hosted image, used by custom boards.
    Image(String),
}

/// Ordered list of distinct candidate symbols a deck is drawn from.
///
/// Distinctness is the supplier's responsibility; duplicates are caught later by
/// deck validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolPool {
    symbols: Vec<Symbol>,
}

impl SymbolPool {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    /// The stock icon set.
    pub fn builtin() -> Self {
        Self::new((0..BUILTIN_ICONS.len() as u16).map(Symbol::Icon).collect())
    }

    /// Pool backed by user-provided image references.
    pub fn from_images(images: Vec<String>) -> Self {
        Self::new(images.into_iter().map(Symbol::Image).collect())
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }
}
