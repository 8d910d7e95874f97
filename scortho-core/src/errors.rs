use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScaffoldError {
    #[error("Invalid symbol '{symbol}' at position {position}: scaffolds may only contain A, T, G, C")]
    InvalidAlphabet { symbol: char, position: usize },

    #[error("Empty scaffold sequence")]
    EmptySequence,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
