use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::ScaffoldError;

///
/// A single DNA base from the closed alphabet {A, T, G, C}.
///
#[derive(Eq, PartialEq, Hash, Debug, Clone, Copy)]
pub enum Nucleotide {
    A,
    T,
    G,
    C,
}

impl Nucleotide {
    ///
    /// Parse one upper-case symbol into a base. Returns None for anything
    /// outside the alphabet.
    ///
    pub fn from_char(symbol: char) -> Option<Nucleotide> {
        match symbol {
            'A' => Some(Nucleotide::A),
            'T' => Some(Nucleotide::T),
            'G' => Some(Nucleotide::G),
            'C' => Some(Nucleotide::C),
            _ => None,
        }
    }

    ///
    /// The Watson-Crick partner of this base: A↔T, G↔C.
    ///
    pub fn complement(self) -> Nucleotide {
        match self {
            Nucleotide::A => Nucleotide::T,
            Nucleotide::T => Nucleotide::A,
            Nucleotide::G => Nucleotide::C,
            Nucleotide::C => Nucleotide::G,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::T => 'T',
            Nucleotide::G => 'G',
            Nucleotide::C => 'C',
        }
    }
}

///
/// Reverse-complement a segment: substitute every base with its Watson-Crick
/// partner and reverse the order. Always produces a new segment.
///
pub fn reverse_complement(segment: &[Nucleotide]) -> Vec<Nucleotide> {
    segment.iter().rev().map(|base| base.complement()).collect()
}

///
/// A validated scaffold strand: a non-empty, ordered sequence of bases.
///
/// Construction goes through [`FromStr`], which normalizes raw text (strips a
/// trailing line break, upper-cases) and rejects any symbol outside the
/// alphabet with [`ScaffoldError::InvalidAlphabet`].
///
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Scaffold {
    bases: Vec<Nucleotide>,
}

impl Scaffold {
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    pub fn bases(&self) -> &[Nucleotide] {
        &self.bases
    }

    ///
    /// Get the sequence string of the scaffold
    ///
    pub fn as_string(&self) -> String {
        self.bases.iter().map(|base| base.as_char()).collect()
    }
}

impl FromStr for Scaffold {
    type Err = ScaffoldError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        // scaffold files carry the sequence on a single line; tolerate the
        // line break and lower-case input, reject everything else
        let cleaned = raw.strip_suffix('\n').unwrap_or(raw);
        let cleaned = cleaned.strip_suffix('\r').unwrap_or(cleaned);

        if cleaned.is_empty() {
            return Err(ScaffoldError::EmptySequence);
        }

        let mut bases = Vec::with_capacity(cleaned.len());
        for (position, symbol) in cleaned.chars().enumerate() {
            let symbol = symbol.to_ascii_uppercase();
            match Nucleotide::from_char(symbol) {
                Some(base) => bases.push(base),
                None => return Err(ScaffoldError::InvalidAlphabet { symbol, position }),
            }
        }

        Ok(Scaffold { bases })
    }
}

impl TryFrom<&str> for Scaffold {
    type Error = ScaffoldError;

    fn try_from(raw: &str) -> Result<Self, ScaffoldError> {
        raw.parse()
    }
}

impl Display for Scaffold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
