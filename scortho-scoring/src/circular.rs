use scortho_core::models::{Nucleotide, Scaffold};

use crate::errors::ScoringError;

///
/// Build the extended buffer a scaffold is windowed over.
///
/// Linear scaffolds are copied unchanged. Circular scaffolds wrap around, so
/// the first `segment_length` bases are appended to the end; windows anchored
/// near the nominal end can then read past it as if the strand were a cycle.
///
/// Fails with [`ScoringError::InvalidSegmentLength`] when `segment_length` is
/// zero or exceeds the scaffold length.
///
pub fn circularize(
    scaffold: &Scaffold,
    segment_length: usize,
    is_linear: bool,
) -> Result<Vec<Nucleotide>, ScoringError> {
    if segment_length == 0 || segment_length > scaffold.len() {
        return Err(ScoringError::InvalidSegmentLength {
            segment_length,
            limit: scaffold.len(),
        });
    }

    let bases = scaffold.bases();
    if is_linear {
        return Ok(bases.to_vec());
    }

    let mut extended = Vec::with_capacity(bases.len() + segment_length);
    extended.extend_from_slice(bases);
    extended.extend_from_slice(&bases[..segment_length]);

    Ok(extended)
}
