use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoringError {
    #[error(
        "Invalid segment length {segment_length}: must be between 1 and the scaffold length ({limit})"
    )]
    InvalidSegmentLength { segment_length: usize, limit: usize },
}
