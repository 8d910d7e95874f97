use crate::consts::DEFAULT_SEGMENT_LENGTH;

///
/// Immutable configuration for one orthogonality scoring call.
///
/// The defaults mirror the tool's traditional behavior: 7-base segments,
/// circular scaffolds, exact matches only.
///
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct OrthoConfig {
    /// Length of the compared segments
    pub segment_length: usize,
    /// Treat the scaffolds as linear strands instead of circular ones
    pub is_linear: bool,
    /// Also count reverse-complementary segment matches
    pub include_rev_compl: bool,
}

impl Default for OrthoConfig {
    fn default() -> Self {
        OrthoConfig {
            segment_length: DEFAULT_SEGMENT_LENGTH,
            is_linear: false,
            include_rev_compl: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_default_config() {
        let config = OrthoConfig::default();
        assert_eq!(config.segment_length, 7);
        assert!(!config.is_linear);
        assert!(!config.include_rev_compl);
    }
}
