/// Segment length used when none is requested, matching the tool's
/// traditional default of 7-base segments.
pub const DEFAULT_SEGMENT_LENGTH: usize = 7;
