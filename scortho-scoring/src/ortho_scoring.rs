use std::fmt::{self, Display};

use indicatif::ProgressBar;
use serde::Serialize;

use scortho_core::models::{Nucleotide, Scaffold, reverse_complement};

use crate::circular::circularize;
use crate::config::OrthoConfig;
use crate::errors::ScoringError;

///
/// Per-call accumulator for the pairwise scan. Owned exclusively by the scan
/// and converted into an [`OrthoReport`] afterwards.
///
#[derive(Debug, Default)]
struct MatchTally {
    count: u64,
    count_rev_compl: u64,
    repeats: Vec<u64>,
    repeats_rev_compl: Vec<u64>,
}

///
/// Final, immutable orthogonality report for one pair of scaffolds.
///
/// The field names are the stable contract a presentation layer may rely on.
/// Reverse-complement fields are `None` when reverse-complement counting was
/// not requested, never a numeric sentinel.
///
#[derive(Eq, PartialEq, Debug, Clone, Serialize)]
pub struct OrthoReport {
    /// Raw exact segment matches of sc1 within sc2
    pub count: u64,
    /// Raw reverse-complement segment matches
    pub count_revcompl: Option<u64>,
    /// Exact matches deduplicated so each sc1 position contributes at most once
    pub count_corrected: u64,
    /// Reverse-complement matches, deduplicated the same way
    pub count_revcompl_corrected: Option<u64>,
    /// Repeat multiplicities of sc1 positions with more than one exact match
    pub n_count: Vec<u64>,
    /// Repeat multiplicities of sc1 positions with more than one reverse-complement match
    pub n_count_revcompl: Option<Vec<u64>>,
}

impl Display for OrthoReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn optional<T: fmt::Debug>(value: &Option<T>) -> String {
            value
                .as_ref()
                .map_or("n/a".to_string(), |v| format!("{:?}", v))
        }

        writeln!(f, "count: {}", self.count)?;
        writeln!(f, "count_revcompl: {}", optional(&self.count_revcompl))?;
        writeln!(f, "count_corrected: {}", self.count_corrected)?;
        writeln!(
            f,
            "count_revcompl_corrected: {}",
            optional(&self.count_revcompl_corrected)
        )?;
        writeln!(f, "n_count: {:?}", self.n_count)?;
        write!(f, "n_count_revcompl: {}", optional(&self.n_count_revcompl))
    }
}

///
/// Score the orthogonality of two scaffold strands.
///
/// Every `segment_length`-base window of `sc1` is compared against every
/// window of `sc2`; matches are tallied raw and corrected for repeats so that
/// each `sc1` position contributes at most once. Both strands are read under
/// the topology selected in `config` (circular by default).
///
/// Fails with [`ScoringError::InvalidSegmentLength`] before any comparison
/// when the segment length is zero or exceeds either scaffold's length.
///
pub fn score_orthogonality(
    sc1: &Scaffold,
    sc2: &Scaffold,
    config: &OrthoConfig,
) -> Result<OrthoReport, ScoringError> {
    let extended_sc1 = circularize(sc1, config.segment_length, config.is_linear)?;
    let extended_sc2 = circularize(sc2, config.segment_length, config.is_linear)?;

    let tally = scan(&extended_sc1, &extended_sc2, sc1.len(), sc2.len(), config);

    let count_corrected = corrected_count(tally.count, &tally.repeats);
    let (count_revcompl, count_revcompl_corrected, n_count_revcompl) = if config.include_rev_compl
    {
        (
            Some(tally.count_rev_compl),
            Some(corrected_count(
                tally.count_rev_compl,
                &tally.repeats_rev_compl,
            )),
            Some(tally.repeats_rev_compl),
        )
    } else {
        (None, None, None)
    };

    Ok(OrthoReport {
        count: tally.count,
        count_revcompl,
        count_corrected,
        count_revcompl_corrected,
        n_count: tally.repeats,
        n_count_revcompl,
    })
}

///
/// The exhaustive all-pairs window scan over both extended buffers.
///
/// Windows that would run past the end of a buffer (possible only for linear
/// scaffolds near the tail) are skipped: a short window can never satisfy the
/// length-equality rule, so it is rejected rather than silently truncated.
///
fn scan(
    extended_sc1: &[Nucleotide],
    extended_sc2: &[Nucleotide],
    sc1_len: usize,
    sc2_len: usize,
    config: &OrthoConfig,
) -> MatchTally {
    let n = config.segment_length;
    let mut tally = MatchTally::default();

    let bar = ProgressBar::new(sc1_len as u64);

    for i in 0..sc1_len {
        bar.inc(1);

        let Some(window1) = extended_sc1.get(i..i + n) else {
            continue;
        };

        let mut repeat_count: u64 = 0;
        let mut repeat_count_rev_compl: u64 = 0;

        for j in 0..sc2_len {
            let Some(window2) = extended_sc2.get(j..j + n) else {
                continue;
            };

            if window1 == window2 {
                tally.count += 1;
                repeat_count += 1;
            }

            // the reverse-complement window is anchored at the same start
            // index j as the forward window
            if config.include_rev_compl && window1 == reverse_complement(window2).as_slice() {
                tally.count_rev_compl += 1;
                repeat_count_rev_compl += 1;
            }
        }

        // only positions matching more than once count as repeats
        if repeat_count > 1 {
            tally.repeats.push(repeat_count);
        }
        if repeat_count_rev_compl > 1 {
            tally.repeats_rev_compl.push(repeat_count_rev_compl);
        }
    }

    bar.finish_and_clear();

    tally
}

///
/// Deduplicate a raw match count: each position recorded in `repeats`
/// contributed `r` raw matches but should contribute exactly one, so the
/// `r - 1` excess per recorded position is removed. Positions with a single
/// match are not recorded and stay untouched.
///
fn corrected_count(raw: u64, repeats: &[u64]) -> u64 {
    let excess: u64 = repeats.iter().map(|r| r - 1).sum();
    raw - excess
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn scaffold(s: &str) -> Scaffold {
        s.parse().unwrap()
    }

    #[rstest]
    fn test_period_four_scaffold_against_itself() {
        // every 4-base window of the period-4 scaffold recurs twice in the
        // circular reading of its copy
        let sc = scaffold("ATGCATGC");
        let config = OrthoConfig {
            segment_length: 4,
            is_linear: false,
            include_rev_compl: false,
        };

        let report = score_orthogonality(&sc, &sc, &config).unwrap();

        assert_eq!(report.count, 16);
        assert_eq!(report.n_count, vec![2; 8]);
        assert_eq!(report.count_corrected, 8);

        assert_eq!(report.count_revcompl, None);
        assert_eq!(report.count_revcompl_corrected, None);
        assert_eq!(report.n_count_revcompl, None);
    }

    #[rstest]
    fn test_rev_compl_matches_without_exact_matches() {
        // AA never equals TT, but complements it everywhere
        let sc1 = scaffold("AAAA");
        let sc2 = scaffold("TTTT");
        let config = OrthoConfig {
            segment_length: 2,
            is_linear: true,
            include_rev_compl: true,
        };

        let report = score_orthogonality(&sc1, &sc2, &config).unwrap();

        assert_eq!(report.count, 0);
        assert_eq!(report.count_corrected, 0);
        assert_eq!(report.n_count, Vec::<u64>::new());

        // three full windows of sc1, each matching three windows of sc2
        assert_eq!(report.count_revcompl, Some(9));
        assert_eq!(report.n_count_revcompl, Some(vec![3, 3, 3]));
        assert_eq!(report.count_revcompl_corrected, Some(3));
    }

    #[rstest]
    fn test_rev_compl_window_shares_the_forward_anchor() {
        let sc1 = scaffold("ATGC");
        let sc2 = scaffold("GCAT");
        let config = OrthoConfig {
            segment_length: 4,
            is_linear: true,
            include_rev_compl: true,
        };

        let report = score_orthogonality(&sc1, &sc2, &config).unwrap();

        assert_eq!(report.count, 0);
        assert_eq!(report.count_revcompl, Some(1));
        assert_eq!(report.count_revcompl_corrected, Some(1));
    }

    #[rstest]
    fn test_wrap_spanning_match_needs_circular_topology() {
        // sc1 ends in AT and starts with GC; the ATGC window exists only
        // across the wrap
        let sc1 = scaffold("GCCAT");
        let sc2 = scaffold("TATGCT");

        let linear = OrthoConfig {
            segment_length: 4,
            is_linear: true,
            include_rev_compl: false,
        };
        let report = score_orthogonality(&sc1, &sc2, &linear).unwrap();
        assert_eq!(report.count, 0);

        let circular = OrthoConfig {
            is_linear: false,
            ..linear
        };
        let report = score_orthogonality(&sc1, &sc2, &circular).unwrap();
        assert_eq!(report.count, 1);
        assert_eq!(report.count_corrected, 1);
        assert_eq!(report.n_count, Vec::<u64>::new());
    }

    #[rstest]
    #[case(0)]
    #[case(4)]
    fn test_segment_length_out_of_range(#[case] segment_length: usize) {
        let sc1 = scaffold("ATGCATGC");
        let sc2 = scaffold("ATG");
        let config = OrthoConfig {
            segment_length,
            is_linear: false,
            include_rev_compl: false,
        };

        let result = score_orthogonality(&sc1, &sc2, &config);
        assert!(matches!(
            result,
            Err(ScoringError::InvalidSegmentLength { .. })
        ));
    }

    #[rstest]
    #[case("ATGCATGC", "ATGCATGC", 4, false)]
    #[case("GCCAT", "TATGCT", 4, true)]
    #[case("AAAA", "AAAA", 2, false)]
    fn test_corrected_count_never_exceeds_raw(
        #[case] sc1: &str,
        #[case] sc2: &str,
        #[case] segment_length: usize,
        #[case] is_linear: bool,
    ) {
        let config = OrthoConfig {
            segment_length,
            is_linear,
            include_rev_compl: true,
        };

        let report = score_orthogonality(&scaffold(sc1), &scaffold(sc2), &config).unwrap();

        assert!(report.count_corrected <= report.count);
        assert_eq!(
            report.count_corrected == report.count,
            report.n_count.is_empty()
        );

        let raw_rc = report.count_revcompl.unwrap();
        let corrected_rc = report.count_revcompl_corrected.unwrap();
        assert!(corrected_rc <= raw_rc);
        assert_eq!(
            corrected_rc == raw_rc,
            report.n_count_revcompl.unwrap().is_empty()
        );
    }

    #[rstest]
    fn test_report_display() {
        let sc = scaffold("ATGCATGC");
        let config = OrthoConfig {
            segment_length: 4,
            is_linear: false,
            include_rev_compl: false,
        };

        let report = score_orthogonality(&sc, &sc, &config).unwrap();
        let text = report.to_string();

        assert_eq!(
            text,
            "count: 16\n\
             count_revcompl: n/a\n\
             count_corrected: 8\n\
             count_revcompl_corrected: n/a\n\
             n_count: [2, 2, 2, 2, 2, 2, 2, 2]\n\
             n_count_revcompl: n/a"
        );
    }

    #[rstest]
    fn test_report_serializes_with_stable_field_names() {
        let sc = scaffold("ATGCATGC");
        let config = OrthoConfig {
            segment_length: 4,
            is_linear: false,
            include_rev_compl: false,
        };

        let report = score_orthogonality(&sc, &sc, &config).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["count"], 16);
        assert_eq!(json["count_corrected"], 8);
        assert!(json["count_revcompl"].is_null());
        assert!(json["count_revcompl_corrected"].is_null());
        assert_eq!(json["n_count"].as_array().unwrap().len(), 8);
        assert!(json["n_count_revcompl"].is_null());
    }
}
