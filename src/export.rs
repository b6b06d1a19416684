//! JSON export of a comparison result (spec.md §6 renderer contract —
//! a renderer need not be visual; this is the machine-readable one).
//!
//! Grounded in `compare_it::export`'s JSON/JSONL artifact writing, adapted
//! from a batch-of-file-pairs summary to a single segment stream + stats.

use serde::Serialize;

use crate::model::{AnnotatedParagraph, Statistics};
use crate::orchestrator::ComparisonOutput;

/// The on-disk JSON shape for one comparison: the annotated stream plus
/// the aggregate statistics, serialized verbatim from the model types.
#[derive(Debug, Serialize)]
pub struct ExportedComparison<'a> {
    pub stream: &'a [AnnotatedParagraph],
    pub stats: &'a Statistics,
}

impl<'a> ExportedComparison<'a> {
    pub fn new(output: &'a ComparisonOutput) -> Self {
        ExportedComparison {
            stream: &output.stream,
            stats: &output.stats,
        }
    }
}

/// Serialize a comparison output to a pretty-printed JSON string.
pub fn to_json_string(output: &ComparisonOutput) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ExportedComparison::new(output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Segment, SegmentKind};

    #[test]
    fn round_trips_through_serde_json() {
        let output = ComparisonOutput {
            stream: vec![AnnotatedParagraph::new(
                vec![Segment::new("hello", SegmentKind::Insert)],
                false,
                false,
            )],
            stats: {
                let mut s = Statistics::default();
                s.record(SegmentKind::Insert, 1);
                s
            },
        };

        let json = to_json_string(&output).unwrap();
        assert!(json.contains("\"insert\""));
        assert!(json.contains("\"insertions\": 1"));

        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["stats"]["insertions"], 1);
        assert_eq!(parsed["stream"][0]["segments"][0]["kind"], "insert");
    }
}
