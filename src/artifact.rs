//! Value types for extraction results
//!
//! An [`Artifact`] is one extracted unit of content (a would-be file) with a
//! destination path, classified kind, and validity state. An
//! [`ExtractionOutcome`] aggregates one orchestration run across all
//! extractors. Both are plain data: the orchestrator populates an outcome and
//! hands it to the caller as a read-only snapshot.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One extracted unit of content
///
/// Artifacts are immutable once constructed. An artifact is either a
/// successfully validated extraction (`valid == true`) or an invalid
/// placeholder carrying a human-readable rejection reason. Invalid artifacts
/// keep their content (when a boundary was found) so callers can audit why
/// something looked like, but was rejected as, this kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// Declared or inferred destination path (may be empty if undetermined)
    pub path: String,

    /// Last path segment, derived from `path`
    pub name: String,

    /// Raw extracted text
    pub content: String,

    /// Coarse classification (e.g. "Controller", "React Component")
    pub kind: String,

    /// Identifier of the extractor that produced this artifact
    pub producer: String,

    /// Whether the content passed the extractor's validity predicate
    pub valid: bool,

    /// Rejection reason; present only when `valid` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Artifact {
    /// Create a valid artifact
    pub fn new(
        path: impl Into<String>,
        content: impl Into<String>,
        kind: impl Into<String>,
        producer: impl Into<String>,
    ) -> Self {
        let path = path.into();
        let name = file_name_of(&path);
        Self {
            path,
            name,
            content: content.into(),
            kind: kind.into(),
            producer: producer.into(),
            valid: true,
            error: None,
        }
    }

    /// Create an invalid artifact with a rejection reason
    ///
    /// Content is attached when the extraction tier found a boundary, so the
    /// rejected text remains inspectable.
    pub fn invalid(
        path: impl Into<String>,
        content: impl Into<String>,
        producer: impl Into<String>,
        error: impl Into<String>,
    ) -> Self {
        let path = path.into();
        let name = file_name_of(&path);
        Self {
            path,
            name,
            content: content.into(),
            kind: String::new(),
            producer: producer.into(),
            valid: false,
            error: Some(error.into()),
        }
    }
}

fn file_name_of(path: &str) -> String {
    path.rsplit(['/', '\\']).next().unwrap_or(path).to_string()
}

/// Aggregated result of one orchestration run
///
/// Created fresh per call, populated exclusively by the
/// [`ExtractorRegistry`](crate::extractors::ExtractorRegistry), never mutated
/// after return.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionOutcome {
    /// All artifacts in discovery order: extractor registration order, then
    /// match order within an extractor
    pub all_artifacts: Vec<Artifact>,

    /// Artifacts grouped by producer id. Presence with an empty list means
    /// the extractor matched applicability but found nothing; absence means
    /// it was not applicable or errored.
    pub by_producer: BTreeMap<String, Vec<Artifact>>,

    /// Extractor-level failures keyed by producer id. Distinct from an
    /// artifact being individually marked invalid.
    pub errors: BTreeMap<String, String>,

    /// True iff at least one artifact was found
    pub succeeded: bool,

    /// Number of valid artifacts
    pub valid_count: usize,

    /// Number of invalid artifacts
    pub invalid_count: usize,

    /// When this outcome was produced
    pub extracted_at: DateTime<Utc>,
}

impl ExtractionOutcome {
    pub fn new() -> Self {
        Self {
            all_artifacts: Vec::new(),
            by_producer: BTreeMap::new(),
            errors: BTreeMap::new(),
            succeeded: false,
            valid_count: 0,
            invalid_count: 0,
            extracted_at: Utc::now(),
        }
    }

    /// Record the artifact list one extractor returned
    pub fn add_producer_result(&mut self, producer: &str, artifacts: Vec<Artifact>) {
        self.by_producer.insert(producer.to_string(), artifacts);
    }

    /// Record an extractor-level failure
    pub fn add_error(&mut self, producer: &str, message: impl Into<String>) {
        self.errors.insert(producer.to_string(), message.into());
    }

    /// Replace the full artifact list, recomputing counts and `succeeded`
    pub fn set_artifacts(&mut self, artifacts: Vec<Artifact>) {
        self.valid_count = artifacts.iter().filter(|a| a.valid).count();
        self.invalid_count = artifacts.len() - self.valid_count;
        self.succeeded = !artifacts.is_empty();
        self.all_artifacts = artifacts;
    }

    /// Artifacts that passed validation
    pub fn valid_artifacts(&self) -> Vec<&Artifact> {
        self.all_artifacts.iter().filter(|a| a.valid).collect()
    }

    /// Artifacts that failed validation
    pub fn invalid_artifacts(&self) -> Vec<&Artifact> {
        self.all_artifacts.iter().filter(|a| !a.valid).collect()
    }

    /// Artifacts produced by one extractor
    pub fn artifacts_by(&self, producer: &str) -> &[Artifact] {
        self.by_producer
            .get(producer)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Producer ids that returned at least one artifact
    pub fn successful_producers(&self) -> Vec<&str> {
        self.by_producer
            .iter()
            .filter(|(_, artifacts)| !artifacts.is_empty())
            .map(|(producer, _)| producer.as_str())
            .collect()
    }

    /// Producer ids that raised an extractor-level failure
    pub fn failed_producers(&self) -> Vec<&str> {
        self.errors.keys().map(|k| k.as_str()).collect()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Human-readable report of this run
    pub fn summary(&self) -> String {
        let mut summary = String::new();
        summary.push_str(&format!(
            "Extraction completed at {}\n",
            self.extracted_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        summary.push_str(&format!(
            "Total artifacts: {} (Valid: {}, Invalid: {})\n",
            self.all_artifacts.len(),
            self.valid_count,
            self.invalid_count
        ));

        if !self.by_producer.is_empty() {
            summary.push_str("Artifacts by extractor:\n");
            for (producer, artifacts) in &self.by_producer {
                let valid = artifacts.iter().filter(|a| a.valid).count();
                summary.push_str(&format!(
                    "  {}: {} artifacts ({} valid)\n",
                    producer,
                    artifacts.len(),
                    valid
                ));
            }
        }

        if !self.errors.is_empty() {
            summary.push_str("Errors:\n");
            for (producer, error) in &self.errors {
                summary.push_str(&format!("  {}: {}\n", producer, error));
            }
        }

        summary
    }
}

impl Default for ExtractionOutcome {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_name_derived_from_path() {
        let artifact = Artifact::new("src/app/Greeter.java", "class Greeter {}", "Class", "Java");
        assert_eq!(artifact.name, "Greeter.java");
        assert!(artifact.valid);
        assert!(artifact.error.is_none());
    }

    #[test]
    fn test_artifact_name_backslash_path() {
        let artifact = Artifact::new("src\\app\\Main.java", "", "Class", "Java");
        assert_eq!(artifact.name, "Main.java");
    }

    #[test]
    fn test_artifact_name_no_separator() {
        let artifact = Artifact::new("index.html", "", "HTML", "HTML");
        assert_eq!(artifact.name, "index.html");
    }

    #[test]
    fn test_invalid_artifact_keeps_content_and_error() {
        let artifact = Artifact::invalid("src/x.ts", "not typescript", "TypeScript", "no markers");
        assert!(!artifact.valid);
        assert_eq!(artifact.error.as_deref(), Some("no markers"));
        assert_eq!(artifact.content, "not typescript");
    }

    #[test]
    fn test_outcome_counts_recomputed_on_set() {
        let mut outcome = ExtractionOutcome::new();
        assert!(!outcome.succeeded);

        outcome.set_artifacts(vec![
            Artifact::new("a.css", "x{}", "CSS", "CSS"),
            Artifact::invalid("b.css", "", "CSS", "empty"),
        ]);
        assert!(outcome.succeeded);
        assert_eq!(outcome.valid_count, 1);
        assert_eq!(outcome.invalid_count, 1);

        outcome.set_artifacts(vec![]);
        assert!(!outcome.succeeded);
        assert_eq!(outcome.valid_count, 0);
        assert_eq!(outcome.invalid_count, 0);
    }

    #[test]
    fn test_outcome_producer_breakdown() {
        let mut outcome = ExtractionOutcome::new();
        outcome.add_producer_result("Java", vec![Artifact::new("a.java", "", "Class", "Java")]);
        outcome.add_producer_result("CSS", vec![]);
        outcome.add_error("HTML", "boom");

        assert_eq!(outcome.successful_producers(), vec!["Java"]);
        assert_eq!(outcome.failed_producers(), vec!["HTML"]);
        assert_eq!(outcome.artifacts_by("Java").len(), 1);
        assert!(outcome.artifacts_by("CSS").is_empty());
        assert!(outcome.artifacts_by("Unknown").is_empty());
        assert!(outcome.has_errors());
    }

    #[test]
    fn test_summary_contains_counts_and_errors() {
        let mut outcome = ExtractionOutcome::new();
        outcome.add_producer_result(
            "Java",
            vec![
                Artifact::new("a.java", "", "Class", "Java"),
                Artifact::invalid("b.java", "", "Java", "bad"),
            ],
        );
        outcome.add_error("CSS", "pattern failure");
        outcome.set_artifacts(vec![
            Artifact::new("a.java", "", "Class", "Java"),
            Artifact::invalid("b.java", "", "Java", "bad"),
        ]);

        let summary = outcome.summary();
        assert!(summary.contains("Total artifacts: 2 (Valid: 1, Invalid: 1)"));
        assert!(summary.contains("Java: 2 artifacts (1 valid)"));
        assert!(summary.contains("CSS: pattern failure"));
    }

    #[test]
    fn test_outcome_serializes_to_json() {
        let mut outcome = ExtractionOutcome::new();
        outcome.set_artifacts(vec![Artifact::new("a.html", "<html>", "HTML", "HTML")]);

        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"succeeded\":true"));
        assert!(json.contains("a.html"));
        // error field is omitted for valid artifacts
        assert!(!json.contains("\"error\""));
    }
}
