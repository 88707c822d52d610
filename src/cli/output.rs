//! Output formatting for CLI results

use crate::artifact::ExtractionOutcome;
use crate::extractors::ExtractorInfo;
use anyhow::{Context, Result};

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Human,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "human" | "text" => Ok(Self::Human),
            other => anyhow::bail!("Unsupported output format: {} (json|yaml|human)", other),
        }
    }
}

/// Formats extraction results for display
pub struct OutputFormatter {
    format: OutputFormat,
    max_preview_chars: usize,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat, max_preview_chars: usize) -> Self {
        Self {
            format,
            max_preview_chars,
        }
    }

    /// Format a full extraction outcome
    pub fn format_outcome(&self, outcome: &ExtractionOutcome) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(outcome)
                .context("Failed to serialize outcome to JSON"),
            OutputFormat::Yaml => {
                serde_yaml::to_string(outcome).context("Failed to serialize outcome to YAML")
            }
            OutputFormat::Human => Ok(self.format_outcome_human(outcome)),
        }
    }

    /// Format the list of applicable producer ids from a detect run
    pub fn format_detection(&self, producers: &[String]) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(producers)
                .context("Failed to serialize detection to JSON"),
            OutputFormat::Yaml => {
                serde_yaml::to_string(producers).context("Failed to serialize detection to YAML")
            }
            OutputFormat::Human => {
                if producers.is_empty() {
                    Ok("No extractor claims this input\n".to_string())
                } else {
                    let mut out = format!("Applicable extractors ({}):\n", producers.len());
                    for producer in producers {
                        out.push_str(&format!("  {}\n", producer));
                    }
                    Ok(out)
                }
            }
        }
    }

    /// Format extractor descriptions from the registry
    pub fn format_extractors(&self, infos: &[ExtractorInfo]) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(infos)
                .context("Failed to serialize extractor list to JSON"),
            OutputFormat::Yaml => {
                serde_yaml::to_string(infos).context("Failed to serialize extractor list to YAML")
            }
            OutputFormat::Human => {
                let mut out = format!("Registered extractors ({}):\n", infos.len());
                for info in infos {
                    out.push_str(&format!(
                        "  {} ({}): {}\n",
                        info.producer_id,
                        info.implementation_name,
                        info.suffixes.join(", ")
                    ));
                }
                Ok(out)
            }
        }
    }

    fn format_outcome_human(&self, outcome: &ExtractionOutcome) -> String {
        let mut out = outcome.summary();

        if !outcome.all_artifacts.is_empty() {
            out.push('\n');
            for artifact in &outcome.all_artifacts {
                let status = if artifact.valid { "valid" } else { "INVALID" };
                out.push_str(&format!(
                    "--- {} [{}] ({}, {})\n",
                    artifact.path, status, artifact.producer, artifact.kind
                ));
                if let Some(error) = &artifact.error {
                    out.push_str(&format!("    reason: {}\n", error));
                }
                out.push_str(&indent(&truncate(&artifact.content, self.max_preview_chars)));
                out.push('\n');
            }
        }

        out
    }
}

fn truncate(content: &str, max_chars: usize) -> String {
    if content.chars().count() <= max_chars {
        content.to_string()
    } else {
        let truncated: String = content.chars().take(max_chars).collect();
        format!("{}\n... (truncated)", truncated)
    }
}

fn indent(content: &str) -> String {
    content
        .lines()
        .map(|line| format!("    {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::Artifact;

    fn sample_outcome() -> ExtractionOutcome {
        let mut outcome = ExtractionOutcome::new();
        let artifacts = vec![Artifact::new(
            "src/App.java",
            "package app;\npublic class App {}",
            "Class",
            "Java",
        )];
        outcome.add_producer_result("Java", artifacts.clone());
        outcome.set_artifacts(artifacts);
        outcome
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(OutputFormat::parse("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("YAML").unwrap(), OutputFormat::Yaml);
        assert_eq!(OutputFormat::parse("human").unwrap(), OutputFormat::Human);
        assert!(OutputFormat::parse("xml").is_err());
    }

    #[test]
    fn test_format_outcome_json() {
        let formatter = OutputFormatter::new(OutputFormat::Json, 400);
        let output = formatter.format_outcome(&sample_outcome()).unwrap();
        assert!(output.contains("\"succeeded\": true"));
        assert!(output.contains("src/App.java"));
    }

    #[test]
    fn test_format_outcome_yaml() {
        let formatter = OutputFormatter::new(OutputFormat::Yaml, 400);
        let output = formatter.format_outcome(&sample_outcome()).unwrap();
        assert!(output.contains("succeeded: true"));
    }

    #[test]
    fn test_format_outcome_human_includes_summary_and_preview() {
        let formatter = OutputFormatter::new(OutputFormat::Human, 400);
        let output = formatter.format_outcome(&sample_outcome()).unwrap();
        assert!(output.contains("Total artifacts: 1"));
        assert!(output.contains("src/App.java [valid] (Java, Class)"));
        assert!(output.contains("package app;"));
    }

    #[test]
    fn test_format_outcome_human_truncates_long_content() {
        let mut outcome = ExtractionOutcome::new();
        let long = "x".repeat(500);
        outcome.set_artifacts(vec![Artifact::new("a.css", long, "CSS", "CSS")]);

        let formatter = OutputFormatter::new(OutputFormat::Human, 100);
        let output = formatter.format_outcome(&outcome).unwrap();
        assert!(output.contains("... (truncated)"));
        assert!(!output.contains(&"x".repeat(200)));
    }

    #[test]
    fn test_format_detection_human_empty() {
        let formatter = OutputFormatter::new(OutputFormat::Human, 400);
        let output = formatter.format_detection(&[]).unwrap();
        assert!(output.contains("No extractor claims"));
    }

    #[test]
    fn test_format_detection_json() {
        let formatter = OutputFormatter::new(OutputFormat::Json, 400);
        let output = formatter
            .format_detection(&["Java".to_string(), "CSS".to_string()])
            .unwrap();
        assert!(output.contains("\"Java\""));
        assert!(output.contains("\"CSS\""));
    }

    #[test]
    fn test_format_extractors_human() {
        let formatter = OutputFormatter::new(OutputFormat::Human, 400);
        let infos = vec![ExtractorInfo {
            producer_id: "Java".to_string(),
            suffixes: vec![".java".to_string()],
            implementation_name: "JavaExtractor".to_string(),
        }];
        let output = formatter.format_extractors(&infos).unwrap();
        assert!(output.contains("Java (JavaExtractor): .java"));
    }
}
