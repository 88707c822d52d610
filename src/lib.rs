//! codeharvest - typed code artifact extraction from AI assistant responses
//!
//! This library extracts embedded code files from free-form assistant reply
//! text. Responses mix prose with code declared via markdown fenced blocks or
//! bare path comments; each extractor recovers the files of one artifact kind
//! (Java, React/TypeScript, TypeScript, CSS, HTML), classifies them, and
//! validates their content.
//!
//! # Core Concepts
//!
//! - **Extractors**: One per artifact kind, each with an applicability check,
//!   a tiered extraction strategy, and a validity predicate
//! - **Tiers**: Fenced blocks with path comments first, bare path-comment
//!   splitting second, whole-input single-document extraction last; the first
//!   tier that yields anything wins
//! - **Registry**: Ordered set of extractors driving orchestration; one
//!   failing extractor never aborts the others
//!
//! # Example Usage
//!
//! ```
//! use codeharvest::ExtractorRegistry;
//!
//! let registry = ExtractorRegistry::with_defaults();
//! let response = "Here is the class:\n```java\n// src/main/java/App.java\npackage app;\npublic class App {}\n```";
//!
//! let outcome = registry.extract_all(response);
//! assert!(outcome.succeeded);
//! assert_eq!(outcome.all_artifacts[0].name, "App.java");
//! ```
//!
//! # Project Structure
//!
//! - [`artifact`]: Extracted artifact and outcome value types
//! - [`extractors`]: The extractor trait, the five implementations, and the
//!   registry

// Public modules
pub mod artifact;
pub mod cli;
pub mod config;
pub mod extractors;
pub mod util;

// Re-export key types for convenient access
pub use artifact::{Artifact, ExtractionOutcome};
pub use config::{ConfigError, HarvestConfig};
pub use extractors::{
    Extractor, ExtractorError, ExtractorInfo, ExtractorRegistry, MANAGER_PRODUCER,
};
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_is_codeharvest() {
        assert_eq!(NAME, "codeharvest");
    }
}
