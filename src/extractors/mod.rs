//! Multi-format artifact extractors
//!
//! Each extractor recognizes one family of artifacts (Java, React/TypeScript,
//! TypeScript, CSS, HTML) inside a free-form assistant response and pulls them
//! out as [`Artifact`](crate::artifact::Artifact)s. Extractors are stateless
//! and independently testable; the [`ExtractorRegistry`] coordinates them.

pub mod common;
pub mod css;
pub mod html;
pub mod java;
pub mod react;
pub mod registry;
pub mod typescript;

pub use css::CssExtractor;
pub use html::HtmlExtractor;
pub use java::JavaExtractor;
pub use react::ReactExtractor;
pub use registry::{ExtractorInfo, ExtractorRegistry, MANAGER_PRODUCER};
pub use typescript::TypeScriptExtractor;

use crate::artifact::Artifact;
use thiserror::Error;

/// Errors raised by an extractor's internal machinery
///
/// Malformed input never produces an error: it becomes an invalid artifact.
/// These variants cover extractor-internal faults only, which the registry
/// records as an extractor-level failure without aborting other extractors.
#[derive(Debug, Error)]
pub enum ExtractorError {
    /// A scanning pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// An unexpected internal fault while scanning
    #[error("Extraction failed: {0}")]
    Internal(String),
}

/// Capability contract for one artifact family
///
/// A closed set of concrete implementations is registered in a fixed order;
/// all of them follow the shared three-tier strategy in
/// [`common`](crate::extractors::common) but differ in fence tags, suffixes,
/// validity predicates, and kind classification.
pub trait Extractor: Send + Sync {
    /// Stable producer identifier (e.g. "Java", "React/TypeScript")
    fn kind_id(&self) -> &str;

    /// Concrete implementation name, for introspection reports
    fn implementation_name(&self) -> &str;

    /// File suffixes this extractor claims, for introspection only
    fn supported_suffixes(&self) -> &[&str];

    /// Cheap, side-effect-free marker scan deciding whether this extractor
    /// should attempt extraction at all
    fn can_handle(&self, text: &str) -> bool;

    /// Extract all artifacts of this family from the text
    ///
    /// Malformed segments become invalid artifacts, not errors. `Err` is
    /// reserved for extractor-internal faults.
    fn extract(&self, text: &str) -> Result<Vec<Artifact>, ExtractorError>;
}
