//! Extractor registry and orchestration
//!
//! The registry owns the ordered set of extractors and drives the four
//! orchestration operations: extract with all applicable, extract with one
//! named extractor, detect applicable extractors, and describe all
//! extractors. Per-extractor failures are isolated: one failing extractor is
//! recorded in the outcome's error map and never aborts the others.

use crate::artifact::ExtractionOutcome;
use crate::extractors::{
    CssExtractor, Extractor, HtmlExtractor, JavaExtractor, ReactExtractor, TypeScriptExtractor,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Pseudo-producer key for registry-level errors (e.g. unknown extractor id)
pub const MANAGER_PRODUCER: &str = "Manager";

/// Static description of one registered extractor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorInfo {
    pub producer_id: String,
    pub suffixes: Vec<String>,
    pub implementation_name: String,
}

#[derive(Clone)]
pub struct ExtractorRegistry {
    extractors: Vec<Arc<dyn Extractor>>,
}

impl ExtractorRegistry {
    pub fn new() -> Self {
        Self {
            extractors: Vec::new(),
        }
    }

    /// Registry with the five standard extractors in canonical order
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(JavaExtractor));
        registry.register(Arc::new(ReactExtractor));
        registry.register(Arc::new(TypeScriptExtractor));
        registry.register(Arc::new(CssExtractor));
        registry.register(Arc::new(HtmlExtractor));
        info!(
            extractors = registry.extractors.len(),
            "Initialized extractor registry"
        );
        registry
    }

    /// Append an extractor; registration order determines discovery order
    pub fn register(&mut self, extractor: Arc<dyn Extractor>) {
        self.extractors.push(extractor);
    }

    /// Run every applicable extractor over the text and aggregate results
    ///
    /// Artifacts land in registration order, then match order within an
    /// extractor. An extractor-level failure is recorded under its producer
    /// id without affecting the remaining extractors. Always returns an
    /// outcome; there is no fatal path.
    pub fn extract_all(&self, text: &str) -> ExtractionOutcome {
        info!(
            extractors = self.extractors.len(),
            content_len = text.len(),
            "Extracting with all applicable extractors"
        );

        let mut outcome = ExtractionOutcome::new();
        let mut all = Vec::new();

        for extractor in &self.extractors {
            let producer = extractor.kind_id();
            if !extractor.can_handle(text) {
                debug!(producer, "Extractor not applicable");
                continue;
            }

            match extractor.extract(text) {
                Ok(artifacts) => {
                    debug!(producer, count = artifacts.len(), "Extractor finished");
                    all.extend(artifacts.iter().cloned());
                    outcome.add_producer_result(producer, artifacts);
                }
                Err(e) => {
                    error!(producer, error = %e, "Extractor failed");
                    outcome.add_error(producer, e.to_string());
                }
            }
        }

        outcome.set_artifacts(all);
        info!(
            total = outcome.all_artifacts.len(),
            valid = outcome.valid_count,
            "Extraction completed"
        );
        outcome
    }

    /// Force one named extractor, bypassing its applicability check
    ///
    /// An unknown producer id is a reported error keyed by
    /// [`MANAGER_PRODUCER`], never a panic: callers may probe names freely.
    pub fn extract_with(&self, text: &str, producer_id: &str) -> ExtractionOutcome {
        info!(producer = producer_id, "Extracting with specific extractor");

        let mut outcome = ExtractionOutcome::new();

        let Some(extractor) = self
            .extractors
            .iter()
            .find(|e| e.kind_id().eq_ignore_ascii_case(producer_id))
        else {
            error!(producer = producer_id, "Extractor not found");
            outcome.add_error(
                MANAGER_PRODUCER,
                format!("Extractor '{}' not found", producer_id),
            );
            return outcome;
        };

        let producer = extractor.kind_id();
        match extractor.extract(text) {
            Ok(artifacts) => {
                info!(producer, count = artifacts.len(), "Extractor finished");
                outcome.add_producer_result(producer, artifacts.clone());
                outcome.set_artifacts(artifacts);
            }
            Err(e) => {
                error!(producer, error = %e, "Extractor failed");
                outcome.add_error(producer, e.to_string());
            }
        }

        outcome
    }

    /// Producer ids of every extractor claiming this text, in registration
    /// order
    ///
    /// More than one entry is not an error: several kinds may legitimately
    /// coexist in one response. Callers use the full list to surface
    /// ambiguity.
    pub fn detect_applicable(&self, text: &str) -> Vec<String> {
        self.extractors
            .iter()
            .filter(|e| e.can_handle(text))
            .map(|e| e.kind_id().to_string())
            .collect()
    }

    /// Static introspection of all registered extractors
    pub fn describe_extractors(&self) -> Vec<ExtractorInfo> {
        self.extractors
            .iter()
            .map(|e| ExtractorInfo {
                producer_id: e.kind_id().to_string(),
                suffixes: e
                    .supported_suffixes()
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                implementation_name: e.implementation_name().to_string(),
            })
            .collect()
    }

    /// All registered producer ids, in registration order
    pub fn producer_ids(&self) -> Vec<&str> {
        self.extractors.iter().map(|e| e.kind_id()).collect()
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
