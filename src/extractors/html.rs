//! Markup extractor
//!
//! Recognizes `html` fenced blocks and path comments in `//` and `<!-- -->`
//! styles. A fenced HTML document without any path comment is still
//! recovered: the destination defaults to a static path derived from the
//! document title.

use crate::artifact::Artifact;
use crate::extractors::common::{classify, clean_path, CommentStyle, ExtractionTiers, KindRule, TierSpec};
use crate::extractors::{Extractor, ExtractorError};
use regex::Regex;
use tracing::{debug, info};

const PRODUCER: &str = "HTML";

const TIER_SPEC: TierSpec = TierSpec {
    fence_tags: &["html"],
    suffixes: &["html", "htm"],
    path_prefix: "",
    comment_styles: &[CommentStyle::Line, CommentStyle::Markup],
};

/// Default destination for pathless documents
const DEFAULT_STATIC_DIR: &str = "src/main/resources/static";

/// Classification runs over lowercased content
const KIND_RULES: &[KindRule] = &[
    KindRule {
        all_of: &["<!doctype html"],
        label: "HTML5 Document",
    },
    KindRule {
        all_of: &["<template"],
        label: "HTML Template",
    },
    KindRule {
        all_of: &["th:"],
        label: "Thymeleaf Template",
    },
    KindRule {
        all_of: &["<form"],
        label: "HTML Form",
    },
    KindRule {
        all_of: &["<table"],
        label: "HTML Table",
    },
    KindRule {
        all_of: &["<script"],
        label: "Interactive HTML",
    },
];

pub struct HtmlExtractor;

impl HtmlExtractor {
    fn make_artifact(&self, path: &str, content: &str) -> Artifact {
        let path = clean_path(path, &[]);
        if !is_valid_html(content) {
            return Artifact::invalid(
                path,
                content,
                PRODUCER,
                "Invalid HTML content - missing basic HTML structure",
            );
        }
        let kind = classify(&content.to_lowercase(), KIND_RULES, "HTML");
        Artifact::new(path, content, kind, PRODUCER)
    }

    /// Fenced documents with a doctype but no path comment
    fn pathless_documents(&self, text: &str) -> Result<Vec<Artifact>, ExtractorError> {
        let pattern = Regex::new(r"```html\s*\n([\s\S]*?<!DOCTYPE html[\s\S]*?)```")?;
        let artifacts = pattern
            .captures_iter(text)
            .map(|cap| {
                let body = cap[1].trim();
                let path = default_path_for(body);
                debug!(path = %path, "HTML document without path comment");
                self.make_artifact(&path, body)
            })
            .collect();
        Ok(artifacts)
    }
}

/// Derive a static destination from the document title, slugified
fn default_path_for(content: &str) -> String {
    let title = content
        .split("<title>")
        .nth(1)
        .and_then(|rest| rest.split("</title>").next())
        .map(slugify)
        .unwrap_or_default();

    if title.is_empty() {
        format!("{}/index.html", DEFAULT_STATIC_DIR)
    } else {
        format!("{}/{}.html", DEFAULT_STATIC_DIR, title)
    }
}

fn slugify(title: &str) -> String {
    let mut slug = String::new();
    let mut last_dash = true;
    for ch in title.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch);
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    slug.trim_matches('-').to_string()
}

fn is_valid_html(content: &str) -> bool {
    let lower = content.to_lowercase();
    lower.contains("<html")
        || lower.contains("<!doctype")
        || lower.contains("<head")
        || lower.contains("<body")
        || (lower.contains('<') && lower.contains('>'))
}

impl Extractor for HtmlExtractor {
    fn kind_id(&self) -> &str {
        PRODUCER
    }

    fn implementation_name(&self) -> &str {
        "HtmlExtractor"
    }

    fn supported_suffixes(&self) -> &[&str] {
        &[".html", ".htm"]
    }

    fn can_handle(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        text.contains("```html")
            || text.contains(".html")
            || lower.contains("<!doctype")
            || lower.contains("<html")
            || lower.contains("<head")
            || lower.contains("<body")
            || (lower.contains('<') && lower.contains('>'))
    }

    fn extract(&self, text: &str) -> Result<Vec<Artifact>, ExtractorError> {
        debug!(content_len = text.len(), "Scanning for HTML artifacts");

        let tiers = ExtractionTiers::build(&TIER_SPEC)?;
        let mut artifacts = tiers.run(text, |path, content| self.make_artifact(path, content));

        if artifacts.is_empty() {
            artifacts = self.pathless_documents(text)?;
        }

        info!(count = artifacts.len(), "HTML extractor finished");
        Ok(artifacts)
    }
}
