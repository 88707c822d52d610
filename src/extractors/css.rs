//! Style-sheet extractor
//!
//! Recognizes `css`/`scss`/`sass` fenced blocks and path comments in both
//! `//` and `/* */` styles (the union of conventions seen in the wild).

use crate::artifact::Artifact;
use crate::extractors::common::{classify, clean_path, CommentStyle, ExtractionTiers, KindRule, TierSpec};
use crate::extractors::{Extractor, ExtractorError};
use tracing::{debug, info};

const PRODUCER: &str = "CSS";

const TIER_SPEC: TierSpec = TierSpec {
    fence_tags: &["css", "scss", "sass"],
    suffixes: &["css", "scss", "sass"],
    path_prefix: "",
    comment_styles: &[CommentStyle::Line, CommentStyle::Block],
};

const KIND_RULES: &[KindRule] = &[
    KindRule {
        all_of: &["@tailwind"],
        label: "Tailwind CSS",
    },
    KindRule {
        all_of: &["@import"],
        label: "CSS Imports",
    },
    KindRule {
        all_of: &["@media"],
        label: "Responsive CSS",
    },
    KindRule {
        all_of: &["@keyframes"],
        label: "CSS Animations",
    },
    KindRule {
        all_of: &["$", "&"],
        label: "SCSS",
    },
];

pub struct CssExtractor;

impl CssExtractor {
    fn make_artifact(&self, path: &str, content: &str) -> Artifact {
        let path = clean_path(path, &[]);
        if !is_valid_css(content) {
            return Artifact::invalid(
                path,
                content,
                PRODUCER,
                "Invalid CSS content - no valid CSS rules found",
            );
        }
        let kind = classify(content, KIND_RULES, default_kind_for(&path));
        Artifact::new(path, content, kind, PRODUCER)
    }
}

/// Extension-based fallback label when no content rule matches
fn default_kind_for(path: &str) -> &'static str {
    if path.ends_with(".scss") {
        "SCSS"
    } else if path.ends_with(".sass") {
        "SASS"
    } else {
        "CSS"
    }
}

fn is_valid_css(content: &str) -> bool {
    (content.contains('{') && content.contains('}'))
        || content.contains(':')
        || content.contains("@import")
        || content.contains("@media")
        || content.contains("@tailwind")
        || content.contains("@layer")
        || content.contains("@apply")
        || !content.trim().is_empty()
}

impl Extractor for CssExtractor {
    fn kind_id(&self) -> &str {
        PRODUCER
    }

    fn implementation_name(&self) -> &str {
        "CssExtractor"
    }

    fn supported_suffixes(&self) -> &[&str] {
        &[".css", ".scss", ".sass"]
    }

    fn can_handle(&self, text: &str) -> bool {
        text.contains("```css")
            || text.contains("```scss")
            || text.contains("```sass")
            || ((text.contains(".css") || text.contains(".scss") || text.contains(".sass"))
                && (text.contains("// ") || text.contains("/* ")))
            || text.contains("@tailwind")
            || text.contains("@layer")
            || text.contains("@apply")
            || text.contains("@import")
            || text.contains("@media")
            || (text.contains('{') && text.contains('}') && text.contains(':'))
    }

    fn extract(&self, text: &str) -> Result<Vec<Artifact>, ExtractorError> {
        debug!(content_len = text.len(), "Scanning for CSS artifacts");

        let tiers = ExtractionTiers::build(&TIER_SPEC)?;
        let artifacts = tiers.run(text, |path, content| self.make_artifact(path, content));

        info!(count = artifacts.len(), "CSS extractor finished");
        Ok(artifacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    const EXTRACTOR: CssExtractor = CssExtractor;

    #[test]
    fn test_identity() {
        assert_eq!(EXTRACTOR.kind_id(), "CSS");
        assert_eq!(EXTRACTOR.supported_suffixes(), &[".css", ".scss", ".sass"]);
    }

    #[test]
    fn test_can_handle_rule_block() {
        assert!(EXTRACTOR.can_handle(".btn { color: red; }"));
        assert!(EXTRACTOR.can_handle("@tailwind base;"));
        assert!(!EXTRACTOR.can_handle("public class A"));
    }

    #[test]
    fn test_fenced_with_line_comment() {
        let text = "```css\n// src/styles/app.css\nbody { margin: 0; }\n```";
        let artifacts = EXTRACTOR.extract(text).unwrap();

        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].path, "src/styles/app.css");
        assert_eq!(artifacts[0].kind, "CSS");
        assert!(artifacts[0].valid);
    }

    #[test]
    fn test_fenced_with_block_comment() {
        let text = "```css\n/* styles/main.css */\n@tailwind base;\n@tailwind components;\n```";
        let artifacts = EXTRACTOR.extract(text).unwrap();

        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].path, "styles/main.css");
        assert_eq!(artifacts[0].kind, "Tailwind CSS");
    }

    #[test]
    fn test_raw_two_sheets() {
        let text = "/* app.css */\nbody { margin: 0; }\n\n/* theme.scss */\n$primary: #333;\n.nav { &:hover { color: $primary; } }\n";
        let artifacts = EXTRACTOR.extract(text).unwrap();

        assert_eq!(artifacts.len(), 2);
        assert_eq!(artifacts[0].name, "app.css");
        assert_eq!(artifacts[1].name, "theme.scss");
        assert_eq!(artifacts[1].kind, "SCSS");
    }

    #[parameterized(
        tailwind = { "@tailwind base;", "Tailwind CSS" },
        imports = { "@import url('fonts.css');", "CSS Imports" },
        responsive = { "@media (max-width: 600px) { body { font-size: 12px; } }", "Responsive CSS" },
        animations = { "@keyframes spin { to { transform: rotate(360deg); } }", "CSS Animations" },
        plain = { "body { margin: 0; }", "CSS" },
    )]
    fn test_kind_classification(content: &str, expected: &str) {
        let text = format!("```css\n/* x.css */\n{}\n```", content);
        let artifacts = EXTRACTOR.extract(&text).unwrap();
        assert_eq!(artifacts[0].kind, expected);
    }

    #[test]
    fn test_scss_extension_fallback() {
        let text = "```scss\n// theme.scss\n.btn { color: red; }\n```";
        let artifacts = EXTRACTOR.extract(text).unwrap();
        assert_eq!(artifacts[0].kind, "SCSS");
    }

    #[test]
    fn test_no_match_yields_empty() {
        let artifacts = EXTRACTOR.extract("no styles anywhere").unwrap();
        assert!(artifacts.is_empty());
    }
}
