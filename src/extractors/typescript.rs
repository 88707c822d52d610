//! TypeScript artifact extractor
//!
//! Dedicated to pure TypeScript files (interfaces, types, enums,
//! declarations). Deliberately disjoint from the React extractor: content
//! carrying component-framework markers is neither claimed nor validated
//! here, even when it contains `export`.

use crate::artifact::Artifact;
use crate::extractors::common::{classify, clean_path, CommentStyle, ExtractionTiers, KindRule, TierSpec};
use crate::extractors::{Extractor, ExtractorError};
use tracing::{debug, info};

const PRODUCER: &str = "TypeScript";

const TIER_SPEC: TierSpec = TierSpec {
    fence_tags: &["typescript", "ts"],
    suffixes: &["d.ts", "ts"],
    path_prefix: "src/",
    comment_styles: &[CommentStyle::Line],
};

/// Markers that hand content over to the React extractor
const REACT_MARKERS: &[&str] = &["React", "jsx", "tsx", "useState", "useEffect"];

const KIND_RULES: &[KindRule] = &[
    KindRule {
        all_of: &["interface ", "enum ", "type "],
        label: "TypeScript Definitions",
    },
    KindRule {
        all_of: &["export interface"],
        label: "TypeScript Interface",
    },
    KindRule {
        all_of: &["export enum"],
        label: "TypeScript Enum",
    },
    KindRule {
        all_of: &["export type"],
        label: "TypeScript Types",
    },
    KindRule {
        all_of: &["declare "],
        label: "TypeScript Declarations",
    },
    KindRule {
        all_of: &["namespace "],
        label: "TypeScript Namespace",
    },
    KindRule {
        all_of: &["export const"],
        label: "TypeScript Constants",
    },
    KindRule {
        all_of: &["function "],
        label: "TypeScript Functions",
    },
    KindRule {
        all_of: &["class "],
        label: "TypeScript Class",
    },
];

pub struct TypeScriptExtractor;

impl TypeScriptExtractor {
    fn make_artifact(&self, path: &str, content: &str) -> Artifact {
        let path = clean_path(path, &["src/"]);
        if !is_valid_typescript(content) {
            return Artifact::invalid(
                path,
                content,
                PRODUCER,
                "Invalid TypeScript content - missing valid TS syntax",
            );
        }
        let kind = classify(content, KIND_RULES, "TypeScript");
        Artifact::new(path, content, kind, PRODUCER)
    }
}

fn has_react_markers(content: &str) -> bool {
    REACT_MARKERS.iter().any(|marker| content.contains(marker))
}

fn is_valid_typescript(content: &str) -> bool {
    let has_ts_syntax = content.contains("export ")
        || content.contains("import ")
        || content.contains("interface ")
        || content.contains("type ")
        || content.contains("enum ")
        || content.contains("declare ")
        || content.contains("namespace ");
    has_ts_syntax && !has_react_markers(content)
}

impl Extractor for TypeScriptExtractor {
    fn kind_id(&self) -> &str {
        PRODUCER
    }

    fn implementation_name(&self) -> &str {
        "TypeScriptExtractor"
    }

    fn supported_suffixes(&self) -> &[&str] {
        &[".ts", ".d.ts"]
    }

    fn can_handle(&self, text: &str) -> bool {
        if text.contains("```typescript") || (text.contains("```ts") && !text.contains("```tsx")) {
            return true;
        }
        if text.contains("// src/") && text.contains(".ts") && !text.contains(".tsx") {
            return true;
        }
        let has_ts_syntax = text.contains("export interface")
            || text.contains("export enum")
            || text.contains("export type")
            || text.contains("declare ")
            || text.contains("namespace ");
        has_ts_syntax && !has_react_markers(text)
    }

    fn extract(&self, text: &str) -> Result<Vec<Artifact>, ExtractorError> {
        debug!(content_len = text.len(), "Scanning for TypeScript artifacts");

        let tiers = ExtractionTiers::build(&TIER_SPEC)?;
        let artifacts = tiers.run(text, |path, content| self.make_artifact(path, content));

        info!(count = artifacts.len(), "TypeScript extractor finished");
        Ok(artifacts)
    }
}
