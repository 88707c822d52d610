//! React component extractor
//!
//! Recognizes `tsx`/`jsx` fenced blocks and `// src/...tsx` path comments.
//! Pure TypeScript files (`.ts`) belong to the TypeScript extractor; this one
//! handles component source only.

use crate::artifact::Artifact;
use crate::extractors::common::{classify, clean_path, CommentStyle, ExtractionTiers, KindRule, TierSpec};
use crate::extractors::{Extractor, ExtractorError};
use tracing::{debug, info};

const PRODUCER: &str = "React/TypeScript";

const TIER_SPEC: TierSpec = TierSpec {
    fence_tags: &["tsx", "jsx"],
    suffixes: &["tsx", "jsx"],
    path_prefix: "src/",
    comment_styles: &[CommentStyle::Line],
};

/// Hook-call markers used by both applicability and validity checks
const HOOK_MARKERS: &[&str] = &["useState", "useEffect", "useContext", "useReducer"];

const KIND_RULES: &[KindRule] = &[
    KindRule {
        all_of: &["export default", "function"],
        label: "React Component",
    },
    KindRule {
        all_of: &["React.FC"],
        label: "React Component",
    },
    KindRule {
        all_of: &["useState"],
        label: "React Hook",
    },
    KindRule {
        all_of: &["useEffect"],
        label: "React Hook",
    },
    KindRule {
        all_of: &["axios"],
        label: "API Service",
    },
    KindRule {
        all_of: &["fetch("],
        label: "API Service",
    },
];

pub struct ReactExtractor;

impl ReactExtractor {
    fn make_artifact(&self, path: &str, content: &str) -> Artifact {
        let path = clean_path(path, &["src/"]);
        if !is_valid_react(content) {
            return Artifact::invalid(
                path,
                content,
                PRODUCER,
                "Invalid React/TypeScript content - no component markers found",
            );
        }
        let kind = classify(content, KIND_RULES, "React Component");
        Artifact::new(path, content, kind, PRODUCER)
    }
}

fn has_framework_import(content: &str) -> bool {
    content.contains("import React")
        || content.contains("from 'react'")
        || content.contains("from \"react\"")
}

fn is_valid_react(content: &str) -> bool {
    has_framework_import(content)
        || HOOK_MARKERS.iter().any(|hook| content.contains(hook))
        || (content.contains('<')
            && content.contains('>')
            && (content.contains("export") || content.contains("return")))
}

impl Extractor for ReactExtractor {
    fn kind_id(&self) -> &str {
        PRODUCER
    }

    fn implementation_name(&self) -> &str {
        "ReactExtractor"
    }

    fn supported_suffixes(&self) -> &[&str] {
        &[".tsx", ".jsx"]
    }

    fn can_handle(&self, text: &str) -> bool {
        text.contains("```tsx")
            || text.contains("```jsx")
            || (text.contains("// src/") && (text.contains(".tsx") || text.contains(".jsx")))
            || has_framework_import(text)
            || HOOK_MARKERS.iter().any(|hook| text.contains(hook))
            || text.contains("JSX.Element")
            || text.contains("React.FC")
            || text.contains("React.Component")
            || (text.contains("export default")
                && (text.contains("function") || text.contains("const"))
                && text.contains('<')
                && text.contains("/>"))
            || (text.contains("return (") && text.contains('<') && text.contains("/>"))
    }

    fn extract(&self, text: &str) -> Result<Vec<Artifact>, ExtractorError> {
        debug!(content_len = text.len(), "Scanning for React artifacts");

        let tiers = ExtractionTiers::build(&TIER_SPEC)?;
        let artifacts = tiers.run(text, |path, content| self.make_artifact(path, content));

        info!(count = artifacts.len(), "React extractor finished");
        Ok(artifacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXTRACTOR: ReactExtractor = ReactExtractor;

    #[test]
    fn test_identity() {
        assert_eq!(EXTRACTOR.kind_id(), "React/TypeScript");
        assert_eq!(EXTRACTOR.supported_suffixes(), &[".tsx", ".jsx"]);
    }

    #[test]
    fn test_can_handle_hooks_and_markup() {
        assert!(EXTRACTOR.can_handle("const [n, setN] = useState(0);"));
        assert!(EXTRACTOR.can_handle("export default function App() { return <div />; }"));
        assert!(!EXTRACTOR.can_handle("export interface User { id: number }"));
    }

    #[test]
    fn test_fenced_tsx_block() {
        let text = "```tsx\n// src/components/Button.tsx\nimport React from 'react';\n\nexport default function Button() {\n  return <button>Go</button>;\n}\n```";
        let artifacts = EXTRACTOR.extract(text).unwrap();

        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].path, "src/components/Button.tsx");
        assert_eq!(artifacts[0].kind, "React Component");
        assert!(artifacts[0].valid);
    }

    #[test]
    fn test_ts_fence_not_claimed() {
        // typed-script fences belong to the TypeScript extractor
        let text = "```ts\n// src/types.ts\nexport interface User {}\n```";
        let artifacts = EXTRACTOR.extract(text).unwrap();
        assert!(artifacts.is_empty());
    }

    #[test]
    fn test_raw_jsx_files_split() {
        let text = "// src/App.jsx\nimport React from 'react';\nexport default function App() { return <div />; }\n\n// src/Nav.jsx\nimport React from 'react';\nexport default function Nav() { return <nav />; }\n";
        let artifacts = EXTRACTOR.extract(text).unwrap();

        assert_eq!(artifacts.len(), 2);
        assert_eq!(artifacts[0].name, "App.jsx");
        assert_eq!(artifacts[1].name, "Nav.jsx");
    }

    #[test]
    fn test_hook_classification() {
        let text = "```tsx\n// src/hooks/useCounter.tsx\nimport { useState } from 'react';\nexport const useCounter = () => useState(0);\n```";
        let artifacts = EXTRACTOR.extract(text).unwrap();
        assert_eq!(artifacts[0].kind, "React Hook");
    }

    #[test]
    fn test_invalid_content_captured() {
        let text = "// src/components/Broken.tsx\nplain prose, nothing component shaped\n";
        let artifacts = EXTRACTOR.extract(text).unwrap();

        assert_eq!(artifacts.len(), 1);
        assert!(!artifacts[0].valid);
        assert!(artifacts[0].error.is_some());
    }

    #[test]
    fn test_no_match_yields_empty() {
        let artifacts = EXTRACTOR.extract("no components here").unwrap();
        assert!(artifacts.is_empty());
    }
}
