//! Shared three-tier extraction scaffolding
//!
//! Every extractor runs the same cascade over the raw response text:
//!
//! 1. Fenced code blocks whose opening fence names a recognized language tag
//!    and whose first content line is a path-declaring comment.
//! 2. Raw multi-artifact splitting on repeated path-declaring comment lines
//!    (content pasted without fences).
//! 3. Whole-document fallback: the entire trimmed text begins with exactly
//!    one path-declaring comment.
//!
//! A tier's matches stop the cascade; later tiers never run once an earlier
//! tier found something. Extraction answers "where are the boundaries";
//! validity and kind classification are applied afterwards by each extractor.

use crate::artifact::Artifact;
use crate::extractors::ExtractorError;
use regex::Regex;

/// Comment conventions recognized for path-declaring comments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentStyle {
    /// `// path/to/file.ext`
    Line,
    /// `/* path/to/file.ext */`
    Block,
    /// `<!-- path/to/file.ext -->`
    Markup,
}

/// Static description of one extractor's boundary syntax
#[derive(Debug, Clone, Copy)]
pub struct TierSpec {
    /// Fence language tags this extractor claims (e.g. `["tsx", "jsx"]`)
    pub fence_tags: &'static [&'static str],

    /// File suffixes without the leading dot, longest first (e.g. `["d.ts", "ts"]`)
    pub suffixes: &'static [&'static str],

    /// Required path prefix for raw (unfenced) path comments, or ""
    pub path_prefix: &'static str,

    /// Accepted comment conventions, union of what the family uses
    pub comment_styles: &'static [CommentStyle],
}

/// Compiled tier patterns for one extractor
pub struct ExtractionTiers {
    fenced: Regex,
    path_comment: Regex,
}

impl ExtractionTiers {
    /// Compile the tier patterns for a spec
    ///
    /// Compilation failure is an extractor-internal fault, surfaced to the
    /// registry as an extractor-level error.
    pub fn build(spec: &TierSpec) -> Result<Self, ExtractorError> {
        let tags = alternation(spec.fence_tags);
        let suffixes = alternation(spec.suffixes);
        let open = comment_open(spec.comment_styles);
        let close = comment_close(spec.comment_styles);

        let fenced = Regex::new(&format!(
            r"```(?:{tags})\s*{open}[ \t]*([^\r\n]*?\.(?:{suffixes})){close}[ \t]*\r?\n([\s\S]*?)```"
        ))?;

        let prefix = regex::escape(spec.path_prefix);
        let path_comment = Regex::new(&format!(
            r"(?m)^[ \t]*{open}[ \t]*({prefix}[^\r\n]*?\.(?:{suffixes})){close}[ \t]*$"
        ))?;

        Ok(Self {
            fenced,
            path_comment,
        })
    }

    /// Run the cascade, building an artifact per (path, content) boundary
    pub fn run<F>(&self, text: &str, mut make: F) -> Vec<Artifact>
    where
        F: FnMut(&str, &str) -> Artifact,
    {
        let mut artifacts = self.fenced_blocks(text, &mut make);
        if artifacts.is_empty() {
            artifacts = self.raw_segments(text, &mut make);
        }
        if artifacts.is_empty() {
            artifacts = self.single_document(text, &mut make);
        }
        artifacts
    }

    /// Tier 1: fenced blocks with a leading path comment
    fn fenced_blocks<F>(&self, text: &str, make: &mut F) -> Vec<Artifact>
    where
        F: FnMut(&str, &str) -> Artifact,
    {
        self.fenced
            .captures_iter(text)
            .map(|cap| {
                let path = cap[1].trim();
                let body = cap[2].trim();
                make(path, body)
            })
            .collect()
    }

    /// Tier 2: split the whole text on path-comment lines
    ///
    /// Each comment owns the content up to the next comment (of any suffix
    /// this extractor recognizes) or end of text. Implemented by slicing
    /// between comment-line matches so boundaries stay explicit.
    fn raw_segments<F>(&self, text: &str, make: &mut F) -> Vec<Artifact>
    where
        F: FnMut(&str, &str) -> Artifact,
    {
        let comments: Vec<(usize, usize, String)> = self
            .path_comment
            .captures_iter(text)
            .map(|cap| {
                let whole = cap.get(0).expect("match group 0");
                (whole.start(), whole.end(), cap[1].trim().to_string())
            })
            .collect();

        let mut artifacts = Vec::new();
        for (i, (_, end, path)) in comments.iter().enumerate() {
            let until = comments
                .get(i + 1)
                .map(|(next_start, _, _)| *next_start)
                .unwrap_or(text.len());
            let body = text[*end..until].trim();
            if body.is_empty() {
                continue;
            }
            artifacts.push(make(path, body));
        }
        artifacts
    }

    /// Tier 3: the entire trimmed text is one path comment plus content
    fn single_document<F>(&self, text: &str, make: &mut F) -> Vec<Artifact>
    where
        F: FnMut(&str, &str) -> Artifact,
    {
        let trimmed = text.trim();
        let Some(cap) = self.path_comment.captures(trimmed) else {
            return Vec::new();
        };
        let whole = cap.get(0).expect("match group 0");
        if whole.start() != 0 {
            return Vec::new();
        }

        let path = cap[1].trim().to_string();
        let body = trimmed[whole.end()..].trim();
        if body.is_empty() {
            return Vec::new();
        }
        vec![make(&path, body)]
    }
}

fn alternation(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| regex::escape(p))
        .collect::<Vec<_>>()
        .join("|")
}

fn comment_open(styles: &[CommentStyle]) -> String {
    let alts: Vec<&str> = styles
        .iter()
        .map(|s| match s {
            CommentStyle::Line => "//",
            CommentStyle::Block => r"/\*",
            CommentStyle::Markup => "<!--",
        })
        .collect();
    format!("(?:{})", alts.join("|"))
}

fn comment_close(styles: &[CommentStyle]) -> String {
    let mut alts = Vec::new();
    for style in styles {
        match style {
            CommentStyle::Line => {}
            CommentStyle::Block => alts.push(r"\*/"),
            CommentStyle::Markup => alts.push("-->"),
        }
    }
    if alts.is_empty() {
        String::new()
    } else {
        format!(r"(?:[ \t]*(?:{}))?", alts.join("|"))
    }
}

/// One row of a kind-classification table: all markers present ⇒ label
///
/// Tables are evaluated top to bottom, first match wins, with an explicit
/// default supplied by the caller. Keeping the policy as data makes it
/// independently testable.
#[derive(Debug, Clone, Copy)]
pub struct KindRule {
    pub all_of: &'static [&'static str],
    pub label: &'static str,
}

/// Classify content against an ordered rule table
pub fn classify(content: &str, rules: &[KindRule], default: &str) -> String {
    for rule in rules {
        if rule.all_of.iter().all(|marker| content.contains(marker)) {
            return rule.label.to_string();
        }
    }
    default.to_string()
}

/// Normalize a declared path to its canonical relative form
///
/// Drops any prefix before the first recognized source-root marker, so
/// absolute or repo-qualified paths collapse to the relative form the target
/// ecosystem uses. Paths without a marker pass through unchanged.
pub fn clean_path(path: &str, root_markers: &[&str]) -> String {
    let path = path.trim();
    for marker in root_markers {
        if path.starts_with(marker) {
            return path.to_string();
        }
        // the marker must begin a path segment, not end one (mysrc/ stays)
        for (idx, _) in path.match_indices(marker) {
            if idx > 0 && path.as_bytes()[idx - 1] == b'/' {
                return path[idx..].to_string();
            }
        }
    }
    path.to_string()
}
