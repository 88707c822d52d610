//! Java artifact extractor
//!
//! Recognizes `java` fenced blocks and `// src/...java` path comments,
//! classifies content by Spring stereotype annotations.

use crate::artifact::Artifact;
use crate::extractors::common::{classify, clean_path, CommentStyle, ExtractionTiers, KindRule, TierSpec};
use crate::extractors::{Extractor, ExtractorError};
use tracing::{debug, info};

const PRODUCER: &str = "Java";

const TIER_SPEC: TierSpec = TierSpec {
    fence_tags: &["java"],
    suffixes: &["java"],
    path_prefix: "src/",
    comment_styles: &[CommentStyle::Line],
};

const KIND_RULES: &[KindRule] = &[
    KindRule {
        all_of: &["@RestController"],
        label: "Controller",
    },
    KindRule {
        all_of: &["@Controller"],
        label: "Controller",
    },
    KindRule {
        all_of: &["@Service"],
        label: "Service",
    },
    KindRule {
        all_of: &["@Repository"],
        label: "Repository",
    },
    KindRule {
        all_of: &["@Entity"],
        label: "Entity",
    },
    KindRule {
        all_of: &["@Configuration"],
        label: "Configuration",
    },
    KindRule {
        all_of: &["@Component", "Filter"],
        label: "Filter",
    },
    KindRule {
        all_of: &["interface "],
        label: "Interface",
    },
    KindRule {
        all_of: &["enum "],
        label: "Enum",
    },
];

pub struct JavaExtractor;

impl JavaExtractor {
    fn make_artifact(&self, path: &str, content: &str) -> Artifact {
        let path = clean_path(path, &["src/"]);
        if !is_valid_java(content) {
            return Artifact::invalid(
                path,
                content,
                PRODUCER,
                "Invalid Java content - missing package declaration or class definition",
            );
        }
        let kind = classify(content, KIND_RULES, "Class");
        Artifact::new(path, content, kind, PRODUCER)
    }
}

fn is_valid_java(content: &str) -> bool {
    content.contains("package ")
        || content.contains("import ")
        || content.contains("class ")
        || content.contains("interface ")
        || content.contains("enum ")
}

impl Extractor for JavaExtractor {
    fn kind_id(&self) -> &str {
        PRODUCER
    }

    fn implementation_name(&self) -> &str {
        "JavaExtractor"
    }

    fn supported_suffixes(&self) -> &[&str] {
        &[".java"]
    }

    fn can_handle(&self, text: &str) -> bool {
        text.contains("```java")
            || text.contains("// src/main/java/")
            || text.contains("package ")
            || text.contains("public class ")
            || text.contains("@SpringBootApplication")
            || text.contains("@RestController")
    }

    fn extract(&self, text: &str) -> Result<Vec<Artifact>, ExtractorError> {
        debug!(content_len = text.len(), "Scanning for Java artifacts");

        let tiers = ExtractionTiers::build(&TIER_SPEC)?;
        let artifacts = tiers.run(text, |path, content| self.make_artifact(path, content));

        info!(count = artifacts.len(), "Java extractor finished");
        Ok(artifacts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    const EXTRACTOR: JavaExtractor = JavaExtractor;

    #[test]
    fn test_identity() {
        assert_eq!(EXTRACTOR.kind_id(), "Java");
        assert_eq!(EXTRACTOR.supported_suffixes(), &[".java"]);
    }

    #[test]
    fn test_can_handle_fence() {
        assert!(EXTRACTOR.can_handle("```java\nclass A {}\n```"));
    }

    #[test]
    fn test_can_handle_markers() {
        assert!(EXTRACTOR.can_handle("package com.example;"));
        assert!(EXTRACTOR.can_handle("@RestController"));
        assert!(!EXTRACTOR.can_handle("body { color: red; }"));
    }

    #[test]
    fn test_fenced_extraction() {
        let text = "Here you go:\n```java\n// src/main/java/com/app/UserController.java\npackage com.app;\n\n@RestController\npublic class UserController {}\n```\n";
        let artifacts = EXTRACTOR.extract(text).unwrap();

        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].path, "src/main/java/com/app/UserController.java");
        assert_eq!(artifacts[0].name, "UserController.java");
        assert_eq!(artifacts[0].kind, "Controller");
        assert!(artifacts[0].valid);
    }

    #[test]
    fn test_raw_extraction_two_files() {
        let text = "// src/main/java/com/app/A.java\npackage com.app;\npublic class A {}\n\n// src/main/java/com/app/B.java\npackage com.app;\npublic class B {}\n";
        let artifacts = EXTRACTOR.extract(text).unwrap();

        assert_eq!(artifacts.len(), 2);
        assert_eq!(artifacts[0].name, "A.java");
        assert_eq!(artifacts[1].name, "B.java");
        assert!(artifacts[1].content.contains("class B"));
    }

    #[test]
    fn test_path_normalization() {
        let text = "```java\n// /work/project/src/main/java/App.java\npackage app;\npublic class App {}\n```";
        let artifacts = EXTRACTOR.extract(text).unwrap();

        assert_eq!(artifacts.len(), 1);
        assert_eq!(artifacts[0].path, "src/main/java/App.java");
    }

    #[test]
    fn test_invalid_content_captured() {
        let text = "// src/main/java/com/app/Notes.java\njust some prose with no declarations at all\n";
        let artifacts = EXTRACTOR.extract(text).unwrap();

        assert_eq!(artifacts.len(), 1);
        assert!(!artifacts[0].valid);
        assert!(artifacts[0].error.as_deref().unwrap().contains("Invalid Java content"));
        assert!(artifacts[0].content.contains("prose"));
    }

    #[parameterized(
        controller = { "@RestController\npublic class A {}", "Controller" },
        mvc_controller = { "@Controller\npublic class A {}", "Controller" },
        service = { "@Service\npublic class A {}", "Service" },
        repository = { "@Repository\npublic interface A {}", "Repository" },
        entity = { "@Entity\npublic class A {}", "Entity" },
        configuration = { "@Configuration\npublic class A {}", "Configuration" },
        filter = { "@Component\npublic class AuthFilter {}", "Filter" },
        interface_decl = { "public interface A {}", "Interface" },
        enum_decl = { "public enum Color {}", "Enum" },
        plain_class = { "package a;\npublic class A {}", "Class" },
    )]
    fn test_kind_classification(content: &str, expected: &str) {
        let text = format!("```java\n// src/A.java\n{}\n```", content);
        let artifacts = EXTRACTOR.extract(&text).unwrap();
        assert_eq!(artifacts[0].kind, expected);
    }

    #[test]
    fn test_no_match_yields_empty() {
        let artifacts = EXTRACTOR.extract("nothing java-like here").unwrap();
        assert!(artifacts.is_empty());
    }
}
