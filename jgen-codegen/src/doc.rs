//! Javadoc comments and annotations attached to members.

use javagen_core::JavaWriter;

const SYSTEM_API_TAG: &str = "@SystemApi";
const DEPRECATED_TAG: &str = "@deprecated";

/// Doc comment and annotations written before a member.
///
/// Comment text is collected line by line. Two tags are recognized while
/// collecting: `@deprecated` stays in the comment and adds `@Deprecated`,
/// `@SystemApi` is removed from the comment and adds
/// `@android.annotation.SystemApi`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocComment {
    lines: Vec<String>,
    deprecated: bool,
    system_api: bool,
    annotations: Vec<String>,
}

impl DocComment {
    /// Create an empty doc comment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append comment text, one doc line per input line.
    pub fn append_comment(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            let line = line.trim();
            if line.contains(SYSTEM_API_TAG) {
                self.system_api = true;
                continue;
            }
            if line.contains(DEPRECATED_TAG) {
                self.deprecated = true;
            }
            self.lines.push(line.to_string());
        }
        self
    }

    /// Add an annotation, given without the leading `@`.
    pub fn add_annotation(&mut self, annotation: impl Into<String>) -> &mut Self {
        self.annotations.push(annotation.into());
        self
    }

    /// Comment lines collected so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated
    }

    pub fn is_system_api(&self) -> bool {
        self.system_api
    }

    /// Whether writing this doc produces no output.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && !self.deprecated && !self.system_api && self.annotations.is_empty()
    }

    /// Write the comment block and annotations, each line newline-terminated.
    pub fn write_to(&self, prefix: &str, out: &mut JavaWriter<'_>) {
        if !self.lines.is_empty() {
            out.push_line(prefix, "/**");
            for line in &self.lines {
                if line.is_empty() {
                    out.push_line(prefix, " *");
                } else {
                    out.push_str(prefix).push_str(" * ").push_str(line).push_newline();
                }
            }
            out.push_line(prefix, " */");
        }

        if self.deprecated {
            out.push_line(prefix, "@Deprecated");
        }
        if self.system_api {
            out.push_line(prefix, "@android.annotation.SystemApi");
        }
        for annotation in &self.annotations {
            out.push_str(prefix).push_str("@").push_str(annotation).push_newline();
        }
    }
}
