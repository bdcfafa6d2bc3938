//! The member capability shared by everything a generated class contains.

use std::fmt;

use javagen_core::{Indent, JavaFileOptions, JavaWriter};

use crate::DocComment;

/// Settings that stay constant for a whole render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteContext {
    /// Unit appended to the prefix for each nested class.
    pub indent: Indent,
    /// Whether constant fields carry the `final` modifier.
    pub final_fields: bool,
}

impl WriteContext {
    /// Create a context with the given indent and finality flag.
    pub fn new(indent: Indent, final_fields: bool) -> Self {
        Self {
            indent,
            final_fields,
        }
    }

    /// Prefix for content one level below `prefix`.
    pub fn child_prefix(&self, prefix: &str) -> String {
        let mut child = String::with_capacity(prefix.len() + 2);
        child.push_str(prefix);
        child.push_str(self.indent.as_str());
        child
    }
}

impl Default for WriteContext {
    fn default() -> Self {
        Self::new(Indent::JAVA, true)
    }
}

impl From<&JavaFileOptions> for WriteContext {
    fn from(options: &JavaFileOptions) -> Self {
        Self::new(options.indent, options.final_fields)
    }
}

/// Anything that can appear inside a generated class.
///
/// Implementors must keep [`is_empty`](ClassMember::is_empty) consistent
/// with [`write_to`](ClassMember::write_to): a member reporting empty can be
/// dropped by its container without changing the program.
pub trait ClassMember: fmt::Debug {
    /// Whether this member renders to no meaningful content.
    fn is_empty(&self) -> bool;

    /// Doc comment and annotations written before the member.
    fn doc(&self) -> Option<&DocComment> {
        None
    }

    /// Write this member with every line starting with `prefix`.
    ///
    /// No newline follows the member's last line; containers add separators.
    fn write_to(&self, prefix: &str, ctx: &WriteContext, out: &mut JavaWriter<'_>);

    /// Write the doc comment, if any.
    fn write_doc(&self, prefix: &str, out: &mut JavaWriter<'_>) {
        if let Some(doc) = self.doc() {
            doc.write_to(prefix, out);
        }
    }
}

/// Render a member into a string.
pub fn render_member(member: &dyn ClassMember, prefix: &str, ctx: &WriteContext) -> String {
    let mut buf: Vec<u8> = Vec::new();
    let mut writer = JavaWriter::new(&mut buf);
    member.write_to(prefix, ctx, &mut writer);
    drop(writer);
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Comment(&'static str);

    impl ClassMember for Comment {
        fn is_empty(&self) -> bool {
            self.0.is_empty()
        }

        fn write_to(&self, prefix: &str, _ctx: &WriteContext, out: &mut JavaWriter<'_>) {
            out.push_str(prefix).push_str("// ").push_str(self.0);
        }
    }

    #[test]
    fn test_child_prefix() {
        let ctx = WriteContext::new(Indent::Tab, true);
        assert_eq!(ctx.child_prefix("\t"), "\t\t");
        assert_eq!(WriteContext::default().child_prefix(""), "  ");
    }

    #[test]
    fn test_context_from_options() {
        let options = JavaFileOptions::default()
            .final_fields(false)
            .indent(Indent::WIDE);
        let ctx = WriteContext::from(&options);
        assert_eq!(ctx, WriteContext::new(Indent::WIDE, false));
    }

    #[test]
    fn test_render_custom_member() {
        let text = render_member(&Comment("hi"), "    ", &WriteContext::default());
        assert_eq!(text, "    // hi");
    }

    #[test]
    fn test_default_doc_is_none() {
        assert!(Comment("x").doc().is_none());
        assert!(Comment("").is_empty());
    }
}
