//! Method definitions with literal bodies.

use javagen_core::JavaWriter;

use crate::{ClassMember, DocComment, WriteContext};

/// Body lines are indented by this fixed amount relative to the signature,
/// independent of the configured class indent.
const STATEMENT_INDENT: &str = "  ";

/// A method with a fixed signature and literal statement lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDefinition {
    signature: String,
    statements: Vec<String>,
    doc: DocComment,
}

impl MethodDefinition {
    /// Create a method, e.g. `public static void onResourcesLoaded(int p)`.
    pub fn new(signature: impl Into<String>) -> Self {
        Self {
            signature: signature.into(),
            statements: Vec::new(),
            doc: DocComment::default(),
        }
    }

    /// Append one line of code to the body.
    pub fn append_statement(&mut self, statement: impl Into<String>) -> &mut Self {
        self.statements.push(statement.into());
        self
    }

    /// Add a statement (consuming form).
    pub fn statement(mut self, statement: impl Into<String>) -> Self {
        self.append_statement(statement);
        self
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn statements(&self) -> &[String] {
        &self.statements
    }

    /// Mutable access to the doc comment.
    pub fn doc_mut(&mut self) -> &mut DocComment {
        &mut self.doc
    }
}

impl ClassMember for MethodDefinition {
    fn is_empty(&self) -> bool {
        false
    }

    fn doc(&self) -> Option<&DocComment> {
        Some(&self.doc)
    }

    fn write_to(&self, prefix: &str, _ctx: &WriteContext, out: &mut JavaWriter<'_>) {
        self.write_doc(prefix, out);
        out.push_str(prefix)
            .push_str(&self.signature)
            .push_str(" {")
            .push_newline();
        for statement in &self.statements {
            out.push_str(prefix)
                .push_str(STATEMENT_INDENT)
                .push_str(statement)
                .push_newline();
        }
        out.push_str(prefix).push_str("}");
    }
}
