//! Class definitions: the containers of the member tree.

use javagen_core::JavaWriter;

use crate::{ClassMember, DocComment, WriteContext};

/// Modifier written between `public` and `final class`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClassQualifier {
    /// A top-level class.
    #[default]
    None,
    /// A `static` nested class.
    Static,
}

/// A `public final class` owning an ordered list of members.
///
/// Members render in insertion order, each on the next indentation level.
/// A class with no members renders nothing unless `create_if_empty` is set,
/// so optional nested classes disappear from the output when nothing was
/// added to them.
#[derive(Debug)]
pub struct ClassDefinition {
    name: String,
    qualifier: ClassQualifier,
    create_if_empty: bool,
    members: Vec<Box<dyn ClassMember>>,
    doc: DocComment,
}

impl ClassDefinition {
    pub fn new(name: impl Into<String>, qualifier: ClassQualifier, create_if_empty: bool) -> Self {
        Self {
            name: name.into(),
            qualifier,
            create_if_empty,
            members: Vec::new(),
            doc: DocComment::default(),
        }
    }

    /// Append a member. The class takes ownership.
    pub fn add_member(&mut self, member: impl ClassMember + 'static) -> &mut Self {
        self.members.push(Box::new(member));
        self
    }

    /// Add a member (consuming form).
    pub fn member(mut self, member: impl ClassMember + 'static) -> Self {
        self.add_member(member);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn qualifier(&self) -> ClassQualifier {
        self.qualifier
    }

    pub fn create_if_empty(&self) -> bool {
        self.create_if_empty
    }

    pub fn members(&self) -> &[Box<dyn ClassMember>] {
        &self.members
    }

    /// Mutable access to the doc comment.
    pub fn doc_mut(&mut self) -> &mut DocComment {
        &mut self.doc
    }
}

impl ClassMember for ClassDefinition {
    /// Only direct members are consulted, so a class whose members are all
    /// empty reports empty even though [`write_to`](Self::write_to) still
    /// emits it.
    fn is_empty(&self) -> bool {
        self.members.iter().all(|member| member.is_empty())
    }

    fn doc(&self) -> Option<&DocComment> {
        Some(&self.doc)
    }

    fn write_to(&self, prefix: &str, ctx: &WriteContext, out: &mut JavaWriter<'_>) {
        if self.members.is_empty() && !self.create_if_empty {
            tracing::trace!(class = %self.name, "skipping class without members");
            return;
        }

        self.write_doc(prefix, out);

        out.push_str(prefix).push_str("public ");
        if self.qualifier == ClassQualifier::Static {
            out.push_str("static ");
        }
        out.push_str("final class ")
            .push_str(&self.name)
            .push_str(" {")
            .push_newline();

        let child_prefix = ctx.child_prefix(prefix);
        for member in &self.members {
            member.write_to(&child_prefix, ctx, out);
            out.push_newline();
        }

        out.push_str(prefix).push_str("}");
    }
}
