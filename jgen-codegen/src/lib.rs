//! Java class tree model and renderer for generated resource classes.
//!
//! Callers build a [`ClassDefinition`] tree by appending members in the
//! order they should appear, then hand the root to [`write_java_file`] or a
//! [`JavaFile`]. Rendering only borrows the tree, so the same tree can be
//! written any number of times.
//!
//! # Module Organization
//!
//! - [`member`] - The [`ClassMember`] capability and the render context
//! - [`class`] - [`ClassDefinition`], the member container
//! - [`method`] - [`MethodDefinition`] with literal statement lines
//! - [`field`] - Constant fields and arrays ([`IntMember`], [`ResourceArrayMember`], ...)
//! - [`doc`] - Javadoc comments and annotations
//! - [`java_file`] - File banner, package statement and the top-level driver
//!
//! # Example
//!
//! ```
//! use javagen_codegen::{ClassDefinition, ClassQualifier, IntMember, JavaFile, ResourceId};
//!
//! let mut strings = ClassDefinition::new("string", ClassQualifier::Static, false);
//! strings.add_member(IntMember::new("app_name", ResourceId(0x7f010000)));
//!
//! let mut r = ClassDefinition::new("R", ClassQualifier::None, true);
//! r.add_member(strings);
//!
//! let text = JavaFile::new("com.example", r).render();
//! assert!(text.ends_with(
//!     "public final class R {\n  public static final class string {\n    public static final int app_name=0x7f010000;\n  }\n}"
//! ));
//! ```

pub mod class;
pub mod doc;
pub mod field;
pub mod java_file;
pub mod member;
pub mod method;

pub use class::{ClassDefinition, ClassQualifier};
pub use doc::DocComment;
pub use field::{
    IntMember, JavaLiteral, PrimitiveArrayMember, PrimitiveMember, ResourceArrayMember,
    ResourceId, StringMember,
};
pub use javagen_core::{Indent, JavaFileOptions, JavaWriter};
pub use java_file::{JavaFile, WARNING_HEADER, write_java_file};
pub use member::{ClassMember, WriteContext, render_member};
pub use method::MethodDefinition;
