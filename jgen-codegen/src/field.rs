//! Constant fields: the leaves of generated resource classes.

use std::fmt;

use javagen_core::JavaWriter;

use crate::{ClassMember, DocComment, WriteContext};

/// Array elements written per line.
const ELEMENTS_PER_LINE: usize = 4;

/// A packed resource identifier, written as `0xPPTTEEEE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ResourceId(pub u32);

impl ResourceId {
    /// Build an id from its package, type and entry parts.
    pub fn new(package: u8, type_id: u8, entry: u16) -> Self {
        Self(u32::from(package) << 24 | u32::from(type_id) << 16 | u32::from(entry))
    }

    pub fn package_id(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn type_id(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn entry_id(self) -> u16 {
        self.0 as u16
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

/// A value that can initialize a Java constant.
pub trait JavaLiteral: fmt::Debug {
    /// Java type keyword, e.g. `int`.
    const JAVA_TYPE: &'static str;

    /// Source text of the value.
    fn literal(&self) -> String;
}

impl JavaLiteral for ResourceId {
    const JAVA_TYPE: &'static str = "int";

    fn literal(&self) -> String {
        self.to_string()
    }
}

impl JavaLiteral for i32 {
    const JAVA_TYPE: &'static str = "int";

    fn literal(&self) -> String {
        self.to_string()
    }
}

impl JavaLiteral for bool {
    const JAVA_TYPE: &'static str = "boolean";

    fn literal(&self) -> String {
        self.to_string()
    }
}

impl JavaLiteral for String {
    const JAVA_TYPE: &'static str = "String";

    fn literal(&self) -> String {
        let mut quoted = String::with_capacity(self.len() + 2);
        quoted.push('"');
        for c in self.chars() {
            match c {
                '"' => quoted.push_str("\\\""),
                '\\' => quoted.push_str("\\\\"),
                '\n' => quoted.push_str("\\n"),
                '\r' => quoted.push_str("\\r"),
                '\t' => quoted.push_str("\\t"),
                c if c.is_control() => quoted.push_str(&format!("\\u{:04x}", u32::from(c))),
                _ => quoted.push(c),
            }
        }
        quoted.push('"');
        quoted
    }
}

/// `public static [final] <type> <name>=<value>;`
///
/// `final` follows the render pass's finality flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimitiveMember<T> {
    name: String,
    value: T,
    doc: DocComment,
}

/// A resource id constant, e.g. `R.string.app_name`.
pub type IntMember = PrimitiveMember<ResourceId>;

/// A string constant.
pub type StringMember = PrimitiveMember<String>;

impl<T: JavaLiteral> PrimitiveMember<T> {
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Self {
            name: name.into(),
            value,
            doc: DocComment::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Mutable access to the doc comment.
    pub fn doc_mut(&mut self) -> &mut DocComment {
        &mut self.doc
    }
}

impl<T: JavaLiteral> ClassMember for PrimitiveMember<T> {
    fn is_empty(&self) -> bool {
        false
    }

    fn doc(&self) -> Option<&DocComment> {
        Some(&self.doc)
    }

    fn write_to(&self, prefix: &str, ctx: &WriteContext, out: &mut JavaWriter<'_>) {
        self.write_doc(prefix, out);
        out.push_str(prefix).push_str("public static ");
        if ctx.final_fields {
            out.push_str("final ");
        }
        out.push_str(T::JAVA_TYPE)
            .push_str(" ")
            .push_str(&self.name)
            .push_str("=")
            .push_str(&self.value.literal())
            .push_str(";");
    }
}

/// `public static final <type>[] <name>={ ... };`, e.g. a styleable's
/// attribute table. Arrays are always `final`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimitiveArrayMember<T> {
    name: String,
    elements: Vec<T>,
    doc: DocComment,
}

/// A resource id table, e.g. `R.styleable.View`.
pub type ResourceArrayMember = PrimitiveArrayMember<ResourceId>;

impl<T: JavaLiteral> PrimitiveArrayMember<T> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            elements: Vec::new(),
            doc: DocComment::default(),
        }
    }

    /// Append an element.
    pub fn add_element(&mut self, element: T) -> &mut Self {
        self.elements.push(element);
        self
    }

    /// Add elements (consuming form).
    pub fn elements(mut self, elements: impl IntoIterator<Item = T>) -> Self {
        self.elements.extend(elements);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[T] {
        &self.elements
    }

    /// Mutable access to the doc comment.
    pub fn doc_mut(&mut self) -> &mut DocComment {
        &mut self.doc
    }
}

impl<T: JavaLiteral> ClassMember for PrimitiveArrayMember<T> {
    fn is_empty(&self) -> bool {
        false
    }

    fn doc(&self) -> Option<&DocComment> {
        Some(&self.doc)
    }

    fn write_to(&self, prefix: &str, ctx: &WriteContext, out: &mut JavaWriter<'_>) {
        self.write_doc(prefix, out);
        out.push_str(prefix)
            .push_str("public static final ")
            .push_str(T::JAVA_TYPE)
            .push_str("[] ")
            .push_str(&self.name)
            .push_str("={");

        let unit = ctx.indent.as_str();
        for (i, element) in self.elements.iter().enumerate() {
            if i % ELEMENTS_PER_LINE == 0 {
                if i > 0 {
                    out.push_str(",");
                }
                out.push_newline().push_str(prefix).push_str(unit).push_str(unit);
            } else {
                out.push_str(", ");
            }
            out.push_str(&element.literal());
        }

        out.push_newline().push_str(prefix).push_str(unit).push_str("};");
    }
}
