//! Top-level emission of a complete `.java` file.

use std::io::Write;

use javagen_core::{Error, JavaFileOptions, JavaWriter, Result};

use crate::{ClassDefinition, ClassMember, WriteContext};

/// Comment written at the top of every generated file.
pub const WARNING_HEADER: &str = "/* AUTO-GENERATED FILE. DO NOT MODIFY.\n\
                                   \x20*\n\
                                   \x20* This class was automatically generated by the\n\
                                   \x20* aapt tool from the resource data it found. It\n\
                                   \x20* should not be modified by hand.\n\
                                   \x20*/";

/// Write `root` as a Java file in `package` with the default indentation.
///
/// Returns whether every write to `out` succeeded. `out` is neither flushed
/// nor closed.
pub fn write_java_file(
    root: &ClassDefinition,
    package: &str,
    final_fields: bool,
    out: &mut dyn Write,
) -> bool {
    let ctx = WriteContext {
        final_fields,
        ..WriteContext::default()
    };
    let mut writer = JavaWriter::new(out);
    write_contents(&mut writer, WARNING_HEADER, package, root, &ctx);
    writer.is_healthy()
}

fn write_contents(
    out: &mut JavaWriter<'_>,
    banner: &str,
    package: &str,
    root: &ClassDefinition,
    ctx: &WriteContext,
) {
    tracing::debug!(package, class = root.name(), "writing java file");
    out.push_str(banner).push_newline().push_newline();
    out.push_str("package ")
        .push_str(package)
        .push_str(";")
        .push_newline()
        .push_newline();
    root.write_to("", ctx, out);
}

/// A root class bound to its package and emission options.
#[derive(Debug)]
pub struct JavaFile {
    package: String,
    root: ClassDefinition,
    options: JavaFileOptions,
}

impl JavaFile {
    /// Create a file with default options.
    pub fn new(package: impl Into<String>, root: ClassDefinition) -> Self {
        Self {
            package: package.into(),
            root,
            options: JavaFileOptions::default(),
        }
    }

    /// Replace the emission options. A package set in the options replaces
    /// the one the file was created with.
    pub fn with_options(mut self, options: JavaFileOptions) -> Self {
        if let Some(package) = &options.package {
            self.package.clone_from(package);
        }
        self.options = options;
        self
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn root(&self) -> &ClassDefinition {
        &self.root
    }

    /// Mutable access to the root class for further construction.
    pub fn root_mut(&mut self) -> &mut ClassDefinition {
        &mut self.root
    }

    pub fn options(&self) -> &JavaFileOptions {
        &self.options
    }

    /// Write the file to `out`, surfacing the first sink failure.
    pub fn write_to(&self, mut out: impl Write) -> Result<()> {
        let mut writer = JavaWriter::new(&mut out);
        self.write_with(&mut writer);
        writer.finish().map_err(Error::write)
    }

    /// Render the file into a string.
    pub fn render(&self) -> String {
        let mut buf: Vec<u8> = Vec::new();
        let mut writer = JavaWriter::new(&mut buf);
        self.write_with(&mut writer);
        drop(writer);
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn write_with(&self, writer: &mut JavaWriter<'_>) {
        let banner = self.options.banner.as_deref().unwrap_or(WARNING_HEADER);
        let ctx = WriteContext::from(&self.options);
        write_contents(writer, banner, &self.package, &self.root, &ctx);
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use javagen_core::Indent;

    use super::*;
    use crate::{ClassQualifier, IntMember, MethodDefinition, ResourceId};

    /// Accepts `budget` bytes, then fails every write.
    struct Budget(usize);

    impl Write for Budget {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if buf.len() > self.0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
            }
            self.0 -= buf.len();
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn foo() -> ClassDefinition {
        ClassDefinition::new("Foo", ClassQualifier::None, true).member(
            MethodDefinition::new("public static final int bar()").statement("return 1;"),
        )
    }

    const FOO_JAVA: &str = "/* AUTO-GENERATED FILE. DO NOT MODIFY.\n\
                            \x20*\n\
                            \x20* This class was automatically generated by the\n\
                            \x20* aapt tool from the resource data it found. It\n\
                            \x20* should not be modified by hand.\n\
                            \x20*/\n\
                            \n\
                            package com.example;\n\
                            \n\
                            public final class Foo {\n\
                            \x20 public static final int bar() {\n\
                            \x20   return 1;\n\
                            \x20 }\n\
                            }";

    #[test]
    fn test_write_java_file() {
        let mut buf: Vec<u8> = Vec::new();
        assert!(write_java_file(&foo(), "com.example", true, &mut buf));
        assert_eq!(String::from_utf8(buf).unwrap(), FOO_JAVA);
    }

    #[test]
    fn test_java_file_render_matches_driver() {
        let file = JavaFile::new("com.example", foo());
        assert_eq!(file.render(), FOO_JAVA);
        assert_eq!(file.render(), file.render());
    }

    #[test]
    fn test_pruned_root_keeps_banner_and_package() {
        let root = ClassDefinition::new("R", ClassQualifier::None, false);
        let mut buf: Vec<u8> = Vec::new();
        assert!(write_java_file(&root, "a.b", true, &mut buf));
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("/* AUTO-GENERATED FILE. DO NOT MODIFY.\n"));
        assert!(text.ends_with("*/\n\npackage a.b;\n\n"));
    }

    #[test]
    fn test_failure_after_successful_writes() {
        // enough for the banner, not for the package line
        let mut sink = Budget(WARNING_HEADER.len() + 2);
        assert!(!write_java_file(&foo(), "com.example", true, &mut sink));
    }

    #[test]
    fn test_write_to_surfaces_error() {
        let file = JavaFile::new("com.example", foo());
        let err = file.write_to(Budget(10)).unwrap_err();
        match *err {
            Error::Write { source } => assert_eq!(source.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("Expected Write variant, got {other:?}"),
        }
    }

    #[test]
    fn test_options_flow_into_render() {
        let root = ClassDefinition::new("R", ClassQualifier::None, false).member(
            ClassDefinition::new("id", ClassQualifier::Static, false)
                .member(IntMember::new("title", ResourceId(0x7f050000))),
        );
        let file = JavaFile::new("com.lib", root).with_options(
            JavaFileOptions::default()
                .final_fields(false)
                .indent(Indent::Tab)
                .banner("/* lib */"),
        );

        assert_eq!(
            file.render(),
            "/* lib */\n\npackage com.lib;\n\n\
             public final class R {\n\
             \tpublic static final class id {\n\
             \t\tpublic static int title=0x7f050000;\n\
             \t}\n\
             }"
        );
    }

    #[test]
    fn test_options_package_replaces_file_package() {
        let options: JavaFileOptions = "package = \"com.example.lib\"".parse().unwrap();
        let file = JavaFile::new("com.example", foo()).with_options(options);

        assert_eq!(file.package(), "com.example.lib");
        assert!(file.render().contains("\npackage com.example.lib;\n\n"));

        let kept = JavaFile::new("com.example", foo()).with_options(JavaFileOptions::default());
        assert_eq!(kept.package(), "com.example");
    }

    #[test]
    fn test_accessors() {
        let mut file = JavaFile::new("com.example", foo());
        file.root_mut().add_member(MethodDefinition::new("public static void init()"));
        assert_eq!(file.package(), "com.example");
        assert_eq!(file.root().members().len(), 2);
        assert!(file.options().final_fields);
    }
}
