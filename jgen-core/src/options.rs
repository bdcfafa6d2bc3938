//! Emission options, loadable from a `javagen.toml` table.

use std::{path::Path, str::FromStr};

use serde::Deserialize;
use toml::Spanned;

use crate::{Error, Indent, Result, error::SourceContext};

/// How a Java file is emitted.
///
/// ```toml
/// package = "com.example.lib"
/// final-fields = false
/// indent = { spaces = 4 }
/// banner = "/* Generated. */"
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaFileOptions {
    /// Package for the file, overriding the one it was created with.
    pub package: Option<String>,
    /// Emit constant fields as `static final`. Library resource classes
    /// turn this off so ids can be reassigned at link time.
    pub final_fields: bool,
    /// Indentation unit added per class nesting level.
    pub indent: Indent,
    /// Replacement for the generated-file warning comment.
    pub banner: Option<String>,
}

impl JavaFileOptions {
    /// Set the package the file is declared in.
    pub fn package(mut self, package: impl Into<String>) -> Self {
        self.package = Some(package.into());
        self
    }

    /// Set whether constant fields are `final`.
    pub fn final_fields(mut self, final_fields: bool) -> Self {
        self.final_fields = final_fields;
        self
    }

    /// Set the indentation unit.
    pub fn indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Replace the warning comment written at the top of the file.
    pub fn banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = Some(banner.into());
        self
    }

    /// Parse options from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_options(&content, &path.display().to_string())
    }

    /// Parse options from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_options(content, filename)
    }
}

impl Default for JavaFileOptions {
    fn default() -> Self {
        Self {
            package: None,
            final_fields: true,
            indent: Indent::default(),
            banner: None,
        }
    }
}

impl FromStr for JavaFileOptions {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_options(s, "javagen.toml")
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawOptions {
    #[serde(default)]
    package: Option<Spanned<String>>,
    #[serde(default = "default_final_fields")]
    final_fields: bool,
    #[serde(default)]
    indent: Option<Spanned<Indent>>,
    #[serde(default)]
    banner: Option<Spanned<String>>,
}

fn default_final_fields() -> bool {
    true
}

fn parse_options(content: &str, filename: &str) -> Result<JavaFileOptions> {
    let source_ctx = SourceContext::new(content, filename);
    let raw: RawOptions = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;

    let mut options = JavaFileOptions::default().final_fields(raw.final_fields);

    if let Some(package) = raw.package {
        let name = package.get_ref().trim();
        if name.is_empty() {
            return Err(
                source_ctx.validation_error_at("package must not be empty", package.span())
            );
        }
        options.package = Some(name.to_string());
    }

    if let Some(indent) = raw.indent {
        if !indent.get_ref().is_supported() {
            return Err(source_ctx.validation_error_at(
                "unsupported indent width, use 2, 4 or 8 spaces or \"tab\"",
                indent.span(),
            ));
        }
        options.indent = indent.into_inner();
    }

    if let Some(banner) = raw.banner {
        let text = banner.get_ref().trim();
        if !is_single_block_comment(text) {
            return Err(source_ctx.validation_error_at(
                "banner must be a single /* ... */ block comment",
                banner.span(),
            ));
        }
        options.banner = Some(text.to_string());
    }

    tracing::trace!(filename, ?options, "parsed javagen options");
    Ok(options)
}

/// `/* ... */` with no comment terminator before the final one.
fn is_single_block_comment(text: &str) -> bool {
    text.len() >= 4
        && text.starts_with("/*")
        && text.ends_with("*/")
        && !text[2..text.len() - 2].contains("*/")
}
