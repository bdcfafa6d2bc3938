//! Indentation configuration for generated Java sources.

use serde::Deserialize;

/// Indentation unit applied once per class nesting level.
///
/// Deserializes from `"tab"` or `{ spaces = 4 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Indent {
    /// Spaces with the specified width (2, 4 or 8).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 2-space indentation, matching what the resource compiler has always emitted.
    pub const JAVA: Self = Self::Spaces(2);

    /// 4-space indentation.
    pub const WIDE: Self = Self::Spaces(4);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(2) => "  ",
            Self::Spaces(4) => "    ",
            Self::Spaces(8) => "        ",
            // Fallback to 2 whitespaces
            Self::Spaces(_) => "  ",
            Self::Tab => "\t",
        }
    }

    /// Whether this indent renders as configured rather than through the fallback.
    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Spaces(2 | 4 | 8) | Self::Tab)
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVA
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
        assert_eq!(Indent::Spaces(8).as_str(), "        ");
        assert_eq!(Indent::Tab.as_str(), "\t");
    }

    #[test]
    fn test_unsupported_width_falls_back() {
        assert_eq!(Indent::Spaces(3).as_str(), "  ");
        assert!(!Indent::Spaces(3).is_supported());
        assert!(Indent::Tab.is_supported());
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::JAVA);
        assert_eq!(Indent::JAVA, Indent::Spaces(2));
    }
}
