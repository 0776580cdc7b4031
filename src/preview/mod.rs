//! Terminal rendering of entry source code
//!
//! Highlights code for the `show` command using syntect when the
//! `syntax-highlighting` feature is enabled, picking the syntax from the
//! entry's canonical file path. Falls back to plain text for unknown
//! extensions or when the feature is off.

#[cfg(feature = "syntax-highlighting")]
use syntect::easy::HighlightLines;
#[cfg(feature = "syntax-highlighting")]
use syntect::highlighting::ThemeSet;
#[cfg(feature = "syntax-highlighting")]
use syntect::parsing::SyntaxSet;
#[cfg(feature = "syntax-highlighting")]
use syntect::util::as_24_bit_terminal_escaped;

/// Code renderer for terminal display
#[cfg(feature = "syntax-highlighting")]
pub struct CodeRenderer {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
}

#[cfg(feature = "syntax-highlighting")]
impl CodeRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
        }
    }

    /// Render code with 24-bit terminal colors
    ///
    /// The syntax is chosen by the file path's extension; unknown
    /// extensions render as plain text.
    #[must_use]
    pub fn render(&self, code: &str, file_path: &str) -> String {
        let extension = file_path.rsplit('.').next().unwrap_or_default();
        let syntax = self
            .syntax_set
            .find_syntax_by_extension(extension)
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let theme = &self.theme_set.themes["base16-ocean.dark"];
        let mut highlighter = HighlightLines::new(syntax, theme);

        let mut rendered = String::new();
        for line in code.lines() {
            match highlighter.highlight_line(line, &self.syntax_set) {
                Ok(ranges) => {
                    rendered.push_str(&as_24_bit_terminal_escaped(&ranges, false));
                    // Reset per line so a failed range never bleeds color
                    rendered.push_str("\x1b[0m\n");
                }
                Err(_) => {
                    rendered.push_str(line);
                    rendered.push('\n');
                }
            }
        }
        rendered
    }
}

#[cfg(feature = "syntax-highlighting")]
impl Default for CodeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Fallback renderer when syntax highlighting is disabled
#[cfg(not(feature = "syntax-highlighting"))]
#[derive(Default)]
pub struct CodeRenderer;

#[cfg(not(feature = "syntax-highlighting"))]
impl CodeRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn render(&self, code: &str, _file_path: &str) -> String {
        let mut rendered = code.to_string();
        if !rendered.ends_with('\n') {
            rendered.push('\n');
        }
        rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_keeps_every_line() {
        let renderer = CodeRenderer::new();
        let code = "const a = 1;\nconst b = 2;\nexport default a;";
        let rendered = renderer.render(code, "src/components/Demo.tsx");
        assert_eq!(rendered.lines().count(), 3);
    }

    #[test]
    fn test_render_unknown_extension_does_not_panic() {
        let renderer = CodeRenderer::new();
        let rendered = renderer.render("plain text", "notes.unknownext");
        assert!(rendered.contains("plain text"));
    }
}
