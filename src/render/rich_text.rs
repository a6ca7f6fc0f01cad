//! Rich-text collaborator used for the summary block.

/// Turns markdown source into sanitized renderable content.
///
/// The masthead never interprets markdown itself; hosts plug in their own
/// renderer.
pub trait RichTextRenderer {
    /// Renders `source` for display.
    fn render(&self, source: &str) -> String;
}

/// Renderer that hands the markdown source through with surrounding
/// whitespace removed.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughRenderer;

impl RichTextRenderer for PassthroughRenderer {
    fn render(&self, source: &str) -> String {
        source.trim().to_string()
    }
}

impl<F> RichTextRenderer for F
where
    F: Fn(&str) -> String,
{
    fn render(&self, source: &str) -> String {
        self(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthrough_trims() {
        assert_eq!(PassthroughRenderer.render("  **hi**\n"), "**hi**");
    }

    #[test]
    fn test_closure_renderer() {
        let upper = |source: &str| source.to_uppercase();
        assert_eq!(upper.render("abc"), "ABC");
    }
}
