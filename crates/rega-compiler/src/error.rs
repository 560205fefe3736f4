//! Invalid-pattern errors.

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};

/// The pattern cannot be compiled.
///
/// Every variant is the same kind of failure; the variant only says which
/// character is at fault and where.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("invalid pattern: group opened at offset {offset} is never closed")]
    UnclosedGroup { offset: usize },

    #[error("invalid pattern: group closed at offset {offset} was never opened")]
    UnopenedGroup { offset: usize },

    #[error(
        "invalid pattern: `{anchor}` at offset {offset} is only allowed at the {} of the pattern",
        boundary(.anchor)
    )]
    MisplacedAnchor { anchor: char, offset: usize },
}

fn boundary(anchor: &char) -> &'static str {
    if *anchor == '^' { "start" } else { "end" }
}

impl PatternError {
    /// Byte offset of the offending character.
    pub fn offset(&self) -> usize {
        match *self {
            Self::UnclosedGroup { offset }
            | Self::UnopenedGroup { offset }
            | Self::MisplacedAnchor { offset, .. } => offset,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::UnclosedGroup { .. } => "unclosed group",
            Self::UnopenedGroup { .. } => "unmatched `)`",
            Self::MisplacedAnchor { .. } => "anchor inside the pattern",
        }
    }

    /// Render the error against the pattern it came from.
    pub fn render(&self, pattern: &str, colored: bool) -> String {
        let renderer = if colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let start = self.offset().min(pattern.len());
        let end = (start + 1).min(pattern.len());
        let message = self.to_string();

        let snippet = Snippet::source(pattern)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(start..end).label(self.label()));
        let report = vec![Level::ERROR.primary_title(&message).element(snippet)];

        renderer.render(&report).to_string()
    }
}
