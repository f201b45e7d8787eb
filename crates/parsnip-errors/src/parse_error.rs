use std::fmt::Display;

use annotate_snippets::{Level, Renderer, Snippet};
use text_size::{TextRange, TextSize};

use crate::{Expected, FailInfo};

/// A failed top-level parse, detached from the input it was produced for.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    message: String,
    label: String,
    offset: TextSize,
    line: u32,
    column: u32,
    found: Option<char>,
    expected: Vec<Expected>,
}

impl ParseError {
    /// Snapshots `info`, listing at most `limit` alternatives in the message.
    pub fn new(info: &FailInfo<'_>, limit: Option<usize>) -> Self {
        let pos = info.pos();
        let found = pos.peek();
        let label = match found {
            Some(ch) => format!("found {ch:?}"),
            None => "found end of input".to_owned(),
        };

        Self {
            message: info.message(limit),
            label,
            offset: pos.offset(),
            line: pos.line(),
            column: pos.column(),
            found,
            expected: info.expected().cloned().collect(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn offset(&self) -> TextSize {
        self.offset
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    /// The element at the failure position, `None` at the end of input.
    pub fn found(&self) -> Option<char> {
        self.found
    }

    pub fn expected(&self) -> &[Expected] {
        &self.expected
    }

    /// The span of the offending element.
    pub fn range(&self) -> TextRange {
        let len = self.found.map_or(TextSize::new(0), TextSize::of);
        TextRange::at(self.offset, len)
    }

    pub fn render<'a>(
        &'a self,
        renderer: &'a Renderer,
        path: &'a str,
        text: &'a str,
    ) -> impl Display + 'a {
        let message = Level::Error.title(&self.message).snippet(
            Snippet::source(text)
                .origin(path)
                .annotation(Level::Error.span(self.range().into()).label(&self.label))
                .fold(true),
        );
        renderer.render(message)
    }
}

#[cfg(test)]
mod tests {
    use expect_test::expect;
    use parsnip_span::Location;

    use super::*;

    fn failed_at<'i>(text: &'i str, consumed: &str, expected: &[Expected]) -> FailInfo<'i> {
        let mut info = FailInfo::new(Location::start(text));
        let pos = Location::start(text).advance_str(consumed);
        for expected in expected {
            info.report(pos, expected.clone(), false);
        }
        info
    }

    #[test]
    fn snapshot_of_fail_info() {
        let info = failed_at("1 + x", "1 + ", &[Expected::class("[0-9]"), Expected::literal("(")]);
        let error = ParseError::new(&info, None);

        assert_eq!(error.found(), Some('x'));
        assert_eq!((error.line(), error.column()), (1, 5));
        assert_eq!(error.range(), TextRange::new(4.into(), 5.into()));
        assert_eq!(error.expected(), [Expected::class("[0-9]"), Expected::literal("(")]);
        expect![[r#"expected one of [0-9], "(" at line 1, column 5"#]].assert_eq(&error.to_string());
    }

    #[test]
    fn failure_at_end_of_input() {
        let info = failed_at("1 +", "1 +", &[Expected::class("[0-9]")]);
        let error = ParseError::new(&info, None);

        assert_eq!(error.found(), None);
        assert!(error.range().is_empty());

        let rendered = error.render(&Renderer::plain(), "expr.txt", "1 +").to_string();
        assert!(rendered.contains("expected [0-9] at line 1, column 4"), "{rendered}");
        assert!(rendered.contains("expr.txt"), "{rendered}");
        assert!(rendered.contains("found end of input"), "{rendered}");
    }

    #[test]
    fn render_points_at_the_offending_element() {
        let text = "a = 1\nb = ?\n";
        let info = failed_at(text, "a = 1\nb = ", &[Expected::user("an expression")]);
        let error = ParseError::new(&info, None);

        let rendered = error.render(&Renderer::plain(), "main.txt", text).to_string();
        assert!(rendered.contains("error: expected an expression at line 2, column 5"), "{rendered}");
        assert!(rendered.contains("b = ?"), "{rendered}");
        assert!(rendered.contains("found '?'"), "{rendered}");
    }

    #[test]
    fn is_a_std_error() {
        let info = failed_at("", "", &[Expected::Eof]);
        let error: Box<dyn std::error::Error> = Box::new(ParseError::new(&info, None));
        assert_eq!(error.to_string(), "expected end of input at line 1, column 1");
    }
}
