// Mon Oct 19 2026 - Alex

use crate::utils::string::display_width;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Error,
    Code,
    Emphasis,
    Bold,
    Underline,
}

impl Style {
    pub fn tag(&self) -> &'static str {
        match self {
            Style::Error => "error",
            Style::Code => "tt",
            Style::Emphasis => "em",
            Style::Bold => "b",
            Style::Underline => "u",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "error" => Some(Style::Error),
            "tt" => Some(Style::Code),
            "em" => Some(Style::Emphasis),
            "b" => Some(Style::Bold),
            "u" => Some(Style::Underline),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Plain(String),
    Styled(Style, String),
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain(text) | Segment::Styled(_, text) => text,
        }
    }
}

/// A line made of plain and styled segments. Markup only exists once the line
/// is serialized for a sink.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledLine {
    segments: Vec<Segment>,
}

impl StyledLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new().push_plain(text)
    }

    pub fn styled(style: Style, text: impl Into<String>) -> Self {
        Self::new().push_styled(style, text)
    }

    pub fn push_plain(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        if !text.is_empty() {
            self.segments.push(Segment::Plain(text));
        }
        self
    }

    pub fn push_styled(mut self, style: Style, text: impl Into<String>) -> Self {
        self.segments.push(Segment::Styled(style, text.into()));
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn plain_text(&self) -> String {
        self.segments.iter().map(Segment::text).collect()
    }

    pub fn width(&self) -> usize {
        self.segments.iter().map(|s| display_width(s.text())).sum()
    }

    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Plain(text) => out.push_str(&escape(text)),
                Segment::Styled(style, text) => {
                    out.push_str(&format!("<{}>{}</{}>", style.tag(), escape(text), style.tag()));
                }
            }
        }
        out
    }
}

impl fmt::Display for StyledLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_markup())
    }
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '<' => out.push_str("\\<"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_roundtrip() {
        for style in [Style::Error, Style::Code, Style::Emphasis, Style::Bold, Style::Underline] {
            assert_eq!(Style::from_tag(style.tag()), Some(style));
        }
        assert_eq!(Style::from_tag("blink"), None);
    }

    #[test]
    fn test_to_markup() {
        let line = StyledLine::plain("  app::")
            .push_styled(Style::Code, "Loader::load()")
            .push_plain(" at ")
            .push_styled(Style::Emphasis, "src/loader.rs:7");

        assert_eq!(
            line.to_markup(),
            "  app::<tt>Loader::load()</tt> at <em>src/loader.rs:7</em>"
        );
        assert_eq!(line.plain_text(), "  app::Loader::load() at src/loader.rs:7");
    }

    #[test]
    fn test_markup_escapes_user_text() {
        let line = StyledLine::plain("Vec<u8> in C:\\tmp");
        assert_eq!(line.to_markup(), "Vec\\<u8> in C:\\\\tmp");
    }

    #[test]
    fn test_empty_plain_is_dropped() {
        assert!(StyledLine::plain("").segments().is_empty());
        assert_eq!(StyledLine::styled(Style::Error, "").to_markup(), "<error></error>");
    }
}
