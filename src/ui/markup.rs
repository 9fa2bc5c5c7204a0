// Mon Oct 19 2026 - Alex

use super::style::Style;
use colored::Colorize;
use once_cell::sync::Lazy;
use regex::Regex;

static TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<(/?)([a-z][a-z0-9_-]*)>").expect("markup tag pattern"));

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Text(String),
    Open(Style),
    Close(Style),
}

/// Turns `<tag>..</tag>` markup into ANSI sequences, or strips it when the
/// output is not decorated.
#[derive(Debug, Clone, Copy)]
pub struct MarkupFormatter {
    decorated: bool,
}

impl MarkupFormatter {
    pub fn new(decorated: bool) -> Self {
        Self { decorated }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn is_decorated(&self) -> bool {
        self.decorated
    }

    pub fn format(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut active: Vec<Style> = Vec::new();

        for token in tokenize(text) {
            match token {
                Token::Open(style) => active.push(style),
                Token::Close(style) => {
                    if let Some(pos) = active.iter().rposition(|s| *s == style) {
                        active.remove(pos);
                    }
                }
                Token::Text(chunk) => {
                    if self.decorated {
                        out.push_str(&paint(&chunk, &active));
                    } else {
                        out.push_str(&chunk);
                    }
                }
            }
        }

        out
    }

    pub fn strip(text: &str) -> String {
        Self::plain().format(text)
    }
}

impl Default for MarkupFormatter {
    fn default() -> Self {
        Self::plain()
    }
}

fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut buffer = String::new();
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        let Some(c) = rest.chars().next() else {
            break;
        };

        if c == '\\' {
            match rest[1..].chars().next() {
                Some(next) if next == '\\' || next == '<' => {
                    buffer.push(next);
                    pos += 2;
                }
                _ => {
                    buffer.push(c);
                    pos += 1;
                }
            }
            continue;
        }

        if c == '<' {
            if let Some(caps) = TAG.captures(rest) {
                if let Some(style) = Style::from_tag(&caps[2]) {
                    if !buffer.is_empty() {
                        tokens.push(Token::Text(std::mem::take(&mut buffer)));
                    }
                    if caps[1].is_empty() {
                        tokens.push(Token::Open(style));
                    } else {
                        tokens.push(Token::Close(style));
                    }
                    pos += caps[0].len();
                    continue;
                }
            }
        }

        buffer.push(c);
        pos += c.len_utf8();
    }

    if !buffer.is_empty() {
        tokens.push(Token::Text(buffer));
    }

    tokens
}

fn paint(text: &str, styles: &[Style]) -> String {
    if styles.is_empty() {
        return text.to_string();
    }

    let mut painted = text.normal();
    for style in styles {
        painted = match style {
            Style::Error => painted.white().on_red(),
            Style::Code => painted.cyan(),
            Style::Emphasis => painted.italic(),
            Style::Bold => painted.bold(),
            Style::Underline => painted.underline(),
        };
    }
    painted.to_string()
}
