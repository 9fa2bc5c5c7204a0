// Mon Oct 19 2026 - Alex

use super::markup::MarkupFormatter;
use crate::error::TraceResult;
use crate::utils::string::word_wrap;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Verbosity {
    #[default]
    Quiet,
    Verbose,
    VeryVerbose,
}

impl Verbosity {
    pub fn from_occurrences(count: u8) -> Self {
        match count {
            0 => Verbosity::Quiet,
            1 => Verbosity::Verbose,
            _ => Verbosity::VeryVerbose,
        }
    }
}

/// Output sink for diagnostics. `error_line` interprets markup, `error_line_raw`
/// writes its text untouched, so callers pre-format it with `format`.
pub trait Io {
    fn verbosity(&self) -> Verbosity;

    fn is_verbose(&self) -> bool {
        self.verbosity() >= Verbosity::Verbose
    }

    fn is_very_verbose(&self) -> bool {
        self.verbosity() >= Verbosity::VeryVerbose
    }

    fn error_line(&mut self, text: &str) -> TraceResult<()>;

    fn error_line_raw(&mut self, text: &str) -> TraceResult<()>;

    fn format(&self, text: &str) -> String;
}

pub struct ConsoleIo<W: Write> {
    writer: W,
    formatter: MarkupFormatter,
    verbosity: Verbosity,
    wrap_width: Option<usize>,
}

impl ConsoleIo<io::Stderr> {
    pub fn stderr(verbosity: Verbosity) -> Self {
        let decorated = atty::is(atty::Stream::Stderr);
        Self::new(io::stderr(), verbosity).with_decorated(decorated)
    }
}

impl<W: Write> ConsoleIo<W> {
    pub fn new(writer: W, verbosity: Verbosity) -> Self {
        Self {
            writer,
            formatter: MarkupFormatter::plain(),
            verbosity,
            wrap_width: None,
        }
    }

    pub fn with_decorated(mut self, decorated: bool) -> Self {
        self.formatter = MarkupFormatter::new(decorated);
        self
    }

    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = Some(width);
        self
    }

    pub fn is_decorated(&self) -> bool {
        self.formatter.is_decorated()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_line(&mut self, text: &str) -> TraceResult<()> {
        writeln!(self.writer, "{}", text)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> Io for ConsoleIo<W> {
    fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn error_line(&mut self, text: &str) -> TraceResult<()> {
        let formatted = self.formatter.format(text);

        // Only markup-free text is wrapped; styled text is written as is.
        match self.wrap_width {
            Some(width) if formatted == text && !text.is_empty() => {
                for line in word_wrap(text, width) {
                    self.write_line(&line)?;
                }
                Ok(())
            }
            _ => self.write_line(&formatted),
        }
    }

    fn error_line_raw(&mut self, text: &str) -> TraceResult<()> {
        self.write_line(text)
    }

    fn format(&self, text: &str) -> String {
        self.formatter.format(text)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Formatted,
    Raw,
}

/// Records every line in memory. `format` leaves markup in place so captured
/// lines show exactly which segments were styled.
#[derive(Debug, Clone, Default)]
pub struct BufferedIo {
    verbosity: Verbosity,
    lines: Vec<(LineKind, String)>,
}

impl BufferedIo {
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> Vec<&str> {
        self.lines.iter().map(|(_, line)| line.as_str()).collect()
    }

    pub fn entries(&self) -> &[(LineKind, String)] {
        &self.lines
    }

    pub fn plain_lines(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|(_, line)| MarkupFormatter::strip(line))
            .collect()
    }

    pub fn output(&self) -> String {
        let mut out = String::new();
        for line in self.plain_lines() {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }
}

impl Io for BufferedIo {
    fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn error_line(&mut self, text: &str) -> TraceResult<()> {
        self.lines.push((LineKind::Formatted, text.to_string()));
        Ok(())
    }

    fn error_line_raw(&mut self, text: &str) -> TraceResult<()> {
        self.lines.push((LineKind::Raw, text.to_string()));
        Ok(())
    }

    fn format(&self, text: &str) -> String {
        text.to_string()
    }
}
