// Mon Oct 19 2026 - Alex

use crate::error::TraceResult;
use crate::ui::canvas::Canvas;
use crate::ui::style::{Style, StyledLine};
use crate::utils::string::{display_width, pad_right, word_wrap};

const MARGIN: usize = 2;

/// The highlighted block showing an error's type and its wrapped message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBox {
    lines: Vec<String>,
    width: usize,
}

impl ErrorBox {
    pub fn new(type_name: &str, message: &str, canvas_width: usize) -> Self {
        let screen_width = canvas_width.saturating_sub(1);
        let wrap_width = screen_width.saturating_sub(2 * MARGIN);

        let mut lines = vec![format!("[{}]", type_name)];
        lines.extend(word_wrap(message, wrap_width));

        let width = lines.iter().map(|line| display_width(line)).max().unwrap_or(0);

        Self { lines, width }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Widest content line, without margins.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn outer_width(&self) -> usize {
        self.width + 2 * MARGIN
    }

    pub fn body_lines(&self) -> &[String] {
        &self.lines[1..]
    }

    pub fn render_lines(&self) -> Vec<StyledLine> {
        let margin = " ".repeat(MARGIN);
        let bar = StyledLine::styled(Style::Error, " ".repeat(self.outer_width()));

        let mut out = vec![StyledLine::new(), StyledLine::new(), bar.clone()];
        for line in &self.lines {
            let content = format!("{}{}{}", margin, pad_right(line, self.width), margin);
            out.push(StyledLine::styled(Style::Error, content));
        }
        out.push(bar);
        out.push(StyledLine::new());
        out.push(StyledLine::new());
        out
    }

    pub fn render(&self, canvas: &mut dyn Canvas) -> TraceResult<()> {
        // Boxes wider than the canvas are written anyway, never truncated.
        if self.outer_width() > canvas.width() {
            log::debug!(
                "error box is {} columns wide on a {} column canvas",
                self.outer_width(),
                canvas.width()
            );
        }

        let io = canvas.io();
        for line in self.render_lines() {
            io.error_line(&line.to_markup())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::canvas::TerminalCanvas;
    use crate::ui::io::{BufferedIo, Verbosity};

    #[test]
    fn test_box_layout() {
        let error_box = ErrorBox::new("RuntimeError", "disk full", 80);
        let mut canvas = TerminalCanvas::with_width(BufferedIo::new(Verbosity::Verbose), 80);
        error_box.render(&mut canvas).unwrap();

        let bar = format!("<error>{}</error>", " ".repeat(18));
        assert_eq!(
            canvas.inner().lines(),
            vec![
                "",
                "",
                bar.as_str(),
                "<error>  [RuntimeError]  </error>",
                "<error>  disk full       </error>",
                bar.as_str(),
                "",
                "",
            ]
        );
    }

    #[test]
    fn test_body_lines_follow_wrap_segments() {
        let message = "one two three four five six seven eight nine ten";
        let error_box = ErrorBox::new("E", message, 20);

        assert_eq!(error_box.body_lines(), &word_wrap(message, 15)[..]);
        assert_eq!(error_box.lines().len(), word_wrap(message, 15).len() + 1);
    }

    #[test]
    fn test_border_matches_widest_line() {
        let error_box = ErrorBox::new("SomeError", "x", 80);
        assert_eq!(error_box.width(), "[SomeError]".len());

        let lines = error_box.render_lines();
        assert_eq!(lines[2].width(), error_box.width() + 4);
        assert_eq!(lines[lines.len() - 3].width(), error_box.width() + 4);
    }

    #[test]
    fn test_oversized_box_is_not_truncated() {
        let long_word = "a".repeat(120);
        let error_box = ErrorBox::new("E", &long_word, 40);

        assert_eq!(error_box.width(), 120);
        let lines = error_box.render_lines();
        assert_eq!(lines[2].width(), 124);
        assert!(lines.iter().all(|l| l.segments().is_empty() || l.width() == 124));
    }

    #[test]
    fn test_empty_message_gives_one_blank_body_line() {
        let error_box = ErrorBox::new("E", "", 80);
        assert_eq!(error_box.body_lines(), &["".to_string()]);
    }

    #[test]
    fn test_multiline_message() {
        let error_box = ErrorBox::new("E", "first\nsecond line", 80);
        assert_eq!(error_box.body_lines(), &["first".to_string(), "second line".to_string()]);
        assert_eq!(error_box.width(), "second line".len());
    }

    #[test]
    fn test_type_name_markup_is_escaped() {
        let error_box = ErrorBox::new("Wrapper<Io>", "m", 80);
        let lines = error_box.render_lines();
        assert_eq!(lines[3].to_markup(), "<error>  [Wrapper\\<Io>]  </error>");
    }
}
