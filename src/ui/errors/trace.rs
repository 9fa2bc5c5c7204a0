// Mon Oct 19 2026 - Alex

use super::display::ErrorBox;
use super::frame::FrameNormalizer;
use crate::error::TraceResult;
use crate::trace::{StackFrame, Traceable};
use crate::ui::canvas::Canvas;
use crate::ui::style::{Style, StyledLine};
use crate::utils::string::StringUtils;
use std::path::{Path, PathBuf};

pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Renders an error and, at the highest verbosity, its whole cause chain.
pub struct TraceRenderer<'a> {
    error: &'a dyn Traceable,
    working_dir: Option<PathBuf>,
    max_depth: usize,
}

impl<'a> TraceRenderer<'a> {
    pub fn new(error: &'a dyn Traceable) -> Self {
        Self {
            error,
            working_dir: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_working_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.working_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Upper bound on the number of causes shown after the top-level error.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn render(&self, canvas: &mut dyn Canvas) -> TraceResult<()> {
        let io = canvas.io();

        if !io.is_verbose() {
            let line = StyledLine::plain(format!("fatal: {}", self.error.message()));
            return io.error_line(&line.to_markup());
        }

        let very_verbose = io.is_very_verbose();
        let normalizer = FrameNormalizer::new(self.cwd_prefix());

        self.render_error(canvas, &normalizer, self.error)?;

        if !very_verbose {
            return Ok(());
        }

        // Compared as fat pointers: a cause stored inline at offset 0 shares
        // its parent's address but not its vtable.
        let mut visited: Vec<&dyn Traceable> = vec![self.error];

        let mut current = self.error.cause();
        let mut depth = 0;

        while let Some(cause) = current {
            if visited.iter().any(|seen| std::ptr::eq(*seen, cause)) {
                log::warn!("cause chain loops back to an earlier error, stopping");
                break;
            }
            visited.push(cause);
            if depth >= self.max_depth {
                log::debug!("cause chain truncated after {} causes", depth);
                break;
            }

            canvas.io().error_line("Caused by:")?;
            self.render_error(canvas, &normalizer, cause)?;

            depth += 1;
            current = cause.cause();
        }

        Ok(())
    }

    fn render_error(
        &self,
        canvas: &mut dyn Canvas,
        normalizer: &FrameNormalizer,
        error: &dyn Traceable,
    ) -> TraceResult<()> {
        log::debug!("rendering {} with {} frames", error.type_name(), error.frames().len());

        ErrorBox::new(error.type_name(), error.message(), canvas.width()).render(canvas)?;
        self.render_frames(canvas, normalizer, error)
    }

    fn render_frames(
        &self,
        canvas: &mut dyn Canvas,
        normalizer: &FrameNormalizer,
        error: &dyn Traceable,
    ) -> TraceResult<()> {
        let io = canvas.io();
        io.error_line(&StyledLine::styled(Style::Bold, "Exception trace:").to_markup())?;

        let top = StackFrame::synthetic(error.origin());
        for frame in std::iter::once(&top).chain(error.frames()) {
            let line = normalizer.normalize(frame);
            let formatted = io.format(&line.to_markup());
            io.error_line_raw(&formatted)?;
        }

        io.error_line("")?;
        io.error_line("")
    }

    fn cwd_prefix(&self) -> String {
        let dir = match self.working_dir {
            Some(ref dir) => Some(dir.clone()),
            None => std::env::current_dir().ok(),
        };

        match dir {
            Some(dir) => StringUtils::ensure_trailing_separator(&dir.to_string_lossy()),
            None => String::new(),
        }
    }
}
