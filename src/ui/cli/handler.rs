// Mon Oct 19 2026 - Alex

use super::args::{Args, Command, DemoArgs, RenderArgs};
use crate::config::RenderConfig;
use crate::error::{TraceError, TraceResult};
use crate::trace::{parse_backtrace, without_runtime_frames, ErrorRecord, Traceable};
use crate::ui::canvas::{Canvas, TerminalCanvas};
use crate::ui::errors::TraceRenderer;
use crate::ui::io::{ConsoleIo, Verbosity};
use crate::utils::logging::LoggingUtils;
use anyhow::Context;
use log::LevelFilter;
use std::io;
use std::path::Path;

pub struct CommandHandler {
    config: RenderConfig,
}

impl CommandHandler {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Command-line flags override values from the config file.
    pub fn from_args(args: &Args) -> TraceResult<Self> {
        let mut config = match args.config {
            Some(ref path) => RenderConfig::load(path)?,
            None => RenderConfig::new(),
        };

        if args.verbose > 0 {
            config.verbosity = Verbosity::from_occurrences(args.verbose);
        }
        if let Some(width) = args.width {
            config.width = Some(width);
        }
        if args.no_color {
            config.decorated = Some(false);
        }
        if let Some(ref level) = args.log_level {
            config.log_level = Some(level.clone());
        }

        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// `-v` only controls the trace; the log level comes from `--log-level`
    /// or the config file.
    pub fn log_level(&self) -> LevelFilter {
        LoggingUtils::resolve_level(self.config.log_level.as_deref())
    }

    pub fn setup_logging(&self) {
        LoggingUtils::init_logger(self.log_level());
    }

    pub fn execute(&self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::Render(render_args) => self.handle_render(render_args),
            Command::Demo(demo_args) => self.handle_demo(demo_args),
        }
    }

    fn handle_render(&self, args: RenderArgs) -> anyhow::Result<()> {
        let record = ErrorRecord::load(&args.input)
            .with_context(|| format!("failed to load error record from {}", args.input.display()))?;

        log::info!("loaded error chain of {} records", record.chain_len());
        self.render(&record, args.working_dir.as_deref())?;
        Ok(())
    }

    fn handle_demo(&self, args: DemoArgs) -> anyhow::Result<()> {
        args.validate().map_err(|e| anyhow::anyhow!(e))?;

        let record = demo_chain(&args.path, args.depth);
        self.render(&record, None)?;
        Ok(())
    }

    pub fn render(&self, error: &dyn Traceable, working_dir: Option<&Path>) -> TraceResult<()> {
        let mut io = ConsoleIo::stderr(self.config.verbosity);
        if let Some(decorated) = self.config.decorated {
            io = io.with_decorated(decorated);
        }
        // colored checks stdout, not stderr, unless told otherwise
        colored::control::set_override(io.is_decorated());

        let mut canvas = match self.config.width {
            Some(width) => TerminalCanvas::with_width(io, width),
            None => TerminalCanvas::new(io),
        };
        self.render_to(error, working_dir, &mut canvas)
    }

    pub fn render_to(
        &self,
        error: &dyn Traceable,
        working_dir: Option<&Path>,
        canvas: &mut dyn Canvas,
    ) -> TraceResult<()> {
        let mut renderer = TraceRenderer::new(error).with_max_depth(self.config.max_chain_depth);
        if let Some(dir) = working_dir.or(self.config.working_dir.as_deref()) {
            renderer = renderer.with_working_dir(dir);
        }
        renderer.render(canvas)
    }

    /// Renders a failed command through the trace renderer itself.
    pub fn report(&self, error: &anyhow::Error) -> TraceResult<()> {
        let record = record_from_anyhow(error);
        self.render(&record, None)
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

pub fn record_from_anyhow(error: &anyhow::Error) -> ErrorRecord {
    let type_name = if error.is::<TraceError>() {
        std::any::type_name::<TraceError>()
    } else if error.is::<io::Error>() {
        std::any::type_name::<io::Error>()
    } else {
        std::any::type_name::<anyhow::Error>()
    };

    let frames = without_runtime_frames(parse_backtrace(&error.backtrace().to_string()));
    let root: &(dyn std::error::Error + 'static) = error.as_ref();

    ErrorRecord::from_dyn(root)
        .with_type_name(type_name)
        .with_frames(frames)
}

pub fn demo_chain(path: &Path, depth: usize) -> ErrorRecord {
    let io_error = match std::fs::read_to_string(path) {
        Err(e) => e,
        Ok(_) => io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("{} exists, pick a missing path for the demo", path.display()),
        ),
    };

    let mut record = ErrorRecord::capture(&TraceError::from(io_error));
    for layer in 1..=depth {
        let wrapper = TraceError::Record(format!("layer {} could not recover", layer));
        record = ErrorRecord::capture(&wrapper).caused_by(record);
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::io::BufferedIo;
    use clap::Parser;

    #[test]
    fn test_flags_override_config() {
        let args = Args::try_parse_from(["console-trace", "-v", "--no-color", "--width", "60", "demo"]).unwrap();
        let handler = CommandHandler::from_args(&args).unwrap();

        assert_eq!(handler.config().verbosity, Verbosity::Verbose);
        assert_eq!(handler.config().width, Some(60));
        assert_eq!(handler.config().decorated, Some(false));
    }

    #[test]
    fn test_verbose_flags_leave_log_level_at_warn() {
        let args = Args::try_parse_from(["console-trace", "-vv", "demo"]).unwrap();
        let handler = CommandHandler::from_args(&args).unwrap();

        assert_eq!(handler.config().verbosity, Verbosity::VeryVerbose);
        assert_eq!(handler.log_level(), LevelFilter::Warn);
    }

    #[test]
    fn test_log_level_flag_raises_logging() {
        let args = Args::try_parse_from(["console-trace", "-vv", "--log-level", "debug", "demo"]).unwrap();
        let handler = CommandHandler::from_args(&args).unwrap();

        assert_eq!(handler.log_level(), LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_width_is_rejected() {
        let args = Args::try_parse_from(["console-trace", "--width", "3", "demo"]).unwrap();
        assert!(CommandHandler::from_args(&args).is_err());
    }

    #[test]
    fn test_demo_chain_wraps_io_error() {
        let record = demo_chain(Path::new("/definitely/not/here.json"), 2);

        // two wrappers, the TraceError::Io and the io::Error it came from
        assert_eq!(record.chain_len(), 4);
        assert!(record.type_name.ends_with("TraceError"));
        assert_eq!(record.message, "Invalid error record: layer 2 could not recover");

        let root = record.cause.as_deref().and_then(|c| c.cause.as_deref()).unwrap();
        assert!(root.message.starts_with("IO error: "));
        assert_eq!(root.cause.as_deref().unwrap().type_name, "std::io::error::Error");
    }

    #[test]
    fn test_record_from_anyhow_keeps_context_chain() {
        let error = anyhow::anyhow!("gone").context("failed to load error record");
        let record = record_from_anyhow(&error);

        assert_eq!(record.message, "failed to load error record");
        assert_eq!(record.type_name, "anyhow::Error");
        assert_eq!(record.cause.as_deref().unwrap().message, "gone");
    }

    #[test]
    fn test_record_from_anyhow_names_io_errors() {
        let error = anyhow::Error::new(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let record = record_from_anyhow(&error);

        assert_eq!(record.type_name, "std::io::error::Error");
        assert_eq!(record.message, "gone");
    }

    #[test]
    fn test_render_to_uses_configured_depth() {
        let handler = CommandHandler::new(
            RenderConfig::new()
                .with_verbosity(Verbosity::VeryVerbose)
                .with_max_chain_depth(1)
                .with_working_dir("/app".into()),
        );
        let record = ErrorRecord::new("A", "a")
            .caused_by(ErrorRecord::new("B", "b").caused_by(ErrorRecord::new("C", "c")));

        let mut canvas = TerminalCanvas::with_width(BufferedIo::new(Verbosity::VeryVerbose), 80);
        handler.render_to(&record, None, &mut canvas).unwrap();

        let output = canvas.inner().output();
        assert!(output.contains("[B]"));
        assert!(!output.contains("[C]"));
    }
}
