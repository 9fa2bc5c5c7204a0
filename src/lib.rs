// Mon Oct 19 2026 - Alex

pub mod config;
pub mod error;
pub mod trace;
pub mod ui;
pub mod utils;

pub use config::RenderConfig;
pub use error::{TraceError, TraceResult};
pub use trace::{ErrorRecord, Origin, StackFrame, Traceable};
pub use ui::{BufferedIo, Canvas, ConsoleIo, Io, TerminalCanvas, TraceRenderer, Verbosity};
