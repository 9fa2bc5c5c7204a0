// Mon Oct 19 2026 - Alex

pub mod canvas;
pub mod cli;
pub mod errors;
pub mod io;
pub mod markup;
pub mod style;

pub use canvas::{Canvas, TerminalCanvas};
pub use cli::{Args, Command, CommandHandler};
pub use errors::{ErrorBox, FrameNormalizer, TraceRenderer};
pub use io::{BufferedIo, ConsoleIo, Io, Verbosity};
pub use markup::MarkupFormatter;
pub use style::{Segment, Style, StyledLine};
