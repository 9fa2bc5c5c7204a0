// Mon Oct 19 2026 - Alex

pub mod backtrace;
pub mod record;

pub use backtrace::{parse_backtrace, without_runtime_frames};
pub use record::{describe_type, ErrorRecord, Origin, StackFrame, Traceable};
