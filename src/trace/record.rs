// Mon Oct 19 2026 - Alex

use super::backtrace::{parse_backtrace, without_runtime_frames};
use crate::error::{TraceError, TraceResult};
use serde::{Deserialize, Serialize};
use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;
use std::panic::Location;
use std::path::Path;

/// Read-only view of one link in an error chain.
pub trait Traceable {
    fn type_name(&self) -> &str;
    fn message(&self) -> &str;
    fn frames(&self) -> &[StackFrame];
    fn origin(&self) -> Option<&Origin>;
    fn cause(&self) -> Option<&dyn Traceable>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Origin {
    pub file: Option<String>,
    pub line: Option<u32>,
}

impl Origin {
    pub fn new(file: impl Into<String>, line: u32) -> Self {
        Self {
            file: Some(file.into()),
            line: Some(line),
        }
    }

    pub fn from_location(location: &Location<'_>) -> Self {
        Self::new(location.file(), location.line())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackFrame {
    pub qualified_type: Option<String>,
    pub call_operator: String,
    pub function_name: String,
    pub file: Option<String>,
    pub line: Option<u32>,
}

impl StackFrame {
    pub fn function(name: impl Into<String>) -> Self {
        Self {
            function_name: name.into(),
            ..Self::default()
        }
    }

    pub fn method(qualified_type: impl Into<String>, operator: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            qualified_type: Some(qualified_type.into()),
            call_operator: operator.into(),
            function_name: name.into(),
            ..Self::default()
        }
    }

    pub fn at(mut self, file: impl Into<String>, line: u32) -> Self {
        self.file = Some(file.into());
        self.line = Some(line);
        self
    }

    /// The throw-site frame: no function, location taken from the origin.
    pub fn synthetic(origin: Option<&Origin>) -> Self {
        Self {
            file: origin.and_then(|o| o.file.clone()),
            line: origin.and_then(|o| o.line),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorRecord {
    pub type_name: String,
    pub message: String,
    pub frames: Vec<StackFrame>,
    pub origin: Option<Origin>,
    pub cause: Option<Box<ErrorRecord>>,
}

impl ErrorRecord {
    pub fn new(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            message: message.into(),
            ..Self::default()
        }
    }

    pub fn with_frames(mut self, frames: Vec<StackFrame>) -> Self {
        self.frames = frames;
        self
    }

    pub fn with_frame(mut self, frame: StackFrame) -> Self {
        self.frames.push(frame);
        self
    }

    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = type_name.into();
        self
    }

    pub fn caused_by(mut self, cause: ErrorRecord) -> Self {
        self.cause = Some(Box::new(cause));
        self
    }

    /// Captures a Rust error together with its `source()` chain. The origin is
    /// the caller's location; frames come from a backtrace when capturing is
    /// enabled through `RUST_BACKTRACE`.
    #[track_caller]
    pub fn capture<E: Error + 'static>(error: &E) -> Self {
        let origin = Origin::from_location(Location::caller());
        let backtrace = Backtrace::capture();
        let frames = match backtrace.status() {
            BacktraceStatus::Captured => without_runtime_frames(parse_backtrace(&backtrace.to_string())),
            _ => Vec::new(),
        };

        let mut record = Self::new(std::any::type_name::<E>(), error.to_string())
            .with_frames(frames)
            .with_origin(origin);
        record.cause = error.source().map(|source| Box::new(Self::from_dyn(source)));
        record
    }

    pub fn from_dyn(error: &(dyn Error + 'static)) -> Self {
        let mut record = Self::new(describe_type(error), error.to_string());
        record.cause = error.source().map(|source| Box::new(Self::from_dyn(source)));
        record
    }

    pub fn from_json(text: &str) -> TraceResult<Self> {
        let record: Self = serde_json::from_str(text)?;
        record.validate()?;
        Ok(record)
    }

    pub fn load(path: &Path) -> TraceResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn validate(&self) -> TraceResult<()> {
        let mut current = Some(self);
        let mut depth = 0;
        while let Some(record) = current {
            if record.type_name.trim().is_empty() {
                return Err(TraceError::Record(format!(
                    "record at depth {} has an empty type_name",
                    depth
                )));
            }
            current = record.cause.as_deref();
            depth += 1;
        }
        Ok(())
    }

    pub fn chain_len(&self) -> usize {
        let mut len = 1;
        let mut current = self.cause.as_deref();
        while let Some(record) = current {
            len += 1;
            current = record.cause.as_deref();
        }
        len
    }
}

impl Traceable for ErrorRecord {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn message(&self) -> &str {
        &self.message
    }

    fn frames(&self) -> &[StackFrame] {
        &self.frames
    }

    fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    fn cause(&self) -> Option<&dyn Traceable> {
        self.cause.as_deref().map(|cause| cause as &dyn Traceable)
    }
}

/// Best-effort type name for a type-erased error: known types by downcast,
/// otherwise the leading identifier of its `Debug` output.
pub fn describe_type(error: &(dyn Error + 'static)) -> String {
    macro_rules! known {
        ($($ty:ty),* $(,)?) => {
            $(
                if error.is::<$ty>() {
                    return std::any::type_name::<$ty>().to_string();
                }
            )*
        };
    }

    known!(
        std::io::Error,
        serde_json::Error,
        TraceError,
        std::fmt::Error,
        std::num::ParseIntError,
        std::num::ParseFloatError,
        std::str::Utf8Error,
        std::string::FromUtf8Error,
    );

    let debug = format!("{:?}", error);
    let ident: String = debug
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect();

    if ident.is_empty() || ident.chars().next().map_or(true, |c| c.is_ascii_digit()) {
        "Error".to_string()
    } else {
        ident
    }
}
