// Mon Oct 19 2026 - Alex

use crate::trace::StackFrame;
use crate::ui::style::{Style, StyledLine};
use crate::utils::string::StringUtils;

pub const TYPE_SEPARATOR: &str = "::";
const NOT_AVAILABLE: &str = "n/a";

/// Formats stack frames as single trace lines, with file paths shown relative
/// to a working-directory prefix.
#[derive(Debug, Clone, Default)]
pub struct FrameNormalizer {
    cwd_prefix: String,
}

impl FrameNormalizer {
    pub fn new(cwd_prefix: impl Into<String>) -> Self {
        Self {
            cwd_prefix: cwd_prefix.into(),
        }
    }

    pub fn split_type<'a>(&self, frame: &'a StackFrame) -> (&'a str, &'a str) {
        match frame.qualified_type {
            Some(ref qualified) => StringUtils::split_after_last(qualified, TYPE_SEPARATOR),
            None => ("", ""),
        }
    }

    pub fn location(&self, frame: &StackFrame) -> String {
        let file = match frame.file {
            Some(ref file) => StringUtils::strip_prefix_or_self(file, &self.cwd_prefix).into_owned(),
            None => NOT_AVAILABLE.to_string(),
        };

        match frame.line {
            Some(line) => format!("{}:{}", file, line),
            None => format!("{}:{}", file, NOT_AVAILABLE),
        }
    }

    pub fn signature(&self, frame: &StackFrame) -> String {
        let (_, class) = self.split_type(frame);
        format!("{}{}{}", class, frame.call_operator, frame.function_name)
    }

    pub fn normalize(&self, frame: &StackFrame) -> StyledLine {
        let (namespace, _) = self.split_type(frame);
        let signature = self.signature(frame);

        let mut line = StyledLine::plain("  ").push_plain(namespace);
        if !signature.is_empty() {
            line = line
                .push_styled(Style::Code, format!("{}()", signature))
                .push_plain(" ");
        }

        line.push_plain("at ")
            .push_styled(Style::Emphasis, self.location(frame))
    }
}
