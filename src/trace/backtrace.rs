// Mon Oct 19 2026 - Alex

use super::record::StackFrame;
use crate::utils::string::StringUtils;
use once_cell::sync::Lazy;
use regex::Regex;

const PATH_SEPARATOR: &str = "::";

static SYMBOL_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*\d+:\s+(.+?)\s*$").expect("symbol line pattern"));
static LOCATION_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*at\s+(.+?)\s*$").expect("location line pattern"));
static HASH_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"::h[0-9a-f]{16}$").expect("hash suffix pattern"));

const RUNTIME_PREFIXES: &[&str] = &["std::", "core::", "alloc::", "__rust", "rust_begin_unwind"];
const POINTER_PREFIXES: &[&str] = &["<", "&", "mut ", "dyn "];

/// Parses the text form of a `std::backtrace::Backtrace` into frames, innermost first.
pub fn parse_backtrace(text: &str) -> Vec<StackFrame> {
    let mut frames: Vec<StackFrame> = Vec::new();

    for line in text.lines() {
        if let Some(caps) = SYMBOL_LINE.captures(line) {
            frames.push(frame_from_symbol(&caps[1]));
        } else if let Some(caps) = LOCATION_LINE.captures(line) {
            if let Some(frame) = frames.last_mut() {
                if frame.file.is_none() {
                    let (file, line) = parse_location(&caps[1]);
                    frame.file = Some(file);
                    frame.line = line;
                }
            }
        }
    }

    frames
}

pub fn frame_from_symbol(symbol: &str) -> StackFrame {
    let symbol = HASH_SUFFIX.replace(symbol, "");

    match StringUtils::rfind_top_level(&symbol, PATH_SEPARATOR) {
        Some(pos) if pos > 0 => StackFrame::method(
            &symbol[..pos],
            PATH_SEPARATOR,
            &symbol[pos + PATH_SEPARATOR.len()..],
        ),
        _ => StackFrame::function(symbol.to_string()),
    }
}

/// Splits `file:line:column` (column optional). Anything unparsable is kept as
/// the file with no line.
pub fn parse_location(location: &str) -> (String, Option<u32>) {
    let mut parts = location.rsplitn(3, ':');
    let last = parts.next();
    let middle = parts.next();
    let rest = parts.next();

    match (rest, middle, last) {
        (Some(file), Some(line), Some(col)) if is_number(line) && is_number(col) => {
            (file.to_string(), line.parse().ok())
        }
        (_, Some(_), Some(line)) if is_number(line) => {
            let file = &location[..location.len() - line.len() - 1];
            (file.to_string(), line.parse().ok())
        }
        _ => (location.to_string(), None),
    }
}

fn is_number(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

pub fn is_runtime_frame(frame: &StackFrame) -> bool {
    let symbol = match frame.qualified_type {
        Some(ref ty) => ty.as_str(),
        None => frame.function_name.as_str(),
    };
    let symbol = strip_pointer_prefixes(symbol);
    RUNTIME_PREFIXES.iter().any(|prefix| symbol.starts_with(prefix))
}

/// `<&mut dyn core::ops::Fn<()> as ...>` is reduced to `core::ops::Fn<()> as ...>`.
fn strip_pointer_prefixes(mut symbol: &str) -> &str {
    while let Some(rest) = POINTER_PREFIXES
        .iter()
        .find_map(|prefix| symbol.strip_prefix(prefix))
    {
        symbol = rest;
    }
    symbol
}

pub fn without_runtime_frames(frames: Vec<StackFrame>) -> Vec<StackFrame> {
    frames.into_iter().filter(|frame| !is_runtime_frame(frame)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "   0: std::backtrace_rs::backtrace::libunwind::trace
             at /rustc/abc/library/std/src/../../backtrace/src/backtrace/libunwind.rs:116:5
   1: console_trace::trace::record::ErrorRecord::capture::h0123456789abcdef
             at ./src/trace/record.rs:128:25
   2: <app::Loader as app::Load>::load
             at ./src/loader.rs:7:9
   3: main
   4: __rust_begin_short_backtrace
";

    #[test]
    fn test_parse_backtrace_frames() {
        let frames = parse_backtrace(SAMPLE);
        assert_eq!(frames.len(), 5);

        assert_eq!(
            frames[1],
            StackFrame::method("console_trace::trace::record::ErrorRecord", "::", "capture")
                .at("./src/trace/record.rs", 128)
        );
        assert_eq!(
            frames[2],
            StackFrame::method("<app::Loader as app::Load>", "::", "load").at("./src/loader.rs", 7)
        );
        assert_eq!(frames[3], StackFrame::function("main"));
    }

    #[test]
    fn test_without_runtime_frames() {
        let frames = without_runtime_frames(parse_backtrace(SAMPLE));
        let names: Vec<&str> = frames.iter().map(|f| f.function_name.as_str()).collect();
        assert_eq!(names, vec!["capture", "load", "main"]);
    }

    #[test]
    fn test_runtime_frames_behind_references() {
        let text = "   0: <&dyn core::ops::function::Fn<()> + core::marker::Sync as core::ops::function::FnOnce<()>>::call_once
   1: <&mut dyn core::ops::function::FnMut<()> as core::ops::function::FnOnce<()>>::call_once
   2: <&app::Config as core::fmt::Display>::fmt
   3: app::run
";
        let frames = without_runtime_frames(parse_backtrace(text));
        let names: Vec<&str> = frames.iter().map(|f| f.function_name.as_str()).collect();
        assert_eq!(names, vec!["fmt", "run"]);
    }

    #[test]
    fn test_parse_location_variants() {
        assert_eq!(parse_location("src/main.rs:10:5"), ("src/main.rs".to_string(), Some(10)));
        assert_eq!(parse_location("src/main.rs:10"), ("src/main.rs".to_string(), Some(10)));
        assert_eq!(parse_location("C:\\app\\main.rs:3:1"), ("C:\\app\\main.rs".to_string(), Some(3)));
        assert_eq!(parse_location("unknown"), ("unknown".to_string(), None));
    }

    #[test]
    fn test_frame_from_symbol_without_path() {
        assert_eq!(frame_from_symbol("main"), StackFrame::function("main"));
    }
}
