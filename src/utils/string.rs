// Mon Oct 19 2026 - Alex

use std::borrow::Cow;
use unicode_width::UnicodeWidthStr;

pub struct StringUtils;

impl StringUtils {
    pub fn display_width(s: &str) -> usize {
        UnicodeWidthStr::width(s)
    }

    pub fn pad_right(s: &str, width: usize, pad_char: char) -> String {
        let current = Self::display_width(s);
        if current >= width {
            s.to_string()
        } else {
            let padding = pad_char.to_string().repeat(width - current);
            format!("{}{}", s, padding)
        }
    }

    /// Breaks `text` at spaces so no line exceeds `width` columns, then splits on
    /// every newline. Words longer than `width` are never cut; they end up on a line
    /// of their own and break at the next space after them.
    pub fn word_wrap(text: &str, width: usize) -> Vec<String> {
        let mut chars: Vec<char> = text.chars().collect();
        let mut last_start = 0usize;
        let mut last_space = 0usize;

        for current in 0..chars.len() {
            if chars[current] == '\n' {
                last_start = current + 1;
                last_space = current + 1;
            } else if chars[current] == ' ' {
                if current - last_start >= width {
                    chars[current] = '\n';
                    last_start = current + 1;
                }
                last_space = current;
            } else if current - last_start >= width && last_start != last_space {
                chars[last_space] = '\n';
                last_start = last_space + 1;
            }
        }

        chars
            .into_iter()
            .collect::<String>()
            .split('\n')
            .map(|line| line.to_string())
            .collect()
    }

    /// Splits at the last top-level `separator`, keeping the separator on the
    /// left half. Without a separator the left half is empty.
    pub fn split_after_last<'a>(s: &'a str, separator: &str) -> (&'a str, &'a str) {
        match Self::rfind_top_level(s, separator) {
            Some(pos) => s.split_at(pos + separator.len()),
            None => ("", s),
        }
    }

    pub fn strip_prefix_or_self<'a>(s: &'a str, prefix: &str) -> Cow<'a, str> {
        if prefix.is_empty() {
            return Cow::Borrowed(s);
        }
        match s.strip_prefix(prefix) {
            Some(rest) => Cow::Borrowed(rest),
            None => Cow::Borrowed(s),
        }
    }

    pub fn ensure_trailing_separator(path: &str) -> String {
        let separator = std::path::MAIN_SEPARATOR;
        if path.is_empty() || path.ends_with(separator) {
            path.to_string()
        } else {
            format!("{}{}", path, separator)
        }
    }

    /// Finds the last `separator` that is not nested inside `<...>`.
    pub fn rfind_top_level(s: &str, separator: &str) -> Option<usize> {
        let bytes = s.as_bytes();
        let sep = separator.as_bytes();
        if sep.is_empty() || bytes.len() < sep.len() {
            return None;
        }

        let mut depth = 0i32;
        let mut pos = bytes.len();
        while pos > 0 {
            pos -= 1;
            match bytes[pos] {
                b'>' => depth += 1,
                b'<' => depth -= 1,
                _ => {}
            }
            if depth == 0 && pos + sep.len() <= bytes.len() && &bytes[pos..pos + sep.len()] == sep {
                return Some(pos);
            }
        }
        None
    }
}

pub fn word_wrap(text: &str, width: usize) -> Vec<String> {
    StringUtils::word_wrap(text, width)
}

pub fn display_width(s: &str) -> usize {
    StringUtils::display_width(s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    StringUtils::pad_right(s, width, ' ')
}
