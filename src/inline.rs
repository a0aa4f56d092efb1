use std::sync::OnceLock;

use regex::Regex;

use crate::error::Result;

/// Backtick-delimited run with at least one non-backtick character inside.
/// Lazy so adjacent spans on one line stay separate.
pub const CODE_SPAN_PATTERN: &str = r"`[^`]+?`";

/// Wraps every match of a pattern in a tag, dropping one delimiter
/// character from each end of the match.
#[derive(Debug, Clone)]
pub struct InlineTagger {
    pattern: Regex,
    tag: String,
}

impl InlineTagger {
    pub fn new(pattern: &str, tag: impl Into<String>) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            tag: tag.into(),
        })
    }

    /// The shared `` `x` `` to `<code>x</code>` tagger.
    pub fn code() -> &'static InlineTagger {
        static CODE: OnceLock<InlineTagger> = OnceLock::new();
        CODE.get_or_init(|| InlineTagger {
            pattern: Regex::new(CODE_SPAN_PATTERN).expect("Invalid code span regex"),
            tag: "code".to_string(),
        })
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Tag every non-overlapping match in `line`.
    ///
    /// Matches are found on the original line, then each one replaces the
    /// first literal occurrence of its text in the line being rewritten.
    pub fn apply(&self, line: &str) -> String {
        let matches: Vec<&str> = self.pattern.find_iter(line).map(|m| m.as_str()).collect();
        if matches.is_empty() {
            return line.to_string();
        }

        let mut out = line.to_string();
        for found in matches {
            let tagged = format!("<{tag}>{}</{tag}>", strip_delimiters(found), tag = self.tag);
            out = out.replacen(found, &tagged, 1);
        }
        out
    }
}

/// Drop the first and last character of a match.
fn strip_delimiters(found: &str) -> &str {
    let mut chars = found.chars();
    chars.next();
    chars.next_back();
    chars.as_str()
}
