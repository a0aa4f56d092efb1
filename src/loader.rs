use std::fmt::Write;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use crate::config::StampConfig;
use crate::error::{Error, Result};

const DEFAULT_DATE_FORMAT: &str = "%B %d, %Y";

/// Provenance line placed in a fenced block at the top of each document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    pub author: String,
    pub date: NaiveDate,
    pub date_format: String,
}

impl Stamp {
    pub fn new(config: &StampConfig, date: NaiveDate) -> Self {
        Self {
            author: config.author.clone(),
            date,
            date_format: config.date_format.clone(),
        }
    }

    pub fn line(&self) -> String {
        let mut date = String::new();
        if write!(date, "{}", self.date.format(&self.date_format)).is_err() {
            log::warn!("invalid date format {:?}, using {:?}", self.date_format, DEFAULT_DATE_FORMAT);
            date = self.date.format(DEFAULT_DATE_FORMAT).to_string();
        }
        format!("Rendered by {} on {}", self.author, date)
    }

    /// The fenced block, ending in a newline.
    pub fn block(&self) -> String {
        format!("```\n{}\n```\n", self.line())
    }
}

/// Append the trailing newline and prepend the stamp block.
///
/// Content that is empty or starts with a line break gets no stamp.
pub fn stamp_document(content: &str, stamp: Option<&Stamp>) -> String {
    let mut text = String::with_capacity(content.len() + 64);
    if let Some(stamp) = stamp {
        if content.chars().next().is_some_and(|c| c != '\n') {
            text.push_str(&stamp.block());
        }
    }
    text.push_str(content);
    text.push('\n');
    text
}

/// Read a markdown file and prepare it for parsing.
pub fn load(path: &Path, stamp: Option<&Stamp>) -> Result<String> {
    log::info!("reading {}", path.display());
    let content = fs::read_to_string(path).map_err(|source| Error::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(stamp_document(&content, stamp))
}

/// Write rendered HTML, replacing any existing file.
pub fn emit(path: &Path, html: &str) -> Result<()> {
    log::info!("writing {}", path.display());
    fs::write(path, html).map_err(|source| Error::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}
