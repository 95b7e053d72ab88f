//! Line-oriented document splicing
//!
//! Shared descriptors are edited without parsing them: a document is loaded as
//! lines, one [`InsertionDirective`] inserts new lines by substring matching,
//! and the whole document is written back. Existing lines are never removed or
//! reordered. Editing is not streaming; documents are read fully into memory.
//!
//! Two directives exist:
//! - [`InsertionDirective::Marker`]: insert a block after the first line
//!   containing a marker ([`insert_after_marker`])
//! - [`InsertionDirective::Region`]: insert one line before the first closing
//!   tag of the first open/close region ([`insert_before_close`])

mod marker;
mod region;

pub use marker::insert_after_marker;
pub use region::insert_before_close;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ScaffoldError};

/// One mutation applied to one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertionDirective {
    /// Insert `block` after the first line containing `marker`
    Marker {
        /// Literal substring to look for
        marker: String,
        /// Lines to insert, separated by `\n`
        block: String,
    },
    /// Insert `line` before the first `close_tag` line following `open_tag`
    Region {
        /// Substring opening the region
        open_tag: String,
        /// Substring closing the region
        close_tag: String,
        /// Line to insert
        line: String,
    },
}

/// Result of applying a directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpliceOutcome {
    /// Lines were inserted
    Inserted {
        /// Index of the first inserted line in the new document
        at: usize,
        /// Later marker lines or regions that were left untouched
        ignored: usize,
    },
    /// No line contains the marker; the document is unchanged
    MarkerMissing,
    /// No line contains the opening tag; the document is unchanged
    RegionMissing,
    /// The document ends inside a region; the document is unchanged
    RegionUnclosed,
    /// The document already references the module; nothing was applied
    AlreadyPresent,
}

impl SpliceOutcome {
    /// Whether the document changed
    #[must_use]
    pub const fn is_inserted(self) -> bool {
        matches!(self, Self::Inserted { .. })
    }
}

/// Lines produced by a splice together with its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spliced {
    /// Resulting document lines
    pub lines: Vec<String>,
    /// What happened
    pub outcome: SpliceOutcome,
}

/// A text document held in memory as lines
///
/// Each line keeps the terminator it was read with, so untouched lines are
/// written back byte for byte even when a file mixes `\n` and `\r\n`.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    lines: Vec<String>,
    endings: Vec<&'static str>,
    line_ending: &'static str,
}

impl Document {
    /// Read a document
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::NotFound`] if the file does not exist and
    /// [`ScaffoldError::Io`] if it cannot be read.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = fs::read_to_string(&path).map_err(|e| ScaffoldError::io(&path, e))?;
        Ok(Self::parse(path, &content))
    }

    /// Build a document from in-memory content
    ///
    /// Inserted lines use `\r\n` if any line of `content` does, `\n`
    /// otherwise.
    #[must_use]
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Self {
        let line_ending = if content.contains("\r\n") { "\r\n" } else { "\n" };

        let (lines, endings) = content
            .split_inclusive('\n')
            .map(|raw| {
                if let Some(text) = raw.strip_suffix("\r\n") {
                    (text.to_owned(), "\r\n")
                } else if let Some(text) = raw.strip_suffix('\n') {
                    (text.to_owned(), "\n")
                } else {
                    (raw.to_owned(), "")
                }
            })
            .unzip();

        Self {
            path: path.into(),
            lines,
            endings,
            line_ending,
        }
    }

    /// Path the document was loaded from
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current lines
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether any line contains `needle`
    #[must_use]
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }

    /// Apply a directive in memory
    pub fn apply(&mut self, directive: &InsertionDirective) -> SpliceOutcome {
        let spliced = match directive {
            InsertionDirective::Marker { marker, block } => {
                insert_after_marker(&self.lines, marker, block)
            }
            InsertionDirective::Region {
                open_tag,
                close_tag,
                line,
            } => insert_before_close(&self.lines, open_tag, close_tag, line),
        };

        if let SpliceOutcome::Inserted { at, .. } = spliced.outcome {
            let added = spliced.lines.len() - self.lines.len();
            let tail = self.endings.split_off(at);
            self.endings
                .extend(std::iter::repeat_n(self.line_ending, added));
            self.endings.extend(tail);

            // an unterminated final line that is no longer last needs a terminator
            let last = self.endings.len() - 1;
            if let Some(open) = self.endings[..last].iter().position(|e| e.is_empty()) {
                self.endings.swap(open, last);
            }
        }

        self.lines = spliced.lines;
        spliced.outcome
    }

    /// Render the document back to text
    #[must_use]
    pub fn render(&self) -> String {
        self.lines
            .iter()
            .zip(&self.endings)
            .flat_map(|(line, ending)| [line.as_str(), *ending])
            .collect()
    }

    /// Overwrite the file with the current lines
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::Io`] if the file cannot be written.
    pub fn persist(&self) -> Result<()> {
        fs::write(&self.path, self.render()).map_err(|e| ScaffoldError::io(&self.path, e))
    }
}

#[cfg(test)]
pub(crate) fn lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_owned).collect()
}
