//! Meta and column-header line detection for line-oriented text formats
//!
//! Text formats stored in block-compressed streams (BED, VCF, generic
//! tab-delimited files) open with annotation lines and sometimes a column
//! header before the first record. The filter classifies raw lines so the
//! caller can skip them before parsing. One predicate type serves every format;
//! a [`LineFormat`] carries the per-format prefixes.
//!
//! Formats can be declared in TOML or JSON:
//!
//! ```toml
//! header_start = "#"
//! header_line = "#CHROM"
//! meta_prefixes = ["##"]
//! ```

use crate::core::error::{Result, VfpError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Prefix marking a comment line in every supported format
pub const COMMENT_PREFIX: &str = "#";

fn default_meta_prefixes() -> Vec<String> {
    vec!["track".to_string(), "browser".to_string(), COMMENT_PREFIX.to_string()]
}

/// Per-format line classification settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineFormat {
    /// Prefix that a column-header line must start with
    ///
    /// `None` means the format has no header line beyond comment lines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_start: Option<String>,

    /// Full header text a column-header line must also start with
    ///
    /// Example: "#CHROM" for VCF
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_line: Option<String>,

    /// Prefixes that mark format-wide annotation lines
    #[serde(default = "default_meta_prefixes")]
    pub meta_prefixes: Vec<String>,
}

impl Default for LineFormat {
    fn default() -> Self {
        Self::bed()
    }
}

impl LineFormat {
    /// BED: `track`/`browser` declarations and comments, no column header
    pub fn bed() -> Self {
        LineFormat {
            header_start: None,
            header_line: None,
            meta_prefixes: default_meta_prefixes(),
        }
    }

    /// VCF: `#CHROM` column header
    ///
    /// Every `#` line already counts as a header in [`LineFilter::is_header_line`],
    /// so `header_line` here records the expected header text but never changes
    /// a classification on its own.
    pub fn vcf() -> Self {
        LineFormat {
            header_start: Some(COMMENT_PREFIX.to_string()),
            header_line: Some("#CHROM".to_string()),
            meta_prefixes: default_meta_prefixes(),
        }
    }

    /// Generic tab-delimited text with `#` headers
    pub fn tab() -> Self {
        LineFormat {
            header_start: Some(COMMENT_PREFIX.to_string()),
            header_line: None,
            meta_prefixes: default_meta_prefixes(),
        }
    }

    /// Set header start prefix
    pub fn with_header_start(mut self, header_start: impl Into<String>) -> Self {
        self.header_start = Some(header_start.into());
        self
    }

    /// Set header line text
    pub fn with_header_line(mut self, header_line: impl Into<String>) -> Self {
        self.header_line = Some(header_line.into());
        self
    }

    /// Add a meta line prefix
    pub fn with_meta_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.meta_prefixes.push(prefix.into());
        self
    }

    /// Validate prefixes
    ///
    /// Checks:
    /// - No configured prefix is empty
    /// - `header_line` is only set together with `header_start`
    /// - `header_line` starts with `header_start`, otherwise no line could match
    pub fn validate(&self) -> Result<()> {
        if self.meta_prefixes.iter().any(|p| p.is_empty()) {
            return Err(VfpError::InvalidConfig(
                "meta prefixes cannot be empty".to_string(),
            ));
        }

        match (&self.header_start, &self.header_line) {
            (Some(start), _) if start.is_empty() => Err(VfpError::InvalidConfig(
                "header_start cannot be empty".to_string(),
            )),
            (_, Some(line)) if line.is_empty() => Err(VfpError::InvalidConfig(
                "header_line cannot be empty".to_string(),
            )),
            (None, Some(line)) => Err(VfpError::InvalidConfig(format!(
                "header_line '{}' requires header_start",
                line
            ))),
            (Some(start), Some(line)) if !line.starts_with(start.as_str()) => {
                Err(VfpError::InvalidConfig(format!(
                    "header_line '{}' does not start with header_start '{}'",
                    line, start
                )))
            }
            _ => Ok(()),
        }
    }

    /// Parse and validate a TOML declaration
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let format: LineFormat = toml::from_str(s)?;
        format.validate()?;
        Ok(format)
    }

    /// Parse and validate a JSON declaration
    pub fn from_json_str(s: &str) -> Result<Self> {
        let format: LineFormat = serde_json::from_str(s)?;
        format.validate()?;
        Ok(format)
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a declaration from disk
    ///
    /// `.json` files are parsed as JSON, anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading line format from {:?}", path);

        let contents = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let format = if is_json {
            Self::from_json_str(&contents)?
        } else {
            Self::from_toml_str(&contents)?
        };

        info!("Loaded line format from {:?}", path);
        Ok(format)
    }
}

/// Classifies lines as meta, header, or data
#[derive(Debug, Clone)]
pub struct LineFilter {
    format: LineFormat,
}

impl LineFilter {
    /// Create a filter for a validated format
    pub fn new(format: LineFormat) -> Result<Self> {
        format.validate()?;
        Ok(LineFilter { format })
    }

    pub fn format(&self) -> &LineFormat {
        &self.format
    }

    /// Whether the line is a format-wide annotation
    ///
    /// # Examples
    /// ```
    /// use block_vfp::line_filter::{LineFilter, LineFormat};
    ///
    /// let filter = LineFilter::new(LineFormat::bed()).unwrap();
    /// assert!(filter.is_meta_line("track name=x"));
    /// assert!(filter.is_meta_line("browser position chr1:1-100"));
    /// assert!(!filter.is_meta_line("chr1\t100\t200"));
    /// ```
    pub fn is_meta_line(&self, line: &str) -> bool {
        self.format
            .meta_prefixes
            .iter()
            .any(|prefix| line.starts_with(prefix.as_str()))
    }

    /// Whether the line is a column header
    ///
    /// Comment lines always count. Otherwise the line must start with the
    /// configured header start and, when set, the header line text.
    pub fn is_header_line(&self, line: &str) -> bool {
        if line.starts_with(COMMENT_PREFIX) {
            return true;
        }

        match &self.format.header_start {
            None => false,
            Some(start) => {
                line.starts_with(start.as_str())
                    && self
                        .format
                        .header_line
                        .as_deref()
                        .map_or(true, |header| line.starts_with(header))
            }
        }
    }

    /// Whether the line should be skipped before parsing records
    pub fn is_skippable(&self, line: &str) -> bool {
        self.is_meta_line(line) || self.is_header_line(line)
    }

    /// Skip leading meta and header lines
    ///
    /// Classification stops at the first data line; later lines are yielded
    /// unchanged even if they look like headers.
    pub fn skip_header<'a, I>(&'a self, lines: I) -> impl Iterator<Item = I::Item> + 'a
    where
        I: IntoIterator,
        I::IntoIter: 'a,
        I::Item: AsRef<str>,
    {
        lines
            .into_iter()
            .skip_while(move |line| self.is_skippable(AsRef::<str>::as_ref(line)))
    }
}
