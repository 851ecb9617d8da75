//! Name patterns for filtering and excluding directory entries

use std::fmt;
use std::path::Path;

use glob::Pattern;
use regex::Regex;

use crate::error::{Error, Result};

/// Default filter: any name, capturing everything before the last extension.
pub const DEFAULT_FILTER: &str = r"^(.+?)(?:\.[^.]*)?$";

/// Default exclude: version control directories.
pub const DEFAULT_EXCLUDE: &str = r"^\.(git|svn)$";

/// A predicate over a single file or directory name.
///
/// Regex patterns capture their first group (or the whole match when the
/// pattern has no groups). Glob patterns capture the name minus its last
/// extension.
#[derive(Debug, Clone)]
pub enum NamePattern {
    Regex(Regex),
    Glob(Pattern),
}

impl NamePattern {
    pub fn regex(pattern: &str) -> Result<Self> {
        Regex::new(pattern)
            .map(NamePattern::Regex)
            .map_err(|e| Error::Pattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })
    }

    pub fn glob(pattern: &str) -> Result<Self> {
        Pattern::new(pattern)
            .map(NamePattern::Glob)
            .map_err(|e| Error::Pattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })
    }

    pub fn default_filter() -> Self {
        Self::builtin(DEFAULT_FILTER)
    }

    pub fn default_exclude() -> Self {
        Self::builtin(DEFAULT_EXCLUDE)
    }

    fn builtin(pattern: &str) -> Self {
        match Regex::new(pattern) {
            Ok(re) => NamePattern::Regex(re),
            Err(e) => unreachable!("built-in pattern {pattern} is invalid: {e}"),
        }
    }

    pub fn is_match(&self, name: &str) -> bool {
        match self {
            NamePattern::Regex(re) => re.is_match(name),
            NamePattern::Glob(p) => p.matches(name),
        }
    }

    /// Module name for `name`, or `None` if the pattern does not match.
    pub fn capture<'a>(&self, name: &'a str) -> Option<&'a str> {
        match self {
            NamePattern::Regex(re) => {
                let caps = re.captures(name)?;
                caps.get(1).or_else(|| caps.get(0)).map(|m| m.as_str())
            }
            NamePattern::Glob(p) => {
                if !p.matches(name) {
                    return None;
                }
                Path::new(name)
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .or(Some(name))
            }
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            NamePattern::Regex(re) => re.as_str(),
            NamePattern::Glob(p) => p.as_str(),
        }
    }
}

impl fmt::Display for NamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
