use regex::Regex;

use crate::error::{ConsoleSweepError, Result};

/// Target value that matches every `console.<method>` call.
pub const TARGET_ALL: &str = "all";

/// Body substituted where a removed call sat in a handler position.
pub const ERROR_HANDLER_STUB: &str = "{ /* handle error */ }";

/// Compiled matcher for single-line `console.<method>(...)` calls.
///
/// A matcher holds no scan position, so one instance can probe and rewrite
/// any number of lines in any order.
#[derive(Debug)]
pub struct StatementMatcher {
    pattern: Regex,
}

impl StatementMatcher {
    /// Compile a matcher for the given target method.
    ///
    /// `all` matches any `console.<identifier>` call. Any other target is
    /// escaped and matched literally, so a target of `log` never matches
    /// `console.logger`. The argument span stops at the first `)`, which
    /// means calls whose arguments contain a literal `)` are matched only
    /// up to that point.
    ///
    /// # Errors
    /// Returns an error if the assembled pattern does not compile.
    pub fn for_target(target: &str) -> Result<Self> {
        let pattern = if target == TARGET_ALL {
            String::from(r"\bconsole\.\w+\s*\([^)]*\)\s*;?")
        } else {
            format!(r"\bconsole\.{}\s*\([^)]*\)\s*;?", regex::escape(target))
        };

        let pattern = Regex::new(&pattern).map_err(|e| ConsoleSweepError::Pattern {
            target: target.to_string(),
            source: e,
        })?;

        Ok(Self { pattern })
    }

    /// Whether the line contains at least one matching call.
    #[must_use]
    pub fn is_match(&self, line: &str) -> bool {
        self.pattern.is_match(line)
    }

    /// Remove every matching call from the line.
    #[must_use]
    pub fn remove(&self, line: &str) -> String {
        self.pattern.replace_all(line, "").into_owned()
    }

    /// Replace every matching call with the error-handler stub body.
    #[must_use]
    pub fn replace_with_stub(&self, line: &str) -> String {
        self.pattern.replace_all(line, ERROR_HANDLER_STUB).into_owned()
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
