use regex::Regex;

use crate::pattern::StatementMatcher;

/// Prefix that marks a line as a dedicated statement line once trimmed.
const STATEMENT_PREFIX: &str = "console";

/// Substring that marks a dedicated line as part of a promise chain.
const CATCH_MARKER: &str = ".catch(";

/// Arrow handler left without a body after removal.
const EMPTY_HANDLER_PATTERN: &str = r"\.catch\(\s*\(\s*error\s*\)\s*=>\s*\)";

/// Replacement that restores a well-formed empty handler.
const EMPTY_HANDLER_REPAIR: &str = ".catch((error) => { })";

/// Outcome of stripping one file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripResult {
    /// Rewritten content, line structure preserved except for dropped lines.
    pub content: String,
    /// Number of input lines that contained at least one matching call.
    pub removed: usize,
}

/// Line-oriented rewriter that removes matching calls from source text.
///
/// Lines are classified by their trimmed form: a line starting with
/// `console` is dropped outright (or stubbed when it chains a `.catch`),
/// while a line with an embedded call keeps its surrounding code. A
/// trailing-comma flag carries across dropped lines so that object and
/// array literals stay well-formed.
pub struct StatementStripper<'a> {
    matcher: &'a StatementMatcher,
    empty_handler: Regex,
}

impl<'a> StatementStripper<'a> {
    #[must_use]
    pub fn new(matcher: &'a StatementMatcher) -> Self {
        Self {
            matcher,
            empty_handler: Regex::new(EMPTY_HANDLER_PATTERN).expect("Invalid regex"),
        }
    }

    /// Strip matching calls from `source` and count affected lines.
    #[must_use]
    pub fn strip(&self, source: &str) -> StripResult {
        let mut kept: Vec<String> = Vec::new();
        let mut pending_comma = false;
        let mut removed = 0;

        for line in source.split('\n') {
            let trimmed = line.trim();

            if !self.matcher.is_match(trimmed) {
                kept.push(line.to_string());
                continue;
            }
            removed += 1;

            if trimmed.starts_with(STATEMENT_PREFIX) {
                // Dedicated statement line. Dropped, unless it chains a
                // .catch handler that must keep a body.
                if trimmed.contains(CATCH_MARKER) {
                    kept.push(self.matcher.replace_with_stub(trimmed));
                }
                pending_comma = trimmed.ends_with(',');
                continue;
            }

            // Embedded call: remove the matching spans, keep the rest.
            let remainder = self.matcher.remove(line);
            let remainder = remainder.trim();
            if remainder.is_empty() {
                continue;
            }

            if pending_comma && remainder.ends_with('}') {
                kept.push(format!("{remainder},"));
                pending_comma = false;
            } else {
                kept.push(remainder.to_string());
            }
        }

        let content = self.repair_empty_handlers(&kept.join("\n"));

        StripResult { content, removed }
    }

    /// Rewrite `.catch((error) => )` leftovers into empty-bodied handlers.
    fn repair_empty_handlers(&self, content: &str) -> String {
        self.empty_handler
            .replace_all(content, EMPTY_HANDLER_REPAIR)
            .into_owned()
    }
}

#[cfg(test)]
#[path = "transform_tests.rs"]
mod tests;
