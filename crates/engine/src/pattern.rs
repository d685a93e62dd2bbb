//! Regex-backed pattern matcher.
//!
//! Patterns are compiled case-insensitively once at table construction.
//! A pattern that fails to compile is a startup error, never a per-request
//! concern.

use regex::{Regex, RegexBuilder};
use wayfarer_core::error::RuleError;
use wayfarer_core::rule::{PatternMatcher, RuleMatch};

/// A `PatternMatcher` over a compiled regular expression.
#[derive(Debug)]
pub struct RegexPattern {
    source: String,
    regex: Regex,
}

impl RegexPattern {
    /// Compile a pattern. `category` is only used to label the error.
    pub fn new(category: &str, pattern: &str) -> Result<Self, RuleError> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| RuleError::InvalidPattern {
                category: category.to_string(),
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// Compile a list of patterns for one rule, boxed for the table.
    pub fn compile_all(
        category: &str,
        patterns: &[&str],
    ) -> Result<Vec<Box<dyn PatternMatcher>>, RuleError> {
        patterns
            .iter()
            .map(|p| {
                RegexPattern::new(category, p)
                    .map(|compiled| Box::new(compiled) as Box<dyn PatternMatcher>)
            })
            .collect()
    }
}

impl PatternMatcher for RegexPattern {
    fn describe(&self) -> &str {
        &self.source
    }

    fn matches(&self, message: &str) -> Option<RuleMatch> {
        self.regex.captures(message).map(|caps| RuleMatch {
            message: message.to_string(),
            // Group 0 is the whole match; participating groups follow in order.
            captures: caps
                .iter()
                .skip(1)
                .flatten()
                .map(|m| m.as_str().to_string())
                .collect(),
        })
    }
}
