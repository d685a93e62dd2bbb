//! Intent rule model — the ordered priority table the dispatcher scans.
//!
//! A rule pairs a set of patterns with exactly one responder: either a fixed
//! reply string or an asynchronous action. The table is built once at startup
//! and never mutated afterwards, so it is safe to share across concurrent
//! dispatches without synchronization.

use async_trait::async_trait;
use std::sync::Arc;

/// The outcome of a successful pattern match.
///
/// Carries the full input message plus any captured substrings (e.g. a city
/// name). Capture groups are indexed from zero in the order they appear in
/// the pattern; the implicit whole-match is not included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    /// The raw message that matched
    pub message: String,

    /// Captured groups, in pattern order
    pub captures: Vec<String>,
}

impl RuleMatch {
    /// Get a captured group by index, if present.
    pub fn capture(&self, index: usize) -> Option<&str> {
        self.captures.get(index).map(|s| s.as_str())
    }
}

/// A matcher over raw input messages.
///
/// Matching must be pure: no I/O, no external state, same input → same
/// outcome. The dispatch loop only sees this trait, so the regex engine can
/// be swapped for e.g. a token-based matcher without touching dispatch logic.
pub trait PatternMatcher: Send + Sync {
    /// Human-readable form of the pattern, for diagnostics.
    fn describe(&self) -> &str;

    /// Test the message against this pattern.
    fn matches(&self, message: &str) -> Option<RuleMatch>;
}

/// An asynchronous responder that computes a reply from a match.
///
/// The `String` return type is the contract: an action can never surface a
/// fault to the dispatcher. Implementations absorb their own failures and
/// return a degraded but valid reply instead.
#[async_trait]
pub trait IntentAction: Send + Sync {
    async fn run(&self, found: &RuleMatch) -> String;
}

/// Exactly one way a rule answers: a fixed string or a dynamic action.
#[derive(Clone)]
pub enum Responder {
    /// A fixed reply returned verbatim, no suspension.
    Static(String),

    /// An awaited action that produces the reply.
    Action(Arc<dyn IntentAction>),
}

impl std::fmt::Debug for Responder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Responder::Static(text) => f.debug_tuple("Static").field(text).finish(),
            Responder::Action(_) => f.write_str("Action(..)"),
        }
    }
}

/// One intent definition: a category label, ordered patterns, one responder.
pub struct IntentRule {
    /// Human-readable label. Informational only — never used for control flow.
    pub category: String,

    patterns: Vec<Box<dyn PatternMatcher>>,

    pub responder: Responder,
}

impl IntentRule {
    /// Build a rule that answers with a fixed reply.
    pub fn reply(
        category: impl Into<String>,
        patterns: Vec<Box<dyn PatternMatcher>>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            patterns,
            responder: Responder::Static(text.into()),
        }
    }

    /// Build a rule that answers by running an action.
    pub fn action(
        category: impl Into<String>,
        patterns: Vec<Box<dyn PatternMatcher>>,
        action: Arc<dyn IntentAction>,
    ) -> Self {
        Self {
            category: category.into(),
            patterns,
            responder: Responder::Action(action),
        }
    }

    /// Test the message against this rule's patterns in order.
    ///
    /// The first pattern that matches wins for this rule.
    pub fn first_match(&self, message: &str) -> Option<RuleMatch> {
        self.patterns.iter().find_map(|p| p.matches(message))
    }

    /// Number of patterns in this rule.
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }
}

impl std::fmt::Debug for IntentRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IntentRule")
            .field("category", &self.category)
            .field("patterns", &self.patterns.iter().map(|p| p.describe()).collect::<Vec<_>>())
            .field("responder", &self.responder)
            .finish()
    }
}

/// An ordered, immutable sequence of intent rules.
///
/// Order is the priority order: the first matching rule (by table order, then
/// by pattern order within the rule) wins. Rules need not be mutually
/// exclusive — authors put specific patterns before general catch-alls.
pub struct RuleTable {
    rules: Vec<IntentRule>,
}

impl RuleTable {
    pub fn new(rules: Vec<IntentRule>) -> Self {
        Self { rules }
    }

    /// Scan the table for the first matching rule.
    ///
    /// Single linear scan with early exit: the scan stops at the first
    /// pattern of the first rule that matches, across both loops.
    pub fn find(&self, message: &str) -> Option<(&IntentRule, RuleMatch)> {
        self.rules
            .iter()
            .find_map(|rule| rule.first_match(message).map(|m| (rule, m)))
    }

    /// Number of rules in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Category labels in priority order, for diagnostics.
    pub fn categories(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.category.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A minimal substring matcher for unit tests — stands in for the regex
    /// implementation and demonstrates the matcher seam is swappable.
    struct ContainsPattern(&'static str);

    impl PatternMatcher for ContainsPattern {
        fn describe(&self) -> &str {
            self.0
        }

        fn matches(&self, message: &str) -> Option<RuleMatch> {
            message.to_lowercase().contains(self.0).then(|| RuleMatch {
                message: message.to_string(),
                captures: Vec::new(),
            })
        }
    }

    struct EchoAction;

    #[async_trait]
    impl IntentAction for EchoAction {
        async fn run(&self, found: &RuleMatch) -> String {
            found.message.clone()
        }
    }

    fn table() -> RuleTable {
        RuleTable::new(vec![
            IntentRule::reply(
                "Greetings",
                vec![Box::new(ContainsPattern("hello")), Box::new(ContainsPattern("hi"))],
                "Hello there!",
            ),
            IntentRule::reply(
                "Farewell",
                vec![Box::new(ContainsPattern("bye"))],
                "Goodbye!",
            ),
            IntentRule::action(
                "Echo",
                vec![Box::new(ContainsPattern("echo"))],
                Arc::new(EchoAction),
            ),
        ])
    }

    #[test]
    fn first_matching_rule_wins() {
        let table = table();
        // "hi, bye" matches both Greetings and Farewell — table order decides.
        let (rule, _) = table.find("hi, bye").unwrap();
        assert_eq!(rule.category, "Greetings");
    }

    #[test]
    fn pattern_order_within_rule() {
        let rule = IntentRule::reply(
            "Order",
            vec![Box::new(ContainsPattern("b")), Box::new(ContainsPattern("a"))],
            "ok",
        );
        // Both patterns match "ab"; the first pattern in the rule wins.
        let m = rule.first_match("ab").unwrap();
        assert_eq!(m.message, "ab");
    }

    #[test]
    fn no_match_returns_none() {
        let table = table();
        assert!(table.find("completely unrelated").is_none());
    }

    #[test]
    fn matching_is_deterministic() {
        let table = table();
        for _ in 0..3 {
            let (rule, _) = table.find("say hello").unwrap();
            assert_eq!(rule.category, "Greetings");
        }
    }

    #[tokio::test]
    async fn action_responder_runs() {
        let table = table();
        let (rule, m) = table.find("echo this back").unwrap();
        match &rule.responder {
            Responder::Action(action) => {
                assert_eq!(action.run(&m).await, "echo this back");
            }
            Responder::Static(_) => panic!("expected action responder"),
        }
    }

    #[test]
    fn capture_accessor() {
        let m = RuleMatch {
            message: "weather in Rome".into(),
            captures: vec!["Rome".into()],
        };
        assert_eq!(m.capture(0), Some("Rome"));
        assert_eq!(m.capture(1), None);
    }

    #[test]
    fn categories_in_priority_order() {
        let table = table();
        assert_eq!(table.categories(), vec!["Greetings", "Farewell", "Echo"]);
        assert_eq!(table.len(), 3);
    }
}
