use std::sync::Mutex;

use crate::Violation;

/// Sink for detected violations.
///
/// `report` is a one-way notification: implementations must not expect the
/// caller to inspect any outcome, and the core never reads reported
/// violations back. Implementations intended to be shared across tree-walk
/// threads must synchronize internally.
pub trait Reporter {
    fn report(&self, violation: Violation);
}

/// A thread-safe reporter that buffers violations in memory.
///
/// Used by tests and by drivers that render a whole batch at once. The
/// internal `Mutex` makes a single instance safe to share across concurrent
/// traversals of independent subtrees.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    violations: Mutex<Vec<Violation>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.violations.lock().expect("reporter lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drains the buffered violations in the order they were reported.
    pub fn take(&self) -> Vec<Violation> {
        std::mem::take(&mut *self.violations.lock().expect("reporter lock poisoned"))
    }

    /// Drains the buffered violations sorted by location, then rule.
    ///
    /// Concurrent traversals report in no guaranteed order; sorting gives
    /// deterministic output for golden tests and batch rendering.
    pub fn take_sorted(&self) -> Vec<Violation> {
        let mut violations = self.take();
        violations.sort_by(|a, b| {
            (a.location, a.rule, a.message.as_str()).cmp(&(b.location, b.rule, b.message.as_str()))
        });
        violations
    }
}

impl Reporter for CollectingReporter {
    fn report(&self, violation: Violation) {
        self.violations
            .lock()
            .expect("reporter lock poisoned")
            .push(violation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Location, Rule, Severity};

    fn violation(line: u32, column: u32, message: &str) -> Violation {
        Violation {
            rule: Rule::CommaWhitespace,
            severity: Severity::Warning,
            message: message.to_string(),
            location: Location::new(line, column),
        }
    }

    #[test]
    fn test_collecting_reporter_buffers_in_order() {
        let reporter = CollectingReporter::new();
        reporter.report(violation(2, 1, "second"));
        reporter.report(violation(1, 1, "first"));

        assert_eq!(reporter.len(), 2);
        let taken = reporter.take();
        assert_eq!(taken[0].message, "second");
        assert_eq!(taken[1].message, "first");
        assert!(reporter.is_empty());
    }

    #[test]
    fn test_take_sorted_orders_by_location() {
        let reporter = CollectingReporter::new();
        reporter.report(violation(2, 4, "late"));
        reporter.report(violation(1, 9, "early"));
        reporter.report(violation(2, 1, "middle"));

        let sorted = reporter.take_sorted();
        let messages: Vec<&str> = sorted.iter().map(|v| v.message.as_str()).collect();
        assert_eq!(messages, ["early", "middle", "late"]);
    }

    #[test]
    fn test_reporter_is_shareable_across_threads() {
        let reporter = CollectingReporter::new();
        std::thread::scope(|scope| {
            for line in 1..=4u32 {
                let reporter = &reporter;
                scope.spawn(move || reporter.report(violation(line, 1, "v")));
            }
        });
        assert_eq!(reporter.len(), 4);
    }
}
