//! Remote-first breakdown resolution with local fallback

use crate::domain::generate;
use crate::error::{HabitError, Result};
use crate::infrastructure::{BreakdownRequest, BreakdownSource};
use log::debug;
use std::collections::HashSet;
use std::sync::Mutex;

/// Where a resolved breakdown came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakdownOrigin {
    Remote,
    Local,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedBreakdown {
    pub steps: Vec<String>,
    pub origin: BreakdownOrigin,
}

/// Marks a habit as having a request in flight until dropped
pub struct InFlightGuard<'a> {
    pending: &'a Mutex<HashSet<String>>,
    habit: String,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        pending.remove(&self.habit);
    }
}

/// Prefers the remote collaborator and silently falls back to the local
/// generator on any failure. Fallbacks are only visible at debug level.
/// Never retries.
pub struct BreakdownResolver {
    remote: Option<Box<dyn BreakdownSource>>,
    pending: Mutex<HashSet<String>>,
}

impl BreakdownResolver {
    pub fn new(remote: Option<Box<dyn BreakdownSource>>) -> Self {
        BreakdownResolver {
            remote,
            pending: Mutex::new(HashSet::new()),
        }
    }

    /// Resolver that only uses the local generator
    pub fn local() -> Self {
        Self::new(None)
    }

    /// Claim the habit for one request. A second claim for the same habit
    /// while the first is held fails with `Busy`; other habits are unaffected.
    pub fn begin(&self, habit: &str) -> Result<InFlightGuard<'_>> {
        let mut pending = self.pending.lock().unwrap_or_else(|e| e.into_inner());
        if !pending.insert(habit.to_string()) {
            return Err(HabitError::Busy(habit.to_string()));
        }

        Ok(InFlightGuard {
            pending: &self.pending,
            habit: habit.to_string(),
        })
    }

    pub fn resolve(
        &self,
        habit: &str,
        mood: Option<&str>,
        time: Option<&str>,
    ) -> Result<ResolvedBreakdown> {
        let _guard = self.begin(habit)?;

        if let Some(remote) = &self.remote {
            let request = BreakdownRequest::new(habit, mood, time);
            match remote.fetch(&request) {
                Ok(steps) if !steps.is_empty() => {
                    debug!("using remote breakdown for '{}'", habit);
                    return Ok(ResolvedBreakdown {
                        steps,
                        origin: BreakdownOrigin::Remote,
                    });
                }
                Ok(_) => debug!("remote breakdown for '{}' was empty, using local", habit),
                Err(e) => debug!("remote breakdown for '{}' failed, using local: {}", habit, e),
            }
        }

        Ok(ResolvedBreakdown {
            steps: generate(habit, mood, time),
            origin: BreakdownOrigin::Local,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct StubSource {
        reply: Option<Vec<String>>,
        calls: Rc<Cell<usize>>,
    }

    impl BreakdownSource for StubSource {
        fn fetch(&self, _request: &BreakdownRequest) -> Result<Vec<String>> {
            self.calls.set(self.calls.get() + 1);
            self.reply
                .clone()
                .ok_or_else(|| HabitError::Remote("connection refused".to_string()))
        }
    }

    fn resolver_with(reply: Option<Vec<String>>) -> (BreakdownResolver, Rc<Cell<usize>>) {
        let calls = Rc::new(Cell::new(0));
        let source = StubSource {
            reply,
            calls: Rc::clone(&calls),
        };
        (BreakdownResolver::new(Some(Box::new(source))), calls)
    }

    #[test]
    fn test_remote_result_used_verbatim() {
        let (resolver, calls) = resolver_with(Some(vec!["a".to_string(), "b".to_string()]));
        let resolved = resolver.resolve("Read", Some("tired"), Some("07:00")).unwrap();

        assert_eq!(resolved.steps, vec!["a", "b"]);
        assert_eq!(resolved.origin, BreakdownOrigin::Remote);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_remote_failure_falls_back_without_retry() {
        let (resolver, calls) = resolver_with(None);
        let resolved = resolver.resolve("Read", Some("tired"), Some("07:00")).unwrap();

        assert_eq!(resolved.origin, BreakdownOrigin::Local);
        assert_eq!(resolved.steps, generate("Read", Some("tired"), Some("07:00")));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_empty_remote_result_falls_back() {
        let (resolver, _) = resolver_with(Some(vec![]));
        let resolved = resolver.resolve("Journal", None, None).unwrap();
        assert_eq!(resolved.origin, BreakdownOrigin::Local);
        assert_eq!(resolved.steps.len(), 3);
    }

    #[test]
    fn test_local_fallback_is_deterministic() {
        let resolver = BreakdownResolver::local();
        let first = resolver.resolve("Gym", Some("energetic"), Some("18:00")).unwrap();
        let second = resolver.resolve("Gym", Some("energetic"), Some("18:00")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_same_habit_in_flight_is_rejected() {
        let resolver = BreakdownResolver::local();
        let guard = resolver.begin("Read").unwrap();

        assert!(matches!(
            resolver.resolve("Read", None, None),
            Err(HabitError::Busy(_))
        ));
        assert!(resolver.resolve("Run", None, None).is_ok());

        drop(guard);
        assert!(resolver.resolve("Read", None, None).is_ok());
    }
}
