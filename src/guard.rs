use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use tracing::debug;

/// Why a guarded parse was aborted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    Cancelled,
    DeadlineExceeded,
    StepLimitExceeded,
    DepthLimitExceeded,
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbortReason::Cancelled => write!(f, "parse cancelled"),
            AbortReason::DeadlineExceeded => write!(f, "parse deadline exceeded"),
            AbortReason::StepLimitExceeded => write!(f, "repetition step limit exceeded"),
            AbortReason::DepthLimitExceeded => write!(f, "recursion depth limit exceeded"),
        }
    }
}

/// Run-time limits threaded alongside the cursor of a single parse.
///
/// A guard is consulted by the repetition combinators on every iteration
/// and by deferred parsers on every entry, so pathological grammars (a
/// repetition that never stops, runaway recursion) end in a failure
/// instead of a hang or a stack overflow.
///
/// Counters are shared by every cursor derived from the same run; use one
/// guard per parse.
///
/// ```
/// use recomb::{Guard, run_with, many0, is_char};
/// use std::time::Duration;
///
/// let guard = Guard::new()
///     .with_timeout(Duration::from_secs(1))
///     .with_max_steps(10_000);
/// let parsed = run_with(&many0(is_char('a')), "aaa", &guard).unwrap();
/// assert_eq!(parsed.len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct Guard {
    cancelled: AtomicBool,
    deadline: Option<Instant>,
    max_steps: Option<usize>,
    max_depth: Option<usize>,
    steps: AtomicUsize,
    depth: AtomicUsize,
}

impl Guard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Request cancellation; the running parse fails at its next checkpoint.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Number of checkpoints passed so far
    pub fn steps(&self) -> usize {
        self.steps.load(Ordering::Relaxed)
    }

    /// Current nesting of deferred parsers
    pub fn depth(&self) -> usize {
        self.depth.load(Ordering::Relaxed)
    }

    pub(crate) fn check(&self) -> Result<(), AbortReason> {
        if self.is_cancelled() {
            return Err(self.abort(AbortReason::Cancelled));
        }

        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Err(self.abort(AbortReason::DeadlineExceeded));
            }
        }

        let steps = self.steps.fetch_add(1, Ordering::Relaxed) + 1;
        match self.max_steps {
            Some(max) if steps > max => Err(self.abort(AbortReason::StepLimitExceeded)),
            _ => Ok(()),
        }
    }

    pub(crate) fn enter(&self) -> Result<DepthToken<'_>, AbortReason> {
        let depth = self.depth.fetch_add(1, Ordering::Relaxed) + 1;
        let token = DepthToken { guard: self };

        match self.max_depth {
            // Dropping the token undoes the increment above
            Some(max) if depth > max => Err(self.abort(AbortReason::DepthLimitExceeded)),
            _ => Ok(token),
        }
    }

    fn abort(&self, reason: AbortReason) -> AbortReason {
        debug!(
            %reason,
            steps = self.steps(),
            depth = self.depth(),
            "aborting guarded parse"
        );
        reason
    }
}

/// Marks one level of deferred-parser nesting; released on drop
#[derive(Debug)]
pub struct DepthToken<'g> {
    guard: &'g Guard,
}

impl Drop for DepthToken<'_> {
    fn drop(&mut self) {
        self.guard.depth.fetch_sub(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlimited_guard_never_aborts() {
        let guard = Guard::new();
        for _ in 0..1000 {
            assert!(guard.check().is_ok());
        }
        assert_eq!(guard.steps(), 1000);
    }

    #[test]
    fn test_step_limit() {
        let guard = Guard::new().with_max_steps(2);
        assert!(guard.check().is_ok());
        assert!(guard.check().is_ok());
        assert_eq!(guard.check(), Err(AbortReason::StepLimitExceeded));
    }

    #[test]
    fn test_cancel() {
        let guard = Guard::new();
        assert!(guard.check().is_ok());
        guard.cancel();
        assert!(guard.is_cancelled());
        assert_eq!(guard.check(), Err(AbortReason::Cancelled));
    }

    #[test]
    fn test_expired_deadline() {
        let guard = Guard::new().with_deadline(Instant::now());
        assert_eq!(guard.check(), Err(AbortReason::DeadlineExceeded));
    }

    #[test]
    fn test_depth_tokens_release_on_drop() {
        let guard = Guard::new().with_max_depth(2);
        {
            let _first = guard.enter().unwrap();
            let _second = guard.enter().unwrap();
            assert_eq!(guard.depth(), 2);
            assert_eq!(guard.enter().unwrap_err(), AbortReason::DepthLimitExceeded);
            assert_eq!(guard.depth(), 2);
        }
        assert_eq!(guard.depth(), 0);
    }
}
