use std::time::Duration;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_BACKOFF: Duration = Duration::from_millis(10);

/// Bounded retry for admissions that hit a transient serialization conflict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            backoff: DEFAULT_BACKOFF,
        }
    }
}

impl RetryPolicy {
    /// Linear backoff: the wait after attempt `n` (1-based) is `n * backoff`.
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        self.backoff.saturating_mul(attempt)
    }

    pub fn no_backoff(max_attempts: u32) -> Self {
        Self {
            max_attempts,
            backoff: Duration::ZERO,
        }
    }
}

#[cfg(test)]
mod retry_policy_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 10)]
    #[case(2, 20)]
    #[case(3, 30)]
    fn it_should_back_off_linearly(#[case] attempt: u32, #[case] expected_ms: u64) {
        let policy = RetryPolicy::default();
        assert_eq!(policy.backoff_for(attempt), Duration::from_millis(expected_ms));
    }

    #[rstest]
    fn it_should_default_to_three_attempts() {
        assert_eq!(RetryPolicy::default().max_attempts, 3);
        assert_eq!(RetryPolicy::no_backoff(5).backoff_for(4), Duration::ZERO);
    }
}
