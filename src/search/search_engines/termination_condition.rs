use memory_stats::memory_stats;
use std::time::{Duration, Instant};
use tracing::info;

/// Why a search was cut short before reaching a terminal outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    TimeLimit,
    MemoryLimit,
}

/// Optional resource limits checked once per node expansion.
///
/// Both limits default to off, in which case a search always runs to
/// completion and this type only tracks peak memory for the final log line.
#[derive(Debug)]
pub struct TerminationCondition {
    time_limit: Option<Duration>,
    memory_limit_mb: Option<usize>,
    start_time: Instant,
    peak_memory_usage_mb: Option<usize>,
    last_check_time: Instant,
}

impl TerminationCondition {
    pub fn new(time_limit: Option<Duration>, memory_limit_mb: Option<usize>) -> Self {
        if time_limit.is_some() || memory_limit_mb.is_some() {
            info!(
                time_limit = time_limit.map(|d| d.as_secs_f64()),
                memory_limit_mb = memory_limit_mb,
            );
        }
        Self {
            time_limit,
            memory_limit_mb,
            start_time: Instant::now(),
            peak_memory_usage_mb: None,
            last_check_time: Instant::now(),
        }
    }

    /// A condition with no limits; never terminates a search.
    pub fn unlimited() -> Self {
        Self::new(None, None)
    }

    pub fn should_terminate(&mut self) -> Option<Termination> {
        if let Some(time_limit) = self.time_limit {
            if self.start_time.elapsed() > time_limit {
                return Some(Termination::TimeLimit);
            }
        }
        if let Some(memory_limit_mb) = self.memory_limit_mb {
            // Sampling memory is not free, only do it once a second.
            if self.last_check_time.elapsed() > Duration::from_secs(1) {
                self.last_check_time = Instant::now();
                let usage = memory_stats().map(|usage| usage.physical_mem / 1024 / 1024);
                self.peak_memory_usage_mb = self.peak_memory_usage_mb.max(usage);
                if usage.is_some_and(|usage| usage > memory_limit_mb) {
                    return Some(Termination::MemoryLimit);
                }
            }
        }
        None
    }

    pub fn finalise(&mut self) {
        info!(
            peak_recorded_memory_usage_mb = self.peak_memory_usage_mb,
            total_time_used = self.start_time.elapsed().as_secs_f64(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unlimited_condition_never_fires() {
        let mut condition = TerminationCondition::unlimited();
        for _ in 0..100 {
            assert_eq!(condition.should_terminate(), None);
        }
    }

    #[test]
    fn elapsed_time_limit_fires() {
        let mut condition = TerminationCondition::new(Some(Duration::ZERO), None);
        std::thread::sleep(Duration::from_millis(1));
        assert_eq!(condition.should_terminate(), Some(Termination::TimeLimit));
    }
}
