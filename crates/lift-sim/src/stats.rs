//! End-of-run statistics.

use std::fmt;

use lift_entities::Person;

/// Aggregate statistics for one completed run.
///
/// Wait-time figures cover *completed* people only — anyone still waiting
/// or in transit when the run ends contributes to `total_people` but not to
/// `max_wait` or `avg_wait`.
#[derive(Clone, Debug, PartialEq)]
pub struct RunStats {
    /// Rounds actually executed.
    pub num_rounds: u64,
    /// People ever introduced into the simulation.
    pub total_people: usize,
    /// People who reached their target floor.
    pub people_completed: usize,
    /// Longest wait among completed people (0 if none completed).
    pub max_wait: u32,
    /// Mean wait among completed people (0.0 if none completed).
    pub avg_wait: f64,
}

impl RunStats {
    /// Summarize a finished run from its completed-person records.
    pub fn compute(num_rounds: u64, total_people: usize, completed: &[Person]) -> Self {
        let people_completed = completed.len();
        let max_wait = completed.iter().map(|p| p.wait_time).max().unwrap_or(0);
        let avg_wait = if people_completed == 0 {
            0.0
        } else {
            let total: u64 = completed.iter().map(|p| u64::from(p.wait_time)).sum();
            total as f64 / people_completed as f64
        };

        RunStats {
            num_rounds,
            total_people,
            people_completed,
            max_wait,
            avg_wait,
        }
    }
}

impl fmt::Display for RunStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rounds: {}/{} people delivered, max wait {}, avg wait {:.2}",
            self.num_rounds, self.people_completed, self.total_people, self.max_wait, self.avg_wait
        )
    }
}
