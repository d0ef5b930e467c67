//! Completion statistics over a set of tasks.

use super::task::Task;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Percentage of completed tasks rounded to one decimal place.
    /// `None` when there are no tasks.
    pub completion_rate: Option<f64>,
}

pub fn stats(tasks: &[Task]) -> Stats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|task| task.completed).count();

    Stats {
        total,
        completed,
        pending: total - completed,
        completion_rate: completion_rate(completed, total),
    }
}

fn completion_rate(completed: usize, total: usize) -> Option<f64> {
    if total == 0 {
        return None;
    }
    let rate = completed as f64 / total as f64 * 100.0;
    Some((rate * 10.0).round() / 10.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_rate_rounding() {
        assert_eq!(completion_rate(1, 3), Some(33.3));
        assert_eq!(completion_rate(2, 3), Some(66.7));
        assert_eq!(completion_rate(0, 4), Some(0.0));
        assert_eq!(completion_rate(4, 4), Some(100.0));
    }

    #[test]
    fn test_completion_rate_zero_total() {
        assert_eq!(completion_rate(0, 0), None);
        assert_eq!(stats(&[]), Stats::default());
    }
}
