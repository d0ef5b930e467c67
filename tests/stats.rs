#[cfg(test)]
mod tests {
    use tasklist::libs::stats::{stats, Stats};
    use tasklist::libs::store::TaskStore;
    use tasklist::libs::task::{Category, NewTask, Priority};

    fn store_with(total: u32, completed: u32) -> TaskStore {
        let mut store = TaskStore::new();
        for i in 0..total {
            let id = store
                .add(NewTask::new(&format!("task {}", i), "", Category::Other, Priority::Low, None))
                .unwrap()
                .id;
            if i < completed {
                store.complete(id);
            }
        }
        store
    }

    #[test]
    fn test_stats_of_empty_collection() {
        let result = stats(&[]);
        assert_eq!(
            result,
            Stats {
                total: 0,
                completed: 0,
                pending: 0,
                completion_rate: None,
            }
        );
    }

    #[test]
    fn test_stats_counts_and_rate() {
        let store = store_with(3, 1);
        let result = stats(store.tasks());
        assert_eq!(result.total, 3);
        assert_eq!(result.completed, 1);
        assert_eq!(result.pending, 2);
        assert_eq!(result.completion_rate, Some(33.3));
    }

    #[test]
    fn test_stats_rate_bounds() {
        assert_eq!(stats(store_with(4, 0).tasks()).completion_rate, Some(0.0));
        assert_eq!(stats(store_with(4, 4).tasks()).completion_rate, Some(100.0));
        assert_eq!(stats(store_with(8, 7).tasks()).completion_rate, Some(87.5));
        assert_eq!(stats(store_with(7, 1).tasks()).completion_rate, Some(14.3));
    }
}
