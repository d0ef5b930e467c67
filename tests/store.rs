#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use tasklist::libs::error::ValidationError;
    use tasklist::libs::store::TaskStore;
    use tasklist::libs::task::{Category, NewTask, Priority};

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap().and_hms_opt(9, 30, 0).unwrap()
    }

    fn new_task(title: &str) -> NewTask {
        NewTask::new(title, "", Category::Personal, Priority::Medium, None)
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = TaskStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.next_id(), 1);
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let mut store = TaskStore::with_clock(fixed_now);

        let ids: Vec<u32> = ["one", "two", "three", "four"]
            .iter()
            .map(|title| store.add(new_task(title)).unwrap().id)
            .collect();

        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(store.next_id(), 5);
    }

    #[test]
    fn test_add_sets_initial_state() {
        let mut store = TaskStore::with_clock(fixed_now);
        let due = NaiveDate::from_ymd_opt(2025, 2, 1);

        let task = store
            .add(NewTask::new("  File taxes  ", "  before April  ", Category::Work, Priority::Urgent, due))
            .unwrap();

        assert_eq!(task.title, "File taxes");
        assert_eq!(task.description, "before April");
        assert_eq!(task.category, Category::Work);
        assert_eq!(task.priority, Priority::Urgent);
        assert_eq!(task.due_date, due);
        assert!(!task.completed);
        assert_eq!(task.completed_at, None);
        assert_eq!(task.created_at, fixed_now());
        assert_eq!(store.tasks().last(), Some(&task));
    }

    #[test]
    fn test_add_rejects_blank_title_without_side_effects() {
        let mut store = TaskStore::with_clock(fixed_now);
        store.add(new_task("keep me")).unwrap();

        assert_eq!(store.add(new_task("")), Err(ValidationError::EmptyTitle));
        assert_eq!(store.add(new_task("   ")), Err(ValidationError::EmptyTitle));
        assert_eq!(store.add(new_task("\t\n")), Err(ValidationError::EmptyTitle));

        assert_eq!(store.len(), 1);
        assert_eq!(store.next_id(), 2);
        assert_eq!(store.add(new_task("next")).unwrap().id, 2);
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut store = TaskStore::with_clock(fixed_now);
        let first = store.add(new_task("first")).unwrap().id;
        let second = store.add(new_task("second")).unwrap().id;

        assert!(store.remove(second));
        assert!(store.remove(first));
        assert!(store.is_empty());

        let third = store.add(new_task("third")).unwrap().id;
        assert_eq!(third, 3);
    }

    #[test]
    fn test_complete_then_uncomplete_round_trip() {
        let mut store = TaskStore::with_clock(fixed_now);
        let id = store.add(new_task("Buy milk")).unwrap().id;

        assert!(store.complete(id));
        let task = store.find(id).unwrap();
        assert!(task.completed);
        assert_eq!(task.completed_at, Some(fixed_now()));

        assert!(store.uncomplete(id));
        let task = store.find(id).unwrap();
        assert!(!task.completed);
        assert_eq!(task.completed_at, None);
        assert_eq!(task.created_at, fixed_now());
    }

    #[test]
    fn test_toggles_are_noops_for_unknown_or_same_state() {
        let mut store = TaskStore::with_clock(fixed_now);
        let id = store.add(new_task("Walk")).unwrap().id;
        let snapshot = store.tasks().to_vec();

        assert!(!store.complete(99));
        assert!(!store.uncomplete(99));
        assert!(!store.uncomplete(id));
        assert!(!store.remove(99));

        assert_eq!(store.tasks(), snapshot.as_slice());
    }

    #[test]
    fn test_find() {
        let mut store = TaskStore::with_clock(fixed_now);
        store.add(new_task("a")).unwrap();
        let b = store.add(new_task("b")).unwrap();

        assert_eq!(store.find(b.id), Some(&b));
        assert_eq!(store.find(0), None);
        assert_eq!(store.find(42), None);
    }

    #[test]
    fn test_remove_keeps_order_of_others() {
        let mut store = TaskStore::with_clock(fixed_now);
        for title in ["a", "b", "c", "d"] {
            store.add(new_task(title)).unwrap();
        }

        assert!(store.remove(2));
        let titles: Vec<&str> = store.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_clear_completed_removes_only_completed() {
        let mut store = TaskStore::with_clock(fixed_now);
        let a = store.add(new_task("a")).unwrap().id;
        let b = store.add(new_task("b")).unwrap().id;
        let c = store.add(new_task("c")).unwrap().id;
        store.complete(b);

        assert_eq!(store.clear_completed(), 1);

        let ids: Vec<u32> = store.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![a, c]);
        assert!(store.find(b).is_none());
        assert_eq!(store.clear_completed(), 0);
    }
}
