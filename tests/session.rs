#[cfg(test)]
mod tests {
    use chrono::{Local, NaiveDate};
    use tasklist::libs::error::ValidationError;
    use tasklist::libs::session::Session;
    use tasklist::libs::task::{Category, CategoryFilter, Priority, Task, ViewMode};

    fn titles(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.title.clone()).collect()
    }

    #[test]
    fn test_session_starts_empty_with_default_filters() {
        let session = Session::new();
        assert!(session.store().is_empty());
        assert_eq!(session.view_mode(), ViewMode::AllTasks);
        assert_eq!(session.category_filter(), CategoryFilter::All);
        assert_eq!(session.compute_stats().completion_rate, None);
        assert_eq!(session.category_choices(), vec![CategoryFilter::All]);
    }

    #[test]
    fn test_add_task_rejects_blank_title() {
        let mut session = Session::new();
        let result = session.add_task("   ", "desc", Category::Work, Priority::High, None);
        assert_eq!(result, Err(ValidationError::EmptyTitle));
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_full_workflow() {
        let today = Local::now().date_naive();
        let mut session = Session::new();

        let milk = session.add_task("Buy milk", "", Category::Shopping, Priority::Medium, None).unwrap();
        let taxes = session.add_task("File taxes", "", Category::Work, Priority::Urgent, Some(today)).unwrap();
        let jog = session.add_task("Jog", "", Category::Health, Priority::Low, None).unwrap();

        assert_eq!(titles(&session.visible_tasks()), vec!["File taxes", "Buy milk", "Jog"]);

        assert!(session.complete_task(milk.id));
        assert_eq!(titles(&session.visible_tasks()), vec!["File taxes", "Jog", "Buy milk"]);

        let stats = session.compute_stats();
        assert_eq!((stats.total, stats.completed, stats.pending), (3, 1, 2));
        assert_eq!(stats.completion_rate, Some(33.3));

        session.set_view_mode(ViewMode::PendingOnly);
        assert_eq!(titles(&session.visible_tasks()), vec!["File taxes", "Jog"]);

        session.set_category_filter(CategoryFilter::Only(Category::Health));
        assert_eq!(titles(&session.visible_tasks()), vec!["Jog"]);

        assert!(session.uncomplete_task(milk.id));
        assert!(session.complete_task(jog.id));
        assert!(session.visible_tasks().is_empty());

        assert_eq!(session.clear_completed_tasks(), 1);
        assert!(session.delete_task(taxes.id));
        assert!(!session.delete_task(taxes.id));

        session.set_view_mode(ViewMode::AllTasks);
        session.set_category_filter(CategoryFilter::All);
        assert_eq!(titles(&session.visible_tasks()), vec!["Buy milk"]);
    }

    #[test]
    fn test_list_tasks_keeps_store_order() {
        let mut session = Session::new();
        session.add_task("low", "", Category::Work, Priority::Low, None).unwrap();
        session.add_task("urgent", "", Category::Work, Priority::Urgent, None).unwrap();

        let listed = session.list_tasks(ViewMode::AllTasks, Category::Work.into());
        assert_eq!(titles(&listed), vec!["low", "urgent"]);
    }

    #[test]
    fn test_seed_examples() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let mut session = Session::new();

        let seeded = session.seed_examples(today);

        assert_eq!(seeded.len(), 3);
        assert_eq!(seeded[0].title, "Buy groceries");
        assert_eq!(seeded[0].description, "Milk, bread, fruits");
        assert_eq!(seeded[0].category, Category::Shopping);
        assert_eq!(seeded[1].title, "Finish project report");
        assert_eq!(seeded[1].priority, Priority::High);
        assert_eq!(seeded[1].due_date, Some(today));
        assert_eq!(seeded[2].category, Category::Health);
        assert_eq!(
            session.category_choices(),
            vec![
                CategoryFilter::All,
                CategoryFilter::Only(Category::Work),
                CategoryFilter::Only(Category::Shopping),
                CategoryFilter::Only(Category::Health),
            ]
        );
    }

    #[test]
    fn test_exports_reflect_store() {
        let mut session = Session::new();
        session.seed_examples(NaiveDate::from_ymd_opt(2025, 3, 3).unwrap());

        let json = session.export_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 3);
        assert_eq!(value[1]["due_date"], "2025-03-03");

        let csv_text = session.export_csv().unwrap();
        let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
        assert_eq!(reader.records().count(), 3);
    }
}
