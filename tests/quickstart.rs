#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use clap::Parser;
    use tasklist::commands::quickstart::QuickstartArgs;
    use tasklist::libs::config::Config;
    use tasklist::libs::export::{ExportFormat, EXPORT_COLUMNS};
    use tasklist::libs::task::ViewMode;

    #[derive(Debug, Parser)]
    struct QuickstartCli {
        #[command(flatten)]
        args: QuickstartArgs,
    }

    fn parse(args: &[&str]) -> QuickstartArgs {
        let argv = std::iter::once("todo").chain(args.iter().copied());
        QuickstartCli::try_parse_from(argv).unwrap().args
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 3).unwrap()
    }

    #[test]
    fn test_stdout_payload_is_plain_csv() {
        let args = parse(&["--complete", "1", "--view", "pending-only", "--export", "csv", "--stdout"]);
        let config = Config::default();
        let session = args.example_session(today()).unwrap();
        assert_eq!(session.view_mode(), ViewMode::PendingOnly);

        let payload = args.stdout_payload(&session, &config).unwrap().unwrap();

        let mut reader = csv::ReaderBuilder::new().has_headers(false).from_reader(payload.as_bytes());
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), session.store().len() + 1);
        assert_eq!(records[0].iter().collect::<Vec<_>>(), EXPORT_COLUMNS.to_vec());
        assert_eq!(&records[1][6], "true");
    }

    #[test]
    fn test_no_stdout_payload_without_flag() {
        let args = parse(&["--export", "json"]);
        let session = args.example_session(today()).unwrap();
        assert_eq!(args.stdout_payload(&session, &Config::default()).unwrap(), None);
    }

    #[test]
    fn test_bare_export_uses_configured_format() {
        let mut config = Config::default();
        config.export.format = ExportFormat::Csv;

        assert_eq!(parse(&["--export"]).export_format(&config), Some(ExportFormat::Csv));
        assert_eq!(parse(&["--export", "json"]).export_format(&config), Some(ExportFormat::Json));
        assert_eq!(parse(&[]).export_format(&config), None);

        let args = parse(&["--export", "--stdout"]);
        let session = args.example_session(today()).unwrap();
        let payload = args.stdout_payload(&session, &config).unwrap().unwrap();
        assert!(payload.starts_with(&EXPORT_COLUMNS.join(",")));
    }

    #[test]
    fn test_stdout_conflicts_with_output_and_requires_export() {
        let argv = ["todo", "--export", "csv", "--stdout", "--output", "tasks.csv"];
        assert!(QuickstartCli::try_parse_from(argv).is_err());
        assert!(QuickstartCli::try_parse_from(["todo", "--stdout"]).is_err());
    }

    #[test]
    fn test_completing_unknown_example_fails() {
        let args = parse(&["--complete", "42"]);
        let error = args.example_session(today()).unwrap_err();
        assert!(error.to_string().contains("Task with ID 42 not found."));
    }
}
