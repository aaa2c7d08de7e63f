#[cfg(test)]
mod tests {
    use changelog::{
        ChangeEntry, Changelog, ChangelogDate, HistorySelector, Settings, ast_to_object, format,
        stringify, tokenize,
    };
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    const EXISTING: &str = "Release notes for the app.\n\n# 2024.8.12\n\n## Fixed\n\n- Old fix\n\n## Added\n\n- Old feature\n\n\n\n# 2024.8.14\n\n## Changed\n\n- Newer change\n";

    fn settings() -> Settings {
        Settings {
            change_categories: vec!["Added".into(), "Changed".into(), "Fixed".into()],
            ..Settings::default()
        }
    }

    fn write_changelog(dir: &Path, content: &str) {
        fs::write(dir.join("CHANGELOG.md"), content).unwrap();
    }

    fn read_changelog(dir: &Path) -> String {
        fs::read_to_string(dir.join("CHANGELOG.md")).unwrap()
    }

    fn date(label: &str) -> ChangelogDate {
        ChangelogDate::parse(label).unwrap()
    }

    #[test]
    fn test_add_session_on_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        write_changelog(temp_dir.path(), EXISTING);

        let mut changelog = Changelog::open_project(temp_dir.path(), settings()).unwrap();
        changelog
            .add_change(&ChangeEntry::new("Fixed", "Timezone bug"), date("2024.8.13"))
            .unwrap();
        changelog
            .add_change(&ChangeEntry::new("Added", "Export"), date("2024.8.13"))
            .unwrap();
        changelog
            .add_change(&ChangeEntry::new("Added", "Import"), date("2024.8.13"))
            .unwrap();
        changelog.save().unwrap();

        assert_eq!(
            read_changelog(temp_dir.path()),
            "Release notes for the app.\n\n\
             # 2024.8.14\n\n## Changed\n\n- Newer change\n\n\
             # 2024.8.13\n\n## Added\n\n- Export\n- Import\n\n## Fixed\n\n- Timezone bug\n\n\
             # 2024.8.12\n\n## Added\n\n- Old feature\n\n## Fixed\n\n- Old fix\n"
        );
    }

    #[test]
    fn test_format_file_is_stable() {
        let temp_dir = TempDir::new().unwrap();
        write_changelog(temp_dir.path(), EXISTING);

        let mut changelog = Changelog::open_project(temp_dir.path(), settings()).unwrap();
        changelog.format();
        changelog.save().unwrap();
        let first = read_changelog(temp_dir.path());

        let mut reopened = Changelog::open_project(temp_dir.path(), settings()).unwrap();
        reopened.format();

        assert_eq!(reopened.to_markdown(), first);
        assert!(first.starts_with("Release notes for the app.\n\n# 2024.8.14\n\n"));
        assert!(first.ends_with("## Fixed\n\n- Old fix\n"));
    }

    #[test]
    fn test_untouched_text_round_trips() {
        let source = "# 2024.8.13\n\n## Added\n\n- A *styled* entry with `code`\n  continued on a second line\n- [x] done\n\nSee [the docs](https://example.com).\n\n| a | b |\n|---|---|\n| 1 | 2 |\n";

        let nodes = tokenize(source);

        assert_eq!(stringify(&nodes), source);
        assert_eq!(stringify(&format(&settings(), &nodes)), source);
    }

    #[test]
    fn test_latest_json_projection() {
        let temp_dir = TempDir::new().unwrap();
        write_changelog(temp_dir.path(), EXISTING);
        let changelog = Changelog::open_project(temp_dir.path(), settings()).unwrap();

        let latest = changelog.history(&HistorySelector::Latest);
        let object = ast_to_object(&latest);
        let json = serde_json::to_value(&object[0]).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "date": "2024.8.14", "categories": { "Changed": ["Newer change"] } })
        );
    }

    #[test]
    fn test_entries_follow_formatted_order() {
        let changelog = Changelog::parse("CHANGELOG.md", EXISTING, settings());

        let entries = changelog.entries();
        let dates: Vec<&str> = entries.iter().map(|e| e.date.as_str()).collect();
        let categories: Vec<&str> = entries[1].categories.iter().map(|(name, _)| name).collect();

        assert_eq!(dates, vec!["2024.8.14", "2024.8.12"]);
        assert_eq!(categories, vec!["Added", "Fixed"]);
    }

    #[test]
    fn test_history_for_missing_date_is_empty() {
        let changelog = Changelog::parse("CHANGELOG.md", EXISTING, settings());

        assert!(changelog
            .history(&HistorySelector::Date("2024.8.13".to_string()))
            .is_empty());
    }

    #[test]
    fn test_malformed_category_keeps_file() {
        let temp_dir = TempDir::new().unwrap();
        let source = "# 2024.8.13\n\n## Added\n\nA paragraph instead of a list\n";
        write_changelog(temp_dir.path(), source);

        let mut changelog = Changelog::open_project(temp_dir.path(), settings()).unwrap();
        let result = changelog.add_change(&ChangeEntry::new("Added", "x"), date("2024.8.13"));

        assert!(result.is_err());
        assert_eq!(changelog.to_markdown(), source);
        assert_eq!(read_changelog(temp_dir.path()), source);
    }
}
