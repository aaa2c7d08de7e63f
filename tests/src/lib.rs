#[cfg(test)]
mod tests {
    use changelog::{
        ChangeEntry, Changelog, ChangelogDate, ChangelogError, SETTINGS_FILE, Settings,
    };
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn init_project(dir: &Path, categories: &[&str]) -> Settings {
        let settings = Settings {
            path: "docs/CHANGELOG.md".to_string(),
            timezone: "America/Chicago".to_string(),
            change_categories: categories.iter().map(ToString::to_string).collect(),
        };
        fs::create_dir_all(dir.join("docs")).unwrap();
        settings.save(dir).unwrap();
        settings
    }

    #[test]
    fn test_init_writes_four_space_json() {
        let temp_dir = TempDir::new().unwrap();
        init_project(temp_dir.path(), &["Added", "Fixed"]);

        let written = fs::read_to_string(temp_dir.path().join(SETTINGS_FILE)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();

        assert_eq!(value["path"], "docs/CHANGELOG.md");
        assert_eq!(value["timezone"], "America/Chicago");
        assert_eq!(value["changeCategories"], serde_json::json!(["Added", "Fixed"]));
        assert!(written.contains("\n    \"path\""));
    }

    #[test]
    fn test_second_init_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        init_project(temp_dir.path(), &["Added"]);

        let result = Settings::default().save(temp_dir.path());

        assert!(matches!(result, Err(ChangelogError::AlreadyInitialized(_))));
    }

    #[test]
    fn test_settings_written_by_hand_are_loaded() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(SETTINGS_FILE),
            r#"{"timezone": "UTC", "changeCategories": ["Added", "Removed"]}"#,
        )
        .unwrap();

        let settings = Settings::load(temp_dir.path()).unwrap().unwrap();

        assert_eq!(settings.path, "CHANGELOG.md");
        assert_eq!(settings.change_categories, vec!["Added", "Removed"]);
    }

    #[test]
    fn test_today_uses_configured_zone() {
        let temp_dir = TempDir::new().unwrap();
        let settings = init_project(temp_dir.path(), &["Added"]);
        let changelog = Changelog::open_project(temp_dir.path(), settings.clone()).unwrap();

        let expected = ChangelogDate::today(settings.time_zone().unwrap());

        assert_eq!(changelog.today().unwrap(), expected);
    }

    #[test]
    fn test_changelog_lives_at_configured_path() {
        let temp_dir = TempDir::new().unwrap();
        let settings = init_project(temp_dir.path(), &["Added", "Fixed"]);

        let mut changelog = Changelog::open_project(temp_dir.path(), settings).unwrap();
        let date = ChangelogDate::parse("2024.8.13").unwrap();
        changelog
            .add_change(&ChangeEntry::new("Fixed", "Crash on start"), date)
            .unwrap();
        changelog.save().unwrap();

        let written = fs::read_to_string(temp_dir.path().join("docs/CHANGELOG.md")).unwrap();
        assert_eq!(written, "# 2024.8.13\n\n## Fixed\n\n- Crash on start\n");
    }
}
