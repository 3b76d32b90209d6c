#[cfg(test)]
mod tests {
    use todo_cli::libs::config::{
        normalize_base_url, validate_base_url, ApiConfig, Config, CONFIG_FILE_NAME, DEFAULT_API_URL,
    };
    use todo_cli::libs::data_storage::DataStorage;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Points the platform data directory at a temporary folder.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        base_url: String,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _temp_dir: temp_dir,
                base_url: "https://todo.example.com/api/todo".to_string(),
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.api.is_none());
        assert_eq!(ApiConfig::default().base_url, DEFAULT_API_URL);
    }

    // The only test touching the data directory: HOME is process-wide.
    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_file_lifecycle(ctx: &mut ConfigTestContext) {
        assert_eq!(Config::read().unwrap(), Config::default());

        Config::default().save().unwrap();
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(!contents.contains("api"));

        let config = Config {
            api: Some(ApiConfig::new(&ctx.base_url)),
        };
        config.save().unwrap();
        let read_config = Config::read().unwrap();
        assert_eq!(read_config.api.unwrap().base_url, ctx.base_url);

        std::fs::write(&path, "{ not json").unwrap();
        assert!(Config::read().is_err());
    }

    #[test]
    fn test_resolve_api_precedence() {
        let config = Config {
            api: Some(ApiConfig::new("http://files.example.com/todo")),
        };

        assert_eq!(
            config.resolve_api(Some("http://env.example.com/todo/".to_string())).base_url,
            "http://env.example.com/todo"
        );
        assert_eq!(config.resolve_api(Some("  ".to_string())).base_url, "http://files.example.com/todo");
        assert_eq!(config.resolve_api(None).base_url, "http://files.example.com/todo");
        assert_eq!(Config::default().resolve_api(None).base_url, DEFAULT_API_URL);
    }

    #[test]
    fn test_base_url_normalization_and_validation() {
        assert_eq!(normalize_base_url(" http://localhost:8080/api/todo// "), "http://localhost:8080/api/todo");
        assert!(validate_base_url("https://todo.example.com/api/todo").is_ok());
        assert!(validate_base_url("ftp://todo.example.com").is_err());
        assert!(validate_base_url("not a url").is_err());
    }
}
