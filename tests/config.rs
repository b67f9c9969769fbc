#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use taskman::libs::config::{Config, CONFIG_FILE_NAME};
    use taskman::libs::data_storage::DataStorage;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl ConfigTestContext {
        fn config_path(&self) -> PathBuf {
            self.temp_dir.path().join(CONFIG_FILE_NAME)
        }
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_gives_defaults(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(ctx.config_path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.confirm_delete);
        assert!(config.database.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read(ctx: &mut ConfigTestContext) {
        let config = Config {
            database: Some(PathBuf::from("/tmp/custom.db")),
            confirm_delete: false,
        };
        config.save_to(ctx.config_path()).unwrap();

        assert_eq!(Config::read_from(ctx.config_path()).unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_file_fills_defaults(ctx: &mut ConfigTestContext) {
        std::fs::write(ctx.config_path(), r#"{ "confirm_delete": false }"#).unwrap();

        let config = Config::read_from(ctx.config_path()).unwrap();
        assert!(!config.confirm_delete);
        assert!(config.database.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_malformed_file_is_an_error(ctx: &mut ConfigTestContext) {
        std::fs::write(ctx.config_path(), "not json").unwrap();
        assert!(Config::read_from(ctx.config_path()).is_err());
    }

    #[test]
    fn test_database_path_precedence() {
        let config = Config {
            database: Some(PathBuf::from("from-config.db")),
            confirm_delete: true,
        };

        let overridden = config.database_path(Some(Path::new("flag.db"))).unwrap();
        assert_eq!(overridden, PathBuf::from("flag.db"));
        assert_eq!(config.database_path(None).unwrap(), PathBuf::from("from-config.db"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_data_storage_creates_directory(ctx: &mut ConfigTestContext) {
        let base = ctx.temp_dir.path().join("nested").join("taskman");
        let storage = DataStorage::with_base_path(&base);

        let path = storage.get_path("tasks.db").unwrap();
        assert!(base.is_dir());
        assert_eq!(path, base.join("tasks.db"));
    }
}
