//! # Config Module Unit Tests / Config 模块单元测试
//!
//! Tests for loading the TOML configuration and merging command-line overrides.
//!
//! 测试加载 TOML 配置以及合并命令行覆盖项。

mod common;

use common::scratch_dir;
use std::fs;
use std::path::PathBuf;
use tcf_runner::config::{load_config, HarnessConfig};

#[cfg(test)]
mod deserialization_tests {
    use super::*;

    #[test]
    fn test_empty_config() {
        let config: HarnessConfig = toml::from_str("").unwrap();
        assert_eq!(config, HarnessConfig::default());
    }

    #[test]
    fn test_full_config() {
        let toml_str = r#"
            language = "zh-CN"
            timeout_secs = 30
            report = "out/report.json"
        "#;
        let config: HarnessConfig = toml::from_str(toml_str).unwrap();

        assert_eq!(config.language.as_deref(), Some("zh-CN"));
        assert_eq!(config.timeout_secs, Some(30));
        assert_eq!(config.report, Some(PathBuf::from("out/report.json")));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let result: Result<HarnessConfig, _> = toml::from_str("timeout = 5\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let result: Result<HarnessConfig, _> = toml::from_str("timeout_secs = \"soon\"\n");
        assert!(result.is_err());
    }
}

#[cfg(test)]
mod merge_tests {
    use super::*;

    fn file_config() -> HarnessConfig {
        HarnessConfig {
            language: Some("zh-CN".to_string()),
            timeout_secs: Some(10),
            report: Some(PathBuf::from("from-file.json")),
        }
    }

    #[test]
    fn test_flags_override_file() {
        let merged = file_config().merged_with(
            Some("en".to_string()),
            Some(2),
            Some(PathBuf::from("from-flag.json")),
        );
        assert_eq!(merged.language.as_deref(), Some("en"));
        assert_eq!(merged.timeout_secs, Some(2));
        assert_eq!(merged.report, Some(PathBuf::from("from-flag.json")));
    }

    #[test]
    fn test_file_values_fill_gaps() {
        let merged = file_config().merged_with(None, None, None);
        assert_eq!(merged, file_config());
    }

    #[test]
    fn test_defaults_without_file() {
        let merged = HarnessConfig::default().merged_with(None, Some(3), None);
        assert_eq!(merged.language, None);
        assert_eq!(merged.timeout_secs, Some(3));
        assert_eq!(merged.report, None);
    }
}

#[cfg(test)]
mod load_tests {
    use super::*;

    #[test]
    fn test_load_from_file() {
        let dir = scratch_dir();
        let path = dir.path().join("harness.toml");
        fs::write(&path, "timeout_secs = 7\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.timeout_secs, Some(7));
    }

    #[test]
    fn test_missing_file() {
        let dir = scratch_dir();
        let err = load_config(&dir.path().join("absent.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to read config file"));
    }

    #[test]
    fn test_invalid_toml() {
        let dir = scratch_dir();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[[not closed\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse config file"));
    }
}
