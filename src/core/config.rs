//! # Configuration Module / 配置模块
//!
//! Optional TOML configuration for the harness. Every field can be overridden
//! from the command line; a flag always wins over the file.
//!
//! 测试工具的可选 TOML 配置。每个字段都可以通过命令行覆盖；命令行参数总是优先于配置文件。
//!
//! ```toml
//! language = "en"
//! timeout_secs = 30
//! report = "target/tcf-report.json"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::infra::t;

/// Settings loaded from the configuration file.
/// 从配置文件加载的设置。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HarnessConfig {
    /// The language for harness messages (e.g., "en", "zh-CN").
    /// 测试工具消息的语言（例如 "en", "zh-CN"）。
    #[serde(default)]
    pub language: Option<String>,

    /// Kill the target program after this many seconds.
    /// 目标程序运行超过该秒数后将被终止。
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Where to write the JSON verification report.
    /// JSON 验证报告的写入位置。
    #[serde(default)]
    pub report: Option<PathBuf>,
}

impl HarnessConfig {
    /// Applies command-line overrides on top of the file's values.
    ///
    /// 在配置文件的值之上应用命令行覆盖项。
    pub fn merged_with(
        self,
        language: Option<String>,
        timeout_secs: Option<u64>,
        report: Option<PathBuf>,
    ) -> Self {
        Self {
            language: language.or(self.language),
            timeout_secs: timeout_secs.or(self.timeout_secs),
            report: report.or(self.report),
        }
    }
}

/// Loads and parses a configuration file.
///
/// 加载并解析配置文件。
pub fn load_config(path: &Path) -> Result<HarnessConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| t!("error.config_read_failed", path = path.display()).to_string())?;
    let config: HarnessConfig = toml::from_str(&content)
        .with_context(|| t!("error.config_parse_failed", path = path.display()).to_string())?;
    Ok(config)
}
