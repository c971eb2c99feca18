//! # TCF Runner Library / TCF Runner 库
//!
//! This library provides the core functionality for the `tcf-runner` tool,
//! a directive-driven test harness. It runs a program against a test-case
//! file (TCF), captures the program's merged output and exit status, and checks
//! them against the `# CHECK:`, `# EXIT` and `# ABORT` directives in the file.
//!
//! 此库为 `tcf-runner` 工具提供核心功能，这是一个由指令驱动的测试工具。
//! 它针对测试用例文件（TCF）运行程序，捕获程序合并后的输出和退出状态，
//! 并根据文件中的 `# CHECK:`、`# EXIT` 和 `# ABORT` 指令进行检查。
//!
//! ## Modules / 模块
//!
//! - `core` - Directive parsing, data models, verification and execution
//! - `infra` - Process spawning/capture and file system helpers
//! - `reporting` - Console and JSON reporting
//! - `cli` / `commands` - Command-line interface
//!
//! - `core` - 指令解析、数据模型、验证和执行
//! - `infra` - 进程派生/捕获以及文件系统辅助功能
//! - `reporting` - 控制台和 JSON 报告
//! - `cli` / `commands` - 命令行接口

pub mod cli;
pub mod commands;
pub mod core;
pub mod infra;
pub mod reporting;

// Re-export commonly used items
pub use crate::core::config;
pub use crate::core::directive;
pub use crate::core::models;
pub use crate::core::verifier;

/// Resolves the UI language from the system locale.
///
/// It attempts to match the full locale (e.g., "zh-CN"), then just the
/// language code (e.g., "en"), and finally falls back to "en".
pub fn detect_locale() -> String {
    let locale = sys_locale::get_locale().unwrap_or_else(|| "en".to_string());
    resolve_locale(&locale)
}

/// The locales bundled from `locales/`.
pub fn available_locales() -> Vec<&'static str> {
    rust_i18n::available_locales!()
}

/// Maps a requested locale onto one of the bundled translations.
///
/// 将请求的语言区域映射到内置的某个翻译上。
pub fn resolve_locale(requested: &str) -> String {
    let available_locales = available_locales();

    if available_locales.iter().any(|available| *available == requested) {
        return requested.to_string();
    }

    requested
        .split(['-', '_'])
        .next()
        .and_then(|lang_code| {
            available_locales
                .iter()
                .find(|available| available.split('-').next() == Some(lang_code))
        })
        .map(|found| found.to_string())
        .unwrap_or_else(|| "en".to_string())
}

// Initialize i18n
rust_i18n::i18n!("locales", fallback = "en");
