//! # Core Module / 核心模块
//!
//! This module contains the core functionality of the harness:
//! directive parsing, data models, configuration, verification and execution.
//!
//! 此模块包含测试工具的核心功能：
//! 指令解析、数据模型、配置、验证和执行。

pub mod config;
pub mod directive;
pub mod execution;
pub mod models;
pub mod verifier;

// Re-exports
pub use config::HarnessConfig;
pub use directive::{parse_test_case, Directive, Expectations};
pub use execution::run_target;
pub use models::{ExecutionResult, Failure, Termination, TestCase, VerificationOutcome};
pub use verifier::verify;
