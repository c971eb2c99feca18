//! # Infrastructure Module / 基础设施模块
//!
//! This module provides infrastructure services for the harness,
//! including process execution with output capture and file system helpers.
//!
//! 此模块为测试工具提供基础设施服务，
//! 包括带输出捕获的进程执行和文件系统辅助功能。

pub mod command;
pub mod fs;

// Re-export i18n functions for easier access
pub use rust_i18n::t;
