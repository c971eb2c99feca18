//! # Reporting Module / 报告模块
//!
//! This module displays verification results on the console and writes
//! machine-readable JSON reports.
//!
//! 此模块在控制台显示验证结果，并写入机器可读的 JSON 报告。

pub mod console;
pub mod json;

// Re-export common reporting functions
pub use console::{echo_output, print_outcome, print_run_header};
pub use json::{write_report, VerificationReport};
