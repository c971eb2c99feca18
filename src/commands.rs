//! # Commands Module / 命令模块
//!
//! Orchestration behind the command-line interface.
//!
//! 命令行接口背后的编排逻辑。

pub mod run;
