//! # File System Operations Module / 文件系统操作模块
//!
//! Path resolution for the test-case file and the target program.
//!
//! 测试用例文件和目标程序的路径解析。

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::infra::t;

/// Splits a test-case path into its canonical containing directory and base name.
/// Fails if the path does not name an existing regular file.
///
/// # Arguments
/// * `path` - Path to the test-case file, relative or absolute
///
/// # Returns
/// `(directory, file_name)`
///
/// 将测试用例路径拆分为其规范化的所在目录和基本名称。
/// 如果路径不是一个已存在的普通文件，则返回错误。
pub fn locate_test_case(path: &Path) -> Result<(PathBuf, String)> {
    if !path.is_file() {
        bail!("{}", t!("error.tcf_not_found", path = path.display()));
    }

    let canonical = fs::canonicalize(path)
        .with_context(|| t!("error.tcf_dir_unresolved", path = path.display()).to_string())?;

    let (Some(dir), Some(file_name)) = (canonical.parent(), canonical.file_name()) else {
        bail!("{}", t!("error.tcf_dir_unresolved", path = path.display()));
    };

    Ok((dir.to_path_buf(), file_name.to_string_lossy().into_owned()))
}

/// Resolves the program to run. A program given with a path component is made
/// absolute so it still resolves once the child runs in the test-case
/// directory; a bare name is returned unchanged and looked up on `PATH`.
/// Symlinks are left alone so multi-call binaries keep their `argv[0]`.
///
/// 解析要运行的程序。带有路径部分的程序会被转换为绝对路径，
/// 以便子进程在测试用例目录中运行时仍能找到它；裸名称原样返回并在 `PATH` 中查找。
pub fn resolve_program(program: &str) -> Result<PathBuf> {
    let path = Path::new(program);
    if path.components().count() <= 1 && !path.is_absolute() {
        return Ok(path.to_path_buf());
    }

    let absolute = std::path::absolute(path)
        .with_context(|| t!("error.program_not_found", path = program).to_string())?;
    if !absolute.exists() {
        bail!("{}", t!("error.program_not_found", path = program));
    }
    Ok(absolute)
}
