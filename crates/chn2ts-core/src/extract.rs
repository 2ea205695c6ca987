//! 单文件提取引擎
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::ExtractError;
use crate::matcher::ChineseMatcher;

/// 以 UTF-8 读取整个文件并逐行提取中文串
/// - 逐行匹配：换行两侧的中文永不拼接为同一串；
/// - 不去重：同一文件内的重复文案逐条保留；
/// - 非 UTF-8 内容返回 Decode 错误，整个运行随之中止。
pub fn extract_file(path: &Path, matcher: &ChineseMatcher) -> Result<Vec<String>, ExtractError> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::InvalidData => ExtractError::Decode(path.to_path_buf()),
        _ => ExtractError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let mut runs = Vec::new();
    for line in content.lines() {
        for m in matcher.runs_in_line(line) {
            runs.push(m.to_string());
        }
    }
    Ok(runs)
}
