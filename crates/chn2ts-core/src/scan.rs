//! 扫描主流程与编排
use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::ExtractError;
use crate::extract::extract_file;
use crate::generate::{build_table, render_table};
use crate::matcher::ChineseMatcher;
use crate::options::{ExtractOptions, ExtractStats};
use crate::types::{ExtractionIndex, FileExtraction};

/// 递归收集候选源文件
/// - 顺序即底层目录枚举顺序，不排序；
/// - 按文件名后缀（`.js` 等）匹配，大小写敏感；
/// - 根目录缺失返回 NotFound；遍历中任何错误直接中止，不做逐文件隔离。
pub fn collect_source_files(
    root: &Path,
    opts: &ExtractOptions,
) -> Result<Vec<PathBuf>, ExtractError> {
    if !root.is_dir() {
        return Err(ExtractError::NotFound(root.to_path_buf()));
    }

    let suffixes: Vec<String> = opts.extensions.iter().map(|e| format!(".{e}")).collect();

    let mut files = Vec::new();
    for entry in WalkDir::new(root).min_depth(1) {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf());
            ExtractError::Io {
                path,
                source: e.into(),
            }
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if suffixes.iter().any(|s| name.ends_with(s.as_str())) {
            files.push(entry.into_path());
        }
    }
    Ok(files)
}

/// 扫描 + 逐文件提取，聚合为索引与统计
fn run_extraction(
    root: &Path,
    opts: &ExtractOptions,
) -> Result<(ExtractionIndex, ExtractStats), ExtractError> {
    let matcher = ChineseMatcher::new();
    let mut stats = ExtractStats::default();
    let mut index = ExtractionIndex::new();

    for path in collect_source_files(root, opts)? {
        let runs = extract_file(&path, &matcher)?;
        stats.files_scanned += 1;
        if runs.is_empty() {
            continue;
        }
        index.push(FileExtraction {
            file: path,
            strings: runs,
        });
    }
    stats.files_matched = index.len();
    Ok((index, stats))
}

/// 对整棵目录树执行扫描与提取，返回提取索引
/// 零命中的文件不进入索引；索引顺序与遍历顺序一致。
pub fn extract_index(root: &Path, opts: &ExtractOptions) -> Result<ExtractionIndex, ExtractError> {
    run_extraction(root, opts).map(|(index, _)| index)
}

/// 执行完整流水线并将翻译表模块写入 `out`
/// 写出只在全量聚合成功之后发生；中途失败不会产生任何输出内容。
pub fn extract_and_write(
    root: &Path,
    out: &mut dyn Write,
    opts: &ExtractOptions,
) -> Result<ExtractStats> {
    let (index, mut stats) = run_extraction(root, opts)?;
    let table = build_table(&index);
    stats.entries_written = table.len();
    render_table(&table, out).context("write translations module")?;
    Ok(stats)
}

/// 将提取索引以 JSON 数组写出，文件顺序与遍历顺序一致
pub fn write_index_json(index: &ExtractionIndex, out: &mut dyn Write) -> Result<()> {
    serde_json::to_writer(&mut *out, index).context("serialize extraction index")?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::fs;

    fn write_file(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    fn file_names(files: &[PathBuf]) -> HashSet<String> {
        files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn filters_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "a.ts", "你好");
        write_file(dir.path(), "b.jsx", "世界");
        write_file(dir.path(), "c.md", "中文");
        write_file(dir.path(), "d.json", "{\"k\": \"中文\"}");

        let files = collect_source_files(dir.path(), &ExtractOptions::default()).unwrap();
        assert_eq!(
            file_names(&files),
            HashSet::from(["a.ts".to_string(), "b.jsx".to_string()])
        );
    }

    #[test]
    fn walks_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "src/pages/home.tsx", "首页");
        write_file(dir.path(), "src/util.js", "// 工具");

        let files = collect_source_files(dir.path(), &ExtractOptions::default()).unwrap();
        assert_eq!(
            file_names(&files),
            HashSet::from(["home.tsx".to_string(), "util.js".to_string()])
        );
    }

    #[test]
    fn suffix_match_is_case_sensitive() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "upper.TS", "你好");

        let files = collect_source_files(dir.path(), &ExtractOptions::default()).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn missing_root_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-dir");

        let err = collect_source_files(&missing, &ExtractOptions::default()).unwrap_err();
        assert!(matches!(err, ExtractError::NotFound(_)));
    }

    #[test]
    fn custom_extensions_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        write_file(dir.path(), "a.vue", "你好");
        write_file(dir.path(), "b.ts", "世界");

        let opts = ExtractOptions {
            extensions: vec!["vue".to_string()],
        };
        let files = collect_source_files(dir.path(), &opts).unwrap();
        assert_eq!(file_names(&files), HashSet::from(["a.vue".to_string()]));
    }
}
