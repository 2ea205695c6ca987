//! 提取选项与统计信息（模块）

/// 提取选项
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// 识别的文件扩展名（不含点）；按文件名后缀匹配，大小写敏感
    pub extensions: Vec<String>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            extensions: ["js", "jsx", "ts", "tsx"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// 运行统计信息（便于 CLI 打印）
#[derive(Debug, Default, Clone)]
pub struct ExtractStats {
    pub files_scanned: usize,
    pub files_matched: usize,
    pub entries_written: usize,
}
