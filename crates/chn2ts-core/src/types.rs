//! 公共类型（对外暴露）
use serde::Serialize;
use std::path::PathBuf;

/// 单个文件的提取结果：路径 + 按出现顺序（自上而下、从左到右）排列的中文串
#[derive(Debug, Clone, Serialize)]
pub struct FileExtraction {
    pub file: PathBuf,
    pub strings: Vec<String>,
}

/// 全量提取索引：仅收录命中至少一串中文的文件
/// 顺序即目录遍历顺序，用 Vec 而非映射以保序。
pub type ExtractionIndex = Vec<FileExtraction>;

/// 翻译表条目：合成键 `text_{n}` 与原文的配对
#[derive(Debug, Clone, Serialize)]
pub struct TranslationEntry {
    pub key: String,
    pub value: String,
}

/// 翻译表：条目有序，键号从 1 起连续无空洞
pub type TranslationTable = Vec<TranslationEntry>;
