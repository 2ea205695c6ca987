//! 中文文案提取库
//!
//! 设计要点：
//! - 扫描 → 提取 → 生成 三段式单遍流水线，各阶段为纯函数，无共享状态。
//! - 逐行匹配 CJK 基本区（U+4E00–U+9FFF）的连续中文串，跨行永不合并。
//! - 不做任何去重：同文件、跨文件的重复文案各自保留，键号全局连续递增。
//! - 全程快速失败：目录缺失、非 UTF-8、读写错误均中止整个运行，不产生部分输出。

mod error;
mod options;
mod types;
mod matcher;
mod extract;
mod generate;
mod scan;

pub use error::ExtractError;
pub use extract::extract_file;
pub use generate::{build_table, render_table};
pub use matcher::ChineseMatcher;
pub use options::{ExtractOptions, ExtractStats};
pub use scan::{collect_source_files, extract_and_write, extract_index, write_index_json};
pub use types::{ExtractionIndex, FileExtraction, TranslationEntry, TranslationTable};
