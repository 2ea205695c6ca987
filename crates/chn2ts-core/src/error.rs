//! 错误类型（全部致命，流水线内不做捕获或重试）
use std::path::PathBuf;
use thiserror::Error;

/// 提取流程的错误分类
/// - NotFound：扫描根目录不存在或不是目录；
/// - Decode：候选文件不是合法 UTF-8 文本；
/// - Io：遍历或读取过程中的底层 IO 失败（权限等）。
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("输入目录不存在: {}", .0.display())]
    NotFound(PathBuf),

    #[error("文件不是合法 UTF-8 文本: {}", .0.display())]
    Decode(PathBuf),

    #[error("读取失败 {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
