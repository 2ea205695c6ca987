//! 翻译表生成与 TS 模块渲染
use std::io::Write;

use crate::types::{ExtractionIndex, TranslationEntry, TranslationTable};

/// 为索引里的每个中文串分配全局递增的合成键
/// 文件按索引顺序、串按文件内提取顺序，键号从 `text_1` 起连续无空洞。
pub fn build_table(index: &ExtractionIndex) -> TranslationTable {
    let mut table = TranslationTable::new();
    let mut next = 1usize;
    for file in index {
        for value in &file.strings {
            table.push(TranslationEntry {
                key: format!("text_{next}"),
                value: value.clone(),
            });
            next += 1;
        }
    }
    table
}

/// 将翻译表渲染为 TS 模块文本（对象字面量 + 默认导出）
/// 值按原样嵌入，不做任何转义；空表仍渲染完整的空对象与导出语句。
pub fn render_table(table: &TranslationTable, out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "const translations = {{")?;
    for entry in table {
        writeln!(out, "  \"{}\": \"{}\",", entry.key, entry.value)?;
    }
    writeln!(out, "}};")?;
    writeln!(out)?;
    writeln!(out, "export default translations;")?;
    Ok(())
}
