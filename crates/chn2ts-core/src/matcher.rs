//! 中文匹配器
use regex::Regex;

/// CJK 基本区（U+4E00–U+9FFF）连续串的匹配器，每次运行编译一次后复用
///
/// 该区块同时覆盖日文汉字与韩文汉字；扩展区（Ext-A/B 等）与
/// 字符串字面量里的转义形式（`\uXXXX`）不在识别范围内。
#[derive(Debug, Clone)]
pub struct ChineseMatcher {
    re: Regex,
}

impl ChineseMatcher {
    pub fn new() -> Self {
        let re = Regex::new(r"[\u{4e00}-\u{9fff}]+").expect("compile chinese pattern");
        Self { re }
    }

    /// 返回一行文本中的全部中文连续串，按出现位置从左到右
    pub fn runs_in_line<'t>(&self, line: &'t str) -> Vec<&'t str> {
        self.re.find_iter(line).map(|m| m.as_str()).collect()
    }
}

impl Default for ChineseMatcher {
    fn default() -> Self {
        Self::new()
    }
}
