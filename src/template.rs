//! # 模板合并模块
//!
//! 将翻译出的规则片段替换进模板中的占位符。
//! 占位符缺失时退化为追加到文末，不视为错误；
//! 两种出口在结果类型上可区分，调用方据此向用户提示警告。

use std::fs;

use anyhow::{Context, Result};

/// 合并结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// 占位符被替换
    Replaced(String),
    /// 占位符缺失，片段被追加到文末
    Appended(String),
}

impl MergeOutcome {
    /// 取出合并后的完整文本
    pub fn into_content(self) -> String {
        match self {
            MergeOutcome::Replaced(content) | MergeOutcome::Appended(content) => content,
        }
    }
}

/// 将规则片段合并进模板文本
pub fn merge_snippet(template: &str, snippet: &str, placeholder: &str) -> MergeOutcome {
    if template.contains(placeholder) {
        MergeOutcome::Replaced(template.replace(placeholder, snippet))
    } else {
        MergeOutcome::Appended(format!("{}\n{}", template, snippet))
    }
}

/// 读取模板文件并合并规则片段
pub fn merge_template_file(path: &str, snippet: &str, placeholder: &str) -> Result<MergeOutcome> {
    let template = fs::read_to_string(path)
        .with_context(|| format!("Failed to read template file: {}", path))?;
    Ok(merge_snippet(&template, snippet, placeholder))
}
