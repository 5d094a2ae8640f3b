//! # 规则读取模块
//!
//! 从本地文件读取 AutoProxy 规则并按行拆分。
//! 文件缺失是面向用户的致命条件，由调用方统一上报并终止本次运行。

use std::fs;

use anyhow::{Context, Result};

/// 读取规则文件，按行返回
///
/// 行尾按 `\n` / `\r\n` 归一化。
pub fn read_rules(path: &str) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read rules file: {} (please create it)", path))?;
    Ok(content.lines().map(str::to_string).collect())
}

// ========================================
// 测试模块
// ========================================
#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_path(name: &str) -> String {
        env::temp_dir()
            .join(format!("autoproxy2qx-{}", name))
            .to_string_lossy()
            .into_owned()
    }

    #[test]
    fn test_read_rules_splits_lines() {
        let path = temp_path("rules-lf.txt");
        fs::write(&path, "! comment\n||example.com^\n").unwrap();
        let lines = read_rules(&path).unwrap();
        assert_eq!(lines, vec!["! comment", "||example.com^"]);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_read_rules_normalizes_crlf() {
        let path = temp_path("rules-crlf.txt");
        fs::write(&path, "||a.com\r\n||b.com\r\n").unwrap();
        let lines = read_rules(&path).unwrap();
        assert_eq!(lines, vec!["||a.com", "||b.com"]);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_error_names_path() {
        let err = read_rules("no-such-rules-file.txt").unwrap_err();
        assert!(format!("{:#}", err).contains("no-such-rules-file.txt"));
    }
}
