//! # 行分类器
//!
//! 翻译的第一阶段：把一行原始 AutoProxy 文本分类为带标签的变体，
//! 并完成前后缀清理。形态识别（CIDR / 域名）由第二阶段负责，
//! 见 [`super::translator`]。

/// 一行 AutoProxy 文本的分类结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// 空行
    Blank,
    /// 注释行（以 `!` 开头）
    Comment,
    /// 小节标题行（以 `[` 开头）
    Header,
    /// 白名单规则（`@@` 前缀），携带清理后的模式串
    Whitelist(String),
    /// 黑名单规则（默认），携带清理后的模式串
    Blacklist(String),
}

/// 分类单行文本并清理匹配锚点
///
/// 先去掉 `@@` 白名单标记（若有），再做与黑白名单无关的统一清理：
/// 行首的 `|` / `||` 起始锚点、行首的 `.`、以及行尾的 `^` 分隔符锚点。
pub fn classify_line(raw: &str) -> LineClass {
    let line = raw.trim();

    if line.is_empty() {
        return LineClass::Blank;
    }
    if line.starts_with('!') {
        return LineClass::Comment;
    }
    if line.starts_with('[') {
        return LineClass::Header;
    }

    match line.strip_prefix("@@") {
        Some(rest) => LineClass::Whitelist(clean_pattern(rest)),
        None => LineClass::Blacklist(clean_pattern(line)),
    }
}

/// 去掉 AutoProxy 的匹配锚点，保留纯模式串
fn clean_pattern(pattern: &str) -> String {
    pattern
        .trim_start_matches('|')
        .trim_start_matches('.')
        .trim_end_matches('^')
        .to_string()
}

// ========================================
// 测试模块
// ========================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_lines() {
        assert_eq!(classify_line(""), LineClass::Blank);
        assert_eq!(classify_line("   "), LineClass::Blank);
        assert_eq!(classify_line("! this is a comment"), LineClass::Comment);
        assert_eq!(classify_line("!---- section ----"), LineClass::Comment);
        assert_eq!(classify_line("[AutoProxy 0.2.9]"), LineClass::Header);
    }

    #[test]
    fn test_whitelist_marker() {
        assert_eq!(
            classify_line("@@||example.com"),
            LineClass::Whitelist("example.com".to_string())
        );
        // 标记只在行首生效
        assert_eq!(
            classify_line("||example.com"),
            LineClass::Blacklist("example.com".to_string())
        );
    }

    #[test]
    fn test_anchor_cleanup() {
        assert_eq!(
            classify_line("|http://example.com"),
            LineClass::Blacklist("http://example.com".to_string())
        );
        assert_eq!(
            classify_line("||example.com^"),
            LineClass::Blacklist("example.com".to_string())
        );
        assert_eq!(
            classify_line(".example.com"),
            LineClass::Blacklist("example.com".to_string())
        );
        assert_eq!(
            classify_line("||.example.com"),
            LineClass::Blacklist("example.com".to_string())
        );
    }

    #[test]
    fn test_cleanup_same_for_both_policies() {
        // 黑白名单使用完全相同的清理逻辑
        let black = classify_line("||cdn.example.com^");
        let white = classify_line("@@||cdn.example.com^");
        assert_eq!(black, LineClass::Blacklist("cdn.example.com".to_string()));
        assert_eq!(white, LineClass::Whitelist("cdn.example.com".to_string()));
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(
            classify_line("  ||example.com^  "),
            LineClass::Blacklist("example.com".to_string())
        );
    }
}
