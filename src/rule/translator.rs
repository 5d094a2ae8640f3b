//! # 规则翻译器
//!
//! 翻译的第二阶段：对清理后的模式串做形态识别，并重写为
//! Quantumult X 规则。识别顺序固定：先尝试 CIDR，命中即停；
//! 否则按域名处理（截掉 URL 路径后校验字符集）。
//! 两种形态都不命中的行被静默丢弃，任何输入都不会让翻译失败。

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::classifier::{classify_line, LineClass};
use crate::config::ConvertConfig;

/// CIDR 形态：IPv4 地址 + 掩码长度，允许前导斜杠（如 `/91.108.56.0/24`）
static CIDR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|/)(\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}/\d{1,2})").unwrap()
});

/// 合法域名字符集（拒绝通配符、正则元字符等高级语法）
static DOMAIN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9.-]+$").unwrap());

/// 规则策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RulePolicy {
    /// 走代理（黑名单规则）
    Proxy,
    /// 直连（白名单规则）
    Direct,
}

impl fmt::Display for RulePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RulePolicy::Proxy => write!(f, "proxy"),
            RulePolicy::Direct => write!(f, "direct"),
        }
    }
}

/// 输出规则类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuanxKind {
    /// IP-CIDR 规则
    IpCidr,
    /// 域名后缀规则（匹配域名及其全部子域名）
    HostSuffix,
}

impl fmt::Display for QuanxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuanxKind::IpCidr => write!(f, "IP-CIDR"),
            QuanxKind::HostSuffix => write!(f, "HOST-SUFFIX"),
        }
    }
}

/// 单条 Quantumult X 规则
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuanxRule {
    /// 规则类型
    pub kind: QuanxKind,
    /// 规则值（CIDR 段或域名）
    pub value: String,
    /// 策略
    pub policy: RulePolicy,
}

impl QuanxRule {
    /// 渲染为 Quantumult X 规则行，策略名称取自配置
    pub fn render(&self, config: &ConvertConfig) -> String {
        format!(
            "{}, {}, {}",
            self.kind,
            self.value,
            config.policy_name(self.policy)
        )
    }
}

/// 模式串的形态识别结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternShape {
    /// 串中嵌入的 IPv4 CIDR 段
    Cidr(String),
    /// 域名（已截掉 URL 路径）
    HostSuffix(String),
    /// 无法识别的形态
    Invalid,
}

/// 识别清理后模式串的形态
///
/// CIDR 优先：只要串中出现 CIDR 形态，即便还含有其它斜杠，
/// 也按 IP-CIDR 处理，不回退到域名分支。
pub fn resolve_pattern(pattern: &str) -> PatternShape {
    if let Some(caps) = CIDR_RE.captures(pattern) {
        return PatternShape::Cidr(caps[1].to_string());
    }

    // 域名规则：截掉第一个 `/` 之后的 URL 路径部分
    let domain = match pattern.split_once('/') {
        Some((host, _path)) => host,
        None => pattern,
    };

    if !domain.is_empty() && DOMAIN_RE.is_match(domain) {
        PatternShape::HostSuffix(domain.to_string())
    } else {
        PatternShape::Invalid
    }
}

/// 一次翻译的结果与统计
#[derive(Debug, Default)]
pub struct Translation {
    /// 按输入顺序排列的输出规则
    pub rules: Vec<QuanxRule>,
    /// 跳过的行数（空行/注释/标题）
    pub skipped: usize,
    /// 丢弃的行数（形态无法识别）
    pub dropped: usize,
}

/// 翻译一批原始规则行
///
/// 保持输入顺序。`debug` 打开时打印每行的转换过程。
pub fn translate_lines<'a, I>(lines: I, debug: bool) -> Translation
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = Translation::default();

    for raw in lines {
        let (pattern, policy) = match classify_line(raw) {
            LineClass::Blank | LineClass::Comment | LineClass::Header => {
                out.skipped += 1;
                continue;
            }
            LineClass::Whitelist(pattern) => (pattern, RulePolicy::Direct),
            LineClass::Blacklist(pattern) => (pattern, RulePolicy::Proxy),
        };

        if debug {
            println!(
                "Converting rule: {} -> {} (policy: {})",
                raw.trim(),
                pattern,
                policy
            );
        }

        match resolve_pattern(&pattern) {
            PatternShape::Cidr(cidr) => {
                if debug {
                    println!("  recognized as IP-CIDR: {}", cidr);
                }
                out.rules.push(QuanxRule {
                    kind: QuanxKind::IpCidr,
                    value: cidr,
                    policy,
                });
            }
            PatternShape::HostSuffix(domain) => {
                if debug {
                    println!("  recognized as host suffix: {}", domain);
                }
                out.rules.push(QuanxRule {
                    kind: QuanxKind::HostSuffix,
                    value: domain,
                    policy,
                });
            }
            PatternShape::Invalid => {
                out.dropped += 1;
            }
        }
    }

    out
}

/// 渲染规则片段：逐条渲染后用换行符连接
pub fn render_snippet(rules: &[QuanxRule], config: &ConvertConfig) -> String {
    rules
        .iter()
        .map(|rule| rule.render(config))
        .collect::<Vec<_>>()
        .join("\n")
}
