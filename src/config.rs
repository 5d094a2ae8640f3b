//! # 转换配置模块
//!
//! 集中存放一次转换运行所需的全部常量：输入/输出路径、
//! 模板占位符、以及 Quantumult X 策略名称。
//! 配置在 main 中构建一次后只读传入流水线，不使用模块级可变状态，
//! 因此同一进程内可以独立执行多次转换（测试也依赖这一点）。

use crate::rule::RulePolicy;

/// 默认的 AutoProxy 规则文件路径
pub const DEFAULT_RULES_FILE: &str = "autoproxy.txt";

/// 默认的 Quantumult X 模板文件路径
pub const DEFAULT_TEMPLATE_FILE: &str = "quanx_template.conf";

/// 默认的输出配置文件路径
pub const DEFAULT_OUTPUT_FILE: &str = "quanx.conf";

/// 模板中的规则占位符
pub const DEFAULT_PLACEHOLDER: &str = "## AUTOPROXY_RULES_PLACEHOLDER ##";

/// 走代理的策略名称（需与模板的策略段一致）
pub const DEFAULT_PROXY_POLICY: &str = "proxy";

/// 直连的策略名称（需与模板的策略段一致）
pub const DEFAULT_DIRECT_POLICY: &str = "direct";

/// 一次转换运行的完整配置
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// AutoProxy 规则文件路径
    pub rules_path: String,
    /// 配置模板文件路径
    pub template_path: String,
    /// 输出配置文件路径
    pub output_path: String,
    /// 模板中的规则占位符
    pub placeholder: String,
    /// 走代理的策略名称
    pub proxy_policy: String,
    /// 直连的策略名称
    pub direct_policy: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            rules_path: DEFAULT_RULES_FILE.to_string(),
            template_path: DEFAULT_TEMPLATE_FILE.to_string(),
            output_path: DEFAULT_OUTPUT_FILE.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            proxy_policy: DEFAULT_PROXY_POLICY.to_string(),
            direct_policy: DEFAULT_DIRECT_POLICY.to_string(),
        }
    }
}

impl ConvertConfig {
    /// 将策略枚举映射为模板中实际使用的策略名称
    pub fn policy_name(&self, policy: RulePolicy) -> &str {
        match policy {
            RulePolicy::Proxy => &self.proxy_policy,
            RulePolicy::Direct => &self.direct_policy,
        }
    }
}
