//! # 规则翻译模块
//!
//! 此模块负责：
//! 1. 按行分类 AutoProxy 规则（注释/标题/白名单/黑名单）并清理匹配前缀
//! 2. 识别规则形态（IP-CIDR 优先，其次域名）并重写为 Quantumult X 规则
//! 3. 将结果渲染为可插入模板的规则片段

pub mod classifier;
pub mod translator;

// 重新导出常用类型
pub use translator::{render_snippet, translate_lines, QuanxKind, QuanxRule, RulePolicy, Translation};
