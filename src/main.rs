//! # autoproxy2qx
//!
//! CLI 工具，将 AutoProxy 规则列表转换为 Quantumult X 规则，
//! 并插入到配置模板的占位符处，生成完整的 QX 配置文件。
//!
//! ## 功能
//! - 逐行解析 AutoProxy 规则（注释/标题/白名单/黑名单）
//! - 重写为 QX 的 `HOST-SUFFIX` / `IP-CIDR` 规则行:
//!   - 白名单（`@@` 前缀）-> 直连策略
//!   - 黑名单（默认）-> 代理策略
//! - 将规则片段替换进模板占位符并写出最终配置
//!
//! ## 使用
//! ```bash
//! # 使用默认路径转换（autoproxy.txt + quanx_template.conf -> quanx.conf）
//! autoproxy2qx convert
//!
//! # 指定文件路径和策略名称
//! autoproxy2qx convert --rules my_rules.txt --proxy-policy "🚀 节点选择"
//!
//! # JSON 格式输出转换统计
//! autoproxy2qx convert --json
//!
//! # 显示每行规则的转换过程
//! autoproxy2qx convert --debug
//!
//! # 下载规则列表到本地
//! autoproxy2qx update-rules --url https://example.com/rules.txt
//! ```

use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

// 导入我们的模块
mod config;
mod rule;
mod source;
mod template;

use config::ConvertConfig;

/// 默认规则列表下载地址 (GitHub)
/// 用户可以换成自己维护的列表地址
const DEFAULT_RULES_MIRROR: &str =
    "https://raw.githubusercontent.com/gfwlist/gfwlist/master/gfwlist.txt";

// ========================================
// CLI 参数定义
// ========================================

/// AutoProxy -> Quantumult X 规则转换工具
#[derive(Parser)]
#[command(name = "autoproxy2qx")]
#[command(author = "Your Name")]
#[command(version = "0.1.0")]
#[command(about = "Convert AutoProxy rule lists into a Quantumult X config")]
struct Cli {
    /// 子命令
    #[command(subcommand)]
    command: Commands,
}

/// 支持的子命令
#[derive(Subcommand)]
enum Commands {
    /// 转换规则并生成配置文件
    Convert {
        /// AutoProxy 规则文件路径
        #[arg(long, value_name = "PATH", default_value = config::DEFAULT_RULES_FILE)]
        rules: String,

        /// 配置模板文件路径
        #[arg(long, value_name = "PATH", default_value = config::DEFAULT_TEMPLATE_FILE)]
        template: String,

        /// 输出配置文件路径
        #[arg(long, value_name = "PATH", default_value = config::DEFAULT_OUTPUT_FILE)]
        output: String,

        /// 走代理的策略名称（需与模板的策略段一致）
        #[arg(long, default_value = config::DEFAULT_PROXY_POLICY)]
        proxy_policy: String,

        /// 直连的策略名称（需与模板的策略段一致）
        #[arg(long, default_value = config::DEFAULT_DIRECT_POLICY)]
        direct_policy: String,

        /// JSON 格式输出转换统计
        #[arg(long)]
        json: bool,

        /// 显示每行规则的转换过程
        #[arg(long)]
        debug: bool,
    },
    /// 下载规则列表到本地
    #[command(name = "update-rules")]
    UpdateRules {
        /// 保存路径
        #[arg(long, value_name = "PATH", default_value = config::DEFAULT_RULES_FILE)]
        rules: String,

        /// 指定下载 URL (可选，默认使用 GitHub)
        #[arg(long)]
        url: Option<String>,

        /// 强制更新 (即使文件已存在)
        #[arg(long)]
        force: bool,
    },
}

// ========================================
// 主函数
// ========================================

fn main() {
    // 解析命令行参数
    let cli = Cli::parse();

    // 执行对应的子命令
    let result = match cli.command {
        Commands::Convert {
            rules,
            template,
            output,
            proxy_policy,
            direct_policy,
            json,
            debug,
        } => {
            let config = ConvertConfig {
                rules_path: rules,
                template_path: template,
                output_path: output,
                placeholder: config::DEFAULT_PLACEHOLDER.to_string(),
                proxy_policy,
                direct_policy,
            };
            run_convert(&config, json, debug)
        }
        Commands::UpdateRules { rules, url, force } => run_update_rules(&rules, url, force),
    };

    // 处理错误
    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

// ========================================
// 转换命令实现
// ========================================

/// 转换统计
#[derive(Debug, Serialize)]
struct ConvertSummary {
    /// 读取的原始行数
    lines_read: usize,
    /// 跳过的行数（空行/注释/标题）
    skipped: usize,
    /// 丢弃的行数（无法识别的形态）
    dropped: usize,
    /// 转换出的规则条数
    converted: usize,
    /// 其中 IP-CIDR 规则条数
    ip_cidr: usize,
    /// 其中域名后缀规则条数
    host_suffix: usize,
    /// 占位符缺失，规则被追加到模板末尾
    appended: bool,
    /// 输出文件路径
    output: String,
}

/// 执行转换命令
fn run_convert(config: &ConvertConfig, json_output: bool, debug: bool) -> Result<()> {
    // 1. 读取 AutoProxy 规则
    if !json_output {
        println!("-> Reading rules file: {}", config.rules_path);
    }
    let lines = source::read_rules(&config.rules_path)?;
    if lines.is_empty() {
        println!("Rules file is empty, nothing to convert.");
        return Ok(());
    }

    // 2. 转换为 QX 规则片段
    let translation = rule::translate_lines(lines.iter().map(String::as_str), debug);
    let snippet = rule::render_snippet(&translation.rules, config);

    // 3. 插入模板
    let outcome = template::merge_template_file(&config.template_path, &snippet, &config.placeholder)?;
    let appended = matches!(outcome, template::MergeOutcome::Appended(_));
    if appended {
        eprintln!(
            "Warning: placeholder '{}' not found in template, rules appended at the end.",
            config.placeholder
        );
    }

    // 4. 保存最终的 QX 配置文件
    std::fs::write(&config.output_path, outcome.into_content())
        .with_context(|| format!("Failed to write output file: {}", config.output_path))?;

    // 5. 输出统计
    let summary = ConvertSummary {
        lines_read: lines.len(),
        skipped: translation.skipped,
        dropped: translation.dropped,
        converted: translation.rules.len(),
        ip_cidr: translation
            .rules
            .iter()
            .filter(|r| r.kind == rule::QuanxKind::IpCidr)
            .count(),
        host_suffix: translation
            .rules
            .iter()
            .filter(|r| r.kind == rule::QuanxKind::HostSuffix)
            .count(),
        appended,
        output: config.output_path.clone(),
    };

    if json_output {
        // JSON 格式输出
        let json = serde_json::to_string_pretty(&summary)?;
        println!("{}", json);
    } else {
        println!("{}", "-".repeat(50));
        println!("Done! Quantumult X config saved to: {}", summary.output);
        println!(
            "Converted rules: {} ({} IP-CIDR, {} host-suffix), skipped: {}, dropped: {}",
            summary.converted, summary.ip_cidr, summary.host_suffix, summary.skipped, summary.dropped
        );
    }

    Ok(())
}

// ========================================
// 规则列表更新实现
// ========================================

/// 下载规则列表到本地
fn run_update_rules(target_path: &str, url: Option<String>, force: bool) -> Result<()> {
    use std::fs;
    use std::io::Write;
    use std::path::Path;

    if !force && Path::new(target_path).exists() {
        println!("Rules file already exists at: {}", target_path);
        println!("Use --force to overwrite.");
        return Ok(());
    }

    // 确保目录存在
    if let Some(parent) = Path::new(target_path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let download_url = url.as_deref().unwrap_or(DEFAULT_RULES_MIRROR);

    println!("Downloading rules list...");
    println!("From: {}", download_url);
    println!("To:   {}", target_path);

    // 使用 reqwest 下载
    // 注意：reqwest blocking feature 必须开启
    let response = reqwest::blocking::get(download_url)?;
    let content = response.bytes()?;

    let mut file = fs::File::create(target_path)?;
    file.write_all(&content)?;

    println!("Successfully updated rules list!");
    Ok(())
}
