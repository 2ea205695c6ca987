use anyhow::{Context, Result};
use chn2ts_core::{extract_and_write, extract_index, write_index_json, ExtractOptions};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// 命令行入口（基于 clap）
#[derive(Parser, Debug)]
#[command(name = "chn2ts", version, about = "前端中文文案提取与翻译表生成")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// 扫描目录并生成 translations.ts
    Generate {
        /// 输入目录（前端工程根目录）
        #[arg(long)]
        input: PathBuf,

        /// 输出文件（TS 翻译表模块）
        #[arg(long, default_value = "./translations.ts")]
        output: PathBuf,

        /// 识别的扩展名，可多次指定；默认 js/jsx/ts/tsx
        #[arg(long = "ext")]
        extensions: Vec<String>,
    },
    /// 扫描目录并将提取索引以 JSON 写到标准输出
    Index {
        /// 输入目录（前端工程根目录）
        #[arg(long)]
        input: PathBuf,

        /// 识别的扩展名，可多次指定；默认 js/jsx/ts/tsx
        #[arg(long = "ext")]
        extensions: Vec<String>,
    },
}

fn main() -> Result<()> {
    // 初始化日志（支持通过 RUST_LOG 控制等级，例如 info、debug）
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            extensions,
        } => {
            info!(?input, ?output, "starting extraction");

            let opts = build_options(extensions);
            // 聚合完成前不落盘：失败的运行不产生输出文件
            let mut buf = Vec::new();
            let stats =
                extract_and_write(&input, &mut buf, &opts).context("extract and write failed")?;
            std::fs::write(&output, &buf).context("write output file")?;

            info!(
                files_scanned = stats.files_scanned,
                files_matched = stats.files_matched,
                entries_written = stats.entries_written,
                "extraction finished"
            );
            println!("Translations file generated at: {}", output.display());
        }
        Commands::Index { input, extensions } => {
            info!(?input, "starting index dump");

            let opts = build_options(extensions);
            let index = extract_index(&input, &opts).context("extract index failed")?;
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            write_index_json(&index, &mut out)?;
            out.flush().ok();
        }
    }

    Ok(())
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // 日志走 stderr，标准输出留给确认行与 index 的 JSON
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// 组装提取选项；未显式指定扩展名时使用默认集合
fn build_options(extensions: Vec<String>) -> ExtractOptions {
    if extensions.is_empty() {
        ExtractOptions::default()
    } else {
        ExtractOptions { extensions }
    }
}
