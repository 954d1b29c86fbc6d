//! 程序入口：初始化日志，加载结构文件与物品库，按需校验并重新写出
//!
//! 用法: villager_trade_editor <input.json> [output.json] [--catalog <path>] [--verbose]

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::fmt::SubscriberBuilder;

use villager_trade_editor::model::catalog::{self, default_catalog_path};
use villager_trade_editor::vm::bridge::*;
use villager_trade_editor::{check_trades, AppState};

/// 村民交易编辑器：读取结构文件，列出交易，校验后可重新写出
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// 要加载的结构文件
    #[arg(value_name = "INPUT.json")]
    input: PathBuf,
    /// 校验通过后写出的目标文件
    #[arg(value_name = "OUTPUT.json")]
    output: Option<PathBuf>,
    /// 物品库配置文件，默认为程序目录下的 items_config.csv
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,
    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
}

fn run(args: Args) -> anyhow::Result<()> {
    let catalog_path = args.catalog.unwrap_or_else(default_catalog_path);
    let items = catalog::load_or_create(&catalog_path)
        .with_context(|| format!("物品库加载失败: {}", catalog_path.display()))?;
    tracing::info!("物品库: {} 项，{} 个分类", items.len(), catalog::categories(&items).len());

    let mut state = AppState::default();
    let count = state
        .load_file(&args.input)
        .with_context(|| format!("{}无法读取 {}", STATUS_ERROR_PREFIX, args.input.display()))?;
    println!("{}: {}", STATUS_LOADED, status_parsed(count));

    for (i, row) in state.table_rows().iter().enumerate() {
        println!(
            "#{:<3} {} x{} + {} x{} -> {} x{}  uses {}/{} tier {}",
            i, row.buy_a, row.buy_a_count, row.buy_b, row.buy_b_count, row.sell, row.sell_count, row.uses,
            row.max_uses, row.tier
        );
    }

    if let Err(e) = check_trades(&state.trades) {
        tracing::warn!("校验未通过: {}", e);
        println!("{}{}", STATUS_ERROR_PREFIX, e);
    }

    if let Some(output) = args.output {
        state
            .save_to_file(&output)
            .with_context(|| format!("{}: {}", STATUS_SAVE_FAILED, output.display()))?;
        println!("{}: {}", STATUS_SAVED, output.display());
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日志输出
    let level = if args.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let _ = SubscriberBuilder::default().with_max_level(level).try_init();

    tracing::info!("{}", STATUS_READY);
    run(args)
}
