//! Libraryapp - Library Management CLI
//!
//! 利用者・蔵書・貸出をJSONファイルで管理

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use libraryapp::adapter::config::Config;
use libraryapp::driver::{Args, LibraryApp};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration
    let config = Config::load_or_default(&args.config)?;

    // Create app with injected dependencies
    let app = LibraryApp::new(&config)?;

    let output = app.execute(args.command).await?;
    println!("{}", output);

    Ok(())
}
