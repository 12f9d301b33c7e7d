// src/main.rs
use anyhow::Context;
use clap::Parser;

use tukorea_rss::logging::init_logging;
use tukorea_rss::Settings;

fn main() -> anyhow::Result<()> {
    let settings = Settings::parse();
    init_logging(settings.log_format)?;

    let summary = tukorea_rss::run(&settings)
        .with_context(|| format!("피드 생성 실패: {}", settings.base_url))?;

    println!("생성 완료: {} ({}건)", summary.output.display(), summary.items);
    Ok(())
}
