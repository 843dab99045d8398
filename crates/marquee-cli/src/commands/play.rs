use std::path::Path;

use anyhow::Result;

use marquee_core::{MarqueeConfig, MarqueeText, Snapshot};

pub fn run(
    config: &MarqueeConfig,
    snapshot_path: &Path,
    ticks: u32,
    trim: bool,
    long: bool,
) -> Result<()> {
    let content = std::fs::read_to_string(snapshot_path)?;
    let snapshot: Snapshot = serde_json::from_str(&content)?;
    let mut marquee = MarqueeText::from_snapshot(snapshot);

    if marquee.is_empty() {
        println!("Snapshot has no frames.");
        return Ok(());
    }

    for _ in 0..ticks {
        let frame = if trim {
            marquee.advance_trimmed_with(config.trim, long)?
        } else {
            marquee.advance()?.to_string()
        };
        println!("{frame}");
    }

    Ok(())
}
