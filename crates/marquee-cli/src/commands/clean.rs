use std::path::Path;

use anyhow::Result;

use marquee_core::{MarqueeText, Snapshot};

pub fn run(snapshot_path: &Path, output: Option<&Path>) -> Result<()> {
    let content = std::fs::read_to_string(snapshot_path)?;
    let snapshot: Snapshot = serde_json::from_str(&content)?;
    let before = snapshot.data.len();

    let mut marquee = MarqueeText::from_snapshot(snapshot);
    marquee.clean();

    let cleaned = marquee.snapshot();
    let target = output.unwrap_or(snapshot_path);
    std::fs::write(target, serde_json::to_string_pretty(&cleaned)?)?;

    println!(
        "Removed {} of {} frames, wrote {}",
        before - cleaned.data.len(),
        before,
        target.display()
    );

    Ok(())
}
