use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use marquee_core::scroll::scrolling_frames;
use marquee_core::{MarqueeConfig, MarqueeText};

#[derive(Args)]
pub struct GenerateArgs {
    /// Source text to scroll
    pub text: String,
    /// Window width in characters
    #[arg(short = 'w', long)]
    pub width: Option<usize>,
    /// Stable prefix before the window
    #[arg(short, long)]
    pub prefix: Option<String>,
    /// Stable suffix after the window
    #[arg(short, long)]
    pub suffix: Option<String>,
    /// Step (ticks per frame change) stored with the animation
    #[arg(long)]
    pub step: Option<u32>,
    /// Drop color-continuation artifacts after generating
    #[arg(long)]
    pub clean: bool,
    /// Write a JSON snapshot here instead of printing frames
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(config: &MarqueeConfig, args: GenerateArgs) -> Result<()> {
    let animation = &config.animation;
    let width = args.width.unwrap_or(animation.display_width);
    let prefix = args.prefix.unwrap_or_else(|| animation.prefix.clone());
    let suffix = args.suffix.unwrap_or_else(|| animation.suffix.clone());
    let step = args.step.unwrap_or(animation.step);

    let mut marquee =
        MarqueeText::with_step(step, scrolling_frames(&args.text, &prefix, &suffix, width))?;
    if args.clean {
        marquee.clean();
    }

    match args.output {
        Some(path) => {
            let snapshot = marquee.snapshot();
            std::fs::write(&path, serde_json::to_string_pretty(&snapshot)?)?;
            println!("Wrote {} frames to {}", snapshot.data.len(), path.display());
        }
        None => {
            println!("Frames ({}):\n", marquee.len());
            for (idx, frame) in marquee.frames().iter().enumerate() {
                println!("  {:>3}  {:?}", idx + 1, frame);
            }
        }
    }

    Ok(())
}
