//! Scrolling-text animation for a fixed-width status display.
//!
//! # Architecture
//!
//! Pure pieces first, state on top:
//!
//! - `generator` - window generation from source text (pure functions)
//! - `trim` - display-budget helpers (pure functions)
//! - `cursor` - [`MarqueeText`], the stateful playback container
//!
//! # Usage
//!
//! ```ignore
//! use marquee_core::MarqueeText;
//!
//! // Build the frames once...
//! let mut marquee = MarqueeText::framed("Welcome to the server!", "> ", " <", 10);
//!
//! // ...then tick the cursor from the host's update loop.
//! let frame = marquee.advance()?;
//!
//! // Or let the display budget trim oversized frames as they show.
//! let frame = marquee.advance_trimmed(false)?;
//! ```

pub mod cursor;
pub mod generator;
pub mod trim;

pub use cursor::MarqueeText;
pub use generator::{scrolling_frames, scrolling_frames_with};
