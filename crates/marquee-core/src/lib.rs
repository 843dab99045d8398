pub mod config;
pub mod error;
pub mod escape;
pub mod placeholder;
pub mod scroll;
pub mod snapshot;

pub use config::{AnimationConfig, MarqueeConfig, TrimLimits};
pub use error::{Error, Result};
pub use placeholder::PlaceholderProvider;
pub use scroll::MarqueeText;
pub use snapshot::Snapshot;
