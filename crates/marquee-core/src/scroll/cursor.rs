//! Stateful playback cursor over an ordered set of animation frames.
//!
//! [`MarqueeText`] owns the frame set and the cursor that walks it. One
//! external tick is one call to [`MarqueeText::advance`]; the step setting
//! gates how many ticks pass between frame changes.

use tracing::warn;

use crate::config::{MarqueeConfig, TrimLimits};
use crate::error::{Error, Result};
use crate::escape::ESCAPE;
use crate::placeholder::PlaceholderProvider;
use crate::scroll::generator::scrolling_frames;
use crate::scroll::trim::{strip_leading_resets, truncate_atomic};
use crate::snapshot::Snapshot;

pub(crate) const DEFAULT_STEP: u32 = 1;

/// An animated line of status text: the ordered frame set plus playback
/// state.
///
/// Frame order is playback order. The cursor is owned by whichever single
/// context ticks it; all operations are synchronous in-memory mutations.
#[derive(Debug, Clone)]
pub struct MarqueeText {
    frames: Vec<String>,
    /// Ticks required per frame change, always >= 1.
    step: u32,
    /// Progress toward the next frame change.
    cur_step: u32,
    /// 1-based frame index; 0 until the first advance after construction
    /// or reset, which always lands on frame 1 because `cur_step` starts
    /// equal to `step`.
    position: usize,
}

impl Default for MarqueeText {
    fn default() -> Self {
        Self::new(std::iter::empty::<String>())
    }
}

impl MarqueeText {
    /// Create from literal frames in playback order.
    pub fn new<I, S>(frames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            frames: frames.into_iter().map(Into::into).collect(),
            step: DEFAULT_STEP,
            cur_step: DEFAULT_STEP,
            position: 0,
        }
    }

    /// Create from literal frames with a custom step.
    ///
    /// Fails with [`Error::InvalidStep`] when `step` is 0.
    pub fn with_step<I, S>(step: u32, frames: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if step == 0 {
            return Err(Error::InvalidStep);
        }
        let mut text = Self::new(frames);
        text.step = step;
        text.cur_step = step;
        Ok(text)
    }

    /// Scrolling animation for `text` with no stable prefix or suffix.
    pub fn scrolling(text: &str, display_width: usize) -> Self {
        Self::framed(text, "", "", display_width)
    }

    /// Scrolling animation wrapped in a stable prefix and suffix, e.g.
    /// `framed("breaking news", "> ", " <", 10)`.
    pub fn framed(text: &str, prefix: &str, suffix: &str, display_width: usize) -> Self {
        Self::new(scrolling_frames(text, prefix, suffix, display_width))
    }

    /// Scrolling animation from configured defaults.
    pub fn from_config(text: &str, config: &MarqueeConfig) -> Result<Self> {
        let animation = &config.animation;
        Self::with_step(
            animation.step,
            scrolling_frames(
                text,
                &animation.prefix,
                &animation.suffix,
                animation.display_width,
            ),
        )
    }

    /// Create with every frame run through the placeholder provider for
    /// `viewer`.
    ///
    /// Fails with [`Error::PlaceholdersUnavailable`] when `provider` is
    /// `None`.
    pub fn for_viewer<I, S>(
        provider: Option<&dyn PlaceholderProvider>,
        viewer: &str,
        frames: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut text = Self::default();
        text.add_frames_for_viewer(provider, viewer, frames)?;
        Ok(text)
    }

    /// Like [`for_viewer`](Self::for_viewer) with a custom step.
    pub fn for_viewer_with_step<I, S>(
        provider: Option<&dyn PlaceholderProvider>,
        viewer: &str,
        step: u32,
        frames: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if step == 0 {
            return Err(Error::InvalidStep);
        }
        let mut text = Self::for_viewer(provider, viewer, frames)?;
        text.step = step;
        text.cur_step = step;
        Ok(text)
    }

    /// Restore from a structural snapshot.
    ///
    /// A zero step (how [`Snapshot`] reads a missing or malformed value)
    /// falls back to the default step of 1. Cursor state starts fresh.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let step = if snapshot.step == 0 {
            DEFAULT_STEP
        } else {
            snapshot.step
        };
        let mut text = Self::new(snapshot.data);
        text.step = step;
        text.cur_step = step;
        text
    }

    /// Capture the persistent parts of this animation: frames and step.
    /// Cursor position and the step counter are transient and not included.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            data: self.frames.clone(),
            step: self.step,
        }
    }

    /// Advance the cursor one tick and return the frame to display.
    ///
    /// The returned frame changes only when the step counter permits; see
    /// [`set_step`](Self::set_step). Past the last frame the position wraps
    /// back to the first. Fails with [`Error::EmptyFrames`] when no frames
    /// exist.
    pub fn advance(&mut self) -> Result<&str> {
        if self.frames.is_empty() {
            return Err(Error::EmptyFrames);
        }

        if self.cur_step == self.step {
            self.position += 1;
        }
        self.cur_step += 1;
        if self.cur_step > self.step {
            self.cur_step = 0;
        }
        if self.position > self.frames.len() {
            self.position = 1;
        }

        Ok(&self.frames[self.position - 1])
    }

    /// Advance and enforce the display budget, trim-and-cache on first
    /// display.
    ///
    /// Leading reset markers are stripped from the returned text (but not
    /// stored). A frame over budget is truncated to the budget (one char
    /// shorter if the cut would leave a dangling [`ESCAPE`]), logged at
    /// warning level, and the truncated text is written back into the frame
    /// set at the current position, so replays of that position return the
    /// already-trimmed text.
    pub fn advance_trimmed(&mut self, long_line: bool) -> Result<String> {
        self.advance_trimmed_with(TrimLimits::default(), long_line)
    }

    /// [`advance_trimmed`](Self::advance_trimmed) with explicit budgets.
    pub fn advance_trimmed_with(&mut self, limits: TrimLimits, long_line: bool) -> Result<String> {
        self.advance()?;

        let position = self.position;
        let next = strip_leading_resets(&self.frames[position - 1]).to_string();
        let budget = if long_line { limits.long } else { limits.short };

        if next.chars().count() <= budget {
            return Ok(next);
        }

        warn!(
            "Frame variation #{} was trimmed to {} characters (originally {:?})",
            position, budget, next
        );
        let trimmed = truncate_atomic(&next, budget);
        self.frames[position - 1] = trimmed.clone();
        Ok(trimmed)
    }

    /// Rewind to the starting point: the very next [`advance`](Self::advance)
    /// returns the first frame again.
    pub fn reset(&mut self) {
        self.position = 0;
        self.cur_step = self.step;
    }

    /// Ticks required per frame change.
    #[inline]
    pub fn step(&self) -> u32 {
        self.step
    }

    /// Set the step. The step counter restarts; the position is kept.
    ///
    /// Fails with [`Error::InvalidStep`] when `step` is 0, leaving state
    /// unchanged.
    pub fn set_step(&mut self, step: u32) -> Result<()> {
        if step == 0 {
            return Err(Error::InvalidStep);
        }
        self.step = step;
        self.cur_step = step;
        Ok(())
    }

    /// Frames in playback order.
    ///
    /// The slice aliases live state but cannot be mutated through this
    /// handle; use the editing operations to change the set.
    #[inline]
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Append a frame. Cursor state is untouched.
    pub fn add_frame(&mut self, frame: impl Into<String>) {
        self.frames.push(frame.into());
    }

    /// Append frames in order. Cursor state is untouched.
    pub fn add_frames<I, S>(&mut self, frames: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.frames.extend(frames.into_iter().map(Into::into));
    }

    /// Append frames run through the placeholder provider for `viewer`.
    ///
    /// The provider is checked before any mutation, so a missing provider
    /// leaves the frame set exactly as it was.
    pub fn add_frames_for_viewer<I, S>(
        &mut self,
        provider: Option<&dyn PlaceholderProvider>,
        viewer: &str,
        frames: I,
    ) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let provider = provider.ok_or(Error::PlaceholdersUnavailable)?;
        let substituted: Vec<String> = frames
            .into_iter()
            .map(|frame| provider.substitute(&frame.into(), viewer))
            .collect();
        self.frames.extend(substituted);
        Ok(())
    }

    /// Run every stored frame through the placeholder provider for
    /// `viewer`, in place.
    pub fn apply_placeholders(
        &mut self,
        provider: Option<&dyn PlaceholderProvider>,
        viewer: &str,
    ) -> Result<()> {
        let provider = provider.ok_or(Error::PlaceholdersUnavailable)?;
        for frame in &mut self.frames {
            *frame = provider.substitute(frame, viewer);
        }
        Ok(())
    }

    /// Remove the first frame equal to `frame`, if any.
    ///
    /// Returns whether a frame was removed. The cursor is not adjusted, so
    /// the current position may end up referring to a shifted element.
    pub fn remove_frame(&mut self, frame: &str) -> bool {
        match self.frames.iter().position(|f| f.as_str() == frame) {
            Some(idx) => {
                self.frames.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Drop frames that are pure color-continuation artifacts of the
    /// generator.
    ///
    /// Walks the set tracking whether the previous entry started with the
    /// formatting marker: an entry starting with the marker is kept only
    /// when the flag is already set, and a marker-less entry is dropped
    /// when it trails a marker run.
    pub fn clean(&mut self) {
        let mut kept = Vec::with_capacity(self.frames.len());
        let mut last_started_with_marker = false;

        for frame in std::mem::take(&mut self.frames) {
            let starts_with_marker = frame.starts_with(ESCAPE);
            match (starts_with_marker, last_started_with_marker) {
                (true, true) | (false, false) => kept.push(frame),
                (true, false) | (false, true) => {}
            }
            last_started_with_marker = starts_with_marker;
        }

        self.frames = kept;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_on_empty_set_fails() {
        let mut marquee = MarqueeText::default();
        assert!(matches!(marquee.advance(), Err(Error::EmptyFrames)));
    }

    #[test]
    fn test_first_advance_returns_first_frame() {
        let mut marquee = MarqueeText::new(["a", "b", "c"]);
        assert_eq!(marquee.advance().unwrap(), "a");
    }

    #[test]
    fn test_scrolling_short_text_is_a_single_frame() {
        let mut marquee = MarqueeText::scrolling("Hello", 10);
        assert_eq!(marquee.frames(), ["Hello"]);
        assert_eq!(marquee.advance().unwrap(), "Hello");
    }

    #[test]
    fn test_from_config_uses_configured_defaults() {
        let mut config = MarqueeConfig::default();
        config.animation.display_width = 5;
        config.animation.step = 2;

        let marquee = MarqueeText::from_config("HelloWorldFoo", &config).unwrap();
        assert_eq!(marquee.step(), 2);
        assert_eq!(marquee.len(), 9);
        assert_eq!(marquee.frames()[0], "Hello");
    }

    #[test]
    fn test_default_step_cadence() {
        let mut marquee = MarqueeText::new(["a", "b"]);
        let seen: Vec<String> = (0..6)
            .map(|_| marquee.advance().unwrap().to_string())
            .collect();
        // counter cycles 0..=step, so each frame holds for step + 1 ticks
        assert_eq!(seen, ["a", "a", "b", "b", "a", "a"]);
    }

    #[test]
    fn test_larger_step_holds_frames_longer() {
        let mut marquee = MarqueeText::with_step(3, ["a", "b"]).unwrap();
        let seen: Vec<String> = (0..8)
            .map(|_| marquee.advance().unwrap().to_string())
            .collect();
        assert_eq!(seen, ["a", "a", "a", "a", "b", "b", "b", "b"]);
    }

    #[test]
    fn test_position_wraps_to_first_frame() {
        let mut marquee = MarqueeText::new(["a", "b", "c"]);
        let mut last = String::new();
        for _ in 0..(3 * 2 + 1) {
            last = marquee.advance().unwrap().to_string();
        }
        assert_eq!(last, "a");
    }

    #[test]
    fn test_reset_rewinds_to_first_frame() {
        let mut marquee = MarqueeText::new(["a", "b", "c"]);
        for _ in 0..5 {
            marquee.advance().unwrap();
        }
        marquee.reset();
        assert_eq!(marquee.advance().unwrap(), "a");
    }

    #[test]
    fn test_zero_step_is_rejected() {
        assert!(matches!(
            MarqueeText::with_step(0, ["a"]),
            Err(Error::InvalidStep)
        ));

        let mut marquee = MarqueeText::new(["a"]);
        assert!(matches!(marquee.set_step(0), Err(Error::InvalidStep)));
        assert_eq!(marquee.step(), 1);
    }

    #[test]
    fn test_set_step_keeps_position() {
        let mut marquee = MarqueeText::new(["a", "b", "c"]);
        marquee.advance().unwrap();
        marquee.advance().unwrap();
        marquee.advance().unwrap(); // on "b" now

        marquee.set_step(2).unwrap();
        // counter restarted at the new step, so the next tick moves on from
        // the kept position rather than rewinding
        assert_eq!(marquee.advance().unwrap(), "c");
    }

    #[test]
    fn test_editing_does_not_touch_cursor() {
        let mut marquee = MarqueeText::new(["a", "b", "c"]);
        marquee.advance().unwrap();
        marquee.advance().unwrap();

        marquee.add_frame("d");
        assert!(marquee.remove_frame("c"));
        assert_eq!(marquee.frames(), ["a", "b", "d"]);

        // cursor continues from where it was
        assert_eq!(marquee.advance().unwrap(), "b");
    }

    #[test]
    fn test_remove_first_occurrence_only() {
        let mut marquee = MarqueeText::new(["a", "b", "a"]);
        assert!(marquee.remove_frame("a"));
        assert_eq!(marquee.frames(), ["b", "a"]);
        assert!(!marquee.remove_frame("missing"));
        assert_eq!(marquee.len(), 2);
    }

    #[test]
    fn test_clean_drops_continuation_artifacts() {
        let mut marquee = MarqueeText::new([
            "§7hel", // marker, flag unset: dropped, flag set
            "7hell", // no marker, flag set: dropped, flag cleared
            "hello", // no marker, flag clear: kept
            "ello ", "llo §", "lo §c", "o §cg", " §cgu",
        ]);
        marquee.clean();
        assert_eq!(
            marquee.frames(),
            ["hello", "ello ", "llo §", "lo §c", "o §cg", " §cgu"]
        );
    }

    #[test]
    fn test_clean_keeps_marker_runs() {
        let mut marquee = MarqueeText::new(["§ahel", "§bell", "hello"]);
        marquee.clean();
        // first marker entry arms the flag, second is a kept run member,
        // the trailing marker-less entry is the artifact
        assert_eq!(marquee.frames(), ["§bell"]);
    }

    #[test]
    fn test_advance_trimmed_truncates_and_caches() {
        let long = "x".repeat(40);
        let mut marquee = MarqueeText::new([long.clone()]);

        let first = marquee.advance_trimmed(false).unwrap();
        assert_eq!(first.chars().count(), 28);
        assert_eq!(marquee.frames()[0], first);

        // the replay serves the cached trim, not the original
        let second = marquee.advance_trimmed(false).unwrap();
        assert_eq!(second, first);
    }

    #[test]
    fn test_trim_respects_long_budget() {
        let long = "y".repeat(80);
        let mut marquee = MarqueeText::new([long]);
        let out = marquee.advance_trimmed(true).unwrap();
        assert_eq!(out.chars().count(), 64);
    }

    #[test]
    fn test_trim_cuts_dangling_marker_at_budget() {
        // char 28 of the stripped text is the marker, so the cut backs off
        let mut frame = "z".repeat(27);
        frame.push(ESCAPE);
        frame.push_str("aftermath");
        let mut marquee = MarqueeText::new([frame]);

        let out = marquee.advance_trimmed(false).unwrap();
        assert_eq!(out.chars().count(), 27);
        assert!(!out.ends_with(ESCAPE));
    }

    #[test]
    fn test_stripping_alone_is_not_persisted() {
        let mut marquee = MarqueeText::new(["§rhello"]);
        let out = marquee.advance_trimmed(false).unwrap();
        assert_eq!(out, "hello");
        // under budget: the stored frame keeps its reset marker
        assert_eq!(marquee.frames()[0], "§rhello");
    }

    #[test]
    fn test_trim_budget_applies_to_stripped_text() {
        let mut frame = String::from("§r");
        frame.push_str(&"w".repeat(28));
        let mut marquee = MarqueeText::new([frame.clone()]);
        // 30 chars stored, 28 after stripping: no trim, nothing persisted
        let out = marquee.advance_trimmed(false).unwrap();
        assert_eq!(out, "w".repeat(28));
        assert_eq!(marquee.frames()[0], frame);
    }

    #[test]
    fn test_missing_placeholder_provider_fails_atomically() {
        let mut marquee = MarqueeText::new(["a"]);
        let err = marquee.add_frames_for_viewer(None, "viewer", ["{name}"]);
        assert!(matches!(err, Err(Error::PlaceholdersUnavailable)));
        assert_eq!(marquee.frames(), ["a"]);

        assert!(matches!(
            MarqueeText::for_viewer(None, "viewer", ["{name}"]),
            Err(Error::PlaceholdersUnavailable)
        ));
    }

    #[test]
    fn test_placeholders_substitute_for_viewer() {
        let provider = |text: &str, viewer: &str| text.replace("{viewer}", viewer);

        let marquee =
            MarqueeText::for_viewer(Some(&provider), "Ada", ["hi {viewer}", "bye {viewer}"])
                .unwrap();
        assert_eq!(marquee.frames(), ["hi Ada", "bye Ada"]);

        let mut marquee = MarqueeText::new(["hello {viewer}"]);
        marquee.apply_placeholders(Some(&provider), "Grace").unwrap();
        assert_eq!(marquee.frames(), ["hello Grace"]);
    }

    #[test]
    fn test_for_viewer_with_step_validates_first() {
        let provider = |text: &str, _viewer: &str| text.to_string();
        assert!(matches!(
            MarqueeText::for_viewer_with_step(Some(&provider), "v", 0, ["a"]),
            Err(Error::InvalidStep)
        ));

        let marquee =
            MarqueeText::for_viewer_with_step(Some(&provider), "v", 4, ["a"]).unwrap();
        assert_eq!(marquee.step(), 4);
    }
}
