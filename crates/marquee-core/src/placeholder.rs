//! Optional per-viewer placeholder substitution hook.
//!
//! Hosts that support placeholder expansion implement
//! [`PlaceholderProvider`]; operations that need it take
//! `Option<&dyn PlaceholderProvider>` plus a viewer id and fail with
//! [`Error::PlaceholdersUnavailable`](crate::Error::PlaceholdersUnavailable)
//! when the host has none, never silently skipping substitution.

/// Expands placeholders in `text` for a single viewer.
pub trait PlaceholderProvider {
    fn substitute(&self, text: &str, viewer: &str) -> String;
}

impl<F> PlaceholderProvider for F
where
    F: Fn(&str, &str) -> String,
{
    fn substitute(&self, text: &str, viewer: &str) -> String {
        self(text, viewer)
    }
}
