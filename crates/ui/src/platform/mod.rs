use std::sync::Arc;

/// Played once each time a focus session reaches zero.
///
/// Audio delivery lives outside this crate; the desktop build ships the
/// silent stub and this trait is the seam a real chime plugs into.
pub trait CompletionCue: Send + Sync {
    fn play(&self);
}

pub type CompletionCueRef = Arc<dyn CompletionCue>;

/// The stub cue: acknowledges the completion and stays quiet.
pub struct SilentCue;

impl CompletionCue for SilentCue {
    fn play(&self) {}
}

/// Cue used when the composition root does not supply one.
#[must_use]
pub fn default_cue() -> CompletionCueRef {
    Arc::new(SilentCue)
}
