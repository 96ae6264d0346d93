//! Dialog open animation state.

use std::time::{Duration, Instant};

/// Pop-in effect for the override dialog.
///
/// Purely visual. The TUI reads [`progress`](Self::progress) while drawing;
/// the engine drops the effect once it finishes so rendering goes back to
/// the static rect.
#[derive(Debug, Clone, Copy)]
pub struct DialogEffect {
    started: Instant,
}

impl DialogEffect {
    const DURATION: Duration = Duration::from_millis(140);

    pub(crate) fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Animation progress in `[0.0, 1.0]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        let elapsed = self.started.elapsed().as_secs_f32();
        (elapsed / Self::DURATION.as_secs_f32()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn finished(&self) -> bool {
        self.started.elapsed() >= Self::DURATION
    }
}
