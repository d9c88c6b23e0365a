//! Per-surface visibility lifecycle.

/// Animation phase of one mounted surface (banner, overlay, widget).
///
/// Transitions are idempotent: requesting a move the surface is already
/// making (or has made) reports `false` and changes nothing, so stale
/// scheduled work degrades to a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SurfacePhase {
    #[default]
    Hidden,
    Entering,
    Visible,
    Exiting,
}

impl SurfacePhase {
    /// Starts the entrance. Valid only from `Hidden`.
    pub fn begin_enter(&mut self) -> bool {
        if *self == SurfacePhase::Hidden {
            *self = SurfacePhase::Entering;
            true
        } else {
            false
        }
    }

    /// Completes the entrance transition.
    pub fn finish_enter(&mut self) -> bool {
        if *self == SurfacePhase::Entering {
            *self = SurfacePhase::Visible;
            true
        } else {
            false
        }
    }

    /// Starts the exit. Valid from `Entering` or `Visible`.
    pub fn begin_exit(&mut self) -> bool {
        if matches!(self, SurfacePhase::Entering | SurfacePhase::Visible) {
            *self = SurfacePhase::Exiting;
            true
        } else {
            false
        }
    }

    /// Completes the exit; the caller removes the node on `true`.
    pub fn finish_exit(&mut self) -> bool {
        if *self == SurfacePhase::Exiting {
            *self = SurfacePhase::Hidden;
            true
        } else {
            false
        }
    }

    /// Whether the surface currently occupies the page.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        !matches!(self, SurfacePhase::Hidden)
    }
}
