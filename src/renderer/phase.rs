//! Render Phases
//!
//! The phase a [`FrameRenderer`](crate::renderer::FrameRenderer) reached in
//! its latest `render` call:
//!
//! ```text
//! Start → BufferPrepared → Culled → SetUp → GeometryDrawn → DiagnosticsDrawn → Submitted
//!                        ↘ Aborted (culling parameters unavailable)
//! ```
//!
//! `Submitted` and `Aborted` are terminal. A renderer that never rendered
//! reports `Idle`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum RenderPhase {
    /// No `render` call yet.
    #[default]
    Idle = 0,
    Start = 1,
    BufferPrepared = 2,
    /// Culling parameters were unavailable; nothing was set up, drawn or
    /// submitted.
    Aborted = 3,
    Culled = 4,
    SetUp = 5,
    GeometryDrawn = 6,
    DiagnosticsDrawn = 7,
    Submitted = 8,
}

impl RenderPhase {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Aborted | Self::Submitted)
    }

    /// Phase name (for debugging).
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Start => "Start",
            Self::BufferPrepared => "BufferPrepared",
            Self::Aborted => "Aborted",
            Self::Culled => "Culled",
            Self::SetUp => "SetUp",
            Self::GeometryDrawn => "GeometryDrawn",
            Self::DiagnosticsDrawn => "DiagnosticsDrawn",
            Self::Submitted => "Submitted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_ordering() {
        assert!(RenderPhase::Start < RenderPhase::BufferPrepared);
        assert!(RenderPhase::Culled < RenderPhase::SetUp);
        assert!(RenderPhase::SetUp < RenderPhase::GeometryDrawn);
        assert!(RenderPhase::GeometryDrawn < RenderPhase::DiagnosticsDrawn);
        assert!(RenderPhase::DiagnosticsDrawn < RenderPhase::Submitted);
    }

    #[test]
    fn test_terminal_phases() {
        assert!(RenderPhase::Submitted.is_terminal());
        assert!(RenderPhase::Aborted.is_terminal());
        assert!(!RenderPhase::Idle.is_terminal());
        assert!(!RenderPhase::GeometryDrawn.is_terminal());
    }
}
