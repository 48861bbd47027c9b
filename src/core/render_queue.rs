//! Render Queue Definitions
//!
//! Every renderer carries an integer render queue. Draw calls filter the
//! renderers they consider with a [`RenderQueueRange`], which is how the
//! opaque and transparent passes split the same culling results.
//!
//! | Queue | Value | Typical Content |
//! |-------|-------|-----------------|
//! | `BACKGROUND` | 1000 | Drawn before everything else |
//! | `GEOMETRY` | 2000 | Default opaque geometry |
//! | `ALPHA_TEST` | 2450 | Alpha-tested geometry |
//! | `TRANSPARENT` | 3000 | Alpha-blended geometry, drawn back-to-front |
//! | `OVERLAY` | 4000 | Lens flares, overlays |

use serde::{Deserialize, Serialize};

/// Well-known render queue values.
pub struct RenderQueue;

impl RenderQueue {
    pub const BACKGROUND: i32 = 1000;
    pub const GEOMETRY: i32 = 2000;
    pub const ALPHA_TEST: i32 = 2450;
    /// Last queue value still treated as opaque.
    pub const GEOMETRY_LAST: i32 = 2500;
    pub const TRANSPARENT: i32 = 3000;
    pub const OVERLAY: i32 = 4000;
    /// Largest valid render queue value.
    pub const MAX: i32 = 5000;
}

/// Inclusive range of render queue values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RenderQueueRange {
    pub lower_bound: i32,
    pub upper_bound: i32,
}

impl RenderQueueRange {
    /// Opaque queues: `0..=2500`.
    pub const OPAQUE: Self = Self::new(0, RenderQueue::GEOMETRY_LAST);

    /// Transparent queues: `2501..=5000`.
    pub const TRANSPARENT: Self = Self::new(RenderQueue::GEOMETRY_LAST + 1, RenderQueue::MAX);

    /// Every queue: `0..=5000`.
    pub const ALL: Self = Self::new(0, RenderQueue::MAX);

    #[inline]
    #[must_use]
    pub const fn new(lower_bound: i32, upper_bound: i32) -> Self {
        Self {
            lower_bound,
            upper_bound,
        }
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, queue: i32) -> bool {
        queue >= self.lower_bound && queue <= self.upper_bound
    }
}

impl Default for RenderQueueRange {
    fn default() -> Self {
        Self::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opaque_and_transparent_partition_all() {
        let queues = [0, RenderQueue::GEOMETRY, RenderQueue::GEOMETRY_LAST, 2501, RenderQueue::MAX];
        for queue in queues {
            let opaque = RenderQueueRange::OPAQUE.contains(queue);
            let transparent = RenderQueueRange::TRANSPARENT.contains(queue);
            assert!(opaque != transparent, "queue {queue} must be in exactly one range");
            assert!(RenderQueueRange::ALL.contains(queue));
        }
    }

    #[test]
    fn test_well_known_queues() {
        assert!(RenderQueueRange::OPAQUE.contains(RenderQueue::BACKGROUND));
        assert!(RenderQueueRange::OPAQUE.contains(RenderQueue::ALPHA_TEST));
        assert!(RenderQueueRange::TRANSPARENT.contains(RenderQueue::TRANSPARENT));
        assert!(RenderQueueRange::TRANSPARENT.contains(RenderQueue::OVERLAY));
        assert!(!RenderQueueRange::ALL.contains(RenderQueue::MAX + 1));
        assert!(!RenderQueueRange::ALL.contains(-1));
    }

    #[test]
    fn test_default_is_all() {
        assert_eq!(RenderQueueRange::default(), RenderQueueRange::ALL);
    }
}
