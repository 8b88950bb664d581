//! Virtual-scroll smoothing layer.
//!
//! Raw wheel input moves a target offset; `advance` eases the current offset
//! toward it once per display frame. The stacking math consumes the eased
//! position, which decouples it from input jitter. This module is the pure
//! state machine; the listener and animation-frame wiring lives in
//! `app::stack`.

#[derive(Debug, Clone, PartialEq)]
pub struct SmoothScrollConfig {
    /// Per-frame interpolation factor at a 60fps reference cadence.
    pub lerp: f64,
    pub wheel_multiplier: f64,
    pub touch_multiplier: f64,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            lerp: 0.1,
            wheel_multiplier: 1.0,
            touch_multiplier: 2.0,
        }
    }
}

/// Distance under which the eased position snaps to the target.
const SETTLE_EPSILON: f64 = 0.05;

/// Reference frame duration the lerp factor is normalized against.
const REFERENCE_FRAME_MS: f64 = 1000.0 / 60.0;

#[derive(Debug)]
pub struct VirtualScroll {
    config: SmoothScrollConfig,
    current: f64,
    target: f64,
    limit: f64,
}

impl VirtualScroll {
    pub fn new(config: SmoothScrollConfig) -> Self {
        Self {
            config,
            current: 0.0,
            target: 0.0,
            limit: 0.0,
        }
    }

    pub fn current(&self) -> f64 {
        self.current
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    /// Maximum scrollable offset. Both the target and the current position
    /// are re-clamped when the limit shrinks.
    pub fn set_limit(&mut self, limit: f64) {
        self.limit = limit.max(0.0);
        self.target = self.target.clamp(0.0, self.limit);
        self.current = self.current.clamp(0.0, self.limit);
    }

    /// Sync both positions to an externally observed scroll offset, e.g. a
    /// scrollbar drag or a native touch scroll.
    pub fn jump_to(&mut self, position: f64) {
        let position = position.clamp(0.0, self.limit);
        self.current = position;
        self.target = position;
    }

    pub fn add_wheel(&mut self, delta: f64) {
        self.push_target(delta * self.config.wheel_multiplier);
    }

    pub fn add_touch(&mut self, delta: f64) {
        self.push_target(delta * self.config.touch_multiplier);
    }

    fn push_target(&mut self, delta: f64) {
        if !delta.is_finite() {
            return;
        }
        self.target = (self.target + delta).clamp(0.0, self.limit);
    }

    /// Ease the current position toward the target. Frame-rate independent:
    /// the configured lerp factor applies per 60fps reference frame whatever
    /// the actual `dt_ms` is.
    pub fn advance(&mut self, dt_ms: f64) -> f64 {
        let frames = (dt_ms / REFERENCE_FRAME_MS).max(0.0);
        let step = 1.0 - (1.0 - self.config.lerp).powf(frames);
        self.current += (self.target - self.current) * step;
        if (self.target - self.current).abs() < SETTLE_EPSILON {
            self.current = self.target;
        }
        self.current
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroll_with_limit(limit: f64) -> VirtualScroll {
        let mut vs = VirtualScroll::new(SmoothScrollConfig::default());
        vs.set_limit(limit);
        vs
    }

    #[test]
    fn eases_monotonically_toward_the_target() {
        let mut vs = scroll_with_limit(5000.0);
        vs.add_wheel(1000.0);
        let mut prev = 0.0;
        for _ in 0..300 {
            let pos = vs.advance(16.67);
            assert!(pos >= prev, "eased position moved backwards");
            assert!(pos <= 1000.0);
            prev = pos;
        }
        assert!(vs.is_settled());
        assert_eq!(vs.current(), 1000.0);
    }

    #[test]
    fn target_clamps_to_limit_and_zero() {
        let mut vs = scroll_with_limit(500.0);
        vs.add_wheel(10_000.0);
        assert_eq!(vs.target(), 500.0);
        vs.add_wheel(-99_999.0);
        assert_eq!(vs.target(), 0.0);
        vs.add_wheel(f64::NAN);
        assert_eq!(vs.target(), 0.0);
    }

    #[test]
    fn shrinking_the_limit_reclamps_positions() {
        let mut vs = scroll_with_limit(5000.0);
        vs.jump_to(4000.0);
        vs.set_limit(1000.0);
        assert_eq!(vs.current(), 1000.0);
        assert_eq!(vs.target(), 1000.0);
    }

    #[test]
    fn jump_to_syncs_and_settles() {
        let mut vs = scroll_with_limit(5000.0);
        vs.add_wheel(2000.0);
        vs.advance(16.67);
        vs.jump_to(300.0);
        assert!(vs.is_settled());
        assert_eq!(vs.advance(16.67), 300.0);
    }

    #[test]
    fn large_frame_gaps_ease_further_not_past() {
        let mut vs = scroll_with_limit(5000.0);
        vs.add_wheel(1000.0);
        let slow_frame = vs.advance(100.0);
        let mut fast = scroll_with_limit(5000.0);
        fast.add_wheel(1000.0);
        let fast_frame = fast.advance(16.67);
        assert!(slow_frame > fast_frame);
        assert!(slow_frame <= 1000.0);
    }

    #[test]
    fn touch_input_uses_its_own_multiplier() {
        let mut vs = scroll_with_limit(5000.0);
        vs.add_touch(100.0);
        assert_eq!(vs.target(), 200.0);
    }
}
