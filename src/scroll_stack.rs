//! Scroll-position-driven "stacking cards" layout engine.
//!
//! The engine is DOM-free: it owns a per-card state table and, given the
//! current scroll offset and viewport bounds, computes which cards need a new
//! transform written to their element. One engine instance per mounted
//! stacking region; the hydrate-side driver in `app::stack` feeds it frames.

/// Epsilon below which a translation change is not worth a style write.
const TRANSLATE_EPSILON: f64 = 0.1;
const SCALE_EPSILON: f64 = 0.001;
const ROTATION_EPSILON: f64 = 0.1;
const BLUR_EPSILON: f64 = 0.1;

/// A viewport-relative position, either absolute pixels or a percentage of
/// the container height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    Px(f64),
    Percent(f64),
}

impl Anchor {
    /// Resolve to pixels against the current container height.
    pub fn resolve(self, container_height: f64) -> f64 {
        match self {
            Anchor::Px(px) => px,
            Anchor::Percent(pct) => pct / 100.0 * container_height,
        }
    }

    /// Parse `"20%"` or `"120"` style values.
    pub fn parse(value: &str) -> Option<Anchor> {
        let value = value.trim();
        if let Some(pct) = value.strip_suffix('%') {
            pct.trim().parse().ok().map(Anchor::Percent)
        } else {
            value.parse().ok().map(Anchor::Px)
        }
    }
}

/// Where the driver reads scroll position from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollSource {
    Window,
    /// A dedicated internally-scrolling container.
    #[default]
    Container,
}

/// All effect-shaping parameters for one stacking region.
#[derive(Debug, Clone, PartialEq)]
pub struct StackConfig {
    /// Vertical gap between un-stacked cards.
    pub card_gap_px: f64,
    /// How much smaller each successive card's floor scale is.
    pub per_card_scale_delta: f64,
    /// Vertical offset between consecutively stacked cards' pinned positions.
    pub stacked_offset_px: f64,
    /// Position at which the front of the stack is anchored.
    pub pin_anchor: Anchor,
    /// Position at which a card finishes shrinking to its floor scale.
    pub scale_completion_anchor: Anchor,
    /// Floor scale for the first card.
    pub base_scale: f64,
    /// Per-depth rotation accentuation, 0 disables.
    pub rotation_step_deg: f64,
    /// Per-depth blur accentuation, 0 disables.
    pub blur_step_px: f64,
    pub scroll_source: ScrollSource,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            card_gap_px: 100.0,
            per_card_scale_delta: 0.03,
            stacked_offset_px: 30.0,
            pin_anchor: Anchor::Percent(20.0),
            scale_completion_anchor: Anchor::Percent(10.0),
            base_scale: 0.85,
            rotation_step_deg: 0.0,
            blur_step_px: 0.0,
            scroll_source: ScrollSource::Container,
        }
    }
}

/// The transform applied to one card element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub translate_y: f64,
    pub scale: f64,
    pub rotation_deg: f64,
    pub blur_px: f64,
}

impl Default for CardTransform {
    fn default() -> Self {
        Self {
            translate_y: 0.0,
            scale: 1.0,
            rotation_deg: 0.0,
            blur_px: 0.0,
        }
    }
}

impl CardTransform {
    fn rounded(self) -> Self {
        Self {
            translate_y: round_to(self.translate_y, 100.0),
            scale: round_to(self.scale, 1000.0),
            rotation_deg: round_to(self.rotation_deg, 100.0),
            blur_px: round_to(self.blur_px, 100.0),
        }
    }

    /// Whether any component moved beyond its epsilon since `other`.
    pub fn differs_from(&self, other: &CardTransform) -> bool {
        (self.translate_y - other.translate_y).abs() > TRANSLATE_EPSILON
            || (self.scale - other.scale).abs() > SCALE_EPSILON
            || (self.rotation_deg - other.rotation_deg).abs() > ROTATION_EPSILON
            || (self.blur_px - other.blur_px).abs() > BLUR_EPSILON
    }
}

fn round_to(value: f64, factor: f64) -> f64 {
    (value * factor).round() / factor
}

/// Measurements the driver reads from the DOM each frame. All offsets are in
/// document coordinates of the scroll source.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub scroll_top: f64,
    pub container_height: f64,
    /// Bottom of the section containing the cards.
    pub section_bottom: f64,
    /// Offset of the end marker after the last card.
    pub end_offset: f64,
}

/// What one frame pass asks the driver to do.
#[derive(Debug, Default)]
pub struct FrameOutput {
    /// Card indices whose element transform must be rewritten.
    pub writes: Vec<(usize, CardTransform)>,
    /// True on the frame the final card becomes fully pinned in view.
    pub stack_completed: bool,
}

#[derive(Debug, Default, Clone)]
struct CardState {
    natural_offset: f64,
    stack_slot: Option<usize>,
    entry_scroll: Option<f64>,
    applied: Option<CardTransform>,
}

pub struct ScrollStackEngine {
    config: StackConfig,
    cards: Vec<CardState>,
    complete_latched: bool,
    in_flight: bool,
}

impl ScrollStackEngine {
    pub fn new(config: StackConfig) -> Self {
        Self {
            config,
            cards: Vec::new(),
            complete_latched: false,
            in_flight: false,
        }
    }

    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    pub fn stack_slot(&self, index: usize) -> Option<usize> {
        self.cards.get(index).and_then(|c| c.stack_slot)
    }

    pub fn applied_transform(&self, index: usize) -> Option<CardTransform> {
        self.cards.get(index).and_then(|c| c.applied)
    }

    /// (Re)build the card table from untransformed document offsets. Clears
    /// stack slots and cached transforms; called on mount and whenever the
    /// set of card elements or the layout changes.
    pub fn set_card_offsets(&mut self, natural_offsets: &[f64]) {
        self.cards = natural_offsets
            .iter()
            .map(|&natural_offset| CardState {
                natural_offset,
                ..CardState::default()
            })
            .collect();
        self.complete_latched = false;
    }

    fn trigger_start(&self, index: usize, pin_anchor_px: f64) -> f64 {
        self.cards[index].natural_offset
            - pin_anchor_px
            - index as f64 * self.config.stacked_offset_px
    }

    /// One scroll-driven pass. Re-entrant invocations are dropped, not
    /// queued; with fewer than two cards the pass is a no-op.
    pub fn frame(&mut self, view: Viewport) -> FrameOutput {
        let mut out = FrameOutput::default();
        if self.in_flight || self.cards.len() < 2 {
            return out;
        }
        self.in_flight = true;

        let ch = view.container_height;
        let pin_anchor_px = self.config.pin_anchor.resolve(ch);
        let scale_end_px = self.config.scale_completion_anchor.resolve(ch);
        let scroll_top = view.scroll_top;

        // Slot bookkeeping: assign on first entry, unwind on retreat.
        for i in 0..self.cards.len() {
            let trigger_start = self.trigger_start(i, pin_anchor_px);
            if scroll_top >= trigger_start {
                if self.cards[i].stack_slot.is_none() {
                    let slot = self.cards[..i]
                        .iter()
                        .filter(|c| c.stack_slot.is_some())
                        .count();
                    self.cards[i].stack_slot = Some(slot);
                    self.cards[i].entry_scroll = Some(scroll_top);
                }
            } else if self.cards[i].stack_slot.is_some() {
                self.cards[i].stack_slot = None;
                self.cards[i].entry_scroll = None;
            }
        }

        // Topmost active card, computed once per frame for depth blur.
        let top_active = if self.config.blur_px_enabled() {
            (0..self.cards.len())
                .filter(|&i| scroll_top >= self.trigger_start(i, pin_anchor_px))
                .next_back()
        } else {
            None
        };

        let last = self.cards.len() - 1;
        for i in 0..self.cards.len() {
            let trigger_start = self.trigger_start(i, pin_anchor_px);
            let trigger_end = self.cards[i].natural_offset - scale_end_px;
            // Pin window never inverts: floored at trigger_start.
            let pin_end = (view.section_bottom - ch * 0.5)
                .min(view.end_offset - ch * 0.5)
                .max(trigger_start);

            let progress = scale_progress(scroll_top, trigger_start, trigger_end);
            let floor_scale = self.config.base_scale + i as f64 * self.config.per_card_scale_delta;
            let scale = 1.0 - progress * (1.0 - floor_scale);
            let rotation_deg = i as f64 * self.config.rotation_step_deg * progress;
            let blur_px = match top_active {
                Some(top) if i < top => (top - i) as f64 * self.config.blur_step_px,
                _ => 0.0,
            };

            let translate_y = if scroll_top < trigger_start {
                0.0
            } else {
                // While pinned the translation compensates exactly for the
                // scroll delta; past pin_end it freezes at the pin_end value.
                let slot = self.cards[i].stack_slot.unwrap_or(0);
                let anchor_scroll = scroll_top.min(pin_end);
                pin_anchor_px + slot as f64 * self.config.stacked_offset_px
                    - self.cards[i].natural_offset
                    + anchor_scroll
            };
            let translate_y = clamp_translation(translate_y, trigger_start, pin_end, ch);

            let next = CardTransform {
                translate_y,
                scale,
                rotation_deg,
                blur_px,
            }
            .rounded();
            let changed = match self.cards[i].applied {
                Some(prev) => next.differs_from(&prev),
                None => true,
            };
            if changed {
                self.cards[i].applied = Some(next);
                out.writes.push((i, next));
            }

            if i == last {
                let in_view = scroll_top >= trigger_start && scroll_top <= pin_end;
                if in_view && !self.complete_latched {
                    self.complete_latched = true;
                    out.stack_completed = true;
                } else if !in_view && self.complete_latched {
                    self.complete_latched = false;
                }
            }
        }

        self.in_flight = false;
        out
    }
}

impl StackConfig {
    fn blur_px_enabled(&self) -> bool {
        self.blur_step_px > 0.0
    }
}

fn scale_progress(scroll_top: f64, start: f64, end: f64) -> f64 {
    if end <= start {
        // Degenerate anchors produce an instant transition, not a division
        // by zero.
        return if scroll_top >= start { 1.0 } else { 0.0 };
    }
    let progress = (scroll_top - start) / (end - start);
    if !progress.is_finite() {
        return 0.0;
    }
    progress.clamp(0.0, 1.0)
}

/// The pin window itself bounds legitimate travel, so the clamp only has to
/// catch malformed configuration. Non-finite input collapses to zero.
fn clamp_translation(translate_y: f64, trigger_start: f64, pin_end: f64, ch: f64) -> f64 {
    if !translate_y.is_finite() {
        return 0.0;
    }
    let max = (pin_end - trigger_start).max(0.0) + ch * 2.0;
    translate_y.clamp(-ch, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CH: f64 = 800.0;

    fn engine_with_cards(offsets: &[f64]) -> ScrollStackEngine {
        let config = StackConfig {
            pin_anchor: Anchor::Px(100.0),
            scale_completion_anchor: Anchor::Px(50.0),
            stacked_offset_px: 30.0,
            ..StackConfig::default()
        };
        let mut engine = ScrollStackEngine::new(config);
        engine.set_card_offsets(offsets);
        engine
    }

    fn view(scroll_top: f64) -> Viewport {
        Viewport {
            scroll_top,
            container_height: CH,
            section_bottom: 10_000.0,
            end_offset: 10_000.0,
        }
    }

    /// Rendered screen position of a card after its transform is applied.
    fn screen_y(engine: &ScrollStackEngine, index: usize, scroll_top: f64) -> f64 {
        let transform = engine.applied_transform(index).unwrap();
        engine.cards[index].natural_offset + transform.translate_y - scroll_top
    }

    // Four cards spaced 800px apart: trigger starts at 500, 1270, 2040, 2810.
    const OFFSETS: [f64; 4] = [600.0, 1400.0, 2200.0, 3000.0];

    #[test]
    fn anchor_resolution_and_parsing() {
        assert_eq!(Anchor::Px(120.0).resolve(CH), 120.0);
        assert_eq!(Anchor::Percent(20.0).resolve(CH), 160.0);
        assert_eq!(Anchor::parse("20%"), Some(Anchor::Percent(20.0)));
        assert_eq!(Anchor::parse(" 45 "), Some(Anchor::Px(45.0)));
        assert_eq!(Anchor::parse("abc"), None);
    }

    #[test]
    fn translation_is_zero_below_trigger_start() {
        let mut engine = engine_with_cards(&OFFSETS);
        for scroll in [0.0, 250.0, 499.9] {
            engine.frame(view(scroll));
            let transform = engine.applied_transform(0).unwrap();
            assert_eq!(transform.translate_y, 0.0, "scroll {scroll}");
        }
    }

    #[test]
    fn pinned_card_holds_its_anchor_position() {
        let mut engine = engine_with_cards(&OFFSETS);
        // Card 0 pins at scroll 500; its screen position must not depend on
        // the exact offset while the pin window is open.
        for scroll in [500.0, 640.0, 777.5, 900.0] {
            engine.frame(view(scroll));
            assert_eq!(screen_y(&engine, 0, scroll), 100.0, "scroll {scroll}");
        }
    }

    #[test]
    fn all_four_cards_land_on_the_expected_rows() {
        let mut engine = engine_with_cards(&OFFSETS);
        let scroll = 3100.0;
        engine.frame(view(scroll));
        let mut positions = Vec::new();
        for i in 0..4 {
            positions.push(screen_y(&engine, i, scroll));
        }
        assert_eq!(positions, vec![100.0, 130.0, 160.0, 190.0]);
    }

    #[test]
    fn scaling_is_monotonic_and_clamped() {
        let mut engine = engine_with_cards(&OFFSETS);
        let mut prev = f64::INFINITY;
        for step in 0..40 {
            let scroll = step as f64 * 50.0;
            engine.frame(view(scroll));
            let scale = engine.applied_transform(0).unwrap().scale;
            assert!(scale <= prev + 1e-9, "scale increased at scroll {scroll}");
            assert!((0.85..=1.0).contains(&scale));
            prev = scale;
        }
        // Fully shrunk at the floor scale once past trigger_end (550 here).
        assert_eq!(prev, 0.85);
    }

    #[test]
    fn slots_assign_in_order_and_stay_contiguous() {
        let mut engine = engine_with_cards(&OFFSETS);
        engine.frame(view(2100.0)); // cards 0..=2 past their triggers
        assert_eq!(engine.stack_slot(0), Some(0));
        assert_eq!(engine.stack_slot(1), Some(1));
        assert_eq!(engine.stack_slot(2), Some(2));
        assert_eq!(engine.stack_slot(3), None);

        // Retreat above card 2's trigger: only the suffix unwinds.
        engine.frame(view(1500.0));
        assert_eq!(engine.stack_slot(0), Some(0));
        assert_eq!(engine.stack_slot(1), Some(1));
        assert_eq!(engine.stack_slot(2), None);
    }

    #[test]
    fn scroll_round_trip_unwinds_everything() {
        let mut engine = engine_with_cards(&OFFSETS);
        for step in 0..80 {
            engine.frame(view(step as f64 * 50.0));
        }
        for step in (0..80).rev() {
            engine.frame(view(step as f64 * 50.0));
        }
        engine.frame(view(0.0));
        for i in 0..4 {
            assert_eq!(engine.stack_slot(i), None, "card {i} still slotted");
            let transform = engine.applied_transform(i).unwrap();
            assert_eq!(transform.translate_y, 0.0, "card {i} still translated");
        }
    }

    #[test]
    fn zero_or_one_card_never_pins() {
        let mut empty = engine_with_cards(&[]);
        let out = empty.frame(view(1000.0));
        assert!(out.writes.is_empty());

        let mut single = engine_with_cards(&[600.0]);
        let out = single.frame(view(1000.0));
        assert!(out.writes.is_empty());
        assert_eq!(single.stack_slot(0), None);
    }

    #[test]
    fn sub_epsilon_scroll_deltas_produce_no_writes() {
        let mut engine = engine_with_cards(&OFFSETS);
        // Deep in the pin region, scale is already at its floor; a 0.05px
        // scroll delta moves translation below the write epsilon.
        engine.frame(view(1000.0));
        let out = engine.frame(view(1000.05));
        assert!(out.writes.is_empty());
    }

    #[test]
    fn inverted_pin_window_is_floored_at_trigger_start() {
        let mut engine = engine_with_cards(&OFFSETS);
        // Section/end bounds far above the triggers would invert the window.
        let cramped = Viewport {
            scroll_top: 600.0,
            container_height: CH,
            section_bottom: 200.0,
            end_offset: 200.0,
        };
        engine.frame(cramped);
        // pin_end == trigger_start, so translation froze at the entry value.
        let transform = engine.applied_transform(0).unwrap();
        assert_eq!(transform.translate_y, 0.0);
    }

    #[test]
    fn translation_clamp_bounds() {
        assert_eq!(clamp_translation(f64::NAN, 0.0, 100.0, CH), 0.0);
        assert_eq!(clamp_translation(-5000.0, 0.0, 100.0, CH), -CH);
        assert_eq!(clamp_translation(1e12, 0.0, 100.0, CH), 100.0 + 2.0 * CH);
    }

    #[test]
    fn non_finite_anchors_degrade_to_identity() {
        let config = StackConfig {
            pin_anchor: Anchor::Px(f64::NAN),
            scale_completion_anchor: Anchor::Px(f64::NAN),
            ..StackConfig::default()
        };
        let mut engine = ScrollStackEngine::new(config);
        engine.set_card_offsets(&OFFSETS);
        engine.frame(view(2000.0));
        for i in 0..4 {
            let transform = engine.applied_transform(i).unwrap();
            assert_eq!(transform.translate_y, 0.0);
            assert_eq!(transform.scale, 1.0);
            assert!(transform.rotation_deg.is_finite());
        }
    }

    #[test]
    fn stack_complete_fires_once_per_entry() {
        let mut engine = engine_with_cards(&OFFSETS);
        assert!(!engine.frame(view(2000.0)).stack_completed);
        assert!(engine.frame(view(2900.0)).stack_completed);
        // Still in view: no repeat fire.
        assert!(!engine.frame(view(3100.0)).stack_completed);
        // Leave and re-enter: fires again.
        assert!(!engine.frame(view(2000.0)).stack_completed);
        assert!(engine.frame(view(2900.0)).stack_completed);
    }

    #[test]
    fn rebuilding_offsets_clears_state() {
        let mut engine = engine_with_cards(&OFFSETS);
        engine.frame(view(3100.0));
        assert!(engine.stack_slot(3).is_some());
        engine.set_card_offsets(&[700.0, 1500.0, 2300.0, 3100.0]);
        for i in 0..4 {
            assert_eq!(engine.stack_slot(i), None);
            assert_eq!(engine.applied_transform(i), None);
        }
    }

    #[test]
    fn blur_tracks_depth_below_topmost_card() {
        let config = StackConfig {
            pin_anchor: Anchor::Px(100.0),
            scale_completion_anchor: Anchor::Px(400.0),
            stacked_offset_px: 30.0,
            blur_step_px: 1.5,
            ..StackConfig::default()
        };
        let mut engine = ScrollStackEngine::new(config);
        engine.set_card_offsets(&OFFSETS);
        engine.frame(view(2100.0)); // topmost active card is 2
        assert_eq!(engine.applied_transform(0).unwrap().blur_px, 3.0);
        assert_eq!(engine.applied_transform(1).unwrap().blur_px, 1.5);
        assert_eq!(engine.applied_transform(2).unwrap().blur_px, 0.0);
        assert_eq!(engine.applied_transform(3).unwrap().blur_px, 0.0);
    }
}
