//! One-shot "reveal on first viewport entry" tracking.
//!
//! Each tracked section carries a flag that flips false -> true the first time
//! its box overlaps the (margin-adjusted) viewport and never flips back. The
//! trigger is evaluated from scroll/resize handlers only.

use smallvec::SmallVec;
use std::time::Duration;

/// Axis-aligned box in CSS pixels. Sections and the viewport must share a
/// coordinate space (client rects with a `(0, 0)` viewport, or document
/// coordinates with the viewport at the scroll offset).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Grow by `margin` on every side; a negative margin shrinks. The inset
    /// on each axis stops at half the size, so an over-shrunk box collapses
    /// onto its centre line.
    pub fn inflate(&self, margin: f32) -> Rect {
        let mx = margin.max(-self.width.max(0.0) / 2.0);
        let my = margin.max(-self.height.max(0.0) / 2.0);
        Rect::new(
            self.x - mx,
            self.y - my,
            (self.width + 2.0 * mx).max(0.0),
            (self.height + 2.0 * my).max(0.0),
        )
    }
}

/// True when any part of `section` overlaps `viewport` grown by `margin`.
/// A viewport without a width only constrains the vertical axis.
pub fn intersects(section: Rect, viewport: Rect, margin: f32) -> bool {
    let vp = viewport.inflate(margin);
    let vertical = section.top() < vp.bottom() && section.bottom() > vp.top();
    let horizontal = viewport.width <= 0.0
        || (section.left() < vp.right() && section.right() > vp.left());
    vertical && horizontal
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealEvent {
    pub section: SectionId,
    /// Stagger before the entrance animation starts.
    pub delay: Duration,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SectionReveal {
    pub stagger_index: u32,
    /// Controller clock (seconds) at the moment of reveal.
    pub revealed_at: Option<f64>,
}

impl SectionReveal {
    pub fn is_revealed(&self) -> bool {
        self.revealed_at.is_some()
    }
}

pub type RevealEvents = SmallVec<[RevealEvent; 4]>;

#[derive(Clone, Debug)]
pub struct RevealTrigger {
    sections: Vec<SectionReveal>,
    margin: f32,
    stagger_step: Duration,
}

impl RevealTrigger {
    pub fn new(margin: f32, stagger_step: Duration) -> Self {
        Self {
            sections: Vec::new(),
            margin,
            stagger_step,
        }
    }

    /// Register a section; ids are handed out in call order.
    pub fn track(&mut self, stagger_index: u32) -> SectionId {
        self.sections.push(SectionReveal {
            stagger_index,
            revealed_at: None,
        });
        SectionId(self.sections.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn sections(&self) -> &[SectionReveal] {
        &self.sections
    }

    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.sections.get(id.0).is_some_and(SectionReveal::is_revealed)
    }

    pub fn stagger_delay(&self, stagger_index: u32) -> Duration {
        self.stagger_step * stagger_index
    }

    /// Apply one observation for a single section. Returns the reveal event
    /// only on the false -> true transition.
    pub fn observe(
        &mut self,
        id: SectionId,
        intersecting: bool,
        now: f64,
    ) -> Option<RevealEvent> {
        let step = self.stagger_step;
        let section = self.sections.get_mut(id.0)?;
        if section.is_revealed() || !intersecting {
            return None;
        }
        section.revealed_at = Some(now);
        Some(RevealEvent {
            section: id,
            delay: step * section.stagger_index,
        })
    }

    /// Check every tracked section against `viewport`. `bounds[i]` is the box
    /// of `SectionId(i)`; sections without a box are skipped. Newly revealed
    /// sections are returned top edge first.
    pub fn evaluate(&mut self, viewport: Rect, bounds: &[Rect], now: f64) -> RevealEvents {
        let mut hits: SmallVec<[(f32, SectionId); 4]> = bounds
            .iter()
            .enumerate()
            .take(self.sections.len())
            .filter(|(i, b)| {
                !self.sections[*i].is_revealed() && intersects(**b, viewport, self.margin)
            })
            .map(|(i, b)| (b.top(), SectionId(i)))
            .collect();
        hits.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        hits.into_iter()
            .filter_map(|(_, id)| self.observe(id, true, now))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margin_delays_intersection() {
        let viewport = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let section = Rect::new(0.0, 750.0, 1000.0, 300.0);
        assert!(intersects(section, viewport, 0.0));
        assert!(!intersects(section, viewport, -100.0));
        assert!(intersects(section, viewport, 100.0));
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let viewport = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(!intersects(Rect::new(0.0, 100.0, 100.0, 50.0), viewport, 0.0));
    }

    #[test]
    fn over_shrunk_viewport_collapses_to_centre() {
        let vp = Rect::new(0.0, 0.0, 1200.0, 60.0).inflate(-100.0);
        assert_eq!(vp, Rect::new(100.0, 30.0, 1000.0, 0.0));
    }

    #[test]
    fn stagger_scales_with_index() {
        let mut t = RevealTrigger::new(0.0, Duration::from_millis(100));
        let id = t.track(3);
        let ev = t.observe(id, true, 0.0).unwrap();
        assert_eq!(ev.delay, Duration::from_millis(300));
    }

    #[test]
    fn unknown_section_is_ignored() {
        let mut t = RevealTrigger::new(0.0, Duration::ZERO);
        assert!(t.observe(SectionId(7), true, 0.0).is_none());
        assert!(!t.is_revealed(SectionId(7)));
    }
}
