//! View-state controller: owns theme, scroll, spring and reveal state and
//! tells subscribers when any of them changes.

use super::catalog::ProjectRecord;
use super::compose::{self, VisualOutput};
use super::config::ControllerConfig;
use super::progress::{ScrollTracker, ViewportGeometry};
use super::reveal::{Rect, RevealEvent, RevealEvents, RevealTrigger, SectionId};
use super::spring::Spring;
use super::theme::{Theme, ThemeState};
use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewChange {
    ThemeChanged(Theme),
    ProgressChanged(f32),
    Revealed(RevealEvent),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&ViewChange)>;

pub struct ViewController {
    config: ControllerConfig,
    theme: ThemeState,
    scroll: ScrollTracker,
    spring: Spring,
    reveals: RevealTrigger,
    clock: f64,
    subscribers: FnvHashMap<u64, Subscriber>,
    next_subscription: u64,
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}

impl ViewController {
    pub fn new(config: ControllerConfig) -> Self {
        let config = config.or_default();
        Self {
            spring: Spring::new(config.stiffness, config.damping, config.max_dt),
            reveals: RevealTrigger::new(config.reveal_margin_px, config.stagger_step),
            theme: ThemeState::new(),
            scroll: ScrollTracker::default(),
            clock: 0.0,
            subscribers: FnvHashMap::default(),
            next_subscription: 0,
            config,
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    // ---------------- Theme ----------------
    pub fn theme(&self) -> Theme {
        self.theme.current()
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.theme.toggle();
        log::info!("[theme] switched to {:?}", theme);
        self.notify(ViewChange::ThemeChanged(theme));
        theme
    }

    // ---------------- Scroll + reveal ----------------
    pub fn track_section(&mut self, stagger_index: u32) -> SectionId {
        self.reveals.track(stagger_index)
    }

    pub fn reveals(&self) -> &RevealTrigger {
        &self.reveals
    }

    pub fn scroll_progress(&self) -> f32 {
        self.scroll.progress()
    }

    pub fn smoothed_progress(&self) -> f32 {
        self.spring.position()
    }

    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Scroll/resize handler. `section_bounds[i]` must be the box of the
    /// i-th tracked section, in the same space as the viewport rect
    /// `(0, 0, viewport_width, viewport_height)`. A zero width skips the
    /// horizontal overlap test.
    pub fn on_layout(
        &mut self,
        geometry: ViewportGeometry,
        section_bounds: &[Rect],
    ) -> RevealEvents {
        let before = self.scroll.progress();
        let progress = self.scroll.update(geometry);
        self.spring.set_target(progress);
        if progress != before {
            self.notify(ViewChange::ProgressChanged(progress));
        }

        let viewport = Rect::new(0.0, 0.0, geometry.viewport_width, geometry.viewport_height);
        let events = self.reveals.evaluate(viewport, section_bounds, self.clock);
        for ev in &events {
            log::debug!("[reveal] section {} delay={:?}", ev.section.0, ev.delay);
            self.notify(ViewChange::Revealed(*ev));
        }
        events
    }

    // ---------------- Frame ----------------
    /// Per-frame step; returns the smoothed progress.
    pub fn tick(&mut self, dt_sec: f32) -> f32 {
        if dt_sec.is_finite() && dt_sec > 0.0 {
            self.clock += dt_sec.min(self.config.max_dt) as f64;
        }
        self.spring.step(dt_sec)
    }

    /// True while the spring or any entrance animation is still moving.
    pub fn is_animating(&self) -> bool {
        if !self.spring.is_settled() {
            return true;
        }
        let tail = self.config.entrance_duration.as_secs_f64();
        self.reveals.sections().iter().any(|s| match s.revealed_at {
            Some(at) => {
                let delay = self.reveals.stagger_delay(s.stagger_index).as_secs_f64();
                self.clock < at + delay + tail
            }
            None => false,
        })
    }

    pub fn render(&self, catalog: &[ProjectRecord]) -> VisualOutput {
        compose::render(
            &self.theme,
            self.spring.position(),
            &self.reveals,
            self.clock,
            catalog,
            &self.config,
        )
    }

    // ---------------- Observers ----------------
    pub fn subscribe(&mut self, callback: impl FnMut(&ViewChange) + 'static) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.subscribers.insert(id, Box::new(callback));
        SubscriptionId(id)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(&id.0).is_some()
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn notify(&mut self, change: ViewChange) {
        for callback in self.subscribers.values_mut() {
            callback(&change);
        }
    }
}
