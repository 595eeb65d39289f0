//! Pure mapping from view state to what the page should look like.

use super::catalog::{ProjectRecord, Side};
use super::config::ControllerConfig;
use super::constants::BLOB_SWELL;
use super::reveal::{RevealTrigger, SectionReveal};
use super::theme::{Palette, Theme, ThemeState};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlobTransform {
    pub offset: Vec2,
    pub scale: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionVisual {
    pub revealed: bool,
    pub opacity: f32,
    pub translate_y: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectLayout {
    pub index: usize,
    pub image_side: Side,
}

#[derive(Clone, Debug, PartialEq)]
pub struct VisualOutput {
    pub theme: Theme,
    pub palette: Palette,
    pub toggle_label: &'static str,
    pub progress_scale_x: f32,
    pub blobs: Vec<BlobTransform>,
    pub sections: Vec<SectionVisual>,
    pub projects: Vec<ProjectLayout>,
}

#[inline]
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Entrance state of one section at controller time `now` (seconds).
pub fn section_visual(
    reveal: &SectionReveal,
    now: f64,
    trigger: &RevealTrigger,
    cfg: &ControllerConfig,
) -> SectionVisual {
    let Some(revealed_at) = reveal.revealed_at else {
        return SectionVisual {
            revealed: false,
            opacity: 0.0,
            translate_y: cfg.entrance_offset_px,
        };
    };
    let delay = trigger.stagger_delay(reveal.stagger_index).as_secs_f64();
    let duration = cfg.entrance_duration.as_secs_f64();
    let elapsed = now - revealed_at - delay;
    let t = if duration > 0.0 {
        (elapsed / duration) as f32
    } else if elapsed >= 0.0 {
        1.0
    } else {
        0.0
    };
    let eased = ease_out_cubic(t);
    SectionVisual {
        revealed: true,
        opacity: eased,
        translate_y: cfg.entrance_offset_px * (1.0 - eased),
    }
}

pub fn blob_transforms(progress: f32, cfg: &ControllerConfig) -> Vec<BlobTransform> {
    let p = progress.clamp(0.0, 1.0);
    cfg.blob_depths
        .iter()
        .enumerate()
        .map(|(i, depth)| {
            // alternate horizontal drift so the blobs separate as the page scrolls
            let dir = if i % 2 == 0 { 1.0 } else { -1.0 };
            let travel = p * depth * cfg.parallax_range_px;
            BlobTransform {
                offset: Vec2::new(dir * travel * 0.25, -travel),
                scale: 1.0 + BLOB_SWELL * p * depth,
            }
        })
        .collect()
}

/// Compose the visual output. Deterministic in its inputs.
pub fn render(
    theme: &ThemeState,
    smoothed_progress: f32,
    reveals: &RevealTrigger,
    now: f64,
    catalog: &[ProjectRecord],
    cfg: &ControllerConfig,
) -> VisualOutput {
    let theme = theme.current();
    VisualOutput {
        theme,
        palette: theme.palette(),
        toggle_label: theme.toggle_label(),
        progress_scale_x: smoothed_progress.clamp(0.0, 1.0),
        blobs: blob_transforms(smoothed_progress, cfg),
        sections: reveals
            .sections()
            .iter()
            .map(|s| section_visual(s, now, reveals, cfg))
            .collect(),
        projects: (0..catalog.len())
            .map(|index| ProjectLayout {
                index,
                image_side: Side::for_index(index),
            })
            .collect(),
    }
}
