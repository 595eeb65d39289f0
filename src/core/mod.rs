pub mod catalog;
pub mod compose;
pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod progress;
pub mod reveal;
pub mod spring;
pub mod theme;

pub use catalog::{ProjectRecord, Side, PROJECTS};
pub use compose::{render, VisualOutput};
pub use config::ControllerConfig;
pub use controller::{SubscriptionId, ViewChange, ViewController};
pub use error::{ConfigError, ConfigResult};
pub use progress::{ScrollTracker, ViewportGeometry};
pub use reveal::{intersects, Rect, RevealEvent, RevealTrigger, SectionId};
pub use spring::Spring;
pub use theme::{Palette, Theme, ThemeState};
