pub mod layout;
pub mod toggle;

pub use layout::{sync_layout, wire_layout_listeners};
pub use toggle::wire_theme_toggle;
