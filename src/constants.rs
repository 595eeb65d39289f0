// DOM hooks shared between `index.html` and the web frontend.

// Fixed chrome
pub const ID_LOADER: &str = "loader";
pub const ID_PROGRESS_BAR: &str = "scroll-progress";
pub const ID_NAV: &str = "site-nav";
pub const ID_NAV_LINKS: &str = "nav-links";
pub const ID_THEME_TOGGLE: &str = "theme-toggle";
pub const ID_PROFILE_IMAGE: &str = "profile-image";

// Sections
pub const ID_WORK_LIST: &str = "work-list";
pub const ID_ABOUT: &str = "about";
pub const ID_CONTACT: &str = "contact";
pub const ID_CONTACT_LINKS: &str = "contact-links";
pub const ID_CONTACT_EMAIL: &str = "contact-email";
pub const ID_CONTACT_PHONE: &str = "contact-phone";
pub const ID_FOOTER: &str = "footer-text";

// Parallax blobs are `blob-0`, `blob-1`, ...
pub const BLOB_ID_PREFIX: &str = "blob-";

// Classes
pub const CLASS_HIDDEN: &str = "hidden";
pub const CLASS_PROJECT: &str = "project";
pub const CLASS_IMAGE_LEFT: &str = "image-left";
pub const CLASS_IMAGE_RIGHT: &str = "image-right";
