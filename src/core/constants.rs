// Shared view/animation tuning constants used by the web frontend.

// Progress spring
pub const SPRING_STIFFNESS: f32 = 100.0;
pub const SPRING_DAMPING: f32 = 30.0;
pub const MAX_FRAME_DT_SEC: f32 = 1.0 / 30.0; // cap for slow frames / tab resume
pub const SPRING_REST_DELTA: f32 = 1e-4; // snap to target below this distance...
pub const SPRING_REST_SPEED: f32 = 1e-3; // ...and this speed (units per second)

// Reveal
pub const REVEAL_MARGIN_PX: f32 = -100.0; // negative shrinks the viewport
pub const STAGGER_STEP_MS: u64 = 100;
pub const ENTRANCE_DURATION_MS: u64 = 600;
pub const ENTRANCE_OFFSET_PX: f32 = 40.0; // starting translate-y of an unrevealed section

// Parallax background blobs
pub const PARALLAX_RANGE_PX: f32 = 320.0; // travel of a depth-1.0 blob over the full page
pub const BLOB_DEPTHS: [f32; 3] = [0.35, 0.6, 1.0];
pub const BLOB_SWELL: f32 = 0.15; // extra scale at full progress

// Loader splash
pub const LOADER_DURATION_MS: u64 = 800;
