/// Scroll geometry as reported by the host, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportGeometry {
    pub scroll_offset: f32,
    pub document_height: f32,
    pub viewport_height: f32,
    pub viewport_width: f32,
}

impl ViewportGeometry {
    /// Width starts at 0 (unknown); reveal checks then only use the
    /// vertical axis.
    pub fn new(scroll_offset: f32, document_height: f32, viewport_height: f32) -> Self {
        Self {
            scroll_offset,
            document_height,
            viewport_height,
            viewport_width: 0.0,
        }
    }

    pub fn with_width(mut self, viewport_width: f32) -> Self {
        self.viewport_width = viewport_width;
        self
    }

    /// Normalized vertical scroll completion in \[0, 1\].
    ///
    /// A document that fits inside the viewport (or geometry that is not
    /// finite) has no scrollable range and reports 0.
    pub fn progress(&self) -> f32 {
        let range = self.document_height - self.viewport_height;
        if !(range.is_finite() && self.scroll_offset.is_finite()) || range <= 0.0 {
            return 0.0;
        }
        (self.scroll_offset / range).clamp(0.0, 1.0)
    }
}

/// Holds the most recent geometry; later reports replace earlier ones.
#[derive(Clone, Debug, Default)]
pub struct ScrollTracker {
    geometry: ViewportGeometry,
    progress: f32,
}

impl ScrollTracker {
    pub fn update(&mut self, geometry: ViewportGeometry) -> f32 {
        self.geometry = geometry;
        self.progress = geometry.progress();
        self.progress
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn geometry(&self) -> ViewportGeometry {
        self.geometry
    }
}
