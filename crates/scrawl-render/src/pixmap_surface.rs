//! CPU raster surface backed by a tiny-skia pixmap.

use crate::renderer::render_segment;
use kurbo::Point;
use scrawl_core::style::RgbaColor;
use scrawl_core::surface::{RasterSurface, Snapshot, StrokeSegment};
use thiserror::Error;
use tiny_skia::{Color, Pixmap};

/// Surface errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("Cannot create a {width}x{height} surface")]
    InvalidSize { width: u32, height: u32 },
}

/// Drawing surface holding premultiplied RGBA8 pixels.
pub struct PixmapSurface {
    pixmap: Pixmap,
    origin: Point,
}

impl PixmapSurface {
    /// Create a transparent surface. Fails for zero-sized dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        let pixmap =
            Pixmap::new(width, height).ok_or(SurfaceError::InvalidSize { width, height })?;
        Ok(Self {
            pixmap,
            origin: Point::ZERO,
        })
    }

    /// Set where the surface's top-left sits on screen.
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Raw premultiplied RGBA8 bytes.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Straight-alpha color of one pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<RgbaColor> {
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some(RgbaColor::new(c.red(), c.green(), c.blue(), c.alpha()))
    }
}

impl std::fmt::Debug for PixmapSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixmapSurface")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .field("origin", &self.origin)
            .finish()
    }
}

impl RasterSurface for PixmapSurface {
    fn size(&self) -> (u32, u32) {
        (self.pixmap.width(), self.pixmap.height())
    }

    fn origin(&self) -> Point {
        self.origin
    }

    fn clear(&mut self) {
        self.pixmap.fill(Color::TRANSPARENT);
    }

    fn capture(&self) -> Snapshot {
        let mut snapshot = Snapshot::blank(self.pixmap.width(), self.pixmap.height());
        snapshot.pixels_mut().copy_from_slice(self.pixmap.data());
        snapshot
    }

    fn restore(&mut self, snapshot: &Snapshot) {
        let (width, height) = self.size();
        if (snapshot.width(), snapshot.height()) != (width, height) {
            log::warn!(
                "Restoring a {}x{} snapshot onto a {}x{} surface",
                snapshot.width(),
                snapshot.height(),
                width,
                height
            );
            self.clear();
        }
        snapshot.copy_into(self.pixmap.data_mut(), width, height);
    }

    fn paint(&mut self, segment: &StrokeSegment) {
        render_segment(&mut self.pixmap.as_mut(), segment);
    }

    fn resize(&mut self, width: u32, height: u32) {
        match Pixmap::new(width, height) {
            Some(pixmap) => self.pixmap = pixmap,
            None => {
                log::warn!("Ignoring resize to {}x{}", width, height);
                self.clear();
            }
        }
    }
}
