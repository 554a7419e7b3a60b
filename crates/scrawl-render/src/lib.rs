//! Scrawl Render Library
//!
//! Shape geometry and a tiny-skia raster surface for Scrawl.
//! [`PixmapSurface`] is the production [`scrawl_core::RasterSurface`].

pub mod geometry;
mod pixmap_surface;
mod renderer;

pub use geometry::{Geometry, geometry_for};
pub use pixmap_surface::{PixmapSurface, SurfaceError};
pub use renderer::{MARQUEE_COLOR, MARQUEE_FILL, render_segment, to_skia_path};
