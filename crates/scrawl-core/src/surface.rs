//! Raster surface abstraction and pixel snapshots.

use crate::style::Style;
use crate::tools::Tool;
use kurbo::Point;
use thiserror::Error;

/// Bytes per pixel in a snapshot.
pub const BYTES_PER_PIXEL: usize = 4;

/// Snapshot construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("Pixel buffer holds {actual} bytes, expected {expected} for {width}x{height}")]
    LengthMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

/// A capture of every pixel of a surface at one instant.
///
/// Bytes are RGBA8 in the surface's native layout, row-major, no padding.
#[derive(Clone, PartialEq, Eq)]
pub struct Snapshot {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Snapshot {
    /// Wrap a pixel buffer of `width * height * 4` bytes.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, SnapshotError> {
        let expected = width as usize * height as usize * BYTES_PER_PIXEL;
        if data.len() != expected {
            return Err(SnapshotError::LengthMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// A fully transparent snapshot.
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * BYTES_PER_PIXEL],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable pixel bytes. The length is fixed.
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Copy this snapshot into `dst` (a `dst_width` x `dst_height` buffer),
    /// anchored at the top-left. Pixels outside the overlap are left alone.
    pub fn copy_into(&self, dst: &mut [u8], dst_width: u32, dst_height: u32) {
        let cols = self.width.min(dst_width) as usize * BYTES_PER_PIXEL;
        let rows = self.height.min(dst_height) as usize;
        let src_stride = self.width as usize * BYTES_PER_PIXEL;
        let dst_stride = dst_width as usize * BYTES_PER_PIXEL;

        if src_stride == dst_stride && rows == self.height as usize {
            dst[..self.data.len()].copy_from_slice(&self.data);
            return;
        }

        for row in 0..rows {
            let src = &self.data[row * src_stride..row * src_stride + cols];
            dst[row * dst_stride..row * dst_stride + cols].copy_from_slice(src);
        }
    }
}

impl std::fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Snapshot")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.data.len())
            .finish()
    }
}

/// One renderer invocation: the drag's anchor, the current sample, and how to paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeSegment {
    pub anchor: Point,
    pub current: Point,
    pub tool: Tool,
    pub style: Style,
}

/// A raster drawing surface the gesture engine can paint on and snapshot.
pub trait RasterSurface {
    /// Size in pixels (width, height).
    fn size(&self) -> (u32, u32);

    /// On-screen position of the surface's top-left corner, in device coordinates.
    fn origin(&self) -> Point;

    /// Set every pixel to transparent.
    fn clear(&mut self);

    /// Copy out every pixel.
    fn capture(&self) -> Snapshot;

    /// Replace the current contents with `snapshot`, painted at the origin.
    fn restore(&mut self, snapshot: &Snapshot);

    /// Rasterize one segment with the shape renderer.
    fn paint(&mut self, segment: &StrokeSegment);

    /// Change the pixel size. Contents are discarded.
    fn resize(&mut self, width: u32, height: u32);
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_length_checked() {
        assert!(Snapshot::new(2, 2, vec![0; 16]).is_ok());
        let err = Snapshot::new(2, 2, vec![0; 15]).unwrap_err();
        assert_eq!(
            err,
            SnapshotError::LengthMismatch {
                width: 2,
                height: 2,
                expected: 16,
                actual: 15
            }
        );
    }

    #[test]
    fn test_blank_snapshot() {
        let mut snapshot = Snapshot::blank(3, 2);
        assert_eq!(snapshot.data().len(), 24);
        assert!(snapshot.data().iter().all(|&b| b == 0));
        snapshot.pixels_mut()[0] = 5;
        assert_eq!(snapshot.data()[0], 5);
    }

    #[test]
    fn test_copy_into_same_size() {
        let data: Vec<u8> = (0..16).collect();
        let snapshot = Snapshot::new(2, 2, data.clone()).unwrap();
        let mut dst = vec![0; 16];
        snapshot.copy_into(&mut dst, 2, 2);
        assert_eq!(dst, data);
    }

    #[test]
    fn test_copy_into_larger_target_paints_at_origin() {
        let snapshot = Snapshot::new(1, 1, vec![9, 9, 9, 9]).unwrap();
        let mut dst = vec![0; 2 * 2 * 4];
        snapshot.copy_into(&mut dst, 2, 2);
        assert_eq!(&dst[..4], &[9, 9, 9, 9]);
        assert!(dst[4..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_copy_into_smaller_target_clips() {
        let snapshot = Snapshot::new(2, 2, vec![7; 16]).unwrap();
        let mut dst = vec![0; 4];
        snapshot.copy_into(&mut dst, 1, 1);
        assert_eq!(dst, vec![7; 4]);
    }
}
