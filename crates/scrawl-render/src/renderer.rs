//! Shape renderer: rasterizes one stroke segment onto a pixmap with tiny-skia.

use crate::geometry::{Geometry, SHAPE_OUTLINE_WIDTH, geometry_for};
use kurbo::{BezPath, PathEl};
use scrawl_core::style::RgbaColor;
use scrawl_core::surface::StrokeSegment;
use tiny_skia::{
    BlendMode, FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, PixmapMut, Stroke,
    StrokeDash, Transform,
};

/// Marquee accent color.
pub const MARQUEE_COLOR: RgbaColor = RgbaColor::rgb(59, 130, 246);

/// Marquee fill: the accent at low emphasis.
pub const MARQUEE_FILL: RgbaColor = RgbaColor::new(59, 130, 246, 25);

/// Dash and gap length of the marquee outline.
const MARQUEE_DASH: f32 = 4.0;

/// Paint one segment onto `pixmap`.
///
/// Colors must already be valid; nothing here checks style input.
pub fn render_segment(pixmap: &mut PixmapMut<'_>, segment: &StrokeSegment) {
    let style = &segment.style;
    let geometry = geometry_for(
        segment.tool,
        segment.anchor,
        segment.current,
        style.stroke_width,
    );

    match geometry {
        Geometry::Freehand(path) => {
            let Some(path) = to_skia_path(&path) else {
                return;
            };
            let stroke = Stroke {
                width: style.stroke_width as f32,
                line_cap: LineCap::Round,
                line_join: LineJoin::Round,
                ..Stroke::default()
            };
            pixmap.stroke_path(
                &path,
                &solid(style.stroke_color),
                &stroke,
                Transform::identity(),
                None,
            );
        }
        Geometry::Dot(path) => {
            let Some(path) = to_skia_path(&path) else {
                return;
            };
            pixmap.fill_path(
                &path,
                &solid(style.stroke_color),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
        }
        Geometry::Eraser(path) => {
            let Some(path) = to_skia_path(&path) else {
                return;
            };
            // Destination pixels under the disc are cleared, not painted over.
            let mut paint = solid(RgbaColor::black());
            paint.blend_mode = BlendMode::DestinationOut;
            pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
        Geometry::Shape { path, closed } => {
            let Some(path) = to_skia_path(&path) else {
                return;
            };
            if closed {
                if let Some(fill) = style.fill_paint() {
                    pixmap.fill_path(
                        &path,
                        &solid(fill.into()),
                        FillRule::Winding,
                        Transform::identity(),
                        None,
                    );
                }
            }
            let stroke = Stroke {
                width: SHAPE_OUTLINE_WIDTH as f32,
                ..Stroke::default()
            };
            pixmap.stroke_path(
                &path,
                &solid(style.stroke_paint().into()),
                &stroke,
                Transform::identity(),
                None,
            );
        }
        Geometry::Marquee(path) => {
            let Some(path) = to_skia_path(&path) else {
                return;
            };
            pixmap.fill_path(
                &path,
                &solid(MARQUEE_FILL),
                FillRule::Winding,
                Transform::identity(),
                None,
            );
            let stroke = Stroke {
                width: 1.0,
                dash: StrokeDash::new(vec![MARQUEE_DASH, MARQUEE_DASH], 0.0),
                ..Stroke::default()
            };
            pixmap.stroke_path(
                &path,
                &solid(MARQUEE_COLOR),
                &stroke,
                Transform::identity(),
                None,
            );
        }
    }
}

/// Anti-aliased solid paint.
fn solid(color: RgbaColor) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

/// Convert a kurbo path to a tiny-skia path.
/// Returns None for paths tiny-skia considers empty.
pub fn to_skia_path(path: &BezPath) -> Option<Path> {
    let mut builder = PathBuilder::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(p1, p2) => {
                builder.quad_to(p1.x as f32, p1.y as f32, p2.x as f32, p2.y as f32)
            }
            PathEl::CurveTo(p1, p2, p3) => builder.cubic_to(
                p1.x as f32,
                p1.y as f32,
                p2.x as f32,
                p2.y as f32,
                p3.x as f32,
                p3.y as f32,
            ),
            PathEl::ClosePath => builder.close(),
        }
    }
    builder.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::line_path;
    use kurbo::Point;

    #[test]
    fn test_to_skia_path_keeps_bounds() {
        let path = to_skia_path(&line_path(Point::new(1.0, 2.0), Point::new(30.0, 40.0))).unwrap();
        let bounds = path.bounds();
        assert!((bounds.left() - 1.0).abs() < f32::EPSILON);
        assert!((bounds.top() - 2.0).abs() < f32::EPSILON);
        assert!((bounds.right() - 30.0).abs() < f32::EPSILON);
        assert!((bounds.bottom() - 40.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_to_skia_path_empty() {
        assert!(to_skia_path(&BezPath::new()).is_none());
    }
}
