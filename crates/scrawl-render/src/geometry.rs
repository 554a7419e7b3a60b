//! Per-tool geometry, in surface-local coordinates.
//!
//! Everything here is pure: an anchor, a current point and a tool go in,
//! kurbo paths come out. Rasterization lives in [`crate::renderer`].

use kurbo::{BezPath, Circle, Ellipse, Point, Rect, RoundedRect, Shape as KurboShape, Vec2};
use scrawl_core::tools::Tool;
use std::f64::consts::PI;

/// Radius of the eraser disc. Not style-driven.
pub const ERASER_RADIUS: f64 = 10.0;

/// Outline width of geometric shapes.
pub const SHAPE_OUTLINE_WIDTH: f64 = 2.0;

/// Upper bound on rounded rectangle corner radius.
pub const MAX_CORNER_RADIUS: f64 = 10.0;

/// Length of each arrowhead barb.
pub const ARROW_BARB_LENGTH: f64 = 20.0;

/// Angle between the arrow shaft and each barb.
pub const ARROW_BARB_ANGLE: f64 = PI / 6.0;

/// Flattening tolerance for curves.
const TOLERANCE: f64 = 0.1;

/// What to paint for one segment, and how.
#[derive(Debug, Clone)]
pub enum Geometry {
    /// Open path stroked with round caps and joins.
    Freehand(BezPath),
    /// Filled with the stroke color (a freehand sample that didn't move).
    Dot(BezPath),
    /// Region cleared to transparency.
    Eraser(BezPath),
    /// Filled when closed, then outlined.
    Shape { path: BezPath, closed: bool },
    /// Dashed, translucent selection marquee.
    Marquee(BezPath),
}

/// Geometry for a segment drawn with `tool`.
///
/// `stroke_width` only matters for the freehand dot.
pub fn geometry_for(tool: Tool, anchor: Point, current: Point, stroke_width: f64) -> Geometry {
    match tool {
        Tool::Draw => {
            if anchor == current {
                Geometry::Dot(Circle::new(current, stroke_width / 2.0).to_path(TOLERANCE))
            } else {
                Geometry::Freehand(line_path(anchor, current))
            }
        }
        Tool::Erase => Geometry::Eraser(eraser_path(current)),
        Tool::Circle => Geometry::Shape {
            path: ellipse_path(anchor, current),
            closed: true,
        },
        Tool::Triangle => Geometry::Shape {
            path: polygon_path(&triangle_vertices(anchor, current)),
            closed: true,
        },
        Tool::Rectangle => Geometry::Shape {
            path: normalized_rect(anchor, current).to_path(TOLERANCE),
            closed: true,
        },
        Tool::RoundedRectangle => Geometry::Shape {
            path: rounded_rect_path(anchor, current),
            closed: true,
        },
        Tool::Diamond => Geometry::Shape {
            path: polygon_path(&diamond_vertices(anchor, current)),
            closed: true,
        },
        Tool::Arrow => Geometry::Shape {
            path: arrow_path(anchor, current),
            closed: false,
        },
        Tool::Move => Geometry::Marquee(normalized_rect(anchor, current).to_path(TOLERANCE)),
    }
}

/// Straight segment from `from` to `to`.
pub fn line_path(from: Point, to: Point) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(from);
    path.line_to(to);
    path
}

/// Eraser disc centered on `center`.
pub fn eraser_path(center: Point) -> BezPath {
    Circle::new(center, ERASER_RADIUS).to_path(TOLERANCE)
}

/// Axis-aligned ellipse centered on the anchor, radii from the drag extent.
pub fn ellipse_path(anchor: Point, current: Point) -> BezPath {
    let radii = Vec2::new((current.x - anchor.x).abs(), (current.y - anchor.y).abs());
    Ellipse::new(anchor, radii, 0.0).to_path(TOLERANCE)
}

/// Isosceles triangle: apex at the anchor, base vertex at `current`,
/// the other base vertex mirrored horizontally about the anchor.
pub fn triangle_vertices(anchor: Point, current: Point) -> [Point; 3] {
    let mirrored = Point::new(anchor.x - (current.x - anchor.x), current.y);
    [anchor, current, mirrored]
}

/// Midpoints of the bounding box edges, clockwise from the top.
pub fn diamond_vertices(anchor: Point, current: Point) -> [Point; 4] {
    let rect = normalized_rect(anchor, current);
    let center = rect.center();
    [
        Point::new(center.x, rect.y0),
        Point::new(rect.x1, center.y),
        Point::new(center.x, rect.y1),
        Point::new(rect.x0, center.y),
    ]
}

/// Box with min/max corners taken per axis.
pub fn normalized_rect(anchor: Point, current: Point) -> Rect {
    Rect::from_points(anchor, current)
}

/// Corner radius used for a rounded rectangle of this size.
pub fn corner_radius(rect: Rect) -> f64 {
    MAX_CORNER_RADIUS
        .min(rect.width() / 2.0)
        .min(rect.height() / 2.0)
}

/// Rounded rectangle spanning anchor and current.
pub fn rounded_rect_path(anchor: Point, current: Point) -> BezPath {
    let rect = normalized_rect(anchor, current);
    RoundedRect::from_rect(rect, corner_radius(rect)).to_path(TOLERANCE)
}

/// End points of the two arrowhead barbs at the `current` end.
pub fn arrow_barbs(anchor: Point, current: Point) -> [Point; 2] {
    let angle = (current.y - anchor.y).atan2(current.x - anchor.x);
    let barb = |theta: f64| {
        Point::new(
            current.x - ARROW_BARB_LENGTH * theta.cos(),
            current.y - ARROW_BARB_LENGTH * theta.sin(),
        )
    };
    [barb(angle - ARROW_BARB_ANGLE), barb(angle + ARROW_BARB_ANGLE)]
}

/// Shaft plus both barbs, as one open path.
pub fn arrow_path(anchor: Point, current: Point) -> BezPath {
    let [left, right] = arrow_barbs(anchor, current);
    let mut path = line_path(anchor, current);
    path.line_to(left);
    path.move_to(current);
    path.line_to(right);
    path
}

/// Closed polygon through `points`.
pub fn polygon_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        path.move_to(*first);
        for p in iter {
            path.line_to(*p);
        }
        path.close_path();
    }
    path
}
