use kurbo::{Arc, CubicBez, ParamCurveArclen, PathEl, Point, QuadBez, SvgArc, Vec2};
use svgtypes::{PathParser, PathSegment};

use crate::foundation::error::{SvgLineError, SvgLineResult};

/// Arc-length tolerance used by [`KurboPathLength::default`].
pub const DEFAULT_ARCLEN_ACCURACY: f64 = 1e-6;

/// Cubic fit tolerance for elliptical arcs, relative to the length accuracy.
///
/// The fit error accumulates along the whole arc, so it has to sit well below the length budget.
const ARC_FIT_SCALE: f64 = 1e-3;

/// Total arc length of SVG path data.
///
/// Implementations are pure: the same input always yields the same length. Malformed path data
/// is an error that aborts the whole transform.
pub trait PathLengthOracle {
    /// Total length of every subpath in `d`, closing segments included.
    fn total_length(&self, d: &str) -> SvgLineResult<f64>;
}

/// [`PathLengthOracle`] backed by `svgtypes` path tokenizing and `kurbo` arc-length solving.
#[derive(Clone, Copy, Debug)]
pub struct KurboPathLength {
    /// Maximum arc-length error per curved segment. Elliptical arcs are fitted with cubics at a
    /// tolerance derived from this value.
    pub accuracy: f64,
}

impl Default for KurboPathLength {
    fn default() -> Self {
        Self {
            accuracy: DEFAULT_ARCLEN_ACCURACY,
        }
    }
}

impl PathLengthOracle for KurboPathLength {
    fn total_length(&self, d: &str) -> SvgLineResult<f64> {
        let mut pen = Pen::default();
        let mut total = 0.0;
        for segment in PathParser::from(d) {
            let segment = segment
                .map_err(|e| SvgLineError::geometry(format!("invalid path data '{d}': {e}")))?;
            total += pen.advance(segment, self.accuracy);
        }
        Ok(total)
    }
}

/// Control point left by the previous segment, for `S`/`T` reflection.
#[derive(Clone, Copy, Debug)]
enum LastControl {
    None,
    Cubic(Point),
    Quad(Point),
}

/// Drawing state while walking path segments.
#[derive(Clone, Copy, Debug)]
struct Pen {
    current: Point,
    subpath_start: Point,
    last_control: LastControl,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            current: Point::ORIGIN,
            subpath_start: Point::ORIGIN,
            last_control: LastControl::None,
        }
    }
}

impl Pen {
    fn resolve(&self, abs: bool, x: f64, y: f64) -> Point {
        if abs {
            Point::new(x, y)
        } else {
            self.current + Vec2::new(x, y)
        }
    }

    fn reflect(&self, control: Option<Point>) -> Point {
        match control {
            Some(c) => self.current + (self.current - c),
            None => self.current,
        }
    }

    /// Length drawn by `segment`; moves the pen to its end point.
    fn advance(&mut self, segment: PathSegment, accuracy: f64) -> f64 {
        let from = self.current;
        let (to, control, length) = match segment {
            PathSegment::MoveTo { abs, x, y } => {
                let to = self.resolve(abs, x, y);
                self.subpath_start = to;
                (to, LastControl::None, 0.0)
            }
            PathSegment::LineTo { abs, x, y } => {
                let to = self.resolve(abs, x, y);
                (to, LastControl::None, (to - from).hypot())
            }
            PathSegment::HorizontalLineTo { abs, x } => {
                let to = Point::new(if abs { x } else { from.x + x }, from.y);
                (to, LastControl::None, (to.x - from.x).abs())
            }
            PathSegment::VerticalLineTo { abs, y } => {
                let to = Point::new(from.x, if abs { y } else { from.y + y });
                (to, LastControl::None, (to.y - from.y).abs())
            }
            PathSegment::CurveTo {
                abs,
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                let p1 = self.resolve(abs, x1, y1);
                let p2 = self.resolve(abs, x2, y2);
                let to = self.resolve(abs, x, y);
                let len = CubicBez::new(from, p1, p2, to).arclen(accuracy);
                (to, LastControl::Cubic(p2), len)
            }
            PathSegment::SmoothCurveTo { abs, x2, y2, x, y } => {
                let p1 = self.reflect(match self.last_control {
                    LastControl::Cubic(c) => Some(c),
                    _ => None,
                });
                let p2 = self.resolve(abs, x2, y2);
                let to = self.resolve(abs, x, y);
                let len = CubicBez::new(from, p1, p2, to).arclen(accuracy);
                (to, LastControl::Cubic(p2), len)
            }
            PathSegment::Quadratic { abs, x1, y1, x, y } => {
                let p1 = self.resolve(abs, x1, y1);
                let to = self.resolve(abs, x, y);
                let len = QuadBez::new(from, p1, to).arclen(accuracy);
                (to, LastControl::Quad(p1), len)
            }
            PathSegment::SmoothQuadratic { abs, x, y } => {
                let p1 = self.reflect(match self.last_control {
                    LastControl::Quad(c) => Some(c),
                    _ => None,
                });
                let to = self.resolve(abs, x, y);
                let len = QuadBez::new(from, p1, to).arclen(accuracy);
                (to, LastControl::Quad(p1), len)
            }
            PathSegment::EllipticalArc {
                abs,
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
            } => {
                let to = self.resolve(abs, x, y);
                let arc = SvgArc {
                    from,
                    to,
                    radii: Vec2::new(rx, ry),
                    x_rotation: x_axis_rotation.to_radians(),
                    large_arc,
                    sweep,
                };
                (to, LastControl::None, arc_length(&arc, accuracy))
            }
            PathSegment::ClosePath { .. } => {
                let to = self.subpath_start;
                (to, LastControl::None, (to - from).hypot())
            }
        };
        self.current = to;
        self.last_control = control;
        length
    }
}

/// Length of an SVG elliptical arc; degenerate arcs are straight lines.
fn arc_length(svg_arc: &SvgArc, accuracy: f64) -> f64 {
    let Some(arc) = Arc::from_svg_arc(svg_arc) else {
        return (svg_arc.to - svg_arc.from).hypot();
    };
    let pieces: Vec<(Point, Point, Point)> = arc
        .append_iter(accuracy * ARC_FIT_SCALE)
        .filter_map(|el| match el {
            PathEl::CurveTo(p1, p2, p3) => Some((p1, p2, p3)),
            _ => None,
        })
        .collect();
    let per_piece = accuracy / pieces.len().max(1) as f64;
    let mut start = svg_arc.from;
    let mut total = 0.0;
    for (p1, p2, p3) in pieces {
        total += CubicBez::new(start, p1, p2, p3).arclen(per_piece);
        start = p3;
    }
    total
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/path_length.rs"]
mod tests;
