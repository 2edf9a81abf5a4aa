//! Wireframe geometry for the rotating display model.
//!
//! The model is a pie: a tapered pan (two rims joined by struts) with a slice
//! cut marked on top so the rotation is visible. Points are turned about the
//! vertical axis by the rotation phase, tilted towards the viewer and projected
//! orthographically onto the canvas plane.

use ratatui::style::Color;

/// Segments around each rim.
const RIM_SEGMENTS: usize = 32;

/// Struts joining the two rims.
const STRUTS: usize = 8;

const TOP_RADIUS: f64 = 1.0;
const BOTTOM_RADIUS: f64 = 0.8;
const TOP_Y: f64 = 0.2;
const BOTTOM_Y: f64 = -0.3;

/// Height of the meringue peak above the top rim.
const PEAK_Y: f64 = 0.45;

/// Fixed tilt towards the viewer, in degrees.
pub const VIEW_TILT: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Rotate about the vertical axis.
    pub fn rotate_y(self, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self::new(
            self.x * cos + self.z * sin,
            self.y,
            -self.x * sin + self.z * cos,
        )
    }

    /// Rotate about the horizontal axis.
    pub fn rotate_x(self, degrees: f64) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Self::new(
            self.x,
            self.y * cos - self.z * sin,
            self.y * sin + self.z * cos,
        )
    }
}

/// A projected line in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub color: Color,
}

fn project(point: Point3, phase: f64) -> (f64, f64) {
    let p = point.rotate_y(phase).rotate_x(VIEW_TILT);
    (p.x, p.y)
}

fn rim_point(radius: f64, y: f64, i: usize, count: usize) -> Point3 {
    let angle = std::f64::consts::TAU * i as f64 / count as f64;
    Point3::new(radius * angle.cos(), y, radius * angle.sin())
}

fn edges() -> Vec<(Point3, Point3, Color)> {
    let mut edges = Vec::with_capacity(RIM_SEGMENTS * 2 + STRUTS * 2 + 2);

    for i in 0..RIM_SEGMENTS {
        let next = (i + 1) % RIM_SEGMENTS;
        edges.push((
            rim_point(TOP_RADIUS, TOP_Y, i, RIM_SEGMENTS),
            rim_point(TOP_RADIUS, TOP_Y, next, RIM_SEGMENTS),
            Color::Yellow,
        ));
        edges.push((
            rim_point(BOTTOM_RADIUS, BOTTOM_Y, i, RIM_SEGMENTS),
            rim_point(BOTTOM_RADIUS, BOTTOM_Y, next, RIM_SEGMENTS),
            Color::Rgb(205, 133, 63),
        ));
    }

    let peak = Point3::new(0.0, PEAK_Y, 0.0);
    for i in 0..STRUTS {
        edges.push((
            rim_point(TOP_RADIUS, TOP_Y, i, STRUTS),
            rim_point(BOTTOM_RADIUS, BOTTOM_Y, i, STRUTS),
            Color::Rgb(205, 133, 63),
        ));
        edges.push((
            rim_point(TOP_RADIUS * 0.6, TOP_Y + 0.1, i, STRUTS),
            peak,
            Color::White,
        ));
    }

    // Slice cut, so a full turn is distinguishable from none.
    let center = Point3::new(0.0, TOP_Y, 0.0);
    edges.push((center, rim_point(TOP_RADIUS, TOP_Y, 0, STRUTS), Color::Red));
    edges.push((center, rim_point(TOP_RADIUS, TOP_Y, 1, STRUTS), Color::Red));

    edges
}

/// All model segments at the given rotation phase.
pub fn wireframe(phase: f64) -> Vec<Segment> {
    edges()
        .into_iter()
        .map(|(a, b, color)| {
            let (x1, y1) = project(a, phase);
            let (x2, y2) = project(b, phase);
            Segment {
                x1,
                y1,
                x2,
                y2,
                color,
            }
        })
        .collect()
}

/// Canvas bounds that keep the model round in a `width` x `height` cell area.
///
/// Terminal cells are roughly twice as tall as they are wide.
pub fn canvas_bounds(width: u16, height: u16) -> ([f64; 2], [f64; 2]) {
    let half_height = 1.2;
    let half_width = if height == 0 {
        half_height
    } else {
        (half_height * f64::from(width) / (2.0 * f64::from(height))).max(half_height)
    };
    ([-half_width, half_width], [-half_height, half_height])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_rotate_y_quarter_turn() {
        let p = Point3::new(1.0, 0.5, 0.0).rotate_y(90.0);
        assert!(close(p.x, 0.0));
        assert!(close(p.y, 0.5));
        assert!(close(p.z, -1.0));
    }

    #[test]
    fn test_rotate_x_keeps_length() {
        let p = Point3::new(0.3, 0.4, 1.2).rotate_x(VIEW_TILT);
        let len = (p.x * p.x + p.y * p.y + p.z * p.z).sqrt();
        assert!(close(len, 1.3));
    }

    #[test]
    fn test_wireframe_segment_count_is_stable() {
        let expected = RIM_SEGMENTS * 2 + STRUTS * 2 + 2;
        assert_eq!(wireframe(0.0).len(), expected);
        assert_eq!(wireframe(123.0).len(), expected);
    }

    #[test]
    fn test_full_turn_matches_start() {
        let start = wireframe(0.0);
        let turned = wireframe(360.0);
        for (a, b) in start.iter().zip(&turned) {
            assert!(close(a.x1, b.x1) && close(a.y1, b.y1));
            assert!(close(a.x2, b.x2) && close(a.y2, b.y2));
        }
    }

    #[test]
    fn test_slice_moves_with_phase() {
        let slice = |phase| *wireframe(phase).last().unwrap();
        let a = slice(0.0);
        let b = slice(90.0);
        assert!(!close(a.x2, b.x2) || !close(a.y2, b.y2));
    }

    #[test]
    fn test_wireframe_fits_canvas() {
        let ([x_min, x_max], [y_min, y_max]) = canvas_bounds(40, 20);
        for phase in [0.0, 45.0, 200.0] {
            for s in wireframe(phase) {
                for (x, y) in [(s.x1, s.y1), (s.x2, s.y2)] {
                    assert!(x >= x_min && x <= x_max, "x={x} out of bounds");
                    assert!(y >= y_min && y <= y_max, "y={y} out of bounds");
                }
            }
        }
    }

    #[test]
    fn test_canvas_bounds_aspect() {
        let (x, y) = canvas_bounds(80, 20);
        assert!(close(y[1], 1.2));
        assert!(close(x[1], 2.4));

        let (x, _) = canvas_bounds(10, 20);
        assert!(close(x[1], 1.2));

        let (x, _) = canvas_bounds(10, 0);
        assert!(close(x[1], 1.2));
    }
}
