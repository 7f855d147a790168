use egui::{Color32, Pos2};

/// A location in canvas pixel space. Origin is top-left, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Rotate about `center` by `angle` radians
    pub fn rotate_about(self, center: Point, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let dx = self.x - center.x;
        let dy = self.y - center.y;
        Self::new(
            center.x + dx * cos - dy * sin,
            center.y + dx * sin + dy * cos,
        )
    }

    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<Pos2> for Point {
    fn from(pos: Pos2) -> Self {
        Self::new(pos.x as f64, pos.y as f64)
    }
}

impl From<Point> for Pos2 {
    fn from(point: Point) -> Self {
        Pos2::new(point.x as f32, point.y as f32)
    }
}

/// One straight pointer-drag step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// A stationary press, drawn as a dot
    pub const fn dot(at: Point) -> Self {
        Self::new(at, at)
    }

    /// Apply `f` to both endpoints
    pub fn map(self, mut f: impl FnMut(Point) -> Point) -> Self {
        Self::new(f(self.start), f(self.end))
    }

    /// Distance from `point` to the closest point on this segment
    pub fn distance_to(&self, point: Point) -> f64 {
        let line_x = self.end.x - self.start.x;
        let line_y = self.end.y - self.start.y;
        let len_sq = line_x * line_x + line_y * line_y;
        if len_sq == 0.0 {
            return point.distance(self.start);
        }

        let t = (((point.x - self.start.x) * line_x + (point.y - self.start.y) * line_y) / len_sq)
            .clamp(0.0, 1.0);
        point.distance(Point::new(self.start.x + line_x * t, self.start.y + line_y * t))
    }
}

/// Color and width shared by every segment of one replication call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color32,
    pub width: f32,
}

impl StrokeStyle {
    pub const fn new(color: Color32, width: f32) -> Self {
        Self { color, width }
    }
}

/// A segment ready to rasterize
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyledSegment {
    pub segment: Segment,
    pub style: StrokeStyle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_quarter_turn() {
        let center = Point::new(250.0, 250.0);
        let rotated = Point::new(300.0, 250.0).rotate_about(center, std::f64::consts::FRAC_PI_2);
        assert!((rotated.x - 250.0).abs() < 1e-9);
        assert!((rotated.y - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_distance_to_segment() {
        let segment = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));

        // Perpendicular foot inside the segment
        assert!((segment.distance_to(Point::new(5.0, 3.0)) - 3.0).abs() < 1e-12);
        // Beyond the end, distance is to the endpoint
        assert!((segment.distance_to(Point::new(13.0, 4.0)) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_segment_distance() {
        let dot = Segment::dot(Point::new(2.0, 2.0));
        assert!((dot.distance_to(Point::new(5.0, 6.0)) - 5.0).abs() < 1e-12);
    }
}
