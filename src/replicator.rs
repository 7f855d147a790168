//! Maps one pointer-drag segment to every segment its drawing mode produces.
//!
//! Each mode is a small symmetry group acting on the canvas: Mandala rotates
//! about the center, Mirror reflects across the horizontal center line, and
//! Grid translates the stroke into each cell of a 3x3 lattice anchored at the
//! cell where the stroke started.

use std::f64::consts::TAU;

use crate::config::{DrawConfig, DrawMode, GRID_CELLS};
use crate::error::{MandalaError, Result};
use crate::stroke::{Point, Segment, StyledSegment};

/// Produce the segments to rasterize for one drag step.
///
/// Pure: the same segment and configuration always yield the same sequence.
/// The first element is always the input segment itself.
pub fn replicate(segment: Segment, config: &DrawConfig) -> Result<Vec<StyledSegment>> {
    if config.canvas_width() == 0 || config.canvas_height() == 0 {
        return Err(MandalaError::invalid_config(format!(
            "canvas dimensions must be non-zero, got {}x{}",
            config.canvas_width(),
            config.canvas_height()
        )));
    }

    let segments = match config.mode() {
        DrawMode::Mandala => mandala(segment, config)?,
        DrawMode::Mirror => mirror(segment, config),
        DrawMode::Grid => grid(segment, config)?,
    };

    let style = config.stroke_style();
    Ok(segments
        .into_iter()
        .map(|segment| StyledSegment { segment, style })
        .collect())
}

/// `symmetry_count` rotations about the canvas center, in rotation order
pub fn mandala(segment: Segment, config: &DrawConfig) -> Result<Vec<Segment>> {
    let n = config.symmetry_count();
    if n == 0 {
        return Err(MandalaError::invalid_config("symmetry count must be at least 1"));
    }

    let center = Point::new(
        config.canvas_width() as f64 / 2.0,
        config.canvas_height() as f64 / 2.0,
    );
    let step = TAU / n as f64;

    let mut segments = Vec::with_capacity(n as usize);
    // The unrotated copy is emitted verbatim so it is bit-exact.
    segments.push(segment);
    for i in 1..n {
        let angle = i as f64 * step;
        segments.push(segment.map(|p| p.rotate_about(center, angle)));
    }
    Ok(segments)
}

/// The segment and its reflection across `y = canvas_height / 2`
pub fn mirror(segment: Segment, config: &DrawConfig) -> Vec<Segment> {
    let height = config.canvas_height() as f64;
    vec![segment, segment.map(|p| Point::new(p.x, height - p.y))]
}

/// The segment copied into all nine grid cells at the same cell-relative position
pub fn grid(segment: Segment, config: &DrawConfig) -> Result<Vec<Segment>> {
    let (cell_width, cell_height) = grid_cell_size(config)?;
    let (start_col, start_row) = grid_cell_of(segment.start, cell_width, cell_height);

    let mut segments = Vec::with_capacity((GRID_CELLS * GRID_CELLS) as usize);
    for i in 0..GRID_CELLS as i64 {
        for j in 0..GRID_CELLS as i64 {
            let dx = ((i - start_col) * cell_width) as f64;
            let dy = ((j - start_row) * cell_height) as f64;
            segments.push(segment.map(|p| p.translate(dx, dy)));
        }
    }
    Ok(segments)
}

/// Cell size in whole pixels; the cells may fall short of the canvas edge
/// when a dimension is not a multiple of three.
pub fn grid_cell_size(config: &DrawConfig) -> Result<(i64, i64)> {
    let cell_width = (config.canvas_width() / GRID_CELLS) as i64;
    let cell_height = (config.canvas_height() / GRID_CELLS) as i64;
    if cell_width == 0 || cell_height == 0 {
        return Err(MandalaError::invalid_config(format!(
            "canvas {}x{} is too small for a {GRID_CELLS}x{GRID_CELLS} grid",
            config.canvas_width(),
            config.canvas_height()
        )));
    }
    Ok((cell_width, cell_height))
}

/// Column and row of the cell containing `point`
pub fn grid_cell_of(point: Point, cell_width: i64, cell_height: i64) -> (i64, i64) {
    (
        (point.x / cell_width as f64).floor() as i64,
        (point.y / cell_height as f64).floor() as i64,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::Color32;

    const EPSILON: f64 = 1e-9;

    fn seg(x0: f64, y0: f64, x1: f64, y1: f64) -> Segment {
        Segment::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    fn assert_close(actual: Segment, expected: Segment) {
        assert!(
            actual.start.distance(expected.start) < EPSILON
                && actual.end.distance(expected.end) < EPSILON,
            "{actual:?} != {expected:?}"
        );
    }

    fn segments_of(styled: &[StyledSegment]) -> Vec<Segment> {
        styled.iter().map(|s| s.segment).collect()
    }

    #[test]
    fn test_mandala_eight_fold() {
        let config = DrawConfig::default();
        let input = seg(300.0, 250.0, 310.0, 250.0);
        let out = segments_of(&replicate(input, &config).unwrap());

        assert_eq!(out.len(), 8);
        assert_eq!(out[0], input);
        assert_close(out[4], seg(200.0, 250.0, 190.0, 250.0));

        let center = Point::new(250.0, 250.0);
        let step = std::f64::consts::FRAC_PI_4;
        for pair in out.windows(2) {
            assert_close(pair[1], pair[0].map(|p| p.rotate_about(center, step)));
        }
    }

    #[test]
    fn test_mandala_identity() {
        let config = DrawConfig::unchecked(DrawMode::Mandala, 1, 500, 500);
        let input = seg(0.1, 17.3, 499.9, 0.7);
        let out = replicate(input, &config).unwrap();
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].segment, input);
    }

    #[test]
    fn test_mandala_zero_symmetry() {
        let config = DrawConfig::unchecked(DrawMode::Mandala, 0, 500, 500);
        let result = replicate(seg(1.0, 1.0, 2.0, 2.0), &config);
        assert!(matches!(result, Err(MandalaError::InvalidConfig(_))));
    }

    #[test]
    fn test_mandala_large_count() {
        let config = DrawConfig::unchecked(DrawMode::Mandala, 360, 500, 500);
        let out = replicate(seg(260.0, 250.0, 270.0, 250.0), &config).unwrap();
        assert_eq!(out.len(), 360);
    }

    #[test]
    fn test_mirror() {
        let config = DrawConfig::unchecked(DrawMode::Mirror, 8, 300, 300);
        let out = segments_of(&replicate(seg(50.0, 20.0, 60.0, 30.0), &config).unwrap());
        assert_eq!(out, vec![seg(50.0, 20.0, 60.0, 30.0), seg(50.0, 280.0, 60.0, 270.0)]);
    }

    #[test]
    fn test_mirror_odd_height_reflects_exactly() {
        let config = DrawConfig::unchecked(DrawMode::Mirror, 8, 300, 301);
        let out = segments_of(&replicate(seg(10.0, 1.0, 10.0, 2.0), &config).unwrap());
        assert_eq!(out[1], seg(10.0, 300.0, 10.0, 299.0));
    }

    #[test]
    fn test_grid_offsets() {
        let config = DrawConfig::unchecked(DrawMode::Grid, 8, 300, 300);
        let input = seg(120.0, 50.0, 130.0, 60.0);
        let out = segments_of(&replicate(input, &config).unwrap());

        assert_eq!(out.len(), 9);
        assert_eq!(out.iter().filter(|s| **s == input).count(), 1);

        let mut offsets: Vec<(i64, i64)> = out
            .iter()
            .map(|s| ((s.start.x - 120.0) as i64, (s.start.y - 50.0) as i64))
            .collect();
        offsets.sort();
        let mut expected = Vec::new();
        for dx in [-100, 0, 100] {
            for dy in [0, 100, 200] {
                expected.push((dx, dy));
            }
        }
        assert_eq!(offsets, expected);
    }

    #[test]
    fn test_grid_truncated_cells() {
        // 500 / 3 = 166 pixel cells, leaving a 2 pixel strip on the right
        let config = DrawConfig::unchecked(DrawMode::Grid, 8, 500, 500);
        let input = seg(499.0, 10.0, 499.0, 20.0);
        let out = segments_of(&replicate(input, &config).unwrap());

        // 499 / 166 = 3.006..., a fourth column outside the lattice
        assert_eq!(out[0].start.x, 499.0 - 3.0 * 166.0);
        assert!(!out.contains(&input));
    }

    #[test]
    fn test_grid_too_small() {
        let config = DrawConfig::unchecked(DrawMode::Grid, 8, 2, 300);
        assert!(matches!(
            replicate(seg(0.0, 0.0, 1.0, 1.0), &config),
            Err(MandalaError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_zero_canvas_any_mode() {
        for mode in DrawMode::ALL {
            for (w, h) in [(0, 300), (300, 0)] {
                let config = DrawConfig::unchecked(mode, 8, w, h);
                assert!(
                    matches!(
                        replicate(seg(1.0, 1.0, 2.0, 2.0), &config),
                        Err(MandalaError::InvalidConfig(_))
                    ),
                    "{mode:?} {w}x{h}"
                );
            }
        }
    }

    #[test]
    fn test_degenerate_segment_emitted() {
        let config = DrawConfig::default();
        let dot = Segment::dot(Point::new(100.0, 100.0));
        let out = replicate(dot, &config).unwrap();
        assert_eq!(out.len(), 8);
        assert_eq!(out[0].segment, dot);
        assert!(out.iter().all(|s| s.segment.start.distance(s.segment.end) < EPSILON));
    }

    #[test]
    fn test_style_follows_config() {
        let mut config = DrawConfig::default();
        config.set_color(Color32::RED);
        config.set_stroke_width(10.0).unwrap();
        let out = replicate(seg(1.0, 1.0, 2.0, 2.0), &config).unwrap();
        assert!(out.iter().all(|s| s.style.color == Color32::RED && s.style.width == 10.0));
    }
}
