use super::node::{PanelShape, PlotPoint, PlotRect, SparklineShape};

pub const PANEL_CORNER_RADIUS: f64 = 3.0;

/// Horizontal distance between samples.
///
/// Fixed by `capacity`, not by how many samples exist, so the graph never
/// rescales as the buffer fills.
pub fn step(bounds: &PlotRect, capacity: usize) -> f64 {
    if capacity <= 1 {
        return bounds.width;
    }
    bounds.width / (capacity - 1) as f64
}

/// Shift that right-anchors a partial series.
pub fn offset(bounds: &PlotRect, count: usize, capacity: usize) -> f64 {
    if count >= capacity {
        return 0.0;
    }
    step(bounds, capacity) * (capacity - count) as f64
}

/// 0 maps to the bottom edge and 100 to the top; out-of-range values clamp.
pub fn map_y(bounds: &PlotRect, value: f64) -> f64 {
    let value = if value.is_nan() { 0.0 } else { value.clamp(0.0, 100.0) };
    bounds.min_y() + bounds.height * value / 100.0
}

/// Lays out `values` (oldest first) as a right-anchored line plus fill.
///
/// Only the newest `capacity` values are plotted.
pub fn layout(values: &[f64], bounds: &PlotRect, capacity: usize) -> SparklineShape {
    let capacity = capacity.max(1);
    let panel = PanelShape {
        rect: *bounds,
        corner_radius: PANEL_CORNER_RADIUS.min(bounds.width / 2.0).min(bounds.height / 2.0),
    };

    let values = &values[values.len().saturating_sub(capacity)..];
    let line = match values {
        [] => Vec::new(),
        [only] => {
            let y = map_y(bounds, *only);
            vec![
                PlotPoint::new(bounds.min_x(), y),
                PlotPoint::new(bounds.max_x(), y),
            ]
        }
        _ => {
            // Counting back from the right edge keeps the newest sample
            // exactly on max_x; equivalent to min_x + offset + i * step.
            let step = step(bounds, capacity);
            let last = values.len() - 1;
            values
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    let x = bounds.max_x() - (last - i) as f64 * step;
                    PlotPoint::new(x.max(bounds.min_x()), map_y(bounds, *v))
                })
                .collect()
        }
    };

    let fill = fill_polygon(&line, bounds);
    SparklineShape { panel, line, fill }
}

fn fill_polygon(line: &[PlotPoint], bounds: &PlotRect) -> Vec<PlotPoint> {
    let (Some(first), Some(last)) = (line.first(), line.last()) else {
        return Vec::new();
    };
    let mut fill = Vec::with_capacity(line.len() + 2);
    fill.extend_from_slice(line);
    fill.push(PlotPoint::new(last.x, bounds.min_y()));
    fill.push(PlotPoint::new(first.x, bounds.min_y()));
    fill
}

/// Splits the glyph into two equal side-by-side halves separated by `gap`.
pub fn split_glyph(bounds: &PlotRect, gap: f64) -> (PlotRect, PlotRect) {
    let gap = gap.max(0.0).min(bounds.width);
    let half = ((bounds.width - gap) / 2.0).max(0.0);
    let left = PlotRect::new(bounds.x, bounds.y, half, bounds.height);
    let right = PlotRect::new(bounds.max_x() - half, bounds.y, half, bounds.height);
    (left, right)
}

/// Vertical span of the rounded panel at column `x`, or `None` outside it.
pub fn clip_span(panel: &PanelShape, x: f64) -> Option<(f64, f64)> {
    let r = &panel.rect;
    if x < r.min_x() || x > r.max_x() {
        return None;
    }
    let radius = panel.corner_radius.max(0.0);
    let corner_center = if x < r.min_x() + radius {
        r.min_x() + radius
    } else if x > r.max_x() - radius {
        r.max_x() - radius
    } else {
        return Some((r.min_y(), r.max_y()));
    };
    let d = (x - corner_center).abs().min(radius);
    let inset = radius - (radius * radius - d * d).sqrt();
    Some((r.min_y() + inset, r.max_y() - inset))
}

/// Height of the polyline at `x` by linear interpolation.
pub fn line_y_at(line: &[PlotPoint], x: f64) -> Option<f64> {
    let (first, last) = (line.first()?, line.last()?);
    if x < first.x || x > last.x {
        return None;
    }
    line.windows(2)
        .find(|pair| x >= pair[0].x && x <= pair[1].x)
        .map(|pair| {
            let (a, b) = (pair[0], pair[1]);
            let dx = b.x - a.x;
            if dx <= f64::EPSILON {
                a.y.max(b.y)
            } else {
                a.y + (b.y - a.y) * (x - a.x) / dx
            }
        })
        .or(Some(first.y))
}
