/// Axis-aligned rectangle in plot space; `y` grows upward from `y` (bottom).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn min_x(&self) -> f64 {
        self.x
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn min_y(&self) -> f64 {
        self.y
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    pub fn contains(&self, point: &PlotPoint, eps: f64) -> bool {
        point.x >= self.min_x() - eps
            && point.x <= self.max_x() + eps
            && point.y >= self.min_y() - eps
            && point.y <= self.max_y() + eps
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotPoint {
    pub x: f64,
    pub y: f64,
}

impl PlotPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Rounded backdrop drawn before anything else; also the clip region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanelShape {
    pub rect: PlotRect,
    pub corner_radius: f64,
}

/// Geometry for one sparkline.
///
/// `fill` is an open polygon: the renderer closes it back to the first point.
#[derive(Clone, Debug, PartialEq)]
pub struct SparklineShape {
    pub panel: PanelShape,
    pub line: Vec<PlotPoint>,
    pub fill: Vec<PlotPoint>,
}

impl SparklineShape {
    /// Only the backdrop, no stroke or fill.
    pub fn is_blank(&self) -> bool {
        self.line.is_empty() && self.fill.is_empty()
    }
}
