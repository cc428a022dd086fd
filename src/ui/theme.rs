use ratatui::style::Color;

use crate::classify::SeriesColor;

#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    pub header_accent_bg: Color,
    pub header_accent_fg: Color,
    pub statusbar_bg: Color,
    pub overlay_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub accent: Color,
    pub pill_key_bg: Color,
    pub pill_key_fg: Color,
    pub pill_desc_fg: Color,
    pub surface_bg: Color,
    /// Backdrop behind each sparkline.
    pub panel_bg: Color,
    pub green: Color,
    pub yellow: Color,
    pub red: Color,
    pub cyan: Color,
    pub orange: Color,
}

impl Theme {
    pub fn from_config(theme_name: &str) -> Self {
        match theme_name.to_lowercase().as_str() {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    pub fn dark() -> Self {
        Theme {
            name: "dark",
            header_accent_bg: Color::Green,
            header_accent_fg: Color::Black,
            statusbar_bg: Color::DarkGray,
            overlay_border: Color::DarkGray,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            accent: Color::Green,
            pill_key_bg: Color::Yellow,
            pill_key_fg: Color::Black,
            pill_desc_fg: Color::White,
            surface_bg: Color::DarkGray,
            panel_bg: Color::Rgb(35, 40, 51),
            green: Color::Rgb(52, 211, 153),
            yellow: Color::Rgb(250, 204, 21),
            red: Color::Rgb(239, 68, 68),
            cyan: Color::Rgb(34, 211, 238),
            orange: Color::Rgb(251, 146, 60),
        }
    }

    pub fn light() -> Self {
        Theme {
            name: "light",
            header_accent_bg: Color::Blue,
            header_accent_fg: Color::White,
            statusbar_bg: Color::Rgb(220, 220, 220),
            overlay_border: Color::Rgb(150, 150, 150),
            text_primary: Color::Black,
            text_secondary: Color::DarkGray,
            accent: Color::Blue,
            pill_key_bg: Color::Blue,
            pill_key_fg: Color::White,
            pill_desc_fg: Color::Black,
            surface_bg: Color::Rgb(200, 200, 200),
            panel_bg: Color::Rgb(226, 229, 235),
            green: Color::Rgb(60, 160, 60),
            yellow: Color::Rgb(200, 170, 50),
            red: Color::Rgb(200, 60, 60),
            cyan: Color::Rgb(0, 150, 150),
            orange: Color::Rgb(220, 120, 80),
        }
    }

    pub fn series_color(&self, color: SeriesColor) -> Color {
        match color {
            SeriesColor::Green => self.green,
            SeriesColor::Yellow => self.yellow,
            SeriesColor::Red => self.red,
            SeriesColor::Cyan => self.cyan,
            SeriesColor::Orange => self.orange,
        }
    }

    /// Series color at `opacity` over the panel backdrop.
    pub fn fill_color(&self, color: SeriesColor, opacity: f64) -> Color {
        blend(self.series_color(color), self.panel_bg, opacity)
    }
}

/// Alpha-composites `fg` over `bg`. Non-RGB colors cannot be mixed, so the
/// foreground is returned as-is.
pub fn blend(fg: Color, bg: Color, alpha: f64) -> Color {
    let alpha = if alpha.is_nan() { 0.0 } else { alpha.clamp(0.0, 1.0) };
    match (fg, bg) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |top: u8, under: u8| {
                (f64::from(top) * alpha + f64::from(under) * (1.0 - alpha)).round() as u8
            };
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ => fg,
    }
}
