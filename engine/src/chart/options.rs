// Styling handed to the charting library at construction time.
use serde::{Deserialize, Serialize};

pub const DEFAULT_CHART_HEIGHT: u32 = 600;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    pub height: u32,
    pub layout: LayoutStyle,
    pub grid: GridStyle,
    pub crosshair: CrosshairStyle,
    pub candles: CandleStyle,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            height: DEFAULT_CHART_HEIGHT,
            layout: LayoutStyle::default(),
            grid: GridStyle::default(),
            crosshair: CrosshairStyle::default(),
            candles: CandleStyle::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutStyle {
    pub background: String,
    pub text_color: String,
}

impl Default for LayoutStyle {
    fn default() -> Self {
        Self {
            background: "#1E1E1E".to_string(),
            text_color: "#DDD".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridStyle {
    pub vert_lines_color: String,
    pub horz_lines_color: String,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            vert_lines_color: "#2B2B2B".to_string(),
            horz_lines_color: "#2B2B2B".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CrosshairMode {
    Normal,
    Magnet,
}

impl CrosshairMode {
    pub fn code(self) -> u8 {
        match self {
            CrosshairMode::Normal => 0,
            CrosshairMode::Magnet => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineStyle {
    Solid,
    Dotted,
    Dashed,
    LargeDashed,
    SparseDotted,
}

impl LineStyle {
    pub fn code(self) -> u8 {
        match self {
            LineStyle::Solid => 0,
            LineStyle::Dotted => 1,
            LineStyle::Dashed => 2,
            LineStyle::LargeDashed => 3,
            LineStyle::SparseDotted => 4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrosshairLine {
    pub width: u32,
    pub color: String,
    pub style: LineStyle,
}

impl Default for CrosshairLine {
    fn default() -> Self {
        Self {
            width: 1,
            color: "#758696".to_string(),
            style: LineStyle::LargeDashed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrosshairStyle {
    pub mode: CrosshairMode,
    pub vert_line: CrosshairLine,
    pub horz_line: CrosshairLine,
}

impl Default for CrosshairStyle {
    fn default() -> Self {
        Self {
            mode: CrosshairMode::Magnet,
            vert_line: CrosshairLine::default(),
            horz_line: CrosshairLine::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandleStyle {
    pub up_color: String,
    pub down_color: String,
    pub border_visible: bool,
    pub wick_up_color: String,
    pub wick_down_color: String,
}

impl Default for CandleStyle {
    fn default() -> Self {
        Self {
            up_color: "#26a69a".to_string(),
            down_color: "#ef5350".to_string(),
            border_visible: false,
            wick_up_color: "#26a69a".to_string(),
            wick_down_color: "#ef5350".to_string(),
        }
    }
}
