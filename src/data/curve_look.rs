//! CurveLook: how a curve is drawn (color and line width).

use eframe::egui;

use crate::error::ConfigError;

/// The visual presentation of a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveLook {
    pub color: egui::Color32,
    pub width: f32,
}

impl Default for CurveLook {
    fn default() -> Self {
        Self {
            color: egui::Color32::BLACK,
            width: 1.0,
        }
    }
}

impl CurveLook {
    pub fn new(color: egui::Color32, width: f32) -> Self {
        Self { color, width }
    }

    /// Look with a palette color picked by curve index and the default width.
    pub fn indexed(index: usize) -> Self {
        Self {
            color: Self::alloc_color(index),
            ..Default::default()
        }
    }

    /// Like [`new`](Self::new) but rejects non-positive or non-finite widths.
    pub fn checked(color: egui::Color32, width: f32) -> Result<Self, ConfigError> {
        if !(width.is_finite() && width > 0.0) {
            return Err(ConfigError::invalid_setting(
                "line_width",
                format!("must be a positive number, got {width}"),
            ));
        }
        Ok(Self::new(color, width))
    }

    /// Parse a color string and combine it with `width`.
    pub fn parse(color: &str, width: f32) -> Result<Self, ConfigError> {
        Self::checked(parse_color(color)?, width)
    }

    /// Allocate a distinct color for the given curve index.
    pub fn alloc_color(index: usize) -> egui::Color32 {
        const PALETTE: [egui::Color32; 10] = [
            egui::Color32::from_rgb(31, 119, 180),
            egui::Color32::from_rgb(255, 127, 14),
            egui::Color32::from_rgb(44, 160, 44),
            egui::Color32::from_rgb(214, 39, 40),
            egui::Color32::from_rgb(148, 103, 189),
            egui::Color32::from_rgb(140, 86, 75),
            egui::Color32::from_rgb(227, 119, 194),
            egui::Color32::from_rgb(127, 127, 127),
            egui::Color32::from_rgb(188, 189, 34),
            egui::Color32::from_rgb(23, 190, 207),
        ];
        PALETTE[index % PALETTE.len()]
    }
}

/// Parse a color name (matplotlib base / common CSS names, `tab:` palette) or a
/// `#rrggbb` / `#rrggbbaa` hex string.
pub fn parse_color(s: &str) -> Result<egui::Color32, ConfigError> {
    let trimmed = s.trim();
    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| ConfigError::UnknownColor(s.to_string()));
    }
    let rgb = match trimmed.to_ascii_lowercase().as_str() {
        "black" | "k" => (0, 0, 0),
        "white" | "w" => (255, 255, 255),
        "red" | "r" => (255, 0, 0),
        "green" | "g" => (0, 128, 0),
        "blue" | "b" => (0, 0, 255),
        "cyan" | "c" => (0, 191, 191),
        "magenta" | "m" => (191, 0, 191),
        "yellow" | "y" => (191, 191, 0),
        "orange" => (255, 165, 0),
        "purple" => (128, 0, 128),
        "brown" => (165, 42, 42),
        "pink" => (255, 192, 203),
        "gray" | "grey" => (128, 128, 128),
        "olive" => (128, 128, 0),
        "navy" => (0, 0, 128),
        "teal" => (0, 128, 128),
        "gold" => (255, 215, 0),
        "tab:blue" => (31, 119, 180),
        "tab:orange" => (255, 127, 14),
        "tab:green" => (44, 160, 44),
        "tab:red" => (214, 39, 40),
        "tab:purple" => (148, 103, 189),
        "tab:brown" => (140, 86, 75),
        "tab:pink" => (227, 119, 194),
        "tab:gray" | "tab:grey" => (127, 127, 127),
        "tab:olive" => (188, 189, 34),
        "tab:cyan" => (23, 190, 207),
        _ => return Err(ConfigError::UnknownColor(s.to_string())),
    };
    Ok(egui::Color32::from_rgb(rgb.0, rgb.1, rgb.2))
}

fn parse_hex(hex: &str) -> Option<egui::Color32> {
    if !hex.is_ascii() {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        6 => Some(egui::Color32::from_rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(egui::Color32::from_rgba_unmultiplied(
            byte(0)?,
            byte(2)?,
            byte(4)?,
            byte(6)?,
        )),
        _ => None,
    }
}
