//! Modifier keys for the advance gesture.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use eframe::egui;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modifier {
    None,
    #[default]
    Ctrl,
    Alt,
    Shift,
    CtrlAlt,
    CtrlShift,
    AltShift,
    CtrlAltShift,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Modifier::None => "None",
            Modifier::Ctrl => "Ctrl",
            Modifier::Alt => "Alt",
            Modifier::Shift => "Shift",
            Modifier::CtrlAlt => "Ctrl+Alt",
            Modifier::CtrlShift => "Ctrl+Shift",
            Modifier::AltShift => "Alt+Shift",
            Modifier::CtrlAltShift => "Ctrl+Alt+Shift",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Modifier {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("none") {
            return Ok(Modifier::None);
        }
        let (mut ctrl, mut alt, mut shift) = (false, false, false);
        for part in s.split('+').map(|p| p.trim().to_lowercase()) {
            match part.as_str() {
                "ctrl" | "control" | "cmd" | "command" => ctrl = true,
                "alt" | "option" => alt = true,
                "shift" => shift = true,
                other => return Err(format!("unknown modifier '{}'", other)),
            }
        }
        Ok(match (ctrl, alt, shift) {
            (true, false, false) => Modifier::Ctrl,
            (false, true, false) => Modifier::Alt,
            (false, false, true) => Modifier::Shift,
            (true, true, false) => Modifier::CtrlAlt,
            (true, false, true) => Modifier::CtrlShift,
            (false, true, true) => Modifier::AltShift,
            (true, true, true) => Modifier::CtrlAltShift,
            (false, false, false) => Modifier::None,
        })
    }
}

impl Modifier {
    /// Whether the held modifiers satisfy this requirement.
    ///
    /// Ctrl also accepts the platform command key so the gesture works on macOS.
    pub fn matches(self, mods: &egui::Modifiers) -> bool {
        let ctrl = mods.ctrl || mods.command;
        let alt = mods.alt;
        let shift = mods.shift;
        match self {
            Modifier::None => !ctrl && !alt && !shift,
            Modifier::Ctrl => ctrl && !alt && !shift,
            Modifier::Alt => alt && !ctrl && !shift,
            Modifier::Shift => shift && !ctrl && !alt,
            Modifier::CtrlAlt => ctrl && alt && !shift,
            Modifier::CtrlShift => ctrl && shift && !alt,
            Modifier::AltShift => alt && shift && !ctrl,
            Modifier::CtrlAltShift => ctrl && alt && shift,
        }
    }
}
