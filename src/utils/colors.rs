/// ANSI color helper utilities for terminal output.
use crate::core::duration::ColorBand;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

pub const BOLD_YELLOW: &str = "\x1b[1;33m";
pub const CRITICAL_BG: &str = "\x1b[41;97;1m";

/// Row color for a break band.
///
/// Open breaks get the light palette, closed ones the strong one.
pub fn color_for_band(band: ColorBand) -> &'static str {
    match band {
        ColorBand::ActiveNormal => RESET,
        ColorBand::ActiveWarning => YELLOW,
        ColorBand::ActiveCritical => RED,
        ColorBand::CompletedNormal => GREEN,
        ColorBand::CompletedWarning => BOLD_YELLOW,
        ColorBand::CompletedCritical => CRITICAL_BG,
    }
}

pub fn paint(color: &str, value: &str) -> String {
    if color == RESET {
        value.to_string()
    } else {
        format!("{color}{value}{RESET}")
    }
}
