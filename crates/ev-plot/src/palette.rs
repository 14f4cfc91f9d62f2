//! Fixed colours used across both figures.

use plotters::style::RGBColor;

pub const SPECTATORS: RGBColor = RGBColor(0xFF, 0x6B, 0x6B);
pub const WORKERS:    RGBColor = RGBColor(0x4E, 0xCD, 0xC4);
pub const LEADERS:    RGBColor = RGBColor(0x45, 0xB7, 0xD1);
pub const FOLLOWERS:  RGBColor = RGBColor(0xFF, 0xA0, 0x7A);
pub const OVERALL:    RGBColor = RGBColor(0x34, 0x49, 0x5E);

/// Spectators, workers, leaders, followers.
pub const ROLES: [RGBColor; 4] = [SPECTATORS, WORKERS, LEADERS, FOLLOWERS];

/// Spectators, workers, leaders, followers, panic.
pub const VICTIM_CATEGORIES: [RGBColor; 5] = [
    RGBColor(0xE7, 0x4C, 0x3C),
    RGBColor(0x34, 0x98, 0xDB),
    RGBColor(0x2E, 0xCC, 0x71),
    RGBColor(0xF3, 0x9C, 0x12),
    RGBColor(0x9B, 0x59, 0xB6),
];

/// Overall, spectators, workers, leaders, followers.
pub const VARIABILITY: [RGBColor; 5] = [OVERALL, SPECTATORS, WORKERS, LEADERS, FOLLOWERS];

pub const SAVED:     RGBColor = RGBColor(0x2E, 0xCC, 0x71);
pub const VICTIMS:   RGBColor = RGBColor(0xE7, 0x4C, 0x3C);
pub const BARS:      RGBColor = RGBColor(0x46, 0x82, 0xB4);
pub const CRIMSON:   RGBColor = RGBColor(0xDC, 0x14, 0x3C);
pub const FOREST:    RGBColor = RGBColor(0x22, 0x8B, 0x22);
pub const MEDIAN:    RGBColor = RGBColor(0xFF, 0x7F, 0x0E);
pub const MEAN_LINE: RGBColor = RGBColor(0x2C, 0xA0, 0x2C);

/// Fill opacity for bars and markers.
pub const FILL_ALPHA: f64 = 0.7;

// Viridis sampled at 0, 0.25, 0.5, 0.75, 1.
const VIRIDIS: [(u8, u8, u8); 5] = [
    (0x44, 0x01, 0x54),
    (0x3B, 0x52, 0x8B),
    (0x21, 0x91, 0x8C),
    (0x5E, 0xC9, 0x62),
    (0xFD, 0xE7, 0x25),
];

/// Viridis colour for `t` in `[0, 1]` (clamped), linearly interpolated
/// between five anchor samples.
pub fn viridis(t: f64) -> RGBColor {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let pos = t * (VIRIDIS.len() - 1) as f64;
    let i = (pos.floor() as usize).min(VIRIDIS.len() - 2);
    let f = pos - i as f64;
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * f).round() as u8;
    let (a, b) = (VIRIDIS[i], VIRIDIS[i + 1]);
    RGBColor(lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
}

/// Colour of run `index` among `runs`, first run darkest.
pub fn run_color(index: usize, runs: usize) -> RGBColor {
    if runs <= 1 {
        return viridis(0.0);
    }
    viridis(index as f64 / (runs - 1) as f64)
}
