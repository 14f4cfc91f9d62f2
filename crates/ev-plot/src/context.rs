//! Per-figure drawing context.
//!
//! Each figure builds its own [`FigureContext`]; sizes, fonts, and stroke
//! widths are derived from it instead of from process-wide style state.

use std::path::Path;

use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{FontDesc, FontFamily, FontStyle, TextStyle};

use crate::{RenderError, RenderResult};

/// Physical size and resolution of one composite figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FigureContext {
    pub width_in:  f64,
    pub height_in: f64,
    pub dpi:       u32,
}

impl FigureContext {
    /// Six-panel overview figure, 16 × 12 in.
    pub fn overview(dpi: u32) -> Self {
        Self { width_in: 16.0, height_in: 12.0, dpi }
    }

    /// Six-panel detailed figure, 16 × 10 in.
    pub fn detailed(dpi: u32) -> Self {
        Self { width_in: 16.0, height_in: 10.0, dpi }
    }

    /// Raster size in pixels.
    pub fn pixels(&self) -> (u32, u32) {
        (
            (self.width_in * self.dpi as f64).round() as u32,
            (self.height_in * self.dpi as f64).round() as u32,
        )
    }

    /// Typographic points to pixels.
    #[inline]
    pub fn pt(&self, points: f64) -> f64 {
        points * self.dpi as f64 / 72.0
    }

    /// Points to whole pixels, never below one.
    #[inline]
    pub fn px(&self, points: f64) -> u32 {
        self.pt(points).round().max(1.0) as u32
    }

    pub fn font(&self, points: f64) -> FontDesc<'static> {
        FontDesc::new(FontFamily::SansSerif, self.pt(points), FontStyle::Normal)
    }

    pub fn bold(&self, points: f64) -> FontDesc<'static> {
        FontDesc::new(FontFamily::SansSerif, self.pt(points), FontStyle::Bold)
    }

    /// Panel title (first title line).
    pub fn title(&self) -> TextStyle<'static> {
        self.bold(12.0).into()
    }

    /// Panel subtitle (second title line).
    pub fn subtitle(&self) -> TextStyle<'static> {
        self.bold(10.0).into()
    }

    /// Axis description.
    pub fn axis_desc(&self) -> TextStyle<'static> {
        self.bold(11.0).into()
    }

    /// Tick labels and legend entries.
    pub fn tick(&self) -> TextStyle<'static> {
        self.font(10.0).into()
    }

    /// Value label anchored at its bottom centre.
    pub fn value_label(&self, points: f64) -> TextStyle<'static> {
        TextStyle::from(self.bold(points)).pos(Pos::new(HPos::Center, VPos::Bottom))
    }

    /// Value label anchored at its centre.
    pub fn centered_label(&self, points: f64) -> TextStyle<'static> {
        TextStyle::from(self.bold(points)).pos(Pos::new(HPos::Center, VPos::Center))
    }

    /// Annotation anchored at its top-left corner.
    pub fn annotation(&self, points: f64) -> TextStyle<'static> {
        TextStyle::from(self.bold(points)).pos(Pos::new(HPos::Left, VPos::Top))
    }
}

/// Fail with [`RenderError::OutputDir`] unless `path`'s parent directory
/// exists and accepts new files.
///
/// Writability is probed by creating and removing a scratch file, so nothing
/// is left behind on success or failure.
pub fn ensure_writable(path: &Path) -> RenderResult<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let fail = |reason: String| RenderError::OutputDir { path: path.to_path_buf(), reason };

    if !dir.is_dir() {
        return Err(fail(format!("directory {} does not exist", dir.display())));
    }
    let probe = dir.join(format!(".ev-plot-probe-{}", std::process::id()));
    std::fs::File::create(&probe).map_err(|e| fail(e.to_string()))?;
    // Best effort: the probe is empty, a leftover is harmless.
    let _ = std::fs::remove_file(&probe);
    Ok(())
}
