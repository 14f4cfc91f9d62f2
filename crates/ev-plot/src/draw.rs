//! Drawing primitives shared by both figures.

use std::ops::Range;

use plotters::coord::Shift;
use plotters::coord::cartesian::Cartesian2d;
use plotters::coord::types::RangedCoordf64;
use plotters::prelude::*;

use crate::context::FigureContext;
use crate::palette::FILL_ALPHA;
use crate::RenderResult;

pub(crate) type Panel<'a> = DrawingArea<BitMapBackend<'a>, Shift>;
pub(crate) type Chart<'a, 'b> =
    ChartContext<'a, BitMapBackend<'b>, Cartesian2d<RangedCoordf64, RangedCoordf64>>;

/// Axis-aligned bar in data coordinates.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Bar {
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
}

impl Bar {
    /// Bar of `width` centred on `x`, rising from zero.
    pub fn centered(x: f64, width: f64, height: f64) -> Self {
        Self { x0: x - width / 2.0, x1: x + width / 2.0, y0: 0.0, y1: height }
    }

    fn is_drawable(&self) -> bool {
        self.y0.is_finite() && self.y1.is_finite()
    }

    fn corners(&self) -> [(f64, f64); 2] {
        [(self.x0, self.y0), (self.x1, self.y1)]
    }
}

/// How the x axis is labelled.
#[derive(Clone, Copy)]
pub(crate) enum XAxis<'l> {
    /// Category `i` sits at `x = i`.
    Categories(&'l [&'l str]),
    /// Run `i` (0-based) sits at `x = i` and is labelled `i + 1`.
    Runs(usize),
    /// Plain numeric axis with both grids.
    Numeric,
}

impl XAxis<'_> {
    /// Range that leaves half a slot on each side of the first/last slot.
    pub fn slot_range(slots: usize) -> Range<f64> {
        -0.5..(slots.max(1) as f64 - 0.5)
    }
}

/// Slot index for a tick at `x`, if `x` sits exactly on one.
pub(crate) fn slot_label(x: f64, slots: usize) -> Option<usize> {
    let i = x.round();
    if (x - i).abs() > 1e-6 || i < 0.0 || i as usize >= slots {
        None
    } else {
        Some(i as usize)
    }
}

/// Caption the panel with `title` and return the area beneath it.
pub(crate) fn titled<'b>(panel: &Panel<'b>, ctx: &FigureContext, title: &str) -> RenderResult<Panel<'b>> {
    Ok(panel.titled(title, ctx.title())?)
}

/// Cartesian chart under a subtitle.
pub(crate) fn cartesian<'a, 'b>(
    area:     &'a Panel<'b>,
    ctx:      &FigureContext,
    subtitle: &str,
    x:        Range<f64>,
    y:        Range<f64>,
) -> RenderResult<Chart<'a, 'b>> {
    Ok(ChartBuilder::on(area)
        .caption(subtitle, ctx.subtitle())
        .margin(ctx.px(6.0))
        .x_label_area_size(ctx.px(36.0))
        .y_label_area_size(ctx.px(48.0))
        .build_cartesian_2d(x, y)?)
}

/// Axes, tick labels, and a light grid (horizontal only unless `x` is
/// [`XAxis::Numeric`]).
pub(crate) fn mesh(
    chart:  &mut Chart<'_, '_>,
    ctx:    &FigureContext,
    x:      XAxis<'_>,
    x_desc: Option<&str>,
    y_desc: &str,
) -> RenderResult<()> {
    let formatter: Box<dyn Fn(&f64) -> String + '_> = match x {
        XAxis::Categories(labels) => Box::new(move |v: &f64| {
            slot_label(*v, labels.len()).map(|i| labels[i].to_string()).unwrap_or_default()
        }),
        XAxis::Runs(runs) => Box::new(move |v: &f64| {
            slot_label(*v, runs).map(|i| (i + 1).to_string()).unwrap_or_default()
        }),
        XAxis::Numeric => Box::new(|v: &f64| format!("{v:.0}")),
    };
    let x_labels = match x {
        XAxis::Categories(labels) => labels.len() + 1,
        XAxis::Runs(runs) => runs.min(20) + 1,
        XAxis::Numeric => 8,
    };

    let mut mesh = chart.configure_mesh();
    mesh.label_style(ctx.tick())
        .axis_desc_style(ctx.axis_desc())
        .light_line_style(WHITE)
        .bold_line_style(BLACK.mix(0.12))
        .x_labels(x_labels)
        .x_label_formatter(&*formatter)
        .y_desc(y_desc);
    if !matches!(x, XAxis::Numeric) {
        mesh.disable_x_mesh();
    }
    if let Some(desc) = x_desc {
        mesh.x_desc(desc);
    }
    mesh.draw()?;
    Ok(())
}

/// Filled bars with a dark outline, optionally entered in the legend.
pub(crate) fn bars(
    chart:  &mut Chart<'_, '_>,
    ctx:    &FigureContext,
    bars:   &[Bar],
    color:  RGBColor,
    legend: Option<&str>,
) -> RenderResult<()> {
    let fill = color.mix(FILL_ALPHA).filled();
    let drawn = chart.draw_series(
        bars.iter()
            .filter(|b| b.is_drawable())
            .map(|b| Rectangle::new(b.corners(), fill)),
    )?;
    if let Some(label) = legend {
        let s = ctx.px(4.0) as i32;
        drawn
            .label(label)
            .legend(move |(x, y)| Rectangle::new([(x, y - s), (x + 2 * s, y + s)], fill));
    }

    let edge = ShapeStyle::from(&BLACK).stroke_width(ctx.px(0.8));
    chart.draw_series(
        bars.iter()
            .filter(|b| b.is_drawable())
            .map(|b| Rectangle::new(b.corners(), edge)),
    )?;
    Ok(())
}

/// Vertical `mean ± std` whiskers with caps `cap` wide (data units).
pub(crate) fn error_bars(
    chart: &mut Chart<'_, '_>,
    ctx:   &FigureContext,
    at:    &[(f64, f64, f64)],
    cap:   f64,
) -> RenderResult<()> {
    let style = ShapeStyle::from(&BLACK).stroke_width(ctx.px(1.2));
    for &(x, mean, std) in at {
        if !mean.is_finite() || !std.is_finite() {
            continue;
        }
        let (lo, hi) = (mean - std, mean + std);
        chart.draw_series([
            PathElement::new(vec![(x, lo), (x, hi)], style),
            PathElement::new(vec![(x - cap / 2.0, lo), (x + cap / 2.0, lo)], style),
            PathElement::new(vec![(x - cap / 2.0, hi), (x + cap / 2.0, hi)], style),
        ])?;
    }
    Ok(())
}

/// Text labels at data positions.  Undefined positions are skipped.
pub(crate) fn labels(
    chart: &mut Chart<'_, '_>,
    style: &TextStyle<'static>,
    at:    Vec<(f64, f64, String)>,
) -> RenderResult<()> {
    chart.draw_series(
        at.into_iter()
            .filter(|(x, y, _)| x.is_finite() && y.is_finite())
            .map(|(x, y, text)| Text::new(text, (x, y), style.clone())),
    )?;
    Ok(())
}

/// Horizontal or sloped line entered in the legend.
pub(crate) fn legend_line(
    chart: &mut Chart<'_, '_>,
    ctx:   &FigureContext,
    from:  (f64, f64),
    to:    (f64, f64),
    color: RGBColor,
    label: &str,
) -> RenderResult<()> {
    let style = ShapeStyle::from(&color.mix(0.8)).stroke_width(ctx.px(1.6));
    let s = ctx.px(8.0) as i32;
    chart
        .draw_series(LineSeries::new([from, to], style))?
        .label(label)
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + s, y)], style));
    Ok(())
}

/// Scatter markers with a dark edge.
pub(crate) fn markers(
    chart:  &mut Chart<'_, '_>,
    ctx:    &FigureContext,
    points: &[(f64, f64)],
    color:  impl Fn(usize) -> RGBColor,
) -> RenderResult<()> {
    let r = ctx.px(5.0);
    let edge = ShapeStyle::from(&BLACK).stroke_width(ctx.px(0.8));
    for (i, &p) in points.iter().enumerate() {
        if !(p.0.is_finite() && p.1.is_finite()) {
            continue;
        }
        chart.draw_series([
            Circle::new(p, r, color(i).mix(0.6).filled()),
            Circle::new(p, r, edge),
        ])?;
    }
    Ok(())
}

/// Legend-only entry: a coloured square with `label`, no data drawn.
pub(crate) fn legend_swatch(
    chart: &mut Chart<'_, '_>,
    ctx:   &FigureContext,
    color: RGBColor,
    label: &str,
) -> RenderResult<()> {
    let s = ctx.px(4.0) as i32;
    let fill = color.filled();
    chart
        .draw_series(std::iter::empty::<Circle<(f64, f64), u32>>())?
        .label(label)
        .legend(move |(x, y)| Rectangle::new([(x, y - s), (x + 2 * s, y + s)], fill));
    Ok(())
}

/// Legend for every labelled series drawn so far.
///
/// The backend must outlive the chart borrow for the label style to hold it.
pub(crate) fn legend_box<'a, 'b: 'a>(
    chart: &mut Chart<'a, 'b>,
    ctx:   &FigureContext,
    at:    SeriesLabelPosition,
) -> RenderResult<()> {
    chart
        .configure_series_labels()
        .position(at)
        .label_font(ctx.tick())
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    Ok(())
}

/// `[lo, hi)` widened by `pad` of its span on both sides; a degenerate span
/// becomes `value ± 1`.
pub(crate) fn padded(lo: f64, hi: f64, pad: f64) -> Range<f64> {
    let span = hi - lo;
    if !(span.is_finite() && span > 0.0) {
        let c = if lo.is_finite() { lo } else { 0.0 };
        return (c - 1.0)..(c + 1.0);
    }
    (lo - span * pad)..(hi + span * pad)
}
