//! Detailed figure: panels 7–12.

use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use ev_stats::BoxStats;

use crate::context::{FigureContext, ensure_writable};
use crate::data::{DetailedData, Extremes, Outcome, ROLE_LABELS, Trend, VARIABILITY_LABELS, VICTIM_LABELS, extent};
use crate::draw::{self, Bar, Panel, XAxis};
use crate::palette;
use crate::RenderResult;

const PAIR_WIDTH: f64 = 0.35;
const BOX_WIDTH: f64 = 0.6;

/// Render the six detailed panels to a PNG at `path`.
pub fn render_detailed(data: &DetailedData, ctx: &FigureContext, path: &Path) -> RenderResult<()> {
    ensure_writable(path)?;

    let root = BitMapBackend::new(path, ctx.pixels()).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((2, 3));

    trend(
        &panels[0],
        ctx,
        ("Panic Victims vs Total Victims", "(Correlation Analysis)"),
        "Panic Victims",
        &data.panic_trend,
        palette::CRIMSON,
    )?;
    trend(
        &panels[1],
        ctx,
        ("Survival Rate vs Number of Victims", "(Inverse Relationship)"),
        "Overall Survival Rate (%)",
        &data.survival_trend,
        palette::FOREST,
    )?;
    role_boxes(&panels[2], ctx, &data.role_boxes)?;
    outcomes(&panels[3], ctx, &data.outcomes)?;
    variability(&panels[4], ctx, &data.variability)?;
    extremes(&panels[5], ctx, &data.extremes)?;

    root.present()?;
    info!(path = %path.display(), "wrote detailed figure");
    Ok(())
}

/// Panels 7 and 8: scatter, fitted line, and the correlation coefficient.
fn trend(
    panel:  &Panel<'_>,
    ctx:    &FigureContext,
    titles: (&str, &str),
    y_desc: &str,
    trend:  &Trend,
    color:  RGBColor,
) -> RenderResult<()> {
    let (x_lo, x_hi) = trend.x_extent();
    let (y_lo, y_hi) = extent(
        trend
            .points
            .iter()
            .map(|p| p.1)
            .chain([trend.fit.predict(x_lo), trend.fit.predict(x_hi)]),
    );
    let x_range = draw::padded(x_lo, x_hi, 0.08);
    let y_range = draw::padded(y_lo, y_hi, 0.15);

    let area = draw::titled(panel, ctx, titles.0)?;
    let mut chart = draw::cartesian(&area, ctx, titles.1, x_range.clone(), y_range.clone())?;
    draw::mesh(&mut chart, ctx, XAxis::Numeric, Some("Total Victims"), y_desc)?;

    draw::markers(&mut chart, ctx, &trend.points, |_| color)?;
    draw::legend_line(
        &mut chart,
        ctx,
        (x_lo, trend.fit.predict(x_lo)),
        (x_hi, trend.fit.predict(x_hi)),
        RED,
        "Trend line",
    )?;

    let x_span = x_range.end - x_range.start;
    let y_span = y_range.end - y_range.start;
    draw::labels(
        &mut chart,
        &ctx.annotation(11.0),
        vec![(
            x_range.start + 0.04 * x_span,
            y_range.end - 0.04 * y_span,
            format!("Correlation: {:.3}", trend.correlation),
        )],
    )?;
    draw::legend_box(&mut chart, ctx, SeriesLabelPosition::LowerRight)?;
    Ok(())
}

/// Panel 9: box-and-whisker per role, with median and mean lines.
fn role_boxes(panel: &Panel<'_>, ctx: &FigureContext, boxes: &[Option<BoxStats>]) -> RenderResult<()> {
    let area = draw::titled(panel, ctx, "Survival Rate Distribution by Role")?;
    let mut chart = draw::cartesian(
        &area,
        ctx,
        "(Box Plot with Median & Mean)",
        XAxis::slot_range(ROLE_LABELS.len()),
        0.0..100.0,
    )?;
    draw::mesh(&mut chart, ctx, XAxis::Categories(&ROLE_LABELS), None, "Survival Rate (%)")?;

    let edge = ShapeStyle::from(&BLACK).stroke_width(ctx.px(1.0));
    let median = ShapeStyle::from(&palette::MEDIAN).stroke_width(ctx.px(1.6));
    let mean = ShapeStyle::from(&palette::MEAN_LINE).stroke_width(ctx.px(1.6));
    let half = BOX_WIDTH / 2.0;

    for (i, (b, &color)) in boxes.iter().zip(&palette::ROLES).enumerate() {
        let Some(b) = b else { continue };
        let x = i as f64;

        chart.draw_series([
            Rectangle::new([(x - half, b.q1), (x + half, b.q3)], color.mix(0.6).filled()),
            Rectangle::new([(x - half, b.q1), (x + half, b.q3)], edge),
        ])?;
        chart.draw_series([
            PathElement::new(vec![(x, b.q3), (x, b.upper_whisker)], edge),
            PathElement::new(vec![(x, b.q1), (x, b.lower_whisker)], edge),
            PathElement::new(vec![(x - half / 2.0, b.upper_whisker), (x + half / 2.0, b.upper_whisker)], edge),
            PathElement::new(vec![(x - half / 2.0, b.lower_whisker), (x + half / 2.0, b.lower_whisker)], edge),
            PathElement::new(vec![(x - half, b.median), (x + half, b.median)], median),
            PathElement::new(vec![(x - half, b.mean), (x + half, b.mean)], mean),
        ])?;
        chart.draw_series(
            b.outliers
                .iter()
                .map(|&v| Circle::new((x, v), ctx.px(3.0), edge)),
        )?;
    }

    draw::legend_swatch(&mut chart, ctx, palette::MEDIAN, "Median")?;
    draw::legend_swatch(&mut chart, ctx, palette::MEAN_LINE, "Mean")?;
    draw::legend_box(&mut chart, ctx, SeriesLabelPosition::LowerRight)?;
    Ok(())
}

/// Panel 10: mean saved stacked under mean victims, with shares inline.
fn outcomes(panel: &Panel<'_>, ctx: &FigureContext, outcomes: &[Outcome]) -> RenderResult<()> {
    let labels: Vec<&str> = outcomes.iter().map(|o| o.label).collect();
    let top = outcomes
        .iter()
        .map(Outcome::total)
        .filter(|t| t.is_finite())
        .fold(0.0, f64::max)
        .max(1.0);

    let area = draw::titled(panel, ctx, "Average Outcomes: Saved vs Victims")?;
    let mut chart = draw::cartesian(
        &area,
        ctx,
        "(Spectators vs Workers)",
        XAxis::slot_range(outcomes.len()),
        0.0..top * 1.1,
    )?;
    draw::mesh(&mut chart, ctx, XAxis::Categories(&labels), None, "Number of People")?;

    let saved: Vec<Bar> = outcomes
        .iter()
        .enumerate()
        .map(|(i, o)| Bar::centered(i as f64, 0.6, o.saved))
        .collect();
    let victims: Vec<Bar> = outcomes
        .iter()
        .zip(&saved)
        .map(|(o, s)| Bar { y0: s.y1, y1: s.y1 + o.victims, ..*s })
        .collect();
    draw::bars(&mut chart, ctx, &saved, palette::SAVED, Some("Saved"))?;
    draw::bars(&mut chart, ctx, &victims, palette::VICTIMS, Some("Victims"))?;

    let mut text = Vec::with_capacity(outcomes.len() * 2);
    for (i, o) in outcomes.iter().enumerate() {
        let x = i as f64;
        text.push((x, o.saved / 2.0, format!("{:.1}%", o.saved_pct())));
        text.push((x, o.saved + o.victims / 2.0, format!("{:.1}%", o.victims_pct())));
    }
    draw::labels(&mut chart, &ctx.centered_label(11.0).color(&WHITE), text)?;
    draw::legend_box(&mut chart, ctx, SeriesLabelPosition::UpperRight)?;
    Ok(())
}

/// Panel 11: coefficient of variation per survival-rate category.
fn variability(panel: &Panel<'_>, ctx: &FigureContext, cvs: &[f64]) -> RenderResult<()> {
    let top = cvs.iter().copied().filter(|v| v.is_finite()).fold(0.0, f64::max).max(1.0);
    let y_max = top * 1.2;

    let area = draw::titled(panel, ctx, "Survival Rate Variability by Category")?;
    let mut chart = draw::cartesian(
        &area,
        ctx,
        "(Lower = More Consistent)",
        XAxis::slot_range(VARIABILITY_LABELS.len()),
        0.0..y_max,
    )?;
    draw::mesh(
        &mut chart,
        ctx,
        XAxis::Categories(&VARIABILITY_LABELS),
        None,
        "Coefficient of Variation (%)",
    )?;

    for (i, (&cv, &color)) in cvs.iter().zip(&palette::VARIABILITY).enumerate() {
        draw::bars(&mut chart, ctx, &[Bar::centered(i as f64, 0.7, cv)], color, None)?;
    }
    let text = cvs
        .iter()
        .enumerate()
        .map(|(i, &cv)| (i as f64, cv + y_max * 0.01, format!("{cv:.1}%")))
        .collect();
    draw::labels(&mut chart, &ctx.value_label(9.0), text)?;
    Ok(())
}

/// Panel 12: victim counts of the best and the worst run side by side.
fn extremes(panel: &Panel<'_>, ctx: &FigureContext, ext: &Extremes) -> RenderResult<()> {
    let top = ext
        .best_victims
        .iter()
        .chain(&ext.worst_victims)
        .copied()
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max)
        .max(1.0);

    let area = draw::titled(panel, ctx, "Best vs Worst Run Comparison")?;
    let mut chart = draw::cartesian(
        &area,
        ctx,
        "(Victim Distribution)",
        XAxis::slot_range(VICTIM_LABELS.len()),
        0.0..top * 1.15,
    )?;
    draw::mesh(&mut chart, ctx, XAxis::Categories(&VICTIM_LABELS), None, "Number of Victims")?;

    let side = |values: &[f64], offset: f64| -> Vec<Bar> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Bar::centered(i as f64 + offset, PAIR_WIDTH, v))
            .collect()
    };
    draw::bars(
        &mut chart,
        ctx,
        &side(&ext.best_victims, -PAIR_WIDTH / 2.0),
        palette::SAVED,
        Some(&format!("Best Run #{} ({:.1}%)", ext.best + 1, ext.best_rate)),
    )?;
    draw::bars(
        &mut chart,
        ctx,
        &side(&ext.worst_victims, PAIR_WIDTH / 2.0),
        palette::VICTIMS,
        Some(&format!("Worst Run #{} ({:.1}%)", ext.worst + 1, ext.worst_rate)),
    )?;
    draw::legend_box(&mut chart, ctx, SeriesLabelPosition::UpperRight)?;
    Ok(())
}
