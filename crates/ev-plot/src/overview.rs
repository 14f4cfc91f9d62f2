//! Overview figure: panels 1–6.

use std::path::Path;

use plotters::prelude::*;
use tracing::info;

use crate::context::{FigureContext, ensure_writable};
use crate::data::{CategoryStat, OverviewData, PairedRuns};
use crate::draw::{self, Bar, Panel, XAxis};
use crate::palette;
use crate::RenderResult;

const PAIR_WIDTH: f64 = 0.35;

/// Render the six overview panels to a PNG at `path`.
pub fn render_overview(data: &OverviewData, ctx: &FigureContext, path: &Path) -> RenderResult<()> {
    ensure_writable(path)?;

    let root = BitMapBackend::new(path, ctx.pixels()).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((2, 3));

    survival_by_run(&panels[0], ctx, data)?;
    category_means(
        &panels[1],
        ctx,
        ("Survival Rates by Agent Role", "(Mean ± Std Dev)"),
        "Survival Rate (%)",
        &data.role_rates,
        &palette::ROLES,
        |m| format!("{m:.1}%"),
        Some(100.0),
    )?;
    victims_vs_saved(&panels[2], ctx, data)?;
    category_means(
        &panels[3],
        ctx,
        ("Victim Distribution by Category", "(Mean ± Std Dev)"),
        "Number of Victims",
        &data.victim_breakdown,
        &palette::VICTIM_CATEGORIES,
        |m| format!("{m:.1}"),
        None,
    )?;
    paired_runs(
        &panels[4],
        ctx,
        "Spectators vs Workers Survival Rates",
        &data.spectators_vs_workers,
        (palette::SPECTATORS, palette::WORKERS),
    )?;
    paired_runs(
        &panels[5],
        ctx,
        "Leaders vs Followers Survival Rates",
        &data.leaders_vs_followers,
        (palette::LEADERS, palette::FOLLOWERS),
    )?;

    root.present()?;
    info!(path = %path.display(), "wrote overview figure");
    Ok(())
}

/// Panel 1: survival rate per run with the mean as a reference line.
fn survival_by_run(panel: &Panel<'_>, ctx: &FigureContext, data: &OverviewData) -> RenderResult<()> {
    let n = data.runs();
    let x_range = XAxis::slot_range(n);
    let area = draw::titled(panel, ctx, "Overall Survival Rate Variability")?;
    let mut chart = draw::cartesian(&area, ctx, "Across Simulation Runs", x_range.clone(), 0.0..100.0)?;
    draw::mesh(&mut chart, ctx, XAxis::Runs(n), Some("Simulation Run"), "Survival Rate (%)")?;

    let bars: Vec<Bar> = data
        .survival_by_run
        .iter()
        .enumerate()
        .map(|(i, &rate)| Bar::centered(i as f64, 0.8, rate))
        .collect();
    draw::bars(&mut chart, ctx, &bars, palette::BARS, None)?;

    let mean = data.mean_survival;
    if mean.is_finite() {
        draw::legend_line(
            &mut chart,
            ctx,
            (x_range.start, mean),
            (x_range.end, mean),
            RED,
            &format!("Mean: {mean:.1}%"),
        )?;
        draw::legend_box(&mut chart, ctx, SeriesLabelPosition::LowerRight)?;
    }
    Ok(())
}

/// Panels 2 and 4: one bar per category with `mean ± std` whiskers and a
/// value label.  `y_floor` keeps the axis at least that tall.
#[allow(clippy::too_many_arguments)]
fn category_means(
    panel:   &Panel<'_>,
    ctx:     &FigureContext,
    titles:  (&str, &str),
    y_desc:  &str,
    stats:   &[CategoryStat],
    colors:  &[RGBColor],
    label:   impl Fn(f64) -> String,
    y_floor: Option<f64>,
) -> RenderResult<()> {
    let labels: Vec<&str> = stats.iter().map(|s| s.label).collect();
    let top = stats.iter().map(CategoryStat::upper).fold(0.0, f64::max);
    let y_max = (top * 1.15).max(y_floor.unwrap_or(1.0)).max(1.0);
    let pad = y_max * 0.02;

    let area = draw::titled(panel, ctx, titles.0)?;
    let mut chart = draw::cartesian(&area, ctx, titles.1, XAxis::slot_range(stats.len()), 0.0..y_max)?;
    draw::mesh(&mut chart, ctx, XAxis::Categories(&labels), None, y_desc)?;

    for (i, (stat, &color)) in stats.iter().zip(colors).enumerate() {
        draw::bars(&mut chart, ctx, &[Bar::centered(i as f64, 0.7, stat.mean)], color, None)?;
    }
    let whiskers: Vec<(f64, f64, f64)> = stats
        .iter()
        .enumerate()
        .map(|(i, s)| (i as f64, s.mean, s.std))
        .collect();
    draw::error_bars(&mut chart, ctx, &whiskers, 0.2)?;

    let text = stats
        .iter()
        .enumerate()
        .map(|(i, s)| (i as f64, s.upper() + pad, label(s.mean)))
        .collect();
    draw::labels(&mut chart, &ctx.value_label(10.0), text)?;
    Ok(())
}

/// Panel 3: victims against saved, coloured by run, with the
/// `victims + saved = tot_people` line.
fn victims_vs_saved(panel: &Panel<'_>, ctx: &FigureContext, data: &OverviewData) -> RenderResult<()> {
    let n = data.runs();
    let people = data.tot_people;
    let max_val = data
        .victims_vs_saved
        .iter()
        .flat_map(|&(v, s)| [v, s])
        .filter(|v| v.is_finite())
        .fold(0.0, f64::max)
        .max(1.0);
    let y_lo = (people - max_val).min(0.0);
    let y_hi = people.max(max_val) * 1.05;

    let area = draw::titled(panel, ctx, "Victims vs Saved People")?;
    let mut chart = draw::cartesian(&area, ctx, "(Colored by Run Number)", 0.0..max_val * 1.05, y_lo..y_hi)?;
    draw::mesh(&mut chart, ctx, XAxis::Numeric, Some("Total Victims"), "Total Saved")?;

    draw::markers(&mut chart, ctx, &data.victims_vs_saved, |i| palette::run_color(i, n))?;
    draw::legend_line(
        &mut chart,
        ctx,
        (0.0, people),
        (max_val, people - max_val),
        RED,
        &format!("Victims + Saved = {people}"),
    )?;
    draw::legend_swatch(&mut chart, ctx, palette::run_color(0, n), "Run 1")?;
    if n > 1 {
        draw::legend_swatch(&mut chart, ctx, palette::run_color(n - 1, n), &format!("Run {n}"))?;
    }
    draw::legend_box(&mut chart, ctx, SeriesLabelPosition::UpperRight)?;
    Ok(())
}

/// Panels 5 and 6: two rates side by side for every run.
fn paired_runs(
    panel:  &Panel<'_>,
    ctx:    &FigureContext,
    title:  &str,
    pair:   &PairedRuns,
    colors: (RGBColor, RGBColor),
) -> RenderResult<()> {
    let n = pair.left.len();
    let area = draw::titled(panel, ctx, title)?;
    let mut chart = draw::cartesian(&area, ctx, "Across Runs", XAxis::slot_range(n), 0.0..100.0)?;
    draw::mesh(&mut chart, ctx, XAxis::Runs(n), Some("Simulation Run"), "Survival Rate (%)")?;

    let side = |values: &[f64], offset: f64| -> Vec<Bar> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| Bar::centered(i as f64 + offset, PAIR_WIDTH, v))
            .collect()
    };
    draw::bars(&mut chart, ctx, &side(&pair.left, -PAIR_WIDTH / 2.0), colors.0, Some(pair.left_label))?;
    draw::bars(&mut chart, ctx, &side(&pair.right, PAIR_WIDTH / 2.0), colors.1, Some(pair.right_label))?;
    draw::legend_box(&mut chart, ctx, SeriesLabelPosition::UpperRight)?;
    Ok(())
}
