use std::f64::consts::TAU;

use crate::{
    axis::{Chart, PlotGeometry, Redraw, Variant, VariantDescriptor, format_si},
    core::{
        config::ChartConfig,
        data::read_sweep_from_path,
        error::{ConfigError, SweepError},
        rng::Lcg,
        sample::{Complex, Sample},
        window::FrequencyWindow,
    },
};

use super::parse::{AxisArgs, DemoArgs, ProbeArgs, RangeArgs};

// --- Helpers ---

fn chart_from_args(a: &AxisArgs) -> Result<Chart, ConfigError> {
    let config = ChartConfig::builder()
        .fixed_values(a.fixed)
        .min_display_value(a.min)
        .max_display_value(a.max)
        .logarithmic_y(a.log)
        .build()?;
    let window = match (a.start, a.stop) {
        (None, None) => None,
        (lo, hi) => Some(FrequencyWindow::new(
            lo.unwrap_or(f64::NEG_INFINITY),
            hi.unwrap_or(f64::INFINITY),
        )?),
    };
    Ok(Chart::new(a.chart.into(), PlotGeometry::new(a.height, a.top))
        .with_config(config)
        .with_fixed_window(window))
}

fn load(a: &RangeArgs) -> Result<(Vec<Sample>, Vec<Sample>), SweepError> {
    let data = read_sweep_from_path(&a.file)?;
    let reference = match &a.reference {
        Some(path) => read_sweep_from_path(path)?,
        None => Vec::new(),
    };
    Ok((data, reference))
}

fn print_redraw(chart: &Chart, frame: &Redraw) {
    let desc = chart.descriptor();
    let mode = if frame.range.fixed { "fixed" } else { "auto" };
    let scale = if chart.logarithmic() { "log" } else { "linear" };
    println!("{} ({})  {mode}  {scale}", desc.name, desc.unit);
    println!(
        "window {}Hz .. {}Hz",
        format_si(frame.window.start, 4),
        format_si(frame.window.stop, 4)
    );
    println!(
        "range  {} .. {}  span {}{}",
        desc.label(frame.range.min),
        desc.label(frame.range.max),
        format_si(frame.range.span, 3),
        if frame.range.degenerate {
            "  (collapsed)"
        } else {
            ""
        }
    );

    let geo = chart.geometry();
    if let Some(top) = &frame.top_label {
        println!("{:>6}  {top}", geo.top_margin_px);
    }
    for t in &frame.ticks {
        let label = if t.skip_label {
            String::new()
        } else {
            desc.label(t.value)
        };
        println!("{:>6}  {label}", t.row);
    }
    println!("{:>6}  {}", geo.bottom(), frame.bottom_label);
}

// --- Commands ---

pub fn range(a: &RangeArgs) -> Result<(), SweepError> {
    let (data, reference) = load(a)?;
    let mut chart = chart_from_args(&a.axis)?;
    match chart.redraw(&data, &reference)? {
        Some(frame) => print_redraw(&chart, &frame),
        None => println!("nothing to draw"),
    }
    Ok(())
}

pub fn probe(a: &ProbeArgs) -> Result<(), SweepError> {
    let (data, reference) = load(&a.sweep)?;
    let mut chart = chart_from_args(&a.sweep.axis)?;
    if chart.redraw(&data, &reference)?.is_none() {
        println!("nothing to draw");
        return Ok(());
    }
    let desc = chart.descriptor();
    for &row in &a.row {
        if let Some(v) = chart.value_at_row(row) {
            // reactive charts answer in scaled display units, so no SI prefix
            let shown = if (desc.unit_scale - 1.0).abs() < f64::EPSILON {
                format!("{}{}", desc.label(v), desc.unit)
            } else {
                format!("{v:.3}")
            };
            println!("row {row:>6} -> {shown}");
        }
    }
    Ok(())
}

/// Series R-L-C load seen through a 50 Ω bridge.
fn rlc_sweep(a: &DemoArgs) -> Vec<Sample> {
    let mut rng = Lcg::seed(a.seed);
    let z0 = Complex::new(50.0, 0.0);
    let l = a.l_nh * 1e-9;
    let c = a.c_pf * 1e-12;
    let steps = a.points.max(2) - 1;

    (0..=steps)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let f = a.f_start + (a.f_stop - a.f_start) * i as f64 / steps as f64;
            let w = TAU * f;
            let z = Complex::new(a.r, w * l - 1.0 / (w * c));
            let gamma = (z - z0) / (z + z0)
                + Complex::new(a.noise * rng.randn(), a.noise * rng.randn());
            Sample::new(f, gamma)
        })
        .collect()
}

pub fn demo(a: &DemoArgs) -> Result<(), SweepError> {
    let data = rlc_sweep(a);
    let config = ChartConfig::builder().logarithmic_y(a.log).build()?;
    for variant in Variant::ALL {
        let mut chart =
            Chart::new(variant, PlotGeometry::new(a.height, a.top)).with_config(config);
        if let Some(frame) = chart.redraw(&data, &[])? {
            print_redraw(&chart, &frame);
            println!();
        }
    }
    Ok(())
}

fn describe(v: Variant, d: &VariantDescriptor) {
    println!(
        "{v:<12} {:<12} unit {:<2} eps {:<6e} tick {}px  tens {:<5} log {:<5} scale {:e}",
        d.name,
        d.unit,
        d.epsilon,
        d.tick_spacing_px,
        d.round_range_to_tens,
        d.log_capable,
        d.unit_scale
    );
}

/// Print the built-in chart kinds.
pub fn charts() {
    println!("\nAvailable charts:");
    for v in Variant::ALL {
        describe(v, v.descriptor());
    }
    println!();
}
