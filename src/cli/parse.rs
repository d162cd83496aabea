use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::axis::Variant;

/// Top-level CLI structure.
#[derive(Parser)]
#[command(
    name = "sweep-axis",
    about = "Vertical axis ranges, gridlines and pointer lookups for RF sweep charts"
)]
pub struct Cli {
    /// Emit diagnostics (same as RUST_LOG=debug)
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compute the axis range and gridlines for a sweep file
    Range(RangeArgs),
    /// Read back the value under a pixel row
    Probe(ProbeArgs),
    /// Run a synthetic series-RLC sweep through every chart
    Demo(DemoArgs),
    /// List the chart kinds and their constants
    Charts,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ChartKind {
    Capacitance,
    Inductance,
    #[value(alias = "impedance")]
    Magnitude,
}

impl From<ChartKind> for Variant {
    fn from(k: ChartKind) -> Self {
        match k {
            ChartKind::Capacitance => Variant::Capacitance,
            ChartKind::Inductance => Variant::Inductance,
            ChartKind::Magnitude => Variant::Magnitude,
        }
    }
}

/// Options shared by every command that draws an axis.
#[derive(Args, Debug)]
pub struct AxisArgs {
    /// Which derived quantity to plot
    #[arg(short, long, value_enum, default_value = "magnitude")]
    pub chart: ChartKind,

    /// Use --min/--max instead of auto-ranging
    #[arg(long)]
    pub fixed: bool,
    /// Lower display bound (C/L in units of 1e-12, |Z| in Ω)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub min: f64,
    /// Upper display bound (C/L in units of 1e-12, |Z| in Ω)
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
    pub max: f64,

    /// Logarithmic vertical axis (impedance only)
    #[arg(long)]
    pub log: bool,

    /// Pin the frequency window start (Hz)
    #[arg(long)]
    pub start: Option<f64>,
    /// Pin the frequency window stop (Hz)
    #[arg(long)]
    pub stop: Option<f64>,

    /// Plot area height in pixels
    #[arg(long, default_value_t = 300, allow_negative_numbers = true)]
    pub height: i32,
    /// Rows above the plot area
    #[arg(long, default_value_t = 20, allow_negative_numbers = true)]
    pub top: i32,
}

/// `sweep-axis range …`
#[derive(Parser, Debug)]
pub struct RangeArgs {
    /// Sweep file: `freq re im` rows or Touchstone .s1p in Hz/RI (use `-` for stdin)
    #[arg(value_name = "FILE", default_value = "-")]
    pub file: String,

    /// Comparison sweep, ranged only inside the frequency window
    #[arg(short, long)]
    pub reference: Option<String>,

    #[command(flatten)]
    pub axis: AxisArgs,
}

/// `sweep-axis probe …`
#[derive(Parser, Debug)]
pub struct ProbeArgs {
    #[command(flatten)]
    pub sweep: RangeArgs,

    /// Pixel row(s) under the pointer
    #[arg(long, required = true, allow_negative_numbers = true)]
    pub row: Vec<i32>,
}

/// `sweep-axis demo …`
#[derive(Parser, Debug)]
pub struct DemoArgs {
    #[arg(long, default_value_t = 101)]
    pub points: usize,
    #[arg(long, default_value_t = 1e6)]
    pub f_start: f64,
    #[arg(long, default_value_t = 30e6)]
    pub f_stop: f64,
    /// Series resistance (Ω)
    #[arg(long, default_value_t = 25.0)]
    pub r: f64,
    /// Series inductance (nH)
    #[arg(long, default_value_t = 1000.0)]
    pub l_nh: f64,
    /// Series capacitance (pF)
    #[arg(long, default_value_t = 100.0)]
    pub c_pf: f64,
    /// Std-dev of the noise added to Γ
    #[arg(long, default_value_t = 0.002)]
    pub noise: f64,
    #[arg(long, default_value_t = 1)]
    pub seed: u64,
    #[arg(long, default_value_t = 300)]
    pub height: i32,
    #[arg(long, default_value_t = 20)]
    pub top: i32,
    #[arg(long)]
    pub log: bool,
}
