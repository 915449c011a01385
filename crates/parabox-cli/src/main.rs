use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use parabox_base::Units;
use parabox_io::{DEFAULT_TESSELLATION_TOLERANCE, export_solid, extents};
use parabox_shapeops::{DEFAULT_SHAPEOPS_TOLERANCE, TestBoxParams, test_box};
use parabox_topology::SolidBuilder;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "parabox")]
#[command(about = "Parametric box generator CLI")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    Generate {
        #[command(subcommand)]
        command: GenerateCommand,
    },
}

#[derive(Subcommand)]
enum GenerateCommand {
    /// Plain box, exported in the format implied by the output extension.
    Box(BoxArgs),
    /// Filleted box with a centered through-hole, plus a dimension report.
    TestBox(TestBoxArgs),
}

#[derive(Args)]
struct BoxArgs {
    /// Dimensions as three comma-separated numbers, e.g. 30,20,10.
    #[arg(long)]
    size: String,
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args)]
struct TestBoxArgs {
    #[arg(long, default_value_t = 30.0)]
    width: f64,
    #[arg(long, default_value_t = 20.0)]
    depth: f64,
    #[arg(long, default_value_t = 10.0)]
    height: f64,
    #[arg(long, default_value_t = 2.0)]
    fillet: f64,
    #[arg(long, default_value_t = 8.0)]
    hole: f64,
    /// JSON parameter file; mutually exclusive with the dimension flags.
    #[arg(long, conflicts_with_all = ["width", "depth", "height", "fillet", "hole"])]
    params: Option<PathBuf>,
    #[arg(long, default_value = "/work/output/test-box.stl")]
    out: PathBuf,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            command: GenerateCommand::Box(args),
        } => generate_box(args),
        Command::Generate {
            command: GenerateCommand::TestBox(args),
        } => generate_test_box(args),
    }
}

fn generate_box(args: BoxArgs) -> Result<()> {
    let (width, depth, height) = parse_size(&args.size)?;
    let solid =
        SolidBuilder::box_solid(width, depth, height).context("failed to build box solid")?;

    export_solid(&solid, &args.out, DEFAULT_TESSELLATION_TOLERANCE).context("export failed")?;
    info!(path = %args.out.display(), "export complete");
    Ok(())
}

fn generate_test_box(args: TestBoxArgs) -> Result<()> {
    let params = match &args.params {
        Some(path) => load_params(path)?,
        None => TestBoxParams {
            width: args.width,
            depth: args.depth,
            height: args.height,
            fillet_radius: args.fillet,
            hole_diameter: args.hole,
        },
    };

    let solid = test_box(&params, DEFAULT_SHAPEOPS_TOLERANCE)
        .context("failed to build test box")?;
    let (x, y, z) = extents(&solid, DEFAULT_TESSELLATION_TOLERANCE);

    export_solid(&solid, &args.out, DEFAULT_TESSELLATION_TOLERANCE)
        .context("mesh export failed")?;
    info!(path = %args.out.display(), "export complete");

    print_report(&args.out, x, y, z, &params);
    Ok(())
}

fn print_report(path: &Path, x: f64, y: f64, z: f64, params: &TestBoxParams) {
    let unit = Units::default().length.suffix();
    println!("Exported: {}", path.display());
    println!();
    println!("=== Dimensions ===");
    println!("  X: {x:.2} {unit}");
    println!("  Y: {y:.2} {unit}");
    println!("  Z: {z:.2} {unit}");
    println!("  Bounding Box: {x:.2} x {y:.2} x {z:.2} {unit}");
    println!();
    println!("=== Parameters ===");
    println!("  Fillet: {} {unit}", params.fillet_radius);
    println!("  Hole: {} {unit}", params.hole_diameter);
}

fn load_params(path: &Path) -> Result<TestBoxParams> {
    let file =
        File::open(path).with_context(|| format!("open parameter file {}", path.display()))?;
    serde_json::from_reader(file)
        .with_context(|| format!("parse parameter file {}", path.display()))
}

fn parse_size(text: &str) -> Result<(f64, f64, f64)> {
    let parts: Vec<&str> = text.split(',').collect();
    if parts.len() != 3 {
        bail!("--size expects three comma-separated numbers, e.g. 30,20,10");
    }

    let width: f64 = parts[0].trim().parse().context("invalid width")?;
    let depth: f64 = parts[1].trim().parse().context("invalid depth")?;
    let height: f64 = parts[2].trim().parse().context("invalid height")?;
    Ok((width, depth, height))
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_size_accepts_three_numbers() {
        assert_eq!(parse_size("30,20,10").unwrap(), (30.0, 20.0, 10.0));
        assert!(parse_size("30,20").is_err());
        assert!(parse_size("a,b,c").is_err());
    }
}
