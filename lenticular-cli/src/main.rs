use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "lenticular", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interlace two or more images into a lenticular composite PNG.
    Generate(GenerateArgs),
    /// Report the composite geometry for a set of images without rendering.
    Size(SizeArgs),
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Input images in cycle order (at least 2).
    #[arg(required = true, num_args = 2..)]
    inputs: Vec<PathBuf>,

    /// Lenticule density of the target lens sheet (lines per inch).
    #[arg(long, default_value_t = 75.0)]
    lpi: f64,

    /// Print resolution (dots per inch).
    #[arg(long, default_value_t = 300.0)]
    dpi: f64,

    /// Strip axis.
    #[arg(long, value_enum, default_value = "vertical")]
    orientation: OrientationArg,

    /// Settings JSON file; overrides --lpi/--dpi/--orientation when given.
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long, default_value = lenticular::SUGGESTED_FILENAME)]
    out: PathBuf,

    /// Fill output rows in parallel.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct SizeArgs {
    /// Input images in cycle order (at least 2).
    #[arg(required = true, num_args = 2..)]
    inputs: Vec<PathBuf>,

    /// Lenticule density of the target lens sheet (lines per inch).
    #[arg(long, default_value_t = 75.0)]
    lpi: f64,

    /// Print resolution (dots per inch).
    #[arg(long, default_value_t = 300.0)]
    dpi: f64,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OrientationArg {
    Vertical,
    Horizontal,
}

impl From<OrientationArg> for lenticular::Orientation {
    fn from(value: OrientationArg) -> Self {
        match value {
            OrientationArg::Vertical => Self::Vertical,
            OrientationArg::Horizontal => Self::Horizontal,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Size(args) => cmd_size(args),
    }
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let settings = match &args.settings {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("read settings '{}'", path.display()))?;
            lenticular::Settings::from_json_str(&text)?
        }
        None => lenticular::Settings {
            lines_per_unit: args.lpi,
            base_resolution: args.dpi,
            orientation: args.orientation.into(),
        },
    };

    let sources = decode_inputs(&args.inputs);
    let threading = lenticular::InterlaceThreading {
        parallel: args.parallel,
        threads: args.threads,
    };
    let raster = lenticular::interlace_with_threading(&sources, &settings, &threading)?;
    let png = lenticular::encode_png(&raster)?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_size(args: SizeArgs) -> anyhow::Result<()> {
    let sources = decode_inputs(&args.inputs);
    let settings = lenticular::Settings {
        lines_per_unit: args.lpi,
        base_resolution: args.dpi,
        ..lenticular::Settings::default()
    };

    let canvas = lenticular::compute_canvas_size(&sources)?;
    let report = serde_json::json!({
        "width": canvas.width,
        "height": canvas.height,
        "strip_width_px": settings.strip_width_px()?,
    });
    println!("{report}");
    Ok(())
}

// Decode everything up front so the engine call is a single synchronous
// pass over in-memory rasters. A file that cannot be read or decoded is
// skipped with a warning; the engine enforces the two-image floor on the
// survivors.
fn decode_inputs(paths: &[PathBuf]) -> Vec<lenticular::SourceImage> {
    let mut sources = Vec::with_capacity(paths.len());
    for path in paths {
        let loaded = std::fs::read(path)
            .map_err(anyhow::Error::from)
            .and_then(|bytes| lenticular::decode_image(&bytes).map_err(anyhow::Error::from));
        match loaded {
            Ok(img) => sources.push(img),
            Err(err) => eprintln!("skipping '{}': {err:#}", path.display()),
        }
    }
    sources
}
