//! cardcenter CLI — centering analysis and grading for card photos.

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};

use cardcenter::{AnalyzeConfig, Analyzer, CENTERING_RULES, FLOOR_GRADE};

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "cardcenter")]
#[command(about = "Estimate PSA-style centering grades from front/back card photos")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a front/back image pair.
    Analyze(CliAnalyzeArgs),

    /// Grade a pair of limiting centering percentages.
    Grade {
        /// Front limiting percent (e.g. 45 for 55/45).
        #[arg(long)]
        front: f64,
        /// Back limiting percent.
        #[arg(long)]
        back: f64,
    },

    /// Print the grading table.
    Rules,
}

#[derive(Debug, Clone, Args)]
struct CliAnalyzeArgs {
    /// Path to the front image.
    #[arg(long)]
    front: PathBuf,

    /// Path to the back image.
    #[arg(long)]
    back: PathBuf,

    /// Path to write the result (JSON). Printed to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// JSON analysis config; flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Analyze the two faces one after the other.
    #[arg(long)]
    sequential: bool,

    /// Gaussian blur sigma before edge detection (0 disables).
    #[arg(long)]
    blur_sigma: Option<f32>,

    /// Canny low threshold.
    #[arg(long)]
    canny_low: Option<f32>,

    /// Canny high threshold.
    #[arg(long)]
    canny_high: Option<f32>,
}

impl CliAnalyzeArgs {
    fn to_config(&self) -> CliResult<AnalyzeConfig> {
        let mut cfg = match &self.config {
            Some(path) => AnalyzeConfig::from_json_file(path)?,
            None => AnalyzeConfig::default(),
        };
        if self.sequential {
            cfg.parallel_sides = false;
        }
        let edges = &mut cfg.detector.edges;
        if let Some(v) = self.blur_sigma {
            edges.blur_sigma = v;
        }
        if let Some(v) = self.canny_low {
            edges.canny_low = v;
        }
        if let Some(v) = self.canny_high {
            edges.canny_high = v;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze(args) => run_analyze(&args),
        Commands::Grade { front, back } => {
            println!("{}", cardcenter::map_grade(front, back));
            Ok(())
        }
        Commands::Rules => {
            print_rules();
            Ok(())
        }
    }
}

fn read_image_bytes(path: &Path) -> CliResult<Vec<u8>> {
    std::fs::read(path).map_err(|e| -> CliError {
        format!("Failed to read image {}: {}", path.display(), e).into()
    })
}

fn run_analyze(args: &CliAnalyzeArgs) -> CliResult<()> {
    let config = args.to_config()?;

    tracing::info!("Loading front image: {}", args.front.display());
    let front = read_image_bytes(&args.front)?;
    tracing::info!("Loading back image: {}", args.back.display());
    let back = read_image_bytes(&args.back)?;

    let analyzer = Analyzer::with_config(config);
    let result = analyzer.analyze_bytes(&front, &back)?;
    tracing::info!(
        "Centering grade {} (front {}, back {})",
        result.grade(),
        result.front_ratio_label(),
        result.back_ratio_label()
    );

    let json = serde_json::to_string_pretty(&result)?;
    match &args.out {
        Some(out_path) => {
            std::fs::write(out_path, &json)?;
            tracing::info!("Results written to {}", out_path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn print_rules() {
    println!("grade  front>=  back>=");
    for rule in &CENTERING_RULES {
        let back = rule
            .min_back
            .map_or_else(|| "-".to_string(), |v| format!("{v:.0}"));
        println!("{:>5}  {:>6.0}  {:>6}", rule.grade, rule.min_front, back);
    }
    println!("{:>5}  otherwise", FLOOR_GRADE);
}
