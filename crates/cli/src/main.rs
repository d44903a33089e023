use std::path::PathBuf;
use std::process;

use clap::Parser;

use dicepips_core::annotation::infrastructure::stroke_renderer::StrokeRenderer;
use dicepips_core::detection::infrastructure::blob_pip_counter::BlobPipCounter;
use dicepips_core::detection::infrastructure::contour_die_locator::{
    ContourDieLocator, DieLocatorParams,
};
use dicepips_core::imaging::infrastructure::image_file_reader::ImageFileReader;
use dicepips_core::imaging::infrastructure::image_file_writer::ImageFileWriter;
use dicepips_core::imaging::infrastructure::system_image_viewer::SystemImageViewer;
use dicepips_core::pipeline::count_pips_use_case::{CountOutcome, CountPipsUseCase};
use dicepips_core::pipeline::pipeline_logger::LogPipelineLogger;
use dicepips_core::shared::constants::MIN_DIE_AREA;

/// Count the pips on dice in an image and write an annotated copy.
#[derive(Parser, Debug)]
#[command(name = "dicepips")]
struct Cli {
    /// Directory containing the input image.
    input_dir: PathBuf,

    /// Directory for the annotated output (created if missing).
    output_dir: PathBuf,

    /// Image file name inside the input directory.
    image: String,

    /// Open the annotated image in the system viewer.
    #[arg(long)]
    show: bool,

    /// Minimum enclosed area in square pixels for a die outline.
    #[arg(long, default_value_t = MIN_DIE_AREA)]
    min_area: f64,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let locator = ContourDieLocator::new(DieLocatorParams {
        min_area: cli.min_area,
        ..DieLocatorParams::default()
    });

    let mut use_case = CountPipsUseCase::new(
        Box::new(ImageFileReader::new()),
        Box::new(ImageFileWriter::new()),
        Box::new(locator),
        Box::new(BlobPipCounter::new()),
        Box::new(StrokeRenderer::default()),
    )
    .with_logger(Box::new(LogPipelineLogger::new()));
    if cli.show {
        use_case = use_case.with_viewer(Box::new(SystemImageViewer::new()));
    }

    match use_case.execute(&cli.input_dir, &cli.output_dir, &cli.image)? {
        CountOutcome::MissingInput { .. } => println!("No image file found"),
        CountOutcome::Counted(report) => {
            log::info!("Output written to {}", report.output_path.display());
        }
    }

    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.min_area.is_finite() || cli.min_area <= 0.0 {
        return Err(format!("Minimum area must be positive, got {}", cli.min_area).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("dicepips").chain(args.iter().copied()))
    }

    #[test]
    fn test_positional_arguments() {
        let cli = parse(&["in", "out", "dice.png"]).unwrap();
        assert_eq!(cli.input_dir, PathBuf::from("in"));
        assert_eq!(cli.output_dir, PathBuf::from("out"));
        assert_eq!(cli.image, "dice.png");
        assert!(!cli.show);
        assert_eq!(cli.min_area, MIN_DIE_AREA);
    }

    #[test]
    fn test_flags() {
        let cli = parse(&["in", "out", "dice.png", "--show", "--min-area", "2500"]).unwrap();
        assert!(cli.show);
        assert_eq!(cli.min_area, 2500.0);
        assert!(validate(&cli).is_ok());
    }

    #[test]
    fn test_missing_image_argument_is_rejected() {
        assert!(parse(&["in", "out"]).is_err());
    }

    #[test]
    fn test_non_positive_min_area_is_rejected() {
        let zero = parse(&["in", "out", "d.png", "--min-area", "0"]).unwrap();
        assert!(validate(&zero).is_err());

        let negative = parse(&["in", "out", "d.png", "--min-area=-5"]).unwrap();
        assert!(validate(&negative).is_err());
    }

    #[test]
    fn test_non_finite_min_area_is_rejected() {
        let cli = parse(&["in", "out", "d.png", "--min-area", "inf"]).unwrap();
        assert!(validate(&cli).is_err());
    }
}
