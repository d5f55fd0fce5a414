use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "framep", about = "Frame-fitted photo print PDFs", version)]
struct Cli {
    /// Input image file(s) - one page per image, in order
    #[arg(short, long, required = true, num_args = 1..)]
    input: Vec<PathBuf>,

    /// Output PDF file
    #[arg(short, long)]
    output: PathBuf,

    /// Frame width in inches
    #[arg(long, default_value = "8.0")]
    frame_width: f32,

    /// Frame height in inches
    #[arg(long, default_value = "10.0")]
    frame_height: f32,

    /// Print resolution in dots per inch
    #[arg(long, default_value = "300")]
    dpi: u32,

    /// Rotate each image 90 degrees clockwise before fitting
    #[arg(long)]
    rotate: bool,

    /// How images are mapped onto the frame
    #[arg(long, default_value = "stretch", value_enum)]
    mode: ModeArg,

    /// Output paper size
    #[arg(long, default_value = "a4", value_enum)]
    paper: PaperArg,

    /// Output paper orientation
    #[arg(long, default_value = "portrait", value_enum)]
    orientation: OrientationArg,

    /// Page margin in mm (uniform on all sides)
    #[arg(long, default_value = "5.0")]
    margin: f32,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Fill the frame and trim the overflow
    Crop,
    /// Scale to fit inside the frame, may letterbox
    Fit,
    /// Force the exact frame size, ignoring aspect ratio
    Stretch,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    A3,
    A4,
    A5,
    Letter,
    Legal,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

impl From<ModeArg> for frame_print::FitMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Crop => Self::Crop,
            ModeArg::Fit => Self::Fit,
            ModeArg::Stretch => Self::Stretch,
        }
    }
}

impl From<PaperArg> for frame_print::PaperSize {
    fn from(arg: PaperArg) -> Self {
        match arg {
            PaperArg::A3 => Self::A3,
            PaperArg::A4 => Self::A4,
            PaperArg::A5 => Self::A5,
            PaperArg::Letter => Self::Letter,
            PaperArg::Legal => Self::Legal,
        }
    }
}

impl From<OrientationArg> for frame_print::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let options = frame_print::FramePrintOptions {
        frame_width_in: cli.frame_width,
        frame_height_in: cli.frame_height,
        dpi: cli.dpi,
        fit_mode: cli.mode.into(),
        rotate: cli.rotate,
        paper_size: cli.paper.into(),
        orientation: cli.orientation.into(),
        margins: frame_print::PageMargins::uniform(cli.margin),
    };
    options.validate()?;

    let inputs = frame_print::load_images(&cli.input)
        .await
        .context("failed to read input images")?;

    let assembly = frame_print::assemble(inputs, &options).await?;

    let report = &assembly.report;
    println!("Assembly:");
    println!("  Input images: {}", report.images_in);
    println!("  Pages: {}", report.pages_out);
    for skip in &report.skipped {
        println!("  Skipped {}: {}", skip.name, skip.reason);
    }

    if report.pages_out == 0 && report.images_in > 0 {
        eprintln!("warning: no input image could be processed, writing an empty document");
    }

    let bytes = assembly.finalize()?;
    frame_print::save_pdf(bytes, &cli.output).await?;
    println!(
        "Generated {} pages → {}",
        assembly.page_count(),
        cli.output.display()
    );

    Ok(())
}
