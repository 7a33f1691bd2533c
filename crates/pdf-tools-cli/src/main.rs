mod plan;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use pdf_async_runtime::{
    JobCommand, JobRunner, ProgressEvent, ProgressReceiver, progress_channel,
};
use pdf_stamp::{ImageWatermark, PageNumberOptions, Rgb, TextWatermark, WatermarkSpec, constants};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdft", about = "PDF tools CLI", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Concatenate PDFs in the order given
    Merge {
        /// Input PDF files
        #[arg(short, long, required = true, num_args = 1..)]
        input: Vec<PathBuf>,

        /// Output PDF file (defaults to a name built from the inputs)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write one PDF per comma-separated range, e.g. "1-3,5,8-"
    Extract {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        ranges: String,

        /// Output directory
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Write every page to its own PDF
    Split {
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Stamp a text or image watermark
    Watermark {
        /// Input PDF (or folder with --folder)
        #[arg(short, long)]
        input: PathBuf,

        /// Output PDF (or folder with --folder)
        #[arg(short, long)]
        output: PathBuf,

        /// Treat input and output as folders and watermark every PDF inside
        #[arg(long)]
        folder: bool,

        /// Watermark text
        #[arg(long, default_value = constants::DEFAULT_WATERMARK_TEXT, conflicts_with = "image")]
        text: String,

        /// Watermark image (png, jpeg, webp) instead of text
        #[arg(long)]
        image: Option<PathBuf>,

        /// Text angle in degrees
        #[arg(long, default_value_t = constants::DEFAULT_WATERMARK_ANGLE)]
        angle: f32,

        #[arg(long, default_value_t = constants::DEFAULT_WATERMARK_OPACITY)]
        opacity: f32,

        #[arg(long, default_value_t = constants::DEFAULT_WATERMARK_FONT_SIZE)]
        font_size: f32,

        /// Text color as #rrggbb
        #[arg(long, default_value = "#000000", value_parser = parse_color)]
        color: Rgb,

        /// Image scale, points per pixel
        #[arg(long, default_value_t = constants::DEFAULT_IMAGE_SCALE)]
        scale: f32,

        /// Pages to stamp, e.g. "1-3,5" (default: all)
        #[arg(long, default_value = "")]
        pages: String,
    },

    /// Number pages in the bottom-right corner
    Number {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        output: PathBuf,

        /// Number printed on the first page
        #[arg(long, default_value = "1")]
        start: usize,
    },

    /// Add user and/or owner passwords
    Protect {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        output: PathBuf,

        /// Password needed to open the document
        #[arg(long, default_value = "")]
        user: String,

        /// Password needed to change permissions (defaults to the user password)
        #[arg(long, default_value = "")]
        owner: String,
    },

    /// Write a decrypted copy of a protected PDF
    Unlock {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long)]
        output: PathBuf,

        #[arg(long)]
        password: String,
    },

    /// Build a PDF from pages of other PDFs: FILE[:RANGES][@DEGREES]...
    Organize {
        #[arg(short, long)]
        output: PathBuf,

        /// Page plan items, written in order
        #[arg(required = true, num_args = 1..)]
        pages: Vec<String>,

        /// Extra rotation applied to every page
        #[arg(long, default_value = "0", value_enum)]
        rotate: RotateArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum RotateArg {
    #[value(name = "0")]
    None,
    #[value(name = "90")]
    Quarter,
    #[value(name = "180")]
    Half,
    #[value(name = "270")]
    ThreeQuarters,
}

impl From<RotateArg> for i32 {
    fn from(arg: RotateArg) -> Self {
        match arg {
            RotateArg::None => 0,
            RotateArg::Quarter => 90,
            RotateArg::Half => 180,
            RotateArg::ThreeQuarters => 270,
        }
    }
}

fn parse_color(value: &str) -> std::result::Result<Rgb, String> {
    Rgb::from_hex(value).ok_or_else(|| format!("'{value}' is not a #rrggbb color"))
}

fn build_command(command: Commands) -> Result<JobCommand> {
    Ok(match command {
        Commands::Merge { input, output } => {
            let output = output
                .unwrap_or_else(|| PathBuf::from(pdf_organize::default_merged_filename(&input)));
            JobCommand::Merge {
                inputs: input,
                output,
            }
        }
        Commands::Extract {
            input,
            ranges,
            output,
        } => JobCommand::Extract {
            input,
            ranges,
            output_dir: output,
        },
        Commands::Split { input, output } => JobCommand::SplitAll {
            input,
            output_dir: output,
        },
        Commands::Watermark {
            input,
            output,
            folder,
            text,
            image,
            angle,
            opacity,
            font_size,
            color,
            scale,
            pages,
        } => {
            let spec = match image {
                Some(path) => WatermarkSpec::Image(ImageWatermark {
                    path,
                    scale,
                    opacity,
                }),
                None => WatermarkSpec::Text(TextWatermark {
                    text,
                    angle_degrees: angle,
                    opacity,
                    font_size,
                    color,
                }),
            };
            if folder {
                JobCommand::WatermarkFolder {
                    input_dir: input,
                    output_dir: output,
                    spec,
                    ranges: pages,
                }
            } else {
                JobCommand::Watermark {
                    input,
                    output,
                    spec,
                    ranges: pages,
                }
            }
        }
        Commands::Number {
            input,
            output,
            start,
        } => JobCommand::NumberPages {
            input,
            output,
            options: PageNumberOptions::starting_at(start),
        },
        Commands::Protect {
            input,
            output,
            user,
            owner,
        } => JobCommand::Protect {
            input,
            output,
            user_password: user,
            owner_password: owner,
        },
        Commands::Unlock {
            input,
            output,
            password,
        } => JobCommand::Unlock {
            input,
            output,
            password,
        },
        Commands::Organize {
            output,
            pages,
            rotate,
        } => {
            let items = pages
                .iter()
                .map(|item| plan::parse_item(item))
                .collect::<Result<Vec<_>>>()?;
            let mut collection = plan::build_collection(&items)?;
            for id in collection.ids() {
                collection.rotate(id, rotate.into());
            }
            JobCommand::OrganizeSave {
                pages: collection.snapshot(),
                output,
            }
        }
    })
}

/// Print events until the job ends.
async fn follow(events: &mut ProgressReceiver) -> Result<String> {
    while let Some(event) = events.recv().await {
        match event {
            ProgressEvent::Progress(percent) => log::debug!("{percent}%"),
            ProgressEvent::Status(message) => println!("{message}"),
            ProgressEvent::Done(message) => return Ok(message),
            ProgressEvent::Error(message) => bail!(message),
            ProgressEvent::PagesLoaded { .. } | ProgressEvent::PageRendered { .. } => {}
        }
    }
    bail!("Job ended without reporting a result")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    let command = build_command(cli.command)?;
    let (tx, mut events) = progress_channel();
    let runner = JobRunner::new(tokio::runtime::Handle::current(), tx);

    runner
        .submit(command)
        .context("Could not start the job")?;
    let message = follow(&mut events).await?;
    println!("{message}");

    Ok(())
}
