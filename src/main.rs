use anyhow::{bail, Context, Result};
use clap::Parser;
use image_media_type::detect_file;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "image-media-type")]
#[command(about = "Detect an image file's actual format by reading its magic bytes")]
struct CliArgs {
    /// Path to the image file to inspect.
    #[arg(value_name = "IMAGE_FILE")]
    image_file: PathBuf,
}

fn run(path: &Path) -> Result<&'static str> {
    let format =
        detect_file(path).with_context(|| format!("failed to read {}", path.display()))?;

    match format {
        Some(format) => Ok(format.media_type()),
        None => bail!("could not detect image type for {}", path.display()),
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "image_media_type=error".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Usage errors exit 1; --help and --version keep their conventional 0.
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    match run(&args.image_file) {
        Ok(media_type) => println!("{}", media_type),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            std::process::exit(1);
        }
    }
}
