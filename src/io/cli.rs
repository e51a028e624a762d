//! Command-line interface for composing image files into a collage

use crate::collage::canvas::AspectRatio;
use crate::collage::collection::Collection;
use crate::collage::config::{Color, ExportFormat, Quality, RenderConfig};
use crate::collage::pipeline::render_collection;
use crate::io::configuration::{BASE_WIDTH, DEFAULT_ASPECT, DEFAULT_BACKGROUND};
use crate::io::error::{CollageError, Result, WithPath};
use crate::io::image::{default_output_name, export_surface, is_supported_image, load_image_asset};
use crate::io::progress::ProgressManager;
use crate::layout::engine::LayoutEngine;
use crate::layout::placement::LayoutStrategy;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Parser, Debug)]
#[command(name = "koraju")]
#[command(author, version, about = "Compose photos into a single collage image")]
/// Command-line arguments for the collage tool
pub struct Cli {
    /// Image files or directories of images, in collage order
    #[arg(value_name = "INPUTS", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Layout algorithm: grid, circle or masonry
    #[arg(short, long, default_value_t = LayoutStrategy::Grid)]
    pub layout: LayoutStrategy,

    /// Canvas aspect ratio as W:H
    #[arg(short, long, default_value = DEFAULT_ASPECT)]
    pub aspect: AspectRatio,

    /// Background color (#rgb, #rrggbb, #rrggbbaa, white, black)
    #[arg(short, long, default_value = DEFAULT_BACKGROUND)]
    pub background: Color,

    /// Export format: png, jpeg or webp
    #[arg(short, long, default_value_t = ExportFormat::Png)]
    pub format: ExportFormat,

    /// Encoder quality between 0.0 and 1.0 (lossy formats only, default 0.9)
    #[arg(long)]
    pub quality: Option<Quality>,

    /// Seed for masonry randomness; fresh entropy when omitted
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Canvas width in pixels
    #[arg(short, long, default_value_t = BASE_WIDTH, value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// Output file; defaults to a timestamped name in the current directory
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log layout and compositing details
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Render settings selected on the command line
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            strategy: self.layout,
            aspect: self.aspect,
            background: self.background,
            format: self.format,
            quality: self.quality.unwrap_or_default(),
        }
    }

    /// Whether an explicit `--quality` has no effect on the chosen format
    pub const fn quality_is_ignored(&self) -> bool {
        self.quality.is_some() && !self.format.is_lossy()
    }

    /// Whether the layout will differ between runs because no seed was given
    pub const fn layout_is_unseeded(&self) -> bool {
        self.seed.is_none() && self.layout.is_randomized()
    }

    /// Layout engine seeded from `--seed`, or from entropy
    pub fn layout_engine(&self) -> LayoutEngine {
        self.seed
            .map_or_else(LayoutEngine::from_entropy, LayoutEngine::with_seed)
    }

    /// Where the collage is written
    pub fn output_path(&self, timestamp_ms: u128) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(default_output_name(self.format, timestamp_ms)))
    }
}

/// Runs a collage job: gather inputs, decode, render, export
pub struct CollageProcessor {
    cli: Cli,
    progress_manager: ProgressManager,
}

impl CollageProcessor {
    /// Create a processor for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = if cli.should_show_progress() {
            ProgressManager::new()
        } else {
            ProgressManager::hidden()
        };

        Self {
            cli,
            progress_manager,
        }
    }

    /// Run the job
    ///
    /// Returns the written path, or `None` when no images were found and
    /// nothing was exported.
    ///
    /// # Errors
    ///
    /// Returns an error if inputs are missing, exceed the collection cap, fail
    /// to decode, or the collage cannot be rendered or written
    pub fn process(&mut self) -> Result<Option<PathBuf>> {
        let result = self.run();
        self.progress_manager.finish();
        result
    }

    fn run(&mut self) -> Result<Option<PathBuf>> {
        let files = self.collect_files()?;
        if files.is_empty() {
            tracing::warn!("no supported images found, nothing to export");
            return Ok(None);
        }

        // Oversized batches are refused before any decoding work
        let mut collection = Collection::new();
        collection.check_room(files.len())?;

        self.progress_manager.start_loading(files.len());
        let mut assets = Vec::with_capacity(files.len());
        for file in &files {
            assets.push(load_image_asset(file)?);
            self.progress_manager.image_loaded(file);
        }
        collection.add_batch(assets)?;

        let config = self.cli.render_config();
        if self.cli.quality_is_ignored() {
            tracing::warn!(format = %config.format, "--quality only affects lossy formats, ignoring it");
        }
        if self.cli.layout_is_unseeded() {
            tracing::debug!(layout = %config.strategy, "no --seed given, layout varies between runs");
        }

        self.progress_manager.begin_stage("Composing collage");
        let mut engine = self.cli.layout_engine();
        let Some(rendered) = render_collection(&collection, &config, self.cli.width, &mut engine)?
        else {
            return Ok(None);
        };

        self.progress_manager.begin_stage("Encoding");
        let output_path = self.cli.output_path(unix_millis());
        export_surface(&rendered.surface, config.format, config.quality, &output_path)?;

        tracing::info!(
            path = %output_path.display(),
            images = collection.len(),
            layout = %config.strategy,
            "collage written"
        );
        Ok(Some(output_path))
    }

    /// Expand the inputs into image files, in order
    ///
    /// Directories contribute their supported images sorted by path; explicitly
    /// named files that are not supported images are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if an input does not exist or a directory cannot be read
    pub fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for input in &self.cli.inputs {
            if input.is_dir() {
                files.extend(Self::collect_directory(input)?);
            } else if input.is_file() {
                if is_supported_image(input) {
                    files.push(input.clone());
                } else {
                    tracing::warn!(path = %input.display(), "skipping unsupported file");
                }
            } else {
                return Err(CollageError::FileSystem {
                    path: input.clone(),
                    operation: "open input",
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                });
            }
        }
        Ok(files)
    }

    fn collect_directory(dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in std::fs::read_dir(dir).with_path(dir)? {
            let path = entry.with_path(dir)?.path();
            if path.is_file() && is_supported_image(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}
