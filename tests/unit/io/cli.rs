//! Tests for command-line parsing and the collage processor

#[cfg(test)]
mod tests {
    use clap::Parser;
    use image::{Rgba, RgbaImage};
    use koraju::CollageError;
    use koraju::collage::canvas::AspectRatio;
    use koraju::collage::config::{Color, ExportFormat};
    use koraju::io::cli::{Cli, CollageProcessor};
    use koraju::io::configuration::{BASE_WIDTH, MAX_IMAGES};
    use koraju::layout::placement::LayoutStrategy;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn write_png(dir: &Path, name: &str, color: [u8; 4]) -> PathBuf {
        let path = dir.join(name);
        RgbaImage::from_pixel(8, 6, Rgba(color))
            .save(&path)
            .expect("write fixture");
        path
    }

    // Tests defaults when only inputs are given
    // Verified by changing the default layout
    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["koraju", "a.png"]).expect("parses");
        let config = cli.render_config();

        assert_eq!(config.strategy, LayoutStrategy::Grid);
        assert_eq!(config.aspect, AspectRatio::SQUARE);
        assert_eq!(config.background, Color::WHITE);
        assert_eq!(config.format, ExportFormat::Png);
        assert_eq!(cli.width, BASE_WIDTH);
        assert!(cli.should_show_progress());
        assert_eq!(
            cli.output_path(5),
            PathBuf::from("kora-ju-collage-5.png")
        );
    }

    // Tests every option is parsed into its typed value
    // Verified by ignoring the background option
    #[test]
    fn test_cli_options() {
        let cli = Cli::try_parse_from([
            "koraju", "-l", "masonry", "-a", "16:9", "-b", "#000", "-f", "jpg", "--quality",
            "0.5", "-s", "7", "-w", "600", "-o", "out.jpg", "-q", "a.png", "b.png",
        ])
        .expect("parses");
        let config = cli.render_config();

        assert_eq!(config.strategy, LayoutStrategy::Masonry);
        assert_eq!(config.aspect, AspectRatio::new(16, 9).expect("valid ratio"));
        assert_eq!(config.background, Color::BLACK);
        assert_eq!(config.format, ExportFormat::Jpeg);
        assert_eq!(config.quality.percent(), 50);
        assert_eq!(cli.seed, Some(7));
        assert_eq!(cli.width, 600);
        assert_eq!(cli.inputs.len(), 2);
        assert!(!cli.should_show_progress());
        assert_eq!(cli.output_path(0), PathBuf::from("out.jpg"));
    }

    // Tests an explicit quality is flagged as ignored only for lossless formats
    // Verified by flagging quality for every format
    #[test]
    fn test_quality_is_ignored() {
        let parse = |args: &[&str]| Cli::try_parse_from(args).expect("parses");

        assert!(parse(&["koraju", "--quality", "0.5", "a.png"]).quality_is_ignored());
        assert!(parse(&["koraju", "-f", "webp", "--quality", "0.5", "a.png"]).quality_is_ignored());
        assert!(!parse(&["koraju", "-f", "jpeg", "--quality", "0.5", "a.png"]).quality_is_ignored());
        assert!(!parse(&["koraju", "a.png"]).quality_is_ignored());

        let default = parse(&["koraju", "-f", "jpeg", "a.png"]);
        assert!(default.quality.is_none());
        assert_eq!(default.render_config().quality.percent(), 90);
    }

    // Tests only an unseeded masonry run is reported as varying
    // Verified by treating grid as randomized
    #[test]
    fn test_layout_is_unseeded() {
        let parse = |args: &[&str]| Cli::try_parse_from(args).expect("parses");

        assert!(parse(&["koraju", "-l", "masonry", "a.png"]).layout_is_unseeded());
        assert!(!parse(&["koraju", "-l", "masonry", "-s", "3", "a.png"]).layout_is_unseeded());
        assert!(!parse(&["koraju", "-l", "grid", "a.png"]).layout_is_unseeded());
    }

    // Tests invalid values and missing inputs are rejected by the parser
    // Verified by accepting a zero width
    #[test]
    fn test_cli_rejects_invalid_arguments() {
        assert!(Cli::try_parse_from(["koraju"]).is_err());
        assert!(Cli::try_parse_from(["koraju", "-l", "spiral", "a.png"]).is_err());
        assert!(Cli::try_parse_from(["koraju", "-a", "0:1", "a.png"]).is_err());
        assert!(Cli::try_parse_from(["koraju", "--quality", "2", "a.png"]).is_err());
        assert!(Cli::try_parse_from(["koraju", "-w", "0", "a.png"]).is_err());
    }

    // Tests directories expand to sorted images and unsupported files are skipped
    // Verified by keeping directory iteration order
    #[test]
    fn test_collect_files() {
        let dir = TempDir::new().expect("temp dir");
        write_png(dir.path(), "b.png", [0, 0, 0, 255]);
        write_png(dir.path(), "a.png", [0, 0, 0, 255]);
        std::fs::write(dir.path().join("notes.txt"), b"hi").expect("write fixture");

        let args = [
            PathBuf::from("koraju"),
            dir.path().to_path_buf(),
            dir.path().join("notes.txt"),
        ];
        let processor = CollageProcessor::new(Cli::try_parse_from(args).expect("parses"));
        let files = processor.collect_files().expect("collects");

        assert_eq!(files, [dir.path().join("a.png"), dir.path().join("b.png")]);
    }

    // Tests a missing input is an error
    // Verified by silently skipping missing inputs
    #[test]
    fn test_missing_input_is_error() {
        let dir = TempDir::new().expect("temp dir");
        let args = [PathBuf::from("koraju"), dir.path().join("nope.png")];
        let processor = CollageProcessor::new(Cli::try_parse_from(args).expect("parses"));
        assert!(matches!(
            processor.collect_files(),
            Err(CollageError::FileSystem { .. })
        ));
    }

    // Tests a full run writes a collage of the requested size
    // Verified by exporting before rendering
    #[test]
    fn test_process_writes_collage() {
        let dir = TempDir::new().expect("temp dir");
        let red = write_png(dir.path(), "red.png", [255, 0, 0, 255]);
        let blue = write_png(dir.path(), "blue.png", [0, 0, 255, 255]);
        let output = dir.path().join("out").join("collage.png");

        let args = [
            PathBuf::from("koraju"),
            PathBuf::from("-q"),
            PathBuf::from("-w"),
            PathBuf::from("200"),
            PathBuf::from("-a"),
            PathBuf::from("2:1"),
            PathBuf::from("-o"),
            output.clone(),
            red,
            blue,
        ];
        let mut processor = CollageProcessor::new(Cli::try_parse_from(args).expect("parses"));
        let written = processor.process().expect("runs");

        assert_eq!(written.as_deref(), Some(output.as_path()));
        let collage = image::open(&output).expect("decodes").to_rgba8();
        assert_eq!(collage.dimensions(), (200, 100));
        assert_eq!(collage.get_pixel(50, 50).0, [255, 0, 0, 255]);
        assert_eq!(collage.get_pixel(150, 50).0, [0, 0, 255, 255]);
    }

    // Tests an oversized input set fails before anything is written
    // Verified by truncating the inputs to the cap
    #[test]
    fn test_process_rejects_too_many_images() {
        let dir = TempDir::new().expect("temp dir");
        for i in 0..=MAX_IMAGES {
            write_png(dir.path(), &format!("{i:02}.png"), [0, 0, 0, 255]);
        }
        let output = dir.path().join("collage.png");
        let args = [
            PathBuf::from("koraju"),
            PathBuf::from("-q"),
            PathBuf::from("-o"),
            output.clone(),
            dir.path().to_path_buf(),
        ];
        let mut processor = CollageProcessor::new(Cli::try_parse_from(args).expect("parses"));

        assert!(matches!(
            processor.process(),
            Err(CollageError::CapacityExceeded { .. })
        ));
        assert!(!output.exists());
    }

    // Tests an input set with no images exports nothing
    // Verified by rendering an empty collage
    #[test]
    fn test_process_without_images() {
        let dir = TempDir::new().expect("temp dir");
        std::fs::write(dir.path().join("readme.txt"), b"x").expect("write fixture");
        let args = [
            PathBuf::from("koraju"),
            PathBuf::from("-q"),
            dir.path().to_path_buf(),
        ];
        let mut processor = CollageProcessor::new(Cli::try_parse_from(args).expect("parses"));
        assert_eq!(processor.process().expect("runs"), None);
    }
}
