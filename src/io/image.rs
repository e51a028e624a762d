//! Image decoding for inputs and encoding for preview and export

use crate::collage::collection::ImageAsset;
use crate::collage::config::{ExportFormat, Quality};
use crate::io::configuration::{OUTPUT_PREFIX, SUPPORTED_EXTENSIONS};
use crate::io::error::{CollageError, Result, WithPath};
use crate::render::surface::Surface;
use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::{DynamicImage, ImageReader};
use std::path::{Path, PathBuf};

/// Whether the path has an image extension accepted as input
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

/// Decode an image file into an asset labelled with its file name
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_image_asset(path: &Path) -> Result<ImageAsset> {
    let image = ImageReader::open(path)
        .with_path(path)?
        .with_guessed_format()
        .with_path(path)?
        .decode()
        .with_path(path)?;

    let label = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "decoded image"
    );
    Ok(ImageAsset::from_dynamic(&image).with_label(label))
}

/// Encode the surface in memory
///
/// Used for previews and as the first half of an export, so a failed encode
/// never touches the file system.
///
/// # Errors
///
/// Returns an error if the encoder fails or produces no data
pub fn encode_surface(surface: &Surface, format: ExportFormat, quality: Quality) -> Result<Vec<u8>> {
    let rgba = surface.to_rgba_image();
    let mut bytes = Vec::new();
    let name = format.mime_type();

    let encoded = match format {
        ExportFormat::Png => rgba.write_with_encoder(PngEncoder::new(&mut bytes)),
        ExportFormat::Jpeg => {
            // JPEG has no alpha channel
            let rgb = DynamicImage::ImageRgba8(rgba).to_rgb8();
            rgb.write_with_encoder(JpegEncoder::new_with_quality(&mut bytes, quality.percent()))
        }
        ExportFormat::WebP => rgba.write_with_encoder(WebPEncoder::new_lossless(&mut bytes)),
    };
    encoded.map_err(|source| CollageError::Encode {
        format: name,
        source,
    })?;

    if bytes.is_empty() {
        return Err(CollageError::EmptyEncoding { format: name });
    }

    tracing::debug!(
        format = name,
        quality = quality.value(),
        bytes = bytes.len(),
        "encoded surface"
    );
    Ok(bytes)
}

/// Encode the surface and write it to `output_path`
///
/// Data goes to a sibling temporary file that is renamed into place, so a
/// failure at any step leaves no partial output behind.
///
/// # Errors
///
/// Returns an error if encoding, directory creation, writing or renaming fails
pub fn export_surface(
    surface: &Surface,
    format: ExportFormat,
    quality: Quality,
    output_path: &Path,
) -> Result<()> {
    let bytes = encode_surface(surface, format, quality)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CollageError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let partial = partial_path(output_path);
    if let Err(e) = std::fs::write(&partial, &bytes) {
        discard_partial(&partial);
        return Err(CollageError::FileSystem {
            path: partial,
            operation: "write",
            source: e,
        });
    }
    if let Err(e) = std::fs::rename(&partial, output_path) {
        discard_partial(&partial);
        return Err(CollageError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "rename",
            source: e,
        });
    }

    tracing::info!(path = %output_path.display(), "exported collage");
    Ok(())
}

// Cleanup after a failed export; the export error is what gets reported
fn discard_partial(partial: &Path) {
    if let Err(e) = std::fs::remove_file(partial)
        && e.kind() != std::io::ErrorKind::NotFound
    {
        tracing::debug!(path = %partial.display(), error = %e, "could not remove partial export");
    }
}

fn partial_path(output_path: &Path) -> PathBuf {
    let mut name = output_path.file_name().unwrap_or_default().to_os_string();
    name.push(".partial");
    output_path.with_file_name(name)
}

/// Default export file name, e.g. `kora-ju-collage-1700000000000.jpg`
pub fn default_output_name(format: ExportFormat, timestamp_ms: u128) -> String {
    format!("{OUTPUT_PREFIX}-{timestamp_ms}.{}", format.extension())
}
