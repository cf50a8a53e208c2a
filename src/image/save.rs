//! Image encoding and saving
//!
//! PNG, JPEG, BMP and TIFF go through the image crate; PDF export embeds
//! a JPEG-encoded copy of the pixels as a DCTDecode image XObject in a
//! one-page lopdf document. Saving never mutates the source pixels.

use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

/// Supported output image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
    Pdf,
    Bmp,
    Tiff,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 5] = [
        OutputFormat::Png,
        OutputFormat::Jpeg,
        OutputFormat::Pdf,
        OutputFormat::Bmp,
        OutputFormat::Tiff,
    ];

    /// Lowercased file extension for this format
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Pdf => "pdf",
            OutputFormat::Bmp => "bmp",
            OutputFormat::Tiff => "tiff",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Png => "PNG",
            OutputFormat::Jpeg => "JPEG",
            OutputFormat::Pdf => "PDF",
            OutputFormat::Bmp => "BMP",
            OutputFormat::Tiff => "TIFF",
        })
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|format| format.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unsupported output format: {s}"))
    }
}

/// Image save failures; reported to the caller, never fatal to generation
#[derive(Debug, Error)]
#[error("Failed to save image: {0}")]
pub struct SaveError(String);

impl SaveError {
    fn from_display(e: impl fmt::Display) -> Self {
        Self(e.to_string())
    }
}

/// Write the image to `<stem>.<extension>` in the requested format
pub(crate) fn save_as(
    image: &DynamicImage,
    stem: &str,
    format: OutputFormat,
) -> Result<PathBuf, SaveError> {
    let path = PathBuf::from(format!("{stem}.{}", format.extension()));

    match format {
        OutputFormat::Pdf => save_pdf(image, &path)?,
        // JPEG has no alpha channel; encode from an RGB copy
        OutputFormat::Jpeg => image
            .to_rgb8()
            .save_with_format(&path, image::ImageFormat::Jpeg)
            .map_err(SaveError::from_display)?,
        OutputFormat::Png => image
            .save_with_format(&path, image::ImageFormat::Png)
            .map_err(SaveError::from_display)?,
        OutputFormat::Bmp => image
            .save_with_format(&path, image::ImageFormat::Bmp)
            .map_err(SaveError::from_display)?,
        OutputFormat::Tiff => image
            .save_with_format(&path, image::ImageFormat::Tiff)
            .map_err(SaveError::from_display)?,
    }

    Ok(path)
}

/// Embed the pixels as a full-page image in a single-page PDF
fn save_pdf(image: &DynamicImage, path: &Path) -> Result<(), SaveError> {
    // PDF image XObjects carry no alpha; convert to an RGB copy first
    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();

    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, 95)
        .encode_image(&rgb)
        .map_err(SaveError::from_display)?;

    let mut document = Document::with_version("1.5");
    let pages_id = document.new_object_id();

    let image_id = document.add_object(Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => width as i64,
            "Height" => height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
            "Filter" => "DCTDecode",
        },
        jpeg,
    ));

    let content = Content {
        operations: vec![
            Operation::new("q", vec![]),
            Operation::new(
                "cm",
                vec![
                    (width as i64).into(),
                    0.into(),
                    0.into(),
                    (height as i64).into(),
                    0.into(),
                    0.into(),
                ],
            ),
            Operation::new("Do", vec![Object::Name(b"Im0".to_vec())]),
            Operation::new("Q", vec![]),
        ],
    };
    let content_id = document.add_object(Stream::new(
        dictionary! {},
        content.encode().map_err(SaveError::from_display)?,
    ));

    let page_id = document.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
        "MediaBox" => vec![0.into(), 0.into(), (width as i64).into(), (height as i64).into()],
        "Resources" => dictionary! {
            "XObject" => dictionary! { "Im0" => image_id },
        },
    });

    document.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );

    let catalog_id = document.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    document.trailer.set("Root", catalog_id);

    document.save(path).map_err(SaveError::from_display)?;
    Ok(())
}
