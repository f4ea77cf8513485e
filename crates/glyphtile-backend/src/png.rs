//! Deterministic PNG reader and writer.
//!
//! Uses fixed compression settings so that the same buffer always encodes
//! to the same bytes. Text chunks are written before the image data so a
//! reader sees them as soon as the header has been parsed.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use png::{BitDepth, ColorType, Compression, Decoder, Encoder, FilterType, Transformations};
use thiserror::Error;

use crate::buffer::{GrayscaleBuffer, RgbBuffer};

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("PNG decoding error: {0}")]
    Decoding(#[from] png::DecodingError),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),

    #[error("Unsupported color type: {0:?}")]
    UnsupportedColorType(ColorType),
}

/// PNG export configuration for deterministic output.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Use a fixed value for determinism.
    pub compression: Compression,
    /// Filter type. Use a fixed value for determinism.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

impl PngConfig {
    /// Create config optimized for file size.
    pub fn best_compression() -> Self {
        Self {
            compression: Compression::Best,
            filter: FilterType::Paeth,
        }
    }

    /// Create config optimized for speed.
    pub fn fast() -> Self {
        Self {
            compression: Compression::Fast,
            filter: FilterType::NoFilter,
        }
    }
}

/// A `tEXt` chunk: Latin-1 keyword and text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextChunk {
    pub keyword: String,
    pub text: String,
}

impl TextChunk {
    pub fn new(keyword: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            text: text.into(),
        }
    }
}

/// A decoded image converted to RGB, plus its text chunks.
#[derive(Debug, Clone)]
pub struct DecodedPng {
    pub image: RgbBuffer,
    pub text: Vec<TextChunk>,
}

impl DecodedPng {
    /// Looks up a text chunk by keyword.
    pub fn text(&self, keyword: &str) -> Option<&str> {
        self.text
            .iter()
            .find(|chunk| chunk.keyword == keyword)
            .map(|chunk| chunk.text.as_str())
    }
}

fn check_dimensions(width: u32, height: u32) -> Result<(), PngError> {
    if width == 0 || height == 0 {
        return Err(PngError::InvalidDimensions(format!(
            "PNG images must be non-empty, got {}x{}",
            width, height
        )));
    }
    Ok(())
}

fn write_raw_to_writer<W: Write>(
    data: &[u8],
    width: u32,
    height: u32,
    color_type: ColorType,
    text: &[TextChunk],
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    check_dimensions(width, height)?;

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);
    for chunk in text {
        encoder.add_text_chunk(chunk.keyword.clone(), chunk.text.clone())?;
    }

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(data)?;

    Ok(())
}

/// Write a grayscale buffer to a PNG file.
pub fn write_grayscale(
    buffer: &GrayscaleBuffer,
    path: &Path,
    config: &PngConfig,
) -> Result<(), PngError> {
    let file = File::create(path)?;
    write_grayscale_to_writer(buffer, BufWriter::new(file), config)
}

/// Write a grayscale buffer to any writer.
pub fn write_grayscale_to_writer<W: Write>(
    buffer: &GrayscaleBuffer,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    write_raw_to_writer(
        &buffer.to_bytes(),
        buffer.width,
        buffer.height,
        ColorType::Grayscale,
        &[],
        writer,
        config,
    )
}

/// Write an RGB buffer to a PNG file.
pub fn write_rgb(buffer: &RgbBuffer, path: &Path, config: &PngConfig) -> Result<(), PngError> {
    let file = File::create(path)?;
    write_rgb_to_writer(buffer, &[], BufWriter::new(file), config)
}

/// Write an RGB buffer and text chunks to any writer.
pub fn write_rgb_to_writer<W: Write>(
    buffer: &RgbBuffer,
    text: &[TextChunk],
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    write_raw_to_writer(
        &buffer.to_rgb8(),
        buffer.width,
        buffer.height,
        ColorType::Rgb,
        text,
        writer,
        config,
    )
}

/// Compute the BLAKE3 hash of PNG data.
pub fn hash_png(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Write a grayscale buffer to a Vec<u8> and return the hash.
pub fn write_grayscale_to_vec_with_hash(
    buffer: &GrayscaleBuffer,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_grayscale_to_writer(buffer, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}

/// Write an RGB buffer to a Vec<u8> and return the hash.
pub fn write_rgb_to_vec_with_hash(
    buffer: &RgbBuffer,
    text: &[TextChunk],
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_rgb_to_writer(buffer, text, &mut data, config)?;
    let hash = hash_png(&data);
    Ok((data, hash))
}

/// Read a PNG file, converting any color type to 8-bit RGB.
pub fn read_rgb(path: &Path) -> Result<DecodedPng, PngError> {
    let file = File::open(path)?;
    read_rgb_from_reader(BufReader::new(file))
}

/// Read a PNG from any reader, converting any color type to 8-bit RGB.
///
/// Gray expands to three equal channels; alpha is dropped.
pub fn read_rgb_from_reader<R: Read>(reader: R) -> Result<DecodedPng, PngError> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buf)?;
    let bytes = &buf[..frame.buffer_size()];

    let channels = match frame.color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        other => return Err(PngError::UnsupportedColorType(other)),
    };

    let mut rgb = Vec::with_capacity((frame.width as usize) * (frame.height as usize) * 3);
    for px in bytes.chunks_exact(channels) {
        match channels {
            1 | 2 => rgb.extend_from_slice(&[px[0], px[0], px[0]]),
            _ => rgb.extend_from_slice(&px[..3]),
        }
    }

    let text = reader
        .info()
        .uncompressed_latin1_text
        .iter()
        .map(|chunk| TextChunk::new(chunk.keyword.clone(), chunk.text.clone()))
        .collect();

    Ok(DecodedPng {
        image: RgbBuffer::from_rgb8(frame.width, frame.height, &rgb),
        text,
    })
}
