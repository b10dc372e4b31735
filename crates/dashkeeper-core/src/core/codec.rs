// crates/dashkeeper-core/src/core/codec.rs
// ============================================================================
// Module: Dashkeeper Content Codec
// Description: Gzip compression and decompression for dashboard content.
// Purpose: Provide the container format used for cached and inline compressed content.
// Dependencies: flate2, thiserror
// ============================================================================

//! ## Overview
//! Cached URL content and inline compressed sources are stored as gzip
//! streams. This module wraps compression in both directions with explicit
//! errors; validity of a compressed payload is established by decompressing
//! it, there is no separate integrity check.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Read;

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::read::GzEncoder;
use thiserror::Error;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors produced by the gzip codec.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Compressing content into a gzip stream failed.
    #[error("gzip compression failed: {0}")]
    Compress(String),
    /// The input is truncated or is not a well-formed gzip stream.
    #[error("gzip decompression failed: {0}")]
    Decompress(String),
}

// ============================================================================
// SECTION: Codec Operations
// ============================================================================

/// Compresses content bytes into a gzip stream at the default level.
///
/// # Errors
///
/// Returns [`CodecError::Compress`] when the underlying encoder fails.
pub fn gzip(content: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut encoder = GzEncoder::new(content, Compression::default());
    let mut compressed = Vec::new();
    encoder
        .read_to_end(&mut compressed)
        .map_err(|err| CodecError::Compress(err.to_string()))?;
    Ok(compressed)
}

/// Decompresses a gzip stream back into the original content bytes.
///
/// # Errors
///
/// Returns [`CodecError::Decompress`] when the input is truncated or is not
/// a well-formed gzip stream.
pub fn gunzip(compressed: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut decoder = GzDecoder::new(compressed);
    let mut content = Vec::new();
    decoder
        .read_to_end(&mut content)
        .map_err(|err| CodecError::Decompress(err.to_string()))?;
    Ok(content)
}
