//! mzip-compress: Huffman prefix-code file compressor.
//!
//! Builds a prefix-free binary code over the byte alphabet of a single input,
//! using per-byte frequency as the cost signal, and emits a self-describing
//! archive: the original file name (extension upper-cased), a parenthesized
//! structural rendering of the code tree, the trailing-padding bit count, and
//! the packed payload. A counterpart decoder can rebuild the original bytes
//! exactly from that record.
//!
//! The pipeline: frequency census -> ranked queue -> code tree -> code
//! assignment -> bit packing -> archive record. The code assignment is
//! complete before the first byte is encoded.

pub mod archive;
pub mod bitpack;
pub mod config;
pub mod error;
pub mod frequency;
pub mod queue;
pub mod tree;

use crate::archive::{archive_name, uppercase_extension, Archive};
use crate::config::EncoderConfig;
use crate::error::EncodeError;
use crate::frequency::ByteFrequencies;
use crate::tree::CodeTree;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Statistics for one completed encoding run.
#[derive(Debug, Clone, serde::Serialize)]
pub struct EncodeSummary {
    pub source: String,
    pub output: PathBuf,
    pub original_size: usize,
    /// Full serialized archive length, header lines included.
    pub compressed_size: usize,
    pub ratio: f64,
    pub distinct_symbols: usize,
    pub extra_bits: u8,
    /// Shannon entropy of the input in bits per byte.
    pub entropy_bits: f64,
}

/// The compression engine
pub struct Encoder {
    config: EncoderConfig,
}

impl Encoder {
    /// Create a new encoder with the given configuration
    pub fn new(config: EncoderConfig) -> Self {
        Self { config }
    }

    /// Create an encoder with default configuration
    pub fn default() -> Self {
        Self::new(EncoderConfig::default())
    }

    /// Encode `data` in memory and assemble the archive record.
    ///
    /// `source_name` is the original file name recorded in the header. An
    /// empty input produces a well-formed archive with an empty tree line
    /// and an empty payload.
    pub fn encode(&self, data: &[u8], source_name: &str) -> Result<Archive, EncodeError> {
        if data.len() > self.config.max_input_size {
            return Err(EncodeError::InputTooLarge {
                size: data.len(),
                limit: self.config.max_input_size,
            });
        }

        let header_name = uppercase_extension(source_name);
        let freq = ByteFrequencies::census(data);

        let Some(tree) = CodeTree::from_frequencies(&freq) else {
            debug!(source = source_name, "empty alphabet, emitting bare archive");
            return Ok(Archive {
                source_name: header_name,
                tree: String::new(),
                extra_bits: 0,
                payload: Vec::new(),
            });
        };

        let codes = tree.code_assignment();
        debug!(
            distinct = codes.len(),
            total = tree.root_weight(),
            "code tree built"
        );

        let payload = bitpack::pack(data, &codes)?;
        Ok(Archive {
            source_name: header_name,
            tree: tree.render(),
            extra_bits: payload.extra_bits,
            payload: payload.bytes,
        })
    }

    /// Encode the file at `source`, writing the archive next to it with the
    /// configured marker extension in place of the original one.
    pub fn encode_file(&self, source: &Path) -> Result<EncodeSummary, EncodeError> {
        self.encode_file_to(source, None)
    }

    /// Encode the file at `source`, writing the archive to `destination`
    /// when given, otherwise to the derived archive name beside the source.
    pub fn encode_file_to(
        &self,
        source: &Path,
        destination: Option<&Path>,
    ) -> Result<EncodeSummary, EncodeError> {
        let source_name = source
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| EncodeError::InvalidSourceName(source.display().to_string()))?
            .to_string();

        let data = std::fs::read(source)?;
        let freq = ByteFrequencies::census(&data);
        let archive = self.encode(&data, &source_name)?;

        let out_path = match destination {
            Some(path) => path.to_path_buf(),
            None => source.with_file_name(archive_name(&source_name, &self.config.marker_extension)),
        };
        archive.write_to_file(&out_path, self.config.atomic_write)?;

        let compressed_size = archive.serialized_len();
        let ratio = if data.is_empty() {
            1.0
        } else {
            compressed_size as f64 / data.len() as f64
        };
        info!(
            source = %source.display(),
            output = %out_path.display(),
            original = data.len(),
            compressed = compressed_size,
            "archive written"
        );

        Ok(EncodeSummary {
            source: source_name,
            output: out_path,
            original_size: data.len(),
            compressed_size,
            ratio,
            distinct_symbols: freq.distinct(),
            extra_bits: archive.extra_bits,
            entropy_bits: freq.entropy_bits(),
        })
    }
}
