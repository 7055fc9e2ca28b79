//! Archive record assembly and output naming
//!
//! Layout, CRLF line terminators throughout:
//!
//! ```text
//! <original name, extension upper-cased>\r\n
//! <structural tree string>\r\n
//! <extra-bits digit>\r\n
//! <raw packed payload to end of stream>
//! ```
//!
//! The payload is unframed and unescaped; its length is whatever remains
//! after the third line terminator.

use crate::error::EncodeError;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

const LINE_END: &[u8] = b"\r\n";

/// One assembled archive record, ready to serialize.
#[derive(Debug, Clone)]
pub struct Archive {
    /// Original file name with its extension upper-cased.
    pub source_name: String,
    /// Structural tree string; empty for an empty input.
    pub tree: String,
    /// Trailing zero-padding bits in the final payload byte, 0-7.
    pub extra_bits: u8,
    pub payload: Vec<u8>,
}

impl Archive {
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        debug_assert!(self.extra_bits < 8);
        out.write_all(self.source_name.as_bytes())?;
        out.write_all(LINE_END)?;
        out.write_all(self.tree.as_bytes())?;
        out.write_all(LINE_END)?;
        out.write_all(&[b'0' + self.extra_bits])?;
        out.write_all(LINE_END)?;
        out.write_all(&self.payload)?;
        Ok(())
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.serialized_len());
        self.write_to(&mut bytes)
            .expect("writing to a Vec cannot fail");
        bytes
    }

    /// Total length of the serialized record in bytes.
    pub fn serialized_len(&self) -> usize {
        self.source_name.len() + self.tree.len() + 1 + 3 * LINE_END.len() + self.payload.len()
    }

    /// Serialize the record to `path`.
    ///
    /// With `atomic` set, the record is written to a temporary file in the
    /// destination directory and renamed into place, so an aborted run never
    /// leaves a half-written archive under the final name.
    pub fn write_to_file(&self, path: &Path, atomic: bool) -> Result<(), EncodeError> {
        if atomic {
            let dir = match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent,
                _ => Path::new("."),
            };
            let mut tmp = NamedTempFile::new_in(dir)?;
            self.write_to(&mut tmp)?;
            tmp.persist(path).map_err(|e| EncodeError::IoError(e.error))?;
        } else {
            let mut file = File::create(path)?;
            self.write_to(&mut file)?;
        }
        Ok(())
    }
}

/// Upper-case the extension of `name`, leaving the stem untouched.
///
/// The extension is everything after the final dot. Characters without an
/// upper-case form (digits, punctuation) pass through unchanged; a name with
/// no dot is returned as is.
pub fn uppercase_extension(name: &str) -> String {
    match name.rfind('.') {
        Some(dot) => {
            let (stem, ext) = name.split_at(dot + 1);
            format!("{stem}{}", ext.to_ascii_uppercase())
        }
        None => name.to_string(),
    }
}

/// Derive the archive file name: the original extension (if any) is replaced
/// by `marker`.
pub fn archive_name(name: &str, marker: &str) -> String {
    match name.rfind('.') {
        Some(dot) => format!("{}.{marker}", &name[..dot]),
        None => format!("{name}.{marker}"),
    }
}
