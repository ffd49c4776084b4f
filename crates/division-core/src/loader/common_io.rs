// crates/division-core/src/loader/common_io.rs
use crate::error::{DivisionError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Opens `path` for buffered reading and unwraps gzip when the content starts
/// with the gzip magic bytes, so callers never care about compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        DivisionError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let mut reader = BufReader::new(file);
    let gzipped = reader.fill_buf()?.starts_with(&GZIP_MAGIC);

    if !gzipped {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(DivisionError::InvalidData(format!(
            "{} is gzip-compressed but the 'compact' feature is disabled",
            path.display()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = open_stream(&dir.path().join("nope.json")).err().unwrap();
        assert!(matches!(err, DivisionError::NotFound(_)));
    }

    #[test]
    fn plain_files_pass_through() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[]").unwrap();
        let mut out = String::new();
        open_stream(file.path())
            .unwrap()
            .read_to_string(&mut out)
            .unwrap();
        assert_eq!(out, "[]");
    }

    #[cfg(feature = "compact")]
    #[test]
    fn gzip_is_detected_by_content() {
        use flate2::{write::GzEncoder, Compression};

        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(b"[1,2,3]").unwrap();
        file.write_all(&encoder.finish().unwrap()).unwrap();

        let mut out = String::new();
        open_stream(file.path())
            .unwrap()
            .read_to_string(&mut out)
            .unwrap();
        assert_eq!(out, "[1,2,3]");
    }
}
