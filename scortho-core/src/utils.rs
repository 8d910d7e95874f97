use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use anyhow::{Context, Result};
use flate2::read::MultiGzDecoder;

/// Get a reader for either a gzipped or non-gzipped file
///
/// # Arguments
///
/// - path: path to the file to read
///
/// # Returns
///
/// A `BufReader` object for a given file path
pub fn get_dynamic_reader(path: &Path) -> Result<BufReader<Box<dyn Read>>> {
    let is_gzipped = path.extension() == Some(OsStr::new("gz"));
    let file = File::open(path).with_context(|| format!("Failed to open file: {:?}", path))?;

    let file: Box<dyn Read> = match is_gzipped {
        true => Box::new(MultiGzDecoder::new(file)),
        false => Box::new(file),
    };

    let reader = BufReader::new(file);

    Ok(reader)
}

///
/// Read the raw scaffold text from a file: one sequence per file, first line
/// only. Anything after the first line is ignored.
///
/// # Arguments
/// - path: path to the scaffold file (.txt or .txt.gz)
pub fn read_scaffold_file(path: &Path) -> Result<String> {
    let mut reader = get_dynamic_reader(path)?;

    let mut line = String::new();
    reader
        .read_line(&mut line)
        .with_context(|| format!("Failed to read scaffold from file: {:?}", path))?;

    Ok(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    use flate2::Compression;
    use flate2::write::GzEncoder;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use tempfile::tempdir;

    use crate::models::Scaffold;

    #[rstest]
    fn test_read_scaffold_first_line_only() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sc1.txt");
        std::fs::write(&path, "atgcatgc\nGGGGGGGG\n").unwrap();

        let raw = read_scaffold_file(&path).unwrap();
        assert_eq!(raw, "atgcatgc\n");

        // the raw line parses into a normalized scaffold
        let scaffold: Scaffold = raw.parse().unwrap();
        assert_eq!(scaffold.as_string(), "ATGCATGC");
    }

    #[rstest]
    fn test_read_scaffold_gzipped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sc1.txt.gz");

        let file = File::create(&path).unwrap();
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(b"ATGCATGC\n").unwrap();
        encoder.finish().unwrap();

        let raw = read_scaffold_file(&path).unwrap();
        assert_eq!(raw, "ATGCATGC\n");
    }

    #[rstest]
    fn test_read_scaffold_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nope.txt");

        assert!(read_scaffold_file(&path).is_err());
    }
}
