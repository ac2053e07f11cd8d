use crate::core::models::structure::Structure;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Defines the interface for writing an external program's input deck.
///
/// An input deck is produced once per calculation from a structure and a set
/// of resolved options; it is never read back.
pub trait InputDeck {
    /// The resolved calculation options the deck is rendered from.
    type Options;

    /// The error type for write operations.
    type Error: Error + From<io::Error>;

    /// Writes the deck for `structure` to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(
        structure: &Structure,
        options: &Self::Options,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error>;

    /// Writes the deck to a file path, creating or truncating the file.
    ///
    /// The file handle is flushed before it is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(
        structure: &Structure,
        options: &Self::Options,
        path: P,
    ) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(structure, options, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// Defines the interface for scanning an external program's text output.
pub trait OutputLog {
    /// The structured report extracted from the log.
    type Report;

    /// The error type for scan operations.
    type Error: Error + From<io::Error>;

    /// Scans a complete log from a buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or an extraction point is malformed.
    fn scan_from(reader: &mut impl BufRead) -> Result<Self::Report, Self::Error>;

    /// Scans the log stored at a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or scanning fails.
    fn scan_from_path<P: AsRef<Path>>(path: P) -> Result<Self::Report, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::scan_from(&mut reader)
    }
}
