//! A builder for a [`Machine`].

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::io::BufRead;

use crate::liftover::Machine;
use crate::reader;

/// An error related to building a [`Machine`].
#[derive(Debug)]
pub enum Error {
    /// An error reading the reference mapping records.
    Reader(reader::Error),

    /// A transcript id appeared more than once.
    ///
    /// The 1-based line number of the repeated record is included. Earlier
    /// versions of the tool silently kept the last record for a repeated id;
    /// such tables are now rejected instead.
    DuplicateTranscript(String, usize),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Reader(err) => write!(f, "reader error: {err}"),
            Error::DuplicateTranscript(id, line_no) => {
                write!(f, "duplicate transcript `{id}` on line {line_no}")
            }
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// A builder for a [`Machine`].
#[derive(Debug)]
pub struct Builder;

impl Builder {
    /// Builds a [`Machine`] from the records of a reference mapping table.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"TX1\tchr1\t100\t10M\nTX2\tchr2\t5\t3S7M\n";
    /// let reader = t2g::Reader::new(&data[..]);
    ///
    /// let machine = t2g::liftover::machine::Builder::default().try_build_from(reader)?;
    /// assert_eq!(machine.len(), 2);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn try_build_from<T>(&self, mut reader: reader::Reader<T>) -> Result<Machine>
    where
        T: BufRead,
    {
        let mut inner = HashMap::new();

        for (i, result) in reader.records().enumerate() {
            let record = result.map_err(Error::Reader)?;

            match inner.entry(record.transcript_id().to_string()) {
                Entry::Occupied(entry) => {
                    return Err(Error::DuplicateTranscript(entry.key().clone(), i + 1));
                }
                Entry::Vacant(entry) => {
                    entry.insert(record);
                }
            }
        }

        Ok(Machine { inner })
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self
    }
}
