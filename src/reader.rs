//! A reader for reference mapping tables and query lists.

use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::io::{self};
use std::iter;
use std::path::Path;
use std::path::PathBuf;

use flate2::read::MultiGzDecoder;

use crate::query;
use crate::query::Query;
use crate::record;
use crate::record::Record;

/// The new line character.
const NEW_LINE: char = '\n';

/// The carriage return character.
const CARRIAGE_RETURN: char = '\r';

/// The file extension that marks an input file as gzip-compressed.
const GZIP_EXTENSION: &str = "gz";

////////////////////////////////////////////////////////////////////////////////////////
// Errors
////////////////////////////////////////////////////////////////////////////////////////

/// An error related to a [`Reader`].
///
/// Line numbers are 1-based.
#[derive(Debug)]
pub enum Error {
    /// An I/O error.
    Io(io::Error),

    /// An invalid reference mapping record.
    Record(usize, record::ParseError),

    /// An invalid query.
    Query(usize, query::ParseError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Io(err) => write!(f, "i/o error: {err}"),
            Error::Record(line_no, err) => write!(f, "invalid record on line {line_no}: {err}"),
            Error::Query(line_no, err) => write!(f, "invalid query on line {line_no}: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// An error related to opening an input file with [`open()`].
#[derive(Debug)]
pub enum OpenError {
    /// The file does not exist (or is not a regular file).
    Missing(PathBuf),

    /// The file exists but has a size of zero.
    Empty(PathBuf),

    /// An I/O error.
    Io(PathBuf, io::Error),
}

impl std::fmt::Display for OpenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpenError::Missing(path) => write!(f, "cannot locate file: {}", path.display()),
            OpenError::Empty(path) => write!(f, "file is empty: {}", path.display()),
            OpenError::Io(path, err) => write!(f, "i/o error for {}: {err}", path.display()),
        }
    }
}

impl std::error::Error for OpenError {}

////////////////////////////////////////////////////////////////////////////////////////
// Reader
////////////////////////////////////////////////////////////////////////////////////////

/// A line-oriented reader for reference mapping tables and query lists.
#[derive(Clone, Debug)]
pub struct Reader<T>(T)
where
    T: BufRead;

impl<T> Reader<T>
where
    T: BufRead,
{
    /// Creates a reader.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"TX1\tchr1\t100\t10M\n";
    /// let reader = t2g::Reader::new(&data[..]);
    /// ```
    pub fn new(inner: T) -> Self {
        Self::from(inner)
    }

    /// Gets a reference to the inner reader.
    pub fn inner(&self) -> &T {
        &self.0
    }

    /// Gets a mutable reference to the inner reader.
    pub fn inner_mut(&mut self) -> &mut T {
        &mut self.0
    }

    /// Consumes self and returns the inner reader.
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Reads a raw, textual line from the underlying reader.
    ///
    /// The trailing line ending (`\n` or `\r\n`) is removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::io;
    ///
    /// let data = b"TX1 4\r\nTX2 5";
    /// let mut reader = t2g::Reader::new(&data[..]);
    ///
    /// let mut buffer = String::new();
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 7);
    /// assert_eq!(buffer, "TX1 4");
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 5);
    /// assert_eq!(buffer, "TX2 5");
    ///
    /// assert_eq!(reader.read_line_raw(&mut buffer)?, 0);
    ///
    /// # Ok::<(), io::Error>(())
    /// ```
    pub fn read_line_raw(&mut self, buffer: &mut String) -> io::Result<usize> {
        read_line(self.inner_mut(), buffer)
    }

    /// Returns an iterator over the reference mapping [`Record`]s in the
    /// underlying reader.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"TX1\tchr1\t100\t10M\nTX2\tchr2\t0\t5S5M\n";
    /// let mut reader = t2g::Reader::new(&data[..]);
    ///
    /// let records = reader.records().collect::<Result<Vec<_>, _>>()?;
    /// assert_eq!(records.len(), 2);
    /// assert_eq!(records[1].transcript_id(), "TX2");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn records(&mut self) -> impl Iterator<Item = Result<Record>> + '_ {
        self.parse_lines(|line_no, line| {
            line.parse::<Record>()
                .map_err(|err| Error::Record(line_no, err))
        })
    }

    /// Returns an iterator over the [`Query`]s in the underlying reader.
    ///
    /// # Examples
    ///
    /// ```
    /// use t2g::query::Query;
    ///
    /// let data = b"TX1 4\nTX1\t2\n";
    /// let mut reader = t2g::Reader::new(&data[..]);
    ///
    /// let queries = reader.queries().collect::<Result<Vec<_>, _>>()?;
    /// assert_eq!(queries, vec![Query::new("TX1", 4), Query::new("TX1", 2)]);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn queries(&mut self) -> impl Iterator<Item = Result<Query>> + '_ {
        self.parse_lines(|line_no, line| {
            line.parse::<Query>()
                .map_err(|err| Error::Query(line_no, err))
        })
    }

    /// Returns an iterator that parses each line with `parse`, which receives
    /// the 1-based line number alongside the line.
    fn parse_lines<R>(
        &mut self,
        parse: fn(usize, &str) -> Result<R>,
    ) -> impl Iterator<Item = Result<R>> + '_
    where
        R: 'static,
    {
        let mut buffer = String::new();
        let mut line_no = 0;

        iter::from_fn(move || match self.read_line_raw(&mut buffer) {
            Ok(0) => None,
            Ok(_) => {
                line_no += 1;
                Some(parse(line_no, &buffer))
            }
            Err(err) => Some(Err(Error::Io(err))),
        })
    }
}

impl<T> From<T> for Reader<T>
where
    T: BufRead,
{
    fn from(inner: T) -> Self {
        Self(inner)
    }
}

/// Opens an input file for reading.
///
/// Files that are missing or empty are rejected up front. Files ending in
/// `.gz` are decompressed transparently.
pub fn open(path: impl AsRef<Path>) -> std::result::Result<Reader<Box<dyn BufRead>>, OpenError> {
    let path = path.as_ref();

    let metadata = match std::fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => metadata,
        Ok(_) => return Err(OpenError::Missing(path.to_path_buf())),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Err(OpenError::Missing(path.to_path_buf()));
        }
        Err(err) => return Err(OpenError::Io(path.to_path_buf(), err)),
    };

    if metadata.len() == 0 {
        return Err(OpenError::Empty(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|err| OpenError::Io(path.to_path_buf(), err))?;

    let inner: Box<dyn BufRead> = match path.extension().and_then(|ext| ext.to_str()) {
        Some(GZIP_EXTENSION) => Box::new(BufReader::new(MultiGzDecoder::new(file))),
        _ => Box::new(BufReader::new(file)),
    };

    Ok(Reader::new(inner))
}

/// Reads a line from a buffered reader, stripping the line ending.
fn read_line<T>(reader: &mut T, buffer: &mut String) -> io::Result<usize>
where
    T: BufRead,
{
    buffer.clear();

    match reader.read_line(buffer) {
        Ok(0) => Ok(0),
        Ok(n) => {
            if buffer.ends_with(NEW_LINE) {
                buffer.pop();

                if buffer.ends_with(CARRIAGE_RETURN) {
                    buffer.pop();
                }
            }

            Ok(n)
        }
        Err(e) => Err(e),
    }
}
