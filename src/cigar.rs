//! CIGAR strings.
//!
//! A CIGAR string is a compact encoding of an alignment as a series of
//! operations, each of which is a length immediately followed by a single
//! operation character (e.g., `10M2I5M`). Parsing is purely lexical: no
//! attempt is made to check that the lengths agree with the sequences they
//! describe.

use std::num::ParseIntError;
use std::str::FromStr;

use nonempty::NonEmpty;
use omics::coordinate::position::Number;

pub mod op;

pub use op::Kind;
pub use op::Op;

/// An error related to parsing a [`Cigar`].
#[derive(Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The CIGAR string was empty.
    Empty,

    /// An operation was not preceded by a length.
    ///
    /// The operation character and its byte offset are included.
    MissingLength(char, usize),

    /// A length was not followed by an operation.
    MissingOperation(String),

    /// A length could not be parsed.
    InvalidLength(ParseIntError),

    /// An operation character was not recognized.
    ///
    /// The byte offset of the character is included.
    InvalidKind(op::kind::ParseError, usize),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty CIGAR string"),
            ParseError::MissingLength(c, offset) => write!(
                f,
                "operation `{c}` at offset {offset} is not preceded by a length"
            ),
            ParseError::MissingOperation(length) => {
                write!(f, "length `{length}` is not followed by an operation")
            }
            ParseError::InvalidLength(err) => write!(f, "invalid length: {err}"),
            ParseError::InvalidKind(err, offset) => write!(f, "{err} at offset {offset}"),
        }
    }
}

impl std::error::Error for ParseError {}

/// A parsed CIGAR string.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Cigar(NonEmpty<Op>);

impl Cigar {
    /// Gets the operations by reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use t2g::cigar::Kind;
    /// use t2g::cigar::Op;
    /// use t2g::Cigar;
    ///
    /// let cigar = "3M2I".parse::<Cigar>()?;
    /// assert_eq!(cigar.inner().len(), 2);
    /// assert_eq!(cigar.inner().first(), &Op::new(3, Kind::Match));
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn inner(&self) -> &NonEmpty<Op> {
        &self.0
    }

    /// Returns an iterator over the operations in the order they appear in the
    /// CIGAR string.
    pub fn ops(&self) -> impl Iterator<Item = &Op> + '_ {
        self.0.iter()
    }
}

impl From<NonEmpty<Op>> for Cigar {
    fn from(ops: NonEmpty<Op>) -> Self {
        Self(ops)
    }
}

impl FromStr for Cigar {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut ops = Vec::new();

        // The byte offset where the current run of digits starts.
        let mut start = 0;

        for (i, c) in s.char_indices() {
            if c.is_ascii_digit() {
                continue;
            }

            let digits = &s[start..i];

            if digits.is_empty() {
                return Err(ParseError::MissingLength(c, i));
            }

            let len = digits
                .parse::<Number>()
                .map_err(ParseError::InvalidLength)?;
            let kind = Kind::try_from(c).map_err(|err| ParseError::InvalidKind(err, i))?;

            ops.push(Op::new(len, kind));
            start = i + c.len_utf8();
        }

        if start < s.len() {
            return Err(ParseError::MissingOperation(s[start..].to_string()));
        }

        NonEmpty::from_vec(ops).map(Cigar).ok_or(ParseError::Empty)
    }
}

impl std::fmt::Display for Cigar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for op in self.ops() {
            write!(f, "{op}")?;
        }

        Ok(())
    }
}
