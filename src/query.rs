//! Queries and their mapped results.
//!
//! A query is a 0-based position within a transcript, written as two
//! whitespace-delimited fields:
//!
//! ```text
//! <transcript id> <0-based transcript position>
//! ```
//!
//! Once lifted over, a query becomes a [`Mapped`] result, written as four
//! tab-delimited fields:
//!
//! ```text
//! <transcript id> <transcript position> <chromosome> <genomic position>
//! ```

use std::num::ParseIntError;
use std::str::FromStr;

use omics::coordinate::Contig;
use omics::coordinate::position::Number;

/// The number of expected fields in a query.
pub const NUM_FIELDS: usize = 2;

/// The delimiter used when writing queries and mapped results.
pub const OUTPUT_DELIMITER: char = '\t';

/// An error related to parsing a [`Query`].
#[derive(Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An incorrect number of fields in the query.
    IncorrectNumberOfFields(usize),

    /// An invalid position.
    InvalidPosition(ParseIntError),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::IncorrectNumberOfFields(n) => write!(
                f,
                "invalid number of fields in query: expected {NUM_FIELDS} fields, found {n} fields"
            ),
            ParseError::InvalidPosition(err) => write!(f, "invalid position: {err}"),
        }
    }
}

impl std::error::Error for ParseError {}

////////////////////////////////////////////////////////////////////////////////////////
// Queries
////////////////////////////////////////////////////////////////////////////////////////

/// A position within a transcript to be lifted over.
///
/// Queries order by transcript id and then by position.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Query {
    /// The transcript id.
    transcript_id: String,

    /// The 0-based position within the transcript.
    position: Number,
}

impl Query {
    /// Creates a new [`Query`].
    ///
    /// # Examples
    ///
    /// ```
    /// use t2g::query::Query;
    ///
    /// let query = Query::new("TX1", 4);
    /// assert_eq!(query.transcript_id(), "TX1");
    /// assert_eq!(query.position(), 4);
    /// ```
    pub fn new(transcript_id: impl Into<String>, position: Number) -> Self {
        Self {
            transcript_id: transcript_id.into(),
            position,
        }
    }

    /// Gets the transcript id.
    pub fn transcript_id(&self) -> &str {
        &self.transcript_id
    }

    /// Gets the 0-based position within the transcript.
    pub fn position(&self) -> Number {
        self.position
    }
}

impl FromStr for Query {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.split_whitespace().collect::<Vec<_>>();

        if parts.len() != NUM_FIELDS {
            return Err(ParseError::IncorrectNumberOfFields(parts.len()));
        }

        let position = parts[1]
            .parse::<Number>()
            .map_err(ParseError::InvalidPosition)?;

        Ok(Query::new(parts[0], position))
    }
}

impl std::fmt::Display for Query {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{OUTPUT_DELIMITER}{}",
            self.transcript_id, self.position
        )
    }
}

////////////////////////////////////////////////////////////////////////////////////////
// Mapped results
////////////////////////////////////////////////////////////////////////////////////////

/// A [`Query`] that has been lifted over to the reference genome.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Mapped {
    /// The original query.
    query: Query,

    /// The chromosome of the genomic position.
    chromosome: Contig,

    /// The 0-based genomic position.
    position: Number,
}

impl Mapped {
    /// Creates a new [`Mapped`] result.
    pub fn new(query: Query, chromosome: impl Into<Contig>, position: Number) -> Self {
        Self {
            query,
            chromosome: chromosome.into(),
            position,
        }
    }

    /// Gets the original query.
    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Gets the chromosome.
    pub fn chromosome(&self) -> &Contig {
        &self.chromosome
    }

    /// Gets the 0-based genomic position.
    ///
    /// # Examples
    ///
    /// ```
    /// use t2g::query::Mapped;
    /// use t2g::query::Query;
    ///
    /// let mapped = Mapped::new(Query::new("TX1", 4), "chr1", 104);
    /// assert_eq!(mapped.position(), 104);
    /// assert_eq!(mapped.to_string(), "TX1\t4\tchr1\t104");
    /// ```
    pub fn position(&self) -> Number {
        self.position
    }
}

impl std::fmt::Display for Mapped {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{OUTPUT_DELIMITER}{}{OUTPUT_DELIMITER}{}",
            self.query,
            self.chromosome.as_str(),
            self.position
        )
    }
}
