//! A record within a reference mapping table.
//!
//! Each record describes the alignment of a single transcript to the reference
//! genome as four tab-delimited fields:
//!
//! ```text
//! <transcript id> <chromosome> <0-based reference start> <CIGAR>
//! ```

use std::num::ParseIntError;
use std::str::FromStr;

use omics::coordinate::Contig;
use omics::coordinate::position::Number;

use crate::Cigar;
use crate::cigar;

/// The delimiter for a record.
pub const DELIMITER: char = '\t';

/// The number of expected fields in a record.
pub const NUM_FIELDS: usize = 4;

/// An error related to parsing a [`Record`].
#[derive(Debug, Eq, PartialEq)]
pub enum ParseError {
    /// An incorrect number of fields in the record.
    IncorrectNumberOfFields(usize),

    /// An invalid reference start.
    InvalidReferenceStart(ParseIntError),

    /// An invalid CIGAR string for the named transcript.
    InvalidCigar(cigar::ParseError, String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::IncorrectNumberOfFields(n) => write!(
                f,
                "invalid number of fields in record: expected {NUM_FIELDS} fields, found {n} \
                 fields"
            ),
            ParseError::InvalidReferenceStart(err) => {
                write!(f, "invalid reference start: {err}")
            }
            ParseError::InvalidCigar(err, transcript_id) => {
                write!(f, "invalid CIGAR for transcript `{transcript_id}`: {err}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// The alignment of a single transcript to the reference genome.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    /// The transcript id.
    transcript_id: String,

    /// The chromosome the transcript is aligned to.
    chromosome: Contig,

    /// The 0-based position on the chromosome where the alignment starts.
    reference_start: Number,

    /// The alignment.
    cigar: Cigar,
}

impl Record {
    /// Creates a new [`Record`].
    ///
    /// # Examples
    ///
    /// ```
    /// use t2g::record::Record;
    /// use t2g::Cigar;
    ///
    /// let record = Record::new("TX1", "chr1", 100, "10M".parse::<Cigar>()?);
    /// assert_eq!(record.transcript_id(), "TX1");
    /// assert_eq!(record.chromosome().as_str(), "chr1");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(
        transcript_id: impl Into<String>,
        chromosome: impl Into<Contig>,
        reference_start: Number,
        cigar: Cigar,
    ) -> Self {
        Self {
            transcript_id: transcript_id.into(),
            chromosome: chromosome.into(),
            reference_start,
            cigar,
        }
    }

    /// Gets the transcript id.
    ///
    /// # Examples
    ///
    /// ```
    /// use t2g::record::Record;
    ///
    /// let record = "TX1\tchr1\t100\t10M".parse::<Record>()?;
    /// assert_eq!(record.transcript_id(), "TX1");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn transcript_id(&self) -> &str {
        &self.transcript_id
    }

    /// Gets the chromosome.
    ///
    /// # Examples
    ///
    /// ```
    /// use t2g::record::Record;
    ///
    /// let record = "TX1\tchr1\t100\t10M".parse::<Record>()?;
    /// assert_eq!(record.chromosome().as_str(), "chr1");
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn chromosome(&self) -> &Contig {
        &self.chromosome
    }

    /// Gets the 0-based reference start.
    ///
    /// # Examples
    ///
    /// ```
    /// use t2g::record::Record;
    ///
    /// let record = "TX1\tchr1\t100\t10M".parse::<Record>()?;
    /// assert_eq!(record.reference_start(), 100);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn reference_start(&self) -> Number {
        self.reference_start
    }

    /// Gets the CIGAR.
    pub fn cigar(&self) -> &Cigar {
        &self.cigar
    }
}

impl FromStr for Record {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.trim().split(DELIMITER).collect::<Vec<_>>();

        if parts.len() != NUM_FIELDS {
            return Err(ParseError::IncorrectNumberOfFields(parts.len()));
        }

        let transcript_id = parts[0];
        let reference_start = parts[2]
            .parse::<Number>()
            .map_err(ParseError::InvalidReferenceStart)?;
        let cigar = parts[3]
            .parse::<Cigar>()
            .map_err(|err| ParseError::InvalidCigar(err, transcript_id.to_string()))?;

        Ok(Record::new(transcript_id, parts[1], reference_start, cigar))
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{DELIMITER}{}{DELIMITER}{}{DELIMITER}{}",
            self.transcript_id,
            self.chromosome.as_str(),
            self.reference_start,
            self.cigar
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cigar::Kind;

    #[test]
    fn test_valid_record() -> Result<(), Box<dyn std::error::Error>> {
        let record = "ENST0001\tchr7\t55019016\t10M2I5M".parse::<Record>()?;

        assert_eq!(record.transcript_id(), "ENST0001");
        assert_eq!(record.chromosome().as_str(), "chr7");
        assert_eq!(record.reference_start(), 55_019_016);
        assert_eq!(record.cigar().inner().len(), 3);
        assert_eq!(record.cigar().inner().first().kind(), Kind::Match);

        Ok(())
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() -> Result<(), Box<dyn std::error::Error>> {
        let record = "TX1\tchr1\t0\t4M  \r".parse::<Record>()?;
        assert_eq!(record.cigar().to_string(), "4M");
        Ok(())
    }

    #[test]
    fn test_display() -> Result<(), Box<dyn std::error::Error>> {
        let line = "TX1\tchr1\t100\t3M2D3M";
        assert_eq!(line.parse::<Record>()?.to_string(), line);
        Ok(())
    }

    #[test]
    fn test_incorrect_number_of_fields() {
        let err = "TX1\tchr1\t100".parse::<Record>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid number of fields in record: expected 4 fields, found 3 fields"
        );

        let err = "TX1\tchr1\t100\t4M\textra".parse::<Record>().unwrap_err();
        assert_eq!(err, ParseError::IncorrectNumberOfFields(5));

        // Spaces are not a field delimiter.
        let err = "TX1 chr1 100 4M".parse::<Record>().unwrap_err();
        assert_eq!(err, ParseError::IncorrectNumberOfFields(1));
    }

    #[test]
    fn test_invalid_reference_start() {
        let err = "TX1\tchr1\t-5\t4M".parse::<Record>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid reference start: invalid digit found in string"
        );

        let err = "TX1\tchr1\t\t4M".parse::<Record>().unwrap_err();
        assert!(matches!(err, ParseError::InvalidReferenceStart(_)));
    }

    #[test]
    fn test_invalid_cigar() {
        let err = "TX1\tchr1\t100\t4M2Z".parse::<Record>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid CIGAR for transcript `TX1`: invalid operation: `Z` at offset 3"
        );
    }
}
