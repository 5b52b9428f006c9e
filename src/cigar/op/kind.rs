//! The kind of a CIGAR operation.

/// An error related to parsing a [`Kind`].
#[derive(Debug, Eq, PartialEq)]
pub enum ParseError {
    /// The character is not a recognized CIGAR operation.
    Invalid(char),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::Invalid(c) => write!(f, "invalid operation: `{c}`"),
        }
    }
}

impl std::error::Error for ParseError {}

/// The kind of a CIGAR operation.
///
/// Which kinds consume the query and/or the reference is fixed by this crate
/// and is _not_ the conventional SAM interpretation in two places: hard clips
/// (`H`) consume the reference and skipped regions (`N`) consume nothing.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    /// An alignment match (`M`).
    Match,

    /// An insertion to the reference (`I`).
    Insertion,

    /// A deletion from the reference (`D`).
    Deletion,

    /// A skipped region of the reference (`N`).
    Skip,

    /// A soft clip (`S`).
    SoftClip,

    /// A hard clip (`H`).
    HardClip,

    /// Padding (`P`).
    Pad,

    /// A sequence match (`=`).
    SequenceMatch,

    /// A sequence mismatch (`X`).
    SequenceMismatch,
}

impl Kind {
    /// Returns whether this kind of operation advances the query.
    ///
    /// # Examples
    ///
    /// ```
    /// use t2g::cigar::op::Kind;
    ///
    /// assert!(Kind::Match.consumes_query());
    /// assert!(Kind::SoftClip.consumes_query());
    /// assert!(!Kind::HardClip.consumes_query());
    /// ```
    pub fn consumes_query(&self) -> bool {
        matches!(
            self,
            Kind::Match
                | Kind::Insertion
                | Kind::SoftClip
                | Kind::SequenceMatch
                | Kind::SequenceMismatch
        )
    }

    /// Returns whether this kind of operation advances the reference.
    ///
    /// # Examples
    ///
    /// ```
    /// use t2g::cigar::op::Kind;
    ///
    /// assert!(Kind::Deletion.consumes_reference());
    /// assert!(Kind::HardClip.consumes_reference());
    /// assert!(!Kind::Skip.consumes_reference());
    /// ```
    pub fn consumes_reference(&self) -> bool {
        matches!(
            self,
            Kind::Match
                | Kind::Deletion
                | Kind::HardClip
                | Kind::SequenceMatch
                | Kind::SequenceMismatch
        )
    }

    /// Gets the character used for this kind within a CIGAR string.
    pub fn as_char(&self) -> char {
        match self {
            Kind::Match => 'M',
            Kind::Insertion => 'I',
            Kind::Deletion => 'D',
            Kind::Skip => 'N',
            Kind::SoftClip => 'S',
            Kind::HardClip => 'H',
            Kind::Pad => 'P',
            Kind::SequenceMatch => '=',
            Kind::SequenceMismatch => 'X',
        }
    }
}

impl TryFrom<char> for Kind {
    type Error = ParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'M' => Ok(Kind::Match),
            'I' => Ok(Kind::Insertion),
            'D' => Ok(Kind::Deletion),
            'N' => Ok(Kind::Skip),
            'S' => Ok(Kind::SoftClip),
            'H' => Ok(Kind::HardClip),
            'P' => Ok(Kind::Pad),
            '=' => Ok(Kind::SequenceMatch),
            'X' => Ok(Kind::SequenceMismatch),
            _ => Err(ParseError::Invalid(c)),
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every kind paired with its expected (consumes query, consumes
    /// reference) classification.
    const CLASSIFICATION: &[(char, bool, bool)] = &[
        ('M', true, true),
        ('=', true, true),
        ('X', true, true),
        ('I', true, false),
        ('S', true, false),
        ('D', false, true),
        ('H', false, true),
        ('N', false, false),
        ('P', false, false),
    ];

    #[test]
    fn test_classification() -> Result<(), Box<dyn std::error::Error>> {
        for (c, query, reference) in CLASSIFICATION {
            let kind = Kind::try_from(*c)?;
            assert_eq!(kind.consumes_query(), *query, "query for `{c}`");
            assert_eq!(kind.consumes_reference(), *reference, "reference for `{c}`");
            assert_eq!(kind.as_char(), *c);
        }

        Ok(())
    }

    #[test]
    fn test_invalid_kind() {
        let err = Kind::try_from('Q').unwrap_err();
        assert_eq!(err, ParseError::Invalid('Q'));
        assert_eq!(err.to_string(), "invalid operation: `Q`");

        // Lowercase operations are not accepted.
        assert!(Kind::try_from('m').is_err());
    }
}
