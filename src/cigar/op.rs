//! A single CIGAR operation.

use omics::coordinate::position::Number;

pub mod kind;

pub use kind::Kind;

/// A single CIGAR operation (a length paired with a [`Kind`]).
///
/// Zero lengths are permitted. They are carried through as-is and contribute
/// nothing when walked.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Op {
    /// The number of bases covered by the operation.
    len: Number,

    /// The kind of operation.
    kind: Kind,
}

impl Op {
    /// Creates a new [`Op`].
    ///
    /// # Examples
    ///
    /// ```
    /// use t2g::cigar::op::Kind;
    /// use t2g::cigar::Op;
    ///
    /// let op = Op::new(10, Kind::Match);
    /// assert_eq!(op.len(), 10);
    /// assert_eq!(op.kind(), Kind::Match);
    /// ```
    pub fn new(len: Number, kind: Kind) -> Self {
        Self { len, kind }
    }

    /// Gets the length of the operation.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> Number {
        self.len
    }

    /// Gets the kind of the operation.
    pub fn kind(&self) -> Kind {
        self.kind
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.len, self.kind)
    }
}
