//! Facilities for lifting over transcript coordinates.

use omics::coordinate::position::Number;

use crate::Cigar;

pub mod machine;

pub use machine::Machine;

/// Maps a 0-based `query_position` to its reference position by walking the
/// operations of `cigar` from `reference_start`.
///
/// Two cursors are maintained while walking: one in the query (starting at
/// zero) and one in the reference (starting at `reference_start`). Each
/// operation is handled as follows.
///
/// * Once the query cursor has reached `query_position`, no further
///   operations are applied. This includes operations that only consume the
///   reference, so a deletion directly following an exact match of the target
///   is _not_ added.
/// * An operation that does not carry the query cursor past `query_position`
///   is applied in full to whichever cursors it consumes.
/// * An operation that would carry the query cursor past `query_position` is
///   applied partially if it consumes both sequences (and the walk ends
///   there), in full if it only consumes the reference, and not at all
///   otherwise.
///
/// If the operations run out, the reference cursor is returned as-is. The
/// returned position is never less than `reference_start`: both cursors
/// saturate at [`Number::MAX`] rather than wrapping.
///
/// # Examples
///
/// ```
/// use t2g::liftover;
/// use t2g::Cigar;
///
/// let cigar = "3M2I3M".parse::<Cigar>()?;
///
/// assert_eq!(liftover::map(&cigar, 0, 100), 100);
/// assert_eq!(liftover::map(&cigar, 3, 100), 103);
/// assert_eq!(liftover::map(&cigar, 4, 100), 104);
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn map(cigar: &Cigar, query_position: Number, reference_start: Number) -> Number {
    let mut query: Number = 0;
    let mut reference = reference_start;

    for op in cigar.ops() {
        if query >= query_position {
            continue;
        }

        let kind = op.kind();

        if query.saturating_add(op.len()) <= query_position {
            if kind.consumes_query() {
                query = query.saturating_add(op.len());
            }

            if kind.consumes_reference() {
                reference = reference.saturating_add(op.len());
            }
        } else if kind.consumes_query() && kind.consumes_reference() {
            return reference.saturating_add(query_position - query);
        } else if kind.consumes_reference() {
            reference = reference.saturating_add(op.len());
        }
    }

    reference
}
