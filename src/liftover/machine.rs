//! A machine for lifting over transcript positions to the reference genome.

use std::collections::HashMap;

use crate::liftover;
use crate::query::Mapped;
use crate::query::Query;
use crate::record::Record;

pub mod builder;

pub use builder::Builder;

/// An error related to lifting over with a [`Machine`].
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// The transcript is not present in the reference mapping table.
    UnknownTranscript(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnknownTranscript(id) => write!(f, "unknown transcript: `{id}`"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// A machine for lifting over positions from transcripts to the reference
/// genome.
///
/// The machine is immutable once built, so it can be shared freely across
/// threads. Generally, you will want to use a [`builder::Builder`] to
/// construct one of these.
#[derive(Debug)]
pub struct Machine {
    /// The alignment records keyed by transcript id.
    inner: HashMap<String, Record>,
}

impl Machine {
    /// Gets the alignment record for a transcript.
    ///
    /// # Examples
    ///
    /// ```
    /// let data = b"TX1\tchr1\t100\t10M\n";
    /// let reader = t2g::Reader::new(&data[..]);
    /// let machine = t2g::liftover::machine::Builder.try_build_from(reader)?;
    ///
    /// assert_eq!(machine.get("TX1").unwrap().reference_start(), 100);
    /// assert!(machine.get("TX2").is_none());
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn get(&self, transcript_id: &str) -> Option<&Record> {
        self.inner.get(transcript_id)
    }

    /// Gets the number of transcripts known to the machine.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns whether the machine knows of no transcripts.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Lifts over a single query to the reference genome.
    ///
    /// # Examples
    ///
    /// ```
    /// use t2g::query::Query;
    ///
    /// let data = b"TX1\tchr1\t100\t3M2D3M\n";
    /// let reader = t2g::Reader::new(&data[..]);
    /// let machine = t2g::liftover::machine::Builder.try_build_from(reader)?;
    ///
    /// let mapped = machine.liftover(&Query::new("TX1", 4))?;
    /// assert_eq!(mapped.chromosome().as_str(), "chr1");
    /// assert_eq!(mapped.position(), 106);
    ///
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn liftover(&self, query: &Query) -> Result<Mapped> {
        let record = self
            .get(query.transcript_id())
            .ok_or_else(|| Error::UnknownTranscript(query.transcript_id().to_string()))?;

        let position = liftover::map(record.cigar(), query.position(), record.reference_start());

        Ok(Mapped::new(
            query.clone(),
            record.chromosome().clone(),
            position,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Reader;
    use crate::liftover::machine;

    /// A small reference mapping table.
    const REFERENCE: &[u8] = b"TX1\tchr1\t100\t3M2I3M\nTX2\tchr2\t0\t5S10M\nTX3\tchr3\t50\t3M2D3M\n";

    #[test]
    fn test_liftover() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let machine = machine::Builder.try_build_from(Reader::new(REFERENCE))?;
        assert_eq!(machine.len(), 3);
        assert!(!machine.is_empty());

        let mapped = machine.liftover(&Query::new("TX1", 4))?;
        assert_eq!(mapped.to_string(), "TX1\t4\tchr1\t104");

        let mapped = machine.liftover(&Query::new("TX2", 7))?;
        assert_eq!(mapped.to_string(), "TX2\t7\tchr2\t2");

        let mapped = machine.liftover(&Query::new("TX3", 3))?;
        assert_eq!(mapped.to_string(), "TX3\t3\tchr3\t53");

        Ok(())
    }

    #[test]
    fn test_unknown_transcript() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let machine = machine::Builder.try_build_from(Reader::new(REFERENCE))?;

        let err = machine.liftover(&Query::new("TX4", 0)).unwrap_err();
        assert_eq!(err, Error::UnknownTranscript(String::from("TX4")));
        assert_eq!(err.to_string(), "unknown transcript: `TX4`");

        Ok(())
    }

    #[test]
    fn test_machine_is_shareable_across_threads()
    -> std::result::Result<(), Box<dyn std::error::Error>> {
        let machine = machine::Builder.try_build_from(Reader::new(REFERENCE))?;

        let positions = std::thread::scope(|scope| {
            let handles = (0..4)
                .map(|i| {
                    let machine = &machine;
                    scope.spawn(move || {
                        machine
                            .liftover(&Query::new("TX1", i))
                            .map(|mapped| mapped.position())
                    })
                })
                .collect::<Vec<_>>();

            handles
                .into_iter()
                .map(|handle| handle.join().expect("thread to not panic"))
                .collect::<Result<Vec<_>>>()
        })?;

        assert_eq!(positions, vec![100, 101, 102, 103]);

        Ok(())
    }
}
