//! Lifting over batches of queries.
//!
//! Queries are processed sorted by transcript id and position so that lookups
//! for the same transcript happen together. Each query is tagged with its
//! index in the input before sorting, and results are put back into input
//! order using that tag. Duplicate queries therefore keep their positions.

use crate::liftover::Machine;
use crate::liftover::machine;
use crate::query::Mapped;
use crate::query::Query;

/// Lifts over every query in `queries`, returning the results in the same
/// order as the queries were provided.
///
/// The first query that cannot be lifted over fails the whole batch.
///
/// # Examples
///
/// ```
/// use t2g::query::Query;
///
/// let data = b"TX1\tchr1\t100\t10M\nTX2\tchr2\t0\t10M\n";
/// let reader = t2g::Reader::new(&data[..]);
/// let machine = t2g::liftover::machine::Builder.try_build_from(reader)?;
///
/// let queries = vec![Query::new("TX2", 3), Query::new("TX1", 3)];
/// let results = t2g::batch::liftover(&machine, queries)?;
///
/// assert_eq!(results[0].to_string(), "TX2\t3\tchr2\t3");
/// assert_eq!(results[1].to_string(), "TX1\t3\tchr1\t103");
///
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn liftover(machine: &Machine, queries: Vec<Query>) -> Result<Vec<Mapped>, machine::Error> {
    let mut tagged = queries.into_iter().enumerate().collect::<Vec<_>>();
    tagged.sort_by(|(_, a), (_, b)| a.cmp(b));

    let mut results = tagged
        .into_iter()
        .map(|(index, query)| machine.liftover(&query).map(|mapped| (index, mapped)))
        .collect::<Result<Vec<_>, _>>()?;

    results.sort_unstable_by_key(|(index, _)| *index);

    Ok(results.into_iter().map(|(_, mapped)| mapped).collect())
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom as _;

    use super::*;
    use crate::Reader;

    /// A small reference mapping table.
    const REFERENCE: &[u8] = b"TX1\tchr1\t100\t3M2I3M\nTX2\tchr2\t1000\t2M3D2M\nTX3\tchr3\t0\t8M\n";

    /// Builds a machine from [`REFERENCE`].
    fn build_machine() -> Result<Machine, Box<dyn std::error::Error>> {
        Ok(machine::Builder.try_build_from(Reader::new(REFERENCE))?)
    }

    #[test]
    fn test_order_is_restored() -> Result<(), Box<dyn std::error::Error>> {
        let machine = build_machine()?;
        let queries = vec![
            Query::new("TX3", 5),
            Query::new("TX1", 4),
            Query::new("TX2", 3),
            Query::new("TX1", 0),
        ];

        let results = liftover(&machine, queries)?
            .into_iter()
            .map(|mapped| mapped.to_string())
            .collect::<Vec<_>>();

        assert_eq!(
            results,
            vec![
                "TX3\t5\tchr3\t5",
                "TX1\t4\tchr1\t104",
                "TX2\t3\tchr2\t1006",
                "TX1\t0\tchr1\t100",
            ]
        );

        Ok(())
    }

    #[test]
    fn test_duplicate_queries_keep_their_positions() -> Result<(), Box<dyn std::error::Error>> {
        let machine = build_machine()?;
        let queries = vec![
            Query::new("TX2", 1),
            Query::new("TX1", 2),
            Query::new("TX2", 1),
            Query::new("TX1", 2),
        ];

        let results = liftover(&machine, queries.clone())?;
        assert_eq!(results.len(), queries.len());

        for (query, mapped) in queries.iter().zip(results.iter()) {
            assert_eq!(mapped.query(), query);
        }

        Ok(())
    }

    #[test]
    fn test_any_permutation_matches_one_at_a_time() -> Result<(), Box<dyn std::error::Error>> {
        let machine = build_machine()?;
        let mut rng = StdRng::seed_from_u64(0);

        let mut queries = Vec::new();
        for id in ["TX1", "TX2", "TX3"] {
            for position in 0..10 {
                queries.push(Query::new(id, position));
                queries.push(Query::new(id, position));
            }
        }

        for _ in 0..20 {
            queries.shuffle(&mut rng);

            let expected = queries
                .iter()
                .map(|query| machine.liftover(query))
                .collect::<Result<Vec<_>, _>>()?;
            let results = liftover(&machine, queries.clone())?;

            assert_eq!(results, expected);
        }

        Ok(())
    }

    #[test]
    fn test_unknown_transcript_fails_the_batch() -> Result<(), Box<dyn std::error::Error>> {
        let machine = build_machine()?;
        let queries = vec![Query::new("TX1", 1), Query::new("TX9", 1), Query::new("TX2", 1)];

        let err = liftover(&machine, queries).unwrap_err();
        assert_eq!(err, machine::Error::UnknownTranscript(String::from("TX9")));

        Ok(())
    }

    #[test]
    fn test_empty_batch() -> Result<(), Box<dyn std::error::Error>> {
        let machine = build_machine()?;
        assert!(liftover(&machine, Vec::new())?.is_empty());
        Ok(())
    }
}
