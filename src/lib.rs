//! `t2g` is a crate for translating transcript coordinates to genomic
//! coordinates.
//!
//! Each transcript is described by a single alignment to the reference genome:
//! a chromosome, the 0-based position where the alignment starts, and a
//! [CIGAR](crate::Cigar) string describing how the transcript lines up against
//! the reference from there. Given such a reference mapping table and a list of
//! transcript positions, this crate computes the genomic position for each.
//!
//! The crate provides two main points of entry:
//!
//! - Mapping a single position through a CIGAR string with
//!   [`liftover::map()`].
//! - Building a [`liftover::Machine`] from a reference mapping table and
//!   lifting over queries, one at a time or in [batches](crate::batch).
//!
//! ## Mapping through a CIGAR string
//!
//! The core of the crate is [`liftover::map()`], which walks the operations of
//! a [`Cigar`] from a reference start until the requested query position is
//! reached. Which operations advance the query and/or the reference is fixed
//! (see [`cigar::Kind`]).
//!
//! ```
//! use t2g::liftover;
//! use t2g::Cigar;
//!
//! let cigar = "3M2D3M".parse::<Cigar>()?;
//!
//! assert_eq!(liftover::map(&cigar, 2, 100), 102);
//! assert_eq!(liftover::map(&cigar, 4, 100), 106);
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Liftover Machine
//!
//! Most often, users will want to read a reference mapping table once and then
//! lift over many positions against it. A [`liftover::Machine`] is built from a
//! [`Reader`] with [`liftover::machine::Builder::try_build_from()`], after which
//! it is immutable. Batches of queries can be lifted over with
//! [`batch::liftover()`], which returns the results in input order.
//!
//! ```
//! use t2g::query::Query;
//!
//! let reference = b"TX1\tchr1\t100\t3M2I3M\nTX2\tchr2\t0\t5S10M\n";
//! let machine = t2g::liftover::machine::Builder.try_build_from(t2g::Reader::new(&reference[..]))?;
//!
//! let queries = b"TX2 7\nTX1 4\n";
//! let queries = t2g::Reader::new(&queries[..])
//!     .queries()
//!     .collect::<Result<Vec<_>, _>>()?;
//!
//! let mut writer = t2g::Writer::new(Vec::new());
//! writer.write_results(&t2g::batch::liftover(&machine, queries)?)?;
//!
//! assert_eq!(writer.into_inner(), b"TX2\t7\tchr2\t2\nTX1\t4\tchr1\t104\n");
//!
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![warn(rust_2021_compatibility)]
#![warn(missing_debug_implementations)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod batch;
pub mod cigar;
pub mod liftover;
pub mod query;
pub mod reader;
pub mod record;
pub mod writer;

pub use self::cigar::Cigar;
pub use self::reader::Reader;
pub use self::writer::Writer;
