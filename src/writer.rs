//! A writer for mapped results.

use std::io::Write;
use std::io::{self};

use crate::query::Mapped;

/// A writer for [`Mapped`] results.
///
/// Each result is written as a single newline-terminated, tab-delimited line.
#[derive(Debug)]
pub struct Writer<T>(T)
where
    T: Write;

impl<T> Writer<T>
where
    T: Write,
{
    /// Creates a writer.
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Gets a reference to the inner writer.
    pub fn inner(&self) -> &T {
        &self.0
    }

    /// Consumes self and returns the inner writer.
    pub fn into_inner(self) -> T {
        self.0
    }

    /// Writes a single mapped result.
    pub fn write_mapped(&mut self, mapped: &Mapped) -> io::Result<()> {
        writeln!(self.0, "{mapped}")
    }

    /// Writes every mapped result in order and flushes the inner writer.
    ///
    /// # Examples
    ///
    /// ```
    /// use t2g::query::Mapped;
    /// use t2g::query::Query;
    ///
    /// let results = vec![
    ///     Mapped::new(Query::new("TX1", 4), "chr1", 104),
    ///     Mapped::new(Query::new("TX1", 0), "chr1", 100),
    /// ];
    ///
    /// let mut writer = t2g::Writer::new(Vec::new());
    /// writer.write_results(&results)?;
    ///
    /// assert_eq!(writer.into_inner(), b"TX1\t4\tchr1\t104\nTX1\t0\tchr1\t100\n");
    ///
    /// # Ok::<(), std::io::Error>(())
    /// ```
    pub fn write_results<'a>(
        &mut self,
        results: impl IntoIterator<Item = &'a Mapped>,
    ) -> io::Result<()> {
        for mapped in results {
            self.write_mapped(mapped)?;
        }

        self.0.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Query;

    #[test]
    fn test_write_mapped() -> io::Result<()> {
        let mut writer = Writer::new(Vec::new());
        writer.write_mapped(&Mapped::new(Query::new("TX1", 3), "chrM", 16_000))?;

        assert_eq!(writer.inner(), b"TX1\t3\tchrM\t16000\n");

        Ok(())
    }

    #[test]
    fn test_write_nothing() -> io::Result<()> {
        let mut writer = Writer::new(Vec::new());
        writer.write_results(&Vec::<Mapped>::new())?;

        assert!(writer.into_inner().is_empty());

        Ok(())
    }
}
