//! A binary to translate transcript positions to genomic positions.
//!
//! ```shell
//! cargo run --release --bin=translate-t2g --features=binaries -- \
//!     --ref mapping_ref.txt --query queries.txt --outputdir results/
//! ```
//!
//! It achieves this by carrying out the following:
//!
//! * Reading the reference mapping table into a [`liftover::Machine`].
//! * Reading the list of queries.
//! * Lifting over every query and writing the results, in the same order as
//!   the queries, to the output file.
//!
//! A log of the run is written to `transcript2genomic.log` in the output
//! directory. Any error aborts the run before the output file is created.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Instant;

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use t2g::Writer;
use t2g::batch;
use t2g::liftover;
use t2g::reader;
use tracing::debug;
use tracing::error;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// The name of the log file written to the output directory.
const LOG_FILE_NAME: &str = "transcript2genomic.log";

////////////////////////////////////////////////////////////////////////////////////////
// Arguments
////////////////////////////////////////////////////////////////////////////////////////

/// Translates transcript positions to genomic positions.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Path to the transcript mapping reference file.
    ///
    /// A tab-delimited file with four columns: transcript name, chromosome
    /// name, 0-based start position, and CIGAR string (e.g.,
    /// `/path/to/mapping_ref.txt`).
    #[arg(short, long = "ref")]
    reference: PathBuf,

    /// Path to the transcript queries.
    ///
    /// A whitespace-delimited file with two columns: transcript name and
    /// 0-based position (e.g., `/path/to/queries.txt`).
    #[arg(short, long)]
    query: PathBuf,

    /// The output directory (created if it does not exist).
    #[arg(short, long = "outputdir", default_value = "./")]
    output_directory: PathBuf,

    /// The name of the output file within the output directory.
    #[arg(short = 'f', long = "outfile", default_value = "queries_mapped.txt")]
    output_file: PathBuf,

    /// Whether or not to log at the debug level.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

////////////////////////////////////////////////////////////////////////////////////////
// Logging
////////////////////////////////////////////////////////////////////////////////////////

/// Initializes logging to the log file within the output directory.
///
/// `RUST_LOG` takes precedence over `--verbose` when it is set.
fn init_logging(args: &Args) -> Result<()> {
    let path = args.output_directory.join(LOG_FILE_NAME);
    let file = File::create(&path)
        .with_context(|| format!("creating log file: {}", path.display()))?;

    let filter = match std::env::var("RUST_LOG") {
        Ok(_) => EnvFilter::from_default_env(),
        Err(_) if args.verbose => EnvFilter::new("debug"),
        Err(_) => EnvFilter::new("info"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////
// Main
////////////////////////////////////////////////////////////////////////////////////////

/// Runs the translation described by `args`.
fn translate(args: &Args) -> Result<()> {
    // Both inputs are checked before either is parsed.
    let reference = reader::open(&args.reference).context("opening reference mapping file")?;
    info!("found file: {}", args.reference.display());

    let mut queries = reader::open(&args.query).context("opening query file")?;
    info!("found file: {}", args.query.display());

    let machine = liftover::machine::Builder
        .try_build_from(reference)
        .with_context(|| format!("parsing {}", args.reference.display()))?;
    info!("loaded {} transcript(s)", machine.len());

    let queries = queries
        .queries()
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("parsing {}", args.query.display()))?;
    info!("loaded {} queries", queries.len());

    let results = batch::liftover(&machine, queries).context("mapping queries")?;
    debug!("mapped {} queries", results.len());

    let path = args.output_directory.join(&args.output_file);
    let file =
        File::create(&path).with_context(|| format!("creating output file: {}", path.display()))?;

    Writer::new(BufWriter::new(file))
        .write_results(&results)
        .with_context(|| format!("writing output file: {}", path.display()))?;
    info!("wrote {} result(s) to {}", results.len(), path.display());

    Ok(())
}

fn main() -> Result<()> {
    let start = Instant::now();
    let args = Args::parse();

    std::fs::create_dir_all(&args.output_directory).with_context(|| {
        format!(
            "directory {} does not exist and cannot be created",
            args.output_directory.display()
        )
    })?;

    init_logging(&args)?;

    info!(
        "command: {}",
        std::env::args().collect::<Vec<_>>().join(" ")
    );
    info!("arguments: {args:?}");

    if let Err(err) = translate(&args) {
        error!("{err:#}");
        return Err(err);
    }

    info!("program finished");
    info!("execution time (sec): {}", start.elapsed().as_secs());

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    const REFERENCE: &str = "TX1\tchr1\t100\t3M2I3M\nTX2\tchr2\t1000\t2M3D2M\n";

    /// Writes the reference and `queries` into `dir` and returns the
    /// arguments for translating them into `dir/out`.
    fn setup(dir: &Path, queries: &str) -> std::io::Result<Args> {
        let reference = dir.join("mapping_ref.txt");
        std::fs::write(&reference, REFERENCE)?;

        let query = dir.join("queries.txt");
        std::fs::write(&query, queries)?;

        let output_directory = dir.join("out");
        std::fs::create_dir_all(&output_directory)?;

        Ok(Args {
            reference,
            query,
            output_directory,
            output_file: PathBuf::from("queries_mapped.txt"),
            verbose: false,
        })
    }

    #[test]
    fn test_translate() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let queries = "TX2 3\nTX1 4\nTX1 0\nTX2 3\n";
        let args = setup(dir.path(), queries)?;

        translate(&args)?;

        let output = std::fs::read_to_string(args.output_directory.join(&args.output_file))?;
        assert_eq!(output.lines().count(), queries.lines().count());
        assert_eq!(
            output,
            "TX2\t3\tchr2\t1006\nTX1\t4\tchr1\t104\nTX1\t0\tchr1\t100\nTX2\t3\tchr2\t1006\n"
        );

        Ok(())
    }

    #[test]
    fn test_unknown_transcript() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let args = setup(dir.path(), "TX1 1\nTX9 1\n")?;

        let err = translate(&args).unwrap_err();
        assert!(format!("{err:#}").contains("TX9"));
        assert!(!args.output_directory.join(&args.output_file).exists());

        Ok(())
    }

    #[test]
    fn test_missing_query_file() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let mut args = setup(dir.path(), "TX1 1\n")?;
        args.query = dir.path().join("missing.txt");

        assert!(translate(&args).is_err());
        assert!(!args.output_directory.join(&args.output_file).exists());

        Ok(())
    }
}
