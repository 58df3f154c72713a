//! The command-line binary of the searchb project.
//!
//! Locate the first occurrence of the contents of a needle file inside a
//! haystack file. Both files are memory-mapped and compared byte for byte.
//! When the needle occurs, its lowest byte offset is printed in decimal on
//! the standard output and the process exits with status 0; when it does
//! not, nothing is printed and the status is 1.
//!
//! See the [searchb-core](../searchb_core/index.html) crate for
//! documentation about the file mapping and the search itself.

use error::*;
use searchb_core::{find_first, MappedFile};
use snafu::*;
use std::path::PathBuf;

mod error;

/// Exit status when the needle does not occur in the haystack.
const EXIT_NO_MATCH: i32 = 1;

/// Exit status for usage and I/O failures, distinct from a mere absence.
const EXIT_ERROR: i32 = 2;

/// Represents the expected parsed program arguments.
#[derive(Debug)]
struct Args {
    needle_path: PathBuf,
    haystack_path: PathBuf,
}

/// Parse the arguments and return an error if the wrong number is given.
fn parse_args() -> Result<Args> {
    const BIN_NAME_DEFAULT: &str = "searchb";
    let mut args = std::env::args();

    let bin_name = args.next().unwrap_or_else(|| BIN_NAME_DEFAULT.to_string());
    let cliargs_ctx = CliArgs {
        bin_name: &bin_name,
    };

    let needle_path = args.next().context(cliargs_ctx)?.into();
    let haystack_path = args.next().context(cliargs_ctx)?.into();

    // Make sure no more argument has been given
    if args.next().is_some() {
        None.context(cliargs_ctx)?;
    }

    Ok(Args {
        needle_path,
        haystack_path,
    })
}

/// Map both files and return the offset of the first match, if any.
fn run() -> Result<Option<usize>> {
    let args = parse_args()?;

    let needle = MappedFile::map(&args.needle_path).context(NeedleMap {
        path: &args.needle_path,
    })?;
    let haystack = MappedFile::map(&args.haystack_path).context(HaystackMap {
        path: &args.haystack_path,
    })?;

    Ok(find_first(haystack.as_bytes(), needle.as_bytes()))
}

fn main() {
    std::process::exit(match run() {
        Ok(Some(offset)) => {
            println!("{}", offset);
            0
        }
        Ok(None) => EXIT_NO_MATCH,
        Err(e) => {
            eprintln!("error: {}", e);
            EXIT_ERROR
        }
    })
}
