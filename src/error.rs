use snafu::Snafu;
use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))] // Make creatable enum variants crate-visible
pub enum Error {
    #[snafu(display("Usage: {} /path/to/needle /path/to/haystack", bin_name))]
    CliArgs { bin_name: String },
    #[snafu(display("Error while mapping needle file {}: {}", path.display(), source))]
    NeedleMap {
        path: PathBuf,
        source: searchb_core::Error,
    },
    #[snafu(display("Error while mapping haystack file {}: {}", path.display(), source))]
    HaystackMap {
        path: PathBuf,
        source: searchb_core::Error,
    },
}
