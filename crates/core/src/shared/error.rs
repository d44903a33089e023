use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a pip-counting run.
///
/// A missing input file is not an error: it is reported as
/// [`CountOutcome::MissingInput`](crate::pipeline::count_pips_use_case::CountOutcome).
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("failed to decode image {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to create output directory {path}: {source}")]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode image {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to persist image to {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("die boundary has zero area; its centroid is undefined")]
    DegenerateContour,
}
