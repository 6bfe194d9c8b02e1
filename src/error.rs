use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Failed to open the record file.
    #[error("failed to open record file {0:?}")]
    FileOpen(PathBuf, #[source] io::Error),
    /// Failed to read a slot from the record file.
    #[error("failed to read record file")]
    Read(#[source] io::Error),
    /// Failed to write a slot to the record file.
    #[error("failed to write record file")]
    Write(#[source] io::Error),
    /// Failed to reposition within the record file.
    #[error("failed to seek in record file")]
    Seek(#[source] io::Error),
}
