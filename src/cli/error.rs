// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Error type for all obsheader-related errors. This should be the *only*
//! error enum that is publicly visible.

use thiserror::Error;

use crate::{
    cmd_parsing::CmdParseError,
    filenames::FilenamesError,
    glob::GlobError,
    header::{HeaderError, ValidateHeaderError, WriteHeaderError},
};

/// The *only* publicly visible error from obsheader.
#[derive(Error, Debug)]
pub enum ObsheaderError {
    /// An error related to reading, validating or writing a header file.
    #[error("{0}")]
    Header(String),

    /// An error related to the instrument command strings inside a header.
    #[error("{0}")]
    Commands(String),

    /// An error related to observation file names and session directories.
    #[error("{0}")]
    Session(String),

    /// A generic error that can't be clarified further, e.g. IO errors.
    #[error("{0}")]
    Generic(String),
}

// When changing the error propagation below, ensure `Self::from(e)` uses the
// correct `e`!

impl From<HeaderError> for ObsheaderError {
    fn from(e: HeaderError) -> Self {
        match e {
            HeaderError::Parse(_) | HeaderError::Validation(_) => Self::Header(e.to_string()),
            HeaderError::IO(e) => Self::from(e),
        }
    }
}

impl From<ValidateHeaderError> for ObsheaderError {
    fn from(e: ValidateHeaderError) -> Self {
        Self::Header(e.to_string())
    }
}

impl From<WriteHeaderError> for ObsheaderError {
    fn from(e: WriteHeaderError) -> Self {
        match e {
            WriteHeaderError::Yaml(_) => Self::Header(e.to_string()),
            WriteHeaderError::IO(e) => Self::from(e),
        }
    }
}

impl From<CmdParseError> for ObsheaderError {
    fn from(e: CmdParseError) -> Self {
        Self::Commands(e.to_string())
    }
}

impl From<FilenamesError> for ObsheaderError {
    fn from(e: FilenamesError) -> Self {
        Self::Session(e.to_string())
    }
}

impl From<GlobError> for ObsheaderError {
    fn from(e: GlobError) -> Self {
        Self::Session(e.to_string())
    }
}

impl From<std::io::Error> for ObsheaderError {
    fn from(e: std::io::Error) -> Self {
        Self::Generic(e.to_string())
    }
}
