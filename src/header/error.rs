// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

use super::LDAT_TYPES_COMMA_SEPARATED;

/// Errors associated with reading in an observation header.
#[derive(Error, Debug)]
pub enum HeaderError {
    #[error(transparent)]
    Parse(#[from] ParseHeaderError),

    #[error(transparent)]
    Validation(#[from] ValidateHeaderError),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}

/// The document itself could not be understood.
#[derive(Error, Debug)]
pub enum ParseHeaderError {
    #[error("Could not deserialise the header contents as yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// The document was well-formed, but a required field is missing or has a
/// value the instrument could never have written.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidateHeaderError {
    #[error("Header field {field} is missing")]
    MissingField { field: &'static str },

    #[error("Header field {field} must list at least one command")]
    NoCommands { field: &'static str },

    #[error("Header field {field} contains an empty command string")]
    EmptyCommand { field: &'static str },

    #[error("The header has no \"# Header version N\" comment")]
    MissingHeaderVersion,

    #[error("Could not parse \"{got}\" as a header version")]
    InvalidHeaderVersion { got: String },

    #[error("filenametime \"{got}\" does not have the form YYYYMMDD_HHMMSS")]
    InvalidFilenametime { got: String },

    #[error("filenametime \"{got}\" is not a real date and time")]
    ImpossibleObstime { got: String },

    #[error("Unknown ldat_type \"{got}\"; expected one of: {}", *LDAT_TYPES_COMMA_SEPARATED)]
    UnknownLdatType { got: String },
}

/// Errors associated with writing out an observation header.
#[derive(Error, Debug)]
pub enum WriteHeaderError {
    #[error("Could not serialise the header as yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    IO(#[from] std::io::Error),
}
