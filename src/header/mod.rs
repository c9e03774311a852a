// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code for LCU observation header (.h) files. Each raw statistics dump a
//! LOFAR station records is accompanied by one of these: a small YAML
//! document listing the commands that were issued to the instrument, the
//! kind of data product recorded and the timestamp used in the file names.

mod error;
mod read;
mod write;

pub use error::{HeaderError, ParseHeaderError, ValidateHeaderError, WriteHeaderError};
pub use read::{header_from_yaml, read_header_file};
pub use write::{header_to_yaml, write_header_file};

use chrono::NaiveDateTime;
use itertools::Itertools;
use regex::Regex;
use strum::IntoEnumIterator;
use vec1::Vec1;

/// The `strftime` format of the timestamp used in header contents and file
/// names, e.g. `20230111_072042`.
pub const FILENAMETIME_FORMAT: &str = "%Y%m%d_%H%M%S";

lazy_static::lazy_static! {
    static ref RE_FILENAMETIME: Regex = Regex::new(r"^\d{8}_\d{6}$").unwrap();

    // The LCU puts the format revision in a comment, not in the mapping
    // itself.
    static ref RE_HEADER_VERSION: Regex = Regex::new(r"^#\s*Header version\s+(\d+)\s*$").unwrap();

    pub(crate) static ref LDAT_TYPES_COMMA_SEPARATED: String = LdatType::iter().join(", ");
}

/// All of the low-level data product ("ldat") types a station can record.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    strum_macros::Display,
    strum_macros::EnumIter,
    strum_macros::EnumString,
    strum_macros::IntoStaticStr,
)]
pub enum LdatType {
    /// Array covariance cube.
    #[strum(serialize = "acc")]
    Acc,

    /// Beamlet statistics.
    #[strum(serialize = "bst")]
    Bst,

    /// Subband statistics.
    #[strum(serialize = "sst")]
    Sst,

    /// Crosslet statistics.
    #[strum(serialize = "xst")]
    Xst,
}

/// The settings of one observation run, as read from an LCU header file.
/// Immutable once constructed; the command sequences keep their source order
/// because the instrument executed them in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationHeader {
    /// The format revision, from the `# Header version N` comment.
    pub header_version: u32,

    /// Beam-forming directives, passed opaquely to `beamctl`.
    pub beamctl_cmds: Vec1<String>,

    /// The `YYYYMMDD_HHMMSS` timestamp shared by this header and its data
    /// file, verbatim as it appeared in the document.
    pub filenametime: String,

    /// The kind of data product this header describes.
    pub ldat_type: LdatType,

    /// Receiver-unit setup directives.
    pub rcusetup_cmds: Vec1<String>,

    /// RSP board directives, including the data-capture command itself.
    pub rspctl_cmds: Vec1<String>,

    // `filenametime`, already parsed. Kept private so construction has to go
    // through `new`, which validates it.
    obstime: NaiveDateTime,
}

impl ObservationHeader {
    /// Construct a header, validating `filenametime` on the way in. The
    /// command sequences are guaranteed non-empty by their type, but any
    /// blank command string is rejected here.
    pub fn new(
        header_version: u32,
        beamctl_cmds: Vec1<String>,
        filenametime: String,
        ldat_type: LdatType,
        rcusetup_cmds: Vec1<String>,
        rspctl_cmds: Vec1<String>,
    ) -> Result<ObservationHeader, ValidateHeaderError> {
        let obstime = parse_filenametime(&filenametime)?;
        for (field, cmds) in [
            ("beamctl_cmds", &beamctl_cmds),
            ("rcusetup_cmds", &rcusetup_cmds),
            ("rspctl_cmds", &rspctl_cmds),
        ] {
            if cmds.iter().any(|c| c.trim().is_empty()) {
                return Err(ValidateHeaderError::EmptyCommand { field });
            }
        }

        Ok(ObservationHeader {
            header_version,
            beamctl_cmds,
            filenametime,
            ldat_type,
            rcusetup_cmds,
            rspctl_cmds,
            obstime,
        })
    }

    /// The observation time encoded in `filenametime`.
    pub fn obstime(&self) -> NaiveDateTime {
        self.obstime
    }

    /// The file stem shared by this observation's artefacts, e.g.
    /// `20230111_072042_xst`.
    pub fn base_name(&self) -> String {
        format!("{}_{}", self.filenametime, self.ldat_type)
    }

    /// The name this header is stored under.
    pub fn header_file_name(&self) -> String {
        format!("{}.h", self.base_name())
    }

    /// The name of the raw data file this header describes.
    pub fn dat_file_name(&self) -> String {
        format!("{}.dat", self.base_name())
    }
}

/// Check a `filenametime` string lexically, then calendrically.
pub(crate) fn parse_filenametime(s: &str) -> Result<NaiveDateTime, ValidateHeaderError> {
    if !RE_FILENAMETIME.is_match(s) {
        return Err(ValidateHeaderError::InvalidFilenametime { got: s.to_string() });
    }
    NaiveDateTime::parse_from_str(s, FILENAMETIME_FORMAT)
        .map_err(|_| ValidateHeaderError::ImpossibleObstime { got: s.to_string() })
}
