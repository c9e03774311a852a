// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to read in observation header files.

use std::{fs::File, io::BufReader, path::Path, str::FromStr};

use log::debug;
use serde::Deserialize;
use vec1::Vec1;

use super::{
    error::{HeaderError, ParseHeaderError, ValidateHeaderError},
    LdatType, ObservationHeader, RE_HEADER_VERSION,
};

/// The header mapping as serde sees it. Everything is optional here so that
/// a missing field surfaces as a validation error rather than a yaml error;
/// unknown keys (newer format revisions carry more of them) are ignored.
#[derive(Debug, Deserialize)]
struct TmpHeader {
    beamctl_cmds: Option<Vec<String>>,
    filenametime: Option<String>,
    ldat_type: Option<String>,
    rcusetup_cmds: Option<Vec<String>>,
    rspctl_cmds: Option<Vec<String>>,
}

/// Read an [`ObservationHeader`] from a buffer of yaml. The format revision
/// is taken from the `# Header version N` comment, which yaml parsing alone
/// would discard.
pub fn header_from_yaml<T: std::io::BufRead>(buf: &mut T) -> Result<ObservationHeader, HeaderError> {
    let mut contents = String::new();
    buf.read_to_string(&mut contents)?;

    let header_version = header_version_from_comments(&contents)?;
    let tmp: TmpHeader = serde_yaml::from_str(&contents).map_err(ParseHeaderError::from)?;

    let beamctl_cmds = required_cmds(tmp.beamctl_cmds, "beamctl_cmds")?;
    let filenametime = tmp.filenametime.ok_or(ValidateHeaderError::MissingField {
        field: "filenametime",
    })?;
    let ldat_type = {
        let s = tmp.ldat_type.ok_or(ValidateHeaderError::MissingField {
            field: "ldat_type",
        })?;
        LdatType::from_str(&s).map_err(|_| ValidateHeaderError::UnknownLdatType { got: s })?
    };
    let rcusetup_cmds = required_cmds(tmp.rcusetup_cmds, "rcusetup_cmds")?;
    let rspctl_cmds = required_cmds(tmp.rspctl_cmds, "rspctl_cmds")?;

    let header = ObservationHeader::new(
        header_version,
        beamctl_cmds,
        filenametime,
        ldat_type,
        rcusetup_cmds,
        rspctl_cmds,
    )?;
    Ok(header)
}

/// Given the path to an observation header file, return an
/// [`ObservationHeader`].
pub fn read_header_file<P: AsRef<Path>>(path: P) -> Result<ObservationHeader, HeaderError> {
    fn inner(path: &Path) -> Result<ObservationHeader, HeaderError> {
        debug!("Attempting to read header file {}", path.display());
        let mut buf = BufReader::new(File::open(path)?);
        header_from_yaml(&mut buf)
    }
    inner(path.as_ref())
}

/// Scan the comment lines for the format revision.
fn header_version_from_comments(contents: &str) -> Result<u32, ValidateHeaderError> {
    for line in contents.lines() {
        if !line.starts_with('#') {
            continue;
        }
        if let Some(caps) = RE_HEADER_VERSION.captures(line) {
            let got = &caps[1];
            return got
                .parse()
                .map_err(|_| ValidateHeaderError::InvalidHeaderVersion {
                    got: got.to_string(),
                });
        }
    }
    Err(ValidateHeaderError::MissingHeaderVersion)
}

fn required_cmds(
    cmds: Option<Vec<String>>,
    field: &'static str,
) -> Result<Vec1<String>, ValidateHeaderError> {
    let cmds = cmds.ok_or(ValidateHeaderError::MissingField { field })?;
    Vec1::try_from_vec(cmds).map_err(|_| ValidateHeaderError::NoCommands { field })
}
