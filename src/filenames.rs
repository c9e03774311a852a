// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to parse observation artefact file names. Every recording leaves a
//! `<YYYYMMDD_HHMMSS>_<ldat_type>.dat` next to a `.h` header with the same
//! stem, and a capture directory is expected to hold one header per dump.

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use chrono::NaiveDateTime;
use log::warn;
use regex::Regex;
use thiserror::Error;

use crate::{
    glob::{get_all_matches_from_glob, GlobError},
    header::{LdatType, FILENAMETIME_FORMAT, LDAT_TYPES_COMMA_SEPARATED},
};

lazy_static::lazy_static! {
    static ref RE_OBS_FILE: Regex = Regex::new(r"^(\d{8}_\d{6})_([a-z]+)\.(h|dat)$").unwrap();
}

/// The pieces of an observation artefact file name.
#[derive(Debug, Clone, PartialEq)]
pub struct ObsFileName {
    pub obstime: NaiveDateTime,
    pub filenametime: String,
    pub ldat_type: LdatType,
}

/// Parse a file name of the form `<YYYYMMDD_HHMMSS>_<ldat_type>.[h|dat]`.
pub fn parse_obs_file_name<P: AsRef<Path>>(path: P) -> Result<ObsFileName, FilenamesError> {
    fn inner(path: &Path) -> Result<ObsFileName, FilenamesError> {
        let not_obs_file = || FilenamesError::NotObsFile {
            path: path.to_path_buf(),
        };
        let name = path
            .file_name()
            .and_then(|os_str| os_str.to_str())
            .ok_or_else(not_obs_file)?;
        let caps = RE_OBS_FILE.captures(name).ok_or_else(not_obs_file)?;

        let filenametime = caps[1].to_string();
        let obstime = NaiveDateTime::parse_from_str(&filenametime, FILENAMETIME_FORMAT).map_err(
            |_| FilenamesError::ImpossibleTimestamp {
                path: path.to_path_buf(),
            },
        )?;
        let ldat_type =
            LdatType::from_str(&caps[2]).map_err(|_| FilenamesError::UnknownLdatType {
                path: path.to_path_buf(),
            })?;

        Ok(ObsFileName {
            obstime,
            filenametime,
            ldat_type,
        })
    }
    inner(path.as_ref())
}

/// Find the header file describing a capture directory. Capture directories
/// are supposed to hold exactly one; if sloppy cleanup left more behind, the
/// earliest is used, as the realtime tooling does.
pub fn find_header_in_dir<P: AsRef<Path>>(dir: P) -> Result<PathBuf, FilenamesError> {
    let dir = dir.as_ref();
    let mut matches = get_all_matches_from_glob(&format!("{}/*.h", dir.display()))?;
    match matches.len() {
        0 => Err(FilenamesError::NoHeaderFound {
            dir: dir.to_path_buf(),
        }),
        1 => Ok(matches.swap_remove(0)),
        n => {
            warn!(
                "{} header files in {}; using the earliest",
                n,
                dir.display()
            );
            Ok(matches.swap_remove(0))
        }
    }
}

/// One recorded dump of a session: a header and the data file it describes.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionEntry {
    pub h_file: PathBuf,
    pub dat_file: PathBuf,
    pub obstime: NaiveDateTime,
}

/// Pair up the `.h`/`.dat` files of a recorded session directory, in
/// chronological order. A count mismatch is an error; a pair whose two
/// timestamps disagree is kept, with a warning, since the data is still
/// usable.
pub fn pair_session_files<P: AsRef<Path>>(dir: P) -> Result<Vec<SessionEntry>, FilenamesError> {
    let dir = dir.as_ref();
    let h_files = get_all_matches_from_glob(&format!("{}/*.h", dir.display()))?;
    let dat_files = get_all_matches_from_glob(&format!("{}/*.dat", dir.display()))?;
    if h_files.len() != dat_files.len() {
        return Err(FilenamesError::MismatchedCounts {
            num_dats: dat_files.len(),
            num_headers: h_files.len(),
        });
    }

    let mut entries = Vec::with_capacity(h_files.len());
    for (h_file, dat_file) in h_files.into_iter().zip(dat_files) {
        let h_name = parse_obs_file_name(&h_file)?;
        let dat_name = parse_obs_file_name(&dat_file)?;
        if h_name.obstime != dat_name.obstime {
            warn!(
                "Timestamps do not match for {} and {}",
                h_file.display(),
                dat_file.display()
            );
        }
        entries.push(SessionEntry {
            h_file,
            dat_file,
            obstime: dat_name.obstime,
        });
    }
    Ok(entries)
}

/// Error type associated with observation file names and session
/// directories.
#[derive(Error, Debug)]
pub enum FilenamesError {
    #[error("{}: not a <YYYYMMDD_HHMMSS>_<ldat_type>.[h|dat] observation file name", path.display())]
    NotObsFile { path: PathBuf },

    #[error("{}: the timestamp in the file name is not a real date and time", path.display())]
    ImpossibleTimestamp { path: PathBuf },

    #[error("{}: unknown ldat_type in the file name; expected one of: {}", path.display(), *LDAT_TYPES_COMMA_SEPARATED)]
    UnknownLdatType { path: PathBuf },

    #[error("No observation header (.h) file found in {}", dir.display())]
    NoHeaderFound { dir: PathBuf },

    #[error("Mismatch in the number of .dat and .h files: {num_dats} .dat vs {num_headers} .h")]
    MismatchedCounts { num_dats: usize, num_headers: usize },

    #[error(transparent)]
    Glob(#[from] GlobError),
}
