// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to summarise a recorded observation session: a directory of paired
//! `.h`/`.dat` files, typically one pair per crosslet subband visited.

use std::path::{Path, PathBuf};

use clap::Parser;
use itertools::Itertools;
use log::info;

use super::ObsheaderError;
use crate::{
    cmd_parsing::ObservationSettings, filenames::pair_session_files, header::read_header_file,
};

/// Summarise the recorded files of an observation session directory.
#[derive(Parser, Debug)]
pub(super) struct SummaryArgs {
    /// Path to the session directory.
    #[clap(name = "SESSION_DIR", parse(from_os_str))]
    dir: PathBuf,
}

impl SummaryArgs {
    pub(super) fn run(&self) -> Result<(), ObsheaderError> {
        summarise(&self.dir)
    }
}

fn summarise(dir: &Path) -> Result<(), ObsheaderError> {
    let entries = pair_session_files(dir)?;
    if entries.is_empty() {
        info!("No observation files in {}", dir.display());
        return Ok(());
    }

    let mut xc_subbands = vec![];
    for entry in &entries {
        let header = read_header_file(&entry.h_file)?;
        let settings = ObservationSettings::from_header(&header)?;
        if let Some(xc_subband) = settings.xc_subband {
            xc_subbands.push(xc_subband);
        }
    }

    info!("{}:", dir.display());
    info!("    {} file pairs", entries.len());

    // `pair_session_files` returns chronological order.
    let first = &entries[0];
    let last = &entries[entries.len() - 1];
    let span = last.obstime - first.obstime;
    info!(
        "    Session span: {} to {} ({} s)",
        first.obstime,
        last.obstime,
        span.num_seconds()
    );
    if entries.len() > 1 {
        info!(
            "    Mean cadence: {:.2} s per file",
            span.num_seconds() as f64 / entries.len() as f64
        );
    }

    if !xc_subbands.is_empty() {
        let unique: Vec<u16> = xc_subbands.iter().copied().sorted().dedup().collect();
        info!("    Crosslet subbands covered: {}", unique.iter().join(", "));
        info!(
            "    Mean visits per subband: {:.2}",
            xc_subbands.len() as f64 / unique.len() as f64
        );
    }

    Ok(())
}
