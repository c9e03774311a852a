// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to verify observation header files.

use std::path::{Path, PathBuf};

use clap::Parser;
use log::info;

use super::ObsheaderError;
use crate::{cmd_parsing::ObservationSettings, header::read_header_file};

/// Verify that LCU observation header files can be read by obsheader.
#[derive(Parser, Debug)]
pub(super) struct VerifyArgs {
    /// Path to the header file(s) to be verified.
    #[clap(name = "HEADER_FILES", parse(from_os_str))]
    headers: Vec<PathBuf>,
}

impl VerifyArgs {
    pub(super) fn run(&self) -> Result<(), ObsheaderError> {
        verify(&self.headers)
    }
}

/// Read and print stats out for each input header. If a header couldn't be
/// read, print the error, and continue trying to read the other headers.
fn verify<P: AsRef<Path>>(headers: &[P]) -> Result<(), ObsheaderError> {
    if headers.is_empty() {
        info!("No header files were supplied!");
        std::process::exit(1);
    }

    for header in headers {
        info!("{}:", header.as_ref().display());
        let header = match read_header_file(header) {
            Ok(header) => header,
            Err(e) => {
                info!("{}", e);
                info!("");
                continue;
            }
        };

        info!("    Header version {}", header.header_version);
        info!("    {} recorded at {}", header.ldat_type, header.obstime());
        info!(
            "    {} beamctl, {} rcusetup, {} rspctl commands",
            header.beamctl_cmds.len(),
            header.rcusetup_cmds.len(),
            header.rspctl_cmds.len()
        );
        match ObservationSettings::from_header(&header) {
            Ok(settings) => {
                if let Some(bit_mode) = settings.bit_mode {
                    info!("    Bit mode: {}", bit_mode);
                }
                if let Some(subbands) = settings.subbands {
                    info!("    Beamlet subbands: {}", subbands);
                }
                if let Some(xc_subband) = settings.xc_subband {
                    info!("    Crosslet subband: {}", xc_subband);
                }
            }
            Err(e) => info!("    Could not interpret the command strings: {}", e),
        }
        info!("");
    }

    Ok(())
}
