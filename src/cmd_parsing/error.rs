// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use thiserror::Error;

use super::NUM_SUBBANDS;

/// Errors associated with mining settings out of instrument command strings.
#[derive(Error, Debug, PartialEq)]
pub enum CmdParseError {
    #[error("\"{got}\" is not a beamctl command")]
    NotABeamctlCommand { got: String },

    #[error("Subband selection \"{got}\": could not parse \"{part}\" as a subband number")]
    UnparsableSubband { got: String, part: String },

    #[error("Subband selection \"{got}\" is empty")]
    EmptySubbandSelection { got: String },

    #[error("Subband range {lo}:{hi} runs backwards")]
    ReversedSubbandRange { lo: u16, hi: u16 },

    #[error("Subband {subband} is beyond the RSP's {NUM_SUBBANDS} subbands")]
    SubbandOutOfRange { subband: u16 },

    #[error("Pointing \"{got}\" does not have the form lon,lat,REFSYS")]
    InvalidPointing { got: String },

    #[error("Attempted to use bit mode {got}, but the RCUs only do 4, 8 or 16 bits")]
    InvalidBitMode { got: String },

    #[error("Could not parse \"{got}\" (the value of --{opt}) as a number")]
    UnparsableNumber { opt: &'static str, got: String },
}
