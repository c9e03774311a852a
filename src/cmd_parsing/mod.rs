// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to mine settings out of the instrument command strings stored in a
//! header. The commands themselves are opaque directives for `beamctl` and
//! `rspctl`; nothing here executes them, but the tooling downstream needs
//! the subband selection, bit mode and friends without asking the station.

mod error;
#[cfg(test)]
mod tests;

pub use error::CmdParseError;

use std::path::PathBuf;

use regex::Regex;
use vec1::Vec1;

use crate::header::ObservationHeader;

/// How many subbands an RSP board makes out of its sampling band.
pub const NUM_SUBBANDS: u16 = 512;

lazy_static::lazy_static! {
    static ref RE_LONG_OPT: Regex = Regex::new(r"--([A-Za-z][A-Za-z0-9_-]*)=(\S+)").unwrap();
}

/// The value of a `--key=value` option on a command string, if present.
pub fn long_opt<'a>(cmd: &'a str, key: &str) -> Option<&'a str> {
    RE_LONG_OPT
        .captures_iter(cmd)
        .find(|caps| &caps[1] == key)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str())
}

/// The extremes of a subband selection. The consuming tools only ever care
/// about the bounds, not which subbands inside them were picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubbandRange {
    pub min: u16,
    pub max: u16,
}

impl std::fmt::Display for SubbandRange {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}:{}", self.min, self.max)
    }
}

impl SubbandRange {
    fn fold(self, other: SubbandRange) -> SubbandRange {
        SubbandRange {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

/// Parse a beamctl subband selection: `51:461`, a single subband, or a
/// comma-separated union of both.
pub fn parse_subband_selection(selection: &str) -> Result<SubbandRange, CmdParseError> {
    let parse = |part: &str| -> Result<u16, CmdParseError> {
        let subband = part
            .trim()
            .parse()
            .map_err(|_| CmdParseError::UnparsableSubband {
                got: selection.to_string(),
                part: part.to_string(),
            })?;
        if subband >= NUM_SUBBANDS {
            return Err(CmdParseError::SubbandOutOfRange { subband });
        }
        Ok(subband)
    };

    let mut range: Option<SubbandRange> = None;
    for part in selection.split(',').filter(|p| !p.trim().is_empty()) {
        let part_range = match part.split_once(':') {
            Some((lo, hi)) => {
                let (lo, hi) = (parse(lo)?, parse(hi)?);
                if lo > hi {
                    return Err(CmdParseError::ReversedSubbandRange { lo, hi });
                }
                SubbandRange { min: lo, max: hi }
            }
            None => {
                let sb = parse(part)?;
                SubbandRange { min: sb, max: sb }
            }
        };
        range = Some(match range {
            Some(r) => r.fold(part_range),
            None => part_range,
        });
    }

    range.ok_or_else(|| CmdParseError::EmptySubbandSelection {
        got: selection.to_string(),
    })
}

/// A beamctl pointing direction, e.g. `0.0,0.0,SUN`: two angles and the
/// reference system they are expressed in.
#[derive(Debug, Clone, PartialEq)]
pub struct Pointing {
    pub lon: f64,
    pub lat: f64,
    pub ref_sys: String,
}

/// Parse an `--anadir`/`--digdir` value.
pub fn parse_pointing(dir: &str) -> Result<Pointing, CmdParseError> {
    let invalid = || CmdParseError::InvalidPointing {
        got: dir.to_string(),
    };
    match dir.split(',').collect::<Vec<_>>().as_slice() {
        [lon, lat, ref_sys] if !ref_sys.trim().is_empty() => Ok(Pointing {
            lon: lon.trim().parse().map_err(|_| invalid())?,
            lat: lat.trim().parse().map_err(|_| invalid())?,
            ref_sys: ref_sys.trim().to_string(),
        }),
        _ => Err(invalid()),
    }
}

/// The beam-forming settings of a single beamctl command. Everything is
/// optional; an operator-edited command may omit any of them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BeamctlSettings {
    pub antenna_set: Option<String>,
    pub rcus: Option<String>,
    pub band: Option<String>,
    pub beamlets: Option<String>,
    pub subbands: Option<SubbandRange>,
    pub anadir: Option<Pointing>,
    pub digdir: Option<Pointing>,
}

impl BeamctlSettings {
    /// Parse one beamctl command string. Wrapper prefixes like `nohup` are
    /// tolerated, as some observation scripts carry them.
    pub fn parse(cmd: &str) -> Result<BeamctlSettings, CmdParseError> {
        if !cmd.split_ascii_whitespace().any(|token| token == "beamctl") {
            return Err(CmdParseError::NotABeamctlCommand {
                got: cmd.to_string(),
            });
        }

        Ok(BeamctlSettings {
            antenna_set: long_opt(cmd, "antennaset").map(str::to_string),
            rcus: long_opt(cmd, "rcus").map(str::to_string),
            band: long_opt(cmd, "band").map(str::to_string),
            beamlets: long_opt(cmd, "beamlets").map(str::to_string),
            subbands: long_opt(cmd, "subbands")
                .map(parse_subband_selection)
                .transpose()?,
            anadir: long_opt(cmd, "anadir").map(parse_pointing).transpose()?,
            digdir: long_opt(cmd, "digdir").map(parse_pointing).transpose()?,
        })
    }
}

/// The first `--bitmode` found on the supplied commands.
pub fn bit_mode<'a, I: IntoIterator<Item = &'a str>>(
    cmds: I,
) -> Result<Option<u8>, CmdParseError> {
    for cmd in cmds {
        if let Some(value) = long_opt(cmd, "bitmode") {
            let mode: u8 = value.parse().map_err(|_| CmdParseError::InvalidBitMode {
                got: value.to_string(),
            })?;
            if ![4, 8, 16].contains(&mode) {
                return Err(CmdParseError::InvalidBitMode {
                    got: value.to_string(),
                });
            }
            return Ok(Some(mode));
        }
    }
    Ok(None)
}

/// The first `--xcsubband` found on the supplied commands: the subband the
/// crosslet statistics were recorded on.
pub fn xc_subband<'a, I: IntoIterator<Item = &'a str>>(
    cmds: I,
) -> Result<Option<u16>, CmdParseError> {
    for cmd in cmds {
        if let Some(value) = long_opt(cmd, "xcsubband") {
            let subband: u16 =
                value
                    .parse()
                    .map_err(|_| CmdParseError::UnparsableNumber {
                        opt: "xcsubband",
                        got: value.to_string(),
                    })?;
            if subband >= NUM_SUBBANDS {
                return Err(CmdParseError::SubbandOutOfRange { subband });
            }
            return Ok(Some(subband));
        }
    }
    Ok(None)
}

/// The parameters of an `rspctl --xcstatistics` capture command.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct XcStatistics {
    pub integration_s: Option<f64>,
    pub duration_s: Option<f64>,
    pub directory: Option<PathBuf>,
}

/// The first `--xcstatistics` command found on the supplied commands.
pub fn xc_statistics<'a, I: IntoIterator<Item = &'a str>>(
    cmds: I,
) -> Result<Option<XcStatistics>, CmdParseError> {
    let parse_seconds = |cmd: &str, opt: &'static str| -> Result<Option<f64>, CmdParseError> {
        long_opt(cmd, opt)
            .map(|value| {
                value.parse().map_err(|_| CmdParseError::UnparsableNumber {
                    opt,
                    got: value.to_string(),
                })
            })
            .transpose()
    };

    for cmd in cmds {
        if !cmd
            .split_ascii_whitespace()
            .any(|token| token == "--xcstatistics")
        {
            continue;
        }
        return Ok(Some(XcStatistics {
            integration_s: parse_seconds(cmd, "integration")?,
            duration_s: parse_seconds(cmd, "duration")?,
            directory: long_opt(cmd, "directory").map(PathBuf::from),
        }));
    }
    Ok(None)
}

/// Everything the consuming tools mine out of a header's command strings,
/// in one place.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationSettings {
    /// One entry per beamctl command, in source order.
    pub beams: Vec1<BeamctlSettings>,

    pub bit_mode: Option<u8>,

    pub xc_subband: Option<u16>,

    pub xc_statistics: Option<XcStatistics>,

    /// The union of the beams' subband selections.
    pub subbands: Option<SubbandRange>,
}

impl ObservationSettings {
    pub fn from_header(header: &ObservationHeader) -> Result<ObservationSettings, CmdParseError> {
        let beams = header
            .beamctl_cmds
            .try_mapped_ref(|cmd| BeamctlSettings::parse(cmd))?;
        // A bitmode on rcusetup_cmds wins; legacy headers put it on
        // rspctl_cmds instead.
        let bit_mode = bit_mode(
            header
                .rcusetup_cmds
                .iter()
                .chain(header.rspctl_cmds.iter())
                .map(String::as_str),
        )?;
        let xc_subband = xc_subband(header.rspctl_cmds.iter().map(String::as_str))?;
        let xc_statistics = xc_statistics(header.rspctl_cmds.iter().map(String::as_str))?;
        let subbands = beams
            .iter()
            .filter_map(|beam| beam.subbands)
            .reduce(SubbandRange::fold);

        Ok(ObservationSettings {
            beams,
            bit_mode,
            xc_subband,
            xc_statistics,
            subbands,
        })
    }
}
