// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Code to write out observation header files in the on-disk format the LCU
//! itself uses: the banner comment, the format-revision comment, then the
//! yaml mapping with its keys in the canonical order.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use log::trace;
use serde::Serialize;

use super::{error::WriteHeaderError, ObservationHeader};

// Field order here is the key order in the emitted yaml.
#[derive(Serialize)]
struct TmpHeaderRef<'a> {
    beamctl_cmds: &'a [String],
    filenametime: &'a str,
    ldat_type: &'a str,
    rcusetup_cmds: &'a [String],
    rspctl_cmds: &'a [String],
}

/// Write a header to the supplied buffer. A written header reads back equal
/// to the original.
pub fn header_to_yaml<T: std::io::Write>(
    header: &ObservationHeader,
    buf: &mut T,
) -> Result<(), WriteHeaderError> {
    writeln!(buf, "# LCU obs settings, header file")?;
    writeln!(buf, "# Header version {}", header.header_version)?;

    let tmp = TmpHeaderRef {
        beamctl_cmds: &header.beamctl_cmds,
        filenametime: &header.filenametime,
        ldat_type: header.ldat_type.into(),
        rcusetup_cmds: &header.rcusetup_cmds,
        rspctl_cmds: &header.rspctl_cmds,
    };
    serde_yaml::to_writer(buf, &tmp)?;
    Ok(())
}

/// Write a header into `dir` under its conventional file name
/// (`<filenametime>_<ldat_type>.h`), returning the path written.
pub fn write_header_file<P: AsRef<Path>>(
    header: &ObservationHeader,
    dir: P,
) -> Result<PathBuf, WriteHeaderError> {
    let path = dir.as_ref().join(header.header_file_name());
    trace!("Writing header file {}", path.display());
    let mut buf = BufWriter::new(File::create(&path)?);
    header_to_yaml(header, &mut buf)?;
    buf.flush()?;
    Ok(path)
}
