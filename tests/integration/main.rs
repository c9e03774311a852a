// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests.
//!
//! Some help for laying out these tests was taken from:
//! https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html

mod summary;
mod verify;

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Output;
use std::str::from_utf8;

use assert_cmd::{output::OutputError, Command};
use indoc::indoc;

/// A header captured during a solar xst run, verbatim.
const XST_HEADER: &str = indoc! {r#"
    # LCU obs settings, header file
    # Header version 4
    beamctl_cmds:
    - beamctl --antennaset=LBA_INNER --rcus=0:191 --band=10_90 --beamlets=0:410 --subbands=51:461 --anadir=0.0,0.0,SUN --digdir=0.0,0.0,SUN
    filenametime: '20230111_072042'
    ldat_type: xst
    rcusetup_cmds:
    - rspctl --bitmode=8
    rspctl_cmds:
    - rspctl --xcsubband=284
    - rspctl --xcstatistics --integration=1 --duration=1 --directory=/data/home/user1/.cache/ilisa/BSX_data/
"#};

fn obsheader() -> Command {
    Command::cargo_bin("obsheader").unwrap()
}

fn get_cmd_output(result: Result<Output, OutputError>) -> (String, String) {
    let output = match result {
        Ok(o) => o,
        Err(o) => o.as_output().unwrap().clone(),
    };
    (
        from_utf8(&output.stdout).unwrap().to_string(),
        from_utf8(&output.stderr).unwrap().to_string(),
    )
}

fn write_file_in_dir<T: AsRef<Path>, U: AsRef<Path>>(filename: T, dir: U, contents: &str) -> PathBuf {
    let path = dir.as_ref().join(filename);
    let mut f = File::create(&path).expect("couldn't make file");
    f.write_all(contents.as_bytes()).expect("couldn't write file");
    path
}
