// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests for `obsheader verify`.

use tempfile::TempDir;

use crate::*;

#[test]
fn verify_prints_header_stats() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let header = write_file_in_dir("20230111_072042_xst.h", tmp_dir.path(), XST_HEADER);

    let result = obsheader().arg("verify").arg(&header).ok();
    assert!(result.is_ok());
    let (stdout, _) = get_cmd_output(result);

    assert!(stdout.contains("20230111_072042_xst.h"));
    assert!(stdout.contains("Header version 4"));
    assert!(stdout.contains("xst recorded at 2023-01-11 07:20:42"));
    assert!(stdout.contains("1 beamctl, 1 rcusetup, 2 rspctl commands"));
    assert!(stdout.contains("Bit mode: 8"));
    assert!(stdout.contains("Beamlet subbands: 51:461"));
    assert!(stdout.contains("Crosslet subband: 284"));
}

#[test]
fn verify_keeps_going_past_a_bad_header() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    let bad = write_file_in_dir(
        "20230111_072042_xst.h",
        tmp_dir.path(),
        &XST_HEADER.replace("filenametime: '20230111_072042'\n", ""),
    );
    let good = write_file_in_dir("20230111_072100_xst.h", tmp_dir.path(), XST_HEADER);

    let result = obsheader().arg("verify").arg(&bad).arg(&good).ok();
    // A bad header is reported, not fatal.
    assert!(result.is_ok());
    let (stdout, _) = get_cmd_output(result);

    assert!(stdout.contains("Header field filenametime is missing"));
    assert!(stdout.contains("20230111_072100_xst.h"));
    assert!(stdout.contains("Header version 4"));
}

#[test]
fn verify_without_files_fails() {
    let result = obsheader().arg("verify").ok();
    assert!(result.is_err());
    let (stdout, _) = get_cmd_output(result);
    assert!(stdout.contains("No header files were supplied!"));
}
