// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Integration tests for `obsheader summary`.

use tempfile::TempDir;

use crate::*;

#[test]
fn summary_reports_a_recorded_session() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");

    // Two dumps a minute apart on different crosslet subbands.
    for (stem, xc_subband) in [
        ("20230111_072042_xst", 284),
        ("20230111_072142_xst", 285),
    ] {
        let filenametime = &stem[..15];
        let contents = XST_HEADER
            .replace("20230111_072042", filenametime)
            .replace("--xcsubband=284", &format!("--xcsubband={xc_subband}"));
        write_file_in_dir(format!("{stem}.h"), tmp_dir.path(), &contents);
        write_file_in_dir(format!("{stem}.dat"), tmp_dir.path(), "");
    }

    let result = obsheader().arg("summary").arg(tmp_dir.path()).ok();
    assert!(result.is_ok());
    let (stdout, _) = get_cmd_output(result);

    assert!(stdout.contains("2 file pairs"));
    assert!(stdout.contains("2023-01-11 07:20:42 to 2023-01-11 07:21:42 (60 s)"));
    assert!(stdout.contains("Crosslet subbands covered: 284, 285"));
    assert!(stdout.contains("Mean visits per subband: 1.00"));
}

#[test]
fn summary_of_an_unpaired_directory_fails() {
    let tmp_dir = TempDir::new().expect("couldn't make tmp dir");
    write_file_in_dir("20230111_072042_xst.h", tmp_dir.path(), XST_HEADER);
    // No .dat next to it.

    let result = obsheader().arg("summary").arg(tmp_dir.path()).ok();
    assert!(result.is_err());
    let (_, stderr) = get_cmd_output(result);
    assert!(stderr.contains("Mismatch in the number of .dat and .h files"));
}
