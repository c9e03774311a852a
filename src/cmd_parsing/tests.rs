// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;

use super::*;

const SOLAR_BEAMCTL: &str = "beamctl --antennaset=LBA_INNER --rcus=0:191 --band=10_90 --beamlets=0:410 --subbands=51:461 --anadir=0.0,0.0,SUN --digdir=0.0,0.0,SUN";

#[test]
fn long_opt_finds_values_and_nothing_else() {
    assert_eq!(long_opt(SOLAR_BEAMCTL, "band"), Some("10_90"));
    assert_eq!(long_opt(SOLAR_BEAMCTL, "rcus"), Some("0:191"));
    assert_eq!(long_opt(SOLAR_BEAMCTL, "integration"), None);
    // "band" must not match "antennaset" or vice versa.
    assert_eq!(long_opt("rspctl --bitmode=8", "bit"), None);
}

#[test]
fn solar_beamctl_parses_fully() {
    let beam = BeamctlSettings::parse(SOLAR_BEAMCTL).unwrap();
    assert_eq!(beam.antenna_set.as_deref(), Some("LBA_INNER"));
    assert_eq!(beam.rcus.as_deref(), Some("0:191"));
    assert_eq!(beam.band.as_deref(), Some("10_90"));
    assert_eq!(beam.beamlets.as_deref(), Some("0:410"));
    assert_eq!(beam.subbands, Some(SubbandRange { min: 51, max: 461 }));
    let sun = Pointing {
        lon: 0.0,
        lat: 0.0,
        ref_sys: "SUN".to_string(),
    };
    assert_eq!(beam.anadir, Some(sun.clone()));
    assert_eq!(beam.digdir, Some(sun));
}

#[test]
fn nohup_prefixed_beamctl_is_accepted() {
    let beam = BeamctlSettings::parse("nohup beamctl --subbands=100:200 &").unwrap();
    assert_eq!(beam.subbands, Some(SubbandRange { min: 100, max: 200 }));
    assert_eq!(beam.antenna_set, None);
}

#[test]
fn non_beamctl_command_is_rejected() {
    let err = BeamctlSettings::parse("rspctl --bitmode=8").unwrap_err();
    assert!(matches!(err, CmdParseError::NotABeamctlCommand { .. }));
}

#[test]
fn subband_selection_forms() {
    assert_eq!(
        parse_subband_selection("51:461").unwrap(),
        SubbandRange { min: 51, max: 461 }
    );
    assert_eq!(
        parse_subband_selection("284").unwrap(),
        SubbandRange { min: 284, max: 284 }
    );
    // Unions take the overall extremes.
    assert_eq!(
        parse_subband_selection("200,51:100,450").unwrap(),
        SubbandRange { min: 51, max: 450 }
    );
}

#[test]
fn bad_subband_selections() {
    assert!(matches!(
        parse_subband_selection("sixty"),
        Err(CmdParseError::UnparsableSubband { .. })
    ));
    assert!(matches!(
        parse_subband_selection(""),
        Err(CmdParseError::EmptySubbandSelection { .. })
    ));
    assert!(matches!(
        parse_subband_selection("461:51"),
        Err(CmdParseError::ReversedSubbandRange { lo: 461, hi: 51 })
    ));
    assert!(matches!(
        parse_subband_selection("512"),
        Err(CmdParseError::SubbandOutOfRange { subband: 512 })
    ));
    assert!(parse_subband_selection("511").is_ok());
}

#[test]
fn pointing_needs_two_angles_and_a_ref_sys() {
    let pointing = parse_pointing("6.123487,1.026515,J2000").unwrap();
    assert_eq!(pointing.lon, 6.123487);
    assert_eq!(pointing.lat, 1.026515);
    assert_eq!(pointing.ref_sys, "J2000");

    assert!(parse_pointing("0.0,0.0").is_err());
    assert!(parse_pointing("0.0,north,SUN").is_err());
    assert!(parse_pointing("0.0,0.0,").is_err());
}

#[test]
fn bit_mode_is_found_wherever_it_is() {
    assert_eq!(bit_mode(["rspctl --bitmode=8"]).unwrap(), Some(8));
    assert_eq!(
        bit_mode(["rspctl --wg=0", "rspctl --bitmode=16"]).unwrap(),
        Some(16)
    );
    assert_eq!(bit_mode(["rspctl --wg=0"]).unwrap(), None);
    assert!(matches!(
        bit_mode(["rspctl --bitmode=12"]),
        Err(CmdParseError::InvalidBitMode { .. })
    ));
}

#[test]
fn xc_subband_from_rspctl() {
    assert_eq!(
        xc_subband(["rspctl --xcsubband=284"]).unwrap(),
        Some(284)
    );
    assert_eq!(xc_subband(["rspctl --bitmode=8"]).unwrap(), None);
    assert!(matches!(
        xc_subband(["rspctl --xcsubband=900"]),
        Err(CmdParseError::SubbandOutOfRange { subband: 900 })
    ));
}

#[test]
fn xc_statistics_capture_parameters() {
    let stats = xc_statistics([
        "rspctl --xcsubband=284",
        "rspctl --xcstatistics --integration=1 --duration=1 --directory=/data/home/user1/.cache/ilisa/BSX_data/",
    ])
    .unwrap()
    .unwrap();
    assert_eq!(stats.integration_s, Some(1.0));
    assert_eq!(stats.duration_s, Some(1.0));
    assert_eq!(
        stats.directory,
        Some(PathBuf::from("/data/home/user1/.cache/ilisa/BSX_data/"))
    );

    assert_eq!(xc_statistics(["rspctl --xcsubband=284"]).unwrap(), None);
}

#[test]
fn settings_from_a_whole_header() {
    use indoc::indoc;
    use std::io::Cursor;

    use crate::header::header_from_yaml;

    let doc = indoc! {r#"
        # Header version 4
        beamctl_cmds:
        - beamctl --antennaset=LBA_INNER --subbands=51:200 --anadir=0.0,0.0,SUN --digdir=0.0,0.0,SUN
        - beamctl --antennaset=LBA_INNER --subbands=300:461 --anadir=0.0,0.0,SUN --digdir=0.0,0.0,SUN
        filenametime: '20230111_072042'
        ldat_type: xst
        rcusetup_cmds:
        - rspctl --bitmode=8
        rspctl_cmds:
        - rspctl --xcsubband=284
        - rspctl --xcstatistics --integration=1 --duration=1
    "#};
    let header = header_from_yaml(&mut Cursor::new(doc)).unwrap();
    let settings = ObservationSettings::from_header(&header).unwrap();

    assert_eq!(settings.beams.len(), 2);
    assert_eq!(settings.bit_mode, Some(8));
    assert_eq!(settings.xc_subband, Some(284));
    // Two beams' selections are folded into one overall range.
    assert_eq!(settings.subbands, Some(SubbandRange { min: 51, max: 461 }));
    assert_eq!(
        settings.xc_statistics.as_ref().and_then(|s| s.duration_s),
        Some(1.0)
    );
    assert_eq!(settings.subbands.unwrap().to_string(), "51:461");
}
