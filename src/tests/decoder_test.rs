///
/// @package codesign-check
///
/// @file Decoder tests
/// @copyright 2025-present Christoph Kappel <christoph@unexist.dev>
/// @version $Id$
///
/// This program can be distributed under the terms of the GNU GPLv3.
/// See the file LICENSE for details.
///

use bitflags::Flags;
use proptest::prelude::*;
use crate::decoder::{decode, ReportRow};
use crate::flags::CodeSignFlags;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]
    #[test]
    fn should_report_every_flag(value: i64) {
        let report = decode(value);

        prop_assert_eq!(report.value, value);
        prop_assert_eq!(report.rows.len(), CodeSignFlags::FLAGS.len());

        for (row, flag) in report.rows.iter().zip(CodeSignFlags::FLAGS) {
            let mask = i64::from(flag.value().bits());

            prop_assert_eq!(row.name, flag.name());
            prop_assert_eq!(row.enabled, (value & mask) != 0);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]
    #[test]
    fn should_be_deterministic(value: i64) {
        prop_assert_eq!(decode(value), decode(value));
    }
}

#[test]
fn should_disable_all_for_zero() {
    let report = decode(0);

    assert_eq!(report.rows.len(), 27);
    assert!(report.rows.iter().all(|row| !row.enabled));
}

#[test]
fn should_enable_valid_only() {
    let report = decode(0x1);

    assert_eq!(report.enabled().collect::<Vec<_>>(), vec!["CS_VALID"]);
    assert_eq!(report.rows[0], ReportRow { name: "CS_VALID", enabled: true });
}

#[test]
fn should_decode_reference_value() {
    let report = decode(123_456_789);

    assert_eq!(report.enabled().collect::<Vec<_>>(), vec![
        "CS_VALID",
        "CS_GET_TASK_ALLOW",
        "CS_FORCED_LV",
        "CS_HARD",
        "CS_CHECK_EXPIRATION",
        "CS_RESTRICT",
        "CS_ENTITLEMENTS_VALIDATED",
        "CS_NVRAM_UNRESTRICTED",
        "CS_RUNTIME",
        "CS_EXEC_SET_HARD",
        "CS_EXEC_SET_ENFORCEMENT",
        "CS_KILLED",
        "CS_DYLD_PLATFORM",
        "CS_PLATFORM_BINARY",
    ]);
}

#[test]
fn should_enable_all_for_minus_one() {
    let report = decode(-1);

    assert!(report.rows.iter().all(|row| row.enabled));
}

#[test]
fn should_ignore_high_bits() {
    let report = decode(0x1_0000_0000);

    assert_eq!(report.enabled().count(), 0);
}

#[test]
fn should_format_table() {
    let output = decode(0x8000_0001).to_string();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 28);
    assert_eq!(lines[0], "Flag                     Is Enabled");
    assert_eq!(lines[1], "CS_VALID                 true      ");
    assert_eq!(lines[2], "CS_ADHOC                 false     ");
    assert_eq!(lines[27], "CS_DATAVAULT_CONTROLLER  true      ");
    assert!(output.ends_with('\n'));
}
