//! `adb devices` parsing properties

use apk_deploy::parse_device_list;
use proptest::prelude::*;

fn serial() -> impl Strategy<Value = String> {
    "[A-Za-z0-9._:-]{1,20}"
}

fn state() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("device"),
        Just("offline"),
        Just("unauthorized"),
        Just("recovery"),
        Just("sideload"),
    ]
}

proptest! {
    #[test]
    fn parse_keeps_exactly_online_rows_in_order(
        rows in prop::collection::vec((serial(), state()), 0..12),
        sep in prop_oneof![Just("\t"), Just(" "), Just("  \t")],
    ) {
        let mut listing = String::from("List of devices attached\n");
        for (serial, state) in &rows {
            listing.push_str(&format!("{serial}{sep}{state}\n"));
        }
        listing.push('\n');

        let parsed: Vec<String> = parse_device_list(&listing)
            .iter()
            .map(|d| d.as_str().to_string())
            .collect();
        let expected: Vec<String> = rows
            .iter()
            .filter(|(_, state)| *state == "device")
            .map(|(serial, _)| serial.clone())
            .collect();

        prop_assert_eq!(parsed, expected);
    }

    #[test]
    fn parse_never_panics(input in ".*") {
        let _ = parse_device_list(&input);
    }

    #[test]
    fn header_is_never_a_device(header in "[a-z ]{0,30}device") {
        let listing = format!("{header}\n");
        prop_assert!(parse_device_list(&listing).is_empty());
    }
}
