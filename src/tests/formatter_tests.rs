use std::borrow::Cow;

use super::{get_directory, region_code::RegionCode};
use crate::{Country, CountryCode, CountryDirectory, DialCodeResolution, PhoneNumberFormatter, render};

fn wildcard(id: &str, code: &str, pattern: &str) -> Country {
    Country::new(
        id,
        id,
        None,
        vec![CountryCode::new(code, Vec::new(), vec![pattern.to_owned()])],
        false,
    )
}

#[test]
fn render_examples() {
    assert_eq!(render("", "XXX XXX XXXX"), "");
    assert_eq!(render("5551234567", "XXX XXX XXXX"), "555 123 4567");
    assert_eq!(render("123", "XXXXX"), "123");
    assert_eq!(render("12345678", "XX"), "12".to_owned() + "345678");
}

#[test]
fn short_buffer_is_looked_up_directly() {
    let directory = get_directory();
    let formatter = PhoneNumberFormatter::new(&directory);

    let resolution = formatter.resolve_dial_code("+44");
    assert_eq!(
        resolution,
        DialCodeResolution::Typing {
            country: directory.lookup_by_region_id(RegionCode::gb()),
            dial_code: "44".to_owned(),
            should_advance_focus: true,
        }
    );
    assert_eq!(resolution.consumed_prefix_length(), 2);
    assert_eq!(resolution.remainder(), "");
}

#[test]
fn short_buffer_shared_code_does_not_advance() {
    let directory = get_directory();
    let formatter = PhoneNumberFormatter::new(&directory);

    let resolution = formatter.resolve_dial_code("+1");
    assert_eq!(resolution.country().unwrap().id(), RegionCode::us());
    assert!(matches!(
        resolution,
        DialCodeResolution::Typing { should_advance_focus: false, .. }
    ));

    // "1876" is a code of its own but "1" also matches it as prefix.
    let resolution = formatter.resolve_dial_code("1876");
    assert_eq!(resolution.country().unwrap().id(), RegionCode::jm());
    assert!(matches!(
        resolution,
        DialCodeResolution::Typing { should_advance_focus: true, .. }
    ));
}

#[test]
fn short_buffer_without_exact_code() {
    let directory = get_directory();
    let formatter = PhoneNumberFormatter::new(&directory);

    // Only Ukraine starts with 38, so the editor may move on.
    let resolution = formatter.resolve_dial_code("+38");
    assert_eq!(
        resolution,
        DialCodeResolution::Typing {
            country: None,
            dial_code: "38".to_owned(),
            should_advance_focus: true,
        }
    );

    let resolution = formatter.resolve_dial_code("+");
    assert_eq!(
        resolution,
        DialCodeResolution::Typing {
            country: None,
            dial_code: String::new(),
            should_advance_focus: false,
        }
    );
}

#[test]
fn non_digits_are_ignored() {
    let directory = get_directory();
    let formatter = PhoneNumberFormatter::new(&directory);
    assert_eq!(formatter.resolve_dial_code("+ 4-4"), formatter.resolve_dial_code("44"));
    assert_eq!(
        formatter.resolve_dial_code("+\u{0664}\u{0664}").country().unwrap().id(),
        RegionCode::gb()
    );
}

#[test]
fn long_buffer_splits_code_and_remainder() {
    let directory = get_directory();
    let formatter = PhoneNumberFormatter::new(&directory);

    let resolution = formatter.resolve_dial_code("+447911123456");
    assert_eq!(
        resolution,
        DialCodeResolution::Resolved {
            country: directory.lookup_by_region_id(RegionCode::gb()).unwrap(),
            dial_code: "44".to_owned(),
            remainder: "7911123456".to_owned(),
        }
    );
    assert_eq!(resolution.consumed_prefix_length(), 2);

    let resolution = formatter.resolve_dial_code("38012");
    assert_eq!(resolution.country().unwrap().id(), RegionCode::ua());
    assert_eq!(resolution.remainder(), "12");
}

#[test]
fn long_buffer_can_consume_everything() {
    let directory = CountryDirectory::new(vec![wildcard(RegionCode::zz(), "12345", "XX")]);
    let formatter = PhoneNumberFormatter::new(&directory);
    let resolution = formatter.resolve_dial_code("12345");
    assert_eq!(resolution.country().unwrap().id(), RegionCode::zz());
    assert_eq!(resolution.remainder(), "");
    assert_eq!(resolution.consumed_prefix_length(), 5);
}

#[test]
fn long_buffer_prefers_shortest_code() {
    let directory = CountryDirectory::new(vec![
        wildcard(RegionCode::us(), "1", "XXX XXX XXXX"),
        wildcard(RegionCode::zz(), "12", "XX XX"),
    ]);
    let formatter = PhoneNumberFormatter::new(&directory);

    let resolution = formatter.resolve_dial_code("125550000");
    assert_eq!(resolution.country().unwrap().id(), RegionCode::us());
    assert_eq!(resolution.remainder(), "25550000");
    assert_eq!(resolution.consumed_prefix_length(), 1);

    // Short buffers do not re-segment.
    let resolution = formatter.resolve_dial_code("12");
    assert_eq!(resolution.country().unwrap().id(), RegionCode::zz());
}

#[test]
fn long_buffer_shortest_code_beats_jamaica() {
    let directory = get_directory();
    let formatter = PhoneNumberFormatter::new(&directory);
    let resolution = formatter.resolve_dial_code("18765551234");
    assert_eq!(resolution.country().unwrap().id(), RegionCode::us());
    assert_eq!(resolution.remainder(), "8765551234");
}

#[test]
fn long_buffer_uses_carrier_prefix() {
    let kazakhstan = Country::new(
        RegionCode::kz(),
        "Kazakhstan",
        None,
        vec![CountryCode::new("7", vec!["6".to_owned(), "7".to_owned()], Vec::new())],
        false,
    );
    let directory = CountryDirectory::new(vec![
        wildcard(RegionCode::ru(), "7", "XXX XXX XXXX"),
        kazakhstan,
    ]);
    let formatter = PhoneNumberFormatter::new(&directory);

    let resolution = formatter.resolve_dial_code("77012345678");
    assert_eq!(resolution.country().unwrap().id(), RegionCode::kz());
    assert_eq!(resolution.remainder(), "7012345678");

    let resolution = formatter.resolve_dial_code("79161234567");
    assert_eq!(resolution.country().unwrap().id(), RegionCode::ru());
}

#[test]
fn long_buffer_test_code() {
    let directory = get_directory();
    let formatter = PhoneNumberFormatter::new(&directory);
    let resolution = formatter.resolve_dial_code("99912345");
    assert_eq!(resolution.country(), Some(directory.test_country()));
    assert_eq!(resolution.remainder(), "12345");
}

#[test]
fn long_buffer_without_match_is_unresolved() {
    let directory = get_directory();
    let formatter = PhoneNumberFormatter::new(&directory);
    let resolution = formatter.resolve_dial_code("+55555");
    assert_eq!(resolution, DialCodeResolution::Unresolved);
    assert_eq!(resolution.country(), None);
    assert_eq!(resolution.consumed_prefix_length(), 0);
}

#[test]
fn format_number_with_country_pattern() {
    let directory = get_directory();
    let formatter = PhoneNumberFormatter::new(&directory);

    let gb = directory.lookup_by_region_id(RegionCode::gb()).unwrap();
    assert_eq!(formatter.format_number("7911123456", gb), "7911 123456");
    assert_eq!(formatter.format_number("", gb), "");

    let fr = directory.lookup_by_region_id(RegionCode::fr()).unwrap();
    assert_eq!(formatter.format_number("612345678", fr), "6 12 34 56 78");

    assert_eq!(
        formatter.format_number("1234567", directory.test_country()),
        "1234 5 67"
    );
}

#[test]
fn format_number_without_pattern_is_identity() {
    let directory = get_directory();
    let formatter = PhoneNumberFormatter::new(&directory);
    let de = directory.lookup_by_region_id(RegionCode::de()).unwrap();
    let formatted = formatter.format_number("301234567", de);
    assert!(matches!(formatted, Cow::Borrowed("301234567")));
}

#[test]
fn format_number_uses_primary_code_patterns() {
    let country = Country::new(
        RegionCode::zz(),
        "Two codes",
        None,
        vec![
            CountryCode::new("10", Vec::new(), vec!["XX-XX".to_owned()]),
            CountryCode::new("11", Vec::new(), vec!["X X X X".to_owned()]),
        ],
        false,
    );
    let directory = CountryDirectory::new(Vec::new());
    let formatter = PhoneNumberFormatter::new(&directory);
    assert_eq!(formatter.format_number("1234", &country), "12-4");
}

#[test]
fn format_number_selects_by_first_digit() {
    let country = Country::new(
        RegionCode::zz(),
        "Mixed",
        None,
        vec![CountryCode::new(
            "00",
            Vec::new(),
            vec!["8 XXX XXX".to_owned(), "XX XX XX".to_owned()],
        )],
        false,
    );
    let directory = CountryDirectory::new(Vec::new());
    let formatter = PhoneNumberFormatter::new(&directory);
    assert_eq!(formatter.format_number("8123456", &country), "8 123 456");
    assert_eq!(formatter.format_number("123456", &country), "12 34 56");
}

#[test]
fn placeholder_without_country() {
    let directory = get_directory();
    let formatter = PhoneNumberFormatter::new(&directory);

    let placeholder = formatter.placeholder(None, "");
    assert_eq!(placeholder.text, "phone number");
    assert_eq!(placeholder.covered, 0);

    let placeholder = formatter.placeholder(None, "12");
    assert_eq!(placeholder.text, "");
    assert_eq!(placeholder.covered, 0);
}

#[test]
fn placeholder_from_pattern() {
    let directory = get_directory();
    let formatter = PhoneNumberFormatter::new(&directory);
    let gb = directory.lookup_by_region_id(RegionCode::gb());

    let placeholder = formatter.placeholder(gb, "");
    assert_eq!(placeholder.text, "---- ------");
    assert_eq!(placeholder.covered, 0);

    let placeholder = formatter.placeholder(gb, "7911 1");
    assert_eq!(placeholder.text, "---- ------");
    assert_eq!(placeholder.covered, 6);

    let placeholder = formatter.placeholder(gb, "7911 123456 7890");
    assert_eq!(placeholder.covered, 11);

    let de = directory.lookup_by_region_id(RegionCode::de());
    assert_eq!(formatter.placeholder(de, "").text, "phone number");
}
