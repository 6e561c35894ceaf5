use identcase::{
    detect_identifier_casing, normalize_identifier_casing, read_normalized_case_identifier,
    style::Style, translate, write_cased_identifier,
};
use identcase_test_macro::fixture;
use identcase_test_utils::{DECORATIONS, Fixture, decorate};
use pretty_assertions::assert_eq;

use std::path::Path;

fn renderings(fixture: &Fixture) -> Vec<(Style, &str)> {
    fixture
        .renderings
        .iter()
        .map(|(name, rendering)| {
            let style = name
                .parse::<Style>()
                .unwrap_or_else(|err| panic!("fixture style {:?}: {}", name, err));
            (style, rendering.as_str())
        })
        .collect()
}

fn write(target: Style, canonical: &str) -> String {
    let mut out: Vec<u8> = Vec::new();
    write_cased_identifier(&mut out, target, canonical).expect("legal target");
    String::from_utf8(out).expect("utf-8 output")
}

#[fixture("../test-data/*.json")]
fn casing<P: AsRef<Path>>(fixture_path: P) {
    let fixture = Fixture::load(fixture_path);
    let renderings = renderings(&fixture);
    assert_eq!(Style::NAMED.len(), renderings.len(), "every named style is rendered");

    for (style, rendering) in &renderings {
        assert_eq!(
            *style,
            detect_identifier_casing(rendering).expect("non-empty"),
            "detect {:?}",
            rendering
        );
        assert_eq!(*rendering, write(*style, &fixture.canonical));
        assert_eq!(
            fixture.canonical,
            read_normalized_case_identifier(&mut rendering.chars().peekable()),
            "read {:?}",
            rendering
        );

        for (target, expected) in &renderings {
            assert_eq!(
                *expected,
                translate(rendering, *target).expect("legal target"),
                "{:?} -> {}",
                rendering,
                target
            );

            for decoration in DECORATIONS {
                assert_eq!(
                    decorate(decoration, expected),
                    translate(&decorate(decoration, rendering), *target).expect("legal target"),
                    "{:?} -> {} decorated with {:?}",
                    rendering,
                    target,
                    decoration
                );
            }
        }
    }

    for identifier in &fixture.normalizes {
        assert_eq!(
            fixture.canonical,
            normalize_identifier_casing(identifier),
            "normalize {:?}",
            identifier
        );
    }
}
