//! Property tests for side-car descriptor edits.

use proptest::prelude::*;

use modkit::domain::services::{read_flag, read_identifier, rewrite_identifier, write_flag};
use modkit::AssetIdentifier;

/// Descriptor lines that never look like a `guid:` line
fn other_line() -> impl Strategy<Value = String> {
    proptest::string::string_regex("( {0,4})[a-zA-Z][a-zA-Z0-9]{0,12}: [a-zA-Z0-9 ]{0,16}")
        .unwrap()
        .prop_filter("must not be an identifier line", |l| {
            !l.trim_start().starts_with("guid:")
        })
}

fn descriptor() -> impl Strategy<Value = (Vec<String>, usize, bool)> {
    (
        proptest::collection::vec(other_line(), 1..8),
        any::<prop::sample::Index>(),
        any::<bool>(),
    )
        .prop_map(|(lines, idx, crlf)| {
            let at = idx.index(lines.len() + 1);
            (lines, at, crlf)
        })
}

fn join(lines: &[String], ending: &str) -> String {
    lines.iter().map(|l| format!("{}{}", l, ending)).collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: rewriting never panics on arbitrary input.
    #[test]
    fn property_rewrite_never_panics(s in "(?s).{0,256}") {
        let id = AssetIdentifier::from_name("x");
        let _ = rewrite_identifier(&s, &id);
        let _ = read_identifier(&s);
    }

    /// PROPERTY: rewriting changes only the identifier line; every other
    /// line and every line ending is kept.
    #[test]
    fn property_rewrite_touches_only_identifier_line(
        (lines, at, crlf) in descriptor(),
        name in "[a-z]{1,12}",
    ) {
        let ending = if crlf { "\r\n" } else { "\n" };
        let mut with_id = lines.clone();
        with_id.insert(at, "guid: 0123".to_string());
        let content = join(&with_id, ending);

        let id = AssetIdentifier::from_name(&name);
        let updated = rewrite_identifier(&content, &id);

        let mut expected = lines.clone();
        expected.insert(at, format!("guid: {}", id));
        prop_assert_eq!(&updated, &join(&expected, ending));
        prop_assert_eq!(read_identifier(&updated), Some(id));
    }

    /// PROPERTY: rewriting is idempotent.
    #[test]
    fn property_rewrite_idempotent((lines, _, crlf) in descriptor()) {
        let ending = if crlf { "\r\n" } else { "\n" };
        let id = AssetIdentifier::from_name("api");
        let once = rewrite_identifier(&join(&lines, ending), &id);
        let twice = rewrite_identifier(&once, &id);
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: writing a flag then reading it returns the written value.
    #[test]
    fn property_flag_write_read((lines, _, crlf) in descriptor(), enabled in any::<bool>()) {
        let ending = if crlf { "\r\n" } else { "\n" };
        let updated = write_flag(&join(&lines, ending), "compatibleWithEditor", enabled);
        prop_assert_eq!(read_flag(&updated, "compatibleWithEditor"), Some(enabled));
    }
}
