//! Property tests for the settings refresh.

use proptest::prelude::*;

use modkit::domain::entities::update_settings;
use modkit::ModToolSettings;

fn value() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9 ._-]{0,24}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: after an update both fields hold the requested values and
    /// a second update with the same values changes nothing.
    #[test]
    fn property_update_converges(
        old_name in value(),
        old_version in value(),
        name in "[A-Za-z][A-Za-z0-9 ]{0,16}",
        version in "[0-9]{4}\\.[0-9]\\.[0-9]{1,2}f[0-9]",
    ) {
        let current = ModToolSettings {
            product_name: old_name,
            runtime_version: old_version,
            extra: toml::Table::new(),
        };

        let first = update_settings(&current, &name, &version);
        prop_assert_eq!(&first.settings.product_name, &name);
        prop_assert_eq!(&first.settings.runtime_version, &version);
        prop_assert_eq!(first.changed, first.settings != current);

        let second = update_settings(&first.settings, &name, &version);
        prop_assert!(!second.changed);
        prop_assert_eq!(second.settings, first.settings);
    }
}
