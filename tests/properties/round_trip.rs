//! Property tests for the patch use case against the local file system.

use proptest::prelude::*;
use tempfile::tempdir;

use litpatch::{LocalFs, PatchOptions, PatchUseCase, SubstitutionRule};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: After a successful run, the file holds exactly the computed text.
    #[test]
    fn property_file_matches_computed_text(
        text in "(?s)\\PC{0,256}",
        pat in "[a-z']{1,4}",
        rep in "[A-Z]{0,4}",
    ) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("index.vue");
        std::fs::write(&path, &text).unwrap();

        let options = PatchOptions::new()
            .with_target(&path)
            .with_rule(SubstitutionRule::new(pat, rep).unwrap());
        let outcome = PatchUseCase::new(LocalFs::new()).execute(&options).unwrap();

        prop_assert_eq!(outcome.original.as_str(), text.as_str());
        prop_assert_eq!(std::fs::read(&path).unwrap(), outcome.patched.into_bytes());
    }
}
