//! Property tests for literal replace-all.

use proptest::prelude::*;

use litpatch::SubstitutionRule;

/// Segments drawn from lowercase text, so they never contain the uppercase pattern.
fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z '/._\n]{0,12}").unwrap()
}

fn pattern() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Z]{1,4}").unwrap()
}

fn replacement() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9']{0,6}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Text without the pattern is returned unchanged.
    #[test]
    fn property_no_match_is_identity(
        text in "(?s).{0,128}",
        pat in pattern(),
        rep in replacement(),
    ) {
        prop_assume!(!text.contains(pat.as_str()));
        let rule = SubstitutionRule::new(pat, rep).unwrap();

        let result = rule.apply(&text);

        prop_assert_eq!(result.replacements, 0);
        prop_assert_eq!(result.text, text);
    }

    /// PROPERTY: k occurrences become k replacements in the same positions,
    /// and the text between them is untouched.
    #[test]
    fn property_replaces_each_occurrence_in_place(
        segments in proptest::collection::vec(segment(), 1..=8),
        pat in pattern(),
        rep in replacement(),
    ) {
        let input = segments.join(&pat);
        let expected = segments.join(&rep);
        let rule = SubstitutionRule::new(pat, rep).unwrap();

        let result = rule.apply(&input);

        prop_assert_eq!(result.replacements, segments.len() - 1);
        prop_assert_eq!(result.text, expected);
    }

    /// PROPERTY: When the replacement cannot reintroduce the pattern,
    /// applying twice equals applying once.
    #[test]
    fn property_idempotent_when_replacement_lacks_pattern(
        text in "(?s).{0,128}",
        pat in "[a-c]{1,3}",
        rep in "[x-z]{0,3}",
    ) {
        let rule = SubstitutionRule::new(pat, rep).unwrap();

        let once = rule.apply(&text).text;
        let twice = rule.apply(&once).text;

        prop_assert_eq!(twice, once);
    }

    /// PROPERTY: Replacement count agrees with `count_matches`.
    #[test]
    fn property_count_matches_agrees_with_apply(
        text in "[ab]{0,64}",
        pat in "[ab]{1,3}",
    ) {
        let rule = SubstitutionRule::new(pat, "-").unwrap();
        prop_assert_eq!(rule.apply(&text).replacements, rule.count_matches(&text));
    }

    /// PROPERTY: Applying a rule never panics, including on multi-byte text.
    #[test]
    fn property_apply_never_panics(
        text in "\\PC{0,64}",
        pat in "\\PC{1,4}",
        rep in "\\PC{0,4}",
    ) {
        let rule = SubstitutionRule::new(pat, rep).unwrap();
        let _ = rule.apply(&text);
    }
}
