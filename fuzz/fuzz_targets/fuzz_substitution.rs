#![no_main]

use libfuzzer_sys::fuzz_target;
use litpatch::SubstitutionRule;

fuzz_target!(|data: &[u8]| {
    // Layout: pattern \0 replacement \0 text
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let mut parts = input.splitn(3, '\0');
    let (Some(pattern), Some(replacement), Some(text)) = (parts.next(), parts.next(), parts.next())
    else {
        return;
    };

    let Ok(rule) = SubstitutionRule::new(pattern, replacement) else {
        assert!(pattern.is_empty());
        return;
    };

    let result = rule.apply(text);
    assert_eq!(result.text, text.replace(pattern, replacement));
    assert_eq!(result.replacements, rule.count_matches(text));
});
