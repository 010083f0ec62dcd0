//! Property tests for pwd-rules.
//!
//! These cover invariants that hold for arbitrary passwords: entropy growth,
//! classification consistency and validator ordering.

use std::sync::Arc;

use proptest::prelude::*;
use pwd_rules::{
    CharacterSet, CustomRule, DictionaryWordRule, LengthRule, Rule, SharedRule, StrengthLevel,
    Validator, entropy, strength_for,
};

proptest! {
    #[test]
    fn entropy_never_negative(s in ".{0,64}") {
        let bits = entropy(&s);
        prop_assert!(bits >= 0.0);
        prop_assert_eq!(bits == 0.0, s.is_empty());
    }

    #[test]
    fn entropy_grows_with_length_for_same_pool(
        base in "[a-z]{1,20}",
        extra in "[a-z]{1,20}",
    ) {
        let longer = format!("{}{}", base, extra);
        prop_assert!(entropy(&longer) >= entropy(&base));
    }

    #[test]
    fn entropy_depends_only_on_length_and_pool(s in "[a-zA-Z0-9]{1,32}") {
        let reversed: String = s.chars().rev().collect();
        prop_assert_eq!(entropy(&s), entropy(&reversed));
    }

    #[test]
    fn strength_matches_entropy_classification(s in ".{0,64}") {
        prop_assert_eq!(strength_for(&s), StrengthLevel::from_entropy(entropy(&s)));
    }

    #[test]
    fn length_rule_matches_char_count(s in ".{0,80}") {
        let rule = LengthRule::new(6, 64).unwrap();
        let len = s.chars().count();
        prop_assert_eq!(rule.evaluate(&s), (6..=64).contains(&len));
    }

    #[test]
    fn inverted_length_rule_is_rejected(min in 1usize..100, delta in 1usize..100) {
        prop_assert!(LengthRule::new(min + delta, min).is_err());
    }

    #[test]
    fn allowed_characters_accepts_only_members(s in "[0-9a-f]{0,16}") {
        let rule = pwd_rules::AllowedCharacterRule::new(CharacterSet::decimal_digits());
        prop_assert_eq!(rule.evaluate(&s), s.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn dictionary_rule_ignores_case(word in "[a-z]{1,12}", mask in prop::collection::vec(any::<bool>(), 12)) {
        let lookup_word = word.clone();
        let rule = DictionaryWordRule::new(move |w: &str| w == lookup_word);
        let mixed: String = word
            .chars()
            .zip(mask.iter())
            .map(|(c, &upper)| if upper { c.to_ascii_uppercase() } else { c })
            .collect();
        prop_assert!(!rule.evaluate(&mixed));
    }

    #[test]
    fn validator_reports_exactly_the_failing_rules(outcomes in prop::collection::vec(any::<bool>(), 0..12)) {
        let rules: Vec<SharedRule> = outcomes
            .iter()
            .enumerate()
            .map(|(i, &passes)| {
                Arc::new(CustomRule::new(format!("rule {}", i), move |_| passes)) as SharedRule
            })
            .collect();
        let validator = Validator::with_rules(rules);

        let outcome = validator.validate("password");
        let expected: Vec<String> = outcomes
            .iter()
            .enumerate()
            .filter(|&(_, &passes)| !passes)
            .map(|(i, _)| format!("rule {}", i))
            .collect();

        prop_assert_eq!(outcome.failure_descriptions(), expected);
        prop_assert_eq!(outcome.is_valid, outcomes.iter().all(|&p| p));
    }

    #[test]
    fn validate_is_idempotent(s in ".{0,80}") {
        let first = Validator::standard().validate(&s);
        let second = Validator::standard().validate(&s);
        prop_assert_eq!(first.is_valid, second.is_valid);
        prop_assert_eq!(first.failing_rules.len(), second.failing_rules.len());
    }
}
