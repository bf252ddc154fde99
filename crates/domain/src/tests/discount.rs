// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{at, date};
use crate::{DayDiscount, DiscountPolicy, DiscountRules, TimeDiscount, TimeRange};

#[test]
fn test_day_policy_qualifies_on_discount_days() {
    let rule: DayDiscount = DayDiscount::default();

    assert!(DiscountPolicy::day(date(2024, 1, 20), rule).qualifies());
    assert!(!DiscountPolicy::day(date(2024, 1, 15), rule).qualifies());
}

#[test]
fn test_non_qualifying_policy_contributes_nothing() {
    let policy: DiscountPolicy = DiscountPolicy::day(
        date(2024, 1, 15),
        DayDiscount {
            amount_per_seat: 5_000,
        },
    );
    assert_eq!(policy.discount_per_seat(), 0);
}

#[test]
fn test_default_time_policy_ranges() {
    let rule: TimeDiscount = TimeDiscount::default();

    assert!(DiscountPolicy::time(at(9, 0), &rule).qualifies());
    assert!(DiscountPolicy::time(at(10, 59), &rule).qualifies());
    assert!(!DiscountPolicy::time(at(11, 0), &rule).qualifies());
    assert!(!DiscountPolicy::time(at(19, 59), &rule).qualifies());
    assert!(DiscountPolicy::time(at(20, 0), &rule).qualifies());
    assert!(DiscountPolicy::time(at(23, 59), &rule).qualifies());
}

#[test]
fn test_time_policy_threshold_is_configurable() {
    let rule: TimeDiscount = TimeDiscount {
        ranges: vec![TimeRange {
            from: at(13, 0),
            until: Some(at(15, 0)),
        }],
        amount_per_seat: 1_500,
    };

    let matinee: DiscountPolicy = DiscountPolicy::time(at(14, 0), &rule);
    assert!(matinee.qualifies());
    assert_eq!(matinee.discount_per_seat(), 1_500);

    assert!(!DiscountPolicy::time(at(9, 0), &rule).qualifies());
}

#[test]
fn test_policies_for_keeps_day_before_time() {
    let rules: DiscountRules = DiscountRules::standard();

    let policies: Vec<DiscountPolicy> = rules.policies_for(Some(date(2024, 1, 10)), Some(at(9, 0)));

    let names: Vec<&str> = policies.iter().map(DiscountPolicy::name).collect();
    assert_eq!(names, vec!["day", "time"]);
}

#[test]
fn test_policies_for_skips_unselected_inputs() {
    let rules: DiscountRules = DiscountRules::standard();

    assert!(rules.policies_for(None, None).is_empty());
    assert_eq!(rules.policies_for(Some(date(2024, 1, 10)), None).len(), 1);
    assert_eq!(rules.policies_for(None, Some(at(9, 0))).len(), 1);
}

#[test]
fn test_disabled_rules_produce_no_policies() {
    let rules: DiscountRules = DiscountRules::default();
    assert!(
        rules
            .policies_for(Some(date(2024, 1, 10)), Some(at(9, 0)))
            .is_empty()
    );
}
