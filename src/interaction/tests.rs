use proptest::prelude::*;

use super::*;

fn iv(start: Timestamp, end: Timestamp) -> Interval {
    Interval::new("p", start, end)
}

// ── Basic cases ───────────────────────────────────────────────────────

#[test]
fn far_apart_sets_do_not_interact() {
    assert!(!interact(&[iv(0, 5)], &[iv(100, 105)], 0));
}

#[test]
fn overlapping_sets_interact() {
    assert!(interact(&[iv(0, 5)], &[iv(4, 9)], 0));
}

#[test]
fn touching_endpoints_interact() {
    assert!(interact(&[iv(0, 5)], &[iv(5, 9)], 0));
}

#[test]
fn window_bridges_gap() {
    // Gap of 6 between 5 and 11 needs 2 * window >= 6.
    assert!(!interact(&[iv(0, 5)], &[iv(11, 14)], 2));
    assert!(interact(&[iv(0, 5)], &[iv(11, 14)], 3));
}

#[test]
fn single_interval_with_itself_interacts() {
    let list = [iv(3, 7)];
    assert!(interact(&list, &list, 0));
}

#[test]
fn separated_list_with_itself_does_not_interact() {
    let list = [iv(0, 5), iv(100, 105)];
    assert!(!interact(&list, &list, 0));
    assert_eq!(IntervalInteraction::new(0).group_count(&list, &list), 2);
}

// ── Empty inputs ──────────────────────────────────────────────────────

#[test]
fn both_empty_interact() {
    assert!(interact(&[], &[], 0));
    assert_eq!(IntervalInteraction::new(0).group_count(&[], &[]), 0);
}

#[test]
fn one_side_empty_depends_on_other_side() {
    assert!(interact(&[], &[iv(0, 5)], 0));
    assert!(interact(&[iv(0, 5), iv(3, 8)], &[], 0));
    assert!(!interact(&[], &[iv(0, 5), iv(50, 55)], 0));
}

// ── Merging ───────────────────────────────────────────────────────────

#[test]
fn union_keeps_the_larger_end() {
    // If the end bound shrank to 3 when [2, 3] joined [0, 10], [9, 12]
    // would start a second group.
    let list1 = [iv(0, 10), iv(2, 3)];
    let list2 = [iv(9, 12)];
    assert!(interact(&list1, &list2, 0));
}

#[test]
fn consolidation_joins_groups_bridged_later() {
    let list1 = [iv(0, 2), iv(10, 12)];
    let list2 = [iv(2, 10)];
    let analyzer = IntervalInteraction::new(0);
    assert_eq!(analyzer.group_count(&list1, &list2), 1);
    assert!(analyzer.interact(&list1, &list2));
}

#[test]
fn consolidation_follows_chains() {
    let list1 = [iv(0, 1), iv(20, 21), iv(40, 41)];
    let list2 = [iv(30, 40), iv(1, 20), iv(21, 30)];
    assert!(interact(&list1, &list2, 0));
}

#[test]
fn group_count_reports_separate_groups() {
    let list1 = [iv(0, 5), iv(100, 110)];
    let list2 = [iv(4, 20), iv(200, 210)];
    assert_eq!(IntervalInteraction::new(0).group_count(&list1, &list2), 3);
}

#[test]
fn consolidate_is_stable_on_disjoint_groups() {
    let groups = vec![
        Duration { start: 0, end: 1 },
        Duration { start: 10, end: 11 },
    ];
    assert_eq!(consolidate(groups.clone(), 0), groups);
}

#[test]
fn consolidate_merges_to_union_span() {
    let groups = vec![
        Duration { start: 5, end: 9 },
        Duration { start: 0, end: 6 },
        Duration { start: 8, end: 15 },
    ];
    assert_eq!(consolidate(groups, 0), vec![Duration { start: 0, end: 15 }]);
}

// ── Configuration ─────────────────────────────────────────────────────

#[test]
fn default_window_is_five() {
    let analyzer = IntervalInteraction::default();
    assert_eq!(analyzer.window(), DEFAULT_WINDOW);
    assert!(analyzer.interact(&[iv(0, 5)], &[iv(15, 20)]));
    assert!(!analyzer.interact(&[iv(0, 5)], &[iv(16, 20)]));
}

#[test]
fn negative_window_is_clamped() {
    let analyzer = IntervalInteraction::new(-4);
    assert_eq!(analyzer.window(), 0);
    assert!(analyzer.interact(&[iv(0, 5)], &[iv(5, 6)]));
}

// ── Properties ────────────────────────────────────────────────────────

fn interval_list() -> impl Strategy<Value = Vec<Interval>> {
    prop::collection::vec(
        (0i64..200, 0i64..30).prop_map(|(start, len)| iv(start, start + len)),
        0..8,
    )
}

proptest! {
    #[test]
    fn widening_window_never_breaks_interaction(
        list1 in interval_list(),
        list2 in interval_list(),
        window in 0i64..20,
        extra in 0i64..20,
    ) {
        if interact(&list1, &list2, window) {
            prop_assert!(interact(&list1, &list2, window + extra));
        }
    }

    #[test]
    fn group_count_never_grows_with_window(
        list1 in interval_list(),
        list2 in interval_list(),
        window in 0i64..20,
    ) {
        let narrow = IntervalInteraction::new(window).group_count(&list1, &list2);
        let wide = IntervalInteraction::new(window + 1).group_count(&list1, &list2);
        prop_assert!(wide <= narrow);
    }

    #[test]
    fn interaction_is_symmetric(
        list1 in interval_list(),
        list2 in interval_list(),
        window in 0i64..10,
    ) {
        prop_assert_eq!(
            interact(&list1, &list2, window),
            interact(&list2, &list1, window)
        );
    }

    #[test]
    fn list_with_itself_matches_list_alone(
        list in interval_list(),
        window in 0i64..10,
    ) {
        prop_assert_eq!(
            interact(&list, &list, window),
            interact(&list, &[], window)
        );
    }

    #[test]
    fn covering_interval_always_interacts(
        list in interval_list(),
        window in 0i64..10,
    ) {
        prop_assert!(interact(&list, &[iv(0, 230)], window));
    }

    #[test]
    fn final_groups_are_pairwise_separated(
        list1 in interval_list(),
        list2 in interval_list(),
        window in 0i64..10,
    ) {
        let analyzer = IntervalInteraction::new(window);
        let groups = consolidate(analyzer.scan(list1.iter().chain(&list2)), window);
        for (i, a) in groups.iter().enumerate() {
            for b in &groups[i + 1..] {
                prop_assert!(!a.overlaps(b, window));
            }
        }
    }
}
