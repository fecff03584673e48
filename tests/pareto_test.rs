use kpimap::{rank_pareto, total_units, Cause};
use pretty_assertions::assert_eq;

fn cause(id: &str, description: &str, units: u32) -> Cause {
    Cause {
        id: id.into(),
        description: description.into(),
        units,
        comments: None,
    }
}

#[test]
fn ranks_descending_with_cumulative_share() {
    let causes = vec![
        cause("1", "A", 30),
        cause("2", "B", 50),
        cause("3", "C", 20),
    ];
    let ranked = rank_pareto(&causes);

    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0].description, "B");
    assert_eq!(ranked[0].units, 50);
    assert_eq!(ranked[0].accumulated_percent, 50.0);
    assert_eq!(ranked[1].description, "A");
    assert_eq!(ranked[1].accumulated_percent, 80.0);
    assert_eq!(ranked[2].description, "C");
    assert_eq!(ranked[2].accumulated_percent, 100.0);
}

#[test]
fn cumulative_percent_is_non_decreasing() {
    let causes = vec![
        cause("1", "jams", 3),
        cause("2", "misfeeds", 17),
        cause("3", "scrap", 9),
        cause("4", "rework", 1),
    ];
    let ranked = rank_pareto(&causes);
    for window in ranked.windows(2) {
        assert!(window[0].accumulated_percent <= window[1].accumulated_percent);
    }
    let last = ranked.last().unwrap();
    assert!((last.accumulated_percent - 100.0).abs() < 1e-6);
}

#[test]
fn zero_total_defines_percent_as_zero() {
    let causes = vec![cause("1", "A", 0), cause("2", "B", 0), cause("3", "C", 0)];
    let ranked = rank_pareto(&causes);
    assert!(ranked.iter().all(|r| r.accumulated_percent == 0.0));
}

#[test]
fn comments_survive_the_ranking() {
    let mut with_comment = cause("1", "misfeed", 12);
    with_comment.comments = Some("night shift only".into());
    let ranked = rank_pareto(&[with_comment]);
    assert_eq!(ranked[0].comments.as_deref(), Some("night shift only"));
}

#[test]
fn total_units_sums_without_overflow_on_large_counts() {
    let causes = vec![cause("1", "A", u32::MAX), cause("2", "B", u32::MAX)];
    assert_eq!(total_units(&causes), 2 * u64::from(u32::MAX));
}
