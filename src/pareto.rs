//! Pareto ranking of corrective-action causes.

use crate::core::{Cause, RankedCause};

/// Sum of units across all causes.
pub fn total_units(causes: &[Cause]) -> u64 {
    causes.iter().map(|cause| u64::from(cause.units)).sum()
}

/// Rank causes by units, descending, attaching the running cumulative share
/// of total units. Ties keep insertion order (stable sort). When every cause
/// has zero units the cumulative percent is defined as 0 for all entries.
pub fn rank_pareto(causes: &[Cause]) -> Vec<RankedCause> {
    let mut sorted: Vec<Cause> = causes.to_vec();
    sorted.sort_by(|a, b| b.units.cmp(&a.units));

    let total = total_units(&sorted);
    let mut running: u64 = 0;
    sorted
        .into_iter()
        .map(|cause| {
            running += u64::from(cause.units);
            let accumulated_percent = if total == 0 {
                0.0
            } else {
                running as f64 * 100.0 / total as f64
            };
            RankedCause {
                id: cause.id,
                description: cause.description,
                units: cause.units,
                comments: cause.comments,
                accumulated_percent,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cause(id: &str, description: &str, units: u32) -> Cause {
        Cause {
            id: id.into(),
            description: description.into(),
            units,
            comments: None,
        }
    }

    #[test]
    fn ranks_descending_with_cumulative_percent() {
        let causes = vec![
            cause("1", "A", 30),
            cause("2", "B", 50),
            cause("3", "C", 20),
        ];
        let ranked = rank_pareto(&causes);
        let summary: Vec<(&str, u32, f64)> = ranked
            .iter()
            .map(|r| (r.description.as_str(), r.units, r.accumulated_percent))
            .collect();
        assert_eq!(
            summary,
            vec![("B", 50, 50.0), ("A", 30, 80.0), ("C", 20, 100.0)]
        );
    }

    #[test]
    fn last_entry_reaches_one_hundred_percent() {
        let causes = vec![cause("1", "A", 7), cause("2", "B", 13), cause("3", "C", 1)];
        let ranked = rank_pareto(&causes);
        let last = ranked.last().unwrap();
        assert!((last.accumulated_percent - 100.0).abs() < 1e-6);
    }

    #[test]
    fn zero_total_yields_zero_percent_everywhere() {
        let causes = vec![cause("1", "A", 0), cause("2", "B", 0)];
        let ranked = rank_pareto(&causes);
        assert!(ranked.iter().all(|r| r.accumulated_percent == 0.0));
    }

    #[test]
    fn ties_keep_insertion_order() {
        let causes = vec![
            cause("1", "first", 10),
            cause("2", "second", 10),
            cause("3", "third", 10),
        ];
        let ranked = rank_pareto(&causes);
        let order: Vec<&str> = ranked.iter().map(|r| r.description.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn empty_input_yields_empty_ranking() {
        assert!(rank_pareto(&[]).is_empty());
    }
}
