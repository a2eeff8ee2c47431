use log::debug;
use log::trace;
use serde::Serialize;

use crate::basic_types::AnalysisError;
use crate::basic_types::HashMap;
use crate::basic_types::LearnedConstraint;
use crate::basic_types::LearnedItemId;
use crate::basic_types::VariableDomains;

/// One aggregator input record: a learned constraint together with the domain snapshots taken at
/// the conflicts where it was a propagation candidate.
#[derive(Debug, Clone)]
pub struct ConstraintPropagations {
    pub learned_id: LearnedItemId,
    pub constraint: LearnedConstraint,
    pub domains_at_conflicts: Vec<VariableDomains>,
}

/// Propagation counts for one learned item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EffectivenessStat {
    pub learned_id: LearnedItemId,
    pub propagated_count: u64,
    pub total_count: u64,
}

impl EffectivenessStat {
    /// The fraction of recorded conflicts at which the constraint would have propagated. Only
    /// items with at least one recorded conflict appear in a report, so the division is safe.
    pub fn ratio(&self) -> f64 {
        self.propagated_count as f64 / self.total_count as f64
    }
}

/// Per-learned-item effectiveness statistics, iterated in first-seen order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EffectivenessReport {
    stats: Vec<EffectivenessStat>,
    #[serde(skip)]
    index: HashMap<LearnedItemId, usize>,
}

impl EffectivenessReport {
    fn stat_mut(&mut self, learned_id: LearnedItemId) -> &mut EffectivenessStat {
        let index = match self.index.get(&learned_id) {
            Some(index) => *index,
            None => {
                let index = self.stats.len();
                self.stats.push(EffectivenessStat {
                    learned_id,
                    propagated_count: 0,
                    total_count: 0,
                });
                let _ = self.index.insert(learned_id, index);
                index
            }
        };

        &mut self.stats[index]
    }

    pub fn get(&self, learned_id: LearnedItemId) -> Option<&EffectivenessStat> {
        self.index.get(&learned_id).map(|index| &self.stats[*index])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EffectivenessStat> {
        self.stats.iter()
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Fold another report into this one, summing counts per learned item. Items new to `self`
    /// keep their first-seen order from `other`. This is the reduce step when an analysis pass
    /// is partitioned, e.g. one report per learned item evaluated in parallel.
    pub fn merge(&mut self, other: EffectivenessReport) {
        for stat in other.stats {
            let merged = self.stat_mut(stat.learned_id);
            merged.propagated_count += stat.propagated_count;
            merged.total_count += stat.total_count;
        }
    }
}

impl<'a> IntoIterator for &'a EffectivenessReport {
    type Item = &'a EffectivenessStat;
    type IntoIter = std::slice::Iter<'a, EffectivenessStat>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Apply the propagation check to every snapshot of every record and count, per learned item,
/// at how many of its recorded conflicts the constraint would have propagated.
///
/// Records with an empty snapshot list contribute no entry; reporting a ratio for an item that
/// was never a propagation candidate would mean dividing by zero, so such items are filtered
/// rather than defaulted. A failed evaluation aborts the pass: a miscounted effectiveness ratio
/// is worse than a visible failure, and the inputs are deterministic, so there is nothing to
/// retry.
pub fn analyze<Records>(records: Records) -> Result<EffectivenessReport, AnalysisError>
where
    Records: IntoIterator<Item = ConstraintPropagations>,
{
    let mut report = EffectivenessReport::default();

    for record in records {
        debug!(
            "Analyzing learned item {} over {} conflicts",
            record.learned_id,
            record.domains_at_conflicts.len()
        );

        for domains in &record.domains_at_conflicts {
            let propagates = record.constraint.would_propagate(domains)?;
            trace!("{}: propagates={propagates}", record.learned_id);

            let stat = report.stat_mut(record.learned_id);
            stat.total_count += 1;
            stat.propagated_count += propagates as u64;
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use crate::basic_types::DomainId;
    use crate::basic_types::LearnedConstraint;
    use crate::basic_types::LearnedItemId;
    use crate::basic_types::LinearLessOrEqual;
    use crate::basic_types::Nogood;
    use crate::basic_types::Predicate;
    use crate::basic_types::VariableDomains;
    use crate::statistics::analyze;
    use crate::statistics::ConstraintPropagations;
    use crate::statistics::EffectivenessReport;

    fn inequality_record(
        id: u32,
        domains_at_conflicts: Vec<VariableDomains>,
    ) -> ConstraintPropagations {
        // x + y <= 3 propagates iff either upper bound exceeds 3 - lb of the other term.
        let x = DomainId::new(0);
        let y = DomainId::new(1);

        ConstraintPropagations {
            learned_id: LearnedItemId::Inequality(id),
            constraint: LearnedConstraint::Inequality(
                LinearLessOrEqual::new(vec![x.scaled(1), y.scaled(1)], 3).unwrap(),
            ),
            domains_at_conflicts,
        }
    }

    #[test]
    fn test_counts_and_ratio() {
        let x = DomainId::new(0);
        let y = DomainId::new(1);

        // Outcomes per snapshot: true, false, true.
        let record = inequality_record(
            0,
            vec![
                VariableDomains::from(vec![(x, 0, 10), (y, 0, 10)]),
                VariableDomains::from(vec![(x, 0, 1), (y, 0, 1)]),
                VariableDomains::from(vec![(x, 2, 10), (y, 0, 10)]),
            ],
        );

        let report = analyze([record]).unwrap();
        let stat = report.get(LearnedItemId::Inequality(0)).unwrap();

        assert_eq!(stat.propagated_count, 2);
        assert_eq!(stat.total_count, 3);
        assert_eq!(stat.ratio(), 2.0 / 3.0);
    }

    #[test]
    fn test_record_without_snapshots_is_omitted() {
        let report = analyze([inequality_record(0, vec![])]).unwrap();

        assert!(report.is_empty());
        assert_eq!(report.get(LearnedItemId::Inequality(0)), None);
    }

    #[test]
    fn test_first_seen_order() {
        let x = DomainId::new(0);
        let snapshot = || VariableDomains::from(vec![(x, 0, 10), (DomainId::new(1), 0, 10)]);

        let nogood_record = ConstraintPropagations {
            learned_id: LearnedItemId::Nogood(5),
            constraint: LearnedConstraint::Nogood(Nogood::from(vec![Predicate::LowerBound {
                domain_id: x,
                lower_bound: 0,
            }])),
            domains_at_conflicts: vec![snapshot()],
        };

        let report = analyze([
            inequality_record(2, vec![snapshot()]),
            nogood_record,
            inequality_record(1, vec![snapshot()]),
        ])
        .unwrap();

        let order: Vec<_> = report.iter().map(|stat| stat.learned_id).collect();
        assert_eq!(
            order,
            vec![
                LearnedItemId::Inequality(2),
                LearnedItemId::Nogood(5),
                LearnedItemId::Inequality(1),
            ]
        );
    }

    #[test]
    fn test_repeated_learned_id_accumulates() {
        let x = DomainId::new(0);
        let y = DomainId::new(1);
        let snapshot = VariableDomains::from(vec![(x, 0, 10), (y, 0, 10)]);

        let report = analyze([
            inequality_record(0, vec![snapshot.clone()]),
            inequality_record(0, vec![snapshot]),
        ])
        .unwrap();

        assert_eq!(report.len(), 1);
        let stat = report.get(LearnedItemId::Inequality(0)).unwrap();
        assert_eq!(stat.total_count, 2);
        assert_eq!(stat.propagated_count, 2);
    }

    #[test]
    fn test_missing_variable_aborts_the_pass() {
        let x = DomainId::new(0);

        // Second snapshot lacks y entirely.
        let record = inequality_record(
            0,
            vec![
                VariableDomains::from(vec![(x, 0, 10), (DomainId::new(1), 0, 10)]),
                VariableDomains::from(vec![(x, 0, 10)]),
            ],
        );

        assert!(analyze([record]).is_err());
    }

    #[test]
    fn test_merge_sums_counts() {
        let x = DomainId::new(0);
        let y = DomainId::new(1);
        let propagating = VariableDomains::from(vec![(x, 0, 10), (y, 0, 10)]);
        let quiet = VariableDomains::from(vec![(x, 0, 1), (y, 0, 1)]);

        let mut report = analyze([inequality_record(0, vec![propagating])]).unwrap();
        let other = analyze([inequality_record(0, vec![quiet])]).unwrap();
        report.merge(other);

        let stat = report.get(LearnedItemId::Inequality(0)).unwrap();
        assert_eq!(stat.propagated_count, 1);
        assert_eq!(stat.total_count, 2);
    }
}
