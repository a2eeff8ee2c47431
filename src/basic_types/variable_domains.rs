use std::fmt::Display;
use std::fmt::Formatter;

use itertools::Itertools;

use crate::basic_types::AnalysisError;
use crate::basic_types::DomainId;
use crate::basic_types::HashMap;

/// A closed interval `[lower_bound, upper_bound]` of integer values.
///
/// In normal operation `lower_bound <= upper_bound`. A snapshot captured at an active conflict
/// may contain an inverted (empty) interval for the variable that caused the conflict; the
/// propagation checks evaluate such intervals as written rather than guarding against them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Domain {
    pub lower_bound: i32,
    pub upper_bound: i32,
}

impl Domain {
    pub fn new(lower_bound: i32, upper_bound: i32) -> Self {
        Domain {
            lower_bound,
            upper_bound,
        }
    }

    pub fn is_empty(self) -> bool {
        self.lower_bound > self.upper_bound
    }
}

/// The domains of all variables recorded at one conflict point.
///
/// Produced by the (external) trace parser, read-only to the propagation checks, and discarded
/// after the checks that consume it.
#[derive(Debug, Clone, Default)]
pub struct VariableDomains(HashMap<DomainId, Domain>);

impl VariableDomains {
    /// The domain of `domain_id`, or [`AnalysisError::MissingVariable`] if the snapshot does not
    /// contain it. A missing variable means the parsed constraints and the parsed domains are
    /// inconsistent, so there is no sensible default to fall back on.
    pub fn domain(&self, domain_id: DomainId) -> Result<Domain, AnalysisError> {
        self.0
            .get(&domain_id)
            .copied()
            .ok_or(AnalysisError::MissingVariable { domain_id })
    }

    pub fn contains(&self, domain_id: DomainId) -> bool {
        self.0.contains_key(&domain_id)
    }

    pub fn num_domains(&self) -> usize {
        self.0.len()
    }
}

impl FromIterator<(DomainId, Domain)> for VariableDomains {
    fn from_iter<I: IntoIterator<Item = (DomainId, Domain)>>(iter: I) -> Self {
        VariableDomains(iter.into_iter().collect())
    }
}

impl From<Vec<(DomainId, i32, i32)>> for VariableDomains {
    fn from(value: Vec<(DomainId, i32, i32)>) -> Self {
        value
            .into_iter()
            .map(|(id, lower_bound, upper_bound)| (id, Domain::new(lower_bound, upper_bound)))
            .collect()
    }
}

impl Display for VariableDomains {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(
            self.0
                .iter()
                .sorted_by_key(|(id, _)| id.id)
                .map(|(id, domain)| {
                    format!("{}:({},{})", id.id, domain.lower_bound, domain.upper_bound)
                })
                .join(" ")
                .as_str(),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::basic_types::AnalysisError;
    use crate::basic_types::Domain;
    use crate::basic_types::DomainId;
    use crate::basic_types::VariableDomains;

    #[test]
    fn test_domain_lookup() {
        let d1 = DomainId::new(0);
        let d2 = DomainId::new(1);
        let domains = VariableDomains::from(vec![(d1, -5, 10)]);

        assert_eq!(domains.domain(d1), Ok(Domain::new(-5, 10)));
        assert_eq!(
            domains.domain(d2),
            Err(AnalysisError::MissingVariable { domain_id: d2 })
        );

        assert!(domains.contains(d1));
        assert!(!domains.contains(d2));
        assert_eq!(domains.num_domains(), 1);
    }

    #[test]
    fn test_empty_domain_is_accepted() {
        let d1 = DomainId::new(3);
        let domains = VariableDomains::from(vec![(d1, 5, 1)]);

        let domain = domains.domain(d1).unwrap();
        assert!(domain.is_empty());
        assert_eq!((domain.lower_bound, domain.upper_bound), (5, 1));
    }

    #[test]
    fn test_display_is_sorted_by_id() {
        let domains = VariableDomains::from(vec![
            (DomainId::new(2), 0, 1),
            (DomainId::new(0), -3, 3),
            (DomainId::new(1), 7, 7),
        ]);

        assert_eq!(domains.to_string(), "0:(-3,3) 1:(7,7) 2:(0,1)");
    }
}
