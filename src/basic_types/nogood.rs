use std::fmt::Display;
use std::fmt::Formatter;
use std::slice::Iter;

use crate::basic_types::AnalysisError;
use crate::basic_types::Predicate;
use crate::basic_types::VariableDomains;

/// A learned nogood: the solver forbids the conjunction of these predicates from holding
/// simultaneously. Empty only as a degenerate input.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Nogood(Vec<Predicate>);

impl Nogood {
    pub fn new(predicates: Vec<Predicate>) -> Self {
        Nogood(predicates)
    }

    pub fn iter(&self) -> Iter<'_, Predicate> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether re-applying the nogood to the snapshot would propagate: unit propagation over the
    /// conflict clause fires when at most one predicate is left unresolved, i.e. when the number
    /// of satisfied predicates is at least `len - 1`.
    ///
    /// Scoring is per predicate via [`Predicate::satisfied_count`], including the `NotEqual`
    /// double count on inverted domains. The comparison is kept in unsigned form as
    /// `satisfied + 1 >= len`, which preserves the original's degenerate behaviour that an empty
    /// nogood always propagates (`0 >= -1`).
    pub fn is_propagating(&self, domains: &VariableDomains) -> Result<bool, AnalysisError> {
        let mut true_terms: usize = 0;
        for predicate in self.iter() {
            true_terms += predicate.satisfied_count(domains)? as usize;
        }

        Ok(true_terms + 1 >= self.len())
    }
}

impl From<Vec<Predicate>> for Nogood {
    fn from(value: Vec<Predicate>) -> Self {
        Nogood(value)
    }
}

impl Display for Nogood {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.0.is_empty() {
            write!(f, "{{empty}}")
        } else {
            write!(
                f,
                "{}",
                self.0
                    .iter()
                    .map(|predicate| predicate.to_string())
                    .collect::<Vec<String>>()
                    .join("; ")
            )
        }
    }
}
