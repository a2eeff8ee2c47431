use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

use serde::Serialize;

use crate::basic_types::AnalysisError;
use crate::basic_types::LinearLessOrEqual;
use crate::basic_types::Nogood;
use crate::basic_types::VariableDomains;

/// A constraint produced by conflict analysis: resolution-based learning yields a [`Nogood`],
/// linear ("IntSat"-style) learning yields a [`LinearLessOrEqual`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LearnedConstraint {
    Inequality(LinearLessOrEqual),
    Nogood(Nogood),
}

impl LearnedConstraint {
    /// Whether re-applying this constraint to the snapshot would tighten at least one variable's
    /// bound. Pure: identical inputs always yield identical outputs.
    pub fn would_propagate(&self, domains: &VariableDomains) -> Result<bool, AnalysisError> {
        match self {
            LearnedConstraint::Inequality(inequality) => inequality.is_propagating(domains),
            LearnedConstraint::Nogood(nogood) => nogood.is_propagating(domains),
        }
    }
}

impl Display for LearnedConstraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LearnedConstraint::Inequality(inequality) => write!(f, "{}", inequality),
            LearnedConstraint::Nogood(nogood) => write!(f, "{}", nogood),
        }
    }
}

/// Identifies one learned item across an analysis pass. Inequalities are registered as
/// propagators and nogoods in the nogood store, so the two id spaces are disjoint.
#[derive(Debug, Clone, Eq, PartialEq, Copy, Hash, Serialize)]
pub enum LearnedItemId {
    Inequality(u32),
    Nogood(u32),
}

impl Display for LearnedItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LearnedItemId::Inequality(prop_id) => write!(f, "P{}", prop_id),
            LearnedItemId::Nogood(nogood_id) => write!(f, "N{}", nogood_id),
        }
    }
}
