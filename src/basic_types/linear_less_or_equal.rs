use std::fmt::Display;
use std::fmt::Formatter;
use std::slice::Iter;

use itertools::Itertools;

use crate::basic_types::AnalysisError;
use crate::basic_types::Domain;
use crate::basic_types::DomainId;
use crate::basic_types::VariableDomains;

/// A variable multiplied by a non-zero integer scale; one term of a linear inequality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScaledVariable {
    pub domain_id: DomainId,
    pub scale: i32,
}

impl DomainId {
    /// Create the term `scale * self` for use in a [`LinearLessOrEqual`] left-hand side.
    pub fn scaled(self, scale: i32) -> ScaledVariable {
        ScaledVariable {
            domain_id: self,
            scale,
        }
    }
}

impl ScaledVariable {
    /// The minimum value this term can contribute given the snapshot.
    fn lb(self, domains: &VariableDomains) -> Result<i64, AnalysisError> {
        let Domain {
            lower_bound,
            upper_bound,
        } = domains.domain(self.domain_id)?;

        if self.scale < 0 {
            Ok(self.scale as i64 * upper_bound as i64)
        } else {
            Ok(self.scale as i64 * lower_bound as i64)
        }
    }

    /// The maximum value this term can contribute given the snapshot.
    fn ub(self, domains: &VariableDomains) -> Result<i64, AnalysisError> {
        let Domain {
            lower_bound,
            upper_bound,
        } = domains.domain(self.domain_id)?;

        if self.scale < 0 {
            Ok(self.scale as i64 * lower_bound as i64)
        } else {
            Ok(self.scale as i64 * upper_bound as i64)
        }
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinearLessOrEqualLhs(Vec<ScaledVariable>);

impl LinearLessOrEqualLhs {
    pub fn contains_variable(&self, variable: DomainId) -> bool {
        self.iter().any(|var| var.domain_id == variable)
    }

    pub fn find_variable_scale(&self, variable: DomainId) -> Option<i32> {
        self.iter()
            .find(|var| var.domain_id == variable)
            .map(|var| var.scale)
    }

    /// The minimum value the whole left-hand side can take given the snapshot. Accumulation is
    /// done in `i64` so that `scale * bound` products over `i32` inputs cannot wrap.
    pub(crate) fn lb(&self, domains: &VariableDomains) -> Result<i64, AnalysisError> {
        self.iter().map(|var| var.lb(domains)).sum()
    }

    /// The maximum value the whole left-hand side can take given the snapshot.
    pub(crate) fn ub(&self, domains: &VariableDomains) -> Result<i64, AnalysisError> {
        self.iter().map(|var| var.ub(domains)).sum()
    }

    pub fn iter(&self) -> Iter<'_, ScaledVariable> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<ScaledVariable>> for LinearLessOrEqualLhs {
    fn from(value: Vec<ScaledVariable>) -> Self {
        LinearLessOrEqualLhs(value)
    }
}

impl From<Vec<(DomainId, i32)>> for LinearLessOrEqualLhs {
    fn from(value: Vec<(DomainId, i32)>) -> Self {
        LinearLessOrEqualLhs(value.iter().map(|(id, scale)| id.scaled(*scale)).collect())
    }
}

/// A learned linear inequality `sum(scale_i * x_i) <= rhs`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinearLessOrEqual {
    pub lhs: LinearLessOrEqualLhs,
    pub rhs: i32,
}

impl LinearLessOrEqual {
    /// Create an inequality, rejecting zero-scale terms with [`AnalysisError::ZeroScaleTerm`].
    /// An empty left-hand side is accepted as a degenerate input; it never propagates.
    pub fn new<L: Into<LinearLessOrEqualLhs>>(lhs: L, rhs: i32) -> Result<Self, AnalysisError> {
        let lhs = lhs.into();

        if let Some(var) = lhs.iter().find(|var| var.scale == 0) {
            return Err(AnalysisError::ZeroScaleTerm {
                domain_id: var.domain_id,
            });
        }

        Ok(Self { lhs, rhs })
    }

    /// Evaluate the inequality against the snapshot: `Some(true)` if it holds for every value
    /// combination, `Some(false)` if it holds for none, `None` if undecided.
    pub fn evaluate(&self, domains: &VariableDomains) -> Result<Option<bool>, AnalysisError> {
        let ub_lhs = self.lhs.ub(domains)?;
        let lb_lhs = self.lhs.lb(domains)?;

        if ub_lhs <= self.rhs as i64 {
            Ok(Some(true))
        } else if lb_lhs > self.rhs as i64 {
            Ok(Some(false))
        } else {
            Ok(None)
        }
    }

    pub fn slack(&self, domains: &VariableDomains) -> Result<i64, AnalysisError> {
        Ok(self.rhs as i64 - self.lhs.lb(domains)?)
    }

    pub fn is_conflicting(&self, domains: &VariableDomains) -> Result<bool, AnalysisError> {
        Ok(self.slack(domains)? < 0)
    }

    /// The terms whose bound the inequality would tighten, each with the bound the term may not
    /// exceed while every other term sits at its minimum contribution.
    ///
    /// This is a bounds-consistency violation test, not bound computation: the tightened bound
    /// itself is never derived, only compared against.
    pub fn variables_propagating(
        &self,
        domains: &VariableDomains,
    ) -> Result<Vec<(ScaledVariable, i64)>, AnalysisError> {
        let lb_lhs = self.lhs.lb(domains)?;

        let mut propagating = Vec::new();
        for var in self.lhs.iter() {
            let bound = self.rhs as i64 - (lb_lhs - var.lb(domains)?);
            if var.ub(domains)? > bound {
                propagating.push((*var, bound));
            }
        }

        Ok(propagating)
    }

    /// Whether re-applying the inequality to the snapshot would tighten at least one bound.
    pub fn is_propagating(&self, domains: &VariableDomains) -> Result<bool, AnalysisError> {
        Ok(!self.variables_propagating(domains)?.is_empty())
    }
}

impl Display for LinearLessOrEqual {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let lhs_mapped = self
            .lhs
            .iter()
            .sorted_by_key(|var| var.domain_id.id)
            .map(|var| {
                let s = var.scale;
                let v = var.domain_id.id;

                if s == 1 {
                    format!("x{v}")
                } else if s == -1 {
                    format!("-x{v}")
                } else {
                    format!("{s}x{v}")
                }
            })
            .join(" + ");

        write!(f, "{lhs_mapped} <= {}", self.rhs)
    }
}
