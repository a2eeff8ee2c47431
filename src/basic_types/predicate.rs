use crate::basic_types::AnalysisError;
use crate::basic_types::Domain;
use crate::basic_types::DomainId;
use crate::basic_types::VariableDomains;

/// An atomic constraint over a [`DomainId`]: either `[x >= v]`, `[x <= v]`, `[x != v]`, or
/// `[x == v]`. These are the only operators a learned nogood may carry; malformed operators in
/// trace data are a parsing-boundary concern and cannot be represented here.
#[derive(Clone, PartialEq, Eq, Copy, Hash)]
pub enum Predicate {
    LowerBound {
        domain_id: DomainId,
        lower_bound: i32,
    },
    UpperBound {
        domain_id: DomainId,
        upper_bound: i32,
    },
    NotEqual {
        domain_id: DomainId,
        not_equal_constant: i32,
    },
    Equal {
        domain_id: DomainId,
        equality_constant: i32,
    },
}

impl Predicate {
    /// Returns the [`DomainId`] this predicate constrains.
    pub fn get_domain(&self) -> DomainId {
        match *self {
            Predicate::LowerBound { domain_id, .. } => domain_id,
            Predicate::UpperBound { domain_id, .. } => domain_id,
            Predicate::NotEqual { domain_id, .. } => domain_id,
            Predicate::Equal { domain_id, .. } => domain_id,
        }
    }

    /// How many of the bound conditions encoded by this predicate hold in the snapshot.
    ///
    /// `LowerBound`, `UpperBound` and `Equal` contribute 0 or 1. `NotEqual` checks `lb > v` and
    /// `ub < v` independently and sums them, so on an inverted (empty) domain it contributes 2.
    /// That matches the original scoring formula and is deliberately not collapsed into an
    /// either/or.
    pub(crate) fn satisfied_count(&self, domains: &VariableDomains) -> Result<u32, AnalysisError> {
        let Domain {
            lower_bound: lb,
            upper_bound: ub,
        } = domains.domain(self.get_domain())?;

        Ok(match *self {
            Predicate::LowerBound { lower_bound, .. } => (lb >= lower_bound) as u32,
            Predicate::UpperBound { upper_bound, .. } => (ub <= upper_bound) as u32,
            Predicate::NotEqual {
                not_equal_constant, ..
            } => (lb > not_equal_constant) as u32 + (ub < not_equal_constant) as u32,
            Predicate::Equal {
                equality_constant, ..
            } => (lb == equality_constant && ub == equality_constant) as u32,
        })
    }
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Predicate::LowerBound {
                domain_id,
                lower_bound,
            } => write!(f, "[{} >= {}]", domain_id, lower_bound),
            Predicate::UpperBound {
                domain_id,
                upper_bound,
            } => write!(f, "[{} <= {}]", domain_id, upper_bound),
            Predicate::NotEqual {
                domain_id,
                not_equal_constant,
            } => write!(f, "[{} != {}]", domain_id, not_equal_constant),
            Predicate::Equal {
                domain_id,
                equality_constant,
            } => write!(f, "[{} == {}]", domain_id, equality_constant),
        }
    }
}

impl std::fmt::Debug for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}
