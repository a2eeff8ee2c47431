//! # Learned-constraint analysis
//! Offline analysis of the propagation strength of constraints learned by a CP solver.
//!
//! During search, conflict analysis produces a learned constraint per conflict: either a nogood
//! (a clause of atomic bound predicates) or, for linear learning schemes, a scaled linear
//! inequality. This crate answers, for a recorded conflict-point snapshot of the variable
//! domains, the question "would re-applying that constraint here tighten at least one variable's
//! bound?" and aggregates the answers into a per-constraint effectiveness ratio.
//!
//! The crate consumes already-parsed data and performs no I/O. Building the inputs looks like
//! this:
//! ```rust
//! use learned_constraint_analysis::basic_types::DomainId;
//! use learned_constraint_analysis::basic_types::LearnedConstraint;
//! use learned_constraint_analysis::basic_types::LearnedItemId;
//! use learned_constraint_analysis::basic_types::LinearLessOrEqual;
//! use learned_constraint_analysis::basic_types::VariableDomains;
//! use learned_constraint_analysis::statistics::analyze;
//! use learned_constraint_analysis::statistics::ConstraintPropagations;
//!
//! let x = DomainId::new(0);
//! let y = DomainId::new(1);
//!
//! // x + y <= 3, seen at one conflict where x, y were both in [0, 10].
//! let inequality = LinearLessOrEqual::new(vec![x.scaled(1), y.scaled(1)], 3).unwrap();
//! let record = ConstraintPropagations {
//!     learned_id: LearnedItemId::Inequality(0),
//!     constraint: LearnedConstraint::Inequality(inequality),
//!     domains_at_conflicts: vec![VariableDomains::from(vec![(x, 0, 10), (y, 0, 10)])],
//! };
//!
//! let report = analyze([record]).unwrap();
//! assert_eq!(report.get(LearnedItemId::Inequality(0)).unwrap().ratio(), 1.0);
//! ```
//!
//! The propagation checks are pure functions over one immutable snapshot each; snapshots may be
//! shared freely across threads, and an analysis pass can be partitioned per learned item and the
//! resulting reports merged.

pub mod basic_types;
pub mod statistics;
