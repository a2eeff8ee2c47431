//! The data model the analysis operates over: variable identifiers, per-conflict domain
//! snapshots, and the two learned-constraint representations with their propagation checks.

mod analysis_error;
mod domain_id;
mod hash_structures;
mod learned_constraint;
mod linear_less_or_equal;
mod nogood;
mod predicate;
mod variable_domains;

pub use analysis_error::*;
pub use domain_id::*;
pub use hash_structures::*;
pub use learned_constraint::*;
pub use linear_less_or_equal::*;
pub use nogood::*;
pub use predicate::*;
pub use variable_domains::*;
