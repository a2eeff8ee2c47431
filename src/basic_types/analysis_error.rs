use thiserror::Error;

use crate::basic_types::DomainId;

/// Failures raised when a learned constraint and a domain snapshot disagree on the data model.
///
/// All of these indicate an inconsistency in the upstream trace data; none of them is a
/// recoverable runtime path, so an analysis pass surfaces them instead of skipping the event.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("constraint references variable {domain_id} which is absent from the domain snapshot")]
    MissingVariable { domain_id: DomainId },
    #[error("linear inequality contains a zero-scale term for variable {domain_id}")]
    ZeroScaleTerm { domain_id: DomainId },
}
