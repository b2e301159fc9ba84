use serde::Serialize;

use stayfinder_core::ServiceError;

/// What a page renders. An empty result set is a first-class display state
/// ("no hotels found"), distinct from a collaborator failure; nothing here
/// is fatal and every variant has a way back out.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Ready(T),
    EmptyResults,
    NotFound,
    /// Transient failure; the page offers a retry affordance.
    Failed(String),
}

impl<T> ViewState<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn ready(self) -> Option<T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Fold a collaborator outcome into a display state at the page
    /// boundary. Errors never propagate past here.
    pub fn from_result(result: Result<T, ServiceError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(ServiceError::NotFound(_)) => Self::NotFound,
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}
