//! Render states for CMS-backed pages
//!
//! A fetch result is reduced to exactly one of four terminal states, checked
//! in this order: the fetch failed, the keyed record is missing, the list is
//! empty, or there is something to show.

mod meta;
mod trusted;

pub use meta::{OpenGraph, PageMeta};
pub use trusted::TrustedHtml;

use crate::api::{FetchResult, Fetched};

/// Outcome of a page's content lookup
#[derive(Debug, Clone, PartialEq)]
pub enum RenderState<T> {
    /// The fetch failed; `what` names the resource for the user-facing message
    Error { what: &'static str },
    /// A keyed lookup found nothing
    NotFound,
    /// A list query returned no records
    Empty,
    Populated(T),
}

/// Discriminant of a [`RenderState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderKind {
    Error,
    NotFound,
    Empty,
    Populated,
}

impl<T> RenderState<T> {
    /// State for a single-record lookup
    pub fn single(what: &'static str, result: FetchResult<Option<T>>) -> Self {
        match result {
            Err(e) => {
                tracing::warn!("Error while fetching {}: {}", what, e);
                Self::Error { what }
            }
            Ok(Fetched { data: None, .. }) => Self::NotFound,
            Ok(Fetched {
                data: Some(record), ..
            }) => Self::Populated(record),
        }
    }

    pub fn kind(&self) -> RenderKind {
        match self {
            Self::Error { .. } => RenderKind::Error,
            Self::NotFound => RenderKind::NotFound,
            Self::Empty => RenderKind::Empty,
            Self::Populated(_) => RenderKind::Populated,
        }
    }

    /// Take the populated value, or pass the terminal state through
    pub fn into_populated<U>(self) -> Result<T, RenderState<U>> {
        match self {
            Self::Populated(value) => Ok(value),
            Self::Error { what } => Err(RenderState::Error { what }),
            Self::NotFound => Err(RenderState::NotFound),
            Self::Empty => Err(RenderState::Empty),
        }
    }
}

/// Message shown for [`RenderState::Error`]; never includes the failure detail
pub fn error_message(what: &str) -> String {
    format!("Error while fetching {}", what)
}

impl<T> RenderState<Fetched<Vec<T>>> {
    /// State for a list query; pagination metadata is kept when populated
    pub fn list(what: &'static str, result: FetchResult<Vec<T>>) -> Self {
        match result {
            Err(e) => {
                tracing::warn!("Error while fetching {}: {}", what, e);
                Self::Error { what }
            }
            Ok(fetched) if fetched.data.is_empty() => Self::Empty,
            Ok(fetched) => Self::Populated(fetched),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{FetchError, PaginationMeta};

    #[test]
    fn test_single_states() {
        let failed: RenderState<u32> =
            RenderState::single("Blog", Err(FetchError::Network("refused".to_string())));
        assert_eq!(failed, RenderState::Error { what: "Blog" });

        let missing: RenderState<u32> = RenderState::single("Blog", Ok(Fetched::new(None, None)));
        assert_eq!(missing.kind(), RenderKind::NotFound);

        let found = RenderState::single("Blog", Ok(Fetched::new(Some(7), None)));
        assert_eq!(found, RenderState::Populated(7));
    }

    #[test]
    fn test_list_states() {
        let failed: RenderState<Fetched<Vec<u32>>> =
            RenderState::list("Lessons", Err(FetchError::Parse("bad".to_string())));
        assert_eq!(failed.kind(), RenderKind::Error);

        let empty: RenderState<Fetched<Vec<u32>>> = RenderState::list(
            "Lessons",
            Ok(Fetched::new(vec![], Some(PaginationMeta { total: 0 }))),
        );
        assert_eq!(empty, RenderState::Empty);

        let populated = RenderState::list(
            "Lessons",
            Ok(Fetched::new(vec![1, 2], Some(PaginationMeta { total: 12 }))),
        );
        match populated {
            RenderState::Populated(fetched) => assert_eq!(fetched.total(), Some(12)),
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn test_into_populated() {
        assert_eq!(RenderState::Populated(3).into_populated::<()>(), Ok(3));
        assert_eq!(
            RenderState::<u8>::NotFound.into_populated::<String>(),
            Err(RenderState::NotFound)
        );
    }
}
