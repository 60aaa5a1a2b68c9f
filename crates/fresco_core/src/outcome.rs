use crate::FileReference;
use serde::{Deserialize, Serialize};

/// Terminal result of one refresh attempt for one file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum RefreshOutcome {
    /// The replayed request yielded a fresh reference for the file.
    #[display("refreshed")]
    Refreshed(FileReference),
    /// The replay succeeded but the response no longer mentions the file.
    ///
    /// The stale reference is gone for good. Retrying the same origin
    /// will not bring it back.
    #[display("not found")]
    NotFound,
    /// The origin carries no replayable context.
    #[display("origin invalid")]
    OriginInvalid,
    /// The replayed request itself failed. Retrying may succeed.
    #[display("request failed")]
    RequestFailed,
}

impl RefreshOutcome {
    /// True when the attempt produced a fresh reference.
    pub fn is_refreshed(&self) -> bool {
        matches!(self, Self::Refreshed(_))
    }

    /// The fresh reference, when there is one.
    pub fn reference(&self) -> Option<&FileReference> {
        match self {
            Self::Refreshed(reference) => Some(reference),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_refreshed_carries_a_reference() {
        let refreshed = RefreshOutcome::Refreshed(FileReference::from(b"ab".as_slice()));
        assert!(refreshed.is_refreshed());
        assert_eq!(
            refreshed.reference(),
            Some(&FileReference::from(b"ab".as_slice()))
        );
        for outcome in [
            RefreshOutcome::NotFound,
            RefreshOutcome::OriginInvalid,
            RefreshOutcome::RequestFailed,
        ] {
            assert!(!outcome.is_refreshed());
            assert_eq!(outcome.reference(), None);
        }
    }
}
