//! Domain-level error type used across all transition functions.
//!
//! Expected rule violations (rejected clues, forbidden actions, failed
//! preconditions) are part of the normal control-flow contract and are
//! returned, never panicked. `Invariant` is reserved for states that a
//! correct caller can never produce; hitting it signals a programming error
//! rather than a user-facing rule violation.

use thiserror::Error;

/// Reasons a clue or other user input is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationKind {
    /// Not a single alphabetic token, or on the blocklist.
    InvalidFormat,
    /// Clue equals a board word (case-insensitive).
    ExactMatch,
    /// Clue contains, or is contained in, a board word.
    AffixCollision,
    /// Clue is a simple plural variant of a board word.
    PluralCollision,
    /// Clue count outside the accepted range.
    InvalidCount,
    Other(String),
}

/// Actor/phase combinations that are never allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PermissionKind {
    NotOwner,
    NotHinter,
    NotSeeker,
    WrongTeam,
    ActionNotPermittedInPhase,
    Other(String),
}

/// Preconditions the caller should re-check state against.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PreconditionKind {
    PhaseMismatch,
    GamePaused,
    GameOver,
    NotEnoughPlayers,
    CardAlreadyRevealed,
    CardOutOfRange,
    RolesNotFilled,
    Other(String),
}

/// Missing resources in domain terms.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NotFoundKind {
    Player,
    WordPack,
    Other(String),
}

/// Central domain error type.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Input/user validation or business rule violation
    #[error("validation {0:?}: {1}")]
    Validation(ValidationKind, String),
    /// Action not allowed for this actor in this phase
    #[error("permission {0:?}: {1}")]
    Permission(PermissionKind, String),
    /// State precondition not met
    #[error("precondition {0:?}: {1}")]
    Precondition(PreconditionKind, String),
    /// Missing resource in domain terms
    #[error("not found {0:?}: {1}")]
    NotFound(NotFoundKind, String),
    /// Word pool too small for a board; requires reconfiguration
    #[error("insufficient words: need {needed}, have {available}")]
    InsufficientWords { needed: usize, available: usize },
    /// Internal invariant violated; indicates a programming error
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl DomainError {
    pub fn validation(kind: ValidationKind, detail: impl Into<String>) -> Self {
        Self::Validation(kind, detail.into())
    }
    pub fn permission(kind: PermissionKind, detail: impl Into<String>) -> Self {
        Self::Permission(kind, detail.into())
    }
    pub fn precondition(kind: PreconditionKind, detail: impl Into<String>) -> Self {
        Self::Precondition(kind, detail.into())
    }
    pub fn not_found(kind: NotFoundKind, detail: impl Into<String>) -> Self {
        Self::NotFound(kind, detail.into())
    }
    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }
}
