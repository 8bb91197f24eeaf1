//! # Domain Errors
//!
//! ドメインルール違反を表すエラー

use thiserror::Error;

/// 図書館ドメインのエラー
///
/// Use Case層では `anyhow::Error` に包まれて返されるため、
/// 呼び出し側は `downcast_ref::<LibraryError>()` で種別を判定できる
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LibraryError {
    #[error("name cannot be blank")]
    BlankName,

    #[error("user has not been saved yet")]
    UnsavedUser,

    #[error("user not found: {0}")]
    UserNotFound(String),

    #[error("unknown book type: {0}")]
    UnknownBookType(String),

    #[error("book not found: {0}")]
    BookNotFound(String),

    #[error("book is already loaned: {0}")]
    BookAlreadyLoaned(String),

    #[error("no active loan for book: {0}")]
    LoanNotFound(String),
}
