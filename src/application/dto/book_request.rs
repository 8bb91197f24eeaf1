//! # Book Request DTOs
//!
//! 蔵書の登録・貸出・返却リクエスト

use serde::Deserialize;

use crate::domain::entities::book::BookType;

/// 蔵書登録リクエスト
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BookRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub book_type: BookType,
}

impl BookRequest {
    pub fn new(name: impl Into<String>, book_type: BookType) -> Self {
        Self {
            name: name.into(),
            book_type,
        }
    }
}

/// 貸出リクエスト
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookLoanRequest {
    pub user_name: String,
    pub book_name: String,
}

impl BookLoanRequest {
    pub fn new(user_name: impl Into<String>, book_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            book_name: book_name.into(),
        }
    }
}

/// 返却リクエスト
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookReturnRequest {
    pub user_name: String,
    pub book_name: String,
}

impl BookReturnRequest {
    pub fn new(user_name: impl Into<String>, book_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            book_name: book_name.into(),
        }
    }
}
