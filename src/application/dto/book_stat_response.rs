//! # Book Stat Response DTO
//!
//! 分野別蔵書数の応答

use serde::Serialize;

use crate::domain::entities::book::BookType;

/// 分野別の蔵書数
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookStatResponse {
    #[serde(rename = "type")]
    pub book_type: BookType,
    pub count: u64,
}

impl BookStatResponse {
    pub fn new(book_type: BookType, count: u64) -> Self {
        Self { book_type, count }
    }
}
