//! # Book Entity
//!
//! 蔵書とその分野

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::error::LibraryError;

/// 本の分野
///
/// 宣言順がそのまま統計の並び順になる
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookType {
    Computer,
    Economy,
    Society,
    Language,
    Science,
}

impl BookType {
    pub const ALL: [BookType; 5] = [
        BookType::Computer,
        BookType::Economy,
        BookType::Society,
        BookType::Language,
        BookType::Science,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BookType::Computer => "COMPUTER",
            BookType::Economy => "ECONOMY",
            BookType::Society => "SOCIETY",
            BookType::Language => "LANGUAGE",
            BookType::Science => "SCIENCE",
        }
    }
}

impl fmt::Display for BookType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookType {
    type Err = LibraryError;

    /// 大文字・小文字を区別せずに分野名を解釈する
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        BookType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| LibraryError::UnknownBookType(s.to_string()))
    }
}

/// 蔵書のドメインエンティティ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: Option<i64>,
    name: String,
    book_type: BookType,
}

impl Book {
    /// 新しい蔵書を作成
    ///
    /// # Errors
    ///
    /// 名前が空白のみの場合に `LibraryError::BlankName` を返す
    pub fn new(name: impl Into<String>, book_type: BookType) -> Result<Self, LibraryError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LibraryError::BlankName);
        }

        Ok(Self {
            id: None,
            name,
            book_type,
        })
    }

    /// 保存先で採番されたIDを付与する
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn book_type(&self) -> BookType {
        self.book_type
    }
}
