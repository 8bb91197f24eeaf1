//! # User Entity
//!
//! 図書館の利用者のドメインエンティティ

use super::book::Book;
use super::user_loan_history::{UserLoanHistory, UserLoanStatus};
use crate::domain::error::LibraryError;

/// 利用者
///
/// 名前が空白でないことを保証する。年齢は任意
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: Option<i64>,
    name: String,
    age: Option<i32>,
}

impl User {
    /// 新しい利用者を作成
    ///
    /// # Arguments
    ///
    /// * `name` - 利用者名
    /// * `age` - 年齢（未入力可）
    ///
    /// # Errors
    ///
    /// 名前が空白のみの場合に `LibraryError::BlankName` を返す
    pub fn new(name: impl Into<String>, age: Option<i32>) -> Result<Self, LibraryError> {
        let name = name.into();
        ensure_not_blank(&name)?;

        Ok(Self {
            id: None,
            name,
            age,
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

    pub fn age(&self) -> Option<i32> {
        self.age
    }

    /// 名前を変更する
    ///
    /// # Errors
    ///
    /// 新しい名前が空白のみの場合に `LibraryError::BlankName` を返し、名前は変わらない
    pub fn update_name(&mut self, name: impl Into<String>) -> Result<(), LibraryError> {
        let name = name.into();
        ensure_not_blank(&name)?;
        self.name = name;
        Ok(())
    }

    /// 本を借りる
    ///
    /// # Returns
    ///
    /// この利用者に紐づく貸出中の履歴
    ///
    /// # Errors
    ///
    /// 利用者がまだ保存されていない（IDがない）場合に `LibraryError::UnsavedUser` を返す
    pub fn loan_book(&self, book: &Book) -> Result<UserLoanHistory, LibraryError> {
        let user_id = self.id.ok_or(LibraryError::UnsavedUser)?;
        Ok(UserLoanHistory::new(
            user_id,
            book.name(),
            UserLoanStatus::Loaned,
        ))
    }
}

fn ensure_not_blank(name: &str) -> Result<(), LibraryError> {
    if name.trim().is_empty() {
        return Err(LibraryError::BlankName);
    }
    Ok(())
}
