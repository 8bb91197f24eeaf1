//! # UserLoanHistory Entity
//!
//! 貸出履歴のドメインエンティティ

use serde::{Deserialize, Serialize};

/// 貸出状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserLoanStatus {
    /// 貸出中
    Loaned,
    /// 返却済み
    Returned,
}

/// 貸出履歴
///
/// 利用者IDと本の名前で貸出を記録する
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserLoanHistory {
    id: Option<i64>,
    user_id: i64,
    book_name: String,
    status: UserLoanStatus,
}

impl UserLoanHistory {
    pub fn new(user_id: i64, book_name: impl Into<String>, status: UserLoanStatus) -> Self {
        Self {
            id: None,
            user_id,
            book_name: book_name.into(),
            status,
        }
    }

    /// 保存先で採番されたIDを付与する
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    pub fn book_name(&self) -> &str {
        &self.book_name
    }

    pub fn status(&self) -> UserLoanStatus {
        self.status
    }

    #[inline]
    pub fn is_loaned(&self) -> bool {
        self.status == UserLoanStatus::Loaned
    }

    /// 返却済みにする（既に返却済みでも変化しない）
    pub fn do_return(&mut self) {
        self.status = UserLoanStatus::Returned;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_history() {
        let history = UserLoanHistory::new(1, "A", UserLoanStatus::Loaned);

        assert_eq!(history.user_id(), 1);
        assert_eq!(history.book_name(), "A");
        assert!(history.is_loaned());
    }

    #[test]
    fn test_do_return() {
        let mut history = UserLoanHistory::new(1, "A", UserLoanStatus::Loaned);

        history.do_return();
        assert_eq!(history.status(), UserLoanStatus::Returned);

        history.do_return();
        assert_eq!(history.status(), UserLoanStatus::Returned);
        assert!(!history.is_loaned());
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_string(&UserLoanStatus::Loaned).unwrap(),
            "\"LOANED\""
        );
        let parsed: UserLoanStatus = serde_json::from_str("\"RETURNED\"").unwrap();
        assert_eq!(parsed, UserLoanStatus::Returned);
    }
}
