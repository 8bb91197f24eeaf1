//! # UserLoanHistory Repository Trait
//!
//! 貸出履歴の永続化を抽象化

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::user_loan_history::{UserLoanHistory, UserLoanStatus};

/// 貸出履歴リポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserLoanHistoryRepository: Send + Sync {
    /// 履歴を保存し、IDが付与された履歴を返す
    async fn save(&self, history: UserLoanHistory) -> Result<UserLoanHistory>;

    /// 同じ本の貸出中の履歴がなければ保存する
    ///
    /// 確認と保存は不可分に行う。既に貸出中なら何も保存せず `None` を返す
    async fn save_if_not_loaned(
        &self,
        history: UserLoanHistory,
    ) -> Result<Option<UserLoanHistory>>;

    /// 利用者の履歴を保存順で返す
    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<UserLoanHistory>>;

    /// 指定の本について、指定状態の履歴が存在するか
    async fn exists_by_book_name_and_status(
        &self,
        book_name: &str,
        status: UserLoanStatus,
    ) -> Result<bool>;

    /// 指定状態の履歴数を返す
    async fn count_by_status(&self, status: UserLoanStatus) -> Result<usize>;

    /// 全履歴を保存順で返す
    async fn find_all(&self) -> Result<Vec<UserLoanHistory>>;

    /// 利用者の履歴をすべて削除する
    async fn delete_by_user_id(&self, user_id: i64) -> Result<()>;
}
