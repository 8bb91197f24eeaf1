//! # Delete User Use Case
//!
//! 利用者削除ユースケース

use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;

use crate::domain::error::LibraryError;
use crate::domain::repositories::user_loan_history_repository::UserLoanHistoryRepository;
use crate::domain::repositories::user_repository::UserRepository;

/// 利用者削除ユースケース
///
/// 利用者の貸出履歴も一緒に削除する
pub struct DeleteUserUseCase<U: UserRepository, H: UserLoanHistoryRepository> {
    user_repository: Arc<U>,
    history_repository: Arc<H>,
}

impl<U: UserRepository, H: UserLoanHistoryRepository> DeleteUserUseCase<U, H> {
    pub fn new(user_repository: Arc<U>, history_repository: Arc<H>) -> Self {
        Self {
            user_repository,
            history_repository,
        }
    }

    /// 名前で利用者を削除する
    ///
    /// # Errors
    ///
    /// 利用者が存在しない場合に `LibraryError::UserNotFound` を返す
    pub async fn execute(&self, name: &str) -> Result<()> {
        let user = self
            .user_repository
            .find_by_name(name)
            .await?
            .ok_or_else(|| LibraryError::UserNotFound(name.to_string()))?;
        let user_id = user.id().context("Repository returned a user without id")?;

        self.history_repository.delete_by_user_id(user_id).await?;
        self.user_repository.delete(user_id).await?;

        info!("Deleted user {} (id={})", name, user_id);
        Ok(())
    }
}
