//! # Return Book Use Case
//!
//! 返却ユースケース

use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;

use crate::application::dto::book_request::BookReturnRequest;
use crate::domain::error::LibraryError;
use crate::domain::repositories::user_loan_history_repository::UserLoanHistoryRepository;
use crate::domain::repositories::user_repository::UserRepository;

/// 返却ユースケース
pub struct ReturnBookUseCase<U: UserRepository, H: UserLoanHistoryRepository> {
    user_repository: Arc<U>,
    history_repository: Arc<H>,
}

impl<U: UserRepository, H: UserLoanHistoryRepository> ReturnBookUseCase<U, H> {
    pub fn new(user_repository: Arc<U>, history_repository: Arc<H>) -> Self {
        Self {
            user_repository,
            history_repository,
        }
    }

    /// 本を返却する
    ///
    /// 利用者の貸出中の履歴のうち、該当する本の最初の1件を返却済みにする
    ///
    /// # Errors
    ///
    /// - 利用者が存在しない場合に `LibraryError::UserNotFound`
    /// - 該当する貸出中の履歴がない場合に `LibraryError::LoanNotFound`
    pub async fn execute(&self, request: BookReturnRequest) -> Result<()> {
        let user = self
            .user_repository
            .find_by_name(&request.user_name)
            .await?
            .ok_or_else(|| LibraryError::UserNotFound(request.user_name.clone()))?;
        let user_id = user.id().context("Repository returned a user without id")?;

        let mut history = self
            .history_repository
            .find_by_user_id(user_id)
            .await?
            .into_iter()
            .find(|h| h.is_loaned() && h.book_name() == request.book_name)
            .ok_or_else(|| LibraryError::LoanNotFound(request.book_name.clone()))?;

        history.do_return();
        self.history_repository.save(history).await?;

        info!("{} returned book {}", user.name(), request.book_name);
        Ok(())
    }
}
