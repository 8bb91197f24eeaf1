//! # Count Loaned Books Use Case
//!
//! 貸出中の冊数を数えるユースケース

use anyhow::Result;
use std::sync::Arc;

use crate::domain::entities::user_loan_history::UserLoanStatus;
use crate::domain::repositories::user_loan_history_repository::UserLoanHistoryRepository;

/// 貸出中冊数ユースケース
pub struct CountLoanedBooksUseCase<H: UserLoanHistoryRepository> {
    history_repository: Arc<H>,
}

impl<H: UserLoanHistoryRepository> CountLoanedBooksUseCase<H> {
    pub fn new(history_repository: Arc<H>) -> Self {
        Self { history_repository }
    }

    pub async fn execute(&self) -> Result<usize> {
        self.history_repository
            .count_by_status(UserLoanStatus::Loaned)
            .await
    }
}
