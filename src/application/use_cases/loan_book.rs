//! # Loan Book Use Case
//!
//! 貸出ユースケース

use anyhow::Result;
use log::{info, warn};
use std::sync::Arc;

use crate::application::dto::book_request::BookLoanRequest;
use crate::domain::entities::user_loan_history::UserLoanStatus;
use crate::domain::error::LibraryError;
use crate::domain::repositories::book_repository::BookRepository;
use crate::domain::repositories::user_loan_history_repository::UserLoanHistoryRepository;
use crate::domain::repositories::user_repository::UserRepository;

/// 貸出ユースケース
///
/// 同じ本は同時に一人にしか貸し出さない
pub struct LoanBookUseCase<B, U, H>
where
    B: BookRepository,
    U: UserRepository,
    H: UserLoanHistoryRepository,
{
    book_repository: Arc<B>,
    user_repository: Arc<U>,
    history_repository: Arc<H>,
}

impl<B, U, H> LoanBookUseCase<B, U, H>
where
    B: BookRepository,
    U: UserRepository,
    H: UserLoanHistoryRepository,
{
    pub fn new(
        book_repository: Arc<B>,
        user_repository: Arc<U>,
        history_repository: Arc<H>,
    ) -> Self {
        Self {
            book_repository,
            user_repository,
            history_repository,
        }
    }

    /// 本を貸し出す
    ///
    /// # Errors
    ///
    /// - 本が存在しない場合に `LibraryError::BookNotFound`
    /// - 既に貸出中の場合に `LibraryError::BookAlreadyLoaned`
    /// - 利用者が存在しない場合に `LibraryError::UserNotFound`
    pub async fn execute(&self, request: BookLoanRequest) -> Result<()> {
        let book = self
            .book_repository
            .find_by_name(&request.book_name)
            .await?
            .ok_or_else(|| LibraryError::BookNotFound(request.book_name.clone()))?;

        let already_loaned = self
            .history_repository
            .exists_by_book_name_and_status(book.name(), UserLoanStatus::Loaned)
            .await?;
        if already_loaned {
            warn!("Book {} is already loaned", book.name());
            return Err(LibraryError::BookAlreadyLoaned(book.name().to_string()).into());
        }

        let user = self
            .user_repository
            .find_by_name(&request.user_name)
            .await?
            .ok_or_else(|| LibraryError::UserNotFound(request.user_name.clone()))?;

        // 確認後に他の貸出が割り込んだ場合もここで弾かれる
        let history = user.loan_book(&book)?;
        if self
            .history_repository
            .save_if_not_loaned(history)
            .await?
            .is_none()
        {
            warn!("Book {} was loaned concurrently", book.name());
            return Err(LibraryError::BookAlreadyLoaned(book.name().to_string()).into());
        }

        info!("Loaned book {} to {}", book.name(), user.name());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::book::{Book, BookType};
    use crate::domain::entities::user::User;
    use crate::domain::repositories::book_repository::MockBookRepository;
    use crate::domain::repositories::user_loan_history_repository::MockUserLoanHistoryRepository;
    use crate::domain::repositories::user_repository::MockUserRepository;

    fn book_repo_with(name: &'static str) -> MockBookRepository {
        let mut repo = MockBookRepository::new();
        repo.expect_find_by_name().returning(move |wanted| {
            if wanted == name {
                Ok(Some(Book::new(name, BookType::Computer).unwrap().with_id(1)))
            } else {
                Ok(None)
            }
        });
        repo
    }

    fn user_repo_with(name: &'static str, id: i64) -> MockUserRepository {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_name().returning(move |wanted| {
            if wanted == name {
                Ok(Some(User::new(name, None).unwrap().with_id(id)))
            } else {
                Ok(None)
            }
        });
        repo
    }

    #[tokio::test]
    async fn test_loan_book() {
        let mut history_repo = MockUserLoanHistoryRepository::new();
        history_repo
            .expect_exists_by_book_name_and_status()
            .withf(|name, status| name == "A" && *status == UserLoanStatus::Loaned)
            .returning(|_, _| Ok(false));
        history_repo
            .expect_save_if_not_loaned()
            .times(1)
            .withf(|h| h.user_id() == 10 && h.book_name() == "A" && h.is_loaned())
            .returning(|h| Ok(Some(h.with_id(1))));

        let use_case = LoanBookUseCase::new(
            Arc::new(book_repo_with("A")),
            Arc::new(user_repo_with("userA", 10)),
            Arc::new(history_repo),
        );

        let result = use_case.execute(BookLoanRequest::new("userA", "A")).await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_loan_book_already_loaned() {
        let mut history_repo = MockUserLoanHistoryRepository::new();
        history_repo
            .expect_exists_by_book_name_and_status()
            .returning(|_, _| Ok(true));
        history_repo.expect_save_if_not_loaned().never();

        let use_case = LoanBookUseCase::new(
            Arc::new(book_repo_with("A")),
            Arc::new(user_repo_with("userA", 10)),
            Arc::new(history_repo),
        );

        let err = use_case
            .execute(BookLoanRequest::new("userA", "A"))
            .await
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<LibraryError>(),
            Some(&LibraryError::BookAlreadyLoaned("A".to_string()))
        );
    }

    #[tokio::test]
    async fn test_loan_unknown_book() {
        let mut history_repo = MockUserLoanHistoryRepository::new();
        history_repo.expect_save_if_not_loaned().never();

        let use_case = LoanBookUseCase::new(
            Arc::new(book_repo_with("A")),
            Arc::new(user_repo_with("userA", 10)),
            Arc::new(history_repo),
        );

        let err = use_case
            .execute(BookLoanRequest::new("userA", "Z"))
            .await
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<LibraryError>(),
            Some(&LibraryError::BookNotFound("Z".to_string()))
        );
    }

    #[tokio::test]
    async fn test_loan_book_unknown_user() {
        let mut history_repo = MockUserLoanHistoryRepository::new();
        history_repo
            .expect_exists_by_book_name_and_status()
            .returning(|_, _| Ok(false));
        history_repo.expect_save_if_not_loaned().never();

        let use_case = LoanBookUseCase::new(
            Arc::new(book_repo_with("A")),
            Arc::new(user_repo_with("userA", 10)),
            Arc::new(history_repo),
        );

        let err = use_case
            .execute(BookLoanRequest::new("nobody", "A"))
            .await
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<LibraryError>(),
            Some(&LibraryError::UserNotFound("nobody".to_string()))
        );
    }

    #[tokio::test]
    async fn test_loan_book_taken_between_check_and_save() {
        let mut history_repo = MockUserLoanHistoryRepository::new();
        history_repo
            .expect_exists_by_book_name_and_status()
            .returning(|_, _| Ok(false));
        history_repo
            .expect_save_if_not_loaned()
            .times(1)
            .returning(|_| Ok(None));

        let use_case = LoanBookUseCase::new(
            Arc::new(book_repo_with("A")),
            Arc::new(user_repo_with("userA", 10)),
            Arc::new(history_repo),
        );

        let err = use_case
            .execute(BookLoanRequest::new("userA", "A"))
            .await
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<LibraryError>(),
            Some(&LibraryError::BookAlreadyLoaned("A".to_string()))
        );
    }
}
