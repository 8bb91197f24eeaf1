//! # Save Book Use Case
//!
//! 蔵書登録ユースケース

use anyhow::Result;
use log::info;
use std::sync::Arc;

use crate::application::dto::book_request::BookRequest;
use crate::domain::entities::book::Book;
use crate::domain::repositories::book_repository::BookRepository;

/// 蔵書登録ユースケース
pub struct SaveBookUseCase<B: BookRepository> {
    book_repository: Arc<B>,
}

impl<B: BookRepository> SaveBookUseCase<B> {
    pub fn new(book_repository: Arc<B>) -> Self {
        Self { book_repository }
    }

    /// 蔵書を登録する
    ///
    /// # Errors
    ///
    /// 名前が空白の場合に `LibraryError::BlankName` を返す
    pub async fn execute(&self, request: BookRequest) -> Result<()> {
        let book = Book::new(request.name, request.book_type)?;
        let saved = self.book_repository.save(book).await?;

        info!("Saved book {} ({})", saved.name(), saved.book_type());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::book::BookType;
    use crate::domain::error::LibraryError;
    use crate::domain::repositories::book_repository::MockBookRepository;

    #[tokio::test]
    async fn test_save_book() {
        let mut mock_repo = MockBookRepository::new();
        mock_repo
            .expect_save()
            .times(1)
            .withf(|book| book.name() == "A" && book.book_type() == BookType::Computer)
            .returning(|book| Ok(book.with_id(1)));
        let use_case = SaveBookUseCase::new(Arc::new(mock_repo));

        let result = use_case
            .execute(BookRequest::new("A", BookType::Computer))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_save_book_blank_name() {
        let mut mock_repo = MockBookRepository::new();
        mock_repo.expect_save().never();
        let use_case = SaveBookUseCase::new(Arc::new(mock_repo));

        let err = use_case
            .execute(BookRequest::new("", BookType::Computer))
            .await
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<LibraryError>(),
            Some(&LibraryError::BlankName)
        );
    }
}
