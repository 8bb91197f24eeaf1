//! # Get Book Statistics Use Case
//!
//! 分野別蔵書数ユースケース

use anyhow::Result;
use std::sync::Arc;

use crate::application::dto::book_stat_response::BookStatResponse;
use crate::domain::repositories::book_repository::BookRepository;
use crate::domain::services::book_statistics::BookStatisticsService;

/// 分野別蔵書数ユースケース
pub struct GetBookStatisticsUseCase<B: BookRepository> {
    book_repository: Arc<B>,
}

impl<B: BookRepository> GetBookStatisticsUseCase<B> {
    pub fn new(book_repository: Arc<B>) -> Self {
        Self { book_repository }
    }

    /// 分野ごとの蔵書数を返す
    ///
    /// 蔵書のない分野は含まない
    pub async fn execute(&self) -> Result<Vec<BookStatResponse>> {
        let books = self.book_repository.find_all().await?;

        Ok(BookStatisticsService::count_by_type(&books)
            .into_iter()
            .map(|(book_type, count)| BookStatResponse::new(book_type, count))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::book::{Book, BookType};
    use crate::domain::repositories::book_repository::MockBookRepository;

    fn assert_count(results: &[BookStatResponse], book_type: BookType, count: u64) {
        let target = results
            .iter()
            .find(|r| r.book_type == book_type)
            .map(|r| r.count);
        assert_eq!(target, Some(count));
    }

    #[tokio::test]
    async fn test_get_book_statistics() {
        let mut mock_repo = MockBookRepository::new();
        mock_repo.expect_find_all().returning(|| {
            Ok(vec![
                Book::new("A", BookType::Computer).unwrap().with_id(1),
                Book::new("B", BookType::Computer).unwrap().with_id(2),
                Book::new("C", BookType::Science).unwrap().with_id(3),
            ])
        });
        let use_case = GetBookStatisticsUseCase::new(Arc::new(mock_repo));

        let results = use_case.execute().await.unwrap();

        assert_eq!(results.len(), 2);
        assert_count(&results, BookType::Science, 1);
        assert_count(&results, BookType::Computer, 2);
    }
}
