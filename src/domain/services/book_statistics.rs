//! # Book Statistics Service
//!
//! 分野別の蔵書数を集計するサービス

use std::collections::BTreeMap;

use crate::domain::entities::book::{Book, BookType};

/// 蔵書統計サービス
pub struct BookStatisticsService;

impl BookStatisticsService {
    /// 分野ごとの蔵書数を数える
    ///
    /// # Returns
    ///
    /// 1冊以上ある分野だけを `BookType` の宣言順で返す
    pub fn count_by_type(books: &[Book]) -> Vec<(BookType, u64)> {
        let mut counts: BTreeMap<BookType, u64> = BTreeMap::new();
        for book in books {
            *counts.entry(book.book_type()).or_insert(0) += 1;
        }

        counts.into_iter().collect()
    }
}
