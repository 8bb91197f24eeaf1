//! # Book Repository Trait
//!
//! 蔵書の永続化を抽象化

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::book::Book;

/// 蔵書リポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// 蔵書を保存し、IDが付与された蔵書を返す
    async fn save(&self, book: Book) -> Result<Book>;

    /// 名前で蔵書を検索する
    async fn find_by_name(&self, name: &str) -> Result<Option<Book>>;

    /// 全蔵書を保存順で返す
    async fn find_all(&self) -> Result<Vec<Book>>;
}
