//! # User Repository Trait
//!
//! 利用者の永続化を抽象化

use anyhow::Result;
use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::user::User;

/// 利用者リポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 利用者を保存し、IDが付与された利用者を返す
    async fn save(&self, user: User) -> Result<User>;

    /// IDで利用者を検索する
    async fn find_by_id(&self, id: i64) -> Result<Option<User>>;

    /// 名前で利用者を検索する（同名が複数いる場合は最初の一人）
    async fn find_by_name(&self, name: &str) -> Result<Option<User>>;

    /// 全利用者を保存順で返す
    async fn find_all(&self) -> Result<Vec<User>>;

    /// 利用者を削除する。存在しないIDは何もしない
    async fn delete(&self, id: i64) -> Result<()>;
}
