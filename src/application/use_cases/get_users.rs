//! # Get Users Use Case
//!
//! 利用者一覧ユースケース

use anyhow::Result;
use std::sync::Arc;

use crate::application::dto::user_response::UserResponse;
use crate::domain::repositories::user_repository::UserRepository;

/// 利用者一覧ユースケース
pub struct GetUsersUseCase<U: UserRepository> {
    user_repository: Arc<U>,
}

impl<U: UserRepository> GetUsersUseCase<U> {
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }

    /// 保存済みの全利用者を返す
    pub async fn execute(&self) -> Result<Vec<UserResponse>> {
        let users = self.user_repository.find_all().await?;

        Ok(users.iter().filter_map(UserResponse::from_saved).collect())
    }
}
