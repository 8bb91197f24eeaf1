//! # Update User Name Use Case
//!
//! 利用者名変更ユースケース

use anyhow::Result;
use log::info;
use std::sync::Arc;

use crate::application::dto::user_update_request::UserUpdateRequest;
use crate::domain::error::LibraryError;
use crate::domain::repositories::user_repository::UserRepository;

/// 利用者名変更ユースケース
pub struct UpdateUserNameUseCase<U: UserRepository> {
    user_repository: Arc<U>,
}

impl<U: UserRepository> UpdateUserNameUseCase<U> {
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }

    /// 利用者名を変更する
    ///
    /// # Errors
    ///
    /// - 利用者が存在しない場合に `LibraryError::UserNotFound`
    /// - 新しい名前が空白の場合に `LibraryError::BlankName`
    pub async fn execute(&self, request: UserUpdateRequest) -> Result<()> {
        let mut user = self
            .user_repository
            .find_by_id(request.id())
            .await?
            .ok_or_else(|| LibraryError::UserNotFound(format!("id={}", request.id())))?;

        let old_name = user.name().to_string();
        user.update_name(request.name())?;
        self.user_repository.save(user).await?;

        info!(
            "Renamed user id={} from {} to {}",
            request.id(),
            old_name,
            request.name()
        );
        Ok(())
    }
}
