//! # Save User Use Case
//!
//! 利用者登録ユースケース

use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;

use crate::application::dto::user_create_request::UserCreateRequest;
use crate::application::dto::user_response::UserResponse;
use crate::domain::entities::user::User;
use crate::domain::repositories::user_repository::UserRepository;

/// 利用者登録ユースケース
///
/// リクエストを `User` に変換して保存する
pub struct SaveUserUseCase<U: UserRepository> {
    user_repository: Arc<U>,
}

impl<U: UserRepository> SaveUserUseCase<U> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `user_repository` - 利用者リポジトリ
    pub fn new(user_repository: Arc<U>) -> Self {
        Self { user_repository }
    }

    /// 利用者を登録する
    ///
    /// # Arguments
    ///
    /// * `request` - 利用者登録リクエスト
    ///
    /// # Returns
    ///
    /// 保存された利用者
    ///
    /// # Errors
    ///
    /// 名前が未入力または空白の場合に `LibraryError::BlankName` を返す
    pub async fn execute(&self, request: UserCreateRequest) -> Result<UserResponse> {
        let user = User::new(request.name().unwrap_or_default(), request.age())?;

        let saved = self.user_repository.save(user).await?;
        let response =
            UserResponse::from_saved(&saved).context("Repository returned a user without id")?;

        info!("Saved user {} (id={})", response.name, response.id);
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::LibraryError;
    use crate::domain::repositories::user_repository::MockUserRepository;

    #[tokio::test]
    async fn test_save_user_without_age() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_save()
            .times(1)
            .withf(|user| user.name() == "최봉수" && user.age().is_none())
            .returning(|user| Ok(user.with_id(1)));
        let use_case = SaveUserUseCase::new(Arc::new(mock_repo));

        let result = use_case
            .execute(UserCreateRequest::new(Some("최봉수".to_string()), None))
            .await
            .unwrap();

        assert_eq!(result.id, 1);
        assert_eq!(result.name, "최봉수");
        assert!(result.age.is_none());
    }

    #[tokio::test]
    async fn test_save_user_with_age() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_save()
            .returning(|user| Ok(user.with_id(2)));
        let use_case = SaveUserUseCase::new(Arc::new(mock_repo));

        let result = use_case
            .execute(UserCreateRequest::new(Some("Alice".to_string()), Some(30)))
            .await
            .unwrap();

        assert_eq!(result.age, Some(30));
    }

    #[tokio::test]
    async fn test_save_user_missing_name_is_rejected() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_save().never();
        let use_case = SaveUserUseCase::new(Arc::new(mock_repo));

        let err = use_case
            .execute(UserCreateRequest::new(None, None))
            .await
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<LibraryError>(),
            Some(&LibraryError::BlankName)
        );
    }

    #[tokio::test]
    async fn test_save_user_empty_name_is_rejected() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo.expect_save().never();
        let use_case = SaveUserUseCase::new(Arc::new(mock_repo));

        let result = use_case
            .execute(UserCreateRequest::new(Some(String::new()), Some(0)))
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_save_user_repository_error() {
        let mut mock_repo = MockUserRepository::new();
        mock_repo
            .expect_save()
            .returning(|_| Err(anyhow::anyhow!("disk full")));
        let use_case = SaveUserUseCase::new(Arc::new(mock_repo));

        let err = use_case
            .execute(UserCreateRequest::new(Some("A".to_string()), None))
            .await
            .unwrap_err();

        assert!(err.to_string().contains("disk full"));
    }
}
