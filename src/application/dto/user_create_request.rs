//! # User Create Request DTO
//!
//! 利用者登録リクエストのData Transfer Object

use serde::Deserialize;

/// 利用者登録リクエスト
///
/// 名前と年齢をそのまま運ぶだけの値オブジェクト。
/// 生成後に値を変更する手段はなく、検証も行わない
/// （名前の検証は `User::new` が担当する）
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserCreateRequest {
    name: Option<String>,
    age: Option<i32>,
}

impl UserCreateRequest {
    /// 新しい利用者登録リクエストを作成します。
    ///
    /// どちらの値も未入力（`None`）を許し、空文字や負の年齢もそのまま保持します。
    ///
    /// # 例
    ///
    /// ```
    /// use libraryapp::application::dto::user_create_request::UserCreateRequest;
    ///
    /// let request = UserCreateRequest::new(Some("Alice".to_string()), Some(30));
    ///
    /// assert_eq!(request.name(), Some("Alice"));
    /// assert_eq!(request.age(), Some(30));
    /// ```
    ///
    /// 未入力のまま作成：
    ///
    /// ```
    /// # use libraryapp::application::dto::user_create_request::UserCreateRequest;
    /// let request = UserCreateRequest::new(None, None);
    ///
    /// assert!(request.name().is_none());
    /// assert!(request.age().is_none());
    /// ```
    pub fn new(name: Option<String>, age: Option<i32>) -> Self {
        Self { name, age }
    }

    /// 作成時に渡された名前
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// 作成時に渡された年齢
    pub fn age(&self) -> Option<i32> {
        self.age
    }
}
