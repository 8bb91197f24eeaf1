//! # User Response DTO
//!
//! 利用者の応答表現

use serde::Serialize;

use crate::domain::entities::user::User;

/// 保存済み利用者の応答
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub age: Option<i32>,
}

impl UserResponse {
    /// 保存済みの利用者から応答を作る
    ///
    /// IDのない利用者は `None`
    pub fn from_saved(user: &User) -> Option<Self> {
        Some(Self {
            id: user.id()?,
            name: user.name().to_string(),
            age: user.age(),
        })
    }
}
