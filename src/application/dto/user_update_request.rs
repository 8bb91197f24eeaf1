//! # User Update Request DTO
//!
//! 利用者名変更リクエスト

use serde::Deserialize;

/// 利用者名変更リクエスト
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserUpdateRequest {
    id: i64,
    name: String,
}

impl UserUpdateRequest {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
