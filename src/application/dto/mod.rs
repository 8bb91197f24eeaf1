//! # Data Transfer Objects
//!
//! 外部からのリクエストと外部への応答を運ぶ値オブジェクト
//!
//! - **user_create_request**: 利用者登録リクエスト
//! - **user_update_request**: 利用者名変更リクエスト
//! - **user_response**: 利用者一覧の応答
//! - **book_request**: 蔵書登録・貸出・返却リクエスト
//! - **book_stat_response**: 分野別統計の応答

pub mod book_request;
pub mod book_stat_response;
pub mod user_create_request;
pub mod user_response;
pub mod user_update_request;
