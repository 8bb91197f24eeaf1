//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **User**: 図書館の利用者
//! - **Book**: 蔵書
//! - **UserLoanHistory**: 利用者ごとの貸出履歴

pub mod book;
pub mod user;
pub mod user_loan_history;
