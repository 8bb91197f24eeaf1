//! # Domain Layer
//!
//! 図書館アプリのビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - 外部依存を持たない（Rust標準ライブラリと最小限の依存のみ）
//! - フレームワークに依存しない
//! - データベースやCLIについて何も知らない
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（User, Book, UserLoanHistory）
//! - **error**: ドメインエラー
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（ビジネスルール）

pub mod entities;
pub mod error;
pub mod repositories;
pub mod services;
