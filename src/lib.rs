//! # Libraryapp
//!
//! 図書館の利用者・蔵書・貸出を管理するツール
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: ビジネスの核心的なルールとエンティティ（外部依存なし）
//! - **Application層**: DTOとアプリケーション固有のビジネスフロー（ユースケース）
//! - **Adapter層**: 外部システムとの統合（JSONファイル、設定ファイル）
//! - **Driver層**: CLI、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（DTO・ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
