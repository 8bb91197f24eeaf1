//! # Domain Repositories
//!
//! Repository trait（インターフェース）定義
//!
//! ## 特徴
//!
//! - Domain層では実装を持たない（traitの定義のみ）
//! - Adapter層で具体的な実装を提供
//! - 依存性逆転の原則（DIP）を実現
//!
//! `save` はIDのないエンティティに新しいIDを採番し、
//! IDのあるエンティティは同じIDの既存データを置き換える

pub mod book_repository;
pub mod user_loan_history_repository;
pub mod user_repository;
