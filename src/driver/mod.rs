//! # Driver Layer (Presentation)
//!
//! CLIやその他の外部インターフェースを提供
//!
//! ## 特徴
//!
//! - Use Caseを呼び出してビジネスフローを起動
//! - 依存性注入（DI）を行い、全てを組み立てる
//! - ユーザーとのインターフェース
//!
//! ## 構成要素
//!
//! - **cli**: CLI引数のパース
//! - **app**: コマンドとユースケースの結線

pub mod app;
pub mod cli;

pub use app::LibraryApp;
pub use cli::Args;
