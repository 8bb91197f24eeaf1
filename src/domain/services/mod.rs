//! # Domain Services
//!
//! 特定のエンティティに属さないビジネスルール

pub mod book_statistics;
