//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## 利用者
//!
//! - **SaveUserUseCase**: 利用者の登録
//! - **GetUsersUseCase**: 利用者の一覧
//! - **UpdateUserNameUseCase**: 利用者名の変更
//! - **DeleteUserUseCase**: 利用者の削除
//!
//! ## 蔵書
//!
//! - **SaveBookUseCase**: 蔵書の登録
//! - **LoanBookUseCase**: 貸出
//! - **ReturnBookUseCase**: 返却
//! - **CountLoanedBooksUseCase**: 貸出中の冊数
//! - **GetBookStatisticsUseCase**: 分野別の蔵書数

pub mod count_loaned_books;
pub mod delete_user;
pub mod get_book_statistics;
pub mod get_users;
pub mod loan_book;
pub mod return_book;
pub mod save_book;
pub mod save_user;
pub mod update_user_name;
