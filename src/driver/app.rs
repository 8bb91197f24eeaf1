//! Application Wiring
//!
//! リポジトリとユースケースを組み立て、CLIコマンドを実行する

use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::repositories::json_library_repository::JsonLibraryRepository;
use crate::application::dto::book_request::{BookLoanRequest, BookRequest, BookReturnRequest};
use crate::application::dto::user_create_request::UserCreateRequest;
use crate::application::dto::user_update_request::UserUpdateRequest;
use crate::application::use_cases::count_loaned_books::CountLoanedBooksUseCase;
use crate::application::use_cases::delete_user::DeleteUserUseCase;
use crate::application::use_cases::get_book_statistics::GetBookStatisticsUseCase;
use crate::application::use_cases::get_users::GetUsersUseCase;
use crate::application::use_cases::loan_book::LoanBookUseCase;
use crate::application::use_cases::return_book::ReturnBookUseCase;
use crate::application::use_cases::save_book::SaveBookUseCase;
use crate::application::use_cases::save_user::SaveUserUseCase;
use crate::application::use_cases::update_user_name::UpdateUserNameUseCase;

use super::cli::{BookCommand, Command, UserCommand};

type Repo = JsonLibraryRepository;

/// Library Application
pub struct LibraryApp {
    save_user: SaveUserUseCase<Repo>,
    get_users: GetUsersUseCase<Repo>,
    update_user_name: UpdateUserNameUseCase<Repo>,
    delete_user: DeleteUserUseCase<Repo, Repo>,
    save_book: SaveBookUseCase<Repo>,
    loan_book: LoanBookUseCase<Repo, Repo, Repo>,
    return_book: ReturnBookUseCase<Repo, Repo>,
    count_loaned_books: CountLoanedBooksUseCase<Repo>,
    get_book_statistics: GetBookStatisticsUseCase<Repo>,
}

impl LibraryApp {
    /// 設定からデータファイルを決めてアプリを組み立てる
    pub fn new(config: &Config) -> Result<Self> {
        let data_path = config.resolved_data_path()?;
        info!("Using library data at {}", data_path.display());

        Ok(Self::with_repository(Arc::new(JsonLibraryRepository::new(
            data_path,
        ))))
    }

    /// Create the app with dependency injection
    pub fn with_repository(repo: Arc<Repo>) -> Self {
        Self {
            save_user: SaveUserUseCase::new(repo.clone()),
            get_users: GetUsersUseCase::new(repo.clone()),
            update_user_name: UpdateUserNameUseCase::new(repo.clone()),
            delete_user: DeleteUserUseCase::new(repo.clone(), repo.clone()),
            save_book: SaveBookUseCase::new(repo.clone()),
            loan_book: LoanBookUseCase::new(repo.clone(), repo.clone(), repo.clone()),
            return_book: ReturnBookUseCase::new(repo.clone(), repo.clone()),
            count_loaned_books: CountLoanedBooksUseCase::new(repo.clone()),
            get_book_statistics: GetBookStatisticsUseCase::new(repo),
        }
    }

    /// コマンドを実行し、標準出力に表示する文字列を返す
    pub async fn execute(&self, command: Command) -> Result<String> {
        match command {
            Command::User(command) => self.execute_user(command).await,
            Command::Book(command) => self.execute_book(command).await,
        }
    }

    async fn execute_user(&self, command: UserCommand) -> Result<String> {
        match command {
            UserCommand::Create { name, age, json } => {
                let request = create_request(name, age, json)?;
                let user = self.save_user.execute(request).await?;
                Ok(format!("✓ Saved user {} (id={})", user.name, user.id))
            }
            UserCommand::List => {
                let users = self.get_users.execute().await?;
                serde_json::to_string_pretty(&users).context("Failed to serialize users")
            }
            UserCommand::Rename { id, name } => {
                self.update_user_name
                    .execute(UserUpdateRequest::new(id, name.clone()))
                    .await?;
                Ok(format!("✓ Renamed user {} to {}", id, name))
            }
            UserCommand::Delete { name } => {
                self.delete_user.execute(&name).await?;
                Ok(format!("✓ Deleted user {}", name))
            }
        }
    }

    async fn execute_book(&self, command: BookCommand) -> Result<String> {
        match command {
            BookCommand::Create { name, book_type } => {
                self.save_book
                    .execute(BookRequest::new(name.clone(), book_type))
                    .await?;
                Ok(format!("✓ Saved book {} ({})", name, book_type))
            }
            BookCommand::Loan {
                user_name,
                book_name,
            } => {
                self.loan_book
                    .execute(BookLoanRequest::new(user_name.clone(), book_name.clone()))
                    .await?;
                Ok(format!("✓ Loaned {} to {}", book_name, user_name))
            }
            BookCommand::Return {
                user_name,
                book_name,
            } => {
                self.return_book
                    .execute(BookReturnRequest::new(user_name.clone(), book_name.clone()))
                    .await?;
                Ok(format!("✓ {} returned {}", user_name, book_name))
            }
            BookCommand::LoanedCount => {
                let count = self.count_loaned_books.execute().await?;
                Ok(count.to_string())
            }
            BookCommand::Stats => {
                let stats = self.get_book_statistics.execute().await?;
                serde_json::to_string_pretty(&stats).context("Failed to serialize statistics")
            }
        }
    }
}

/// フラグまたはJSONから利用者登録リクエストを作る
fn create_request(
    name: Option<String>,
    age: Option<i32>,
    json: Option<String>,
) -> Result<UserCreateRequest> {
    match json {
        Some(json) => serde_json::from_str(&json).context("Invalid user create request JSON"),
        None => Ok(UserCreateRequest::new(name, age)),
    }
}
