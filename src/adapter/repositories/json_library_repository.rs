//! JSON Library Repository Implementation
//!
//! 利用者・蔵書・貸出履歴を1つのJSONファイルで永続化するRepository実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::entities::book::{Book, BookType};
use crate::domain::entities::user::User;
use crate::domain::entities::user_loan_history::{UserLoanHistory, UserLoanStatus};
use crate::domain::repositories::book_repository::BookRepository;
use crate::domain::repositories::user_loan_history_repository::UserLoanHistoryRepository;
use crate::domain::repositories::user_repository::UserRepository;

/// JSONファイルベースの図書館リポジトリ
///
/// 読み込み・変更・書き込みの一連の処理はプロセス内のロックで直列化される
pub struct JsonLibraryRepository {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

/// 図書館データ（JSON永続化用の内部表現）
#[derive(Debug, Default, Deserialize, Serialize)]
struct LibraryDataJson {
    #[serde(default)]
    next_user_id: i64,
    #[serde(default)]
    next_book_id: i64,
    #[serde(default)]
    next_history_id: i64,
    #[serde(default)]
    users: Vec<UserJson>,
    #[serde(default)]
    books: Vec<BookJson>,
    #[serde(default)]
    loan_histories: Vec<UserLoanHistoryJson>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct UserJson {
    id: i64,
    name: String,
    age: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct BookJson {
    id: i64,
    name: String,
    #[serde(rename = "type")]
    book_type: BookType,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
struct UserLoanHistoryJson {
    id: i64,
    user_id: i64,
    book_name: String,
    status: UserLoanStatus,
}

impl LibraryDataJson {
    /// 採番カウンタを保存済みの最大IDまで引き上げる
    ///
    /// カウンタのない文書を読み込んでも、新規IDが既存レコードと衝突しない
    fn reconcile_counters(&mut self) {
        let max_user_id = self.users.iter().map(|u| u.id).max().unwrap_or(0);
        let max_book_id = self.books.iter().map(|b| b.id).max().unwrap_or(0);
        let max_history_id = self.loan_histories.iter().map(|h| h.id).max().unwrap_or(0);

        self.next_user_id = self.next_user_id.max(max_user_id);
        self.next_book_id = self.next_book_id.max(max_book_id);
        self.next_history_id = self.next_history_id.max(max_history_id);
    }
}

trait StoredRecord {
    fn record_id(&self) -> i64;
}

impl StoredRecord for UserJson {
    fn record_id(&self) -> i64 {
        self.id
    }
}

impl StoredRecord for BookJson {
    fn record_id(&self) -> i64 {
        self.id
    }
}

impl StoredRecord for UserLoanHistoryJson {
    fn record_id(&self) -> i64 {
        self.id
    }
}

impl UserJson {
    fn from_domain(user: &User, id: i64) -> Self {
        Self {
            id,
            name: user.name().to_string(),
            age: user.age(),
        }
    }

    fn to_domain(&self) -> Result<User> {
        let user = User::new(self.name.clone(), self.age)
            .with_context(|| format!("Invalid stored user id={}", self.id))?;
        Ok(user.with_id(self.id))
    }
}

impl BookJson {
    fn from_domain(book: &Book, id: i64) -> Self {
        Self {
            id,
            name: book.name().to_string(),
            book_type: book.book_type(),
        }
    }

    fn to_domain(&self) -> Result<Book> {
        let book = Book::new(self.name.clone(), self.book_type)
            .with_context(|| format!("Invalid stored book id={}", self.id))?;
        Ok(book.with_id(self.id))
    }
}

impl UserLoanHistoryJson {
    fn from_domain(history: &UserLoanHistory, id: i64) -> Self {
        Self {
            id,
            user_id: history.user_id(),
            book_name: history.book_name().to_string(),
            status: history.status(),
        }
    }

    fn to_domain(&self) -> UserLoanHistory {
        UserLoanHistory::new(self.user_id, self.book_name.clone(), self.status).with_id(self.id)
    }
}

/// IDのないエンティティには採番し、既存IDは採番カウンタに反映する
fn assign_id(counter: &mut i64, id: Option<i64>) -> Result<i64> {
    match id {
        Some(id) => {
            *counter = (*counter).max(id);
            Ok(id)
        }
        None => {
            *counter = counter.checked_add(1).context("Id counter overflow")?;
            Ok(*counter)
        }
    }
}

/// 同じIDのレコードを置き換え、なければ末尾に追加する
fn upsert<T: StoredRecord>(records: &mut Vec<T>, record: T) {
    match records
        .iter_mut()
        .find(|r| r.record_id() == record.record_id())
    {
        Some(slot) => *slot = record,
        None => records.push(record),
    }
}

impl JsonLibraryRepository {
    /// 新しいリポジトリを作成
    ///
    /// # Arguments
    ///
    /// * `path` - データファイルのパス（存在しなければ空の図書館として扱う）
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// ファイルからデータを読み込む（同期処理）
    fn load_sync(path: &Path) -> Result<LibraryDataJson> {
        if !path.exists() {
            debug!("No library data at {}, starting empty", path.display());
            return Ok(LibraryDataJson::default());
        }

        let content = fs::read_to_string(path).context("Failed to read library data file")?;
        let mut data: LibraryDataJson =
            serde_json::from_str(&content).context("Failed to parse library data JSON")?;
        data.reconcile_counters();

        debug!(
            "Loaded library data: {} users, {} books, {} loan histories",
            data.users.len(),
            data.books.len(),
            data.loan_histories.len()
        );

        Ok(data)
    }

    /// ファイルにデータを保存する（同期処理）
    ///
    /// 一時ファイルに書いてから置き換える
    fn save_sync(path: &Path, data: &LibraryDataJson) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).context("Failed to create data directory")?;
            }
        }

        let json = serde_json::to_string_pretty(data).context("Failed to serialize library data")?;

        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, json).context("Failed to write library data file")?;
        fs::rename(&tmp_path, path).context("Failed to replace library data file")?;

        info!(
            "Saved library data: {} users, {} books, {} loan histories",
            data.users.len(),
            data.books.len(),
            data.loan_histories.len()
        );

        Ok(())
    }

    async fn read<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&LibraryDataJson) -> Result<T> + Send + 'static,
    {
        let path = self.path.clone();
        let lock = Arc::clone(&self.lock);
        tokio::task::spawn_blocking(move || {
            let _guard = lock
                .lock()
                .map_err(|_| anyhow::anyhow!("Library data lock poisoned"))?;
            let data = Self::load_sync(&path)?;
            f(&data)
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }

    async fn write<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut LibraryDataJson) -> Result<T> + Send + 'static,
    {
        let path = self.path.clone();
        let lock = Arc::clone(&self.lock);
        tokio::task::spawn_blocking(move || {
            let _guard = lock
                .lock()
                .map_err(|_| anyhow::anyhow!("Library data lock poisoned"))?;
            let mut data = Self::load_sync(&path)?;
            let result = f(&mut data)?;
            Self::save_sync(&path, &data)?;
            Ok(result)
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

#[async_trait]
impl UserRepository for JsonLibraryRepository {
    async fn save(&self, user: User) -> Result<User> {
        self.write(move |data| {
            let id = assign_id(&mut data.next_user_id, user.id())?;
            upsert(&mut data.users, UserJson::from_domain(&user, id));
            Ok(user.with_id(id))
        })
        .await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        self.read(move |data| {
            data.users
                .iter()
                .find(|u| u.id == id)
                .map(UserJson::to_domain)
                .transpose()
        })
        .await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<User>> {
        let name = name.to_string();
        self.read(move |data| {
            data.users
                .iter()
                .find(|u| u.name == name)
                .map(UserJson::to_domain)
                .transpose()
        })
        .await
    }

    async fn find_all(&self) -> Result<Vec<User>> {
        self.read(|data| data.users.iter().map(UserJson::to_domain).collect())
            .await
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.write(move |data| {
            data.users.retain(|u| u.id != id);
            Ok(())
        })
        .await
    }
}

#[async_trait]
impl BookRepository for JsonLibraryRepository {
    async fn save(&self, book: Book) -> Result<Book> {
        self.write(move |data| {
            let id = assign_id(&mut data.next_book_id, book.id())?;
            upsert(&mut data.books, BookJson::from_domain(&book, id));
            Ok(book.with_id(id))
        })
        .await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Book>> {
        let name = name.to_string();
        self.read(move |data| {
            data.books
                .iter()
                .find(|b| b.name == name)
                .map(BookJson::to_domain)
                .transpose()
        })
        .await
    }

    async fn find_all(&self) -> Result<Vec<Book>> {
        self.read(|data| data.books.iter().map(BookJson::to_domain).collect())
            .await
    }
}

#[async_trait]
impl UserLoanHistoryRepository for JsonLibraryRepository {
    async fn save(&self, history: UserLoanHistory) -> Result<UserLoanHistory> {
        self.write(move |data| {
            let id = assign_id(&mut data.next_history_id, history.id())?;
            upsert(
                &mut data.loan_histories,
                UserLoanHistoryJson::from_domain(&history, id),
            );
            Ok(history.with_id(id))
        })
        .await
    }

    async fn save_if_not_loaned(
        &self,
        history: UserLoanHistory,
    ) -> Result<Option<UserLoanHistory>> {
        self.write(move |data| {
            let already_loaned = data.loan_histories.iter().any(|h| {
                h.book_name == history.book_name() && h.status == UserLoanStatus::Loaned
            });
            if already_loaned {
                return Ok(None);
            }

            let id = assign_id(&mut data.next_history_id, history.id())?;
            upsert(
                &mut data.loan_histories,
                UserLoanHistoryJson::from_domain(&history, id),
            );
            Ok(Some(history.with_id(id)))
        })
        .await
    }

    async fn find_by_user_id(&self, user_id: i64) -> Result<Vec<UserLoanHistory>> {
        self.read(move |data| {
            Ok(data
                .loan_histories
                .iter()
                .filter(|h| h.user_id == user_id)
                .map(UserLoanHistoryJson::to_domain)
                .collect())
        })
        .await
    }

    async fn exists_by_book_name_and_status(
        &self,
        book_name: &str,
        status: UserLoanStatus,
    ) -> Result<bool> {
        let book_name = book_name.to_string();
        self.read(move |data| {
            Ok(data
                .loan_histories
                .iter()
                .any(|h| h.book_name == book_name && h.status == status))
        })
        .await
    }

    async fn count_by_status(&self, status: UserLoanStatus) -> Result<usize> {
        self.read(move |data| {
            Ok(data
                .loan_histories
                .iter()
                .filter(|h| h.status == status)
                .count())
        })
        .await
    }

    async fn find_all(&self) -> Result<Vec<UserLoanHistory>> {
        self.read(|data| {
            Ok(data
                .loan_histories
                .iter()
                .map(UserLoanHistoryJson::to_domain)
                .collect())
        })
        .await
    }

    async fn delete_by_user_id(&self, user_id: i64) -> Result<()> {
        self.write(move |data| {
            data.loan_histories.retain(|h| h.user_id != user_id);
            Ok(())
        })
        .await
    }
}
