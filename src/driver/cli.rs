//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::{Parser, Subcommand};

use crate::domain::entities::book::BookType;
use crate::domain::error::LibraryError;

/// 図書館の利用者・蔵書・貸出を管理するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "libraryapp")]
#[command(about = "Manage library users, books and loans", long_about = None)]
pub struct Args {
    /// Config file path
    #[arg(short, long, global = true, default_value = "./.libraryapp/config.json")]
    pub config: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Manage users
    #[command(subcommand)]
    User(UserCommand),

    /// Manage books and loans
    #[command(subcommand)]
    Book(BookCommand),
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    /// Register a user
    Create {
        #[arg(long, conflicts_with = "json")]
        name: Option<String>,

        #[arg(long, allow_negative_numbers = true, conflicts_with = "json")]
        age: Option<i32>,

        /// Request body as JSON, e.g. '{"name": "A", "age": 20}'
        #[arg(long)]
        json: Option<String>,
    },

    /// List users as JSON
    List,

    /// Change a user's name
    Rename {
        #[arg(long)]
        id: i64,

        #[arg(long)]
        name: String,
    },

    /// Delete a user and their loan history
    Delete {
        #[arg(long)]
        name: String,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum BookCommand {
    /// Register a book
    Create {
        #[arg(long)]
        name: String,

        /// COMPUTER, ECONOMY, SOCIETY, LANGUAGE or SCIENCE
        #[arg(long = "type", value_parser = parse_book_type)]
        book_type: BookType,
    },

    /// Loan a book to a user
    Loan {
        #[arg(long)]
        user_name: String,

        #[arg(long)]
        book_name: String,
    },

    /// Return a loaned book
    Return {
        #[arg(long)]
        user_name: String,

        #[arg(long)]
        book_name: String,
    },

    /// Print the number of books currently loaned
    LoanedCount,

    /// Print the number of books per type as JSON
    Stats,
}

fn parse_book_type(s: &str) -> Result<BookType, LibraryError> {
    s.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_config() {
        let args = Args::parse_from(["libraryapp", "user", "list"]);
        assert_eq!(args.config, "./.libraryapp/config.json");
        assert_eq!(args.command, Command::User(UserCommand::List));
    }

    #[test]
    fn test_args_custom_config_after_subcommand() {
        let args = Args::parse_from(["libraryapp", "book", "stats", "-c", "/custom/config.json"]);
        assert_eq!(args.config, "/custom/config.json");
        assert_eq!(args.command, Command::Book(BookCommand::Stats));
    }

    #[test]
    fn test_user_create_with_flags() {
        let args = Args::parse_from(["libraryapp", "user", "create", "--name", "A", "--age", "20"]);
        assert_eq!(
            args.command,
            Command::User(UserCommand::Create {
                name: Some("A".to_string()),
                age: Some(20),
                json: None,
            })
        );
    }

    #[test]
    fn test_user_create_negative_age() {
        let args = Args::parse_from(["libraryapp", "user", "create", "--name", "A", "--age", "-1"]);
        assert!(matches!(
            args.command,
            Command::User(UserCommand::Create { age: Some(-1), .. })
        ));
    }

    #[test]
    fn test_user_create_json_conflicts_with_name() {
        let result = Args::try_parse_from([
            "libraryapp",
            "user",
            "create",
            "--name",
            "A",
            "--json",
            "{}",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_book_create_parses_type() {
        let args = Args::parse_from(["libraryapp", "book", "create", "--name", "A", "--type", "science"]);
        assert_eq!(
            args.command,
            Command::Book(BookCommand::Create {
                name: "A".to_string(),
                book_type: BookType::Science,
            })
        );
    }

    #[test]
    fn test_book_create_rejects_unknown_type() {
        let result = Args::try_parse_from(["libraryapp", "book", "create", "--name", "A", "--type", "poetry"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_book_loan() {
        let args = Args::parse_from([
            "libraryapp",
            "book",
            "loan",
            "--user-name",
            "userA",
            "--book-name",
            "A",
        ]);
        assert_eq!(
            args.command,
            Command::Book(BookCommand::Loan {
                user_name: "userA".to_string(),
                book_name: "A".to_string(),
            })
        );
    }

    #[test]
    fn test_book_loaned_count() {
        let args = Args::parse_from(["libraryapp", "book", "loaned-count"]);
        assert_eq!(args.command, Command::Book(BookCommand::LoanedCount));
    }
}
