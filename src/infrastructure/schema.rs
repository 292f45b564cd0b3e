//! Schema DDL for the `Author` / `Books` pair.
//!
//! `MSSQL_DDL` is the reference definition for SQL Server. `SQLITE_DDL` is
//! the rendition executed by `db::init_db`: SQLite has no `NVARCHAR(n)` or
//! `DATE` enforcement, so both become CHECK constraints. `date(x)` yields NULL
//! for non-dates and echoes impossible days like `2020-02-30`; the `'+0 days'`
//! modifier normalizes those so the equality check catches them.

use std::fmt;
use std::str::FromStr;

pub const MSSQL_DDL: &str = r#"CREATE TABLE Author (
    AuthorId INT IDENTITY(1,1) NOT NULL PRIMARY KEY,
    AuthorName NVARCHAR(50) NOT NULL
);

CREATE TABLE Books (
    BookId INT IDENTITY(1,1) NOT NULL PRIMARY KEY,
    BookName NVARCHAR(50) NOT NULL,
    ReleaseDate DATE,
    AuthorId INT NOT NULL,
    CONSTRAINT FK_Books_Author FOREIGN KEY (AuthorId)
        REFERENCES Author (AuthorId)
        ON DELETE CASCADE
        ON UPDATE CASCADE
);
"#;

/// Maximum length, in characters, of `AuthorName` and `BookName`.
pub const NAME_MAX_LEN: usize = 50;

// AUTOINCREMENT keeps SQLite from reusing keys of deleted rows, like IDENTITY.
pub const SQLITE_CREATE_AUTHOR: &str = r#"CREATE TABLE IF NOT EXISTS Author (
    AuthorId INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
    AuthorName TEXT NOT NULL CHECK (length(AuthorName) <= 50)
);
"#;

pub const SQLITE_CREATE_BOOKS: &str = r#"CREATE TABLE IF NOT EXISTS Books (
    BookId INTEGER NOT NULL PRIMARY KEY AUTOINCREMENT,
    BookName TEXT NOT NULL CHECK (length(BookName) <= 50),
    ReleaseDate TEXT CHECK (
        ReleaseDate IS NULL
        OR (date(ReleaseDate, '+0 days') IS NOT NULL
            AND ReleaseDate = date(ReleaseDate, '+0 days'))
    ),
    AuthorId INTEGER NOT NULL,
    CONSTRAINT FK_Books_Author FOREIGN KEY (AuthorId)
        REFERENCES Author (AuthorId)
        ON DELETE CASCADE
        ON UPDATE CASCADE
);
"#;

pub const SQLITE_DDL: [&str; 2] = [SQLITE_CREATE_AUTHOR, SQLITE_CREATE_BOOKS];

/// SQL dialects the schema can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    MsSql,
    Sqlite,
}

impl Dialect {
    pub fn ddl(self) -> String {
        match self {
            Dialect::MsSql => MSSQL_DDL.to_string(),
            Dialect::Sqlite => SQLITE_DDL.join("\n"),
        }
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mssql" | "sqlserver" => Ok(Dialect::MsSql),
            "sqlite" => Ok(Dialect::Sqlite),
            other => Err(format!("unknown dialect '{}' (expected mssql or sqlite)", other)),
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::MsSql => write!(f, "mssql"),
            Dialect::Sqlite => write!(f, "sqlite"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialect_parses_case_insensitively() {
        assert_eq!("MSSQL".parse::<Dialect>(), Ok(Dialect::MsSql));
        assert_eq!("sqlserver".parse::<Dialect>(), Ok(Dialect::MsSql));
        assert_eq!("Sqlite".parse::<Dialect>(), Ok(Dialect::Sqlite));
        assert!("postgres".parse::<Dialect>().is_err());
    }

    #[test]
    fn both_dialects_declare_cascading_foreign_key() {
        for dialect in [Dialect::MsSql, Dialect::Sqlite] {
            let ddl = dialect.ddl();
            assert!(ddl.contains("CONSTRAINT FK_Books_Author FOREIGN KEY (AuthorId)"));
            assert!(ddl.contains("REFERENCES Author (AuthorId)"));
            assert!(ddl.contains("ON DELETE CASCADE"));
            assert!(ddl.contains("ON UPDATE CASCADE"));
        }
    }

    #[test]
    fn sqlite_release_date_check_normalizes_days() {
        assert!(SQLITE_CREATE_BOOKS.contains("date(ReleaseDate, '+0 days') IS NOT NULL"));
        assert!(SQLITE_CREATE_BOOKS.contains("ReleaseDate = date(ReleaseDate, '+0 days')"));
    }

    #[test]
    fn sqlite_length_checks_match_name_limit() {
        let limit = format!("<= {}", NAME_MAX_LEN);
        assert!(SQLITE_CREATE_AUTHOR.contains(&limit));
        assert!(SQLITE_CREATE_BOOKS.contains(&limit));
        assert!(MSSQL_DDL.contains(&format!("NVARCHAR({})", NAME_MAX_LEN)));
    }
}
