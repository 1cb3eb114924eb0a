//! Database operations

use rand::distr::Alphanumeric;
use rand::Rng;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

use super::models::*;
use crate::account::{MailAddress, Nickname};
use crate::error::Result;
use crate::fen::Fen;
use crate::identity::Identity;
use crate::ports::{
    AccountCommands, AccountQueries, Authenticator, PositionCommands, PositionQueries,
    RegisterAccountCommand, RegisterPositionCommand, TokenIssuer, User,
};
use crate::position::PositionName;

const TOKEN_LENGTH: usize = 48;

const ACCOUNT_COLUMNS: &str = "identity, nickname, mail_address, hashed_password, created_at";
const POSITION_COLUMNS: &str = "identity, owner, name, fen, created_at";

pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS accounts (
                identity TEXT PRIMARY KEY NOT NULL,
                nickname TEXT UNIQUE NOT NULL,
                mail_address TEXT UNIQUE NOT NULL,
                hashed_password TEXT NOT NULL,
                created_at INTEGER NOT NULL
            );

            CREATE TABLE IF NOT EXISTS positions (
                identity TEXT PRIMARY KEY NOT NULL,
                owner TEXT NOT NULL,
                name TEXT NOT NULL,
                fen TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                UNIQUE (owner, name),
                UNIQUE (owner, fen),
                FOREIGN KEY (owner) REFERENCES accounts(identity)
            );

            CREATE TABLE IF NOT EXISTS auth_tokens (
                token TEXT PRIMARY KEY NOT NULL,
                owner TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                FOREIGN KEY (owner) REFERENCES accounts(identity)
            );

            CREATE INDEX IF NOT EXISTS idx_positions_owner ON positions(owner);
            CREATE INDEX IF NOT EXISTS idx_auth_tokens_owner ON auth_tokens(owner);
            "#,
        )?;
        Ok(())
    }

    fn now() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default()
    }

    pub fn count_accounts(&self) -> Result<u32> {
        let count: u32 = self
            .conn
            .query_row("SELECT COUNT(*) FROM accounts", [], |row| row.get(0))?;
        Ok(count)
    }

    pub fn count_positions(&self) -> Result<u32> {
        let count: u32 = self
            .conn
            .query_row("SELECT COUNT(*) FROM positions", [], |row| row.get(0))?;
        Ok(count)
    }

    fn find_account(&self, column: &str, value: &str) -> Result<Option<Account>> {
        let account = self
            .conn
            .query_row(
                &format!("SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE {column} = ?1"),
                params![value],
                AccountRow::read,
            )
            .optional()?;
        account.map(AccountRow::into_account).transpose()
    }
}

/// An `accounts` row as stored, before its identity is parsed.
struct AccountRow {
    identity: String,
    nickname: String,
    mail_address: String,
    hashed_password: String,
    created_at: u64,
}

impl AccountRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            identity: row.get(0)?,
            nickname: row.get(1)?,
            mail_address: row.get(2)?,
            hashed_password: row.get(3)?,
            created_at: row.get(4)?,
        })
    }

    fn into_account(self) -> Result<Account> {
        Ok(Account {
            identity: Identity::parse(&self.identity)?,
            nickname: self.nickname,
            mail_address: self.mail_address,
            hashed_password: self.hashed_password,
            created_at: self.created_at,
        })
    }
}

/// A `positions` row as stored, before its identities are parsed.
struct PositionRow {
    identity: String,
    owner: String,
    name: String,
    fen: String,
    created_at: u64,
}

impl PositionRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            identity: row.get(0)?,
            owner: row.get(1)?,
            name: row.get(2)?,
            fen: row.get(3)?,
            created_at: row.get(4)?,
        })
    }

    fn into_position(self) -> Result<StoredPosition> {
        Ok(StoredPosition {
            identity: Identity::parse(&self.identity)?,
            owner: Identity::parse(&self.owner)?,
            name: self.name,
            fen: self.fen,
            created_at: self.created_at,
        })
    }
}

impl AccountQueries for Database {
    fn find_by_nickname(&self, nickname: &Nickname) -> Result<Option<Account>> {
        self.find_account("nickname", nickname.as_str())
    }

    fn find_by_mail_address(&self, mail_address: &MailAddress) -> Result<Option<Account>> {
        self.find_account("mail_address", mail_address.as_str())
    }
}

impl AccountCommands for Database {
    fn register_account(&self, command: &RegisterAccountCommand) -> Result<()> {
        self.conn.execute(
            &format!("INSERT INTO accounts ({ACCOUNT_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5)"),
            params![
                command.identity.to_string(),
                command.nickname.as_str(),
                command.mail_address.as_str(),
                command.hashed_password.as_str(),
                Self::now(),
            ],
        )?;
        debug!(identity = %command.identity, "account row inserted");
        Ok(())
    }
}

impl PositionQueries for Database {
    fn find_by_owner_and_name(
        &self,
        owner: &Identity,
        name: &PositionName,
    ) -> Result<Option<StoredPosition>> {
        let position = self
            .conn
            .query_row(
                &format!("SELECT {POSITION_COLUMNS} FROM positions WHERE owner = ?1 AND name = ?2"),
                params![owner.to_string(), name.as_str()],
                PositionRow::read,
            )
            .optional()?;
        position.map(PositionRow::into_position).transpose()
    }

    fn find_by_owner_and_fen(&self, owner: &Identity, fen: &Fen) -> Result<Option<StoredPosition>> {
        let position = self
            .conn
            .query_row(
                &format!("SELECT {POSITION_COLUMNS} FROM positions WHERE owner = ?1 AND fen = ?2"),
                params![owner.to_string(), fen.as_str()],
                PositionRow::read,
            )
            .optional()?;
        position.map(PositionRow::into_position).transpose()
    }

    fn find_by_owner(&self, owner: &Identity) -> Result<Vec<StoredPosition>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {POSITION_COLUMNS} FROM positions WHERE owner = ?1 ORDER BY created_at, name"
        ))?;

        let rows = stmt
            .query_map(params![owner.to_string()], PositionRow::read)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        rows.into_iter().map(PositionRow::into_position).collect()
    }
}

impl PositionCommands for Database {
    fn register_position(&self, command: &RegisterPositionCommand) -> Result<()> {
        self.conn.execute(
            &format!("INSERT INTO positions ({POSITION_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5)"),
            params![
                command.identity.to_string(),
                command.owner.to_string(),
                command.name.as_str(),
                command.fen.as_str(),
                Self::now(),
            ],
        )?;
        debug!(identity = %command.identity, owner = %command.owner, "position row inserted");
        Ok(())
    }
}

impl Authenticator for Database {
    fn authenticate(&self, token: &str) -> Result<Option<User>> {
        let owner: Option<String> = self
            .conn
            .query_row(
                "SELECT owner FROM auth_tokens WHERE token = ?1",
                params![token],
                |row| row.get(0),
            )
            .optional()?;

        match owner {
            Some(owner) => Ok(Some(User {
                identity: Identity::parse(&owner)?,
            })),
            None => Ok(None),
        }
    }
}

impl TokenIssuer for Database {
    fn issue_token(&self, owner: &Identity) -> Result<String> {
        let token: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LENGTH)
            .map(char::from)
            .collect();

        self.conn.execute(
            "INSERT INTO auth_tokens (token, owner, created_at) VALUES (?1, ?2, ?3)",
            params![token, owner.to_string(), Self::now()],
        )?;
        debug!(%owner, "authentication token issued");
        Ok(token)
    }
}
