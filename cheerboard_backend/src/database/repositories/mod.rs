mod boards;
mod comments;

use super::models::{BoardRecord, CommentRecord};
use anyhow::Result;
use rusqlite::Connection;

pub trait BoardRepository {
    /// Unconditional write keyed by id. An existing row with the same id is
    /// overwritten rather than rejected.
    fn upsert(&self, record: &BoardRecord) -> Result<()>;
    fn get(&self, id: &str) -> Result<Option<BoardRecord>>;
    /// Join codes carry no uniqueness constraint; on a collision the first
    /// matching row wins.
    fn get_by_join_code(&self, code: &str) -> Result<Option<BoardRecord>>;
    fn get_by_view_token(&self, token: &str) -> Result<Option<BoardRecord>>;
}

pub trait CommentRepository {
    fn upsert(&self, record: &CommentRecord) -> Result<()>;
    /// All comments on a board, oldest first.
    fn list_for_board(&self, board_id: &str) -> Result<Vec<CommentRecord>>;
}

/// Scoped access to the rusqlite-backed repository implementations.
pub struct SqliteRepositories<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteRepositories<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    pub fn boards(&self) -> impl BoardRepository + '_ {
        boards::SqliteBoardRepository { conn: self.conn }
    }

    pub fn comments(&self) -> impl CommentRepository + '_ {
        comments::SqliteCommentRepository { conn: self.conn }
    }
}
