use crate::database::models::CommentRecord;
use anyhow::Result;
use rusqlite::{params, Connection};

pub(super) struct SqliteCommentRepository<'conn> {
    pub(super) conn: &'conn Connection,
}

impl<'conn> super::CommentRepository for SqliteCommentRepository<'conn> {
    fn upsert(&self, record: &CommentRecord) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO comments (id, board_id, author, message, color, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(id) DO UPDATE SET
                board_id = excluded.board_id,
                author = excluded.author,
                message = excluded.message,
                color = excluded.color,
                created_at = excluded.created_at
            "#,
            params![
                record.id,
                record.board_id,
                record.author,
                record.message,
                record.color,
                record.created_at
            ],
        )?;
        Ok(())
    }

    fn list_for_board(&self, board_id: &str) -> Result<Vec<CommentRecord>> {
        // Ordering compares the raw RFC 3339 strings so sub-second precision
        // survives; datetime() would truncate it.
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, board_id, author, message, color, created_at
            FROM comments
            WHERE board_id = ?1
            ORDER BY created_at ASC
            "#,
        )?;
        let rows = stmt.query_map(params![board_id], |row| {
            Ok(CommentRecord {
                id: row.get(0)?,
                board_id: row.get(1)?,
                author: row.get(2)?,
                message: row.get(3)?,
                color: row.get(4)?,
                created_at: row.get(5)?,
            })
        })?;

        let mut comments = Vec::new();
        for row in rows {
            comments.push(row?);
        }
        Ok(comments)
    }
}
