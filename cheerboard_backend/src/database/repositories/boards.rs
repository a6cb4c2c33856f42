use crate::database::models::BoardRecord;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

pub(super) struct SqliteBoardRepository<'conn> {
    pub(super) conn: &'conn Connection,
}

impl<'conn> super::BoardRepository for SqliteBoardRepository<'conn> {
    fn upsert(&self, record: &BoardRecord) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO boards (id, aesthetic, recipient_name, join_code, view_token, created_at, contributor_link, view_link)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            ON CONFLICT(id) DO UPDATE SET
                aesthetic = excluded.aesthetic,
                recipient_name = excluded.recipient_name,
                join_code = excluded.join_code,
                view_token = excluded.view_token,
                created_at = excluded.created_at,
                contributor_link = excluded.contributor_link,
                view_link = excluded.view_link
            "#,
            params![
                record.id,
                record.aesthetic,
                record.recipient_name,
                record.join_code,
                record.view_token,
                record.created_at,
                record.contributor_link,
                record.view_link
            ],
        )?;
        Ok(())
    }

    fn get(&self, id: &str) -> Result<Option<BoardRecord>> {
        let row = self
            .conn
            .query_row(
                r#"
                SELECT id, aesthetic, recipient_name, join_code, view_token, created_at, contributor_link, view_link
                FROM boards
                WHERE id = ?1
                "#,
                params![id],
                |row| {
                    Ok(BoardRecord {
                        id: row.get(0)?,
                        aesthetic: row.get(1)?,
                        recipient_name: row.get(2)?,
                        join_code: row.get(3)?,
                        view_token: row.get(4)?,
                        created_at: row.get(5)?,
                        contributor_link: row.get(6)?,
                        view_link: row.get(7)?,
                    })
                },
            )
            .optional()?;
        Ok(row)
    }

    fn get_by_join_code(&self, code: &str) -> Result<Option<BoardRecord>> {
        let row = self
            .conn
            .query_row(
                r#"
                SELECT id, aesthetic, recipient_name, join_code, view_token, created_at, contributor_link, view_link
                FROM boards
                WHERE join_code = ?1
                LIMIT 1
                "#,
                params![code],
                |row| {
                    Ok(BoardRecord {
                        id: row.get(0)?,
                        aesthetic: row.get(1)?,
                        recipient_name: row.get(2)?,
                        join_code: row.get(3)?,
                        view_token: row.get(4)?,
                        created_at: row.get(5)?,
                        contributor_link: row.get(6)?,
                        view_link: row.get(7)?,
                    })
                },
            )
            .optional()?;
        Ok(row)
    }

    fn get_by_view_token(&self, token: &str) -> Result<Option<BoardRecord>> {
        let row = self
            .conn
            .query_row(
                r#"
                SELECT id, aesthetic, recipient_name, join_code, view_token, created_at, contributor_link, view_link
                FROM boards
                WHERE view_token = ?1
                LIMIT 1
                "#,
                params![token],
                |row| {
                    Ok(BoardRecord {
                        id: row.get(0)?,
                        aesthetic: row.get(1)?,
                        recipient_name: row.get(2)?,
                        join_code: row.get(3)?,
                        view_token: row.get(4)?,
                        created_at: row.get(5)?,
                        contributor_link: row.get(6)?,
                        view_link: row.get(7)?,
                    })
                },
            )
            .optional()?;
        Ok(row)
    }
}
