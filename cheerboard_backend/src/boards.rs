use crate::database::models::{BoardRecord, CommentRecord};
use crate::database::repositories::{BoardRepository, CommentRepository};
use crate::database::Database;
use crate::utils::now_utc_iso;
use anyhow::Result;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Clone)]
pub struct BoardService {
    database: Database,
}

impl BoardService {
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    pub fn create_board(&self, input: CreateBoardInput) -> Result<BoardView> {
        let board_id = Uuid::new_v4().to_string();
        let view_token = Uuid::new_v4().to_string();
        let record = BoardRecord {
            id: board_id.clone(),
            aesthetic: input
                .aesthetic
                .unwrap_or_else(|| "professional".to_string()),
            recipient_name: input
                .recipient_name
                .unwrap_or_else(|| "Someone Special".to_string()),
            join_code: generate_join_code(),
            view_token: view_token.clone(),
            created_at: now_utc_iso(),
            contributor_link: format!("/index.html?contribute={board_id}"),
            view_link: format!("/index.html?view={view_token}"),
        };

        self.database
            .with_repositories(|repos| repos.boards().upsert(&record))?;

        Ok(BoardView::from_record(record))
    }

    pub fn get_board(&self, board_id: &str) -> Result<Option<BoardView>> {
        self.database.with_repositories(|repos| {
            Ok(repos.boards().get(board_id)?.map(BoardView::from_record))
        })
    }

    pub fn get_board_by_join_code(&self, code: &str) -> Result<Option<BoardSummary>> {
        // Codes are stored uppercase, so lookups are case-insensitive.
        let code = code.to_uppercase();
        self.database.with_repositories(|repos| {
            Ok(repos
                .boards()
                .get_by_join_code(&code)?
                .map(BoardSummary::from_record))
        })
    }

    pub fn view_board(&self, token: &str) -> Result<Option<BoardDetails>> {
        self.database.with_repositories(|repos| {
            let Some(board) = repos.boards().get_by_view_token(token)? else {
                return Ok(None);
            };
            let comments = repos.comments().list_for_board(&board.id)?;
            Ok(Some(BoardDetails {
                board: BoardView::from_record(board),
                comments: comments.into_iter().map(CommentView::from_record).collect(),
            }))
        })
    }

    pub fn add_comment(
        &self,
        board_id: &str,
        input: CreateCommentInput,
    ) -> Result<Option<CommentView>> {
        let record = CommentRecord {
            id: Uuid::new_v4().to_string(),
            board_id: board_id.to_string(),
            author: input.author.unwrap_or_else(|| "Anonymous".to_string()),
            message: input.message.unwrap_or_default(),
            color: input.color.unwrap_or_else(|| "#FFD700".to_string()),
            created_at: now_utc_iso(),
        };

        self.database.with_repositories(|repos| {
            // None means the board is absent, which callers report as 404
            // rather than an internal error.
            if repos.boards().get(board_id)?.is_none() {
                return Ok(None);
            }
            repos.comments().upsert(&record)?;
            Ok(Some(CommentView::from_record(record)))
        })
    }

    pub fn list_comments(&self, board_id: &str) -> Result<Option<Vec<CommentView>>> {
        self.database.with_repositories(|repos| {
            if repos.boards().get(board_id)?.is_none() {
                return Ok(None);
            }
            let comments = repos.comments().list_for_board(board_id)?;
            Ok(Some(
                comments.into_iter().map(CommentView::from_record).collect(),
            ))
        })
    }
}

fn generate_join_code() -> String {
    const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let mut rng = rand::rng();
    (0..6)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardView {
    pub id: String,
    pub aesthetic: String,
    pub recipient_name: String,
    pub join_code: String,
    pub view_token: String,
    pub created_at: String,
    pub contributor_link: String,
    pub view_link: String,
}

/// The subset a join-code lookup reveals: enough for a contributor to land
/// on the right board, without handing out the view token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardSummary {
    pub id: String,
    pub aesthetic: String,
    pub recipient_name: String,
    pub join_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentView {
    pub id: String,
    pub author: String,
    pub message: String,
    pub color: String,
    pub created_at: String,
}

/// Full read-only rendering behind the view token: board fields at the top
/// level with the comment list as a sibling `comments` array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardDetails {
    #[serde(flatten)]
    pub board: BoardView,
    pub comments: Vec<CommentView>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBoardInput {
    pub aesthetic: Option<String>,
    pub recipient_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCommentInput {
    pub author: Option<String>,
    pub message: Option<String>,
    pub color: Option<String>,
}

impl BoardView {
    fn from_record(record: BoardRecord) -> Self {
        Self {
            id: record.id,
            aesthetic: record.aesthetic,
            recipient_name: record.recipient_name,
            join_code: record.join_code,
            view_token: record.view_token,
            created_at: record.created_at,
            contributor_link: record.contributor_link,
            view_link: record.view_link,
        }
    }
}

impl BoardSummary {
    fn from_record(record: BoardRecord) -> Self {
        Self {
            id: record.id,
            aesthetic: record.aesthetic,
            recipient_name: record.recipient_name,
            join_code: record.join_code,
        }
    }
}

impl CommentView {
    fn from_record(record: CommentRecord) -> Self {
        Self {
            id: record.id,
            author: record.author,
            message: record.message,
            color: record.color,
            created_at: record.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::Database;
    use rusqlite::Connection;

    fn setup_service() -> BoardService {
        let conn = Connection::open_in_memory().expect("in-memory db");
        let db = Database::from_connection(conn, true);
        db.ensure_migrations().expect("migrations");
        BoardService::new(db)
    }

    #[test]
    fn board_creation_fills_defaults_and_generated_fields() {
        let service = setup_service();
        let board = service
            .create_board(CreateBoardInput::default())
            .expect("create board");

        assert_eq!(board.aesthetic, "professional");
        assert_eq!(board.recipient_name, "Someone Special");
        assert_eq!(board.join_code.len(), 6);
        assert!(board
            .join_code
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit()));
        assert_ne!(board.id, board.view_token);
        assert_eq!(
            board.contributor_link,
            format!("/index.html?contribute={}", board.id)
        );
        assert_eq!(
            board.view_link,
            format!("/index.html?view={}", board.view_token)
        );

        let fetched = service
            .get_board(&board.id)
            .expect("lookup")
            .expect("board exists");
        assert_eq!(fetched.join_code, board.join_code);
        assert_eq!(fetched.created_at, board.created_at);
    }

    #[test]
    fn board_creation_keeps_provided_fields() {
        let service = setup_service();
        let board = service
            .create_board(CreateBoardInput {
                aesthetic: Some("party".into()),
                recipient_name: Some("Ada".into()),
            })
            .expect("create board");
        assert_eq!(board.aesthetic, "party");
        assert_eq!(board.recipient_name, "Ada");
    }

    #[test]
    fn join_code_lookup_ignores_case_and_hides_the_token() {
        let service = setup_service();
        let board = service
            .create_board(CreateBoardInput::default())
            .expect("create board");

        let summary = service
            .get_board_by_join_code(&board.join_code.to_lowercase())
            .expect("lookup")
            .expect("board matches");
        assert_eq!(summary.id, board.id);
        assert_eq!(summary.join_code, board.join_code);

        let json = serde_json::to_value(&summary).expect("serialize summary");
        assert!(json.get("view_token").is_none());
        assert!(json.get("view_link").is_none());

        assert!(service
            .get_board_by_join_code("ZZZZZZ")
            .expect("lookup")
            .is_none());
    }

    #[test]
    fn comments_require_an_existing_board() {
        let service = setup_service();
        let added = service
            .add_comment("no-such-board", CreateCommentInput::default())
            .expect("add comment");
        assert!(added.is_none());
        assert!(service
            .list_comments("no-such-board")
            .expect("list comments")
            .is_none());
    }

    #[test]
    fn comments_fill_defaults_and_list_oldest_first() {
        let service = setup_service();
        let board = service
            .create_board(CreateBoardInput::default())
            .expect("create board");

        let first = service
            .add_comment(&board.id, CreateCommentInput::default())
            .expect("add comment")
            .expect("board exists");
        assert_eq!(first.author, "Anonymous");
        assert_eq!(first.message, "");
        assert_eq!(first.color, "#FFD700");

        for n in 1..3 {
            service
                .add_comment(
                    &board.id,
                    CreateCommentInput {
                        author: Some(format!("author-{n}")),
                        message: Some(format!("message {n}")),
                        color: Some("#FF0000".into()),
                    },
                )
                .expect("add comment")
                .expect("board exists");
        }

        let comments = service
            .list_comments(&board.id)
            .expect("list comments")
            .expect("board exists");
        assert_eq!(comments.len(), 3);
        assert_eq!(comments[0].id, first.id);
        assert_eq!(comments[1].message, "message 1");
        assert_eq!(comments[2].message, "message 2");
        assert!(comments
            .windows(2)
            .all(|pair| pair[0].created_at <= pair[1].created_at));
    }

    #[test]
    fn view_token_renders_board_with_comments() {
        let service = setup_service();
        let board = service
            .create_board(CreateBoardInput::default())
            .expect("create board");
        service
            .add_comment(
                &board.id,
                CreateCommentInput {
                    author: None,
                    message: Some("congrats".into()),
                    color: Some("#00FF00".into()),
                },
            )
            .expect("add comment")
            .expect("board exists");

        let details = service
            .view_board(&board.view_token)
            .expect("view board")
            .expect("token matches");
        assert_eq!(details.board.id, board.id);
        assert_eq!(details.comments.len(), 1);
        assert_eq!(details.comments[0].author, "Anonymous");
        assert_eq!(details.comments[0].message, "congrats");

        // The rendering flattens board fields next to the comments array.
        let json = serde_json::to_value(&details).expect("serialize details");
        assert_eq!(json["id"], board.id.as_str());
        assert_eq!(json["view_token"], board.view_token.as_str());
        assert_eq!(json["comments"].as_array().map(|a| a.len()), Some(1));

        assert!(service
            .view_board(&board.id)
            .expect("view board")
            .is_none());
    }
}
