use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardRecord {
    pub id: String,
    pub aesthetic: String,
    pub recipient_name: String,
    pub join_code: String,   // shareable, uppercase, not unique
    pub view_token: String,  // secret capability for the read-only rendering
    pub created_at: String,
    pub contributor_link: String,
    pub view_link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRecord {
    pub id: String,
    pub board_id: String,
    pub author: String,
    pub message: String,
    pub color: String, // CSS color string, stored verbatim
    pub created_at: String,
}
