use chrono::Utc;

/// Current UTC time as an RFC 3339 string, the format every `created_at`
/// column stores. Lexicographic order on these strings matches chronological
/// order, which the comment listing relies on.
pub fn now_utc_iso() -> String {
    Utc::now().to_rfc3339()
}
