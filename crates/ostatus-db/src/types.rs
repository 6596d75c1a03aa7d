use sqlx::FromRow;

/// Row from the `user` table (local accounts only)
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct UserRow {
    pub id: i64,
    pub nickname: String,
}

/// Row from the `local_group` table
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct LocalGroupRow {
    pub group_id: i64,
    pub nickname: String,
}

/// Row from the `profile_list` table
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ProfileListRow {
    pub id: i64,
    pub tagger: i64,
    pub tag: String,
}
