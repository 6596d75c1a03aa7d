use crate::types::UserRow;
use sqlx::PgPool;

/// Find a local user by nickname
pub async fn find_by_nickname(
    pool: &PgPool,
    nickname: &str,
) -> Result<Option<UserRow>, sqlx::Error> {
    sqlx::query_as::<_, UserRow>(
        r#"SELECT id::bigint AS id, nickname FROM "user" WHERE nickname = $1"#,
    )
    .bind(nickname)
    .fetch_optional(pool)
    .await
}
