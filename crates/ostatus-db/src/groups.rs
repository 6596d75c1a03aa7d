use crate::types::LocalGroupRow;
use sqlx::PgPool;

/// Find a group hosted on this site by nickname
pub async fn find_local_by_nickname(
    pool: &PgPool,
    nickname: &str,
) -> Result<Option<LocalGroupRow>, sqlx::Error> {
    sqlx::query_as::<_, LocalGroupRow>(
        "SELECT group_id::bigint AS group_id, nickname FROM local_group WHERE nickname = $1",
    )
    .bind(nickname)
    .fetch_optional(pool)
    .await
}
