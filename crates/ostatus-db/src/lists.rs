use crate::types::ProfileListRow;
use sqlx::PgPool;
use tracing::debug;

/// Find a list by the id of the user who owns it and its tag
pub async fn find_by_tagger_and_tag(
    pool: &PgPool,
    tagger_id: i64,
    tag: &str,
) -> Result<Option<ProfileListRow>, sqlx::Error> {
    debug!(tagger_id, tag, "Looking up profile list");
    sqlx::query_as::<_, ProfileListRow>(
        r#"
        SELECT id::bigint AS id, tagger::bigint AS tagger, tag
        FROM profile_list
        WHERE tagger = $1 AND tag = $2
        "#,
    )
    .bind(tagger_id)
    .bind(tag)
    .fetch_optional(pool)
    .await
}
