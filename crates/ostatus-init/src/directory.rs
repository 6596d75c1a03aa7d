use async_trait::async_trait;
use ostatus_db::PgPool;
use ostatus_resolver::{DirectoryError, GroupRecord, ListRecord, LocalDirectory, UserRecord};

/// [`LocalDirectory`] backed by the site's PostgreSQL database
pub struct PgDirectory {
    pool: PgPool,
}

impl PgDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn backend(err: sqlx::Error) -> DirectoryError {
    DirectoryError::Backend(Box::new(err))
}

#[async_trait]
impl LocalDirectory for PgDirectory {
    async fn find_user_by_nickname(
        &self,
        nickname: &str,
    ) -> Result<Option<UserRecord>, DirectoryError> {
        let row = ostatus_db::users::find_by_nickname(&self.pool, nickname)
            .await
            .map_err(backend)?;
        Ok(row.map(|r| UserRecord {
            id: r.id,
            nickname: r.nickname,
        }))
    }

    async fn find_group_by_nickname(
        &self,
        nickname: &str,
    ) -> Result<Option<GroupRecord>, DirectoryError> {
        let row = ostatus_db::groups::find_local_by_nickname(&self.pool, nickname)
            .await
            .map_err(backend)?;
        Ok(row.map(|r| GroupRecord {
            id: r.group_id,
            nickname: r.nickname,
        }))
    }

    async fn find_list_by_tagger_and_name(
        &self,
        tagger_id: i64,
        name: &str,
    ) -> Result<Option<ListRecord>, DirectoryError> {
        let row = ostatus_db::lists::find_by_tagger_and_tag(&self.pool, tagger_id, name)
            .await
            .map_err(backend)?;
        Ok(row.map(|r| ListRecord {
            id: r.id,
            tagger_id: r.tagger,
            tag: r.tag,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_backend_error_keeps_source() {
        let err = backend(sqlx::Error::RowNotFound);
        assert!(matches!(err, DirectoryError::Backend(_)));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("Directory backend error"));
    }
}
