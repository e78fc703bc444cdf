//! PostgreSQL implementation of BackstoryRepository.

use crate::conversions::{backstory_from_row, new_backstory_row};
use crate::models::BackstoryRow;
use crate::schema::backstories;
use crate::store::not_found;
use crate::{DatabaseResult, LoreStore};
use async_trait::async_trait;
use chrono::Utc;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use loresmith_core::{Backstory, NewBackstory};
use loresmith_error::{DatabaseError, LoresmithResult};
use loresmith_interface::BackstoryRepository;
use tracing::instrument;
use uuid::Uuid;

fn deactivate_token(
    conn: &mut PgConnection,
    token_id: &str,
    keep: Option<Uuid>,
) -> DatabaseResult<usize> {
    let scope = backstories::table
        .filter(backstories::token_id.eq(token_id))
        .filter(backstories::is_active.eq(true));
    let cleared = match keep {
        Some(id) => diesel::update(scope.filter(backstories::id.ne(id)))
            .set(backstories::is_active.eq(false))
            .execute(conn)?,
        None => diesel::update(scope)
            .set(backstories::is_active.eq(false))
            .execute(conn)?,
    };
    Ok(cleared)
}

#[async_trait]
impl BackstoryRepository for LoreStore {
    #[instrument(skip(self, new_backstory), fields(token_id = %new_backstory.token_id))]
    async fn insert_backstory(&self, new_backstory: NewBackstory) -> LoresmithResult<Backstory> {
        let row = self
            .run(move |conn| {
                conn.transaction::<_, DatabaseError, _>(|conn| {
                    deactivate_token(conn, &new_backstory.token_id, None)?;
                    let row = new_backstory_row(new_backstory, Utc::now());
                    diesel::insert_into(backstories::table)
                        .values(&row)
                        .returning(BackstoryRow::as_returning())
                        .get_result(conn)
                        .map_err(Into::into)
                })
            })
            .await?;
        Ok(backstory_from_row(row))
    }

    #[instrument(skip(self))]
    async fn active_backstory(&self, token_id: &str) -> LoresmithResult<Option<Backstory>> {
        let token_id = token_id.to_string();
        let row = self
            .run(move |conn| {
                backstories::table
                    .filter(backstories::token_id.eq(&token_id))
                    .filter(backstories::is_active.eq(true))
                    .order(backstories::created_at.desc())
                    .select(BackstoryRow::as_select())
                    .first(conn)
                    .optional()
                    .map_err(Into::into)
            })
            .await?;
        Ok(row.map(backstory_from_row))
    }

    #[instrument(skip(self))]
    async fn list_backstories(&self, token_id: Option<&str>) -> LoresmithResult<Vec<Backstory>> {
        let token_id = token_id.map(str::to_string);
        let rows = self
            .run(move |conn| {
                let mut query = backstories::table
                    .select(BackstoryRow::as_select())
                    .into_boxed();
                if let Some(t) = token_id {
                    query = query.filter(backstories::token_id.eq(t));
                }
                query
                    .order(backstories::created_at.desc())
                    .load(conn)
                    .map_err(Into::into)
            })
            .await?;
        Ok(rows.into_iter().map(backstory_from_row).collect())
    }

    #[instrument(skip(self))]
    async fn get_backstory(&self, id: Uuid) -> LoresmithResult<Option<Backstory>> {
        let row = self
            .run(move |conn| {
                backstories::table
                    .find(id)
                    .select(BackstoryRow::as_select())
                    .first(conn)
                    .optional()
                    .map_err(Into::into)
            })
            .await?;
        Ok(row.map(backstory_from_row))
    }

    #[instrument(skip(self))]
    async fn activate_backstory(&self, id: Uuid) -> LoresmithResult<Backstory> {
        let row = self
            .run(move |conn| {
                conn.transaction::<_, DatabaseError, _>(|conn| {
                    let target: BackstoryRow = backstories::table
                        .find(id)
                        .select(BackstoryRow::as_select())
                        .first(conn)
                        .optional()?
                        .ok_or_else(|| not_found("backstory", id))?;
                    deactivate_token(conn, &target.token_id, Some(id))?;
                    diesel::update(backstories::table.find(id))
                        .set(backstories::is_active.eq(true))
                        .returning(BackstoryRow::as_returning())
                        .get_result(conn)
                        .map_err(Into::into)
                })
            })
            .await?;
        Ok(backstory_from_row(row))
    }
}
