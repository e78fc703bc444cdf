//! PostgreSQL implementation of PromptRepository.

use crate::conversions::{new_prompt_row, prompt_from_row};
use crate::models::{PromptChangeset, PromptRow};
use crate::schema::prompts;
use crate::store::not_found;
use crate::{DatabaseResult, LoreStore};
use async_trait::async_trait;
use chrono::Utc;
use diesel::dsl::max;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use loresmith_core::{NewPrompt, Prompt, PromptUpdate};
use loresmith_error::{DatabaseError, LoresmithResult};
use loresmith_interface::PromptRepository;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Clear `active` on the other prompts of the target's type, then set it on the target.
fn activate_in(conn: &mut PgConnection, id: Uuid) -> DatabaseResult<PromptRow> {
    let target: PromptRow = prompts::table
        .find(id)
        .select(PromptRow::as_select())
        .first(conn)
        .optional()?
        .ok_or_else(|| not_found("prompt", id))?;

    let cleared = diesel::update(
        prompts::table
            .filter(prompts::prompt_type.eq(&target.prompt_type))
            .filter(prompts::id.ne(id))
            .filter(prompts::active.eq(true)),
    )
    .set(prompts::active.eq(false))
    .execute(conn)?;
    debug!(prompt_type = %target.prompt_type, cleared, "Cleared previously active prompts");

    diesel::update(prompts::table.find(id))
        .set((prompts::active.eq(true), prompts::updated_at.eq(Utc::now())))
        .returning(PromptRow::as_returning())
        .get_result(conn)
        .map_err(Into::into)
}

#[async_trait]
impl PromptRepository for LoreStore {
    #[instrument(skip(self))]
    async fn active_prompt(&self, prompt_type: &str) -> LoresmithResult<Option<Prompt>> {
        let prompt_type = prompt_type.to_string();
        let row = self
            .run(move |conn| {
                prompts::table
                    .filter(prompts::prompt_type.eq(&prompt_type))
                    .filter(prompts::active.eq(true))
                    .select(PromptRow::as_select())
                    .first(conn)
                    .optional()
                    .map_err(Into::into)
            })
            .await?;
        Ok(row.map(prompt_from_row))
    }

    #[instrument(skip(self))]
    async fn list_prompts(&self, prompt_type: Option<&str>) -> LoresmithResult<Vec<Prompt>> {
        let prompt_type = prompt_type.map(str::to_string);
        let rows = self
            .run(move |conn| {
                let mut query = prompts::table.select(PromptRow::as_select()).into_boxed();
                if let Some(t) = prompt_type {
                    query = query.filter(prompts::prompt_type.eq(t));
                }
                query
                    .order((prompts::prompt_type.asc(), prompts::version.desc()))
                    .load(conn)
                    .map_err(Into::into)
            })
            .await?;
        Ok(rows.into_iter().map(prompt_from_row).collect())
    }

    #[instrument(skip(self))]
    async fn get_prompt(&self, id: Uuid) -> LoresmithResult<Option<Prompt>> {
        let row = self
            .run(move |conn| {
                prompts::table
                    .find(id)
                    .select(PromptRow::as_select())
                    .first(conn)
                    .optional()
                    .map_err(Into::into)
            })
            .await?;
        Ok(row.map(prompt_from_row))
    }

    #[instrument(skip(self, new_prompt), fields(prompt_type = %new_prompt.prompt_type))]
    async fn create_prompt(&self, new_prompt: NewPrompt) -> LoresmithResult<Prompt> {
        let row = self
            .run(move |conn| {
                conn.transaction::<_, DatabaseError, _>(|conn| {
                    let current: Option<i32> = prompts::table
                        .filter(prompts::prompt_type.eq(&new_prompt.prompt_type))
                        .select(max(prompts::version))
                        .first(conn)?;
                    let activate = new_prompt.active;
                    let row = new_prompt_row(new_prompt, current.unwrap_or(0) + 1, Utc::now());

                    let inserted: PromptRow = diesel::insert_into(prompts::table)
                        .values(&row)
                        .returning(PromptRow::as_returning())
                        .get_result(conn)?;

                    if activate {
                        activate_in(conn, inserted.id)
                    } else {
                        Ok(inserted)
                    }
                })
            })
            .await?;
        debug!(id = %row.id, version = row.version, "Created prompt");
        Ok(prompt_from_row(row))
    }

    #[instrument(skip(self, update))]
    async fn update_prompt(&self, id: Uuid, update: PromptUpdate) -> LoresmithResult<Prompt> {
        let row = self
            .run(move |conn| {
                let changeset = PromptChangeset {
                    name: update.name,
                    system_context: update.system_context,
                    content_template: update.content_template,
                    updated_at: Utc::now(),
                };
                diesel::update(prompts::table.find(id))
                    .set(&changeset)
                    .returning(PromptRow::as_returning())
                    .get_result(conn)
                    .optional()?
                    .ok_or_else(|| not_found("prompt", id))
            })
            .await?;
        Ok(prompt_from_row(row))
    }

    #[instrument(skip(self))]
    async fn activate_prompt(&self, id: Uuid) -> LoresmithResult<Prompt> {
        let row = self
            .run(move |conn| conn.transaction(|conn| activate_in(conn, id)))
            .await?;
        Ok(prompt_from_row(row))
    }

    #[instrument(skip(self))]
    async fn delete_prompt(&self, id: Uuid) -> LoresmithResult<bool> {
        let deleted = self
            .run(move |conn| {
                diesel::delete(prompts::table.find(id))
                    .execute(conn)
                    .map_err(Into::into)
            })
            .await?;
        Ok(deleted > 0)
    }
}
