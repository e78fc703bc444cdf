//! PostgreSQL implementation of StoryElementRepository.

use crate::LoreStore;
use crate::conversions::{new_story_element_row, story_element_from_row};
use crate::models::StoryElementRow;
use crate::schema::story_elements;
use crate::store::not_found;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use loresmith_core::{NewStoryElement, RefinementStage, StoryElement, StoryElementFilter};
use loresmith_error::LoresmithResult;
use loresmith_interface::StoryElementRepository;
use tracing::instrument;
use uuid::Uuid;

#[async_trait]
impl StoryElementRepository for LoreStore {
    #[instrument(skip(self, new_element), fields(token_id = %new_element.token_id))]
    async fn insert_story_element(
        &self,
        new_element: NewStoryElement,
    ) -> LoresmithResult<StoryElement> {
        let element = self
            .run(move |conn| {
                let row = new_story_element_row(new_element, Utc::now());
                let inserted: StoryElementRow = diesel::insert_into(story_elements::table)
                    .values(&row)
                    .returning(StoryElementRow::as_returning())
                    .get_result(conn)?;
                story_element_from_row(inserted)
            })
            .await?;
        Ok(element)
    }

    #[instrument(skip(self))]
    async fn list_story_elements(
        &self,
        filter: &StoryElementFilter,
    ) -> LoresmithResult<Vec<StoryElement>> {
        let filter = filter.clone();
        let elements = self
            .run(move |conn| {
                let mut query = story_elements::table
                    .select(StoryElementRow::as_select())
                    .into_boxed();
                if let Some(token_id) = filter.token_id {
                    query = query.filter(story_elements::token_id.eq(token_id));
                }
                if let Some(stage) = filter.stage {
                    query = query.filter(story_elements::refinement_stage.eq(stage.to_string()));
                }
                if let Some(limit) = filter.limit {
                    query = query.limit(i64::from(limit));
                }
                let rows: Vec<StoryElementRow> =
                    query.order(story_elements::created_at.desc()).load(conn)?;
                rows.into_iter().map(story_element_from_row).collect()
            })
            .await?;
        Ok(elements)
    }

    #[instrument(skip(self))]
    async fn get_story_element(&self, id: Uuid) -> LoresmithResult<Option<StoryElement>> {
        let element = self
            .run(move |conn| {
                story_elements::table
                    .find(id)
                    .select(StoryElementRow::as_select())
                    .first(conn)
                    .optional()?
                    .map(story_element_from_row)
                    .transpose()
            })
            .await?;
        Ok(element)
    }

    #[instrument(skip(self))]
    async fn set_stage(&self, id: Uuid, stage: RefinementStage) -> LoresmithResult<StoryElement> {
        let element = self
            .run(move |conn| {
                let row: StoryElementRow = diesel::update(story_elements::table.find(id))
                    .set((
                        story_elements::refinement_stage.eq(stage.to_string()),
                        story_elements::updated_at.eq(Utc::now()),
                    ))
                    .returning(StoryElementRow::as_returning())
                    .get_result(conn)
                    .optional()?
                    .ok_or_else(|| not_found("story element", id))?;
                story_element_from_row(row)
            })
            .await?;
        Ok(element)
    }
}
