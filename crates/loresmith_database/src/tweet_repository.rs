//! PostgreSQL implementation of TweetRepository.

use crate::LoreStore;
use crate::conversions::{new_tweet_row, tweet_from_row};
use crate::models::TweetRow;
use crate::schema::tweets;
use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use loresmith_core::{NewTweet, Tweet};
use loresmith_error::LoresmithResult;
use loresmith_interface::TweetRepository;
use tracing::instrument;
use uuid::Uuid;

#[async_trait]
impl TweetRepository for LoreStore {
    #[instrument(skip(self, new_tweet), fields(token_id = %new_tweet.token_id))]
    async fn insert_tweet(&self, new_tweet: NewTweet) -> LoresmithResult<Tweet> {
        let tweet = self
            .run(move |conn| {
                let row = new_tweet_row(new_tweet, Utc::now());
                let inserted: TweetRow = diesel::insert_into(tweets::table)
                    .values(&row)
                    .returning(TweetRow::as_returning())
                    .get_result(conn)?;
                tweet_from_row(inserted)
            })
            .await?;
        Ok(tweet)
    }

    #[instrument(skip(self))]
    async fn list_tweets(&self, token_id: Option<&str>) -> LoresmithResult<Vec<Tweet>> {
        let token_id = token_id.map(str::to_string);
        let tweets = self
            .run(move |conn| {
                let mut query = tweets::table.select(TweetRow::as_select()).into_boxed();
                if let Some(t) = token_id {
                    query = query.filter(tweets::token_id.eq(t));
                }
                let rows: Vec<TweetRow> = query.order(tweets::created_at.desc()).load(conn)?;
                rows.into_iter().map(tweet_from_row).collect()
            })
            .await?;
        Ok(tweets)
    }

    #[instrument(skip(self))]
    async fn get_tweet(&self, id: Uuid) -> LoresmithResult<Option<Tweet>> {
        let tweet = self
            .run(move |conn| {
                tweets::table
                    .find(id)
                    .select(TweetRow::as_select())
                    .first(conn)
                    .optional()?
                    .map(tweet_from_row)
                    .transpose()
            })
            .await?;
        Ok(tweet)
    }
}
