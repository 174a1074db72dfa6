//! Blog repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::blog::{self, ActiveModel, Entity as BlogEntity};
use super::entities::user::Entity as UserEntity;
use crate::domain::{Blog, User};
use crate::errors::{AppError, AppResult};

/// Blog paired with the user who wrote it, if any.
pub type BlogWithCreator = (Blog, Option<User>);

/// Blog queries bound to one session's transaction.
pub struct BlogRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> BlogRepository<'a> {
    pub(crate) fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Insert a blog and return it with its generated id.
    pub async fn create(
        &self,
        title: String,
        body: String,
        creator_id: Option<i32>,
    ) -> AppResult<Blog> {
        let active_model = ActiveModel {
            title: Set(title),
            body: Set(body),
            creator_id: Set(creator_id),
            ..Default::default()
        };

        let model = active_model.insert(self.txn).await?;
        Ok(Blog::from(model))
    }

    /// All blogs with their creators, oldest first.
    pub async fn list(&self) -> AppResult<Vec<BlogWithCreator>> {
        let rows = BlogEntity::find()
            .find_also_related(UserEntity)
            .order_by_asc(blog::Column::Id)
            .all(self.txn)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(blog, creator)| (Blog::from(blog), creator.map(User::from)))
            .collect())
    }

    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<BlogWithCreator>> {
        let row = BlogEntity::find_by_id(id)
            .find_also_related(UserEntity)
            .one(self.txn)
            .await?;

        Ok(row.map(|(blog, creator)| (Blog::from(blog), creator.map(User::from))))
    }

    /// Overwrite title and body. Fails with not-found when the id is absent.
    pub async fn update(&self, id: i32, title: String, body: String) -> AppResult<()> {
        if !self.exists(id).await? {
            return Err(AppError::blog_not_found(id));
        }

        BlogEntity::update_many()
            .set(ActiveModel {
                title: Set(title),
                body: Set(body),
                ..Default::default()
            })
            .filter(blog::Column::Id.eq(id))
            .exec(self.txn)
            .await?;

        Ok(())
    }

    /// Delete by id. Fails with not-found when the id is absent.
    ///
    /// The existence check and the filtered delete evaluate the same
    /// predicate twice; the delete itself is unconditional.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if !self.exists(id).await? {
            return Err(AppError::blog_not_found(id));
        }

        BlogEntity::delete_many()
            .filter(blog::Column::Id.eq(id))
            .exec(self.txn)
            .await?;

        Ok(())
    }

    async fn exists(&self, id: i32) -> AppResult<bool> {
        Ok(BlogEntity::find_by_id(id).one(self.txn).await?.is_some())
    }
}
