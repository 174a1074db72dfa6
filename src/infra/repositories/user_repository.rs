//! User repository.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseTransaction, EntityTrait, QueryFilter, QueryOrder, Set,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{Password, User};
use crate::errors::{AppError, AppResult};

/// Fields written by create and update.
#[derive(Debug, Clone)]
pub struct UserFields {
    pub name: String,
    pub email: String,
    pub password: Password,
}

/// User queries bound to one session's transaction.
pub struct UserRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> UserRepository<'a> {
    pub(crate) fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Insert a user and return it with its generated id.
    pub async fn create(&self, fields: UserFields) -> AppResult<User> {
        let active_model = ActiveModel {
            name: Set(fields.name),
            email: Set(fields.email),
            password: Set(fields.password.into_string()),
            ..Default::default()
        };

        let model = active_model.insert(self.txn).await?;
        Ok(User::from(model))
    }

    /// All users, oldest first.
    pub async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(self.txn)
            .await?;

        Ok(models.into_iter().map(User::from).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id).one(self.txn).await?;
        Ok(result.map(User::from))
    }

    /// Replace every user field. Fails with not-found when the id is absent.
    pub async fn update(&self, id: i32, fields: UserFields) -> AppResult<()> {
        if self.find_by_id(id).await?.is_none() {
            return Err(AppError::user_not_found(id));
        }

        UserEntity::update_many()
            .set(ActiveModel {
                name: Set(fields.name),
                email: Set(fields.email),
                password: Set(fields.password.into_string()),
                ..Default::default()
            })
            .filter(user::Column::Id.eq(id))
            .exec(self.txn)
            .await?;

        Ok(())
    }

    /// Delete by id. Fails with not-found when the id is absent.
    ///
    /// The existence check and the filtered delete evaluate the same
    /// predicate twice; the delete itself is unconditional.
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if self.find_by_id(id).await?.is_none() {
            return Err(AppError::user_not_found(id));
        }

        UserEntity::delete_many()
            .filter(user::Column::Id.eq(id))
            .exec(self.txn)
            .await?;

        Ok(())
    }
}
