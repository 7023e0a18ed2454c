//! User repository: CRUD against the `users` collection.
//!
//! Operations translate one domain call into one store query. There are no
//! transactions and no optimistic locking; concurrent writes to the same
//! identifier race with the store's last-write-wins semantics.

use crate::{DbError, Result as DbErrorResult};

use gengs_core::User;

use std::panic::Location;

use error_location::ErrorLocation;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};

const COLLECTION: &str = "users";

pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    pub fn new(database: Database) -> Self {
        Self {
            collection: database.collection(COLLECTION),
        }
    }

    /// All users, in store order. No pagination or filtering.
    pub async fn find_all(&self) -> DbErrorResult<Vec<User>> {
        let cursor = self.collection.find(doc! {}).await?;
        let users = cursor.try_collect().await?;

        Ok(users)
    }

    /// Insert a validated, unsaved user and return it with the assigned id.
    pub async fn create(&self, user: &User) -> DbErrorResult<User> {
        let result = self.collection.insert_one(user).await?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| DbError::UnexpectedId {
                value: result.inserted_id.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let mut created = user.clone();
        created.id = Some(id);

        Ok(created)
    }

    /// Set only the name field, returning the post-update document.
    /// `None` when the identifier does not resolve to a record.
    pub async fn update_name(&self, id: ObjectId, name: &str) -> DbErrorResult<Option<User>> {
        let updated = self
            .collection
            .find_one_and_update(doc! { "_id": id }, doc! { "$set": { "name": name } })
            .return_document(ReturnDocument::After)
            .await?;

        Ok(updated)
    }

    /// Remove a record, returning the pre-deletion snapshot.
    /// `None` when the identifier does not resolve to a record.
    pub async fn delete_by_id(&self, id: ObjectId) -> DbErrorResult<Option<User>> {
        let deleted = self
            .collection
            .find_one_and_delete(doc! { "_id": id })
            .await?;

        Ok(deleted)
    }
}
