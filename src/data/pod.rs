use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::model::pod::{CreatePodParam, Participant, Pod, UpdatePodParam};

pub struct PodRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PodRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new pod with the host seated at position 0
    ///
    /// # Arguments
    /// - `param`: Pod field values
    /// - `host_user_id`: Internal ID of the hosting user
    ///
    /// # Returns
    /// - `Ok(Pod)`: The created pod with its roster
    /// - `Err(DbErr)`: Database error
    pub async fn create(&self, param: CreatePodParam, host_user_id: i32) -> Result<Pod, DbErr> {
        let pod = entity::pod::ActiveModel {
            location: ActiveValue::Set(param.location),
            format: ActiveValue::Set(param.format),
            max_players: ActiveValue::Set(param.max_players),
            scheduled_date: ActiveValue::Set(param.scheduled_date),
            scheduled_time: ActiveValue::Set(param.scheduled_time),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        entity::pod_user::ActiveModel {
            pod_id: ActiveValue::Set(pod.id),
            user_id: ActiveValue::Set(host_user_id),
            position: ActiveValue::Set(0),
        }
        .insert(self.db)
        .await?;

        let participants = self.load_participants(pod.id).await?;
        Ok(Pod::from_entity(pod, participants))
    }

    /// Gets a pod by its internal ID with its roster
    ///
    /// # Returns
    /// - `Ok(Some(Pod))`: The pod
    /// - `Ok(None)`: Pod not found
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Pod>, DbErr> {
        let pod = entity::prelude::Pod::find_by_id(id).one(self.db).await?;

        match pod {
            Some(pod) => {
                let participants = self.load_participants(pod.id).await?;
                Ok(Some(Pod::from_entity(pod, participants)))
            }
            None => Ok(None),
        }
    }

    /// Gets a pod by the Discord message that carries its card
    ///
    /// # Arguments
    /// - `message_id`: Discord message ID (u64, stored as string)
    ///
    /// # Returns
    /// - `Ok(Some(Pod))`: The pod
    /// - `Ok(None)`: No pod behind that message
    /// - `Err(DbErr)`: Database error
    pub async fn find_by_message_id(&self, message_id: &str) -> Result<Option<Pod>, DbErr> {
        let pod = entity::prelude::Pod::find()
            .filter(entity::pod::Column::MessageId.eq(message_id))
            .one(self.db)
            .await?;

        match pod {
            Some(pod) => {
                let participants = self.load_participants(pod.id).await?;
                Ok(Some(Pod::from_entity(pod, participants)))
            }
            None => Ok(None),
        }
    }

    /// Records the Discord message ID after the card has been posted
    ///
    /// # Returns
    /// - `Ok(())`: Message ID stored
    /// - `Err(DbErr)`: Database error, including pod not found
    pub async fn set_message_id(&self, pod_id: i32, message_id: String) -> Result<(), DbErr> {
        let pod = entity::prelude::Pod::find_by_id(pod_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Pod {} not found", pod_id)))?;

        let mut active: entity::pod::ActiveModel = pod.into();
        active.message_id = ActiveValue::Set(Some(message_id));
        active.update(self.db).await?;

        Ok(())
    }

    /// Seats a user in a pod at the next free position
    ///
    /// # Returns
    /// - `Ok(())`: Membership row created
    /// - `Err(DbErr)`: Database error, including a duplicate membership
    pub async fn add_participant(&self, pod_id: i32, user_id: i32) -> Result<(), DbErr> {
        let last = entity::prelude::PodUser::find()
            .filter(entity::pod_user::Column::PodId.eq(pod_id))
            .order_by_desc(entity::pod_user::Column::Position)
            .one(self.db)
            .await?;
        let position = last.map(|edge| edge.position + 1).unwrap_or(0);

        entity::pod_user::ActiveModel {
            pod_id: ActiveValue::Set(pod_id),
            user_id: ActiveValue::Set(user_id),
            position: ActiveValue::Set(position),
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    /// Removes a user's membership row from a pod
    ///
    /// # Returns
    /// - `Ok(())`: Membership row removed (or was already gone)
    /// - `Err(DbErr)`: Database error
    pub async fn remove_participant(&self, pod_id: i32, user_id: i32) -> Result<(), DbErr> {
        entity::prelude::PodUser::delete_many()
            .filter(entity::pod_user::Column::PodId.eq(pod_id))
            .filter(entity::pod_user::Column::UserId.eq(user_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Replaces a pod's editable fields
    ///
    /// # Returns
    /// - `Ok(Pod)`: The updated pod with its roster
    /// - `Err(DbErr)`: Database error, including pod not found
    pub async fn update_fields(&self, pod_id: i32, param: UpdatePodParam) -> Result<Pod, DbErr> {
        let pod = entity::prelude::Pod::find_by_id(pod_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Pod {} not found", pod_id)))?;

        let mut active: entity::pod::ActiveModel = pod.into();
        active.location = ActiveValue::Set(param.location);
        active.format = ActiveValue::Set(param.format);
        active.max_players = ActiveValue::Set(param.max_players);
        active.scheduled_date = ActiveValue::Set(param.scheduled_date);
        active.scheduled_time = ActiveValue::Set(param.scheduled_time);
        let updated = active.update(self.db).await?;

        let participants = self.load_participants(updated.id).await?;
        Ok(Pod::from_entity(updated, participants))
    }

    /// Deletes a pod and its membership rows
    ///
    /// # Returns
    /// - `Ok(())`: Pod deleted
    /// - `Err(DbErr)`: Database error
    pub async fn delete(&self, pod_id: i32) -> Result<(), DbErr> {
        entity::prelude::PodUser::delete_many()
            .filter(entity::pod_user::Column::PodId.eq(pod_id))
            .exec(self.db)
            .await?;
        entity::prelude::Pod::delete_by_id(pod_id).exec(self.db).await?;

        Ok(())
    }

    /// Gets every pod created before a cutoff, oldest first
    ///
    /// # Arguments
    /// - `cutoff`: Creation timestamp threshold (UTC)
    ///
    /// # Returns
    /// - `Ok(pods)`: Pods with rosters
    /// - `Err(DbErr)`: Database error
    pub async fn list_older_than(&self, cutoff: DateTime<Utc>) -> Result<Vec<Pod>, DbErr> {
        let pods = entity::prelude::Pod::find()
            .filter(entity::pod::Column::CreatedAt.lt(cutoff))
            .order_by_asc(entity::pod::Column::CreatedAt)
            .all(self.db)
            .await?;

        self.with_rosters(pods).await
    }

    /// Gets every pod, oldest first
    ///
    /// # Returns
    /// - `Ok(pods)`: Pods with rosters
    /// - `Err(DbErr)`: Database error
    pub async fn list_all(&self) -> Result<Vec<Pod>, DbErr> {
        let pods = entity::prelude::Pod::find()
            .order_by_asc(entity::pod::Column::CreatedAt)
            .all(self.db)
            .await?;

        self.with_rosters(pods).await
    }

    async fn with_rosters(&self, pods: Vec<entity::pod::Model>) -> Result<Vec<Pod>, DbErr> {
        let mut result = Vec::with_capacity(pods.len());
        for pod in pods {
            let participants = self.load_participants(pod.id).await?;
            result.push(Pod::from_entity(pod, participants));
        }
        Ok(result)
    }

    async fn load_participants(&self, pod_id: i32) -> Result<Vec<Participant>, DbErr> {
        let rows = entity::prelude::PodUser::find()
            .filter(entity::pod_user::Column::PodId.eq(pod_id))
            .order_by_asc(entity::pod_user::Column::Position)
            .find_also_related(entity::prelude::User)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(edge, user)| {
                user.map(|user| Participant {
                    user_id: edge.user_id,
                    discord_id: user.discord_id,
                    display_name: user.display_name,
                })
            })
            .collect())
    }
}
