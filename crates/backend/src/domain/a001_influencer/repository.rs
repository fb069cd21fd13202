use chrono::Utc;
use contracts::domain::a001_influencer::aggregate::{Influencer, InfluencerId};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use contracts::enums::platform::Platform;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_influencer")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub platform: Option<String>,
    pub platform_account_id: String,
    pub follower_count: i64,
    pub contact: Option<String>,
    pub region: Option<String>,
    pub bd_owner: Option<String>,
    pub tags: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Influencer {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        let platform = m.platform.as_ref().and_then(|code| Platform::from_code(code));
        let tags: Vec<String> = serde_json::from_str(&m.tags).unwrap_or_default();

        Influencer {
            base: BaseAggregate::with_metadata(
                InfluencerId(uuid),
                m.code,
                m.description,
                m.comment.clone(),
                metadata,
            ),
            platform,
            platform_account_id: m.platform_account_id,
            follower_count: m.follower_count,
            contact: m.contact,
            region: m.region,
            bd_owner: m.bd_owner,
            tags,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &Influencer) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        platform: Set(aggregate.platform.map(|p| p.code().to_string())),
        platform_account_id: Set(aggregate.platform_account_id.clone()),
        follower_count: Set(aggregate.follower_count),
        contact: Set(aggregate.contact.clone()),
        region: Set(aggregate.region.clone()),
        bd_owner: Set(aggregate.bd_owner.clone()),
        tags: Set(serde_json::to_string(&aggregate.tags).unwrap_or_else(|_| "[]".into())),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    }
}

pub async fn list_all() -> anyhow::Result<Vec<Influencer>> {
    let mut items: Vec<Influencer> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    items.sort_by(|a, b| {
        a.base
            .description
            .to_lowercase()
            .cmp(&b.base.description.to_lowercase())
    });
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Influencer>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &Influencer) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    to_active(aggregate).insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &Influencer) -> anyhow::Result<()> {
    to_active(aggregate).update(conn()).await?;
    Ok(())
}

pub async fn soft_delete(id: Uuid) -> anyhow::Result<bool> {
    let existing = Entity::find_by_id(id.to_string()).one(conn()).await?;
    let Some(model) = existing else {
        return Ok(false);
    };
    let mut active: ActiveModel = model.into();
    active.is_deleted = Set(true);
    active.updated_at = Set(Some(Utc::now()));
    active.update(conn()).await?;
    Ok(true)
}
