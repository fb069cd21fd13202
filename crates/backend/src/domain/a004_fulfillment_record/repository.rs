use chrono::Utc;
use contracts::domain::a004_fulfillment_record::aggregate::{
    FulfillmentRecord, FulfillmentRecordId,
};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use contracts::enums::priority_level::PriorityLevel;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a004_fulfillment_record")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub influencer_id: Option<String>,
    pub product_id: Option<String>,
    pub plan_id: Option<String>,
    pub stage: String,
    pub priority: String,
    pub remark: Option<String>,
    pub tracking_number: Option<String>,
    pub received_at: Option<chrono::DateTime<chrono::Utc>>,
    pub video_url: Option<String>,
    pub video_id: Option<String>,
    pub ad_code: Option<String>,
    pub ad_roi: Option<f64>,
    pub tags: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for FulfillmentRecord {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        // Код этапа переносится как есть: неизвестный код из БД означает
        // терминальную для прогрессии запись, сквозной показ кода
        let priority = PriorityLevel::from_code(&m.priority).unwrap_or(PriorityLevel::Medium);
        let tags: Vec<String> = serde_json::from_str(&m.tags).unwrap_or_default();

        FulfillmentRecord {
            base: BaseAggregate::with_metadata(
                FulfillmentRecordId(uuid),
                m.code,
                m.description,
                m.comment.clone(),
                metadata,
            ),
            influencer_id: m.influencer_id.as_ref().and_then(|s| Uuid::parse_str(s).ok()),
            product_id: m.product_id.as_ref().and_then(|s| Uuid::parse_str(s).ok()),
            plan_id: m.plan_id.as_ref().and_then(|s| Uuid::parse_str(s).ok()),
            stage: m.stage,
            priority,
            remark: m.remark,
            tracking_number: m.tracking_number,
            received_at: m.received_at,
            video_url: m.video_url,
            video_id: m.video_id,
            ad_code: m.ad_code,
            ad_roi: m.ad_roi,
            tags,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

fn to_active(aggregate: &FulfillmentRecord) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        influencer_id: Set(aggregate.influencer_id.map(|u| u.to_string())),
        product_id: Set(aggregate.product_id.map(|u| u.to_string())),
        plan_id: Set(aggregate.plan_id.map(|u| u.to_string())),
        stage: Set(aggregate.stage.clone()),
        priority: Set(aggregate.priority.code().to_string()),
        remark: Set(aggregate.remark.clone()),
        tracking_number: Set(aggregate.tracking_number.clone()),
        received_at: Set(aggregate.received_at),
        video_url: Set(aggregate.video_url.clone()),
        video_id: Set(aggregate.video_id.clone()),
        ad_code: Set(aggregate.ad_code.clone()),
        ad_roi: Set(aggregate.ad_roi),
        tags: Set(serde_json::to_string(&aggregate.tags).unwrap_or_else(|_| "[]".into())),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    }
}

/// Список записей: свежие сверху
pub async fn list_all() -> anyhow::Result<Vec<FulfillmentRecord>> {
    let items: Vec<FulfillmentRecord> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_desc(Column::CreatedAt)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<FulfillmentRecord>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &FulfillmentRecord) -> anyhow::Result<Uuid> {
    let uuid = aggregate.base.id.value();
    to_active(aggregate).insert(conn()).await?;
    Ok(uuid)
}

pub async fn update(aggregate: &FulfillmentRecord) -> anyhow::Result<()> {
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
