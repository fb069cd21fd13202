pub mod a001_influencer;
pub mod a002_product;
pub mod a003_cooperation_plan;
pub mod a004_fulfillment_record;
pub mod a005_tag;
