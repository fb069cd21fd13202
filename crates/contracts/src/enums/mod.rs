pub mod cooperation_type;
pub mod fulfillment_stage;
pub mod platform;
pub mod priority_level;
