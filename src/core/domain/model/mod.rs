pub mod branch_action;
pub mod branch_status;
pub mod disk_configuration;
pub mod price_table;
pub mod quota_config;
pub mod resize_delta;
pub mod resource_kind;
pub mod resource_limit;
pub mod resource_row;
pub mod resource_usage;
