pub mod quota_summary;
