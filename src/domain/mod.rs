pub mod article_record;
pub mod daily_aggregate;
pub mod email_log_record;
pub mod subscriber_record;
pub mod week_range;
