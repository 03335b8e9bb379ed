pub mod config;
pub mod credentials;
pub mod domain;
pub mod probe;
pub mod report;
pub mod supabase_client;
pub mod telemetry;
