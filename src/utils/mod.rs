pub mod api_client;
pub mod data_builder;
pub mod error;
pub mod fake;
pub mod logger;
pub mod masking;
pub mod validation;
