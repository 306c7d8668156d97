// Domain layer: models and backend orchestration
pub mod models;
pub mod services;
