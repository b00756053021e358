pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use crate::config::Config;
use crate::database::connection::ConnectionManager;
use crate::services::submission_service::SubmissionService;
use crate::services::validator::SubmissionValidator;

#[derive(Clone)]
pub struct AppState {
    pub manager: ConnectionManager,
    pub submissions: SubmissionService,
    pub validator: SubmissionValidator,
    pub environment: String,
    pub port: u16,
    pub admin_token: Option<String>,
}

impl AppState {
    pub fn new(manager: ConnectionManager, config: &Config) -> Self {
        let submissions = SubmissionService::new(manager.clone());
        let validator = SubmissionValidator::new(config.profile, config.score_field);

        Self {
            manager,
            submissions,
            validator,
            environment: config.environment.clone(),
            port: config.port,
            admin_token: config.admin_token.clone(),
        }
    }
}
