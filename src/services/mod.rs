pub mod submission_service;
pub mod validator;
