pub mod users_service;
