pub mod config;
pub mod controller;
pub mod gui;
pub mod models;
pub mod services;
