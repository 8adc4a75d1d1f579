pub mod app;
pub mod error_boundary;
pub mod router;
pub mod views;
pub mod widgets;
