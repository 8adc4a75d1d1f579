use iced::Application;
use user_management::client::config::ClientConfig;
use user_management::client::gui::app::UserManagementApp;
use user_management::utils::logger::AppLogger;

fn main() -> iced::Result {
    // Logger prima della config, altrimenti i warning di parsing vanno persi
    if let Err(e) = AppLogger::init(&ClientConfig::log_level_from_env()) {
        eprintln!("Logger already initialized: {}", e);
    }
    let config = ClientConfig::from_env();
    config.log_summary();
    UserManagementApp::run(iced::Settings::with_flags(config))
}
