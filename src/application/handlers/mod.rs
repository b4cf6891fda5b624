pub mod dashboard_handler;
