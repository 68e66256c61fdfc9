mod config_tests;
mod error_tests;
