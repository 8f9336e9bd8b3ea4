pub mod action_reader;
pub mod config_helper;
pub mod lenient_decode;
