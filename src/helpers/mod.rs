pub mod config_helper;
pub mod id_generator;
