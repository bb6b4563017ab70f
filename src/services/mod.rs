pub mod change_classifier;
pub mod change_registry;
pub mod decoration_overlay;
pub mod event_log;
pub mod resolution_engine;
pub mod script_runner;
pub mod track_changes;
