pub mod assoc;
pub mod change_kind;
pub mod change_status;
pub mod commands;
pub mod edit_action;
pub mod step;
pub mod tracking_event;
pub mod visual_class;
