pub mod directory;
pub mod inventory_service;
pub mod session_service;

pub use directory::{DirectoryApi, DirectoryClient};
pub use inventory_service::{
    apply_toggle, load_inventory, status_message, toggle_car_status, ToggleOutcome,
};
pub use session_service::{clear_session, persist_session, resolve_session, SessionOutcome};
