//! Terminal demo host
//!
//! Shows one paged graphic to one local viewer and turns keyboard and mouse
//! input into interaction events.

pub mod app;
pub mod components;
pub mod core;
pub mod events;
pub mod host;
pub mod layout;
pub mod renderer;

pub use app::App;
pub use events::handle_events;
pub use host::TerminalHost;
pub use layout::LayoutManager;
pub use renderer::run_app;
