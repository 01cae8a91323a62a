//! Port definitions — traits that adapters implement.
//!
//! Ports are the boundaries between the panel logic and the outside world.
//! They are defined here (in `app`) so that both the use-case layer and the
//! adapter layer can depend on them without creating circular dependencies.

pub mod dialogs;
pub mod transport;

pub use dialogs::Dialogs;
pub use transport::Transport;
