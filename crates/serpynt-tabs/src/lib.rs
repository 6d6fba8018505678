//! SerPynt Tab Management
//!
//! An ordered sequence of tabs, each exclusively owning one embedded engine
//! view, plus the derived state the window shows for the active tab (URL bar
//! text and window title).

mod error;
mod event;
mod session;
mod tab;
mod view;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::TabError;
pub use event::{EngineEvent, EngineEventKind};
pub use session::{SessionSnapshot, TabSession, WINDOW_TITLE_BASE};
pub use tab::{Tab, TabId, TabInfo, BLANK_LABEL};
pub use view::{EngineView, ViewFactory, ViewSpec};

pub type Result<T> = std::result::Result<T, TabError>;
