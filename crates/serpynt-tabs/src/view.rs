//! Seam to the embedded rendering engine
//!
//! The engine is opaque: a view can be told to navigate, move through its
//! history, reload, stop, show or hide, and close. Everything it reports back
//! arrives later as an [`EngineEvent`](crate::EngineEvent).

use url::Url;

use crate::tab::TabId;
use crate::Result;

pub trait EngineView: Send + Sync {
    fn navigate(&self, url: &Url) -> Result<()>;

    fn back(&self) -> Result<()>;

    fn forward(&self) -> Result<()>;

    fn reload(&self) -> Result<()>;

    fn stop(&self) -> Result<()>;

    fn set_visible(&self, visible: bool) -> Result<()>;

    /// Tear the view down and release engine-side resources.
    fn close(&self) -> Result<()>;
}

/// Everything a factory needs to build a view for a new tab.
#[derive(Debug, Clone)]
pub struct ViewSpec {
    /// Id the view's callbacks must report events under
    pub tab_id: TabId,
    /// Applied before the first navigation
    pub user_agent: String,
}

pub trait ViewFactory {
    /// Build a blank view. The session navigates it once it is stored.
    fn create_view(&self, spec: &ViewSpec) -> Result<Box<dyn EngineView>>;
}
