//! Dioxus UI components for luashade.
//!
//! Provides the drop zone and file picker, the preset and option form,
//! the loading overlay, and the result surface.

mod loading;
mod options;
mod result;
mod upload;

pub use loading::LoadingOverlay;
pub use options::OptionsPanel;
pub use result::ResultPanel;
pub use upload::FileUpload;
