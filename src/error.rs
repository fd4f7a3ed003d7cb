//! Error types for the windowed viewer.
//!
//! The visualization is decorative, so none of these errors propagate to
//! the caller; the viewer absorbs them and logs. They exist so the internal
//! setup path can use `?` and report one coherent failure.

use std::fmt;

/// Errors that can occur while bringing up the windowed viewer.
#[derive(Debug)]
pub enum ViewerError {
    /// Failed to create the event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create the window.
    Window(winit::error::OsError),
    /// Failed to create the pixel surface or present a frame.
    Surface(pixels::Error),
    /// Failed to resize the pixel surface or its buffer.
    SurfaceSize(pixels::TextureError),
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerError::EventLoop(e) => write!(f, "Failed to create event loop: {}", e),
            ViewerError::Window(e) => write!(f, "Failed to create window: {}", e),
            ViewerError::Surface(e) => write!(f, "Failed to create pixel surface: {}", e),
            ViewerError::SurfaceSize(e) => write!(f, "Failed to resize pixel surface: {}", e),
        }
    }
}

impl std::error::Error for ViewerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ViewerError::EventLoop(e) => Some(e),
            ViewerError::Window(e) => Some(e),
            ViewerError::Surface(e) => Some(e),
            ViewerError::SurfaceSize(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for ViewerError {
    fn from(e: winit::error::EventLoopError) -> Self {
        ViewerError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for ViewerError {
    fn from(e: winit::error::OsError) -> Self {
        ViewerError::Window(e)
    }
}

impl From<pixels::Error> for ViewerError {
    fn from(e: pixels::Error) -> Self {
        ViewerError::Surface(e)
    }
}

impl From<pixels::TextureError> for ViewerError {
    fn from(e: pixels::TextureError) -> Self {
        ViewerError::SurfaceSize(e)
    }
}
