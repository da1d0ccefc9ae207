use thiserror::Error;

/// Result type used throughout boxpaint
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while showing a canvas.
///
/// Painting itself never fails, only the window and GPU setup can.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The event loop could not be created or stopped with an error
    #[cfg(feature = "window")]
    #[error("Error in the event loop")]
    EventLoop(#[from] winit::error::EventLoopError),
    /// The operating system refused to open the window
    #[cfg(feature = "window")]
    #[error("Failed to open window")]
    Window(#[from] winit::error::OsError),
    /// wgpu could not create a surface for the window
    #[cfg(feature = "window")]
    #[error("Failed to create surface for window")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    /// No graphics adapter can present to the window
    #[cfg(feature = "window")]
    #[error("No graphics adapter found")]
    NoAdapter,
    /// The adapter didn't give us a device
    #[cfg(feature = "window")]
    #[error("No graphics device found in adapter")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    /// The window surface has no configuration compatible with the adapter
    #[cfg(feature = "window")]
    #[error("Surface is not supported by the adapter")]
    UnsupportedSurface,
    /// The next frame could not be acquired
    #[cfg(feature = "window")]
    #[error("Failed to acquire the next frame")]
    Frame(#[from] wgpu::SurfaceError),
    /// The canvas has no pixels to show
    #[cfg(feature = "window")]
    #[error("Canvas of {width}x{height} is empty")]
    EmptyCanvas {
        /// Canvas width
        width: u32,
        /// Canvas height
        height: u32,
    },
    /// The canvas is too large for the graphics device
    #[cfg(feature = "window")]
    #[error("Canvas of {width}x{height} exceeds the maximum texture size of {max}")]
    CanvasTooLarge {
        /// Canvas width
        width: u32,
        /// Canvas height
        height: u32,
        /// Largest supported texture dimension
        max: u32,
    },
}
