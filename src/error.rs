/// Errors that stop the render loop
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The configuration can't be drawn with
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The video subsystem (event loop) failed to start
    #[error("Video initialization failed: {0}")]
    Init(String),

    /// The window couldn't be created
    #[error("Window creation failed: {0}")]
    CreateWindow(String),

    /// The window has no usable drawing surface
    #[error("Window surface unavailable: {0}")]
    Surface(String),

    /// A fill fell outside of the surface
    #[error("Fill failed: {0}")]
    Fill(String),

    /// The surface couldn't be shown on screen
    #[error("Present failed: {0}")]
    Present(String),
}

impl Error {
    /// Process exit code for this error, never 0
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Config(_) => 2,
            _ => 1,
        }
    }
}

/// Result type used throughout the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;
