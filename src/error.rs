//! Error types for the windowed presenter.
//!
//! The simulation core has no recoverable-error taxonomy: configuration is a
//! trusted value object and malformed palettes degrade to a fallback color.
//! What can fail is standing up the window and the GPU presenter.

use std::fmt;

/// Errors that can occur while initializing the GPU presenter.
#[derive(Debug)]
pub enum GpuError {
    /// Failed to create a surface for rendering.
    SurfaceCreation(wgpu::CreateSurfaceError),
    /// No compatible GPU adapter found.
    NoAdapter,
    /// Failed to create GPU device.
    DeviceCreation(wgpu::RequestDeviceError),
}

impl fmt::Display for GpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpuError::SurfaceCreation(e) => write!(f, "Failed to create GPU surface: {}", e),
            GpuError::NoAdapter => write!(
                f,
                "No compatible GPU adapter found. Ensure your system has a GPU with WebGPU/Vulkan/Metal/DX12 support."
            ),
            GpuError::DeviceCreation(e) => write!(f, "Failed to create GPU device: {}", e),
        }
    }
}

impl std::error::Error for GpuError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GpuError::SurfaceCreation(e) => Some(e),
            GpuError::DeviceCreation(e) => Some(e),
            GpuError::NoAdapter => None,
        }
    }
}

impl From<wgpu::CreateSurfaceError> for GpuError {
    fn from(e: wgpu::CreateSurfaceError) -> Self {
        GpuError::SurfaceCreation(e)
    }
}

impl From<wgpu::RequestDeviceError> for GpuError {
    fn from(e: wgpu::RequestDeviceError) -> Self {
        GpuError::DeviceCreation(e)
    }
}

/// Errors that can occur when running the windowed starfield.
#[derive(Debug)]
pub enum StarfieldError {
    /// Failed to create event loop.
    EventLoop(winit::error::EventLoopError),
    /// Failed to create window.
    Window(winit::error::OsError),
    /// GPU initialization failed.
    Gpu(GpuError),
}

impl fmt::Display for StarfieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StarfieldError::EventLoop(e) => write!(f, "Failed to create event loop: {}", e),
            StarfieldError::Window(e) => write!(f, "Failed to create window: {}", e),
            StarfieldError::Gpu(e) => write!(f, "GPU error: {}", e),
        }
    }
}

impl std::error::Error for StarfieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StarfieldError::EventLoop(e) => Some(e),
            StarfieldError::Window(e) => Some(e),
            StarfieldError::Gpu(e) => Some(e),
        }
    }
}

impl From<winit::error::EventLoopError> for StarfieldError {
    fn from(e: winit::error::EventLoopError) -> Self {
        StarfieldError::EventLoop(e)
    }
}

impl From<winit::error::OsError> for StarfieldError {
    fn from(e: winit::error::OsError) -> Self {
        StarfieldError::Window(e)
    }
}

impl From<GpuError> for StarfieldError {
    fn from(e: GpuError) -> Self {
        StarfieldError::Gpu(e)
    }
}
