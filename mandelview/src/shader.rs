//! The shader is an on-disk artifact, compiled at startup.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

use crate::error::GpuError;

const SHADER_FILE: &str = "shaders/mandelbrot.wgsl";

/// Reads the shader source, looking in the working directory first so a
/// locally edited copy wins over the one shipped next to the manifest.
pub fn load_source() -> Result<String> {
    let local = PathBuf::from(SHADER_FILE);
    let path = if local.is_file() {
        local
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(SHADER_FILE)
    };
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read shader source {}", path.display()))
}

/// Compiles WGSL into a module, trapping validation errors instead of
/// letting wgpu's uncaptured-error handler abort the process.
pub async fn compile(device: &wgpu::Device, source: &str) -> Result<wgpu::ShaderModule, GpuError> {
    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("mandelbrot shader"),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });
    if let Some(error) = device.pop_error_scope().await {
        return Err(GpuError::ShaderValidation(error.to_string()));
    }
    Ok(module)
}
