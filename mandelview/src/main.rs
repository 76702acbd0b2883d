use std::{cell::Cell, rc::Rc, sync::Arc};

use anyhow::{Context, Result};
use winit::{
    dpi::PhysicalSize,
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

mod error;
mod gpu;
mod input;
mod shader;

use gpu::Gpu;
use input::InputState;
use shared::Navigation;

fn main() -> Result<()> {
    env_logger::init();

    let event_loop = EventLoop::new().context("failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Mandelbrot Set")
            .with_inner_size(PhysicalSize::new(1000, 1000))
            .build(&event_loop)
            .context("failed to create window")?,
    );

    let shader_source = shader::load_source()?;
    let mut gpu = pollster::block_on(Gpu::new(window.clone(), &shader_source))
        .context("failed to initialize GPU")?;

    let mut nav = Navigation::default();
    let mut input = InputState::default();

    let device_failed = Rc::new(Cell::new(false));
    let device_failed_in_loop = device_failed.clone();

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => gpu.resize(size),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => {
                if code == KeyCode::Escape && state == ElementState::Pressed {
                    elwt.exit();
                } else {
                    input.handle_key(code, state == ElementState::Pressed);
                }
            }
            WindowEvent::RedrawRequested => {
                input.apply(&mut nav);

                let (width, height) = gpu.size();
                if width == 0 || height == 0 {
                    return;
                }

                match gpu.render(&nav.params(width, height)) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        log::warn!("surface lost, reconfiguring");
                        gpu.reconfigure();
                    }
                    Err(wgpu::SurfaceError::Timeout) => {
                        log::warn!("surface acquire timed out, skipping frame");
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("out of GPU memory, aborting");
                        device_failed_in_loop.set(true);
                        elwt.exit();
                    }
                }
            }
            _ => {}
        },
        Event::AboutToWait => window.request_redraw(),
        _ => {}
    })?;

    if device_failed.get() {
        anyhow::bail!("rendering aborted after unrecoverable device failure");
    }
    Ok(())
}
