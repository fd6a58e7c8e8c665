use glam::DVec2;
use std::time::Instant;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

use staff_core::{Engine, EngineParams};

mod audio;
mod gpu;
mod input;

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
    log::info!("staff-native starting");

    let player = audio::TonePlayer::start();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Scroll Staff")
        .build(&event_loop)?;

    let mut gpu = pollster::block_on(gpu::GpuState::new(&window))?;

    let start = Instant::now();
    let params = EngineParams {
        screen_height: gpu.viewport().height as f64,
        ..EngineParams::default()
    };
    let mut engine = Engine::new(params, 0.0)?;
    let mut pointer = input::PointerMapper::default();

    event_loop.run(move |event, elwt| {
        let now_sec = start.elapsed().as_secs_f64();
        match event {
            Event::WindowEvent { event, .. } => {
                let vp = gpu.viewport();
                let pointer_event = match event {
                    WindowEvent::Resized(size) => {
                        gpu.resize(size);
                        if let Err(e) = engine.set_screen_height(size.height as f64) {
                            log::debug!("[resize] keeping previous height: {e}");
                        }
                        None
                    }
                    WindowEvent::CloseRequested => {
                        elwt.exit();
                        None
                    }
                    WindowEvent::CursorMoved { position, .. } => {
                        pointer.cursor_moved(DVec2::new(position.x, position.y), &vp, now_sec)
                    }
                    WindowEvent::MouseInput { state, button, .. } => {
                        pointer.mouse_input(state, button, &vp, now_sec)
                    }
                    WindowEvent::Touch(touch) => {
                        let px = DVec2::new(touch.location.x, touch.location.y);
                        Some(pointer.touch(touch.id, touch.phase, px, &vp, now_sec))
                    }
                    _ => None,
                };
                if let Some(ev) = pointer_event {
                    engine.handle_pointer(&ev);
                }
            }
            Event::AboutToWait => {
                engine.tick_with_player(now_sec, &player);
                match gpu.render(&engine) {
                    Ok(_) => gpu.window.request_redraw(),
                    Err(wgpu::SurfaceError::Lost) => gpu.resize(gpu.window.inner_size()),
                    Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                    Err(e) => log::debug!("[gpu] frame skipped: {e:?}"),
                }
            }
            _ => {}
        }
    })?;
    Ok(())
}
