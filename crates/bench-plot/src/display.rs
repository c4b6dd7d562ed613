// File: crates/bench-plot/src/display.rs
// Summary: Show a rendered chart in a window (winit + softbuffer CPU blit) until it is closed.
// Without a display server (or without the `display` feature) showing is skipped with a warning;
// the image on disk is the result either way.

use chart_core::{Chart, RenderOptions};

use crate::error::Result;
#[cfg(feature = "display")]
use crate::error::PlotError;

#[cfg(feature = "display")]
pub fn show(chart: &Chart, opts: &RenderOptions, title: &str) -> Result<()> {
    use std::num::NonZeroU32;
    use winit::dpi::PhysicalSize;
    use winit::event::{Event, WindowEvent};
    use winit::event_loop::{ControlFlow, EventLoop};
    use winit::platform::run_return::EventLoopExtRunReturn;
    use winit::window::WindowBuilder;

    if !display_server_available() {
        log::warn!("no X11 or Wayland display available; not showing {title:?}");
        return Ok(());
    }

    let mut event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(if title.is_empty() { "Chart" } else { title })
        .with_inner_size(PhysicalSize::new(opts.width.max(1) as u32, opts.height.max(1) as u32))
        .build(&event_loop)
        .map_err(|e| PlotError::Display(e.to_string()))?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| PlotError::Display(e.to_string()))?;
    let mut surface = unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| PlotError::Display(e.to_string()))?;

    let mut size = window.inner_size();
    let mut failure: Option<PlotError> = None;

    log::debug!("showing chart window {}x{}", size.width, size.height);
    event_loop.run_return(|event, _, control_flow| {
        *control_flow = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event: WindowEvent::CloseRequested, .. } => {
                *control_flow = ControlFlow::Exit;
            }
            Event::WindowEvent { event: WindowEvent::Resized(new_size), .. } => {
                size = new_size;
                window.request_redraw();
            }
            Event::RedrawRequested(_) => {
                let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else { return };
                let frame_opts = RenderOptions { width: w.get() as i32, height: h.get() as i32, ..opts.clone() };
                let result = chart
                    .render_to_rgba8(&frame_opts)
                    .map_err(PlotError::from)
                    .and_then(|(rgba, _, _, _)| {
                        surface.resize(w, h).map_err(|e| PlotError::Display(e.to_string()))?;
                        let mut frame = surface.buffer_mut().map_err(|e| PlotError::Display(e.to_string()))?;
                        for (dst, px) in frame.iter_mut().zip(rgba.chunks_exact(4)) {
                            // softbuffer pixels are 0RGB
                            *dst = (px[0] as u32) << 16 | (px[1] as u32) << 8 | px[2] as u32;
                        }
                        frame.present().map_err(|e| PlotError::Display(e.to_string()))
                    });
                if let Err(e) = result {
                    failure = Some(e);
                    *control_flow = ControlFlow::Exit;
                }
            }
            _ => {}
        }
    });

    match failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(not(feature = "display"))]
pub fn show(_chart: &Chart, _opts: &RenderOptions, title: &str) -> Result<()> {
    log::warn!("built without the `display` feature; not showing {title:?}");
    Ok(())
}

// winit panics when no backend connects, so check first.
#[cfg(all(feature = "display", unix, not(target_os = "macos")))]
fn display_server_available() -> bool {
    let has = |var: &str| std::env::var_os(var).is_some_and(|v| !v.is_empty());
    has("DISPLAY") || has("WAYLAND_DISPLAY")
}

#[cfg(all(feature = "display", not(all(unix, not(target_os = "macos")))))]
fn display_server_available() -> bool {
    true
}
