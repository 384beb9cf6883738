//! The real [Screen]: a winit window presenting a softbuffer surface

use std::{num::NonZeroU32, rc::Rc, time::Duration};

use softbuffer::{Context, Surface};
use winit::{
    application::ApplicationHandler,
    dpi::{PhysicalPosition, PhysicalSize},
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    platform::pump_events::{EventLoopExtPumpEvents, PumpStatus},
    window::{Window, WindowId},
};

use crate::{
    canvas::Canvas,
    config::Conf,
    error::{Error, Result},
    event::Event,
    geometry::Rect,
    screen::Screen,
};

/// A window and the surface it displays.
///
/// Drawing happens on a retained [Canvas] which is copied to the window surface on every
/// present, so anything not drawn over stays visible.
///
/// # NOTE
/// Must be opened on the main thread.
pub struct WindowScreen {
    // Dropped in declaration order: surface, then window, then the event loop
    surface: Surface<Rc<Window>, Rc<Window>>,
    _context: Context<Rc<Window>>,
    window: Rc<Window>,
    event_loop: EventLoop<()>,
    canvas: Canvas,
}

impl WindowScreen {
    /// Initialize the video subsystem, open a window described by `conf` and bind a surface
    /// to it
    pub fn open(conf: &Conf) -> Result<Self> {
        let event_loop = EventLoop::new().map_err(|e| Error::Init(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Poll);

        let (width, height) = conf.window_size;
        let attribs = Window::default_attributes()
            .with_title(conf.title.as_str())
            .with_inner_size(PhysicalSize::new(width, height))
            .with_position(PhysicalPosition::new(conf.window_pos.0, conf.window_pos.1))
            .with_resizable(false);
        // The loop is driven by pumping, so the window is created before the first pump
        #[allow(deprecated)]
        let window = Rc::new(
            event_loop
                .create_window(attribs)
                .map_err(|e| Error::CreateWindow(e.to_string()))?,
        );
        log::info!(
            "Opened window {:?} \"{}\" ({width}x{height})",
            window.id(),
            conf.title
        );
        let actual = window.inner_size();
        if (actual.width, actual.height) != (width, height) {
            log::warn!(
                "Window is {}x{}, drawing at {width}x{height} anyway",
                actual.width,
                actual.height
            );
        }

        let context = Context::new(window.clone()).map_err(|e| Error::Surface(e.to_string()))?;
        let mut surface =
            Surface::new(&context, window.clone()).map_err(|e| Error::Surface(e.to_string()))?;
        let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
            return Err(Error::Surface(format!("{width}x{height} surface is empty")));
        };
        surface
            .resize(w, h)
            .map_err(|e| Error::Surface(e.to_string()))?;

        Ok(Self {
            surface,
            _context: context,
            window,
            event_loop,
            canvas: Canvas::new(width, height),
        })
    }

    /// The pixels that will be shown on the next present
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }
}

impl Drop for WindowScreen {
    fn drop(&mut self) {
        log::debug!("Closing window {:?}", self.window.id());
    }
}

impl Screen for WindowScreen {
    fn size(&self) -> (u32, u32) {
        self.canvas.size()
    }

    fn fill_rect(&mut self, rect: Rect, colour: u32) -> Result<()> {
        self.canvas.fill_rect(rect, colour)
    }

    fn clear(&mut self, colour: u32) -> Result<()> {
        self.canvas.clear(colour);
        Ok(())
    }

    fn present(&mut self) -> Result<()> {
        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| Error::Present(e.to_string()))?;
        buffer.copy_from_slice(self.canvas.pixels());
        self.window.pre_present_notify();
        buffer.present().map_err(|e| Error::Present(e.to_string()))
    }

    fn poll_events(&mut self, events: &mut Vec<Event>) {
        let mut collector = EventCollector {
            window_id: self.window.id(),
            events,
        };
        if let PumpStatus::Exit(code) = self
            .event_loop
            .pump_app_events(Some(Duration::ZERO), &mut collector)
        {
            log::debug!("Event loop exited with code {code}");
            collector.events.push(Event::Quit);
        }
    }
}

fn convert_event(ev: &WindowEvent) -> Event {
    match ev {
        WindowEvent::CloseRequested => Event::Quit,
        _ => Event::Other,
    }
}

struct EventCollector<'a> {
    window_id: WindowId,
    events: &'a mut Vec<Event>,
}

impl ApplicationHandler for EventCollector<'_> {
    fn resumed(&mut self, _event_loop: &ActiveEventLoop) {}

    fn window_event(&mut self, _event_loop: &ActiveEventLoop, window_id: WindowId, ev: WindowEvent) {
        if window_id == self.window_id {
            self.events.push(convert_event(&ev));
        }
    }
}
