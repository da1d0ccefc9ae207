use std::sync::Arc;

use log::{error, info};
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::{
    config::Conf,
    error::{Error, Result},
    graphics::{present::Presenter, Canvas},
};

/// Open a window of the canvas's size and show the canvas in it until the window
/// is closed.
///
/// The window isn't user resizable and ignores all input except being closed. If
/// the platform resizes it anyway the canvas is stretched to fit.
///
/// # NOTE
/// Must be called from the main thread, winit refuses to create an event loop on
/// any other thread on most platforms.
pub fn show(conf: &Conf, canvas: &Canvas) -> Result<()> {
    if canvas.width() == 0 || canvas.height() == 0 {
        return Err(Error::EmptyCanvas {
            width: canvas.width(),
            height: canvas.height(),
        });
    }
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);
    let mut app = AppHandler {
        conf,
        canvas,
        presenter: None,
        error: None,
    };
    event_loop.run_app(&mut app)?;
    match app.error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

struct AppHandler<'a> {
    conf: &'a Conf,
    canvas: &'a Canvas,
    presenter: Option<Presenter>,
    error: Option<Error>,
}

impl AppHandler<'_> {
    fn open(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attribs = Window::default_attributes()
            .with_title(&self.conf.title)
            .with_inner_size(PhysicalSize::new(self.canvas.width(), self.canvas.height()))
            .with_resizable(false);
        let window = Arc::new(event_loop.create_window(attribs)?);
        info!(
            "opened {}x{} window {:?}",
            self.canvas.width(),
            self.canvas.height(),
            window.id()
        );
        let presenter = Presenter::new(window, self.canvas)?;
        presenter.window().request_redraw();
        self.presenter = Some(presenter);
        Ok(())
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: Error) {
        error!("{err}");
        self.error = Some(err);
        event_loop.exit();
    }
}

impl ApplicationHandler for AppHandler<'_> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.presenter.is_some() {
            return;
        }
        if let Err(err) = self.open(event_loop) {
            self.fail(event_loop, err);
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        self.presenter = None;
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, ev: WindowEvent) {
        match ev {
            WindowEvent::CloseRequested => {
                info!("window closed");
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                if let Some(presenter) = &mut self.presenter {
                    presenter.resize(size);
                    presenter.window().request_redraw();
                }
            }
            WindowEvent::RedrawRequested => {
                let Some(presenter) = &mut self.presenter else {
                    return;
                };
                match presenter.present() {
                    Ok(true) => {}
                    Ok(false) => presenter.window().request_redraw(),
                    Err(err) => self.fail(event_loop, err),
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_canvas_is_refused_before_opening() {
        let err = show(&Conf::default(), &Canvas::new(0, 10)).unwrap_err();
        assert!(matches!(
            err,
            Error::EmptyCanvas {
                width: 0,
                height: 10
            }
        ));
        assert_eq!(err.to_string(), "Canvas of 0x10 is empty");
    }
}
