#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// An event that has occurred on the window
pub enum Event {
    /// The user asked for the window to be closed
    Quit,
    /// Anything else, e.g. mouse motion, key presses or focus changes. These are ignored.
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The sole termination signal for the render loop. Starts running, and can only be stopped
/// by a quit event.
pub struct RunFlag {
    running: bool,
}

impl Default for RunFlag {
    fn default() -> Self {
        Self { running: true }
    }
}

impl RunFlag {
    /// Whether the loop should draw another frame
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Process every event of a drained batch, stopping on any quit event
    pub fn handle_events<'a>(&mut self, events: impl IntoIterator<Item = &'a Event>) {
        for ev in events {
            match ev {
                Event::Quit => {
                    if self.running {
                        log::debug!("Quit requested");
                    }
                    self.running = false;
                }
                Event::Other => {}
            }
        }
    }
}
