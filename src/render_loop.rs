use std::time::{Duration, Instant};

use rand::Rng;

use crate::{
    config::Conf,
    error::Result,
    event::{Event, RunFlag},
    geometry::{random_colour, Rect},
    screen::Screen,
};

/// What happened during [RenderLoop::run]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of frames drawn and presented
    pub frames: u64,
}

/// Owns the screen and everything mutated while drawing.
///
/// Each frame moves the rectangle somewhere random, fills it with a random colour, presents,
/// then drains pending events. A quit event stops the loop once the current frame is done.
pub struct RenderLoop<S, R> {
    screen: S,
    rng: R,
    rect: Rect,
    flag: RunFlag,
    frame_budget: Option<Duration>,
    clear_each_frame: bool,
    events: Vec<Event>,
    frames: u64,
}

impl<S: Screen, R: Rng> RenderLoop<S, R> {
    /// Set up a loop drawing on `screen`, taking the rectangle size and pacing from `conf`
    pub fn new(screen: S, rng: R, conf: &Conf) -> Result<Self> {
        conf.validate()?;
        log::debug!("Render loop configuration: {conf:?}");
        if conf.frame_cap.is_none() {
            log::debug!("No frame cap, drawing as fast as possible");
        }
        Ok(Self {
            screen,
            rng,
            rect: Rect::with_size(conf.rect_size.0, conf.rect_size.1),
            flag: RunFlag::default(),
            frame_budget: conf.frame_cap.map(|fps| Duration::from_secs(1) / fps),
            clear_each_frame: conf.clear_each_frame,
            events: Vec::new(),
            frames: 0,
        })
    }

    /// Whether a quit event has not been seen yet
    pub fn is_running(&self) -> bool {
        self.flag.is_running()
    }

    /// Frames completed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// The screen being drawn on
    pub fn screen(&self) -> &S {
        &self.screen
    }

    /// Draw, present and process events for exactly one frame
    pub fn frame(&mut self) -> Result<()> {
        let start = Instant::now();
        let (width, height) = self.screen.size();
        self.rect.place_randomly(&mut self.rng, width, height);
        let colour = random_colour(&mut self.rng);
        log::trace!("Frame {}: {:?} #{colour:06x}", self.frames, self.rect);

        if self.clear_each_frame {
            self.screen.clear(0)?;
        }
        self.screen.fill_rect(self.rect, colour)?;
        self.screen.present()?;

        self.events.clear();
        self.screen.poll_events(&mut self.events);
        self.flag.handle_events(&self.events);
        self.frames += 1;

        if let Some(budget) = self.frame_budget {
            if let Some(rest) = budget.checked_sub(start.elapsed()) {
                std::thread::sleep(rest);
            }
        }
        Ok(())
    }

    /// Run frames until a quit event is seen, or a frame fails
    pub fn run(mut self) -> Result<RunSummary> {
        while self.flag.is_running() {
            if let Err(e) = self.frame() {
                log::error!("Frame {} failed: {e}", self.frames);
                return Err(e);
            }
        }
        log::info!("Quit after {} frames", self.frames);
        Ok(RunSummary {
            frames: self.frames,
        })
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::{cell::Cell, collections::VecDeque, rc::Rc};

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::{canvas::Canvas, error::Error};

    /// A screen that records what it was asked to do and replays scripted event batches
    #[derive(Debug)]
    pub(crate) struct ScriptedScreen {
        pub canvas: Canvas,
        pub script: VecDeque<Vec<Event>>,
        pub fills: Vec<(Rect, u32)>,
        pub clears: usize,
        pub presents: usize,
        pub fail_present_at: Option<usize>,
        /// (fills, presents), shared so it can be read after the screen is dropped
        pub cycles: Rc<Cell<(usize, usize)>>,
    }

    impl ScriptedScreen {
        pub fn new(conf: &Conf, script: impl IntoIterator<Item = Vec<Event>>) -> Self {
            Self {
                canvas: Canvas::new(conf.window_size.0, conf.window_size.1),
                script: script.into_iter().collect(),
                fills: Vec::new(),
                clears: 0,
                presents: 0,
                fail_present_at: None,
                cycles: Rc::default(),
            }
        }
    }

    impl Screen for ScriptedScreen {
        fn size(&self) -> (u32, u32) {
            self.canvas.size()
        }

        fn fill_rect(&mut self, rect: Rect, colour: u32) -> Result<()> {
            self.canvas.fill_rect(rect, colour)?;
            self.fills.push((rect, colour));
            let (fills, presents) = self.cycles.get();
            self.cycles.set((fills + 1, presents));
            Ok(())
        }

        fn clear(&mut self, colour: u32) -> Result<()> {
            self.canvas.clear(colour);
            self.clears += 1;
            Ok(())
        }

        fn present(&mut self) -> Result<()> {
            if self.fail_present_at == Some(self.presents) {
                return Err(Error::Present("scripted failure".to_owned()));
            }
            self.presents += 1;
            let (fills, presents) = self.cycles.get();
            self.cycles.set((fills, presents + 1));
            Ok(())
        }

        fn poll_events(&mut self, events: &mut Vec<Event>) {
            let batch = self
                .script
                .pop_front()
                .expect("polled past the end of the event script");
            events.extend(batch);
        }
    }

    fn new_loop(script: Vec<Vec<Event>>) -> RenderLoop<ScriptedScreen, StdRng> {
        let conf = Conf::default();
        RenderLoop::new(
            ScriptedScreen::new(&conf, script),
            StdRng::seed_from_u64(42),
            &conf,
        )
        .unwrap()
    }

    #[test]
    fn first_frame_runs_before_quit() {
        let mut render = new_loop(vec![vec![Event::Quit]]);
        assert!(render.is_running());
        assert_eq!(render.frames(), 0);
        render.frame().unwrap();
        assert!(!render.is_running());
        assert_eq!(render.frames(), 1);
        assert_eq!(render.screen().fills.len(), 1);
        assert_eq!(render.screen().presents, 1);
    }

    #[test]
    fn quit_stops_after_current_frame() {
        let render = new_loop(vec![
            vec![],
            vec![Event::Other, Event::Quit, Event::Other],
            // Never polled
            vec![],
        ]);
        let summary = render.run().unwrap();
        assert_eq!(summary.frames, 2);
    }

    #[test]
    fn other_events_keep_running() {
        let mut render = new_loop(vec![vec![Event::Other; 5], vec![Event::Other], vec![]]);
        for _ in 0..3 {
            render.frame().unwrap();
            assert!(render.is_running());
        }
        assert_eq!(render.frames(), 3);
    }

    #[test]
    fn fills_are_random_and_inside_window() {
        let mut render = new_loop(vec![vec![]; 200]);
        for _ in 0..200 {
            render.frame().unwrap();
        }
        let fills = &render.screen().fills;
        assert_eq!(fills.len(), 200);
        for (rect, colour) in fills {
            assert!(rect.x < 700 && rect.y < 500, "{rect:?}");
            assert_eq!((rect.width, rect.height), (100, 100));
            assert_eq!(colour >> 24, 0);
        }
        assert!(fills.windows(2).any(|w| w[0] != w[1]));
        // Without clearing, the last fill is on top and the previous ones leave a trail
        let (last, colour) = fills[fills.len() - 1];
        assert_eq!(render.screen().canvas.pixel(last.x, last.y), Some(colour));
        assert_eq!(render.screen().clears, 0);
    }

    #[test]
    fn clear_each_frame_clears_before_fill() {
        let conf = Conf {
            clear_each_frame: true,
            ..Conf::default()
        };
        let screen = ScriptedScreen::new(&conf, vec![vec![], vec![Event::Quit]]);
        let mut render = RenderLoop::new(screen, StdRng::seed_from_u64(3), &conf).unwrap();
        render.frame().unwrap();
        render.frame().unwrap();
        let screen = render.screen();
        assert_eq!(screen.clears, 2);
        let lit = screen.canvas.pixels().iter().filter(|&&p| p != 0).count();
        assert!(lit <= 100 * 100);
    }

    #[test]
    fn frame_cap_paces_frames() {
        let conf = Conf {
            frame_cap: Some(100),
            ..Conf::default()
        };
        let screen = ScriptedScreen::new(&conf, vec![vec![], vec![], vec![Event::Quit]]);
        let render = RenderLoop::new(screen, StdRng::seed_from_u64(5), &conf).unwrap();
        let start = Instant::now();
        assert_eq!(render.run().unwrap().frames, 3);
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn present_failure_stops_run() {
        let conf = Conf::default();
        let mut screen = ScriptedScreen::new(&conf, vec![vec![]; 4]);
        screen.fail_present_at = Some(2);
        let render = RenderLoop::new(screen, StdRng::seed_from_u64(9), &conf).unwrap();
        assert!(matches!(render.run(), Err(Error::Present(_))));
    }

    #[test]
    fn invalid_conf_is_rejected() {
        let conf = Conf {
            rect_size: (900, 100),
            ..Conf::default()
        };
        let screen = ScriptedScreen::new(&Conf::default(), vec![]);
        assert!(matches!(
            RenderLoop::new(screen, StdRng::seed_from_u64(0), &conf),
            Err(Error::Config(_))
        ));
    }
}
