#![forbid(unsafe_code)]

//! Elm-style update/view loop.
//!
//! The program runtime manages the update/view cycle, handling events and
//! rendering frames. State lives in a [`Model`]; side effects are requested
//! through [`Cmd`] values returned from `init`/`update`.
//!
//! # Example
//!
//! ```ignore
//! use marquee_runtime::{Cmd, Model, Program};
//! use marquee_core::event::Event;
//! use marquee_render::frame::Frame;
//!
//! struct Counter { count: i32 }
//!
//! enum Msg { Increment, Quit, Noop }
//!
//! impl From<Event> for Msg {
//!     fn from(event: Event) -> Self {
//!         match event {
//!             Event::Key(k) if k.is_char('q') => Msg::Quit,
//!             Event::Key(k) if k.is_char('+') => Msg::Increment,
//!             _ => Msg::Noop,
//!         }
//!     }
//! }
//!
//! impl Model for Counter {
//!     type Message = Msg;
//!
//!     fn update(&mut self, msg: Msg) -> Cmd<Msg> {
//!         match msg {
//!             Msg::Increment => { self.count += 1; Cmd::none() }
//!             Msg::Quit => Cmd::quit(),
//!             Msg::Noop => Cmd::none(),
//!         }
//!     }
//!
//!     fn view(&self, frame: &mut Frame) { /* draw */ }
//! }
//!
//! Program::new(Counter { count: 0 }).run().unwrap();
//! ```

use crate::session::{SessionOptions, TerminalSession};
use crate::translate::translate;
use crossterm::event as ct_event;
use marquee_core::event::Event;
use marquee_render::frame::Frame;
use marquee_render::presenter::Presenter;
use std::io;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// The Model trait defines application state and behavior.
pub trait Model: Sized {
    /// Messages that update the model. Every input event must map to one.
    type Message: From<Event>;

    /// Startup hook; return commands for initial side effects.
    fn init(&mut self) -> Cmd<Self::Message> {
        Cmd::none()
    }

    /// The core state transition function.
    fn update(&mut self, msg: Self::Message) -> Cmd<Self::Message>;

    /// Render the current state into a frame.
    fn view(&self, frame: &mut Frame);
}

/// Side effects requested by the model.
#[derive(Debug, Default)]
pub enum Cmd<M> {
    /// No operation.
    #[default]
    None,
    /// Stop the program loop.
    Quit,
    /// Feed another message through `update`.
    Msg(M),
    /// Apply several commands in order.
    Batch(Vec<Cmd<M>>),
}

impl<M> Cmd<M> {
    #[must_use]
    pub const fn none() -> Self {
        Self::None
    }

    #[must_use]
    pub const fn quit() -> Self {
        Self::Quit
    }

    #[must_use]
    pub fn msg(msg: M) -> Self {
        Self::Msg(msg)
    }

    #[must_use]
    pub fn batch(cmds: Vec<Cmd<M>>) -> Self {
        Self::Batch(cmds)
    }
}

/// Apply a command tree to a model. Returns `true` when the program should
/// quit. Every command in a batch is applied even after a quit request, so
/// cleanup messages are not lost.
pub fn apply_cmd<M: Model>(model: &mut M, cmd: Cmd<M::Message>) -> bool {
    match cmd {
        Cmd::None => false,
        Cmd::Quit => true,
        Cmd::Msg(msg) => {
            let next = model.update(msg);
            apply_cmd(model, next)
        }
        Cmd::Batch(cmds) => {
            let mut quit = false;
            for cmd in cmds {
                quit |= apply_cmd(model, cmd);
            }
            quit
        }
    }
}

/// Loop configuration.
#[derive(Debug, Clone, Copy)]
pub struct ProgramConfig {
    /// Upper bound on rendered frames per second (also the tick cadence).
    pub max_fps: u32,
    /// Capture mouse input.
    pub mouse: bool,
    /// Use the alternate screen.
    pub alt_screen: bool,
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            max_fps: 50,
            mouse: true,
            alt_screen: true,
        }
    }
}

impl ProgramConfig {
    /// Duration of one frame slot.
    #[must_use]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.max_fps.max(1)))
    }
}

/// The runtime loop driving one model.
pub struct Program<M: Model> {
    model: M,
    config: ProgramConfig,
}

impl<M: Model> Program<M> {
    #[must_use]
    pub fn new(model: M) -> Self {
        Self::with_config(model, ProgramConfig::default())
    }

    #[must_use]
    pub fn with_config(model: M, config: ProgramConfig) -> Self {
        Self { model, config }
    }

    /// Run to completion. The terminal is restored on every exit path.
    pub fn run(mut self) -> io::Result<()> {
        let mut session = TerminalSession::enter(SessionOptions {
            alt_screen: self.config.alt_screen,
            mouse: self.config.mouse,
        })?;
        let (width, height) = session.size()?;
        let mut frame = Frame::new(width, height);
        let mut presenter = Presenter::new();
        let tick = self.config.frame_interval();
        info!(width, height, max_fps = self.config.max_fps, "program start");

        let init_cmd = self.model.init();
        if apply_cmd(&mut self.model, init_cmd) {
            return Ok(());
        }
        // Models learn their size from resize events; feed the initial one.
        let size_cmd = self.model.update(Event::Resize { width, height }.into());
        if apply_cmd(&mut self.model, size_cmd) {
            return Ok(());
        }

        let mut last_frame = Instant::now();
        loop {
            let timeout = tick.saturating_sub(last_frame.elapsed());
            if ct_event::poll(timeout)? {
                if let Some(event) = translate(ct_event::read()?) {
                    if let Event::Resize { width, height } = event {
                        frame.resize(width, height);
                    }
                    let cmd = self.model.update(event.into());
                    if apply_cmd(&mut self.model, cmd) {
                        break;
                    }
                }
                continue;
            }

            // Poll timed out: one frame slot elapsed.
            let cmd = self.model.update(Event::Tick.into());
            if apply_cmd(&mut self.model, cmd) {
                break;
            }
            frame.reset();
            self.model.view(&mut frame);
            presenter.present(&frame.buffer, session.writer())?;
            session.flush()?;
            last_frame = Instant::now();
        }

        debug!("program loop ended");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Toy {
        count: i32,
        seen_ticks: u32,
    }

    enum ToyMsg {
        Add(i32),
        AddTwice(i32),
        Tick,
        Quit,
        Noop,
    }

    impl From<Event> for ToyMsg {
        fn from(event: Event) -> Self {
            match event {
                Event::Key(k) if k.is_char('q') => Self::Quit,
                Event::Tick => Self::Tick,
                _ => Self::Noop,
            }
        }
    }

    impl Model for Toy {
        type Message = ToyMsg;

        fn update(&mut self, msg: ToyMsg) -> Cmd<ToyMsg> {
            match msg {
                ToyMsg::Add(n) => {
                    self.count += n;
                    Cmd::none()
                }
                ToyMsg::AddTwice(n) => {
                    self.count += n;
                    Cmd::msg(ToyMsg::Add(n))
                }
                ToyMsg::Tick => {
                    self.seen_ticks += 1;
                    Cmd::none()
                }
                ToyMsg::Quit => Cmd::quit(),
                ToyMsg::Noop => Cmd::none(),
            }
        }

        fn view(&self, _frame: &mut Frame) {}
    }

    #[test]
    fn msg_commands_chain_through_update() {
        let mut toy = Toy::default();
        assert!(!apply_cmd(&mut toy, Cmd::msg(ToyMsg::AddTwice(3))));
        assert_eq!(toy.count, 6);
    }

    #[test]
    fn batch_applies_everything_even_after_quit() {
        let mut toy = Toy::default();
        let quit = apply_cmd(
            &mut toy,
            Cmd::batch(vec![
                Cmd::msg(ToyMsg::Add(1)),
                Cmd::quit(),
                Cmd::msg(ToyMsg::Add(1)),
            ]),
        );
        assert!(quit);
        assert_eq!(toy.count, 2);
    }

    #[test]
    fn tick_events_convert_to_messages() {
        let mut toy = Toy::default();
        let cmd = toy.update(Event::Tick.into());
        assert!(!apply_cmd(&mut toy, cmd));
        assert_eq!(toy.seen_ticks, 1);
    }

    #[test]
    fn frame_interval_respects_fps_floor() {
        let config = ProgramConfig {
            max_fps: 0,
            ..ProgramConfig::default()
        };
        assert_eq!(config.frame_interval(), Duration::from_millis(1000));
        let fifty = ProgramConfig::default();
        assert_eq!(fifty.frame_interval(), Duration::from_millis(20));
    }
}
