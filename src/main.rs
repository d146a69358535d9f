mod display;

use std::io::{stdout, BufWriter, Write};
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    terminal, ExecutableCommand,
};
use log::{debug, info};
use rand::thread_rng;

use stickman_runner::clock::FrameClock;
use stickman_runner::compute::{new_round, tick};
use stickman_runner::config::GameConfig;
use stickman_runner::controller::{handle_menu_event, handle_round_event, MenuChoice, RoundFlow};
use stickman_runner::entities::{ButtonLayout, GameStatus};
use stickman_runner::geometry::Point;
use stickman_runner::input::{self, InputEvent};
use stickman_runner::viewport::Viewport;

use display::{Scene, TITLE};

// ── Shell ─────────────────────────────────────────────────────────────────────

/// Everything that lives as long as the terminal session: the immutable
/// config, the button layout and the per-frame view of the terminal.
struct Shell<'a> {
    config: &'a GameConfig,
    layout: ButtonLayout,
    viewport: Viewport,
    pointer: Option<Point>,
    clock: FrameClock,
}

impl<'a> Shell<'a> {
    fn new(config: &'a GameConfig, cols: u16, rows: u16) -> Self {
        Shell {
            config,
            layout: ButtonLayout::for_config(config),
            viewport: Viewport::new(config.width, config.height, cols, rows),
            pointer: None,
            clock: FrameClock::new(config.frame_duration()),
        }
    }

    fn scene(&self) -> Scene<'_> {
        Scene {
            config: self.config,
            layout: &self.layout,
            viewport: &self.viewport,
            pointer: self.pointer,
        }
    }

    /// Drain every pending terminal event without blocking.  Pointer and
    /// resize bookkeeping happens here; the rest is left to the caller.
    fn poll_events(&mut self) -> std::io::Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        while event::poll(Duration::ZERO)? {
            let raw = event::read()?;
            let Some(ev) = input::translate(&raw, &self.viewport) else {
                continue;
            };
            if let Some(pos) = input::pointer_position(&ev) {
                self.pointer = Some(pos);
            }
            if let InputEvent::Resized { cols, rows } = ev {
                debug!("terminal resized to {}x{}", cols, rows);
                self.viewport = self.viewport.resized(cols, rows);
            }
            events.push(ev);
        }
        Ok(events)
    }

    // ── Menu ──────────────────────────────────────────────────────────────────

    fn show_menu<W: Write>(&mut self, out: &mut W) -> std::io::Result<MenuChoice> {
        loop {
            self.clock.begin();

            for ev in self.poll_events()? {
                if let Some(choice) = handle_menu_event(&ev, &self.layout) {
                    return Ok(choice);
                }
            }

            display::render_menu(out, &self.scene())?;
            self.clock.wait();
        }
    }

    // ── Game loop ─────────────────────────────────────────────────────────────

    /// Run rounds back to back until the player quits.  Restart starts a
    /// fresh round directly without passing through the menu.
    fn play<W: Write>(&mut self, out: &mut W) -> std::io::Result<()> {
        let mut rng = thread_rng();
        let mut state = new_round(self.config);
        info!("round started");

        loop {
            self.clock.begin();

            for ev in self.poll_events()? {
                let (next, flow) = handle_round_event(&state, &ev, &self.layout, self.config);
                state = next;
                match flow {
                    RoundFlow::Quit => return Ok(()),
                    RoundFlow::Restart => info!("round started"),
                    RoundFlow::Continue => {}
                }
            }

            let was_playing = state.status == GameStatus::Playing;
            state = tick(&state, self.config, &mut rng);
            if was_playing && state.status == GameStatus::GameOver {
                info!("game over: score {} after {} ticks", state.score, state.frame);
            }

            display::render_round(out, &self.scene(), &state)?;
            self.clock.wait();
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let _ = env_logger::Builder::from_default_env().try_init();

    let config = GameConfig::default();
    let mut out = BufWriter::new(stdout());

    let acquired = acquire_terminal(&mut out);
    let key_types = acquired.is_ok() && input::enable_key_event_types(&mut out);
    if !key_types {
        debug!("terminal does not report key event types; auto-repeat counts as presses");
    }
    let result = acquired.and_then(|()| run(&mut out, &config));

    // Always restore the terminal
    if key_types {
        input::disable_key_event_types(&mut out);
    }
    release_terminal(&mut out);

    if result.is_ok() {
        info!("exiting");
    }
    result
}

fn acquire_terminal<W: Write>(out: &mut W) -> anyhow::Result<()> {
    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)
        .context("failed to enter the alternate screen")?;
    out.execute(cursor::Hide).context("failed to hide the cursor")?;
    out.execute(EnableMouseCapture)
        .context("failed to enable mouse capture")?;
    out.execute(terminal::SetTitle(TITLE))
        .context("failed to set the terminal title")?;
    Ok(())
}

fn release_terminal<W: Write>(out: &mut W) {
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}

fn run<W: Write>(out: &mut W, config: &GameConfig) -> anyhow::Result<()> {
    let (cols, rows) = terminal::size().context("failed to read the terminal size")?;
    info!("starting on a {}x{} terminal", cols, rows);

    let mut shell = Shell::new(config, cols, rows);
    match shell.show_menu(out)? {
        MenuChoice::Quit => info!("quit from menu"),
        MenuChoice::Start => {
            info!("start from menu");
            shell.play(out)?;
        }
    }
    Ok(())
}
