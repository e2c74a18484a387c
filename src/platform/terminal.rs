//! Terminal host (native)
//!
//! Draws the game on a crossterm alternate screen. The mouse row drives the
//! user paddle; `q`, `Esc` or `Ctrl-C` quit. `+` and `-` change the tick
//! rate and `s` writes a changed rate back to the settings file.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::cursor;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    MouseEventKind,
};
use crossterm::style::{self, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};

use super::{FixedStep, log_events, row_to_surface_y};
use crate::renderer::{CellGrid, Color, RenderStyle, render};
use crate::settings::Settings;
use crate::sim::{GameState, tick};

/// Puts the terminal back the way we found it, even on error or panic unwind
struct TerminalGuard;

impl TerminalGuard {
    fn enter(out: &mut impl Write) -> Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        let guard = TerminalGuard;
        execute!(out, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)
            .context("failed to set up the terminal")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = io::stdout();
        let _ = execute!(out, ResetColor, cursor::Show, DisableMouseCapture, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Tick rate change per `+`/`-` press
const FPS_STEP: u32 = 5;
const MIN_FPS: u32 = 5;
const MAX_FPS: u32 = 200;

enum Control {
    Continue,
    Quit,
}

/// Game plus everything the terminal needs to show it
pub struct TerminalHost {
    settings: Settings,
    settings_path: PathBuf,
    /// Settings changed since load or last save
    dirty: bool,
    state: GameState,
    style: RenderStyle,
    grid: CellGrid,
    step: FixedStep,
}

impl TerminalHost {
    pub fn new(settings: Settings, cols: u16, rows: u16) -> Self {
        let state = GameState::new(settings.surface());
        let grid = CellGrid::new(cols, rows, &state.surface);
        Self {
            style: settings.render_style(),
            step: FixedStep::new(settings.tick_interval_ms()),
            settings,
            settings_path: Settings::path(),
            dirty: false,
            state,
            grid,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn grid(&self) -> &CellGrid {
        &self.grid
    }

    fn handle_event(&mut self, event: Event) -> Control {
        match event {
            Event::Mouse(mouse) => {
                if matches!(mouse.kind, MouseEventKind::Moved | MouseEventKind::Drag(_)) {
                    let y = row_to_surface_y(mouse.row, self.grid.rows(), self.state.surface.height);
                    self.state.apply_pointer_input(y);
                }
            }
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Control::Quit,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Control::Quit;
                }
                KeyCode::Char('+') | KeyCode::Char('=') => {
                    self.set_fps(self.settings.frames_per_second.saturating_add(FPS_STEP));
                }
                KeyCode::Char('-') => {
                    self.set_fps(self.settings.frames_per_second.saturating_sub(FPS_STEP));
                }
                KeyCode::Char('s') => self.save_settings(),
                _ => {}
            },
            Event::Resize(cols, rows) => {
                log::info!("Terminal resized to {}x{}", cols, rows);
                self.grid = CellGrid::new(cols, rows, &self.state.surface);
            }
            _ => {}
        }
        Control::Continue
    }

    fn set_fps(&mut self, fps: u32) {
        let fps = fps.clamp(MIN_FPS, MAX_FPS);
        if fps == self.settings.frames_per_second {
            return;
        }
        self.settings.frames_per_second = fps;
        self.step = FixedStep::new(self.settings.tick_interval_ms());
        self.dirty = true;
        log::info!("Tick rate now {} fps", fps);
    }

    fn save_settings(&mut self) {
        if !self.dirty {
            log::info!("Settings unchanged, nothing to save");
            return;
        }
        match self.settings.save_to(&self.settings_path) {
            Ok(()) => self.dirty = false,
            Err(e) => log::warn!("Could not save settings: {}", e),
        }
    }

    /// One scheduler callback: update, then redraw into the cell grid
    pub fn frame(&mut self) {
        let events = tick(&mut self.state);
        log_events(&events);
        render(&self.state, &mut self.grid, &self.style);
    }

    /// Write the cell grid to the terminal
    fn present(&self, out: &mut impl Write) -> io::Result<()> {
        let mut fg = None;
        let mut bg = None;
        for row in 0..self.grid.rows() {
            queue!(out, cursor::MoveTo(0, row))?;
            for cell in self.grid.row(row) {
                if bg != Some(cell.bg) {
                    queue!(out, SetBackgroundColor(term_color(cell.bg)))?;
                    bg = Some(cell.bg);
                }
                if fg != Some(cell.fg) {
                    queue!(out, SetForegroundColor(term_color(cell.fg)))?;
                    fg = Some(cell.fg);
                }
                queue!(out, Print(cell.ch))?;
            }
        }
        out.flush()
    }

    /// Poll input until the next tick is due, run due ticks, repeat until quit
    pub fn run(&mut self, out: &mut impl Write) -> Result<()> {
        let mut last = Instant::now();
        loop {
            let wait = Duration::from_secs_f64(self.step.until_next_ms() / 1000.0);
            if event::poll(wait).context("failed to poll terminal events")? {
                let event = event::read().context("failed to read terminal event")?;
                if let Control::Quit = self.handle_event(event) {
                    return Ok(());
                }
            }

            let now = Instant::now();
            let due = self.step.advance(now.duration_since(last).as_secs_f64() * 1000.0);
            last = now;

            if due > 0 {
                for _ in 0..due {
                    self.frame();
                }
                self.present(out).context("failed to draw frame")?;
            }
        }
    }
}

fn term_color(color: Color) -> style::Color {
    style::Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Run the game in the current terminal until the player quits
pub fn run(settings: Settings) -> Result<()> {
    let (cols, rows) = terminal::size().context("failed to query terminal size")?;
    log::info!(
        "Canvas Pong starting: surface {}x{} on {}x{} cells @ {} fps",
        settings.surface_width,
        settings.surface_height,
        cols,
        rows,
        settings.frames_per_second
    );

    let mut out = io::stdout();
    let mut host = TerminalHost::new(settings, cols, rows);
    let result = {
        let _guard = TerminalGuard::enter(&mut out)?;
        host.run(&mut out)
    };

    let (user, com) = host.state().scores();
    log::info!("Final score {} - {} after {} ticks", user, com, host.state().ticks);
    if log::log_enabled!(log::Level::Debug) {
        match serde_json::to_string(host.state()) {
            Ok(json) => log::debug!("Final state: {}", json),
            Err(e) => log::debug!("Could not serialize final state: {}", e),
        }
    }

    result
}
