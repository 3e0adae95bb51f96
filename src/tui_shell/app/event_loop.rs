use std::io;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::Route;

use super::App;

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.tick(Instant::now());

        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;
        if app.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => handle_key(app, k),
                _ => {}
            }
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit = true;
        return;
    }

    let typing = !app.input.buf.is_empty();
    match key.code {
        KeyCode::Esc => {
            if typing {
                app.input.clear();
            } else {
                app.back();
            }
        }

        KeyCode::Enter => {
            if typing {
                app.submit_input();
            } else {
                app.activate();
            }
        }

        KeyCode::Up => {
            if typing || app.route == Route::Login {
                app.input.history_up();
            } else {
                app.move_up();
            }
        }
        KeyCode::Down => {
            if typing || app.route == Route::Login {
                app.input.history_down();
            } else {
                app.move_down();
            }
        }

        KeyCode::Left => app.input.move_left(),
        KeyCode::Right => app.input.move_right(),
        KeyCode::Backspace => app.input.backspace(),
        KeyCode::Delete => app.input.delete(),

        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input.clear();
        }

        KeyCode::Char('q') if !typing && app.route != Route::Login => {
            app.quit = true;
        }

        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if accepts_input(app.route) {
                app.input.insert_char(c);
            }
        }

        _ => {}
    }
}

fn accepts_input(route: Route) -> bool {
    matches!(route, Route::Login | Route::MyPage)
}
