//! Roster TUI (Terminal User Interface)
//!
//! A terminal user list with an add form and per-row delete.
//!
//! Usage: `roster-tui [SETTINGS_PATH]`

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use roster::settings::{Settings, DEFAULT_SETTINGS_PATH};
use roster::tui::{clipboard::RealClipboard, ui::ui, App, Focus};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SETTINGS_PATH.to_string());
    let settings = Settings::load(&settings_path)?;

    // Guard must live for the whole event loop
    let _log_guard = match roster::init_logging(&settings) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("Warning: Logging disabled: {}", e);
            None
        }
    };
    tracing::info!(settings = %settings_path, "Roster starting");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(settings);

    // Run main loop
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "Event loop failed");
        println!("Error: {:?}", err);
    }

    tracing::info!(records = app.store.len(), "Roster exiting");
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    app.should_quit = true;
                }

                // Popup swallows every other key while shown
                if app.screen.show_delete_confirmation {
                    match key.code {
                        KeyCode::Char('y') | KeyCode::Enter => {
                            app.confirm_delete();
                        }
                        KeyCode::Char('n') | KeyCode::Esc => {
                            app.cancel_delete();
                        }
                        _ => {}
                    }
                } else {
                    match key.code {
                        KeyCode::Tab => app.focus_next(),
                        KeyCode::BackTab => app.focus_previous(),
                        _ => match app.focus {
                            Focus::Name | Focus::Age | Focus::Colour => {
                                match key.code {
                                    KeyCode::Char('v') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                                        match RealClipboard::new() {
                                            Ok(mut clipboard) => app.paste_from_clipboard(&mut clipboard),
                                            Err(e) => app.screen.set_error(e.to_string()),
                                        }
                                    }
                                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                                        app.add_char(c);
                                    }
                                    KeyCode::Backspace => {
                                        app.backspace();
                                    }
                                    KeyCode::Delete => {
                                        app.clear_field();
                                    }
                                    KeyCode::Enter => {
                                        let _ = app.submit();
                                    }
                                    KeyCode::Down => app.focus_next(),
                                    KeyCode::Up => app.focus_previous(),
                                    KeyCode::Esc => app.set_focus(Focus::List),
                                    _ => {}
                                }
                            }
                            Focus::AddButton => {
                                match key.code {
                                    KeyCode::Enter | KeyCode::Char(' ') => {
                                        let _ = app.submit();
                                    }
                                    KeyCode::Down => app.focus_next(),
                                    KeyCode::Up => app.focus_previous(),
                                    KeyCode::Esc => app.set_focus(Focus::List),
                                    _ => {}
                                }
                            }
                            Focus::List => {
                                match key.code {
                                    KeyCode::Char('q') | KeyCode::Esc => {
                                        app.should_quit = true;
                                    }
                                    KeyCode::Down | KeyCode::Char('j') => {
                                        app.next_row();
                                    }
                                    KeyCode::Up | KeyCode::Char('k') => {
                                        app.previous_row();
                                    }
                                    KeyCode::Char('d') | KeyCode::Delete => {
                                        app.request_delete();
                                    }
                                    _ => {}
                                }
                            }
                        },
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
