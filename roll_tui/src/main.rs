//! roll_tui - Interactive dice roller and character quick rolls
//!
//! Usage: roll_tui [--config <roller.toml>] [--character <sheet.toml>]

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use roll_tui::{
    app::{App, Tab},
    ui,
};
use std::io;
use std::path::PathBuf;

fn main() -> io::Result<()> {
    init_tracing();

    let (config_path, character_path) = parse_args(std::env::args().skip(1));
    let mut app = App::load(config_path.as_deref(), character_path.as_deref());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(std::time::Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if app.is_editing_label() {
                    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                        break;
                    }
                    match key.code {
                        KeyCode::Enter => app.commit_label(),
                        KeyCode::Esc => app.cancel_label_edit(),
                        KeyCode::Backspace => app.pop_label_char(),
                        KeyCode::Char(c) => app.push_label_char(c),
                        _ => {}
                    }
                    continue;
                }
                match (key.code, key.modifiers) {
                    (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
                    (KeyCode::Tab, _) => app.next_tab(),
                    (KeyCode::BackTab, _) => app.prev_tab(),
                    (KeyCode::Char('1'), _) => app.set_tab(0),
                    (KeyCode::Char('2'), _) => app.set_tab(1),
                    (KeyCode::Char('3'), _) => app.set_tab(2),
                    (KeyCode::Char('4'), _) | (KeyCode::Char('?'), _) => app.set_tab(3),
                    (KeyCode::Up, _) | (KeyCode::Char('k'), _) => app.on_up(),
                    (KeyCode::Down, _) | (KeyCode::Char('j'), _) => app.on_down(),
                    (KeyCode::Left, _) | (KeyCode::Char('h'), _) => app.on_left(),
                    (KeyCode::Right, _) | (KeyCode::Char('l'), _) => app.on_right(),
                    (KeyCode::Char('+'), _) | (KeyCode::Char('='), _) => app.increase_modifier(),
                    (KeyCode::Char('-'), _) => app.decrease_modifier(),
                    (KeyCode::Char('m'), _) => app.cycle_mode(),
                    (KeyCode::Char('n'), _) if app.current_tab == Tab::Roller => {
                        app.begin_label_edit()
                    }
                    (KeyCode::Enter, _) | (KeyCode::Char(' '), _) => app.on_enter(),
                    (KeyCode::Char('c'), _) => app.clear_history(),
                    _ => {}
                }
            }
        }
    }
    Ok(())
}

/// Log to stderr, and only when RUST_LOG asks for it, so the alternate
/// screen stays clean by default
fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}

fn parse_args(mut args: impl Iterator<Item = String>) -> (Option<PathBuf>, Option<PathBuf>) {
    let mut config = None;
    let mut character = None;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => config = args.next().map(PathBuf::from),
            "--character" | "-p" => character = args.next().map(PathBuf::from),
            other => eprintln!("Ignoring unknown argument: {}", other),
        }
    }
    (config, character)
}
