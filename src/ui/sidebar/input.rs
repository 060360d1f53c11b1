//! Keyboard input handling and interactive loop.

use std::io::{self, Write};

use crossterm::event::KeyEvent;
use navtree::Navigator;

use super::browser::{BrowseAction, Browser};
use super::render::{render_sidebar, RenderOptions};
use super::rows::visible_rows;

/// Convert a keyboard event to a BrowseAction
pub fn key_to_action(key: KeyEvent) -> Option<BrowseAction> {
    use crossterm::event::KeyCode;

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(BrowseAction::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(BrowseAction::Down),
        KeyCode::Enter | KeyCode::Char(' ') => Some(BrowseAction::Activate),
        KeyCode::Char('q') | KeyCode::Esc => Some(BrowseAction::Quit),
        _ => None,
    }
}

/// Run the sidebar browser until the user quits.
pub fn run_interactive(nav: &mut Navigator, opts: RenderOptions, width: u16) -> io::Result<()> {
    use crossterm::{
        cursor,
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{self, ClearType},
    };

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide)?;

    let mut browser = Browser::new(nav.tree());
    let rule = if opts.unicode { "─" } else { "-" }.repeat(usize::from(width.clamp(20, 72)));

    let draw = |stdout: &mut io::Stdout, nav: &Navigator, browser: &Browser| -> io::Result<()> {
        execute!(
            stdout,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        write!(stdout, "route: {}\r\n\r\n", nav.route())?;
        let rows = visible_rows(nav.tree());
        for line in render_sidebar(&rows, &opts, Some(browser.cursor())).lines() {
            write!(stdout, "{}\r\n", line)?;
        }
        write!(stdout, "{}\r\n", rule)?;
        write!(stdout, "(up/down move, enter open or follow, q quit)\r\n")?;
        stdout.flush()
    };

    draw(&mut stdout, nav, &browser)?;

    let result = loop {
        let key = match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => key,
            Ok(_) => continue,
            Err(e) => break Err(e),
        };

        if let Some(action) = key_to_action(key) {
            if browser.handle(action, nav) {
                break Ok(());
            }
            if let Err(e) = draw(&mut stdout, nav, &browser) {
                break Err(e);
            }
        }
    };

    execute!(
        stdout,
        cursor::Show,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    terminal::disable_raw_mode()?;

    result
}
