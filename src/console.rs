use crossterm::{
    cursor,
    event::{self, KeyCode, KeyEvent, KeyModifiers},
    execute, queue, terminal,
};
use std::io;

pub enum ConsoleCommand {
    Exit,
    Handled,
}

/// Terminal frame display: raw mode with a hidden cursor, redrawn from the
/// top-left every generation. Dropping it restores the terminal.
pub struct ConsoleRender;

impl ConsoleRender {
    pub fn new() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        execute!(io::stdout(), cursor::Hide)?;
        Ok(Self)
    }

    /// Draws one rendered frame, clipped to the terminal size.
    pub fn render(&self, frame: &str) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let mut stdout = io::stdout();
        queue!(stdout, terminal::Clear(terminal::ClearType::All))?;
        for (row, line) in frame.lines().take(rows as usize).enumerate() {
            queue!(stdout, cursor::MoveTo(0, row as u16))?;
            let clipped = line.chars().take(cols as usize).collect::<String>();
            io::Write::write_all(&mut stdout, clipped.as_bytes())?;
        }

        io::Write::flush(&mut stdout)
    }

    pub fn poll_events(&mut self) -> io::Result<Option<ConsoleCommand>> {
        // only take an event if one is already waiting
        if !event::poll(std::time::Duration::from_secs(0))? {
            return Ok(None);
        }

        let mut outp = Ok(Some(ConsoleCommand::Handled));
        match event::read()? {
            // CTRL+C
            event::Event::Key(KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            })
            | event::Event::Key(KeyEvent {
                code: KeyCode::Char('q'),
                ..
            }) => {
                outp = Ok(Some(ConsoleCommand::Exit));
            }
            _ => {}
        }
        outp
    }
}

impl Drop for ConsoleRender {
    fn drop(&mut self) {
        // if we can enable it, we should be able to disable it
        terminal::disable_raw_mode().expect("disable raw mode");
        execute!(io::stdout(), cursor::Show).expect("enable cursor");
    }
}
