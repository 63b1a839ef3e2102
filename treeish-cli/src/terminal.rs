use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, ContentStyle, PrintStyledContent, SetAttribute, StyledContent},
    terminal::{self, Clear, ClearType},
};
use treeish::Line;

/// Raw-mode alternate screen, restored on drop.
pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableFocusChange
        )?;

        Ok(Self { stdout })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let mut events = Vec::new();

        let has_event = match timeout {
            Some(dur) => event::poll(dur)?,
            None => {
                events.push(event::read()?);
                return Ok(events);
            }
        };

        if has_event {
            events.push(event::read()?);
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    /// Draw `lines` from the top of the screen and `status` on the last row.
    pub fn draw(&mut self, lines: &[Line], status: &Line) -> io::Result<()> {
        let (_, height) = self.size()?;
        let rows = usize::from(height.saturating_sub(1));

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        for y in 0..rows {
            queue!(self.stdout, cursor::MoveTo(0, y as u16))?;
            if let Some(line) = lines.get(y) {
                self.print_line(line)?;
            }
            queue!(self.stdout, Clear(ClearType::UntilNewLine))?;
        }

        if height > 0 {
            queue!(self.stdout, cursor::MoveTo(0, height - 1))?;
            self.print_line(status)?;
            queue!(self.stdout, Clear(ClearType::UntilNewLine))?;
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }

    fn print_line(&mut self, line: &Line) -> io::Result<()> {
        for span in &line.spans {
            let style: ContentStyle = span.style.into();
            queue!(
                self.stdout,
                PrintStyledContent(StyledContent::new(style, span.content.as_str()))
            )?;
        }
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableFocusChange,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
