use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event as CrosstermEvent},
    execute, queue,
    style::{Attribute, Print, SetAttribute},
    terminal,
};
use shadowdom::{Document, Element, LayoutResult, NodeId, Rect, layout};
use unicode_width::UnicodeWidthChar;

/// How a text row is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emphasis {
    #[default]
    Plain,
    Bold,
    Reverse,
}

pub struct Terminal {
    stdout: io::Stdout,
    size: (u16, u16),
    last_layout: LayoutResult,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        Ok(Self {
            stdout,
            size: terminal::size()?,
            last_layout: LayoutResult::new(),
        })
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
            // Drain any additional pending events
            while event::poll(Duration::ZERO)? {
                events.push(event::read()?);
            }
        }

        Ok(events)
    }

    /// Lay out `doc` and draw every displayed text row.
    pub fn render(
        &mut self,
        doc: &Document,
        emphasis: impl Fn(NodeId, &Element) -> Emphasis,
    ) -> io::Result<&LayoutResult> {
        self.size = terminal::size()?;
        let (width, height) = self.size;
        self.last_layout = layout(doc, Rect::from_size(width, height));

        queue!(
            self.stdout,
            SetAttribute(Attribute::Reset),
            terminal::Clear(terminal::ClearType::All)
        )?;
        for id in doc.descendants(doc.root()) {
            let (Some(rect), Ok(el)) = (self.last_layout.get(id), doc.get(id)) else {
                continue;
            };
            let Some(text) = el.text.as_deref() else {
                continue;
            };
            if rect.y >= height {
                continue;
            }

            queue!(self.stdout, cursor::MoveTo(rect.x, rect.y))?;
            match emphasis(id, el) {
                Emphasis::Plain => {}
                Emphasis::Bold => queue!(self.stdout, SetAttribute(Attribute::Bold))?,
                Emphasis::Reverse => queue!(self.stdout, SetAttribute(Attribute::Reverse))?,
            }
            queue!(
                self.stdout,
                Print(fit(text, rect.width)),
                SetAttribute(Attribute::Reset)
            )?;
        }
        self.stdout.flush()?;

        Ok(&self.last_layout)
    }

    /// Get the layout from the last render.
    pub fn layout(&self) -> &LayoutResult {
        &self.last_layout
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}

/// Truncate or pad `text` to exactly `width` cells.
fn fit(text: &str, width: u16) -> String {
    let width = width as usize;
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.extend(std::iter::repeat_n(' ', width - used));
    out
}
