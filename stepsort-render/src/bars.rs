//! The live bar chart.
//!
//! Each value becomes a vertical bar; highlighted indices are drawn in
//! yellow. Every frame is queued into the writer and flushed once, so a
//! step costs one syscall rather than one per cell.

use crossterm::{
    cursor, execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};
use stepsort_core::SortEvent;

/// Renders [`SortEvent`]s as a bar chart into any writer.
///
/// Constructed over stdout it takes over the terminal (alternate screen,
/// hidden cursor) and restores it on drop. Constructed over an arbitrary
/// writer it only emits escape sequences, which is what the tests use.
#[derive(Debug)]
pub struct BarRenderer<W: Write> {
    out: W,
    width: u16,
    height: u16,
    owns_terminal: bool,
    comparisons: u64,
}

impl BarRenderer<io::Stdout> {
    /// Take over the real terminal at its current size.
    pub fn stdout() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let mut out = io::stdout();
        execute!(out, EnterAlternateScreen, cursor::Hide)?;
        Ok(Self {
            out,
            width,
            height,
            owns_terminal: true,
            comparisons: 0,
        })
    }
}

impl<W: Write> BarRenderer<W> {
    /// Render into `out` with a fixed viewport, leaving the terminal alone.
    pub fn with_viewport(out: W, width: u16, height: u16) -> Self {
        Self {
            out,
            width,
            height,
            owns_terminal: false,
            comparisons: 0,
        }
    }

    /// Comparisons seen since the last counter reset.
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Feed one event. Only `Step` events redraw.
    pub fn handle(&mut self, event: &SortEvent) -> io::Result<()> {
        match event {
            SortEvent::CounterReset => {
                self.comparisons = 0;
                Ok(())
            }
            SortEvent::Comparison => {
                self.comparisons += 1;
                Ok(())
            }
            SortEvent::Step { data, highlighted } => self.draw(data, highlighted),
        }
    }

    fn draw(&mut self, data: &[u32], highlighted: &[usize]) -> io::Result<()> {
        let plot_rows = self.height.saturating_sub(1) as usize;
        if plot_rows == 0 || self.width == 0 || data.is_empty() {
            return Ok(());
        }

        let max = data.iter().copied().max().unwrap_or(1).max(1);
        let mask = highlight_mask(highlighted, data.len());

        queue!(self.out, Clear(ClearType::All))?;
        for (i, &value) in data.iter().enumerate() {
            let col = column_index(i, data.len(), self.width as usize) as u16;
            let bar = bar_height(value, max, plot_rows);
            let color = if mask[i] { Color::Yellow } else { Color::White };
            queue!(self.out, SetForegroundColor(color))?;
            for row in 0..bar {
                let y = (plot_rows - 1 - row) as u16;
                queue!(self.out, cursor::MoveTo(col, y), Print('█'))?;
            }
        }

        queue!(
            self.out,
            ResetColor,
            cursor::MoveTo(0, plot_rows as u16),
            Print(format!("comparisons: {}  n: {}", self.comparisons, data.len()))
        )?;
        self.out.flush()
    }
}

impl<W: Write> Drop for BarRenderer<W> {
    fn drop(&mut self) {
        if self.owns_terminal {
            let _ = execute!(self.out, cursor::Show, LeaveAlternateScreen);
        }
    }
}

/// Map data index `i` of `len` onto a viewport of `width` columns.
fn column_index(i: usize, len: usize, width: usize) -> usize {
    if len <= width {
        i
    } else {
        i * width / len
    }
}

/// Bar height in rows. Every value, including the smallest, gets at least
/// one row so no bar disappears.
fn bar_height(value: u32, max: u32, plot_rows: usize) -> usize {
    ((value as usize * plot_rows) / max as usize).max(1)
}

/// Membership mask over the highlight set. Indices at or past `len` are
/// dropped; the engine's quicksort cursor can transiently point one past
/// the end.
fn highlight_mask(highlighted: &[usize], len: usize) -> Vec<bool> {
    let mut mask = vec![false; len];
    for &i in highlighted {
        if i < len {
            mask[i] = true;
        }
    }
    mask
}
