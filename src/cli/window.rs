use std::io::{stdout, Stdout, Write};

use crossterm::{cursor, terminal, QueueableCommand};

use otter_pup::context::Context;

/// Log target for the progress window.
const WINDOW: &str = "window";

/// The width of the progress bar.
const BAR_LENGTH: usize = 20;

/// A single line of the terminal, updated with the progress of a solve.
pub struct ProgressWindow<W: Write> {
    out: W,
    location: (u16, u16),
    column: u16,
    filled: Option<usize>,

    /// False after the first failure to write, after which the window is left as it is.
    live: bool,
}

impl ProgressWindow<Stdout> {
    /// Draws the window, if the cursor position is available.
    pub fn new() -> Option<Self> {
        println!("c PROGRESS");

        let (_, row) = cursor::position().ok()?;

        Some(ProgressWindow::with_writer(stdout(), row.saturating_sub(1)))
    }
}

impl<W: Write> ProgressWindow<W> {
    /// A window writing to `out`, with the bar drawn on `row`.
    pub fn with_writer(out: W, row: u16) -> Self {
        ProgressWindow {
            out,
            location: (0, row),
            column: 11,
            filled: None,
            live: true,
        }
    }

    /// Updates the window, unless some earlier update failed.
    ///
    /// The first failure is logged, and no further update is attempted.
    pub fn refresh(&mut self, trail_length: usize, atom_count: usize) {
        if !self.live {
            return;
        }

        if let Err(e) = self.update(trail_length, atom_count) {
            log::warn!(target: WINDOW, "Progress display stopped: {e}");
            self.live = false;
        }
    }

    /// Updates the bar to show `trail_length` of `atom_count` atoms valued.
    ///
    /// The bar may move backwards, after a backjump or restart.
    fn update(&mut self, trail_length: usize, atom_count: usize) -> std::io::Result<()> {
        let filled = match atom_count {
            0 => BAR_LENGTH,
            _ => (trail_length * BAR_LENGTH) / atom_count,
        };

        if self.filled == Some(filled) {
            return Ok(());
        }
        self.filled = Some(filled);

        let bar = format!(
            "[{}>{}] {trail_length}/{atom_count}",
            "-".repeat(filled),
            " ".repeat(BAR_LENGTH - filled)
        );

        self.out.queue(cursor::SavePosition)?;
        self.out.queue(cursor::MoveTo(self.column, self.location.1))?;
        self.out
            .queue(terminal::Clear(terminal::ClearType::UntilNewLine))?;
        self.out.write_all(bar.as_bytes())?;
        self.out.queue(cursor::RestorePosition)?;
        self.out.flush()
    }
}

/// Installs a progress window as the progress callback of `context`.
pub fn install(context: &mut Context) {
    let Some(mut window) = ProgressWindow::new() else {
        println!("c Progress is not available without a terminal.");
        return;
    };

    context.set_callback_progress(Box::new(move |trail_length, atom_count| {
        window.refresh(trail_length, atom_count);
    }));
}
