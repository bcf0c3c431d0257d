use carousel_core::{CarouselUpdate, ProgressSink};
use std::io::{self, IsTerminal, Write};

/// User-facing output for a build.
///
/// Summary lines go to `out`; the live progress counter is drawn on stderr
/// only when it is a terminal.
pub struct Console<W: Write> {
    out: W,
    live_progress: bool,
}

impl Console<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout(), io::stderr().is_terminal())
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, live_progress: bool) -> Self {
        Self { out, live_progress }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
    }

    fn draw_progress(&self, text: &str, done: bool) {
        let mut err = io::stderr().lock();
        let _ = write!(err, "\r{}", text);
        if done {
            let _ = writeln!(err);
        }
        let _ = err.flush();
    }
}

impl<W: Write> ProgressSink for Console<W> {
    fn update(&mut self, update: CarouselUpdate) {
        match &update {
            CarouselUpdate::Progress { current, total, .. } => {
                if self.live_progress {
                    self.draw_progress(&update.describe(), current == total);
                }
            }
            _ => self.line(&update.describe()),
        }
    }
}
