//! # Loading Splash
//!
//! File: cli/src/common/ui/loading.rs
//! Author: Group AUZA
//!
//! Shows the assistant's title for a fixed time before the chat opens. On a
//! terminal the "Loading" line animates; otherwise a single static line is
//! printed and the wait still happens, so scripted runs see the same pacing.
//!
use std::io::{IsTerminal, Write};
use std::time::Duration;
use tokio::time::{interval, Instant};
use tracing::debug;

const FRAME: Duration = Duration::from_millis(250);
const MAX_DOTS: usize = 3;

/// Banner printed at the top of the splash.
pub fn splash_banner(name: &str) -> String {
    format!("✨ {} • Tourism & Hospitality Assistant\n   Saint Joseph College", name)
}

/// Displays the splash for `duration`.
pub async fn show_splash(name: &str, duration: Duration) {
    debug!("Showing loading splash for {:?}", duration);
    println!("{}", splash_banner(name));

    let mut stdout = std::io::stdout();
    if !stdout.is_terminal() {
        println!("   Loading...");
        tokio::time::sleep(duration).await;
        return;
    }

    let deadline = Instant::now() + duration;
    let mut ticker = interval(FRAME);
    let mut frame = 0usize;
    while Instant::now() < deadline {
        ticker.tick().await;
        let dots = ".".repeat(frame % (MAX_DOTS + 1));
        // \r keeps the animation on one line; trailing spaces erase old dots.
        let _ = write!(stdout, "\r   Loading{:<width$}", dots, width = MAX_DOTS);
        let _ = stdout.flush();
        frame += 1;
    }
    let _ = writeln!(stdout);
}
