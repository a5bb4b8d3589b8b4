//! Rock-Paper-Scissors between a human and a history-driven robot.
//!
//! The crate is split into three layers:
//!
//! - [`gameplay`] — moves, the dominance rule, and round resolution
//! - [`players`] — the [`players::Player`] capability and its strategies
//! - [`gameroom`] — the match controller and its event stream
pub mod gameplay;
pub mod gameroom;
pub mod players;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Rounds won by a participant within a single match.
pub type Score = u32;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for opponent selection and fallback moves.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// MATCH PARAMETERS
// ============================================================================
/// Rounds played when the command line does not say otherwise.
pub const ROUNDS: usize = 5;
/// Points awarded to the winner of a round. Ties award nothing.
pub const POINT: Score = 1;
/// Printed when the human leaves before the match is over.
pub const FAREWELL: &str = "Thanks for playing...";
/// Cosmetic tints drawn per round by the console listener.
#[cfg(feature = "cli")]
pub const PALETTE: [colored::Color; 3] = [
    colored::Color::BrightBlue,
    colored::Color::BrightCyan,
    colored::Color::BrightGreen,
];

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr so records never interleave with prompts.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    if let Err(e) = simplelog::CombinedLogger::init(vec![term]) {
        eprintln!("logger already initialized: {}", e);
    }
}

/// Register a Ctrl+C handler that prints the farewell and exits 0.
///
/// The match loop stays on the calling thread; one runtime worker waits on
/// the signal. The handler is installed before this returns and lives as
/// long as the returned runtime.
#[cfg(feature = "cli")]
pub fn kys() -> anyhow::Result<tokio::runtime::Runtime> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()?;
    let (ready, installed) = std::sync::mpsc::channel::<()>();
    runtime.spawn(async move {
        let mut signal = std::pin::pin!(tokio::signal::ctrl_c());
        let first = std::future::poll_fn(|cx| std::task::Poll::Ready(signal.as_mut().poll(cx))).await;
        let _ = ready.send(());
        let result = match first {
            std::task::Poll::Ready(result) => result,
            std::task::Poll::Pending => signal.await,
        };
        match result {
            Ok(()) => {
                println!("\n{}", FAREWELL);
                log::warn!("interrupt received, leaving the match");
                std::process::exit(0);
            }
            Err(e) => log::warn!("ctrl+c handler unavailable: {}", e),
        }
    });
    installed.recv()?;
    Ok(runtime)
}
