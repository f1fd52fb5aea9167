//! Dice Roller - Actor-based terminal dice roller
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - owns the die state and processes events

use std::io;
use std::time::Instant;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;

use dice_roller_tui::constants::{APP_NAME, APP_VERSION, LOG_FILE, POLL_INTERVAL};
use dice_roller_tui::messages::ui_events::{key_to_ui_event, mouse_to_ui_event};
use dice_roller_tui::ui::{draw_ui, ScreenLayout};
use dice_roller_tui::{AppActor, Animator, RenderState, UiEvent};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();
    tracing::info!(version = APP_VERSION, "Starting {}", APP_NAME);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let _terminal_guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn app actor
    let app_actor = AppActor::new(render_tx);
    let app_handle = tokio::spawn(app_actor.run(ui_rx));

    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    app_handle.await?;
    tracing::info!("Shut down");

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();
    let mut animator = Animator::new(current_state.rotation);
    let mut layout = ScreenLayout::new(Rect::default());

    loop {
        // Draw with current state at the animated angle
        let angle = animator.angle(Instant::now());
        terminal.draw(|f| layout = draw_ui(f, &current_state, angle))?;

        // Poll for events with timeout
        if event::poll(POLL_INTERVAL)? {
            let ui_event = match event::read()? {
                Event::Key(key) => key_to_ui_event(key),
                Event::Mouse(mouse) => mouse_to_ui_event(mouse, layout.button),
                _ => None,
            };
            if let Some(ui_event) = ui_event {
                let _ = ui_tx.send(ui_event);
                if ui_event == UiEvent::Quit {
                    break;
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            animator.apply(&current_state, &state, Instant::now());
            current_state = state;
        }
    }

    Ok(())
}
