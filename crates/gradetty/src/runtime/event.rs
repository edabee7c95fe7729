use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossterm::event::Event;
use tokio::sync::mpsc;

use crate::app::App;
use crate::runtime::{EventResult, key_handler};

/// Poll timeout of the reader thread. Doubles as the upper bound on how long
/// the thread keeps running after shutdown is flagged.
const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Starts the blocking crossterm reader on its own thread and forwards every
/// terminal event into `event_tx`.
pub(crate) fn spawn_event_reader(event_tx: mpsc::UnboundedSender<Event>, shutdown: Arc<AtomicBool>) {
    std::thread::spawn(move || {
        while !shutdown.load(Ordering::Relaxed) {
            let ready = match crossterm::event::poll(INPUT_POLL_INTERVAL) {
                Ok(ready) => ready,
                Err(_) => return,
            };
            if !ready {
                continue;
            }
            let Ok(event) = crossterm::event::read() else {
                continue;
            };
            if event_tx.send(event).is_err() {
                return;
            }
        }
    });
}

/// Awaits the next terminal event or tick, then applies all queued input.
///
/// The biased select keeps keystrokes ahead of ticks; a tick only expires the
/// status notice, so skipping one under load loses nothing. Rapid typing can
/// queue several events between frames, and the drain below applies every one
/// of them before the caller draws again.
pub(crate) async fn process_events(
    app: &mut App,
    event_rx: &mut mpsc::UnboundedReceiver<Event>,
    tick: &mut tokio::time::Interval,
) -> io::Result<EventResult> {
    let mut next = tokio::select! {
        biased;
        event = event_rx.recv() => event,
        _ = tick.tick() => {
            app.clear_expired_notice();
            None
        }
    };

    loop {
        if matches!(dispatch(app, next).await?, EventResult::Quit) {
            return Ok(EventResult::Quit);
        }
        match event_rx.try_recv() {
            Ok(event) => next = Some(event),
            Err(_) => break,
        }
    }

    Ok(EventResult::Continue)
}

/// Routes one terminal event. Pastes go straight to the focused input; only
/// key events can end the loop.
async fn dispatch(app: &mut App, event: Option<Event>) -> io::Result<EventResult> {
    match event {
        Some(Event::Key(key)) => key_handler::handle_key_event(app, key).await,
        Some(Event::Paste(pasted)) => {
            key_handler::handle_paste(app, &pasted);

            Ok(EventResult::Continue)
        }
        _ => Ok(EventResult::Continue),
    }
}
