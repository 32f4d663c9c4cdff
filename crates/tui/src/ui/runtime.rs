//! Runtime: event loop and lifecycle for the navigation surface.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode).
//! - Mount: start the one-shot catalog fetch and the cart poller.
//! - Drive a single event loop over terminal input, the fetch result, cart
//!   count changes and Ctrl+C, applying returned `Effect`s to `App`.
//! - Teardown: stop the cart poller (no storage reads after this returns),
//!   abort a still-running fetch and restore the terminal.
//!
//! Input comes from a dedicated OS thread that polls crossterm and forwards
//! events over a channel, so blocking terminal reads never stall the runtime.

use std::{io::Stdout, thread, time::Duration};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use foodtuck_catalog::{CatalogFetch, spawn_catalog_fetch};
use foodtuck_types::{Effect, Msg};
use foodtuck_util::CartCounter;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::{
    signal,
    sync::{mpsc, watch},
};
use tracing::{debug, info, warn};

use crate::{NavContext, app::App, router::HistoryRouter, ui::main_component::MainView, ui::theme};

type Tui = Terminal<CrosstermBackend<Stdout>>;

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Background work started on mount and observed by the event loop.
struct Subscriptions {
    catalog_fetch: CatalogFetch,
    /// Cleared once the fetch resolved; a finished fetch must not be polled again.
    catalog_pending: bool,
    cart_updates: watch::Receiver<usize>,
    cart_live: bool,
}

/// Spawn a dedicated input thread that polls the terminal and forwards
/// `crossterm` events over a Tokio channel. Mouse moves are dropped; only
/// clicks matter to the surface. The thread exits once the receiver is gone.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(256);
    thread::spawn(move || {
        while !sender.is_closed() {
            match event::poll(INPUT_POLL_INTERVAL) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(error) => {
                    warn!(%error, "failed to poll terminal input");
                    break;
                }
            }
            match event::read() {
                Ok(Event::Mouse(mouse)) if mouse.kind == MouseEventKind::Moved => {}
                Ok(event) => {
                    if sender.blocking_send(event).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    warn!(%error, "failed to read terminal input");
                    break;
                }
            }
        }
        debug!("input thread stopped");
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Tui, app: &mut App, main_view: &mut MainView) -> Result<()> {
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => {
            app.update(&Msg::Resize(width, height));
            Vec::new()
        }
        Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    }
}

fn is_exit_key(event: &Event) -> bool {
    matches!(
        event,
        Event::Key(key) if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
    )
}

async fn event_loop(
    terminal: &mut Tui,
    app: &mut App,
    main_view: &mut MainView,
    input_receiver: &mut mpsc::Receiver<Event>,
    subscriptions: &mut Subscriptions,
) -> Result<()> {
    render(terminal, app, main_view)?;

    // Some terminals drop resize notifications; compare sizes after every
    // event as a fallback.
    let mut last_size: Option<(u16, u16)> = crossterm::terminal::size().ok();

    loop {
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    // Input channel closed; shut down cleanly.
                    break;
                };
                if is_exit_key(&event) {
                    break;
                }
                let effects = handle_input_event(app, main_view, event);
                app.apply_effects(effects);
            }

            msg = &mut subscriptions.catalog_fetch, if subscriptions.catalog_pending => {
                subscriptions.catalog_pending = false;
                app.update(&msg);
            }

            changed = subscriptions.cart_updates.changed(), if subscriptions.cart_live => {
                match changed {
                    Ok(()) => {
                        let count = *subscriptions.cart_updates.borrow_and_update();
                        app.update(&Msg::CartCountChanged(count));
                    }
                    Err(_) => subscriptions.cart_live = false,
                }
            }

            _ = signal::ctrl_c() => break,
        }

        if app.should_quit {
            break;
        }

        if let Ok((width, height)) = crossterm::terminal::size()
            && last_size != Some((width, height))
        {
            last_size = Some((width, height));
            app.update(&Msg::Resize(width, height));
        }

        render(terminal, app, main_view)?;
    }
    Ok(())
}

/// Entry point for the TUI runtime: mounts the surface, runs the event loop
/// and tears everything down again, restoring the terminal even when the
/// loop failed.
pub async fn run_app(context: NavContext) -> Result<()> {
    let NavContext {
        content,
        storage,
        cart_poll_interval,
    } = context;

    let mut app = App::new(theme::load(), Box::new(HistoryRouter::new()));
    let mut main_view = MainView::new();

    info!("mounting navigation surface");
    let cart_counter = CartCounter::start(storage, cart_poll_interval);
    app.update(&Msg::CartCountChanged(cart_counter.count()));
    let mut subscriptions = Subscriptions {
        catalog_fetch: spawn_catalog_fetch(content),
        catalog_pending: true,
        cart_updates: cart_counter.subscribe(),
        cart_live: true,
    };

    let mut input_receiver = spawn_input_thread();
    let mut terminal = setup_terminal()?;
    if let Ok((width, height)) = crossterm::terminal::size() {
        app.update(&Msg::Resize(width, height));
    }

    let outcome = event_loop(&mut terminal, &mut app, &mut main_view, &mut input_receiver, &mut subscriptions).await;

    cart_counter.stop().await;
    drop(subscriptions);
    drop(input_receiver);
    info!("navigation surface unmounted");

    cleanup_terminal(&mut terminal)?;
    outcome
}
