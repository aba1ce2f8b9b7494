//! Application session state and event loop.
//!
//! One [`App`] per UI root. It owns the drop zone registry, the message
//! log, the current configuration, and the transient drop-zone visibility
//! state; everything mutates on the single loop in [`App::run`], so no
//! locking happens anywhere in this module.

mod actions;
mod handlers;
mod types;

pub use types::DropOperation;
use types::ZoneDrop;

use std::sync::Arc;
use std::time::{Duration, Instant};

use color_eyre::eyre::eyre;
use color_eyre::Result;
use tokio::sync::mpsc;

use crate::drop::{DropEventDispatcher, DropZoneRegistry};
use crate::host::BackendEvents;
use crate::message_log::MessageStore;
use crate::models::AppConfig;
use crate::traits::{Backend, ConfigService};

/// How long drop zones stay visible after the last drag-over tick.
const DRAG_OVER_HIDE: Duration = Duration::from_millis(200);

/// UI tick for timeout housekeeping (drag-over expiry).
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Session state for the Droppad front end.
pub struct App {
    /// The result log, newest first
    pub log: MessageStore,
    /// Current display preferences (updated via host echo)
    pub config: AppConfig,
    /// Live drop zones
    pub drop_zones: DropZoneRegistry,
    /// Set whenever state changed and the render layer should redraw
    pub needs_redraw: bool,

    backend: Arc<dyn Backend>,
    config_store: Arc<dyn ConfigService>,
    zone_tx: mpsc::UnboundedSender<ZoneDrop>,
    zone_rx: Option<mpsc::UnboundedReceiver<ZoneDrop>>,
    dragged_over: bool,
    drag_over_until: Option<Instant>,
    should_quit: bool,
}

impl App {
    /// Create a session, loading the stored configuration.
    ///
    /// A load failure is logged and falls back to defaults; the utility
    /// must come up either way.
    pub async fn new(backend: Arc<dyn Backend>, config_store: Arc<dyn ConfigService>) -> Self {
        let config = match config_store.load().await {
            Ok(Some(config)) => config,
            Ok(None) => AppConfig::default(),
            Err(err) => {
                tracing::warn!("failed to load configuration, using defaults: {err}");
                AppConfig::default()
            }
        };

        let (zone_tx, zone_rx) = mpsc::unbounded_channel();
        Self {
            log: MessageStore::new(),
            config,
            drop_zones: DropZoneRegistry::new(),
            needs_redraw: true,
            backend,
            config_store,
            zone_tx,
            zone_rx: Some(zone_rx),
            dragged_over: false,
            drag_over_until: None,
            should_quit: false,
        }
    }

    /// Whether the drop zones should currently render.
    ///
    /// Always while the log is empty; once results exist, only during an
    /// active drag hover.
    pub fn dropzones_visible(&self) -> bool {
        self.log.is_empty() || self.dragged_over
    }

    /// Whether a drag is currently hovering the window.
    pub fn dragged_over(&self) -> bool {
        self.dragged_over
    }

    /// Flag that the next loop turn should redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Ask the loop to exit after the current turn.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Drive the session until the host tears down the drag source or
    /// [`quit`](Self::quit) is called.
    pub async fn run(
        &mut self,
        mut drag_events: DropEventDispatcher,
        mut backend_events: BackendEvents,
    ) -> Result<()> {
        let mut zone_drops = self
            .zone_rx
            .take()
            .ok_or_else(|| eyre!("app event loop already started"))?;
        let mut tick = tokio::time::interval(TICK_INTERVAL);

        loop {
            tokio::select! {
                _ = tick.tick() => {
                    self.tick();
                }
                drag = drag_events.next() => match drag {
                    Some(event) => self.handle_drag_event(event),
                    None => {
                        // Host source closed (root teardown). Flush what was
                        // already queued so no accepted drop is lost, then stop.
                        while let Ok(cmd) = zone_drops.try_recv() {
                            self.handle_zone_drop(cmd);
                        }
                        while let Ok(event) = backend_events.try_recv() {
                            self.handle_backend_event(event);
                        }
                        break;
                    }
                },
                Some(event) = backend_events.recv() => {
                    self.handle_backend_event(event);
                }
                Some(cmd) = zone_drops.recv() => {
                    self.handle_zone_drop(cmd);
                }
            }

            if self.should_quit {
                break;
            }
        }

        drag_events.unsubscribe();
        Ok(())
    }
}
