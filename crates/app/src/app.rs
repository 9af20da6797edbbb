use reqwest;
use tokio;
use tokio::sync::oneshot;
use std::sync::Arc;
use crate::config::DashboardConfig;
use crate::view_state::{LoadEvent, ViewState};

pub struct App {
    config: Arc<DashboardConfig>,
    client: Arc<reqwest::Client>,
    state: ViewState,
    load_receiver: Option<oneshot::Receiver<LoadEvent>>,
    is_load_started: bool,
}

impl App {
    pub fn new(config: DashboardConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    pub fn with_client(config: DashboardConfig, client: reqwest::Client) -> Self {
        Self {
            config: Arc::new(config),
            client: Arc::new(client),
            state: ViewState::Loading,
            load_receiver: None,
            is_load_started: false,
        }
    }
}

impl App {
    /// Spawns the one-shot catalog load. Later calls do nothing.
    /// `on_complete` runs on the runtime once the event has been sent.
    pub fn start_loading<F>(&mut self, runtime: &tokio::runtime::Handle, on_complete: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if self.is_load_started {
            return;
        }
        self.is_load_started = true;

        let (tx, rx) = oneshot::channel();
        self.load_receiver = Some(rx);
        runtime.spawn({
            let client = self.client.clone();
            let config = self.config.clone();
            async move {
                let event = load_shows(client.as_ref(), config.as_ref()).await;
                // receiver only goes away when the window has closed
                let _ = tx.send(event);
                on_complete();
            }
        });
    }

    /// Applies the load result if it has arrived. Returns true when the state changed.
    pub fn poll_load(&mut self) -> bool {
        let receiver = match self.load_receiver.as_mut() {
            Some(receiver) => receiver,
            None => return false,
        };

        let event = match receiver.try_recv() {
            Ok(event) => event,
            Err(oneshot::error::TryRecvError::Empty) => return false,
            Err(oneshot::error::TryRecvError::Closed) => {
                tracing::error!("catalog load task ended without a result");
                LoadEvent::Failed
            },
        };
        self.load_receiver = None;

        let rules = self.config.row_rules();
        let state = std::mem::take(&mut self.state);
        self.state = state.transition(event, &rules);
        true
    }

    pub fn get_state(&self) -> &ViewState {
        &self.state
    }

    pub fn get_config(&self) -> &DashboardConfig {
        self.config.as_ref()
    }
}

pub async fn load_shows(client: &reqwest::Client, config: &DashboardConfig) -> LoadEvent {
    tracing::info!(url = config.shows_url.as_str(), "loading show catalog");
    match tvmaze::api::get_shows(client, config.shows_url.as_str(), config.batch_limit).await {
        Ok(shows) => {
            tracing::info!(total_shows = shows.len(), "loaded show catalog");
            LoadEvent::Loaded(shows)
        },
        Err(err) => {
            tracing::error!("Error on tvmaze show index: {}", err);
            LoadEvent::Failed
        },
    }
}
