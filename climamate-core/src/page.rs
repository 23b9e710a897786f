//! Page-local state shared by the landing and home views.
//!
//! A [`Page`] owns the last successful snapshots, the loading flag and pending
//! notifications. All of it lives only as long as the view; unmounting cancels
//! in-flight requests and any task started from [`Page::child_token`].

use std::sync::Arc;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::{
    error::FetchError,
    model::{ForecastSnapshot, LocationQuery, WeatherSnapshot},
    provider::WeatherProvider,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    /// Fetches a fixed city on mount and never raises notifications.
    Landing,
    /// Fetches current conditions and forecast for user queries.
    Home,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A transient message for the user (a toast in a graphical front-end).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NotificationLevel::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NotificationLevel::Error, message: message.into() }
    }
}

/// How a single fetch attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Current conditions were stored.
    Loaded,
    /// Input was refused before any request.
    Rejected(FetchError),
    /// The current-conditions request failed.
    Failed(FetchError),
    /// The view went away first; the response was discarded.
    Cancelled,
}

/// Raw results of one submission, not yet stored.
#[derive(Debug)]
pub struct Fetched {
    current: Result<WeatherSnapshot, FetchError>,
    forecast: Option<Result<ForecastSnapshot, FetchError>>,
}

/// Holds the loading flag up until dropped.
struct LoadingGuard<'a>(&'a watch::Sender<bool>);

impl<'a> LoadingGuard<'a> {
    fn raise(flag: &'a watch::Sender<bool>) -> Self {
        flag.send_replace(true);
        Self(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.send_replace(false);
    }
}

#[derive(Debug)]
pub struct Page {
    kind: ViewKind,
    provider: Arc<dyn WeatherProvider>,
    weather: Option<WeatherSnapshot>,
    forecast: Option<ForecastSnapshot>,
    loading: watch::Sender<bool>,
    notifications: Vec<Notification>,
    token: CancellationToken,
}

impl Page {
    pub fn new(kind: ViewKind, provider: Arc<dyn WeatherProvider>) -> Self {
        let (loading, _) = watch::channel(false);
        Self {
            kind,
            provider,
            weather: None,
            forecast: None,
            loading,
            notifications: Vec::new(),
            token: CancellationToken::new(),
        }
    }

    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    pub fn weather(&self) -> Option<&WeatherSnapshot> {
        self.weather.as_ref()
    }

    pub fn forecast(&self) -> Option<&ForecastSnapshot> {
        self.forecast.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        *self.loading.borrow()
    }

    /// Follow the loading flag from another task, e.g. to drive a spinner.
    pub fn watch_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    /// Token for a task that must end when this view unmounts.
    pub fn child_token(&self) -> CancellationToken {
        self.token.child_token()
    }

    pub fn is_mounted(&self) -> bool {
        !self.token.is_cancelled()
    }

    /// Cancel in-flight requests and every child task.
    pub fn unmount(&self) {
        self.token.cancel();
    }

    /// Notifications raised since the last call, oldest first.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }

    /// Fetch-on-mount for the landing view. Failures are only logged.
    pub async fn mount(&mut self, city: &str) -> FetchOutcome {
        let query = match LocationQuery::parse(city) {
            Ok(q) => q,
            Err(err) => {
                error!(%err, "no default city configured for the landing view");
                return FetchOutcome::Rejected(err);
            }
        };

        let fetched = self.request(&query).await;
        self.apply(&query, fetched)
    }

    /// Handle a submitted location query.
    pub async fn submit(&mut self, input: &str) -> FetchOutcome {
        let query = match LocationQuery::parse(input) {
            Ok(q) => q,
            Err(err) => {
                self.notify(Notification::error(err.user_message()));
                return FetchOutcome::Rejected(err);
            }
        };

        let fetched = self.request(&query).await;
        self.apply(&query, fetched)
    }

    /// Issue the requests for `query` without touching stored snapshots.
    ///
    /// Only borrows the page, so a view can keep drawing while this is pending.
    /// Returns `None` when the view unmounted first. The loading flag is raised for
    /// exactly as long as this future is alive, including when it is dropped early.
    pub async fn request(&self, query: &LocationQuery) -> Option<Fetched> {
        if self.token.is_cancelled() {
            return None;
        }

        let _loading = LoadingGuard::raise(&self.loading);
        let provider = &self.provider;
        let with_forecast = self.kind == ViewKind::Home;

        let requests = async {
            let forecast = async {
                if with_forecast { Some(provider.forecast(query).await) } else { None }
            };
            tokio::join!(provider.current(query), forecast)
        };

        tokio::select! {
            _ = self.token.cancelled() => {
                info!(location = %query, "view unmounted, dropping weather response");
                None
            }
            (current, forecast) = requests => Some(Fetched { current, forecast }),
        }
    }

    /// Store the result of [`Page::request`] as one unit.
    ///
    /// A failed current-conditions request leaves both snapshots as they were, so a
    /// forecast is never shown under another place's card. On success the forecast
    /// is replaced, or cleared when its own request failed.
    pub fn apply(&mut self, query: &LocationQuery, fetched: Option<Fetched>) -> FetchOutcome {
        let Some(Fetched { current, forecast }) = fetched else {
            return FetchOutcome::Cancelled;
        };
        if self.token.is_cancelled() {
            return FetchOutcome::Cancelled;
        }

        match current {
            Ok(snapshot) => {
                info!(location = %snapshot.location_name, temp = snapshot.temperature_c, "weather fetched");
                match forecast {
                    Some(Ok(next)) => self.forecast = Some(next),
                    Some(Err(err)) => {
                        warn!(location = %query, %err, "forecast request failed");
                        self.forecast = None;
                    }
                    None => {}
                }
                if self.kind == ViewKind::Home {
                    let message = format!("Weather fetched for {}", snapshot.location_name);
                    self.notify(Notification::success(message));
                }
                self.weather = Some(snapshot);
                FetchOutcome::Loaded
            }
            Err(err) => {
                error!(location = %query, %err, "error fetching weather");
                if self.kind == ViewKind::Home {
                    self.notify(Notification::error(err.user_message()));
                }
                FetchOutcome::Failed(err)
            }
        }
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
