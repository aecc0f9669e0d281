//! Dependency injection container for the client.

use super::config::ClientConfig;
use crate::{
    Result,
    adapters::HttpGameService,
    controller::BoardController,
    ports::{BoardView, GameService},
};

/// Controller type the container hands out
pub type Controller<V> = BoardController<Box<dyn GameService>, V>;

/// Application with dependency injection.
///
/// Owns the configuration and, unless one was injected, builds the HTTP
/// service from it.
pub struct App {
    config: ClientConfig,
    service: Option<Box<dyn GameService>>,
}

impl App {
    /// Create an app that will talk to the service over HTTP.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            service: None,
        }
    }

    /// Create a builder for constructing an app with custom dependencies.
    pub fn for_testing() -> AppBuilder {
        AppBuilder::new()
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Wire the service and `view` into a controller.
    ///
    /// # Errors
    ///
    /// Fails when no service was injected and the configuration cannot
    /// produce an HTTP client.
    pub fn into_controller<V: BoardView>(self, view: V) -> Result<Controller<V>> {
        let service: Box<dyn GameService> = match self.service {
            Some(service) => service,
            None => Box::new(HttpGameService::new(&self.config)?),
        };
        Ok(BoardController::new(service, view).with_load_policy(self.config.load_policy))
    }
}

/// Builder for [`App`]
#[derive(Default)]
pub struct AppBuilder {
    config: ClientConfig,
    service: Option<Box<dyn GameService>>,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Use `service` instead of an HTTP client.
    pub fn with_service<S: GameService + 'static>(mut self, service: S) -> Self {
        self.service = Some(Box::new(service));
        self
    }

    pub fn build(self) -> App {
        App {
            config: self.config,
            service: self.service,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{adapters::RecordingView, app::LoadPolicy};

    #[test]
    fn test_builder_defaults() {
        let app = App::for_testing().build();
        assert_eq!(app.config(), &ClientConfig::default());
    }

    #[test]
    fn test_load_policy_reaches_controller() {
        let app = App::new(ClientConfig::default().with_load_policy(LoadPolicy::Keep));
        let controller = app.into_controller(RecordingView::new()).unwrap();
        assert_eq!(controller.load_policy(), LoadPolicy::Keep);
    }

    #[test]
    fn test_invalid_config_fails_without_injected_service() {
        let app = App::new(ClientConfig::new("not a url"));
        assert!(app.into_controller(RecordingView::new()).is_err());
    }
}
