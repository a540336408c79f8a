//! Application state wiring the quote pipeline together.
//!
//! AppState holds the resolved configuration and the concrete storage
//! backend. Core types are generic over fetcher/storage/view traits; the
//! aliases below pin them to the infra implementations.

use std::path::PathBuf;

use anyhow::Context;
use secrecy::SecretString;

use wisetalk_core::chat::controller::InteractionController;
use wisetalk_core::chat::session::ChatSession;
use wisetalk_core::chat::view::ChatView;
use wisetalk_core::quote::resolver::UniqueQuoteResolver;
use wisetalk_core::seen::store::SeenSetStore;
use wisetalk_infra::config::{ConfigOverrides, apply_overrides, load_config};
use wisetalk_infra::filesystem::{database_path, resolve_data_dir};
use wisetalk_infra::sqlite::kv::SqliteKvStore;
use wisetalk_infra::sqlite::pool::DatabasePool;
use wisetalk_infra::webhook::WebhookQuoteFetcher;
use wisetalk_types::config::WiseTalkConfig;

pub type ConcreteSeenStore = SeenSetStore<SqliteKvStore>;

pub type ConcreteController<V> = InteractionController<WebhookQuoteFetcher, SqliteKvStore, V>;

/// Shared application state used by every CLI command.
pub struct AppState {
    pub config: WiseTalkConfig,
    pub data_dir: PathBuf,
    pub kv: SqliteKvStore,
}

impl AppState {
    /// Initialize the application state: load config, open the database.
    pub async fn init(overrides: ConfigOverrides) -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();

        tokio::fs::create_dir_all(&data_dir)
            .await
            .with_context(|| format!("Failed to create data directory {}", data_dir.display()))?;

        let config = apply_overrides(load_config(&data_dir).await, overrides);

        let db_path = database_path(&data_dir);
        let pool = DatabasePool::open(&db_path)
            .await
            .with_context(|| format!("Failed to open database {}", db_path.display()))?;

        Ok(Self {
            config,
            data_dir,
            kv: SqliteKvStore::new(pool),
        })
    }

    /// Open the seen-quote store for the active profile.
    pub async fn seen_store(&self) -> ConcreteSeenStore {
        SeenSetStore::open(self.kv.clone(), self.config.profile.clone()).await
    }

    pub fn fetcher(&self) -> anyhow::Result<WebhookQuoteFetcher> {
        WebhookQuoteFetcher::new(
            SecretString::from(self.config.endpoint.clone()),
            self.config.request_timeout(),
        )
        .context("Invalid webhook endpoint")
    }

    /// Host of the configured endpoint, safe to print.
    pub fn endpoint_host(&self) -> String {
        self.fetcher()
            .map(|f| f.host().to_string())
            .unwrap_or_else(|_| "<invalid endpoint>".to_string())
    }

    /// Wire a controller rendering into `view`.
    pub async fn controller<V: ChatView>(&self, view: V) -> anyhow::Result<ConcreteController<V>> {
        let resolver = UniqueQuoteResolver::new(self.fetcher()?, self.config.retry_policy());
        let session = ChatSession::new(self.seen_store().await);
        Ok(InteractionController::new(
            resolver,
            session,
            view,
            self.config.pacing(),
        ))
    }
}
