//! Shared application state for the web server.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::warn;
use tursa_common::Catalog;
use tursa_config::Config;
use tursa_ui::BasePath;

use crate::contact::{ContactEndpoint, ContactService, HttpContactEndpoint};
use crate::error::Result;
use crate::render::Renderer;

/// Asset directory used when the config does not name one.
pub const BUNDLED_ASSETS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/static");

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub base: BasePath,
    pub brand: String,
    pub catalog: Catalog,
    pub assets_dir: PathBuf,
    pub renderer: Renderer,
    pub contact: ContactService,
    /// Cover URLs for projects whose image file exists, by project id
    covers: HashMap<&'static str, String>,
}

impl AppState {
    /// State wired to the HTTP form intake named in the config.
    pub fn from_config(config: &Config) -> Result<Self> {
        let endpoint = HttpContactEndpoint::new(&config.contact)?;
        Self::new(config, Arc::new(endpoint))
    }

    pub fn new(config: &Config, endpoint: Arc<dyn ContactEndpoint>) -> Result<Self> {
        let base = BasePath::new(&config.site.base_path);
        let assets_dir = config
            .server
            .assets_dir
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(BUNDLED_ASSETS));
        let catalog = Catalog::builtin()?;
        let covers = resolve_covers(&catalog, &base, &assets_dir);

        Ok(Self {
            base,
            brand: config.site.brand.clone(),
            catalog,
            assets_dir,
            renderer: Renderer::new()?,
            contact: ContactService::new(endpoint),
            covers,
        })
    }

    pub fn cover_url(&self, project_id: &str) -> Option<&str> {
        self.covers.get(project_id).map(String::as_str)
    }
}

/// Map each project cover to its public URL, skipping covers whose file is
/// missing so those projects fall back to the text placeholder.
fn resolve_covers(catalog: &Catalog, base: &BasePath, assets_dir: &Path) -> HashMap<&'static str, String> {
    let mut covers = HashMap::new();
    for project in catalog.iter() {
        let Some(cover) = project.cover else { continue };
        if assets_dir.join(cover).is_file() {
            covers.insert(project.id, base.asset(cover));
        } else {
            warn!("Cover {} for project {} not found in {}", cover, project.id, assets_dir.display());
        }
    }
    covers
}

pub type SharedState = Arc<AppState>;
