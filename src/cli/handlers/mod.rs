mod add;
mod clear;
mod init;
mod list;
mod show;
mod tui;
mod utils;

pub use add::{AddParams, handle_add};
pub use clear::handle_clear;
pub use init::handle_init;
pub use list::handle_list;
pub use show::handle_show;
pub use tui::handle_tui;

use crate::app::FormController;
use crate::clock::SystemClock;
use crate::config::PlacebookConfig;
use crate::ids::NanoIdGenerator;
use crate::storage::{FileBlobStore, PlaceStore};
use std::path::PathBuf;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: PlacebookConfig,
    pub controller: FormController<FileBlobStore>,
}

impl CommandContext {
    pub fn new(config: PlacebookConfig, data_dir: PathBuf) -> Self {
        let store = PlaceStore::new(FileBlobStore::new(data_dir), config.store.key.clone());
        let controller = FormController::with_sources(
            store,
            Box::new(SystemClock),
            Box::new(NanoIdGenerator::new(config.store.id_length)),
        );
        Self { config, controller }
    }

    pub fn date_format(&self) -> &str {
        &self.config.tui.date_format
    }
}
