use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tileworld_core::error::ProjectError;
use tileworld_core::image::Image;
use tileworld_core::project::{Project, SheetProject};
use tileworld_core::surface::Surface;
use tileworld_core::tiles::{TileKind, TileKinds};

#[derive(Debug, Error)]
pub enum HostError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: {source}", path.display())]
    Sheet {
        path: PathBuf,
        source: ProjectError,
    },
}

/// A project sheet backed by a file. Every saved image is written through.
pub struct FileProject {
    path: PathBuf,
    sheet: SheetProject,
    status: Option<String>,
}

impl FileProject {
    /// Open `path`, starting from the default sheet if it does not exist
    /// yet. The file is created on the first save.
    pub fn open(path: &Path) -> Result<Self, HostError> {
        let sheet = match fs::read_to_string(path) {
            Ok(text) => SheetProject::parse(&text).map_err(|source| HostError::Sheet {
                path: path.to_path_buf(),
                source,
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("PROJECT: {} not found, starting a new sheet", path.display());
                SheetProject::default_sheet()
            }
            Err(source) => {
                return Err(HostError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Ok(FileProject {
            path: path.to_path_buf(),
            sheet,
            status: None,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the sheet if anything changed since the last write.
    pub fn write(&mut self) -> Result<(), HostError> {
        if !self.sheet.is_dirty() {
            return Ok(());
        }
        fs::write(&self.path, self.sheet.serialize()).map_err(|source| HostError::Write {
            path: self.path.clone(),
            source,
        })?;
        self.sheet.mark_clean();
        Ok(())
    }

    /// The outcome of the last save, for the status line.
    pub fn take_status(&mut self) -> Option<String> {
        self.status.take()
    }
}

impl Project for FileProject {
    fn image(&self, kind: usize) -> Image {
        self.sheet.image(kind)
    }

    fn save_image(&mut self, kind: usize, image: &Image) {
        self.sheet.save_image(kind, image);
        let status = match self.write() {
            Ok(()) => {
                log::info!("PROJECT: wrote {}", self.path.display());
                format!("Saved to {}", self.path.display())
            }
            Err(e) => {
                log::error!("PROJECT: {}", e);
                format!("Save error: {}", e)
            }
        };
        self.status = Some(status);
    }
}

impl TileKinds for FileProject {
    fn all(&self) -> &[TileKind] {
        self.sheet.all()
    }

    fn empty(&self) -> &Image {
        self.sheet.empty()
    }

    fn set_scene(&self, surface: &mut dyn Surface) {
        self.sheet.set_scene(surface);
    }
}
