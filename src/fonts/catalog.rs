use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::foundation::error::{PhotocalError, PhotocalResult};
use crate::text::engine::TextEngine;

/// Handle to a face held by a [`FontCatalog`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FontHandle(pub(crate) usize);

struct FaceRecord {
    /// File stem the face was loaded from, e.g. `Raleway-Bold`.
    stem: String,
    /// Family name reported by the shaper.
    family: String,
    data: vello_cpu::peniko::FontData,
}

/// Faces loaded from disk, addressable by file stem or family name.
///
/// Font options name a face the way the file on disk is named
/// (`Raleway-Bold`), so the stem lookup runs first; the family name is a
/// fallback for specs like plain `Raleway`.
pub struct FontCatalog {
    faces: Vec<FaceRecord>,
}

impl Default for FontCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl FontCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self { faces: Vec::new() }
    }

    /// Load one font file, registering it with `engine` for shaping.
    pub fn load_file(&mut self, engine: &mut TextEngine, path: &Path) -> PhotocalResult<()> {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .ok_or_else(|| {
                PhotocalError::font(format!("font path '{}' has no file name", path.display()))
            })?;
        let bytes = std::fs::read(path)
            .map_err(|err| PhotocalError::font(format!("{}: {err}", path.display())))?;
        let family = engine.register(&bytes)?;
        debug!("loaded font {} ({family})", path.display());
        self.faces.push(FaceRecord {
            stem,
            family,
            data: vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0),
        });
        Ok(())
    }

    /// Load every `.ttf`/`.otf`/`.ttc` file under `dir` (recursively), in
    /// path order. Files the shaper rejects are logged and skipped. Returns
    /// the number of faces loaded.
    pub fn load_dir(&mut self, engine: &mut TextEngine, dir: &Path) -> PhotocalResult<usize> {
        let mut paths = Vec::new();
        collect_font_paths(dir, &mut paths)?;
        paths.sort();

        let mut loaded = 0;
        for path in paths {
            match self.load_file(engine, &path) {
                Ok(()) => loaded += 1,
                Err(err) => warn!("skipping font {}: {err}", path.display()),
            }
        }
        Ok(loaded)
    }

    /// Find a face by file stem first, then by family name, both
    /// case-insensitively.
    pub fn resolve(&self, name: &str) -> Option<FontHandle> {
        self.faces
            .iter()
            .position(|f| f.stem.eq_ignore_ascii_case(name))
            .or_else(|| {
                self.faces
                    .iter()
                    .position(|f| f.family.eq_ignore_ascii_case(name))
            })
            .map(FontHandle)
    }

    /// Family name of a loaded face.
    pub fn family(&self, handle: FontHandle) -> &str {
        &self.faces[handle.0].family
    }

    /// Raw font data of a loaded face, for glyph rendering.
    pub(crate) fn data(&self, handle: FontHandle) -> &vello_cpu::peniko::FontData {
        &self.faces[handle.0].data
    }

    /// Number of loaded faces.
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Whether no faces are loaded.
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

fn collect_font_paths(dir: &Path, out: &mut Vec<PathBuf>) -> PhotocalResult<()> {
    let entries = std::fs::read_dir(dir)
        .map_err(|err| PhotocalError::font(format!("{}: {err}", dir.display())))?;
    for entry in entries.filter_map(Result::ok) {
        let path = entry.path();
        if path.is_dir() {
            if collect_font_paths(&path, out).is_err() {
                warn!("skipping unreadable font directory {}", path.display());
            }
        } else if path.is_file() && has_font_extension(&path) {
            out.push(path);
        }
    }
    Ok(())
}

fn has_font_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| {
            e.eq_ignore_ascii_case("ttf") || e.eq_ignore_ascii_case("otf")
                || e.eq_ignore_ascii_case("ttc")
        })
}

#[cfg(test)]
#[path = "../../tests/unit/fonts/catalog.rs"]
mod tests;
