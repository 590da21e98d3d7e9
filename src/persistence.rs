// File: src/persistence.rs
use crate::core::types::Model;
use crate::error::{GibberishError, Result};
use bincode::Options;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::info;

/// On-disk encodings. JSON for inspection, bincode otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    Bincode,
    Json,
}

impl ModelFormat {
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ModelFormat::Json,
            _ => ModelFormat::Bincode,
        }
    }
}

// Fixed-width integers, same layout as `bincode::serialize`. Reads are capped
// at the file size so a corrupt length prefix cannot trigger a huge allocation.
fn bincode_options() -> impl Options {
    bincode::DefaultOptions::new().with_fixint_encoding()
}

/// Writes `model` to `path` atomically: the bytes go to a temporary file in
/// the same directory, which is then renamed over the target.
pub fn save_model(model: &Model, path: &Path) -> Result<()> {
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    {
        let mut writer = BufWriter::new(&temp_file);
        match ModelFormat::for_path(path) {
            ModelFormat::Bincode => bincode_options()
                .serialize_into(&mut writer, model)
                .map_err(|e| std::io::Error::new(ErrorKind::Other, e))?,
            ModelFormat::Json => serde_json::to_writer(&mut writer, model)
                .map_err(|e| std::io::Error::new(ErrorKind::Other, e))?,
        }
        writer.flush()?;
    }

    temp_file.persist(path).map_err(|e| e.error)?;
    info!(path = %path.display(), threshold = model.threshold(), "saved model");
    Ok(())
}

/// Loads a model saved by [`save_model`]. Any failure here means the model
/// cannot be trusted and is reported as a configuration error.
pub fn load_model(path: &Path) -> Result<Model> {
    let corrupt = |reason: String| {
        GibberishError::Configuration(format!("model file {}: {reason}", path.display()))
    };

    let file = File::open(path).map_err(|e| corrupt(e.to_string()))?;
    let file_len = file.metadata().map_err(|e| corrupt(e.to_string()))?.len();
    let reader = BufReader::new(file);
    let model: Model = match ModelFormat::for_path(path) {
        ModelFormat::Bincode => bincode_options()
            .with_limit(file_len)
            .deserialize_from(reader)
            .map_err(|e| corrupt(e.to_string()))?,
        ModelFormat::Json => {
            serde_json::from_reader(reader).map_err(|e| corrupt(e.to_string()))?
        }
    };

    info!(
        path = %path.display(),
        alphabet = model.alphabet().len(),
        threshold = model.threshold(),
        "loaded model"
    );
    Ok(model)
}
