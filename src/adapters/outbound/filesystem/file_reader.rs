use crate::ports::outbound::RecipeDatasetReader;
use crate::recipe_matching::domain::RegionalDataset;
use crate::shared::error::RecipeError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for recipe dataset files
///
/// Reads only regular, non-symlinked files up to [`MAX_FILE_SIZE`].
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads a file after the safety checks
    pub fn safe_read_file(&self, path: &Path, file_description: &str) -> Result<String> {
        validate_regular_file(path, file_description)?;

        let metadata = fs::metadata(path).map_err(|e| RecipeError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;

        fs::read_to_string(path).map_err(|e| {
            RecipeError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeDatasetReader for FileSystemReader {
    fn read_dataset(&self, path: &Path) -> Result<RegionalDataset> {
        let content = self.safe_read_file(path, "Recipe dataset")?;
        RegionalDataset::from_json(&content).map_err(|e| {
            RecipeError::DatasetParseError {
                path: path.to_path_buf(),
                details: format!("{:#}", e),
            }
            .into()
        })
    }
}
