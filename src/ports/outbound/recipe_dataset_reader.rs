use crate::recipe_matching::domain::RegionalDataset;
use crate::shared::Result;
use std::path::Path;

/// RecipeDatasetReader port for loading a regional recipe dataset
///
/// This port abstracts where an override dataset comes from
/// (e.g., a JSON file on disk).
pub trait RecipeDatasetReader {
    /// Reads and parses a dataset
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist, is not a regular file, or is a symlink
    /// - The file is larger than the allowed maximum
    /// - The content is not a valid dataset
    fn read_dataset(&self, path: &Path) -> Result<RegionalDataset>;
}
