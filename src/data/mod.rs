//! RON data loading
//!
//! Loads the crafting recipe table from an external RON file, with fallback
//! to the built-in defaults when the file is missing or malformed.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::items::RecipeBook;

/// Default location of the recipe override file
pub const RECIPES_PATH: &str = "assets/data/recipes.ron";

/// Why a data file could not be used
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Load the recipe table, falling back to built-in defaults on any error
pub fn load_recipes() -> RecipeBook {
    match load_recipes_from(Path::new(RECIPES_PATH)) {
        Ok(book) => book,
        Err(err) => {
            log::warn!("Using built-in recipes: {err}");
            RecipeBook::builtin()
        }
    }
}

/// Load a recipe table from a specific RON file
pub fn load_recipes_from(path: &Path) -> Result<RecipeBook, DataError> {
    let text = std::fs::read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&text).map_err(|source| DataError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::CraftItem;

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_recipes_from(Path::new("no/such/file.ron")).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }

    #[test]
    fn test_parse_ron_recipe_table() {
        let text = r#"(
            recipes: [
                (item: Shovel, wood: 4, stone: 1),
                (item: HouseFrame, wood: 10, stone: 5),
            ],
        )"#;
        let book: RecipeBook = ron::from_str(text).unwrap();
        let shovel = book.recipe(CraftItem::Shovel).unwrap();
        assert_eq!((shovel.wood, shovel.stone), (4, 1));
    }
}
