//! Tour path persistence in `window.localStorage`.

use tour::{TourPath, TourPathError};

const TOUR_PATH_KEY: &str = "waterways.tour.path";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    Unavailable,
    Corrupt(String),
    Io(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "browser storage unavailable"),
            StorageError::Corrupt(msg) => write!(f, "stored tour path corrupt: {msg}"),
            StorageError::Io(msg) => write!(f, "storage error: {msg}"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<TourPathError> for StorageError {
    fn from(err: TourPathError) -> Self {
        StorageError::Corrupt(err.to_string())
    }
}

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .ok_or(StorageError::Unavailable)?
        .local_storage()
        .map_err(|_| StorageError::Unavailable)?
        .ok_or(StorageError::Unavailable)
}

pub fn save_path(path: &TourPath) -> Result<(), StorageError> {
    local_storage()?
        .set_item(TOUR_PATH_KEY, &path.to_json())
        .map_err(|_| StorageError::Io("set_item failed".to_string()))
}

pub fn load_path() -> Result<Option<TourPath>, StorageError> {
    let Some(json) = local_storage()?
        .get_item(TOUR_PATH_KEY)
        .map_err(|_| StorageError::Io("get_item failed".to_string()))?
    else {
        return Ok(None);
    };
    Ok(Some(TourPath::from_json(&json)?))
}

pub fn clear_path() -> Result<(), StorageError> {
    local_storage()?
        .remove_item(TOUR_PATH_KEY)
        .map_err(|_| StorageError::Io("remove_item failed".to_string()))
}
