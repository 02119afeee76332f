use std::path::PathBuf;

/// Fixed key the item collection is stored under. The on-disk document is
/// `<data_dir>/<STORAGE_KEY>.json`.
pub const STORAGE_KEY: &str = "resell_tracker_items";

/// Version stamped into the persisted document envelope.
pub const SCHEMA_VERSION: u32 = 1;

/// Bucket label for sold items with no sale platform recorded.
pub const OTHER_PLATFORM_LABEL: &str = "Other";

pub fn default_data_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("resell-tracker")
    } else {
        PathBuf::from(".resell-tracker")
    }
}
