use serde::{Deserialize, Serialize};

/// The subset of a `/posts/{id}.json` response the dataset needs.
///
/// Every field is optional so a missing key can be reported with its name instead of a
/// generic parse failure.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct DanbooruPost {
    pub id: Option<u64>,
    pub created_at: Option<String>,
    pub rating: Option<String>,
    pub tag_string: Option<String>,
    pub image_width: Option<u64>,
    pub image_height: Option<u64>,
    pub file_url: Option<String>,
}
