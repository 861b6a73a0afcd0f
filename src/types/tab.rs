use serde::{Deserialize, Serialize};

/// One open browser tab: the state the shell tracks for it.
///
/// The slot's position in the strip is its index in the owning vector and
/// shifts when other tabs close; the `id` is the stable handle that page
/// notifications are matched against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TabSlot {
    pub id: String,
    pub url: String,
    pub title: String,
}
