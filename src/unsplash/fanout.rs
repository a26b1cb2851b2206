//! Concurrent per-keyword search fan-out.

use futures::future::join_all;
use tracing::warn;

use super::client::UnsplashClient;
use super::types::Photo;
use crate::TARGET_PHOTO_API;

/// Per-keyword result quota when five or more keywords are available.
pub const QUOTA_STANDARD: usize = 3;

/// Per-keyword result quota when fewer than five keywords were extracted,
/// so sparse input still yields a usable gallery.
pub const QUOTA_SPARSE: usize = 5;

/// Pick the per-keyword quota for one generation cycle. Total API calls stay
/// at one per keyword either way.
pub fn per_keyword_quota(keyword_count: usize) -> usize {
    if keyword_count < 5 {
        QUOTA_SPARSE
    } else {
        QUOTA_STANDARD
    }
}

/// Issue one search per keyword, all concurrently, and wait until the whole
/// batch settles. A failed request becomes an empty batch for its keyword;
/// it never aborts the others. Output batches are in keyword order.
pub async fn search_all(client: &UnsplashClient, keywords: &[String]) -> Vec<Vec<Photo>> {
    let per_page = per_keyword_quota(keywords.len());

    let requests = keywords.iter().map(|keyword| async move {
        let result = client.search_photos(keyword, per_page).await;
        (keyword, result)
    });

    join_all(requests)
        .await
        .into_iter()
        .map(|(keyword, result)| match result {
            Ok(photos) => photos,
            Err(err) => {
                warn!(target: TARGET_PHOTO_API, "Search for '{}' failed, treating as empty: {}", keyword, err);
                Vec::new()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quota_raises_for_sparse_keywords() {
        assert_eq!(per_keyword_quota(0), QUOTA_SPARSE);
        assert_eq!(per_keyword_quota(4), QUOTA_SPARSE);
        assert_eq!(per_keyword_quota(5), QUOTA_STANDARD);
        assert_eq!(per_keyword_quota(10), QUOTA_STANDARD);
    }
}
