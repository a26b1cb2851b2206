//! Session state machine for the input-to-results flow.
//!
//! All UI-visible state lives in one [`SessionState`] value and is mutated
//! only through the transition functions below, so the whole flow is
//! unit-testable without a UI harness. Stage layout: `Input` is initial,
//! `Results` is reached by a successful generation, and an error is an
//! overlay on `Input` that clears as soon as the article text is edited.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::{error, info};

use crate::aggregate::merge_photo_batches;
use crate::keywords::{extract_keywords, Language};
use crate::unsplash::{search_all, Photo, UnsplashClient};
use crate::TARGET_PHOTO_API;

/// Message shown when keyword extraction or every keyword search came back
/// empty.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Stage {
    #[default]
    Input,
    Results,
}

#[derive(Clone, Debug, Default)]
pub struct SessionState {
    stage: Stage,
    article: String,
    language: Language,
    photos: Vec<Photo>,
    active_index: usize,
    loading: bool,
    error: bool,
    message: String,
}

impl SessionState {
    pub fn new() -> Self {
        SessionState::default()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn article(&self) -> &str {
        &self.article
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active_photo(&self) -> Option<&Photo> {
        self.photos.get(self.active_index)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_error(&self) -> bool {
        self.error
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Replace the article text. Editing clears the error overlay.
    pub fn set_article(&mut self, text: impl Into<String>) {
        self.article = text.into();
        if !self.article.is_empty() {
            self.error = false;
            self.message.clear();
        }
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Select a gallery photo, clamped to the valid range.
    pub fn select_index(&mut self, index: usize) {
        if self.photos.is_empty() {
            self.active_index = 0;
        } else {
            self.active_index = index.min(self.photos.len() - 1);
        }
    }

    /// Advance to the next photo, wrapping around.
    pub fn next_photo(&mut self) {
        if !self.photos.is_empty() {
            self.active_index = (self.active_index + 1) % self.photos.len();
        }
    }

    /// Step back to the previous photo, wrapping around.
    pub fn previous_photo(&mut self) {
        if !self.photos.is_empty() {
            self.active_index = (self.active_index + self.photos.len() - 1) % self.photos.len();
        }
    }

    /// Return to the initial state: empty article, default language, no
    /// photos, index 0, flags cleared. Safe to call from any state.
    pub fn reset(&mut self) {
        *self = SessionState::default();
    }

    /// Run a full generation cycle: extract keywords, fan out one search per
    /// keyword, merge, and transition. Failures never escape; they land as
    /// the error overlay on the `Input` stage.
    pub async fn generate(&mut self, client: &UnsplashClient) {
        if self.article.trim().is_empty() {
            // No message for plain empty input; the view marks the field.
            self.error = true;
            return;
        }

        let keywords = extract_keywords(&self.article, self.language);
        if keywords.is_empty() {
            info!(target: TARGET_PHOTO_API, "No usable keywords extracted, skipping search");
            self.fail_generation();
            return;
        }

        info!(target: TARGET_PHOTO_API, "Generating suggestions for {} keywords", keywords.len());
        self.loading = true;
        let batches = search_all(client, &keywords).await;
        self.loading = false;
        self.apply_search_results(batches);
    }

    /// Pure transition applying the settled fan-out batches. An aggregate
    /// that is empty across the board is terminal for this attempt.
    pub fn apply_search_results(&mut self, batches: Vec<Vec<Photo>>) {
        let merged = merge_photo_batches(batches);
        if merged.is_empty() {
            self.fail_generation();
            return;
        }

        info!(target: TARGET_PHOTO_API, "Aggregated {} unique photos", merged.len());
        self.photos = merged;
        self.active_index = 0;
        self.error = false;
        self.message.clear();
        self.stage = Stage::Results;
    }

    /// Download the photo at `index` and save it to the working directory.
    /// Failures are logged, never surfaced; the session stays on `Results`
    /// unchanged either way. Returns the saved path on success.
    pub async fn download(&mut self, client: &UnsplashClient, index: usize) -> Option<PathBuf> {
        if self.stage != Stage::Results {
            return None;
        }
        let photo_id = self.photos.get(index)?.id.clone();

        self.loading = true;
        let saved = save_photo(client, &photo_id).await;
        self.loading = false;

        match saved {
            Ok(path) => {
                info!(target: TARGET_PHOTO_API, "Saved photo {} to {}", photo_id, path.display());
                Some(path)
            }
            Err(err) => {
                error!(target: TARGET_PHOTO_API, "Download of photo {} failed: {}", photo_id, err);
                None
            }
        }
    }

    // Failed generation returns to Input with the error overlay set and the
    // article cleared to force re-entry.
    fn fail_generation(&mut self) {
        self.photos.clear();
        self.active_index = 0;
        self.stage = Stage::Input;
        self.error = true;
        self.message = GENERIC_FAILURE_MESSAGE.to_string();
        self.article.clear();
    }
}

/// Resolve the short-lived asset URL for a photo and write the bytes to
/// `unsplash-<id>.jpg` in the working directory.
async fn save_photo(client: &UnsplashClient, photo_id: &str) -> Result<PathBuf> {
    let asset_url = client.resolve_download_url(photo_id).await?;
    let bytes = client.fetch_bytes(&asset_url).await?;

    let path = PathBuf::from(format!("unsplash-{}.jpg", photo_id));
    tokio::fs::write(&path, &bytes)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::unsplash::{PhotoUrls, PhotoUser};
    use url::Url;

    fn photo(id: &str) -> Photo {
        Photo {
            id: id.to_string(),
            urls: PhotoUrls::default(),
            user: PhotoUser::default(),
        }
    }

    fn results_state(count: usize) -> SessionState {
        let mut state = SessionState::new();
        state.set_article("tall mountain, deep river");
        let batch: Vec<Photo> = (0..count).map(|i| photo(&format!("p{}", i))).collect();
        state.apply_search_results(vec![batch]);
        assert_eq!(state.stage(), Stage::Results);
        state
    }

    fn offline_client() -> UnsplashClient {
        let config = Config {
            api_key: "test-key".to_string(),
            // Unroutable per RFC 5737; nothing in these tests may reach it.
            api_url: Url::parse("http://192.0.2.1").unwrap(),
        };
        UnsplashClient::new(&config).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let state = SessionState::new();
        assert_eq!(state.stage(), Stage::Input);
        assert_eq!(state.article(), "");
        assert_eq!(state.language(), Language::English);
        assert!(state.photos().is_empty());
        assert_eq!(state.active_index(), 0);
        assert!(!state.is_loading());
        assert!(!state.has_error());
        assert_eq!(state.message(), "");
    }

    #[tokio::test]
    async fn test_generate_with_empty_article_sets_error_without_network() {
        let client = offline_client();
        let mut state = SessionState::new();

        state.generate(&client).await;

        assert_eq!(state.stage(), Stage::Input);
        assert!(state.has_error());
        assert_eq!(state.message(), "");
        assert_eq!(state.article(), "");
    }

    #[test]
    fn test_editing_article_clears_error() {
        let mut state = SessionState::new();
        state.apply_search_results(vec![vec![]]);
        assert!(state.has_error());
        assert_eq!(state.message(), GENERIC_FAILURE_MESSAGE);

        state.set_article("fresh article text");
        assert!(!state.has_error());
        assert_eq!(state.message(), "");
    }

    #[test]
    fn test_successful_results_transition() {
        let mut state = SessionState::new();
        state.set_article("tall mountain");
        state.apply_search_results(vec![
            vec![photo("a"), photo("b")],
            vec![photo("b"), photo("c")],
        ]);

        assert_eq!(state.stage(), Stage::Results);
        assert_eq!(state.photos().len(), 3);
        assert_eq!(state.active_index(), 0);
        assert!(!state.has_error());
    }

    #[test]
    fn test_all_empty_batches_is_terminal_failure() {
        let mut state = SessionState::new();
        state.set_article("tall mountain");
        state.apply_search_results(vec![vec![]; 10]);

        assert_eq!(state.stage(), Stage::Input);
        assert!(state.has_error());
        assert_eq!(state.message(), "Something went wrong. Please try again.");
        // Article is cleared to force re-entry.
        assert_eq!(state.article(), "");
        assert!(state.photos().is_empty());
    }

    #[test]
    fn test_select_index_clamps_out_of_range() {
        let mut state = results_state(5);
        state.select_index(2);
        assert_eq!(state.active_index(), 2);
        state.select_index(99);
        assert_eq!(state.active_index(), 4);

        let mut empty = SessionState::new();
        empty.select_index(3);
        assert_eq!(empty.active_index(), 0);
    }

    #[test]
    fn test_gallery_navigation_wraps() {
        let mut state = results_state(3);
        state.next_photo();
        state.next_photo();
        assert_eq!(state.active_index(), 2);
        state.next_photo();
        assert_eq!(state.active_index(), 0);
        state.previous_photo();
        assert_eq!(state.active_index(), 2);
    }

    #[test]
    fn test_reset_is_idempotent_from_any_state() {
        let expected = SessionState::new();

        let mut from_results = results_state(4);
        from_results.select_index(2);
        from_results.set_language(Language::Swedish);
        from_results.reset();

        let mut from_error = SessionState::new();
        from_error.set_article("x");
        from_error.apply_search_results(vec![vec![]]);
        from_error.reset();

        let mut twice = SessionState::new();
        twice.reset();
        twice.reset();

        for state in [&from_results, &from_error, &twice] {
            assert_eq!(state.stage(), expected.stage());
            assert_eq!(state.article(), expected.article());
            assert_eq!(state.language(), expected.language());
            assert!(state.photos().is_empty());
            assert_eq!(state.active_index(), 0);
            assert!(!state.has_error());
            assert_eq!(state.message(), "");
        }
    }

    #[tokio::test]
    async fn test_download_outside_results_stage_is_a_no_op() {
        let client = offline_client();
        let mut state = SessionState::new();
        assert!(state.download(&client, 0).await.is_none());
        assert_eq!(state.stage(), Stage::Input);
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn test_download_with_out_of_range_index_is_a_no_op() {
        let client = offline_client();
        let mut state = results_state(2);
        assert!(state.download(&client, 7).await.is_none());
        assert_eq!(state.stage(), Stage::Results);
        assert_eq!(state.photos().len(), 2);
    }
}
