//! Poem session entity

use crate::domain::photo::PhotoData;

/// Session entity holding the transient workflow state.
///
/// Both fields live for the duration of the process and are only ever
/// replaced, never cleared:
///   - the selected photo is replaced when the user picks another file
///   - the generated poem is replaced on the next successful generation
#[derive(Debug, Default)]
pub struct PoemSession {
    photo: Option<PhotoData>,
    poem: Option<String>,
}

impl PoemSession {
    /// Create a new empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the selected photo, if any
    pub fn photo(&self) -> Option<&PhotoData> {
        self.photo.as_ref()
    }

    /// Get the generated poem, if any
    pub fn poem(&self) -> Option<&str> {
        self.poem.as_deref()
    }

    /// Check whether a photo has been selected
    pub fn has_photo(&self) -> bool {
        self.photo.is_some()
    }

    /// Check whether a poem has been generated
    pub fn has_poem(&self) -> bool {
        self.poem.is_some()
    }

    /// Store a selected photo, replacing any prior one
    pub fn select_photo(&mut self, photo: PhotoData) {
        self.photo = Some(photo);
    }

    /// Store a generated poem, replacing any prior one
    pub fn store_poem(&mut self, poem: String) {
        self.poem = Some(poem);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::photo::ImageMimeType;

    fn photo(bytes: &[u8]) -> PhotoData {
        PhotoData::from_bytes(bytes, ImageMimeType::Png)
    }

    #[test]
    fn new_session_is_empty() {
        let session = PoemSession::new();
        assert!(!session.has_photo());
        assert!(!session.has_poem());
        assert!(session.photo().is_none());
        assert!(session.poem().is_none());
    }

    #[test]
    fn select_photo_stores() {
        let mut session = PoemSession::new();
        session.select_photo(photo(&[1, 2, 3]));
        assert!(session.has_photo());
        assert_eq!(session.photo().unwrap().data(), &[1, 2, 3]);
    }

    #[test]
    fn select_photo_replaces_prior() {
        let mut session = PoemSession::new();
        session.select_photo(photo(&[1]));
        session.select_photo(photo(&[2]));
        session.select_photo(photo(&[3]));
        assert_eq!(session.photo().unwrap().data(), &[3]);
    }

    #[test]
    fn last_selected_photo_wins_as_data_uri() {
        let mut session = PoemSession::new();
        let first = photo(&[0xAA]);
        let last = photo(&[0xBB, 0xCC]);
        session.select_photo(first);
        session.select_photo(last.clone());
        assert_eq!(
            session.photo().map(PhotoData::to_data_uri),
            Some(last.to_data_uri())
        );
    }

    #[test]
    fn store_poem_stores() {
        let mut session = PoemSession::new();
        session.store_poem("a poem".to_string());
        assert_eq!(session.poem(), Some("a poem"));
    }

    #[test]
    fn store_poem_replaces_prior() {
        let mut session = PoemSession::new();
        session.store_poem("first".to_string());
        session.store_poem("second".to_string());
        assert_eq!(session.poem(), Some("second"));
    }

    #[test]
    fn photo_and_poem_are_independent() {
        let mut session = PoemSession::new();
        session.store_poem("kept".to_string());
        session.select_photo(photo(&[9]));
        assert_eq!(session.poem(), Some("kept"));
        assert!(session.has_photo());
    }
}
