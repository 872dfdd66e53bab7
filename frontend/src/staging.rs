//! Upload staging state machine.
//!
//! Owns the list of files the user has queued for podcast creation and the
//! preview resources attached to them. The list has exactly two mutating
//! transitions ([`StagingList::stage_files`] and [`StagingList::remove`])
//! plus read-only projections consumed by the UI.
//!
//! The machine is generic over the file handle ([`UploadFile`]) and the
//! preview resource manager ([`PreviewStore`]) so the admission and
//! release-exactly-once rules can be exercised without a browser; the
//! production instances live in [`crate::services::preview`].

use rand::RngCore;
use thiserror::Error;

use crate::config::{ACCEPTED_MIME_TYPES, MAX_STAGED_FILES};

// =============================================================================
// Traits
// =============================================================================

/// Metadata the staging logic reads from a raw browser file.
pub trait UploadFile {
    /// File name as reported by the source input.
    fn file_name(&self) -> String;

    /// Declared MIME type (may be empty for unknown types).
    fn mime_type(&self) -> String;
}

/// Acquires and releases revocable preview references for staged files.
///
/// A reference acquired for an entry must be released exactly once: either
/// when the entry is removed, or when the whole list is torn down.
pub trait PreviewStore<F> {
    /// Acquire a renderable reference to the file's bytes.
    ///
    /// Returns `None` when the reference cannot be created; the entry is
    /// still staged and the UI falls back to the placeholder tile.
    fn acquire(&self, file: &F) -> Option<String>;

    /// Release a previously acquired reference. Releasing an unknown or
    /// already-released reference must be a no-op.
    fn release(&self, url: &str);
}

// =============================================================================
// Errors
// =============================================================================

/// User-facing staging failures. Both leave the list unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StageError {
    /// Every candidate in the batch failed MIME validation.
    #[error("Please upload a valid PDF or image file.")]
    AllInvalidType,

    /// The batch would push the list past its capacity.
    #[error("Maximum 20 files allowed total.")]
    CapacityExceeded,
}

// =============================================================================
// Data model
// =============================================================================

/// One file staged for submission.
#[derive(Debug, Clone)]
pub struct PendingUpload<F> {
    /// Unique id assigned at staging time; never reused within a session.
    pub id: String,
    /// The raw file handle, immutable once staged.
    pub file: F,
    /// Revocable preview reference; present iff the file is an image and
    /// acquisition succeeded.
    pub preview: Option<String>,
}

/// Ordered, capacity-bounded list of pending uploads.
///
/// Owns every preview reference it acquires. `remove` releases an entry's
/// reference before the entry leaves the list; dropping the list releases
/// whatever is still outstanding (session teardown).
pub struct StagingList<F, S: PreviewStore<F>> {
    entries: Vec<PendingUpload<F>>,
    previews: S,
}

impl<F, S: PreviewStore<F>> StagingList<F, S> {
    /// Creates an empty list backed by the given preview store.
    pub fn new(previews: S) -> Self {
        Self {
            entries: Vec::new(),
            previews,
        }
    }

    /// Removes the entry with the given id, releasing its preview reference
    /// before the entry leaves the list. Unknown ids are a no-op.
    pub fn remove(&mut self, id: &str) {
        let Some(index) = self.entries.iter().position(|entry| entry.id == id) else {
            return;
        };
        if let Some(url) = self.entries[index].preview.take() {
            self.previews.release(&url);
        }
        self.entries.remove(index);
    }

    /// Releases every outstanding preview reference and empties the list.
    pub fn clear(&mut self) {
        for entry in &mut self.entries {
            if let Some(url) = entry.preview.take() {
                self.previews.release(&url);
            }
        }
        self.entries.clear();
    }

    /// Staged entries, in insertion order.
    pub fn entries(&self) -> &[PendingUpload<F>] {
        &self.entries
    }

    /// Number of staged entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is staged.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count string shown above the staged grid, e.g. `"3 / 20"`.
    pub fn count_label(&self) -> String {
        format!("{} / {}", self.entries.len(), MAX_STAGED_FILES)
    }
}

impl<F: UploadFile, S: PreviewStore<F>> StagingList<F, S> {
    /// Admits a batch of candidate files.
    ///
    /// The whole batch is checked against capacity first, using the raw
    /// batch size: if it does not fit, nothing is staged. Candidates with
    /// an unsupported MIME type are then silently dropped; if none survive,
    /// nothing is staged and [`StageError::AllInvalidType`] is returned.
    /// Accepted candidates are appended in batch order, each with a fresh
    /// id and, for `image/*` types, a preview reference.
    ///
    /// Returns the number of files staged. An empty batch is a no-op.
    pub fn stage_files(&mut self, candidates: Vec<F>) -> Result<usize, StageError> {
        if candidates.is_empty() {
            return Ok(0);
        }

        if candidates.len() + self.entries.len() > MAX_STAGED_FILES {
            return Err(StageError::CapacityExceeded);
        }

        let accepted: Vec<F> = candidates
            .into_iter()
            .filter(|file| is_accepted_type(&file.mime_type()))
            .collect();

        if accepted.is_empty() {
            return Err(StageError::AllInvalidType);
        }

        let staged = accepted.len();
        for file in accepted {
            let preview = if file.mime_type().starts_with("image/") {
                self.previews.acquire(&file)
            } else {
                None
            };
            self.entries.push(PendingUpload {
                id: fresh_id(),
                file,
                preview,
            });
        }

        Ok(staged)
    }
}

impl<F, S: PreviewStore<F>> Drop for StagingList<F, S> {
    fn drop(&mut self) {
        // Session teardown: whatever `remove` has not released yet.
        self.clear();
    }
}

// =============================================================================
// Helpers
// =============================================================================

fn is_accepted_type(mime: &str) -> bool {
    ACCEPTED_MIME_TYPES.contains(&mime)
}

/// 128 random bits, hex encoded. Collision-free for any realistic session.
fn fresh_id() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct FakeFile {
        name: String,
        mime: String,
    }

    impl UploadFile for FakeFile {
        fn file_name(&self) -> String {
            self.name.clone()
        }

        fn mime_type(&self) -> String {
            self.mime.clone()
        }
    }

    fn file(name: &str, mime: &str) -> FakeFile {
        FakeFile {
            name: name.to_string(),
            mime: mime.to_string(),
        }
    }

    /// Preview store that records every acquire/release.
    #[derive(Clone, Default)]
    struct RecordingStore {
        acquired: Rc<RefCell<Vec<String>>>,
        released: Rc<RefCell<Vec<String>>>,
    }

    impl PreviewStore<FakeFile> for RecordingStore {
        fn acquire(&self, _file: &FakeFile) -> Option<String> {
            let url = format!("blob:fake-{}", self.acquired.borrow().len());
            self.acquired.borrow_mut().push(url.clone());
            Some(url)
        }

        fn release(&self, url: &str) {
            self.released.borrow_mut().push(url.to_string());
        }
    }

    fn new_list() -> (StagingList<FakeFile, RecordingStore>, RecordingStore) {
        let store = RecordingStore::default();
        (StagingList::new(store.clone()), store)
    }

    fn staged_names(list: &StagingList<FakeFile, RecordingStore>) -> Vec<String> {
        list.entries().iter().map(|e| e.file.file_name()).collect()
    }

    #[test]
    fn accepts_valid_and_drops_invalid_in_mixed_batch() {
        let (mut list, _) = new_list();
        let staged = list
            .stage_files(vec![file("notes.png", "image/png"), file("notes.txt", "text/plain")])
            .unwrap();
        assert_eq!(staged, 1);
        assert_eq!(staged_names(&list), vec!["notes.png"]);
    }

    #[test]
    fn preserves_batch_order_across_batches() {
        let (mut list, _) = new_list();
        list.stage_files(vec![
            file("a.pdf", "application/pdf"),
            file("b.png", "image/png"),
        ])
        .unwrap();
        list.stage_files(vec![file("c.jpg", "image/jpeg")]).unwrap();
        assert_eq!(staged_names(&list), vec!["a.pdf", "b.png", "c.jpg"]);
    }

    #[test]
    fn rejects_batch_with_no_valid_files() {
        let (mut list, store) = new_list();
        let result = list.stage_files(vec![
            file("notes.txt", "text/plain"),
            file("clip.mp4", "video/mp4"),
        ]);
        assert_eq!(result, Err(StageError::AllInvalidType));
        assert!(list.is_empty());
        assert!(store.acquired.borrow().is_empty());
    }

    #[test]
    fn mime_check_is_exact_not_prefix() {
        let (mut list, _) = new_list();
        let result = list.stage_files(vec![
            file("anim.gif", "image/gif"),
            file("photo.webp", "image/webp"),
        ]);
        assert_eq!(result, Err(StageError::AllInvalidType));
        assert!(list.is_empty());
    }

    #[test]
    fn empty_batch_is_a_noop() {
        let (mut list, _) = new_list();
        assert_eq!(list.stage_files(Vec::new()), Ok(0));
        assert!(list.is_empty());
    }

    #[test]
    fn oversized_batch_stages_nothing() {
        let (mut list, store) = new_list();
        let batch: Vec<FakeFile> = (0..21).map(|i| file(&format!("{i}.png"), "image/png")).collect();
        assert_eq!(list.stage_files(batch), Err(StageError::CapacityExceeded));
        assert!(list.is_empty());
        assert!(store.acquired.borrow().is_empty());
    }

    #[test]
    fn capacity_counts_already_staged_entries() {
        let (mut list, _) = new_list();
        let first: Vec<FakeFile> = (0..18).map(|i| file(&format!("{i}.pdf"), "application/pdf")).collect();
        assert_eq!(list.stage_files(first), Ok(18));

        let more: Vec<FakeFile> = (0..3).map(|i| file(&format!("extra{i}.png"), "image/png")).collect();
        assert_eq!(list.stage_files(more), Err(StageError::CapacityExceeded));
        assert_eq!(list.len(), 18);
    }

    #[test]
    fn capacity_is_checked_before_the_type_filter() {
        // A 21-file batch is refused for size even when every file would
        // also have failed validation.
        let (mut list, _) = new_list();
        let batch: Vec<FakeFile> = (0..21).map(|i| file(&format!("{i}.txt"), "text/plain")).collect();
        assert_eq!(list.stage_files(batch), Err(StageError::CapacityExceeded));
        assert!(list.is_empty());
    }

    #[test]
    fn fills_to_exact_capacity() {
        let (mut list, _) = new_list();
        let batch: Vec<FakeFile> = (0..20).map(|i| file(&format!("{i}.jpg"), "image/jpeg")).collect();
        assert_eq!(list.stage_files(batch), Ok(20));
        assert_eq!(list.count_label(), "20 / 20");

        assert_eq!(
            list.stage_files(vec![file("one-more.png", "image/png")]),
            Err(StageError::CapacityExceeded)
        );
        assert_eq!(list.len(), 20);
    }

    #[test]
    fn images_get_previews_pdfs_do_not() {
        let (mut list, store) = new_list();
        list.stage_files(vec![
            file("deck.pdf", "application/pdf"),
            file("scan.png", "image/png"),
        ])
        .unwrap();

        let entries = list.entries();
        assert!(entries[0].preview.is_none());
        assert_eq!(entries[0].file.file_name(), "deck.pdf");
        assert!(entries[1].preview.is_some());
        assert_eq!(store.acquired.borrow().len(), 1);
    }

    #[test]
    fn remove_releases_the_preview_exactly_once() {
        let (mut list, store) = new_list();
        list.stage_files(vec![file("scan.png", "image/png")]).unwrap();
        let id = list.entries()[0].id.clone();
        let url = list.entries()[0].preview.clone().unwrap();

        list.remove(&id);
        assert!(list.is_empty());
        assert_eq!(*store.released.borrow(), vec![url]);

        // Second removal with the same id is a no-op.
        list.remove(&id);
        assert_eq!(store.released.borrow().len(), 1);
    }

    #[test]
    fn remove_unknown_id_is_a_noop() {
        let (mut list, store) = new_list();
        list.stage_files(vec![file("deck.pdf", "application/pdf")]).unwrap();
        list.remove("no-such-id");
        assert_eq!(list.len(), 1);
        assert!(store.released.borrow().is_empty());
    }

    #[test]
    fn remove_keeps_remaining_ids_and_order() {
        let (mut list, _) = new_list();
        list.stage_files(vec![
            file("a.pdf", "application/pdf"),
            file("b.png", "image/png"),
            file("c.jpg", "image/jpeg"),
        ])
        .unwrap();
        let ids: Vec<String> = list.entries().iter().map(|e| e.id.clone()).collect();

        list.remove(&ids[1]);
        assert_eq!(staged_names(&list), vec!["a.pdf", "c.jpg"]);
        assert_eq!(list.entries()[0].id, ids[0]);
        assert_eq!(list.entries()[1].id, ids[2]);
    }

    #[test]
    fn ids_are_unique() {
        let (mut list, _) = new_list();
        let batch: Vec<FakeFile> = (0..5).map(|i| file(&format!("{i}.png"), "image/png")).collect();
        list.stage_files(batch).unwrap();

        let mut ids: Vec<String> = list.entries().iter().map(|e| e.id.clone()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn drop_releases_outstanding_previews() {
        let (mut list, store) = new_list();
        list.stage_files(vec![
            file("a.png", "image/png"),
            file("b.jpg", "image/jpeg"),
            file("c.pdf", "application/pdf"),
        ])
        .unwrap();

        drop(list);
        assert_eq!(store.released.borrow().len(), 2);
        assert_eq!(*store.released.borrow(), *store.acquired.borrow());
    }

    #[test]
    fn clear_releases_everything_and_empties_the_list() {
        let (mut list, store) = new_list();
        list.stage_files(vec![
            file("a.png", "image/png"),
            file("b.pdf", "application/pdf"),
        ])
        .unwrap();

        list.clear();
        assert!(list.is_empty());
        assert_eq!(store.released.borrow().len(), 1);

        // Dropping afterwards has nothing left to release.
        drop(list);
        assert_eq!(store.released.borrow().len(), 1);
    }

    #[test]
    fn failed_acquisition_degrades_to_no_preview() {
        struct NullStore;
        impl PreviewStore<FakeFile> for NullStore {
            fn acquire(&self, _file: &FakeFile) -> Option<String> {
                None
            }
            fn release(&self, _url: &str) {}
        }

        let mut list = StagingList::new(NullStore);
        assert_eq!(list.stage_files(vec![file("scan.png", "image/png")]), Ok(1));
        assert!(list.entries()[0].preview.is_none());
    }

    #[test]
    fn count_label_tracks_list_length() {
        let (mut list, _) = new_list();
        assert_eq!(list.count_label(), "0 / 20");
        list.stage_files(vec![
            file("a.pdf", "application/pdf"),
            file("b.png", "image/png"),
        ])
        .unwrap();
        assert_eq!(list.count_label(), "2 / 20");
    }
}
