//! Note store: the owned note collection, its storage backends, and the
//! stored JSON format.

mod clock;
mod codec;
mod note_store;
mod storage;

pub use clock::{Clock, ManualClock, SystemClock};
pub use codec::{DecodeError, decode_notes, encode_notes};
pub use note_store::{NoteStore, STORAGE_KEY, StoreError, StoreResult};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
