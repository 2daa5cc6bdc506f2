//! Demo authentication backed by a key-value string store.
//!
//! There is no credential validation beyond a minimum password length. The
//! signed in user is mirrored to the store on every mutation so a later
//! process can restore it.

mod context;
mod error;
mod store;
mod user;

pub use context::{AuthContext, Latency, MIN_PASSWORD_LEN, USER_KEY, USER_NAME_KEY};
pub use error::{AuthError, StoreError};
pub use store::{FileStore, KeyValueStore, MemoryStore};
pub use user::{ProfileUpdate, User, initial_of};
