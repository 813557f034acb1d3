//! Local persistence for places.
//!
//! The collection lives in a single named blob holding a JSON array:
//!
//! ```json
//! [
//!   {
//!     "id": "k3v9x0q2mz",
//!     "name": "Barcelona",
//!     "country": "Spain",
//!     "visit": "Summer 2023",
//!     "landmarks": "Sagrada Família\nPark Güell",
//!     "notes": "",
//!     "createdAt": "2023-08-14T18:02:11.000Z"
//!   }
//! ]
//! ```
//!
//! ## Components
//!
//! - [`BlobStore`]: named blob storage, with [`FileBlobStore`] and [`MemoryBlobStore`]
//! - [`PlaceStore`]: loads and saves the place collection in one blob

mod blob;
mod place_store;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use place_store::{DEFAULT_KEY, PlaceStore};
