pub mod album;
pub mod folder;
pub mod photo;
pub mod photographer;

pub use album::{Album, AlbumCreateRequest, AlbumSummary, AlbumUpdateRequest};
pub use folder::{Folder, FolderRequest};
pub use photo::{Photo, PhotoRequest};
pub use photographer::{LoginRequest, Photographer, PhotographerRequest, PhotographerSummary};
