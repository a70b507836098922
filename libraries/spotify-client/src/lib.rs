//! Spotify Web API Client
//!
//! Typed async client for the Spotify Web API playlist endpoints.
//!
//! # Features
//!
//! - **Reads**: featured playlists, user playlists, a playlist, its tracks or
//!   its mixed track/episode items, cover images
//! - **Mutations**: create, rename, change access/description, add, remove,
//!   replace and reorder tracks, upload a cover image
//! - **Following**: follow, unfollow, check which users follow a playlist
//!
//! The crate only shapes requests and decodes responses. It does no caching,
//! retrying, rate-limit back-off or pagination traversal, and never refreshes
//! tokens: hand it a token or a pre-configured `reqwest::Client`.
//!
//! # Example
//!
//! ```ignore
//! use spotify_client::options::{country, limit};
//! use spotify_client::{ClientConfig, Id, SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SpotifyClient::new(ClientConfig::load()?)?;
//!     let playlists = client.playlists();
//!
//!     let (message, page) = playlists.featured_playlists(&[country("SE"), limit(5)]).await?;
//!     println!("{message}");
//!     for playlist in &page.playlists {
//!         println!("{} ({} tracks)", playlist.name, playlist.tracks.total);
//!     }
//!
//!     let id = Id::new("3cEYpjA9oz9GiPac4AsH4n");
//!     let snapshot = playlists
//!         .add_tracks_to_playlist(&id, &[Id::new("4iV5W9uYEdYUVa79Axb7Rh")])
//!         .await?;
//!     println!("now at snapshot {snapshot}");
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
pub mod options;
mod playlist;
pub mod timestamp;
mod types;

// Re-export main types
pub use client::SpotifyClient;
pub use config::{ClientConfig, DEFAULT_API_URL};
pub use error::{ApiError, Result, SpotifyError};
pub use options::{AdditionalType, RequestOption, RequestParams};
pub use playlist::PlaylistClient;
pub use timestamp::{DATE_FORMAT, TIMESTAMP_FORMAT};
pub use types::{
    Followers, FullEpisode, FullPlaylist, FullTrack, Id, Image, ItemType, Paging, PlaylistItem,
    PlaylistItemPage, PlaylistItemTrack, PlaylistReorderOptions, PlaylistTrack, PlaylistTrackPage,
    PlaylistTracks, SimpleAlbum, SimpleArtist, SimplePlaylist, SimplePlaylistPage, SimpleShow,
    TrackToRemove, Uri, User,
};
