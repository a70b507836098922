//! Types for Spotify Web API requests and responses.
//!
//! Every response field is `#[serde(default)]`: a `fields` projection can drop
//! any of them, and a dropped field decodes as its zero value.

use crate::error::Result;
use crate::timestamp;
use chrono::{DateTime, Utc};
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;

// =============================================================================
// Identifiers
// =============================================================================

/// A base-62 Spotify identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The `spotify:<kind>:<id>` URI for this id.
    pub fn uri(&self, kind: &str) -> Uri {
        Uri(format!("spotify:{}:{}", kind, self.0))
    }

    pub fn track_uri(&self) -> Uri {
        self.uri("track")
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Id {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Id {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A Spotify URI such as `spotify:track:6rqhFgbbKwnb9MLmUQDhG6`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Uri(String);

impl Uri {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Uri {
    fn from(uri: &str) -> Self {
        Self::new(uri)
    }
}

// =============================================================================
// Common Types
// =============================================================================

// Local files come back with `null` ids and hrefs, featured playlists with a
// `null` public flag.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Followers {
    pub total: u32,
    pub href: Option<String>,
}

/// Artwork. Height and width are null when unknown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Image {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

/// Public profile of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct User {
    pub id: String,
    pub display_name: Option<String>,
    pub href: String,
    pub uri: String,
    pub external_urls: HashMap<String, String>,
    pub followers: Option<Followers>,
}

/// Paging cursors shared by every paginated response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Paging {
    pub href: String,
    pub limit: u32,
    pub offset: u32,
    pub total: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
}

// =============================================================================
// Playlist Types
// =============================================================================

/// Link to a playlist's tracks, as embedded in list views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlaylistTracks {
    pub href: String,
    pub total: u32,
}

/// Playlist summary as returned in lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SimplePlaylist {
    pub id: Id,
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    pub collaborative: bool,
    #[serde(rename = "public", deserialize_with = "null_as_default")]
    pub is_public: bool,
    pub owner: User,
    /// Version token of the track list
    pub snapshot_id: String,
    pub tracks: PlaylistTracks,
    pub images: Vec<Image>,
    pub href: String,
    pub uri: String,
    pub external_urls: HashMap<String, String>,
}

/// A playlist fetched directly: the summary fields plus followers and tracks.
///
/// Derefs to [`SimplePlaylist`], so `playlist.description` and
/// `playlist.simple.description` are one field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FullPlaylist {
    #[serde(flatten)]
    pub simple: SimplePlaylist,
    #[serde(default)]
    pub followers: Followers,
    /// The first page of tracks.
    ///
    /// Shadows `simple.tracks`: the wire `tracks` key decodes here, so
    /// `simple.tracks` stays zero-valued. Use `tracks.total` for the count.
    #[serde(default)]
    pub tracks: PlaylistTrackPage,
}

// `simple.tracks` is shadowed, so the outer `tracks` replaces it on the way out.
impl Serialize for FullPlaylist {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut value = serde_json::to_value(&self.simple).map_err(S::Error::custom)?;
        if let Some(map) = value.as_object_mut() {
            map.insert(
                "followers".into(),
                serde_json::to_value(&self.followers).map_err(S::Error::custom)?,
            );
            map.insert(
                "tracks".into(),
                serde_json::to_value(&self.tracks).map_err(S::Error::custom)?,
            );
        }
        value.serialize(serializer)
    }
}

impl Deref for FullPlaylist {
    type Target = SimplePlaylist;

    fn deref(&self) -> &Self::Target {
        &self.simple
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SimplePlaylistPage {
    #[serde(flatten)]
    pub paging: Paging,
    #[serde(default, rename = "items")]
    pub playlists: Vec<SimplePlaylist>,
}

impl Deref for SimplePlaylistPage {
    type Target = Paging;

    fn deref(&self) -> &Self::Target {
        &self.paging
    }
}

/// Response from the featured playlists endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub(crate) struct FeaturedPlaylists {
    pub message: String,
    pub playlists: SimplePlaylistPage,
}

// =============================================================================
// Track and Episode Types
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SimpleArtist {
    #[serde(deserialize_with = "null_as_default")]
    pub id: Id,
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub href: String,
    pub uri: String,
    pub external_urls: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SimpleAlbum {
    #[serde(deserialize_with = "null_as_default")]
    pub id: Id,
    pub name: String,
    pub album_type: String,
    pub artists: Vec<SimpleArtist>,
    pub images: Vec<Image>,
    pub release_date: String,
    pub release_date_precision: String,
    #[serde(deserialize_with = "null_as_default")]
    pub href: String,
    pub uri: String,
    pub external_urls: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FullTrack {
    #[serde(deserialize_with = "null_as_default")]
    pub id: Id,
    pub name: String,
    pub album: SimpleAlbum,
    pub artists: Vec<SimpleArtist>,
    pub disc_number: u32,
    pub track_number: u32,
    pub duration_ms: u64,
    pub explicit: bool,
    pub popularity: u32,
    pub preview_url: Option<String>,
    pub is_local: bool,
    pub external_ids: HashMap<String, String>,
    pub external_urls: HashMap<String, String>,
    #[serde(deserialize_with = "null_as_default")]
    pub href: String,
    pub uri: String,
}

/// The show an episode belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SimpleShow {
    pub id: Id,
    pub name: String,
    pub publisher: String,
    pub description: String,
    pub media_type: String,
    pub total_episodes: u32,
    pub images: Vec<Image>,
    pub href: String,
    pub uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FullEpisode {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub duration_ms: u64,
    pub explicit: bool,
    pub language: String,
    pub release_date: String,
    pub release_date_precision: String,
    pub audio_preview_url: Option<String>,
    pub images: Vec<Image>,
    pub show: SimpleShow,
    pub external_urls: HashMap<String, String>,
    pub href: String,
    pub uri: String,
}

// =============================================================================
// Playlist Entries
// =============================================================================

/// A track entry from the tracks-only listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlaylistTrack {
    /// When the track was added, in [`timestamp::TIMESTAMP_FORMAT`]
    #[serde(deserialize_with = "null_as_default")]
    pub added_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub added_by: User,
    pub is_local: bool,
    /// Zero-valued when the track is no longer available
    #[serde(deserialize_with = "null_as_default")]
    pub track: FullTrack,
}

impl PlaylistTrack {
    pub fn added_at_time(&self) -> Result<DateTime<Utc>> {
        timestamp::parse(&self.added_at)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlaylistTrackPage {
    #[serde(flatten)]
    pub paging: Paging,
    #[serde(default, rename = "items")]
    pub tracks: Vec<PlaylistTrack>,
}

impl Deref for PlaylistTrackPage {
    type Target = Paging;

    fn deref(&self) -> &Self::Target {
        &self.paging
    }
}

/// Which kind of content a playlist item holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemType {
    Track,
    Episode,
}

/// The content of a playlist item, discriminated by the wire `type` tag.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PlaylistItemTrack {
    Track(FullTrack),
    Episode(FullEpisode),
}

impl PlaylistItemTrack {
    pub fn kind(&self) -> ItemType {
        match self {
            PlaylistItemTrack::Track(_) => ItemType::Track,
            PlaylistItemTrack::Episode(_) => ItemType::Episode,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            PlaylistItemTrack::Track(track) => &track.name,
            PlaylistItemTrack::Episode(episode) => &episode.name,
        }
    }

    pub fn uri(&self) -> &str {
        match self {
            PlaylistItemTrack::Track(track) => &track.uri,
            PlaylistItemTrack::Episode(episode) => &episode.uri,
        }
    }
}

/// An entry from the items listing: a track or an episode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlaylistItem {
    #[serde(deserialize_with = "null_as_default")]
    pub added_at: String,
    #[serde(deserialize_with = "null_as_default")]
    pub added_by: User,
    pub is_local: bool,
    /// `None` when the content is no longer available
    pub track: Option<PlaylistItemTrack>,
}

impl PlaylistItem {
    pub fn kind(&self) -> Option<ItemType> {
        self.track.as_ref().map(PlaylistItemTrack::kind)
    }

    pub fn as_track(&self) -> Option<&FullTrack> {
        match &self.track {
            Some(PlaylistItemTrack::Track(track)) => Some(track),
            _ => None,
        }
    }

    pub fn as_episode(&self) -> Option<&FullEpisode> {
        match &self.track {
            Some(PlaylistItemTrack::Episode(episode)) => Some(episode),
            _ => None,
        }
    }

    pub fn added_at_time(&self) -> Result<DateTime<Utc>> {
        timestamp::parse(&self.added_at)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct PlaylistItemPage {
    #[serde(flatten)]
    pub paging: Paging,
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
}

impl Deref for PlaylistItemPage {
    type Target = Paging;

    fn deref(&self) -> &Self::Target {
        &self.paging
    }
}

// =============================================================================
// Mutation Types
// =============================================================================

/// A track to remove, optionally only at the given positions.
///
/// Positions disambiguate duplicates: without them every occurrence of the
/// track is removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackToRemove {
    pub uri: Uri,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub positions: Vec<usize>,
}

impl TrackToRemove {
    pub fn new(track_id: impl Into<Id>, positions: impl Into<Vec<usize>>) -> Self {
        Self {
            uri: track_id.into().track_uri(),
            positions: positions.into(),
        }
    }
}

/// Moves `range_length` items starting at `range_start` to before
/// `insert_before`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlaylistReorderOptions {
    pub range_start: u32,
    pub insert_before: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<String>,
}

/// Request body for creating a playlist.
#[derive(Debug, Serialize)]
pub(crate) struct CreatePlaylistRequest<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub public: bool,
    pub collaborative: bool,
}

/// Request body for changing playlist details. Unset fields are left out.
#[derive(Debug, Default, Serialize)]
pub(crate) struct PlaylistDetailsRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub(crate) struct FollowPlaylistRequest {
    pub public: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct UrisRequest {
    pub uris: Vec<Uri>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RemoveTracksRequest<'a> {
    pub tracks: &'a [TrackToRemove],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_id: Option<&'a str>,
}

/// Response from every mutation of a playlist's tracks.
#[derive(Debug, Deserialize)]
pub(crate) struct SnapshotResponse {
    #[serde(default)]
    pub snapshot_id: String,
}
