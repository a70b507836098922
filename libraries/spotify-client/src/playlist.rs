//! Playlist operations.

use crate::client::SpotifyClient;
use crate::error::Result;
use crate::options::{join_types, AdditionalType, RequestOption, RequestParams};
use crate::types::{
    CreatePlaylistRequest, FeaturedPlaylists, FollowPlaylistRequest, FullPlaylist, Id, Image,
    PlaylistDetailsRequest, PlaylistItemPage, PlaylistReorderOptions, PlaylistTrackPage,
    RemoveTracksRequest, SimplePlaylistPage, SnapshotResponse, TrackToRemove, Uri, UrisRequest,
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use std::path::Path;
use tracing::{debug, info};

/// Playlist client, borrowed from a [`SpotifyClient`].
///
/// Every method returns either the decoded result or an error, never both.
/// Mutations of a playlist's tracks return the new snapshot id; pass it to the
/// next mutation to guard against concurrent edits.
pub struct PlaylistClient<'a> {
    client: &'a SpotifyClient,
}

impl<'a> PlaylistClient<'a> {
    pub(crate) fn new(client: &'a SpotifyClient) -> Self {
        Self { client }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Get the playlists featured in Browse, with their localized message.
    ///
    /// The message is returned as the server sent it. Supports `country`,
    /// `locale`, `timestamp`, `limit` and `offset`.
    pub async fn featured_playlists(
        &self,
        options: &[RequestOption],
    ) -> Result<(String, SimplePlaylistPage)> {
        let url = self.client.endpoint(&["browse", "featured-playlists"]);
        let params = RequestParams::new().apply(options);
        debug!(url = %url, "Fetching featured playlists");

        let featured: FeaturedPlaylists = self
            .client
            .execute(self.client.request(Method::GET, url).query(&params.to_query()))
            .await?;

        debug!(
            playlists = featured.playlists.playlists.len(),
            total = featured.playlists.total,
            "Fetched featured playlists"
        );

        Ok((featured.message, featured.playlists))
    }

    /// Get the public playlists of a user.
    pub async fn playlists_for_user(
        &self,
        user_id: &str,
        options: &[RequestOption],
    ) -> Result<SimplePlaylistPage> {
        let url = self.client.endpoint(&["users", user_id, "playlists"]);
        self.playlist_page(url, options).await
    }

    /// Get the playlists owned or followed by the token's user.
    pub async fn current_user_playlists(
        &self,
        options: &[RequestOption],
    ) -> Result<SimplePlaylistPage> {
        let url = self.client.endpoint(&["me", "playlists"]);
        self.playlist_page(url, options).await
    }

    async fn playlist_page(
        &self,
        url: url::Url,
        options: &[RequestOption],
    ) -> Result<SimplePlaylistPage> {
        let params = RequestParams::new().apply(options);
        debug!(url = %url, "Fetching playlists");

        let page: SimplePlaylistPage = self
            .client
            .execute(self.client.request(Method::GET, url).query(&params.to_query()))
            .await?;

        debug!(playlists = page.playlists.len(), total = page.total, "Fetched playlists");
        Ok(page)
    }

    /// Get a playlist.
    ///
    /// With a `fields` option only the projected fields are filled in; the
    /// rest, including `tracks.total`, are zero.
    pub async fn get_playlist(
        &self,
        playlist_id: &Id,
        options: &[RequestOption],
    ) -> Result<FullPlaylist> {
        let url = self.client.endpoint(&["playlists", playlist_id.as_str()]);
        let params = RequestParams::new().apply(options);
        debug!(url = %url, playlist_id = %playlist_id, "Fetching playlist");

        self.client
            .execute(self.client.request(Method::GET, url).query(&params.to_query()))
            .await
    }

    /// Get the tracks of a playlist. Episodes aren't requested.
    pub async fn get_playlist_tracks(
        &self,
        playlist_id: &Id,
        options: &[RequestOption],
    ) -> Result<PlaylistTrackPage> {
        let url = self.client.endpoint(&["playlists", playlist_id.as_str(), "tracks"]);
        let params = RequestParams::new().apply(options);
        debug!(url = %url, playlist_id = %playlist_id, "Fetching playlist tracks");

        let page: PlaylistTrackPage = self
            .client
            .execute(self.client.request(Method::GET, url).query(&params.to_query()))
            .await?;

        debug!(tracks = page.tracks.len(), total = page.total, "Fetched playlist tracks");
        Ok(page)
    }

    /// Get the items of a playlist: tracks and episodes.
    ///
    /// `additional_types` defaults to `episode,track`; an explicit
    /// `additional_types` option replaces it.
    pub async fn get_playlist_items(
        &self,
        playlist_id: &Id,
        options: &[RequestOption],
    ) -> Result<PlaylistItemPage> {
        let url = self.client.endpoint(&["playlists", playlist_id.as_str(), "tracks"]);

        let mut params = RequestParams::new();
        params.set(
            "additional_types",
            join_types(&[AdditionalType::Episode, AdditionalType::Track]),
        );
        let params = params.apply(options);
        debug!(url = %url, playlist_id = %playlist_id, "Fetching playlist items");

        let page: PlaylistItemPage = self
            .client
            .execute(self.client.request(Method::GET, url).query(&params.to_query()))
            .await?;

        debug!(items = page.items.len(), total = page.total, "Fetched playlist items");
        Ok(page)
    }

    /// Get the cover images of a playlist.
    pub async fn get_playlist_images(&self, playlist_id: &Id) -> Result<Vec<Image>> {
        let url = self.client.endpoint(&["playlists", playlist_id.as_str(), "images"]);
        debug!(url = %url, playlist_id = %playlist_id, "Fetching playlist images");

        self.client
            .execute(self.client.request(Method::GET, url))
            .await
    }

    // =========================================================================
    // Following
    // =========================================================================

    /// Follow a playlist as the token's user.
    pub async fn follow_playlist(&self, playlist_id: &Id, public: bool) -> Result<()> {
        let url = self.client.endpoint(&["playlists", playlist_id.as_str(), "followers"]);
        debug!(url = %url, playlist_id = %playlist_id, public, "Following playlist");

        self.client
            .execute_raw(
                self.client
                    .request(Method::PUT, url)
                    .json(&FollowPlaylistRequest { public }),
            )
            .await?;

        info!(playlist_id = %playlist_id, "Playlist followed");
        Ok(())
    }

    /// Unfollow a playlist as the token's user.
    pub async fn unfollow_playlist(&self, playlist_id: &Id) -> Result<()> {
        let url = self.client.endpoint(&["playlists", playlist_id.as_str(), "followers"]);
        debug!(url = %url, playlist_id = %playlist_id, "Unfollowing playlist");

        self.client
            .execute_raw(self.client.request(Method::DELETE, url))
            .await?;

        info!(playlist_id = %playlist_id, "Playlist unfollowed");
        Ok(())
    }

    /// Check which of the given users follow a playlist.
    ///
    /// Returns one flag per user, in the order given.
    pub async fn user_follows_playlist(
        &self,
        playlist_id: &Id,
        user_ids: &[&str],
    ) -> Result<Vec<bool>> {
        let url = self
            .client
            .endpoint(&["playlists", playlist_id.as_str(), "followers", "contains"]);
        debug!(
            url = %url,
            playlist_id = %playlist_id,
            users = user_ids.len(),
            "Checking playlist followers"
        );

        self.client
            .execute(
                self.client
                    .request(Method::GET, url)
                    .query(&[("ids", user_ids.join(","))]),
            )
            .await
    }

    // =========================================================================
    // Creation and details
    // =========================================================================

    /// Create a playlist for a user. The new playlist is empty.
    pub async fn create_playlist_for_user(
        &self,
        user_id: &str,
        name: &str,
        description: &str,
        public: bool,
        collaborative: bool,
    ) -> Result<FullPlaylist> {
        let url = self.client.endpoint(&["users", user_id, "playlists"]);
        debug!(url = %url, user_id = %user_id, name = %name, "Creating playlist");

        let request = CreatePlaylistRequest {
            name,
            description,
            public,
            collaborative,
        };

        let playlist: FullPlaylist = self
            .client
            .execute(self.client.request(Method::POST, url).json(&request))
            .await?;

        info!(
            playlist_id = %playlist.id,
            snapshot_id = %playlist.snapshot_id,
            "Playlist created"
        );

        Ok(playlist)
    }

    pub async fn change_playlist_name(&self, playlist_id: &Id, name: &str) -> Result<()> {
        self.modify_playlist(
            playlist_id,
            PlaylistDetailsRequest {
                name: Some(name),
                ..Default::default()
            },
        )
        .await
    }

    /// Make a playlist public or private.
    pub async fn change_playlist_access(&self, playlist_id: &Id, public: bool) -> Result<()> {
        self.modify_playlist(
            playlist_id,
            PlaylistDetailsRequest {
                public: Some(public),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn change_playlist_description(
        &self,
        playlist_id: &Id,
        description: &str,
    ) -> Result<()> {
        self.modify_playlist(
            playlist_id,
            PlaylistDetailsRequest {
                description: Some(description),
                ..Default::default()
            },
        )
        .await
    }

    pub async fn change_playlist_name_and_access(
        &self,
        playlist_id: &Id,
        name: &str,
        public: bool,
    ) -> Result<()> {
        self.modify_playlist(
            playlist_id,
            PlaylistDetailsRequest {
                name: Some(name),
                public: Some(public),
                description: None,
            },
        )
        .await
    }

    pub async fn change_playlist_name_access_and_description(
        &self,
        playlist_id: &Id,
        name: &str,
        description: &str,
        public: bool,
    ) -> Result<()> {
        self.modify_playlist(
            playlist_id,
            PlaylistDetailsRequest {
                name: Some(name),
                public: Some(public),
                description: Some(description),
            },
        )
        .await
    }

    async fn modify_playlist(
        &self,
        playlist_id: &Id,
        details: PlaylistDetailsRequest<'_>,
    ) -> Result<()> {
        let url = self.client.endpoint(&["playlists", playlist_id.as_str()]);
        debug!(url = %url, playlist_id = %playlist_id, ?details, "Changing playlist details");

        self.client
            .execute_raw(self.client.request(Method::PUT, url).json(&details))
            .await?;

        info!(playlist_id = %playlist_id, "Playlist details changed");
        Ok(())
    }

    // =========================================================================
    // Tracks
    // =========================================================================

    /// Append tracks to a playlist. Returns the new snapshot id.
    pub async fn add_tracks_to_playlist(
        &self,
        playlist_id: &Id,
        track_ids: &[Id],
    ) -> Result<String> {
        let request = UrisRequest {
            uris: track_ids.iter().map(Id::track_uri).collect(),
        };
        self.mutate_tracks(playlist_id, Method::POST, &request, "Tracks added")
            .await
    }

    /// Remove every occurrence of the given tracks. Returns the new snapshot id.
    pub async fn remove_tracks_from_playlist(
        &self,
        playlist_id: &Id,
        track_ids: &[Id],
    ) -> Result<String> {
        let tracks: Vec<TrackToRemove> = track_ids
            .iter()
            .map(|id| TrackToRemove {
                uri: id.track_uri(),
                positions: Vec::new(),
            })
            .collect();

        let request = RemoveTracksRequest {
            tracks: &tracks,
            snapshot_id: None,
        };
        self.mutate_tracks(playlist_id, Method::DELETE, &request, "Tracks removed")
            .await
    }

    /// Remove tracks, optionally only at specific positions.
    ///
    /// The removal is applied against `snapshot_id` when one is given; an empty
    /// string counts as none. Returns the new snapshot id.
    pub async fn remove_tracks_from_playlist_opt(
        &self,
        playlist_id: &Id,
        tracks: &[TrackToRemove],
        snapshot_id: Option<&str>,
    ) -> Result<String> {
        let request = RemoveTracksRequest {
            tracks,
            snapshot_id: snapshot_id.filter(|s| !s.is_empty()),
        };
        self.mutate_tracks(playlist_id, Method::DELETE, &request, "Tracks removed")
            .await
    }

    /// Replace all items of a playlist with the given URIs.
    ///
    /// Returns the new snapshot id.
    pub async fn replace_playlist_items(&self, playlist_id: &Id, items: &[Uri]) -> Result<String> {
        let request = UrisRequest {
            uris: items.to_vec(),
        };
        self.mutate_tracks(playlist_id, Method::PUT, &request, "Playlist items replaced")
            .await
    }

    /// Replace all tracks of a playlist, passing the URIs in the query string.
    ///
    /// An empty list clears the playlist.
    pub async fn replace_playlist_tracks(&self, playlist_id: &Id, track_ids: &[Id]) -> Result<()> {
        let url = self.client.endpoint(&["playlists", playlist_id.as_str(), "tracks"]);
        let uris = track_ids
            .iter()
            .map(|id| id.track_uri().to_string())
            .collect::<Vec<_>>()
            .join(",");
        debug!(
            url = %url,
            playlist_id = %playlist_id,
            tracks = track_ids.len(),
            "Replacing playlist tracks"
        );

        self.client
            .execute_raw(
                self.client
                    .request(Method::PUT, url)
                    .query(&[("uris", uris)]),
            )
            .await?;

        info!(playlist_id = %playlist_id, "Playlist tracks replaced");
        Ok(())
    }

    /// Move a range of tracks within a playlist. Returns the new snapshot id.
    pub async fn reorder_playlist_tracks(
        &self,
        playlist_id: &Id,
        options: &PlaylistReorderOptions,
    ) -> Result<String> {
        self.mutate_tracks(playlist_id, Method::PUT, options, "Playlist tracks reordered")
            .await
    }

    async fn mutate_tracks<B: serde::Serialize + ?Sized>(
        &self,
        playlist_id: &Id,
        method: Method,
        body: &B,
        done: &str,
    ) -> Result<String> {
        let url = self.client.endpoint(&["playlists", playlist_id.as_str(), "tracks"]);
        debug!(
            url = %url,
            method = %method,
            playlist_id = %playlist_id,
            "Changing playlist tracks"
        );

        let response: SnapshotResponse = self
            .client
            .execute(self.client.request(method, url).json(body))
            .await?;

        info!(
            playlist_id = %playlist_id,
            snapshot_id = %response.snapshot_id,
            "{}",
            done
        );

        Ok(response.snapshot_id)
    }

    // =========================================================================
    // Images
    // =========================================================================

    /// Replace the cover image of a playlist with a JPEG.
    ///
    /// Takes the raw JPEG bytes; they are base64-encoded for upload.
    pub async fn set_playlist_image(&self, playlist_id: &Id, jpeg: &[u8]) -> Result<()> {
        let url = self.client.endpoint(&["playlists", playlist_id.as_str(), "images"]);
        let encoded = STANDARD.encode(jpeg);
        debug!(
            url = %url,
            playlist_id = %playlist_id,
            size = jpeg.len(),
            encoded_size = encoded.len(),
            "Uploading playlist image"
        );

        self.client
            .execute_raw(
                self.client
                    .request(Method::PUT, url)
                    .header(CONTENT_TYPE, "image/jpeg")
                    .body(encoded),
            )
            .await?;

        info!(playlist_id = %playlist_id, "Playlist image set");
        Ok(())
    }

    /// Replace the cover image of a playlist with a JPEG file.
    pub async fn set_playlist_image_from_file(&self, playlist_id: &Id, path: &Path) -> Result<()> {
        let jpeg = tokio::fs::read(path).await?;
        self.set_playlist_image(playlist_id, &jpeg).await
    }
}
