use std::env;

use crate::util::{self, LogType};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 6600;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlaybackState {
    Playing,
    Paused,
    Stopped,
    // Covers a failed or unreadable status query
    Unknown,
}

#[derive(Clone, Debug, PartialEq)]
pub struct QueueEntry {
    pub id: u32,
    pub uri: String,
}

// The daemon operations the remote commands are built from.
// Implemented over a real mpd connection below, and over a
// scripted double in the tests.
pub trait Player {
    fn playback_state(&mut self) -> PlaybackState;
    fn current_song(&mut self) -> Option<String>;
    fn pause(&mut self) -> Result<(), String>;
    fn resume(&mut self) -> Result<(), String>;
    fn stop(&mut self) -> Result<(), String>;
    fn next(&mut self) -> Result<(), String>;
    fn play(&mut self) -> Result<(), String>;
    fn add(&mut self, uri: &str) -> Result<(), String>;
    fn clear(&mut self) -> Result<(), String>;
    fn queue(&mut self) -> Result<Vec<QueueEntry>, String>;
}

// mpd reads MPD_HOST and MPD_PORT, so the remote honors them too
fn endpoint(host: Option<String>, port: Option<String>) -> Result<String, String> {
    let host = host.unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = match port {
        Some(value) => value
            .parse::<u16>()
            .map_err(|_| format!("Invalid MPD_PORT value: {value}"))?,
        None => DEFAULT_PORT,
    };
    Ok(format!("{host}:{port}"))
}

fn map_state(state: mpd::State) -> PlaybackState {
    match state {
        mpd::State::Play => PlaybackState::Playing,
        mpd::State::Pause => PlaybackState::Paused,
        mpd::State::Stop => PlaybackState::Stopped,
    }
}

// mpd's push wants a Song, with only the file path filled in
fn song_for(uri: &str) -> mpd::Song {
    mpd::Song {
        file: uri.to_string(),
        ..mpd::Song::default()
    }
}

// Owns the daemon connection. The socket is closed exactly once,
// when the player is dropped.
pub struct MpdPlayer {
    client: mpd::Client,
}

impl MpdPlayer {
    // Single best effort connection attempt, no retries
    pub fn connect() -> Result<Self, String> {
        util::log("Initializing mpd connection".to_string(), LogType::Info);
        let addr = endpoint(env::var("MPD_HOST").ok(), env::var("MPD_PORT").ok())?;
        let client = mpd::Client::connect(addr.as_str()).map_err(|err| err.to_string())?;
        util::log("Connected to MPD instance".to_string(), LogType::Info);
        Ok(MpdPlayer { client })
    }
}

impl Player for MpdPlayer {
    fn playback_state(&mut self) -> PlaybackState {
        match self.client.status() {
            Ok(status) => map_state(status.state),
            Err(_) => PlaybackState::Unknown,
        }
    }

    fn current_song(&mut self) -> Option<String> {
        match self.client.currentsong() {
            Ok(Some(song)) => Some(song.file),
            _ => None,
        }
    }

    fn pause(&mut self) -> Result<(), String> {
        self.client.pause(true).map_err(|err| err.to_string())
    }

    fn resume(&mut self) -> Result<(), String> {
        self.client.pause(false).map_err(|err| err.to_string())
    }

    fn stop(&mut self) -> Result<(), String> {
        self.client.stop().map_err(|err| err.to_string())
    }

    fn next(&mut self) -> Result<(), String> {
        self.client.next().map_err(|err| err.to_string())
    }

    fn play(&mut self) -> Result<(), String> {
        self.client.play().map_err(|err| err.to_string())
    }

    fn add(&mut self, uri: &str) -> Result<(), String> {
        self.client
            .push(song_for(uri))
            .map(|_| ())
            .map_err(|err| err.to_string())
    }

    fn clear(&mut self) -> Result<(), String> {
        self.client.clear().map_err(|err| err.to_string())
    }

    fn queue(&mut self) -> Result<Vec<QueueEntry>, String> {
        let songs = self.client.queue().map_err(|err| err.to_string())?;
        let entries = songs
            .into_iter()
            .enumerate()
            .map(|(position, song)| QueueEntry {
                id: song.place.map(|place| place.id.0).unwrap_or(position as u32),
                uri: song.file,
            })
            .collect();
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daemon_states_map_onto_playback_states() {
        assert_eq!(map_state(mpd::State::Play), PlaybackState::Playing);
        assert_eq!(map_state(mpd::State::Pause), PlaybackState::Paused);
        assert_eq!(map_state(mpd::State::Stop), PlaybackState::Stopped);
    }

    #[test]
    fn added_songs_carry_only_the_uri() {
        let song = song_for("albums/song.mp3");
        assert_eq!(song.file, "albums/song.mp3");
        assert_eq!(song.title, None);
    }

    #[test]
    fn endpoint_defaults_to_localhost() {
        assert_eq!(endpoint(None, None), Ok("127.0.0.1:6600".to_string()));
    }

    #[test]
    fn endpoint_honors_overrides() {
        let addr = endpoint(Some("music.local".to_string()), Some("6601".to_string()));
        assert_eq!(addr, Ok("music.local:6601".to_string()));
    }

    #[test]
    fn endpoint_rejects_a_bad_port() {
        let addr = endpoint(None, Some("sixty-six".to_string()));
        assert_eq!(addr, Err("Invalid MPD_PORT value: sixty-six".to_string()));
    }
}
