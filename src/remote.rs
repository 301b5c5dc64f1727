use clap::Subcommand;

use crate::player::{PlaybackState, Player, QueueEntry};
use crate::util::{self, LogType};

#[derive(Debug, PartialEq, Subcommand)]
pub enum Command {
    /// Resume playback, starting the queue if mpd is stopped
    Play,

    /// Pause playback
    Pause,

    /// Stop playback
    Stop,

    /// Move to the next song in the queue
    Next,

    /// Append a song to the current queue
    Add { uri: String },

    /// Print the songs in the current queue
    List,

    /// Clear the current queue
    Clear,
}

pub fn run(player: &mut impl Player, command: Command) -> Result<(), String> {
    match command {
        Command::Play => play_resume(player),
        Command::Pause => player.pause(),
        Command::Stop => player.stop(),
        Command::Next => player.next(),
        Command::Add { uri } => add(player, &uri),
        Command::List => list(player),
        Command::Clear => clear(player),
    }
}

// `play` depends on what the daemon is already doing: resume when
// paused, restart when stopped, leave a running player alone.
fn play_resume(player: &mut impl Player) -> Result<(), String> {
    match player.playback_state() {
        PlaybackState::Playing => {
            util::log("MPD is already playing".to_string(), LogType::Remote);
            Ok(())
        }
        PlaybackState::Paused => {
            util::log(
                "MPD is currently paused; Resuming...".to_string(),
                LogType::Remote,
            );
            player.resume()
        }
        PlaybackState::Stopped => {
            util::log(
                "MPD is currently stopped; Starting...".to_string(),
                LogType::Remote,
            );
            match player.current_song() {
                Some(uri) => {
                    util::log(format!("Current song: {uri}"), LogType::Remote);
                    player.play()
                }
                None => {
                    // Nothing loaded, so seed the queue position instead
                    util::log(
                        "MPD has no song loaded; Moving to next song in the queue...".to_string(),
                        LogType::Remote,
                    );
                    player.next()
                }
            }
        }
        PlaybackState::Unknown => Err(String::from(
            "Could not load MPD state. Check if your mpd instance is running",
        )),
    }
}

fn add(player: &mut impl Player, uri: &str) -> Result<(), String> {
    util::log(format!("Adding song {uri}"), LogType::Remote);
    player.add(uri).map_err(|err| {
        util::log("Failed to add uri to mpd".to_string(), LogType::Warning);
        err
    })
}

fn list(player: &mut impl Player) -> Result<(), String> {
    util::log("Loading current queue".to_string(), LogType::Remote);
    let queue = player.queue()?;
    if queue.is_empty() {
        util::log("No songs in the current queue".to_string(), LogType::Remote);
        return Ok(());
    }

    for line in queue_lines(&queue) {
        util::log(line, LogType::Remote);
    }
    Ok(())
}

fn queue_lines(queue: &[QueueEntry]) -> Vec<String> {
    queue
        .iter()
        .map(|entry| format!("({}) Song {}", entry.id, entry.uri))
        .collect()
}

fn clear(player: &mut impl Player) -> Result<(), String> {
    util::log("Clearing current queue".to_string(), LogType::Remote);
    player.clear()
}
