//! Command line parsing

use crate::player::SearchMode;
use thiserror::Error;

/// One parsed user command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play(String),
    Stop,
    PlayRandom,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist(String),
    AddToPlaylist { playlist: String, video_id: String },
    RemoveFromPlaylist { playlist: String, video_id: String },
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowPlaylist(String),
    ShowAllPlaylists,
    Search { term: String, mode: SearchMode },
    FlagVideo { video_id: String, reason: Option<String> },
    AllowVideo(String),
    Help,
    Exit,
}

/// Why a line could not be turned into a [`Command`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Please enter a valid command, type HELP for a list of available commands.")]
    Empty,

    #[error("Please enter a valid command, type HELP for a list of available commands.")]
    Unknown(String),

    #[error("Please enter {command} command in the format: {usage}")]
    Usage {
        command: &'static str,
        usage: &'static str,
    },
}

impl Command {
    /// Parse a command line
    ///
    /// The command name is case-insensitive. Arguments are separated by
    /// whitespace; a flag reason takes the rest of the line.
    pub fn parse(line: &str) -> Result<Self, ParseError> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(ParseError::Empty)?.to_uppercase();
        let args: Vec<&str> = words.collect();

        let command = match name.as_str() {
            "NUMBER_OF_VIDEOS" => no_args(&args, "NUMBER_OF_VIDEOS", Command::NumberOfVideos)?,
            "SHOW_ALL_VIDEOS" => no_args(&args, "SHOW_ALL_VIDEOS", Command::ShowAllVideos)?,
            "PLAY" => Command::Play(one_arg(&args, "PLAY", "PLAY <video_id>")?),
            "STOP" => no_args(&args, "STOP", Command::Stop)?,
            "PLAY_RANDOM" => no_args(&args, "PLAY_RANDOM", Command::PlayRandom)?,
            "PAUSE" => no_args(&args, "PAUSE", Command::Pause)?,
            "CONTINUE" => no_args(&args, "CONTINUE", Command::Continue)?,
            "SHOW_PLAYING" => no_args(&args, "SHOW_PLAYING", Command::ShowPlaying)?,
            "CREATE_PLAYLIST" => Command::CreatePlaylist(one_arg(
                &args,
                "CREATE_PLAYLIST",
                "CREATE_PLAYLIST <playlist_name>",
            )?),
            "ADD_TO_PLAYLIST" => {
                let (playlist, video_id) = two_args(
                    &args,
                    "ADD_TO_PLAYLIST",
                    "ADD_TO_PLAYLIST <playlist_name> <video_id>",
                )?;
                Command::AddToPlaylist { playlist, video_id }
            }
            "REMOVE_FROM_PLAYLIST" => {
                let (playlist, video_id) = two_args(
                    &args,
                    "REMOVE_FROM_PLAYLIST",
                    "REMOVE_FROM_PLAYLIST <playlist_name> <video_id>",
                )?;
                Command::RemoveFromPlaylist { playlist, video_id }
            }
            "CLEAR_PLAYLIST" => Command::ClearPlaylist(one_arg(
                &args,
                "CLEAR_PLAYLIST",
                "CLEAR_PLAYLIST <playlist_name>",
            )?),
            "DELETE_PLAYLIST" => Command::DeletePlaylist(one_arg(
                &args,
                "DELETE_PLAYLIST",
                "DELETE_PLAYLIST <playlist_name>",
            )?),
            "SHOW_PLAYLIST" => Command::ShowPlaylist(one_arg(
                &args,
                "SHOW_PLAYLIST",
                "SHOW_PLAYLIST <playlist_name>",
            )?),
            "SHOW_ALL_PLAYLISTS" => no_args(&args, "SHOW_ALL_PLAYLISTS", Command::ShowAllPlaylists)?,
            "SEARCH_VIDEOS" => Command::Search {
                term: one_arg(&args, "SEARCH_VIDEOS", "SEARCH_VIDEOS <search_term>")?,
                mode: SearchMode::Title,
            },
            "SEARCH_VIDEOS_BY_TAG" | "SEARCH_VIDEOS_WITH_TAG" => Command::Search {
                term: one_arg(&args, "SEARCH_VIDEOS_BY_TAG", "SEARCH_VIDEOS_BY_TAG <tag_name>")?,
                mode: SearchMode::Tag,
            },
            "FLAG_VIDEO" => match args.split_first() {
                Some((video_id, rest)) => Command::FlagVideo {
                    video_id: video_id.to_string(),
                    reason: (!rest.is_empty()).then(|| rest.join(" ")),
                },
                None => {
                    return Err(ParseError::Usage {
                        command: "FLAG_VIDEO",
                        usage: "FLAG_VIDEO <video_id> [flag_reason]",
                    })
                }
            },
            "ALLOW_VIDEO" => Command::AllowVideo(one_arg(
                &args,
                "ALLOW_VIDEO",
                "ALLOW_VIDEO <video_id>",
            )?),
            "HELP" => Command::Help,
            "EXIT" => Command::Exit,
            _ => return Err(ParseError::Unknown(name)),
        };

        Ok(command)
    }
}

fn no_args(args: &[&str], command: &'static str, parsed: Command) -> Result<Command, ParseError> {
    if args.is_empty() {
        Ok(parsed)
    } else {
        Err(ParseError::Usage {
            command,
            usage: command,
        })
    }
}

fn one_arg(args: &[&str], command: &'static str, usage: &'static str) -> Result<String, ParseError> {
    match args {
        [arg] => Ok(arg.to_string()),
        _ => Err(ParseError::Usage { command, usage }),
    }
}

fn two_args(
    args: &[&str],
    command: &'static str,
    usage: &'static str,
) -> Result<(String, String), ParseError> {
    match args {
        [first, second] => Ok((first.to_string(), second.to_string())),
        _ => Err(ParseError::Usage { command, usage }),
    }
}

/// Text printed for HELP
pub const HELP_TEXT: &str = "Available commands:
    NUMBER_OF_VIDEOS - Shows how many videos are in the library.
    SHOW_ALL_VIDEOS - Lists all videos from the library.
    PLAY <video_id> - Plays specified video.
    PLAY_RANDOM - Plays a random video from the library.
    STOP - Stop the current video.
    PAUSE - Pause the current video.
    CONTINUE - Resume the current paused video.
    SHOW_PLAYING - Displays the title, video_id, video tags and paused status of the video that is currently playing (or paused).
    CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.
    ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.
    REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist.
    CLEAR_PLAYLIST <playlist_name> - Removes all the videos from the playlist.
    DELETE_PLAYLIST <playlist_name> - Deletes the playlist.
    SHOW_PLAYLIST <playlist_name> - List all the videos in this playlist.
    SHOW_ALL_PLAYLISTS - Display all the available playlists.
    SEARCH_VIDEOS <search_term> - Display all the videos whose titles contain the search_term.
    SEARCH_VIDEOS_BY_TAG <tag_name> - Display all videos whose tags contains the provided tag.
    FLAG_VIDEO <video_id> <flag_reason> - Mark a video as flagged.
    ALLOW_VIDEO <video_id> - Removes a flag from a video.
    HELP - Displays help.
    EXIT - Terminates the program execution.";
