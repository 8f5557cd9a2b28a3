//! Interactive command session

use super::command::{Command, HELP_TEXT};
use super::render;
use crate::player::VideoPlayer;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::ops::ControlFlow;

const GREETING: &str = "Hello and welcome to the video player, what would you like to do?
Enter HELP for list of available commands or EXIT to terminate.";

const FAREWELL: &str = "The video player has now terminated its execution. Thank you and goodbye!";

/// Reads commands from `input`, runs them, and writes status lines to `output`
pub struct Session<R, W> {
    player: VideoPlayer,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(player: VideoPlayer, input: R, output: W) -> Self {
        Self {
            player,
            input,
            output,
        }
    }

    /// Hand back the player and output once the session is over
    pub fn into_parts(self) -> (VideoPlayer, W) {
        (self.player, self.output)
    }

    /// Run until EXIT or end of input
    pub fn run(&mut self) -> Result<()> {
        self.write_lines([GREETING])?;

        while let Some(line) = self.read_line()? {
            let command = match Command::parse(&line) {
                Ok(command) => command,
                Err(e) => {
                    log::debug!("Rejected input {:?}: {:?}", line, e);
                    self.write_lines([e.to_string()])?;
                    continue;
                }
            };

            if self.execute(command)?.is_break() {
                break;
            }
        }

        self.write_lines([FAREWELL])?;
        self.output.flush().context("Failed to flush output")?;
        Ok(())
    }

    /// Run one command
    ///
    /// Returns `Break` for EXIT. Searches read their selection answer from
    /// the session input.
    pub fn execute(&mut self, command: Command) -> Result<ControlFlow<()>> {
        log::debug!("Executing {:?}", command);

        let player = &mut self.player;
        let lines = match command {
            Command::NumberOfVideos => render::number_of_videos(player.number_of_videos()),
            Command::ShowAllVideos => render::all_videos(&player.list_videos()),
            Command::Play(id) => render::play(&player.play(&id)),
            Command::Stop => render::stop(&player.stop()),
            Command::PlayRandom => render::play_random(&player.play_random()),
            Command::Pause => render::pause(&player.pause()),
            Command::Continue => render::continue_video(&player.continue_video()),
            Command::ShowPlaying => render::show_playing(&player.show_playing()),
            Command::CreatePlaylist(name) => {
                render::create_playlist(&name, &player.create_playlist(&name))
            }
            Command::AddToPlaylist { playlist, video_id } => {
                render::add_to_playlist(&playlist, &player.add_to_playlist(&playlist, &video_id))
            }
            Command::RemoveFromPlaylist { playlist, video_id } => render::remove_from_playlist(
                &playlist,
                &player.remove_from_playlist(&playlist, &video_id),
            ),
            Command::ClearPlaylist(name) => {
                render::clear_playlist(&name, &player.clear_playlist(&name))
            }
            Command::DeletePlaylist(name) => {
                render::delete_playlist(&name, &player.delete_playlist(&name))
            }
            Command::ShowPlaylist(name) => render::show_playlist(&name, &player.show_playlist(&name)),
            Command::ShowAllPlaylists => render::all_playlists(&player.show_all_playlists()),
            Command::Search { term, mode } => {
                self.search(&term, mode)?;
                return Ok(ControlFlow::Continue(()));
            }
            Command::FlagVideo { video_id, reason } => {
                render::flag_video(&player.flag_video(&video_id, reason.as_deref()))
            }
            Command::AllowVideo(id) => render::allow_video(&player.allow_video(&id)),
            Command::Help => HELP_TEXT.lines().map(String::from).collect(),
            Command::Exit => return Ok(ControlFlow::Break(())),
        };

        self.write_lines(lines)?;
        Ok(ControlFlow::Continue(()))
    }

    fn search(&mut self, term: &str, mode: crate::player::SearchMode) -> Result<()> {
        let results = match self.player.search(term, mode) {
            Ok(results) => results,
            Err(e) => return self.write_lines([e.to_string()]),
        };
        self.write_lines(render::search_results(&results))?;

        // End of input declines the offer.
        let answer = self.read_line()?.unwrap_or_default();
        let selection = self.player.select_result(&results, &answer);
        match selection {
            Ok(Some(outcome)) => self.write_lines(render::play(&Ok(outcome))),
            Ok(None) => Ok(()),
            Err(e) => self.write_lines(render::play(&Err(e))),
        }
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read command input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn write_lines<I, S>(&mut self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            writeln!(self.output, "{}", line.as_ref()).context("Failed to write output")?;
        }
        Ok(())
    }
}
