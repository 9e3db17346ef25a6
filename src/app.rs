use crate::command::Command;
use crate::game::{Game, GameState};
use crate::input::{EventSource, TerminalEvents};
use log::{debug, info};
use rand::Rng;
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Instant;

/// Drives a [`Game`]: draws it, feeds it one direction per tick from the
/// player's input, and waits for the player to acknowledge the end of the
/// game.
#[derive(Debug)]
pub(crate) struct App<E = TerminalEvents, R = rand::rngs::ThreadRng> {
    game: Game<R>,
    events: E,
}

impl<E: EventSource, R: Rng> App<E, R> {
    pub(crate) fn new(game: Game<R>, events: E) -> App<E, R> {
        App { game, events }
    }

    pub(crate) fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<Outcome> {
        info!(
            "Starting game with {}ms between ticks",
            self.game.speed().as_millis()
        );
        loop {
            self.draw(terminal)?;
            if !self.game.running() {
                break;
            }
            match self.read_command()? {
                Some(Command::Quit) => {
                    info!(
                        "Player quit with a score of {} and a snake of length {}",
                        self.game.score(),
                        self.game.snake_len()
                    );
                    return Ok(Outcome::Quit);
                }
                Some(cmd) => {
                    if let Some(d) = cmd.direction() {
                        self.game.set_direction(d);
                    }
                }
                None => (),
            }
            self.game.tick();
        }
        if let GameState::Over(ending) = self.game.state() {
            debug!("Waiting for acknowledgement after game ended ({ending})");
        }
        self.await_key_press()?;
        Ok(Outcome::GameOver {
            score: self.game.score(),
        })
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| self.game.draw(frame))?;
        Ok(())
    }

    /// Collect input for one tick period.  Only the most recent command in
    /// that period is returned, except that a quit request is returned
    /// immediately.  A turn back the way the snake is moving is dropped, so
    /// it does not displace an earlier turn.
    fn read_command(&mut self) -> io::Result<Option<Command>> {
        let deadline = Instant::now() + self.game.speed();
        let mut latest = None;
        loop {
            let wait = deadline.saturating_duration_since(Instant::now());
            if !self.events.poll(wait)? {
                return Ok(latest);
            }
            match self
                .events
                .read()?
                .as_key_press_event()
                .and_then(Command::from_key_event)
            {
                Some(Command::Quit) => return Ok(Some(Command::Quit)),
                Some(cmd) if cmd.direction() == Some(self.game.direction().reverse()) => {
                    debug!(
                        "Dropping reversal {cmd:?} while moving {:?}",
                        self.game.direction()
                    );
                }
                Some(cmd) => latest = Some(cmd),
                None => (),
            }
            if wait.is_zero() {
                return Ok(latest);
            }
        }
    }

    /// Block until any key is pressed
    fn await_key_press(&mut self) -> io::Result<()> {
        while self.events.read()?.as_key_press_event().is_none() {}
        Ok(())
    }
}

/// How a run of the app came to an end
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Outcome {
    /// The game ended and the player acknowledged it
    GameOver { score: u32 },
    /// The player quit in the middle of the game
    Quit,
}
