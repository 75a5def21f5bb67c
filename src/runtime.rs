use crate::{Game, GameError, GameView, Phase, Rack, Tile, Tiles};
use async_trait::async_trait;
use futures::future;
use itertools::Itertools;
use rand::Rng;
use tracing::debug;

/// An action chosen by the seat whose turn it is.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Action {
    /// [Play](Game::play) the [placements](Tiles).
    Play(Tiles),
    /// [Pass](Game::pass) the turn.
    Pass,
    /// [Exchange](Game::exchange_tiles) the [tiles](Tile).
    Exchange(Vec<Tile>),
    /// [Challenge](Game::challenge) the last play on behalf of the seat at the index.
    /// The turn is not over afterwards.
    Challenge(usize),
}

/// Connects one seat of a [Game] to whoever plays it.
///
/// `get_action` blocks execution until getting input.
/// `update_action_error` blocks execution until updating output.
/// `update_view` may execute in parallel with other player updates.
///
/// # Errors
///
/// The implementor of [`Player`] is responsible for returning an error to prevent the runtime
/// from running indefinitely whether from no response or repeated invalid inputs. When a method
/// call fails, the runtime is stopped, and an error is returned and propagated out of the runtime
/// and back to the calling client code.
#[async_trait]
pub trait Player<E> {
    /// Gets an [`Action`] from the current seat.
    fn get_action(&self) -> Result<Action, E>;

    /// When an [`Action`] is rejected, updates the current seat with the state of the game,
    /// its rack, its action, and the reason why the action could not be executed.
    fn update_action_error<'a>(
        &self,
        view: &'a GameView<'a>,
        rack: &'a Rack,
        action: Action,
        error: GameError,
    ) -> Result<(), E>;

    /// Updates each seat with the state of the game and its rack.
    async fn update_view<'a>(&self, view: &'a GameView<'a>, rack: &'a Rack) -> Result<(), E>;
}

/// It repeatedly asks the current seat for an [`Action`], and if the action is rejected, it
/// tells the player about the error and asks again. Once a play, pass, or exchange is
/// accepted, the turn is over. A resolved challenge does not end the turn, and the seat whose
/// turn it is afterwards is asked again.
///
/// Returns as soon as the game leaves [Phase::Main], since no turn can be taken then.
///
/// # Arguments
///
/// * `players`: One [`Player`] for each seat, indexed by seat index.
/// * `game`: The game to advance.
/// * `rng`: Shuffles the bag when tiles are exchanged or a play is reverted.
///
/// # Errors
///
/// When the current player fails to send input or receive an error update.
///
/// # Panics
///
/// If `players` holds fewer players than the game has seats.
pub fn process_turn<P, E, R>(players: &[P], game: &mut Game, rng: &mut R) -> Result<(), E>
where
    P: Player<E>,
    R: Rng + ?Sized,
{
    loop {
        let current_seat = game.current_seat();
        let player = &players[current_seat];
        let action = player.get_action()?;
        let result = match &action {
            Action::Play(placements) => game.play(placements).map(|_| true),
            Action::Pass => game.pass().map(|_| true),
            Action::Exchange(tiles) => game.exchange_tiles(tiles, rng).map(|_| true),
            Action::Challenge(challenger) => game.challenge(*challenger, rng).map(|_| false),
        };

        match result {
            Ok(true) => return Ok(()),
            Ok(false) => debug!(seat = current_seat, "Turn continues after challenge"),
            Err(error) => {
                debug!(seat = current_seat, %error, "Asking again");
                let empty = Rack::new();
                // cannot use map_err since E needs to be propagated here
                player.update_action_error(
                    &game.view(),
                    game.get_rack(current_seat).unwrap_or(&empty),
                    action,
                    error,
                )?;
            }
        }

        if game.phase() != Phase::Main {
            return Ok(());
        }
    }
}

/// Asynchronously sends the current state of the game to [`Player`]s.
///
/// # Arguments
///
/// * `players`: One [`Player`] for each seat, indexed by seat index.
/// * `game`: The current state of the game.
///
/// # Errors
///
/// Accumulates all errors from [`Player::update_view`] into a vector.
pub async fn send_updates<P, E>(players: &[P], game: &Game) -> Result<(), Vec<E>>
where
    P: Player<E>,
{
    let view = game.view();
    let empty = Rack::new();
    let update_tasks = players.iter().enumerate().map(|(seat, player)| {
        player.update_view(&view, game.get_rack(seat).unwrap_or(&empty))
    });

    let errors = future::join_all(update_tasks)
        .await
        .into_iter()
        .filter_map(Result::err)
        .collect_vec();
    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(())
}
