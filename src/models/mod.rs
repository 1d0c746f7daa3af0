pub mod api;
pub mod game;
pub mod word;

pub use api::{GameGuessResponse, GameSessionResponse, MessageResponse, StartGameResponse};
pub use game::{GameGuess, GameSession, NewGuess};
pub use word::Word;
