pub mod card;
pub mod category;
pub mod player;
pub mod question;

pub use card::Card;
pub use category::Category;
pub use player::{Player, PlayerId, Roster};
pub use question::{Answer, Question};
