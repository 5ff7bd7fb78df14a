//! Plain-text board: one row per card, one column per player.

use cluedo_core::Game;
use cluedo_core::model::card::Card;
use cluedo_core::model::category::Category;
use cluedo_core::model::player::PlayerId;
use std::fmt::Write;

const TITLE: &str = " GAME ";
const SELF_LABEL: &str = "you";

fn label(game: &Game, id: PlayerId) -> &str {
    if id.is_self() {
        SELF_LABEL
    } else {
        game.roster().name(id).unwrap_or_default()
    }
}

pub fn render(game: &Game) -> String {
    let name_width = Card::ALL
        .iter()
        .map(|card| card.name().len())
        .max()
        .unwrap_or_default();
    let columns: Vec<(PlayerId, &str)> = game
        .roster()
        .ids()
        .map(|id| (id, label(game, id)))
        .collect();

    let mut header = format!("| {:name_width$} |", "");
    for (_, name) in &columns {
        let _ = write!(header, " {name} |");
    }
    let width = header.chars().count();

    let mut out = String::new();
    let padding = width.saturating_sub(TITLE.len());
    let _ = writeln!(
        out,
        "{}{TITLE}{}",
        "=".repeat(padding / 2),
        "=".repeat(padding - padding / 2)
    );
    let _ = writeln!(out, "{header}");

    for category in Category::ALL {
        let title = category.label();
        let _ = writeln!(
            out,
            "{title} {}",
            "=".repeat(width.saturating_sub(title.len() + 1))
        );
        for card in category.cards() {
            render_row(&mut out, game, *card, name_width, &columns);
        }
    }
    out
}

fn render_row(
    out: &mut String,
    game: &Game,
    card: Card,
    name_width: usize,
    columns: &[(PlayerId, &str)],
) {
    let state = game.card(card);
    let _ = write!(out, "| {:>name_width$} |", card.name());
    for (id, name) in columns {
        let mark = if state.possessor() == Some(*id) {
            "✓"
        } else if state.non_possessors().contains(*id) {
            "x"
        } else {
            " "
        };
        let _ = write!(out, " {mark:<width$} |", width = name.chars().count());
    }

    if let Some(possessor) = state.possessor() {
        let _ = write!(out, " {}", label(game, possessor));
    } else if state.is_solution() {
        out.push_str(" MURDER ELEMENT");
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use cluedo_core::model::player::Player;
    use cluedo_core::model::question::{Answer, Question};

    fn demo_game() -> Game {
        let mut game = Game::new([
            Player::new("alice", 0),
            Player::new("bob", 0),
            Player::new("charlie", 0),
        ])
        .unwrap();
        game.add_starting_hand(["peacock", "white", "rope", "bathroom"])
            .unwrap();
        let alice = game.player("alice").unwrap();
        game.apply_turn(&Question::new(
            "scarlet",
            "dagger",
            "study",
            PlayerId::SELF,
            alice,
            Answer::RevealedWho,
        ))
        .unwrap();
        game
    }

    #[test]
    fn header_lists_every_player() {
        let board = render(&demo_game());
        let mut lines = board.lines();
        let title = lines.next().unwrap();
        let header = lines.next().unwrap();

        assert!(title.contains(" GAME "));
        assert_eq!(title.chars().count(), header.chars().count());
        assert_eq!(header, "|             | you | alice | bob | charlie |");
    }

    #[test]
    fn rows_mark_possessors_and_exclusions() {
        let board = render(&demo_game());
        let scarlet = board
            .lines()
            .find(|line| line.contains("scarlet"))
            .unwrap();
        assert_eq!(scarlet, "|     scarlet | x   | ✓     | x   | x       | alice");

        let peacock = board
            .lines()
            .find(|line| line.contains("peacock"))
            .unwrap();
        assert!(peacock.ends_with("| you"));

        let green = board.lines().find(|line| line.contains("green")).unwrap();
        assert_eq!(green, "|       green | x   |       |     |         |");
    }

    #[test]
    fn every_category_gets_a_section() {
        let board = render(&demo_game());
        for heading in ["WHO ", "WHAT ", "WHERE "] {
            assert!(board.lines().any(|line| line.starts_with(heading)));
        }
        assert_eq!(board.lines().count(), 2 + 3 + Card::COUNT);
    }
}
