use super::analysis;
use super::closure;
use super::error::{SetupError, TurnError};
use crate::belief::{Board, CardState, DeductionError};
use crate::model::card::Card;
use crate::model::category::Category;
use crate::model::player::{Player, PlayerId, Roster};
use crate::model::question::{Answer, Question};

/// What a single applied turn taught us.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnReport {
    skipped: bool,
    found: Vec<(Card, PlayerId)>,
    solutions: Vec<Card>,
    exclusions: usize,
}

impl TurnReport {
    fn skipped() -> Self {
        Self {
            skipped: true,
            ..Self::default()
        }
    }

    fn between(before: &Board, after: &Board) -> Self {
        let mut report = Self::default();
        for ((card, old), (_, new)) in before.iter().zip(after.iter()) {
            if let (None, Some(possessor)) = (old.possessor(), new.possessor()) {
                report.found.push((card, possessor));
            }
            if !old.is_solution() && new.is_solution() {
                report.solutions.push(card);
            }
            report.exclusions += new.non_possessors().len() - old.non_possessors().len();
        }
        report
    }

    /// True when the turn was ignored because we answered it ourselves.
    pub fn is_skipped(&self) -> bool {
        self.skipped
    }

    /// Cards whose possessor became known this turn.
    pub fn found(&self) -> &[(Card, PlayerId)] {
        &self.found
    }

    /// Cards newly identified as case-file cards.
    pub fn solutions(&self) -> &[Card] {
        &self.solutions
    }

    /// Number of new non-possessor facts.
    pub fn exclusions(&self) -> usize {
        self.exclusions
    }

    pub fn is_empty(&self) -> bool {
        self.found.is_empty() && self.solutions.is_empty() && self.exclusions == 0
    }
}

/// A game in progress, seen from the self-participant's seat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    roster: Roster,
    board: Board,
    hand_seeded: bool,
}

impl Game {
    pub fn new(others: impl IntoIterator<Item = Player>) -> Result<Self, SetupError> {
        let roster = Roster::new(others)?;
        tracing::debug!(target: "cluedo_core::game", players = roster.len(), "game created");
        Ok(Self {
            roster,
            board: Board::new(),
            hand_seeded: false,
        })
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn card(&self, card: Card) -> &CardState {
        self.board.card(card)
    }

    pub fn player(&self, name: &str) -> Option<PlayerId> {
        self.roster.find(name)
    }

    /// Declares how many cards `player` holds. Zero withdraws the declaration.
    pub fn declare_hand_size(
        &mut self,
        player: PlayerId,
        hand_size: usize,
    ) -> Result<(), SetupError> {
        if !self.roster.set_hand_size(player, hand_size) {
            return Err(SetupError::UnknownPlayer(player));
        }
        Ok(())
    }

    /// Seeds the self-participant's hand. Every other card is excluded for
    /// self and the closure pass runs once. Nothing changes on error.
    pub fn add_starting_hand<I, S>(&mut self, names: I) -> Result<(), SetupError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.hand_seeded {
            return Err(SetupError::StartingHandAlreadySet);
        }

        let mut board = self.board.clone();
        for name in names {
            let name = name.as_ref();
            let mut matched = false;
            for category in Category::ALL {
                if board.find_card(category, name, PlayerId::SELF)? {
                    matched = true;
                    break;
                }
            }
            if !matched {
                return Err(SetupError::UnknownCard(name.trim().to_string()));
            }
        }

        let held = board.found_count(PlayerId::SELF);
        for card in Card::ALL {
            if board.card(card).possessor() != Some(PlayerId::SELF) {
                board.add_non_possessor(card, PlayerId::SELF)?;
            }
        }
        closure::run(&mut board, &self.roster)?;

        self.roster.set_hand_size(PlayerId::SELF, held);
        self.board = board;
        self.hand_seeded = true;
        tracing::debug!(target: "cluedo_core::game", cards = held, "starting hand recorded");
        Ok(())
    }

    /// All three cards exist in their categories and both players are seated.
    pub fn is_question_well_formed(&self, question: &Question) -> bool {
        self.resolve(question).is_ok()
    }

    /// Applies one question and its answer, then runs the closure pass.
    ///
    /// Malformed questions are rejected before anything changes, and a turn
    /// that contradicts what is already known is rolled back whole.
    pub fn apply_turn(&mut self, question: &Question) -> Result<TurnReport, TurnError> {
        let result = self.try_apply_turn(question);
        match &result {
            Ok(report) if report.is_skipped() => {
                tracing::debug!(target: "cluedo_core::game", "own answer, nothing to learn");
            }
            Ok(report) => {
                tracing::debug!(
                    target: "cluedo_core::game",
                    answer = %question.answer(),
                    found = report.found().len(),
                    solutions = report.solutions().len(),
                    exclusions = report.exclusions(),
                    "turn applied"
                );
            }
            Err(err) => {
                tracing::warn!(
                    target: "cluedo_core::game",
                    who = question.who(),
                    what = question.what(),
                    place = question.place(),
                    error = %err,
                    "turn rejected"
                );
            }
        }
        result
    }

    fn try_apply_turn(&mut self, question: &Question) -> Result<TurnReport, TurnError> {
        let cards = self.resolve(question)?;
        let answerer = question.answerer();
        if answerer.is_self() {
            return Ok(TurnReport::skipped());
        }

        let mut board = self.board.clone();
        match question.answer() {
            Answer::No => {
                for card in cards {
                    board.add_non_possessor(card, answerer)?;
                }
            }
            Answer::Unknown => analysis::apply_unknown_answer(&mut board, cards, answerer)?,
            revealed => {
                if let Some(category) = revealed.revealed_category() {
                    board.find_card(category, question.named(category), answerer)?;
                }
            }
        }
        closure::run(&mut board, &self.roster)?;

        let report = TurnReport::between(&self.board, &board);
        self.board = board;
        Ok(report)
    }

    /// Maps the named cards onto the catalogue and checks both players.
    fn resolve(&self, question: &Question) -> Result<[Card; 3], TurnError> {
        let mut cards = [Card::Green, Card::Wrench, Card::Bathroom];
        for (slot, category) in cards.iter_mut().zip(Category::ALL) {
            let name = question.named(category);
            *slot = category.find(name).ok_or_else(|| TurnError::UnknownCard {
                category,
                name: name.to_string(),
            })?;
        }
        for player in [question.asker(), question.answerer()] {
            if !self.roster.contains(player) {
                return Err(TurnError::UnknownPlayer(player));
            }
        }
        Ok(cards)
    }

    /// Runs the closure pass on its own. Nothing changes on error.
    pub fn update(&mut self) -> Result<(), DeductionError> {
        let mut board = self.board.clone();
        closure::run(&mut board, &self.roster)?;
        self.board = board;
        Ok(())
    }

    pub fn solution(&self, category: Category) -> Option<Card> {
        self.board.solution(category)
    }

    /// The full case file, once every category is settled.
    pub fn accusation(&self) -> Option<[Card; 3]> {
        Some([
            self.solution(Category::Who)?,
            self.solution(Category::What)?,
            self.solution(Category::Where)?,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: PlayerId = PlayerId::new(1);
    const BOB: PlayerId = PlayerId::new(2);
    const CHARLIE: PlayerId = PlayerId::new(3);

    fn sample_game() -> Game {
        Game::new([
            Player::new("alice", 0),
            Player::new("bob", 0),
            Player::new("charlie", 0),
        ])
        .unwrap()
    }

    fn ask(answerer: PlayerId, answer: Answer) -> Question {
        Question::new("green", "dagger", "bedroom", PlayerId::SELF, answerer, answer)
    }

    #[test]
    fn revealed_answer_marks_the_card() {
        let mut game = sample_game();
        let report = game.apply_turn(&ask(ALICE, Answer::RevealedWho)).unwrap();

        assert_eq!(game.card(Card::Green).possessor(), Some(ALICE));
        assert_eq!(report.found(), &[(Card::Green, ALICE)]);
        assert!(!game.card(Card::Dagger).found());
    }

    #[test]
    fn no_answer_excludes_all_three() {
        let mut game = sample_game();
        game.apply_turn(&ask(BOB, Answer::No)).unwrap();

        for card in [Card::Green, Card::Dagger, Card::Bedroom] {
            assert!(game.card(card).non_possessors().contains(BOB));
            assert!(!game.card(card).found());
        }
    }

    #[test]
    fn own_answer_is_skipped() {
        let mut game = sample_game();
        let before = game.clone();
        let report = game
            .apply_turn(&ask(PlayerId::SELF, Answer::RevealedWho))
            .unwrap();

        assert!(report.is_skipped());
        assert_eq!(game, before);
    }

    #[test]
    fn malformed_question_is_rejected_untouched() {
        let mut game = sample_game();
        let before = game.clone();

        let bad_card = Question::new(
            "green",
            "bleach",
            "bedroom",
            PlayerId::SELF,
            ALICE,
            Answer::No,
        );
        assert!(!game.is_question_well_formed(&bad_card));
        assert_eq!(
            game.apply_turn(&bad_card),
            Err(TurnError::UnknownCard {
                category: Category::What,
                name: "bleach".to_string(),
            })
        );

        let wrong_slot = Question::new(
            "dagger",
            "green",
            "bedroom",
            PlayerId::SELF,
            ALICE,
            Answer::No,
        );
        assert!(!game.is_question_well_formed(&wrong_slot));

        let stranger = ask(PlayerId::new(9), Answer::No);
        assert!(!game.is_question_well_formed(&stranger));
        assert_eq!(
            game.apply_turn(&stranger),
            Err(TurnError::UnknownPlayer(PlayerId::new(9)))
        );

        assert_eq!(game, before);
        assert!(game.is_question_well_formed(&ask(CHARLIE, Answer::No)));
    }

    #[test]
    fn contradicting_turn_rolls_back() {
        let mut game = sample_game();
        game.apply_turn(&ask(ALICE, Answer::RevealedWho)).unwrap();
        let before = game.clone();

        let err = game.apply_turn(&ask(BOB, Answer::RevealedWho)).unwrap_err();

        assert!(matches!(err, TurnError::Contradiction(_)));
        assert_eq!(game, before);
    }

    #[test]
    fn starting_hand_excludes_self_elsewhere() {
        let mut game = sample_game();
        game.add_starting_hand(["Peacock", " white ", "rope", "bathroom"]).unwrap();

        assert_eq!(game.card(Card::Peacock).possessor(), Some(PlayerId::SELF));
        assert_eq!(game.roster().get(PlayerId::SELF).unwrap().hand_size(), Some(4));
        for (card, state) in game.board().iter() {
            if state.possessor() != Some(PlayerId::SELF) {
                assert!(state.non_possessors().contains(PlayerId::SELF), "{card}");
            }
        }
    }

    #[test]
    fn starting_hand_rejects_unknown_cards() {
        let mut game = sample_game();
        let before = game.clone();
        assert_eq!(
            game.add_starting_hand(["rope", "bleach"]),
            Err(SetupError::UnknownCard("bleach".to_string()))
        );
        assert_eq!(game, before);
        game.add_starting_hand(["rope"]).unwrap();
    }

    #[test]
    fn starting_hand_is_set_once() {
        let mut game = sample_game();
        game.add_starting_hand(["rope"]).unwrap();
        assert_eq!(
            game.add_starting_hand(["plum"]),
            Err(SetupError::StartingHandAlreadySet)
        );
    }

    #[test]
    fn declared_hand_size_feeds_the_closure() {
        let mut game = sample_game();
        game.declare_hand_size(ALICE, 1).unwrap();
        assert_eq!(
            game.declare_hand_size(PlayerId::new(7), 1),
            Err(SetupError::UnknownPlayer(PlayerId::new(7)))
        );

        game.apply_turn(&ask(ALICE, Answer::RevealedWhere)).unwrap();

        assert!(game.card(Card::Green).non_possessors().contains(ALICE));
        assert!(game.card(Card::Dagger).non_possessors().contains(ALICE));
    }

    #[test]
    fn accusation_needs_all_three_categories() {
        let mut game = sample_game();
        assert_eq!(game.accusation(), None);

        for category in Category::ALL {
            let (last, rest) = category.cards().split_last().unwrap();
            for card in rest {
                let question = Question::new(
                    if category == Category::Who { card.name() } else { "green" },
                    if category == Category::What { card.name() } else { "dagger" },
                    if category == Category::Where { card.name() } else { "bedroom" },
                    PlayerId::SELF,
                    ALICE,
                    match category {
                        Category::Who => Answer::RevealedWho,
                        Category::What => Answer::RevealedWhat,
                        Category::Where => Answer::RevealedWhere,
                    },
                );
                game.apply_turn(&question).unwrap();
            }
            assert_eq!(game.solution(category), Some(*last));
        }

        assert_eq!(
            game.accusation(),
            Some([Card::White, Card::Rope, Card::Courtyard])
        );
    }
}
