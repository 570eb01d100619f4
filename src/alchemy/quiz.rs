//! The wise questioner: a three-tier multiple-choice quiz that pays gold.
//!
//! Each tier carries a fixed question bank, a per-answer reward, a greeting and
//! a pass/fail farewell. A session walks the bank in order; once the last
//! question is answered the session is completed and further answers are
//! rejected until [`Questioner::reset`].

use std::fmt;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::alchemy::errors::AlchemyError;

/// Default questioner name.
pub const DEFAULT_NPC_NAME: &str = "Npc questioner";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub text: &'static str,
    pub answers: [&'static str; 4],
    pub correct: usize,
}

impl Question {
    pub fn is_correct(&self, choice: usize) -> bool {
        choice == self.correct
    }
}

const BEGINNER_QUESTIONS: [Question; 3] = [
    Question {
        text: "Яка основна складова еліксиру здоров'я?",
        answers: ["Червона трава", "Блакитний гриб", "Зелений корінь", "Жовта ягода"],
        correct: 0,
    },
    Question {
        text: "Скільки інгредієнтів потрібно для базового зілля маги?",
        answers: ["Один", "Два", "Три", "Чотири"],
        correct: 1,
    },
    Question {
        text: "Який інструмент використовується для збору лікарських трав?",
        answers: ["Молот", "Кирка", "Ніж", "Серп"],
        correct: 3,
    },
];

const INTERMEDIATE_QUESTIONS: [Question; 4] = [
    Question {
        text: "Який інгредієнт підсилює дію еліксиру невидимості?",
        answers: ["Рубін", "Нічний пил", "Місячна роса", "Тіньовий кристал"],
        correct: 2,
    },
    Question {
        text: "Яка комбінація трав створює протиотруту?",
        answers: [
            "Червона і біла",
            "Зелена і синя",
            "Жовта і фіолетова",
            "Чорна і золота",
        ],
        correct: 0,
    },
    Question {
        text: "Де можна знайти рідкісну траву мрійників?",
        answers: [
            "У глибоких печерах",
            "На високих горах",
            "Біля водоспадів",
            "У старих руїнах",
        ],
        correct: 1,
    },
    Question {
        text: "Який символ використовується для активації магічного зілля?",
        answers: ["Коло", "Трикутник", "Пентаграма", "Спіраль"],
        correct: 3,
    },
];

const ADVANCED_QUESTIONS: [Question; 5] = [
    Question {
        text: "Який рідкісний інгредієнт потрібен для приготування легендарного еліксиру безсмертя?",
        answers: [
            "Сльоза фенікса",
            "Корінь древнього дерева",
            "Пил зі старовинної гробниці",
            "Кров дракона",
        ],
        correct: 3,
    },
    Question {
        text: "Яка правильна послідовність змішування для створення зілля всезнання?",
        answers: [
            "Нагрівання, змішування, охолодження",
            "Змішування, настоювання, фільтрація",
            "Подрібнення, настоювання, дистиляція",
            "Розчинення, кристалізація, активація",
        ],
        correct: 2,
    },
    Question {
        text: "Який інгредієнт нейтралізує токсичні ефекти кореня темряви?",
        answers: ["Срібний пилок", "Кристал світла", "Есенція життя", "Морська сіль"],
        correct: 1,
    },
    Question {
        text: "Як правильно зберігати зілля перетворення, щоб воно не втратило силу?",
        answers: [
            "У скляній колбі під сонячним світлом",
            "У керамічному горщику в прохолодному місці",
            "У металевій посудині поблизу вогню",
            "У кришталевому флаконі під місячним світлом",
        ],
        correct: 3,
    },
    Question {
        text: "Яка рідкісна рослина росте лише раз на 100 років і може зцілити будь-яку хворобу?",
        answers: ["Золота орхідея", "Кривавий лотос", "Зоряна квітка", "Місячний корінь"],
        correct: 2,
    },
];

/// Difficulty tier of the questioner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QuizTier {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl QuizTier {
    /// Tier for a player level: below 3 beginner, 3 and 4 intermediate, else advanced.
    pub fn for_player_level(level: u32) -> Self {
        match level {
            0..=2 => QuizTier::Beginner,
            3..=4 => QuizTier::Intermediate,
            _ => QuizTier::Advanced,
        }
    }

    pub fn questions(self) -> &'static [Question] {
        match self {
            QuizTier::Beginner => &BEGINNER_QUESTIONS,
            QuizTier::Intermediate => &INTERMEDIATE_QUESTIONS,
            QuizTier::Advanced => &ADVANCED_QUESTIONS,
        }
    }

    /// Gold per correct answer.
    pub fn reward_multiplier(self) -> u32 {
        match self {
            QuizTier::Beginner => 5,
            QuizTier::Intermediate => 15,
            QuizTier::Advanced => 30,
        }
    }

    pub fn greeting(self) -> &'static str {
        match self {
            QuizTier::Beginner => "Вітаю, новачку! У мене є кілька простих запитань для тебе.",
            QuizTier::Intermediate => {
                "Вітаю, учень! Бачу, ти вже маєш певні знання. Спробуй відповісти на ці питання."
            }
            QuizTier::Advanced => {
                "Вітаю, майстре! Готовий перевірити свої обширні знання? Ці питання перевірять твою справжню майстерність."
            }
        }
    }

    pub fn farewell(self, passed: bool) -> &'static str {
        match (self, passed) {
            (QuizTier::Beginner, true) => {
                "Непогано для початківця! Приходь, коли досягнеш вищого рівня, і я приготую складніші питання."
            }
            (QuizTier::Beginner, false) => {
                "Не засмучуйся, новачку. Практика зробить тебе кращим. Спробуй ще раз пізніше."
            }
            (QuizTier::Intermediate, true) => {
                "Чудово! Ти вже багато знаєш. Продовжуй вдосконалюватися, і скоро ти зможеш відповісти на мої найскладніші питання."
            }
            (QuizTier::Intermediate, false) => {
                "Хмм, тобі ще є чому повчитися. Не здавайся, і повертайся, коли будеш готовий знову спробувати."
            }
            (QuizTier::Advanced, true) => {
                "Вражаюче! Твої знання справді виняткові. Ти довів, що гідний називатися справжнім майстром."
            }
            (QuizTier::Advanced, false) => {
                "Навіть майстри іноді помиляються. Повертайся, коли будеш готовий знову випробувати свої знання."
            }
        }
    }
}

impl fmt::Display for QuizTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QuizTier::Beginner => "Beginner",
            QuizTier::Intermediate => "Intermediate",
            QuizTier::Advanced => "Advanced",
        };
        f.write_str(label)
    }
}

/// Quiz NPC with the progress of the current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Questioner {
    pub name: String,
    tier: QuizTier,
    current: usize,
    correct_answers: u32,
    completed: bool,
}

impl Questioner {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            tier: QuizTier::Beginner,
            current: 0,
            correct_answers: 0,
            completed: false,
        }
    }

    pub fn tier(&self) -> QuizTier {
        self.tier
    }

    pub fn correct_answers(&self) -> u32 {
        self.correct_answers
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn total_questions(&self) -> usize {
        self.tier.questions().len()
    }

    /// Zero-based position in the bank.
    pub fn position(&self) -> usize {
        self.current
    }

    pub fn reset(&mut self) {
        self.current = 0;
        self.correct_answers = 0;
        self.completed = false;
    }

    /// Switch tier; a session in progress starts over.
    pub fn set_tier(&mut self, tier: QuizTier) {
        if tier != self.tier {
            info!("{} switches to {} questions", self.name, tier);
            self.tier = tier;
            self.reset();
        }
    }

    /// Re-evaluate the tier from the player's level. A no-op unless `switching` is on.
    pub fn update_tier(&mut self, player_level: u32, switching: bool) {
        if switching {
            self.set_tier(QuizTier::for_player_level(player_level));
        }
    }

    pub fn greeting(&self) -> &'static str {
        self.tier.greeting()
    }

    /// The question waiting for an answer, if the session is still running.
    pub fn current_question(&self) -> Option<&'static Question> {
        if self.completed {
            return None;
        }
        self.tier.questions().get(self.current)
    }

    /// Record an answer and advance.
    ///
    /// Returns `Ok(true)` if another question follows and `Ok(false)` when this
    /// answer finished the session.
    pub fn move_to_next(&mut self, was_correct: bool) -> Result<bool, AlchemyError> {
        if self.completed {
            return Err(AlchemyError::QuizCompleted);
        }
        if was_correct {
            self.correct_answers += 1;
        }
        if self.current + 1 >= self.total_questions() {
            self.completed = true;
            debug!(
                "{} quiz finished: {}/{}",
                self.tier,
                self.correct_answers,
                self.total_questions()
            );
            return Ok(false);
        }
        self.current += 1;
        Ok(true)
    }

    /// Answer the current question with option index `choice`.
    pub fn answer(&mut self, choice: usize) -> Result<bool, AlchemyError> {
        let question = self.current_question().ok_or(AlchemyError::QuizCompleted)?;
        self.move_to_next(question.is_correct(choice))
    }

    /// Gold earned so far.
    pub fn reward(&self) -> u32 {
        self.correct_answers * self.tier.reward_multiplier()
    }

    /// Passed when at least half of the bank (rounded down) was answered correctly.
    pub fn is_passed(&self) -> bool {
        self.correct_answers as usize >= self.total_questions() / 2
    }

    pub fn farewell(&self) -> &'static str {
        self.tier.farewell(self.is_passed())
    }
}

impl Default for Questioner {
    fn default() -> Self {
        Self::new(DEFAULT_NPC_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_sizes() {
        assert_eq!(QuizTier::Beginner.questions().len(), 3);
        assert_eq!(QuizTier::Intermediate.questions().len(), 4);
        assert_eq!(QuizTier::Advanced.questions().len(), 5);
        for tier in [QuizTier::Beginner, QuizTier::Intermediate, QuizTier::Advanced] {
            assert!(tier.questions().iter().all(|q| q.correct < q.answers.len()));
        }
    }

    #[test]
    fn beginner_perfect_run_pays_fifteen() {
        let mut npc = Questioner::default();
        assert!(npc.move_to_next(true).unwrap());
        assert!(npc.move_to_next(true).unwrap());
        assert!(!npc.move_to_next(true).unwrap());
        assert!(npc.is_completed());
        assert_eq!(npc.reward(), 15);
        assert!(npc.is_passed());
    }

    #[test]
    fn answering_after_completion_is_rejected() {
        let mut npc = Questioner::default();
        for _ in 0..3 {
            npc.move_to_next(false).unwrap();
        }
        assert!(matches!(npc.move_to_next(true), Err(AlchemyError::QuizCompleted)));
        assert_eq!(npc.correct_answers(), 0);
        assert!(npc.current_question().is_none());
    }

    #[test]
    fn pass_threshold_rounds_down() {
        let mut npc = Questioner::default();
        npc.move_to_next(true).unwrap();
        npc.move_to_next(false).unwrap();
        npc.move_to_next(false).unwrap();
        // 1 >= 3 / 2
        assert!(npc.is_passed());
    }

    #[test]
    fn tier_thresholds() {
        assert_eq!(QuizTier::for_player_level(1), QuizTier::Beginner);
        assert_eq!(QuizTier::for_player_level(2), QuizTier::Beginner);
        assert_eq!(QuizTier::for_player_level(3), QuizTier::Intermediate);
        assert_eq!(QuizTier::for_player_level(4), QuizTier::Intermediate);
        assert_eq!(QuizTier::for_player_level(5), QuizTier::Advanced);
    }

    #[test]
    fn tier_update_respects_switch() {
        let mut npc = Questioner::default();
        npc.update_tier(7, false);
        assert_eq!(npc.tier(), QuizTier::Beginner);

        npc.move_to_next(true).unwrap();
        npc.update_tier(7, true);
        assert_eq!(npc.tier(), QuizTier::Advanced);
        assert_eq!(npc.correct_answers(), 0);
        assert_eq!(npc.position(), 0);
    }

    #[test]
    fn answer_uses_correct_index() {
        let mut npc = Questioner::default();
        npc.answer(0).unwrap();
        npc.answer(0).unwrap();
        npc.answer(3).unwrap();
        assert_eq!(npc.correct_answers(), 2);
        assert_eq!(npc.farewell(), QuizTier::Beginner.farewell(true));
    }
}
