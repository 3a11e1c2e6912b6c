//! The five-question preference quiz driven by the terminal client.
//!
//! The catalog is fixed; a session walks it in order, records the chosen
//! option texts and reports progress as a percentage of questions
//! already answered.

/// A quiz question with its fixed set of options
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub id: u32,
    pub text: &'static str,
    pub options: &'static [&'static str],
}

pub static QUESTIONS: [Question; 5] = [
    Question {
        id: 1,
        text: "If you could have dinner with any movie character, which genre would they be from?",
        options: &[
            "A witty character from a Comedy",
            "A wise mentor from Fantasy/Sci-Fi",
            "A mysterious figure from Thriller/Noir",
            "A passionate soul from Drama/Romance",
            "An inspiring hero from Action/Adventure",
        ],
    },
    Question {
        id: 2,
        text: "What's your ideal movie watching atmosphere?",
        options: &[
            "Edge of my seat, heart racing",
            "Cozy blanket, maybe some tears",
            "Mind engaged, solving mysteries",
            "Lost in wonder and imagination",
            "Laughing with friends and family",
        ],
    },
    Question {
        id: 3,
        text: "If your life was a movie, what would be its defining element?",
        options: &[
            "Epic visual spectacles and effects",
            "Deep, meaningful conversations",
            "Plot twists and surprises",
            "Character growth and relationships",
            "Action-packed adventures",
        ],
    },
    Question {
        id: 4,
        text: "Which cinematic era speaks to your soul?",
        options: &[
            "Golden Age Classics (Pre-1970s)",
            "Rebel Era (1970s-1980s)",
            "Innovation Period (1990s-2000s)",
            "Digital Revolution (2010s-Present)",
            "Timeless Stories (Any Era)",
        ],
    },
    Question {
        id: 5,
        text: "What should linger after the credits roll?",
        options: &[
            "A mind-bending revelation",
            "An emotional resonance",
            "A sense of wonder",
            "A powerful message",
            "Pure entertainment joy",
        ],
    },
];

/// Languages offered for descriptions and the viewer profile
pub static LANGUAGES: [&str; 12] = [
    "English",
    "Spanish",
    "French",
    "German",
    "Italian",
    "Japanese",
    "Korean",
    "Chinese",
    "Hindi",
    "Arabic",
    "Portuguese",
    "Russian",
];

pub const DEFAULT_LANGUAGE: &str = "English";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum QuizError {
    #[error("option {index} is out of range for question {question}")]
    OptionOutOfRange { question: u32, index: usize },

    #[error("the quiz is already complete")]
    AlreadyComplete,
}

/// Walks the question catalog, collecting one answer per question
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    current: usize,
    answers: Vec<String>,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_questions(&self) -> usize {
        QUESTIONS.len()
    }

    /// The question waiting for an answer, or None once complete
    pub fn current_question(&self) -> Option<&'static Question> {
        QUESTIONS.get(self.current)
    }

    /// 1-based number of the current question, for display
    pub fn question_number(&self) -> usize {
        self.current + 1
    }

    /// Percentage of questions already answered, rounded
    pub fn progress_percent(&self) -> u8 {
        ((self.current as f64 / QUESTIONS.len() as f64) * 100.0).round() as u8
    }

    pub fn is_complete(&self) -> bool {
        self.current >= QUESTIONS.len()
    }

    /// Records the option at `option_index` for the current question and
    /// advances. Out-of-range selections leave the session unchanged.
    pub fn select(&mut self, option_index: usize) -> Result<(), QuizError> {
        let question = self.current_question().ok_or(QuizError::AlreadyComplete)?;
        let option = question
            .options
            .get(option_index)
            .ok_or(QuizError::OptionOutOfRange {
                question: question.id,
                index: option_index,
            })?;

        self.answers.push((*option).to_string());
        self.current += 1;
        Ok(())
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn into_answers(self) -> Vec<String> {
        self.answers
    }
}
