//! Question banks.
//!
//! The standard bank has four statements per dimension, one of them
//! reversed (agreement counts against the dimension). Four per dimension
//! keeps a random shuffle free of adjacent repeats often enough (about one
//! shuffle in 23) that the sequencer's retry budget practically never runs
//! out. Custom banks can be loaded from TOML or JSON:
//!
//! ```toml
//! [[questions]]
//! id = 1
//! text = "I trust hunches about where things are heading."
//! dimension = "Ni"
//! reversed = false
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::core::{Dimension, Error, Question, QuestionId, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionBank {
    questions: Vec<Question>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BankFile {
    Wrapped { questions: Vec<Question> },
    Bare(Vec<Question>),
}

impl QuestionBank {
    /// Build a bank, rejecting empty banks and duplicate ids.
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            return Err(Error::Validation("question bank is empty".into()));
        }
        let mut seen = HashSet::new();
        for question in &questions {
            if !seen.insert(question.id) {
                return Err(Error::DuplicateQuestion(question.id));
            }
            if question.text.trim().is_empty() {
                return Err(Error::Validation(format!(
                    "question {} has no text",
                    question.id
                )));
            }
        }
        Ok(Self { questions })
    }

    /// The built-in 32-question bank.
    pub fn standard() -> &'static QuestionBank {
        &STANDARD_BANK
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: BankFile = toml::from_str(contents)?;
        Self::from_file(file)
    }

    /// Accepts either `{"questions": [...]}` or a bare array.
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let file: BankFile = serde_json::from_str(contents)?;
        Self::from_file(file)
    }

    /// Load a bank file, choosing the format by extension (`.json` or TOML).
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let bank = match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_str(&contents)?,
            _ => Self::from_toml_str(&contents)?,
        };
        log::debug!(
            "Loaded {} questions from {}",
            bank.len(),
            path.display()
        );
        bank.warn_uncovered_dimensions(path);
        Ok(bank)
    }

    // A dimension with no questions always scores 0.0
    fn warn_uncovered_dimensions(&self, path: &Path) {
        let counts = self.count_by_dimension();
        for dimension in Dimension::ALL {
            if counts[dimension.index()] == 0 {
                log::warn!(
                    "Question bank {} has no questions for {}",
                    path.display(),
                    dimension
                );
            }
        }
    }

    fn from_file(file: BankFile) -> Result<Self> {
        match file {
            BankFile::Wrapped { questions } | BankFile::Bare(questions) => Self::new(questions),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn get(&self, id: QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Number of questions measuring each dimension
    pub fn count_by_dimension(&self) -> [usize; Dimension::COUNT] {
        let mut counts = [0; Dimension::COUNT];
        for question in &self.questions {
            counts[question.dimension.index()] += 1;
        }
        counts
    }
}

static STANDARD_BANK: Lazy<QuestionBank> = Lazy::new(|| QuestionBank {
    questions: STANDARD_STATEMENTS
        .iter()
        .enumerate()
        .map(|(i, &(dimension, text, reversed))| {
            Question::new(i as u32 + 1, text, dimension, reversed)
        })
        .collect(),
});

const STANDARD_STATEMENTS: &[(Dimension, &str, bool)] = &[
    // Ni
    (Dimension::Ni, "I often know how things will turn out before I can explain why.", false),
    (Dimension::Ni, "I find myself returning to a single long-range vision.", false),
    (Dimension::Ni, "Symbols and hidden meanings jump out at me.", false),
    (Dimension::Ni, "I rarely think about where current trends might lead.", true),
    // Ne
    (Dimension::Ne, "I jump from idea to idea and enjoy the connections.", false),
    (Dimension::Ne, "Brainstorming new possibilities energizes me.", false),
    (Dimension::Ne, "I can see many ways a situation could unfold.", false),
    (Dimension::Ne, "I prefer to stick with one proven approach.", true),
    // Si
    (Dimension::Si, "I rely on past experience to decide what to do.", false),
    (Dimension::Si, "I keep routines because they make me feel grounded.", false),
    (Dimension::Si, "I remember details of how things were done before.", false),
    (Dimension::Si, "I easily forget how I handled similar problems before.", true),
    // Se
    (Dimension::Se, "I notice what is happening around me right now.", false),
    (Dimension::Se, "I enjoy physical activities and new sensations.", false),
    (Dimension::Se, "I react quickly when something unexpected happens.", false),
    (Dimension::Se, "I often miss what is going on around me.", true),
    // Ti
    (Dimension::Ti, "I need to understand how something works before I accept it.", false),
    (Dimension::Ti, "I build my own frameworks to make sense of things.", false),
    (Dimension::Ti, "Inconsistent reasoning bothers me even when the outcome is fine.", false),
    (Dimension::Ti, "I accept explanations without checking if they make sense.", true),
    // Te
    (Dimension::Te, "I organize people and tasks to get results efficiently.", false),
    (Dimension::Te, "I judge ideas by whether they work in practice.", false),
    (Dimension::Te, "I like clear goals, deadlines and measurable outcomes.", false),
    (Dimension::Te, "I avoid making plans or setting targets.", true),
    // Fi
    (Dimension::Fi, "My personal values guide my decisions more than rules do.", false),
    (Dimension::Fi, "I need my work to feel authentic to who I am.", false),
    (Dimension::Fi, "I feel emotions deeply even when I do not show them.", false),
    (Dimension::Fi, "I easily go along with choices that conflict with my values.", true),
    // Fe
    (Dimension::Fe, "I pick up on the mood of a room right away.", false),
    (Dimension::Fe, "I try to keep the peace and make sure everyone is included.", false),
    (Dimension::Fe, "Other people's feelings strongly influence my choices.", false),
    (Dimension::Fe, "I do not notice when someone nearby is upset.", true),
];
