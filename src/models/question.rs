use std::fmt;

/// A single multiple-choice question.
///
/// Questions are immutable once the catalog is built: the id gives a
/// stable ordering, `correct_answer` must be one of `options`, and the
/// four options must be distinct. [`validate_catalog`] checks all of this.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub options: [String; 4],
    pub correct_answer: String,
}

impl Question {
    /// Check whether `option` is one of this question's options.
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| o == option)
    }
}

/// Error describing an invalid question catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The catalog contains no questions.
    Empty,
    /// Two questions share the same id.
    DuplicateId(u32),
    /// A question repeats one of its options.
    DuplicateOption(u32),
    /// A question's correct answer is not among its options.
    AnswerNotAnOption(u32),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Empty => write!(f, "catalog contains no questions"),
            CatalogError::DuplicateId(id) => {
                write!(f, "duplicate question id {}", id)
            }
            CatalogError::DuplicateOption(id) => {
                write!(f, "question {} has duplicate options", id)
            }
            CatalogError::AnswerNotAnOption(id) => {
                write!(f, "question {}'s correct answer is not among its options", id)
            }
        }
    }
}

impl std::error::Error for CatalogError {}

/// Validate a catalog against the `Question` invariants.
pub fn validate_catalog(questions: &[Question]) -> Result<(), CatalogError> {
    if questions.is_empty() {
        return Err(CatalogError::Empty);
    }

    let mut seen_ids = std::collections::HashSet::new();
    for question in questions {
        if !seen_ids.insert(question.id) {
            return Err(CatalogError::DuplicateId(question.id));
        }

        for (index, option) in question.options.iter().enumerate() {
            if question.options[..index].contains(option) {
                return Err(CatalogError::DuplicateOption(question.id));
            }
        }

        if !question.has_option(&question.correct_answer) {
            return Err(CatalogError::AnswerNotAnOption(question.id));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u32, options: [&str; 4], correct: &str) -> Question {
        Question {
            id,
            prompt: format!("Question {}", id),
            options: options.map(String::from),
            correct_answer: correct.to_string(),
        }
    }

    #[test]
    fn accepts_well_formed_catalog() {
        let catalog = vec![
            question(1, ["20", "23", "30", "25"], "20"),
            question(2, ["40", "45", "50", "47"], "50"),
        ];
        assert!(validate_catalog(&catalog).is_ok());
    }

    #[test]
    fn rejects_empty_catalog() {
        assert_eq!(validate_catalog(&[]), Err(CatalogError::Empty));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let catalog = vec![
            question(1, ["20", "23", "30", "25"], "20"),
            question(1, ["40", "45", "50", "47"], "50"),
        ];
        assert_eq!(validate_catalog(&catalog), Err(CatalogError::DuplicateId(1)));
    }

    #[test]
    fn rejects_repeated_options() {
        let catalog = vec![question(3, ["10", "10", "15", "20"], "10")];
        assert_eq!(
            validate_catalog(&catalog),
            Err(CatalogError::DuplicateOption(3))
        );
    }

    #[test]
    fn rejects_answer_outside_options() {
        let catalog = vec![question(4, ["10", "14", "15", "20"], "12")];
        assert_eq!(
            validate_catalog(&catalog),
            Err(CatalogError::AnswerNotAnOption(4))
        );
    }
}
