//! The built-in "Rounding Off to Nearest 10" worksheet.

use crate::models::Question;

const ROUNDING_QUESTIONS: [(u32, u32, [&str; 4], &str); 12] = [
    (1, 23, ["20", "23", "30", "25"], "20"),
    (2, 47, ["40", "45", "50", "47"], "50"),
    (3, 82, ["80", "82", "85", "90"], "80"),
    (4, 65, ["60", "65", "70", "75"], "70"),
    (5, 14, ["10", "14", "15", "20"], "10"),
    (6, 58, ["50", "55", "58", "60"], "60"),
    (7, 91, ["85", "90", "91", "100"], "90"),
    (8, 36, ["30", "35", "36", "40"], "40"),
    (9, 72, ["70", "72", "75", "80"], "70"),
    (10, 19, ["10", "15", "19", "20"], "20"),
    (11, 85, ["80", "85", "90", "95"], "90"),
    (12, 43, ["40", "43", "45", "50"], "40"),
];

/// Build the fixed rounding worksheet catalog.
pub fn rounding_catalog() -> Vec<Question> {
    ROUNDING_QUESTIONS
        .iter()
        .map(|(id, number, options, correct)| Question {
            id: *id,
            prompt: format!("Round {} to the nearest 10", number),
            options: options.map(String::from),
            correct_answer: (*correct).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::validate_catalog;

    #[test]
    fn catalog_is_valid() {
        let catalog = rounding_catalog();
        assert_eq!(catalog.len(), 12);
        assert!(validate_catalog(&catalog).is_ok());
    }

    #[test]
    fn ids_are_sequential() {
        let catalog = rounding_catalog();
        for (index, question) in catalog.iter().enumerate() {
            assert_eq!(question.id, index as u32 + 1);
        }
    }
}
