use serde::{Deserialize, Serialize};

use quiz_core::model::{ImageRef, PatternId, QuizSummary};

/// Side-effect instruction emitted to the presentation layer.
///
/// The engine never renders anything itself; each operation returns one or
/// more of these and the caller decides how to present them (modal, toast,
/// inline panel).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DisplayInstruction {
    /// Show the structure diagram for the item the user should guess next.
    ShowItem { pattern: PatternId, image: ImageRef },
    /// Show guess feedback: the expected pattern's highlight text.
    ShowFeedback { text: String, correct: bool },
    /// Show the current pattern's intent text as a hint.
    ShowHint { text: String },
    /// Show the end-of-session grading summary.
    ShowSummary(QuizSummary),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_serializes_round_trip() {
        let instruction = DisplayInstruction::ShowFeedback {
            text: "- global access".to_owned(),
            correct: true,
        };
        let json = serde_json::to_string(&instruction).unwrap();
        let back: DisplayInstruction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, instruction);
    }

    #[test]
    fn show_item_serializes_image_ref() {
        let instruction = DisplayInstruction::ShowItem {
            pattern: PatternId::new(5),
            image: ImageRef::from_file("images/gof5.jpg").unwrap(),
        };
        let json = serde_json::to_string(&instruction).unwrap();
        assert!(json.contains("gof5.jpg"));
    }
}
