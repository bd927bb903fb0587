use std::collections::BTreeSet;

pub type PuzzleId = u32;
pub type CompletedPuzzles = BTreeSet<PuzzleId>;

/// one trial of the challenge, fixed at compile time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle {
    pub id: PuzzleId,
    pub title: &'static str,
    pub question: &'static str,
    pub answer: &'static str,
    pub hint: &'static str,
}

/// the five trials, ordered by `id`
pub static PUZZLES: &[Puzzle] = &[
    Puzzle {
        id: 1,
        title: "Puzzle 1: The Haunted Math",
        question: "A ghost, a skeleton, and a vampire go trick-or-treating. The ghost gets 3 times as many candies as the skeleton. The vampire gets 5 more candies than the ghost. If the skeleton gets 7 candies, how many candies does the vampire get?",
        answer: "26",
        hint: "First find how many the ghost gets, then add 5 for the vampire.",
    },
    Puzzle {
        id: 2,
        title: "Puzzle 2: The Pattern of Shadows",
        question: "Find the next number in this cursed sequence: 2, 6, 12, 20, 30, ?",
        answer: "42",
        hint: "Look at the differences between consecutive numbers.",
    },
    Puzzle {
        id: 3,
        title: "Puzzle 3: The Witch's Cipher",
        question: "Decode this message: KIUNPPM",
        answer: "PUMPKIN",
        hint: "Unscrabble those letters girl.",
    },
    Puzzle {
        id: 4,
        title: "Puzzle 4: Who am I?",
        question: "You can’t see me, but I’m always near. I whisper softly right in your ear. I’ll open doors and chill your spine, But really, I just want to boo your mind.",
        answer: "Ghost",
        hint: "OOoOOOOOoooOOOoooOOoOoOOOOOoooo.",
    },
    Puzzle {
        id: 5,
        title: "Puzzle 5: The Jack-o'-Lantern Count",
        question: "You have 50 pumpkins. You carve every 2nd pumpkin, then paint every 3rd pumpkin. How many pumpkins are both carved AND painted?",
        answer: "8",
        hint: "Find pumpkins divisible by both 2 and 3 (i.e., divisible by 6).",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_from_one() {
        for (index, puzzle) in PUZZLES.iter().enumerate() {
            assert_eq!(puzzle.id, index as PuzzleId + 1);
        }
    }

    #[test]
    fn every_trial_has_an_answer() {
        for puzzle in PUZZLES {
            assert!(!puzzle.answer.trim().is_empty(), "{} is unsolvable", puzzle.title);
        }
    }
}
