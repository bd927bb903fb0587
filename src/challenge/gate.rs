use super::models::{CompletedPuzzles, Puzzle};

/// Visibility of one puzzle card, derived from the completed-id set.
/// A card only ever moves `Locked` -> `Unlocked` -> `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    Locked,
    Unlocked,
    Completed,
}

/// Gate of the puzzle at `index` in list order: the first card is always
/// open, every later card opens once the card before it has been solved.
pub fn gate_of(puzzles: &[Puzzle], completed: &CompletedPuzzles, index: usize) -> Gate {
    if completed.contains(&puzzles[index].id) {
        return Gate::Completed;
    }
    if index == 0 || completed.contains(&puzzles[index - 1].id) {
        Gate::Unlocked
    } else {
        Gate::Locked
    }
}

/// Case-insensitive exact match after trimming the submission's outer
/// whitespace. No numeric smarts: "26.0" does not match "26".
pub fn check_answer(puzzle: &Puzzle, submitted: &str) -> bool {
    submitted.trim().to_uppercase() == puzzle.answer.to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::super::models::{PuzzleId, PUZZLES};
    use super::*;

    fn completed(ids: &[PuzzleId]) -> CompletedPuzzles {
        ids.iter().copied().collect()
    }

    #[test]
    fn first_card_is_never_locked() {
        assert_eq!(gate_of(PUZZLES, &CompletedPuzzles::new(), 0), Gate::Unlocked);
        assert_eq!(gate_of(PUZZLES, &completed(&[1]), 0), Gate::Completed);
    }

    #[test]
    fn solving_the_first_trial_opens_the_second() {
        let done = completed(&[1]);
        assert_eq!(gate_of(PUZZLES, &done, 0), Gate::Completed);
        assert_eq!(gate_of(PUZZLES, &done, 1), Gate::Unlocked);
        for index in 2..PUZZLES.len() {
            assert_eq!(gate_of(PUZZLES, &done, index), Gate::Locked);
        }
    }

    #[test]
    fn completion_tracks_membership_whatever_the_order() {
        let done = completed(&[4, 2]);
        assert_eq!(gate_of(PUZZLES, &done, 1), Gate::Completed);
        assert_eq!(gate_of(PUZZLES, &done, 3), Gate::Completed);
        // their successors open, the rest of the chain stays shut
        assert_eq!(gate_of(PUZZLES, &done, 2), Gate::Unlocked);
        assert_eq!(gate_of(PUZZLES, &done, 4), Gate::Unlocked);
        assert_eq!(gate_of(PUZZLES, &done, 0), Gate::Unlocked);
    }

    #[test]
    fn gating_follows_list_order_not_id_arithmetic() {
        let sparse = [
            Puzzle { id: 10, title: "a", question: "q", answer: "x", hint: "h" },
            Puzzle { id: 3, title: "b", question: "q", answer: "y", hint: "h" },
            Puzzle { id: 7, title: "c", question: "q", answer: "z", hint: "h" },
        ];
        let done = completed(&[10]);
        assert_eq!(gate_of(&sparse, &done, 1), Gate::Unlocked);
        assert_eq!(gate_of(&sparse, &done, 2), Gate::Locked);
    }

    #[test]
    fn answers_are_trimmed_and_case_folded() {
        let cipher = &PUZZLES[2]; // "PUMPKIN"
        assert!(check_answer(cipher, " pumpkin "));
        assert!(check_answer(cipher, "Pumpkin"));
        assert!(!check_answer(cipher, "PUMP KIN"));

        let riddle = &PUZZLES[3]; // "Ghost"
        assert!(check_answer(riddle, "gHoSt"));
        assert!(!check_answer(riddle, "ghoul"));
    }

    #[test]
    fn numeric_answers_match_on_the_exact_string() {
        let math = &PUZZLES[0]; // "26"
        assert!(check_answer(math, "26"));
        assert!(check_answer(math, " 26 "));
        assert!(!check_answer(math, "26.0"));
        assert!(!check_answer(math, "2 6"));
    }
}
