//! Guessing game driven by an enumerated failure type.

use std::cmp::Ordering;
use std::fmt;

use outcome::{Outcome, make_failure, make_success};

/// Hint returned for a wrong guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    /// The target is smaller than the guess.
    Less,
    /// The target is larger than the guess.
    More,
}

impl fmt::Display for Hint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Less => "My value is less.",
            Self::More => "My value is more.",
        })
    }
}

/// Compares `guess` with `target`.
///
/// # Examples
///
/// ```
/// use outcome_demo::workflows::{Hint, guess_who_am_i};
///
/// assert!(guess_who_am_i(5, 5).is_success());
/// assert_eq!(guess_who_am_i(5, 9).unwrap_error(), Hint::Less);
/// ```
#[must_use]
pub fn guess_who_am_i(target: i64, guess: i64) -> Outcome<i64, Hint> {
    match guess.cmp(&target) {
        Ordering::Greater => make_failure(Hint::Less),
        Ordering::Less => make_failure(Hint::More),
        Ordering::Equal => make_success(guess),
    }
}

/// Renders one report line per guess.
#[must_use]
pub fn guess_lines(target: i64, guesses: &[i64]) -> Vec<String> {
    guesses
        .iter()
        .map(|&guess| {
            let outcome = guess_who_am_i(target, guess);
            tracing::debug!(guess, success = outcome.is_success(), "evaluated guess");
            if outcome.is_success() {
                let value = outcome.unwrap();
                format!("[SUCCESS] Congratulations! You guessed correctly. I am {value}")
            } else {
                let hint = outcome.unwrap_error();
                format!("[FAIL] Oops! You guessed wrong. {hint}")
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use outcome::{Outcome, make_failure};
    use rstest::rstest;

    use super::{Hint, guess_lines, guess_who_am_i};

    #[rstest]
    #[case(3, make_failure(Hint::More))]
    #[case(7, make_failure(Hint::Less))]
    #[case(-5, make_failure(Hint::More))]
    fn wrong_guesses_carry_a_hint(#[case] guess: i64, #[case] expected: Outcome<i64, Hint>) {
        assert_eq!(guess_who_am_i(5, guess), expected);
    }

    #[test]
    fn report_lines_follow_the_guesses() {
        assert_eq!(
            guess_lines(5, &[99, 5]),
            vec![
                String::from("[FAIL] Oops! You guessed wrong. My value is less."),
                String::from("[SUCCESS] Congratulations! You guessed correctly. I am 5"),
            ]
        );
    }
}
