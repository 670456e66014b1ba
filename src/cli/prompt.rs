//! Interactive confirmation
//!
//! The prompt is a trait seam so the orchestration can be tested with
//! scripted answers instead of real standard input.

use std::io::{BufRead, Write};

/// Yes/no confirmation interface
pub trait Confirm {
    /// Ask the user the given question, returning true to proceed
    fn confirm(&self, question: &str) -> bool;
}

/// Console prompt reading one line from standard input.
///
/// An empty answer, end of input, or anything not starting with `n` counts
/// as yes.
#[derive(Debug, Default)]
pub struct ConsolePrompt;

impl Confirm for ConsolePrompt {
    fn confirm(&self, question: &str) -> bool {
        print!("{question} [Y/n] ");
        let _ = std::io::stdout().flush();

        let mut answer = String::new();
        let _ = std::io::stdin().lock().read_line(&mut answer);
        answer_means_yes(&answer)
    }
}

fn answer_means_yes(answer: &str) -> bool {
    !matches!(answer.trim().chars().next(), Some('n') | Some('N'))
}

#[cfg(test)]
pub(crate) mod testing {
    use super::Confirm;

    /// Prompt stub with a fixed answer
    pub struct ScriptedPrompt {
        pub answer: bool,
    }

    impl Confirm for ScriptedPrompt {
        fn confirm(&self, _question: &str) -> bool {
            self.answer
        }
    }
}
