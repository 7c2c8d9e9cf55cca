use crate::application::dto::MatchResponse;
use crate::application::session::{EvaluationTicket, IngredientSession};
use crate::application::use_cases::MatchIngredientsUseCase;
use crate::ports::outbound::{ProgressReporter, RecipeCatalog, RecipeFormatter};
use crate::recipe_matching::policies::FailurePolicy;
use crate::shared::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

const PROMPT: &str = "pantry> ";

const HELP: &str = "\
Commands:
  add <ingredient>     add an ingredient and refresh the matches
  remove <name|#n>     remove an ingredient by name or list position
  list                 show the current ingredients
  clear                remove every ingredient
  help                 show this help
  quit                 leave the shell
";

/// One parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Add(String),
    Remove(String),
    /// Zero-based position
    RemoveAt(usize),
    List,
    Clear,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl ShellCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let (verb, arg) = match line.split_once(char::is_whitespace) {
            Some((verb, arg)) => (verb, arg.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "" => ShellCommand::Empty,
            "add" | "a" => ShellCommand::Add(arg.to_string()),
            "remove" | "rm" => Self::parse_remove(arg),
            "list" | "ls" => ShellCommand::List,
            "clear" => ShellCommand::Clear,
            "help" | "?" => ShellCommand::Help,
            "quit" | "exit" | "q" => ShellCommand::Quit,
            _ => ShellCommand::Unknown(line.to_string()),
        }
    }

    /// `#2` and `2` address the second list entry; anything else is a name
    fn parse_remove(arg: &str) -> Self {
        let position = arg.strip_prefix('#').unwrap_or(arg);
        match position.parse::<usize>() {
            Ok(n) if n >= 1 => ShellCommand::RemoveAt(n - 1),
            _ => ShellCommand::Remove(arg.to_string()),
        }
    }
}

/// PantryShell - line-oriented driver for an ingredient session
///
/// Each change to the ingredient list re-runs the matcher on the new
/// snapshot and prints the refreshed matches. A failed evaluation keeps the
/// previous matches.
pub struct PantryShell<'a, C, PR> {
    use_case: &'a MatchIngredientsUseCase<C, PR>,
    formatter: Box<dyn RecipeFormatter>,
    policy: FailurePolicy,
    session: IngredientSession,
}

impl<'a, C, PR> PantryShell<'a, C, PR>
where
    C: RecipeCatalog,
    PR: ProgressReporter,
{
    pub fn new(
        use_case: &'a MatchIngredientsUseCase<C, PR>,
        formatter: Box<dyn RecipeFormatter>,
        policy: FailurePolicy,
    ) -> Self {
        Self {
            use_case,
            formatter,
            policy,
            session: IngredientSession::new(),
        }
    }

    pub fn session(&self) -> &IngredientSession {
        &self.session
    }

    /// Reads commands until `quit` or end of input
    pub async fn run<R, W>(&mut self, input: R, output: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        output.write_all(HELP.as_bytes()).await?;

        loop {
            output.write_all(PROMPT.as_bytes()).await?;
            output.flush().await?;

            let Some(line) = lines.next_line().await? else {
                output.write_all(b"\n").await?;
                break;
            };

            if !self.handle(ShellCommand::parse(&line), output).await? {
                break;
            }
        }

        output.flush().await?;
        Ok(())
    }

    /// Applies one command; returns `false` when the shell should stop
    pub async fn handle<W>(&mut self, command: ShellCommand, output: &mut W) -> Result<bool>
    where
        W: AsyncWrite + Unpin,
    {
        let ticket = match command {
            ShellCommand::Quit => return Ok(false),
            ShellCommand::Empty => return Ok(true),
            ShellCommand::Help => {
                output.write_all(HELP.as_bytes()).await?;
                return Ok(true);
            }
            ShellCommand::List => {
                output.write_all(self.render_list().as_bytes()).await?;
                return Ok(true);
            }
            ShellCommand::Unknown(line) => {
                let message = format!("Unknown command: {}. Type 'help' for commands.\n", line);
                output.write_all(message.as_bytes()).await?;
                return Ok(true);
            }
            ShellCommand::Add(name) => match self.session.add(&name) {
                Ok(Some(ticket)) => ticket,
                Ok(None) => {
                    let message = format!("'{}' is already in the list\n", name.trim());
                    output.write_all(message.as_bytes()).await?;
                    return Ok(true);
                }
                Err(e) => {
                    output.write_all(format!("{}\n", e).as_bytes()).await?;
                    return Ok(true);
                }
            },
            ShellCommand::Remove(name) => match self.session.remove(&name) {
                Some(ticket) => ticket,
                None => {
                    let message = format!("'{}' is not in the list\n", name);
                    output.write_all(message.as_bytes()).await?;
                    return Ok(true);
                }
            },
            ShellCommand::RemoveAt(index) => match self.session.remove_at(index) {
                Some(ticket) => ticket,
                None => {
                    let message = format!("No ingredient at position {}\n", index + 1);
                    output.write_all(message.as_bytes()).await?;
                    return Ok(true);
                }
            },
            ShellCommand::Clear => match self.session.clear() {
                Some(ticket) => ticket,
                None => return Ok(true),
            },
        };

        self.refresh(ticket, output).await?;
        Ok(true)
    }

    async fn refresh<W>(&mut self, ticket: EvaluationTicket, output: &mut W) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let (generation, result) = self.use_case.evaluate_ticket(&ticket, self.policy).await;
        match result {
            Ok(result) => {
                let rendered = self
                    .formatter
                    .format_matches(&MatchResponse::new(result.clone()))?;
                if self.session.apply(generation, result) {
                    output.write_all(rendered.as_bytes()).await?;
                }
            }
            Err(e) => {
                tracing::warn!(generation, "evaluation failed, keeping previous matches");
                output
                    .write_all(format!("{:#}\nPrevious matches are kept.\n", e).as_bytes())
                    .await?;
            }
        }
        Ok(())
    }

    fn render_list(&self) -> String {
        let ingredients = self.session.ingredients();
        if ingredients.is_empty() {
            return "No ingredients yet. Try 'add chicken'.\n".to_string();
        }
        ingredients
            .iter()
            .enumerate()
            .map(|(i, ingredient)| format!("{}. {}\n", i + 1, ingredient))
            .collect()
    }
}
