use crate::app::read_image;
use crate::app::render::{render_expanded, render_list};
use crate::config::cli::Command;
use crate::core::session::{RecipeFinder, SearchOutcome};
use crate::domain::model::FilterCriteria;
use crate::domain::ports::{IngredientRecognizer, Notifier};
use crate::utils::error::{RecipeError, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

#[derive(Debug, Parser)]
#[command(no_binary_name = true, disable_help_flag = true)]
struct ReplLine {
    #[command(subcommand)]
    command: ReplCommand,
}

#[derive(Debug, Subcommand)]
enum ReplCommand {
    #[command(flatten)]
    Shared(Command),
    /// Toggle a recipe as favorite
    Fav { id: String },
    /// Show favorite recipes
    Favorites,
    /// Back to the full catalog without filters
    Reset,
    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

const PROMPT: &str = "recipe> ";

/// Reads commands line by line until `quit` or end of input. Errors are shown
/// and the session carries on.
pub async fn run_session<R, N, I, W>(
    finder: &RecipeFinder<R, N>,
    input: I,
    out: &mut W,
) -> Result<()>
where
    R: IngredientRecognizer,
    N: Notifier,
    I: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(out, "Type 'help' for commands, 'quit' to leave.")?;
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            continue;
        }

        let parsed = match ReplLine::try_parse_from(words.iter().copied()) {
            Ok(parsed) => parsed,
            Err(e) => {
                writeln!(out, "{}", e.render())?;
                continue;
            }
        };

        match handle(finder, parsed.command, out).await {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => {
                tracing::debug!("Session command failed: {}", e);
                writeln!(out, "{}", e.user_friendly_message())?;
            }
        }
    }

    tracing::info!("Interactive session ended");
    Ok(())
}

async fn handle<R, N, W>(
    finder: &RecipeFinder<R, N>,
    command: ReplCommand,
    out: &mut W,
) -> Result<Flow>
where
    R: IngredientRecognizer,
    N: Notifier,
    W: Write,
{
    match command {
        ReplCommand::Shared(command) => {
            run_command(finder, command, out).await?;
        }
        ReplCommand::Fav { id } => {
            if finder.catalog().get(&id).is_none() {
                return Err(RecipeError::RecipeNotFound { id });
            }
            let now_favorite = finder.toggle_favorite(&id).await;
            let verb = if now_favorite { "added to" } else { "removed from" };
            writeln!(out, "Recipe {} {} favorites", id, verb)?;
        }
        ReplCommand::Favorites => {
            let favorites = finder.favorite_recipes().await;
            let state = finder.snapshot().await;
            write!(out, "{}", render_list(&favorites, state.favorites()))?;
        }
        ReplCommand::Reset => {
            finder.reset().await;
            show_current(finder, out).await?;
        }
        ReplCommand::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

/// Runs one of the commands shared with the one-shot CLI against the session.
pub async fn run_command<R, N, W>(
    finder: &RecipeFinder<R, N>,
    command: Command,
    out: &mut W,
) -> Result<()>
where
    R: IngredientRecognizer,
    N: Notifier,
    W: Write,
{
    match command {
        Command::List => {
            let state = finder.snapshot().await;
            write!(
                out,
                "{}",
                render_list(finder.catalog().recipes(), state.favorites())
            )?;
        }
        Command::Search { ingredients } => {
            if !ingredients.is_empty() {
                finder.set_ingredients(&ingredients.join(" ")).await;
            }
            finder.search().await?;
            show_current(finder, out).await?;
        }
        Command::Filter(args) => {
            finder.apply_filters(FilterCriteria::from(args)).await;
            show_current(finder, out).await?;
        }
        Command::Scan { image } => {
            let image = read_image(&image).await?;
            let outcome = finder.scan_image(&image).await?;
            let state = finder.snapshot().await;
            writeln!(out, "Working with: {}", state.ingredients())?;
            if outcome == SearchOutcome::NoMatches {
                writeln!(out, "Nothing in the catalog uses two of those ingredients.")?;
            }
            show_current(finder, out).await?;
        }
        Command::Show { id } => {
            let recipe = finder
                .catalog()
                .get(&id)
                .ok_or_else(|| RecipeError::RecipeNotFound { id: id.clone() })?;
            let state = finder.snapshot().await;
            write!(
                out,
                "{}",
                render_expanded(recipe, state.favorites().contains(&id))
            )?;
        }
        Command::Interactive => {
            writeln!(out, "Already in an interactive session")?;
        }
    }
    Ok(())
}

async fn show_current<R, N, W>(finder: &RecipeFinder<R, N>, out: &mut W) -> Result<()>
where
    R: IngredientRecognizer,
    N: Notifier,
    W: Write,
{
    let state = finder.snapshot().await;
    write!(out, "{}", render_list(state.recipes(), state.favorites()))?;
    Ok(())
}
