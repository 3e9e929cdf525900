//! `shortcut-hub shortcuts` — list, add, edit, remove and run saved shortcuts.

use std::process::ExitCode;

use anyhow::{Result, bail};
use clap::{Args, Subcommand};
use shortcut_common::ShortcutKind;

use crate::app::AppContext;
use crate::application::services::shortcut_crud;
use crate::commands::exit_code_for;
use crate::domain::{NewShortcut, ShortcutPatch};
use crate::domain::shortcut::UNCATEGORIZED;
use crate::infra::TokioLauncher;
use crate::output::progress;

/// Shortcut subcommands.
#[derive(Subcommand)]
pub enum ShortcutsCommand {
    /// List saved shortcuts grouped by category
    List {
        /// Case-insensitive filter over name, description and category
        #[arg(long, short)]
        search: Option<String>,
    },
    /// Save a new shortcut
    Add(AddArgs),
    /// Change fields of a saved shortcut, keeping its id and history
    Edit(EditArgs),
    /// Remove a shortcut by id or name
    Remove {
        /// Shortcut id or name
        id: String,
        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },
    /// Run a saved shortcut by id or name
    Run {
        /// Shortcut id or name
        id: String,
    },
}

/// Arguments for `shortcuts add`.
#[derive(Args)]
pub struct AddArgs {
    /// Display name
    #[arg(long)]
    pub name: String,

    /// Program, script, path or URL to run
    #[arg(long)]
    pub target: String,

    /// Execution strategy
    #[arg(long, value_enum, default_value_t = ShortcutKind::System)]
    pub kind: ShortcutKind,

    /// Parameters appended to the target (split on whitespace)
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub params: String,

    /// Free-form description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Category used for grouping
    #[arg(long, default_value = UNCATEGORIZED)]
    pub category: String,

    /// Icon name shown by clients
    #[arg(long, default_value = "")]
    pub icon: String,

    /// Working directory for runs
    #[arg(long)]
    pub cwd: Option<String>,
}

impl From<AddArgs> for NewShortcut {
    fn from(args: AddArgs) -> Self {
        Self {
            name: args.name,
            description: args.description,
            target: args.target,
            parameters: args.params,
            icon: args.icon,
            category: args.category,
            kind: args.kind,
            working_directory: args.cwd,
        }
    }
}

/// Arguments for `shortcuts edit`. Omitted flags keep the stored value.
#[derive(Args)]
pub struct EditArgs {
    /// Shortcut id or name
    pub id: String,

    /// New display name
    #[arg(long)]
    pub name: Option<String>,

    /// New program, script, path or URL
    #[arg(long)]
    pub target: Option<String>,

    /// New execution strategy
    #[arg(long, value_enum)]
    pub kind: Option<ShortcutKind>,

    /// New parameters (split on whitespace)
    #[arg(long, allow_hyphen_values = true)]
    pub params: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// New category
    #[arg(long)]
    pub category: Option<String>,

    /// New icon name
    #[arg(long)]
    pub icon: Option<String>,

    /// New working directory; pass an empty value to clear it
    #[arg(long)]
    pub cwd: Option<String>,
}

impl EditArgs {
    fn into_parts(self) -> (String, ShortcutPatch) {
        let patch = ShortcutPatch {
            name: self.name,
            description: self.description,
            target: self.target,
            parameters: self.params,
            icon: self.icon,
            category: self.category,
            kind: self.kind,
            working_directory: self.cwd,
        };
        (self.id, patch)
    }
}

/// Run the shortcuts command.
///
/// # Errors
///
/// Returns an error if the store cannot be read or written, the shortcut is
/// not found, or a new shortcut fails validation.
pub async fn run(app: &AppContext, cmd: ShortcutsCommand) -> Result<ExitCode> {
    match cmd {
        ShortcutsCommand::List { search } => list(app, search.as_deref()).await,
        ShortcutsCommand::Add(args) => add(app, args).await,
        ShortcutsCommand::Edit(args) => edit(app, args).await,
        ShortcutsCommand::Remove { id, yes } => remove(app, &id, yes).await,
        ShortcutsCommand::Run { id } => run_one(app, &id).await,
    }
}

async fn list(app: &AppContext, search: Option<&str>) -> Result<ExitCode> {
    let store = app.shortcut_store()?;
    let records = shortcut_crud::list(&store, search).await?;
    app.renderer().render_shortcut_list(&records)?;
    Ok(ExitCode::SUCCESS)
}

async fn add(app: &AppContext, args: AddArgs) -> Result<ExitCode> {
    let store = app.shortcut_store()?;
    let record = shortcut_crud::add(&store, args.into()).await?;
    app.renderer().render_shortcut("Added", &record)?;
    Ok(ExitCode::SUCCESS)
}

async fn edit(app: &AppContext, args: EditArgs) -> Result<ExitCode> {
    let (key, patch) = args.into_parts();
    if patch.is_empty() {
        bail!(
            "Nothing to change. Pass at least one of --name, --target, --kind, \
             --params, --description, --category, --icon or --cwd"
        );
    }
    let store = app.shortcut_store()?;
    let record = shortcut_crud::update(&store, &key, patch).await?;
    app.renderer().render_shortcut("Updated", &record)?;
    Ok(ExitCode::SUCCESS)
}

async fn remove(app: &AppContext, key: &str, yes: bool) -> Result<ExitCode> {
    let store = app.shortcut_store()?;
    let record = shortcut_crud::find(&store, key).await?;

    let skip_prompt = yes || app.non_interactive;
    if !skip_prompt && !app.confirm(&format!("Remove shortcut '{}'?", record.name), false)? {
        app.output.info("Nothing removed.");
        return Ok(ExitCode::SUCCESS);
    }

    let removed = shortcut_crud::remove(&store, &record.id).await?;
    app.renderer().render_shortcut("Removed", &removed)?;
    Ok(ExitCode::SUCCESS)
}

async fn run_one(app: &AppContext, key: &str) -> Result<ExitCode> {
    let store = app.shortcut_store()?;
    let settings = app.dispatch_settings(None)?;

    let pb = progress::spinner_if(
        app.output.show_progress() && !app.is_json(),
        &format!("Running {key}"),
    );
    let outcome = shortcut_crud::run(&store, &TokioLauncher, &settings, key).await;
    progress::finish_clear(&pb);

    let (_, result) = outcome?;
    app.renderer().render_result(&result)?;
    Ok(exit_code_for(&result))
}
