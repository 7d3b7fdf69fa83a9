use clap::{Parser, Subcommand};

use crate::config::ViewMode;

/// GetItDone: a terminal todo tracker that understands natural due dates
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run without a subcommand to start the interactive session.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add a new todo ("buy milk tomorrow", "report asap", "call mom on fri")
    Add(AddCommand),
    /// Show todos
    List(ListCommand),
    /// Mark todos as done
    Done(DoneCommand),
    /// Mark a completed todo as open again
    Undo(UndoCommand),
    /// Set the due date of a todo
    Due(DueCommand),
    /// Show or change the notes of a todo
    Note(NoteCommand),
    /// Log time spent on a todo
    Log(LogCommand),
    /// Remove a todo
    Remove(RemoveCommand),
    /// Print the storage file path
    Path,
}

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    /// The todo text; a trailing date expression becomes its schedule
    #[arg(required = true, num_args = 1..)]
    pub words: Vec<String>,
    /// Due date (today, fri, next tue, +3d, 2026-11-03, asap, bg)
    #[clap(short, long)]
    pub due: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ListCommand {
    /// Which view to print
    #[clap(short, long, value_enum)]
    pub view: Option<ViewMode>,
}

#[derive(Parser, Debug, Clone)]
pub struct DoneCommand {
    /// IDs of the todos to complete
    #[arg(required = true)]
    pub ids: Vec<u32>,
}

#[derive(Parser, Debug, Clone)]
pub struct UndoCommand {
    /// ID of the completed todo
    pub id: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct DueCommand {
    /// ID of the todo
    pub id: u32,
    /// today, tomorrow, +3d, mon-sun, next tue, yyyy-mm-dd, asap, bg, or none/clear
    #[arg(required = true, num_args = 1..)]
    pub expr: Vec<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct NoteCommand {
    /// ID of the todo
    pub id: u32,
    /// New notes; omit to print the current notes
    pub text: Option<String>,
    /// Add the text as a new line instead of replacing
    #[clap(short, long, requires = "text")]
    pub append: bool,
    /// Remove all notes
    #[clap(long, conflicts_with_all = ["text", "append"])]
    pub clear: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct LogCommand {
    /// ID of the todo
    pub id: u32,
    /// Time spent (30m, 1h, 1h30m, or a plain number of minutes)
    pub duration: String,
}

#[derive(Parser, Debug, Clone)]
pub struct RemoveCommand {
    /// ID of the todo
    pub id: u32,
    /// Remove without confirmation
    #[clap(short, long)]
    pub force: bool,
}
