use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "chatmark")]
#[command(author, version)]
#[command(about = "Render chat message markup to safe inline HTML")]
#[command(
    long_about = "Chatmark renders the inline markup used in chat messages (bold, italic, \
    underline, inline code, and code blocks) to HTML, escaping every HTML-significant \
    character from the input first. Each input line is rendered independently."
)]
#[command(after_help = "\
EXAMPLES:

    # Render a message from stdin
    echo '**hi** there' | chatmark

    # Render each line of a file
    chatmark messages.txt

    # Escape only, without markup parsing
    chatmark --escape-only messages.txt")]
pub struct Cli {
    /// Files to render line by line; stdin when omitted
    pub files: Vec<PathBuf>,

    /// Only escape HTML-significant characters, skip markup parsing
    #[arg(long)]
    pub escape_only: bool,
}
