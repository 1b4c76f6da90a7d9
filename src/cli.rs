use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdforg")]
#[command(about = "Merge, split, reorder, extract text from and password-protect PDFs")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run as MCP server over stdio
    Mcp,

    /// Display page count and metadata
    Info {
        /// PDF file to inspect
        path: PathBuf,
    },

    /// Combine multiple PDFs into one, in the order given
    Merge {
        /// PDF files to merge
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Export selected pages to a new PDF
    #[command(alias = "extract")]
    Split {
        /// PDF file to take pages from
        path: PathBuf,

        /// Pages to export, 1-indexed (e.g., "1,3,5-7")
        pages: String,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Extract text from a PDF
    Text {
        /// PDF file to read
        path: PathBuf,

        /// Pages to read, 1-indexed (e.g., "1,3,5-7"); all pages when omitted
        #[arg(default_value = "")]
        pages: String,

        /// Write the text to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Rearrange pages
    Reorder {
        /// PDF file to reorder
        path: PathBuf,

        /// Starting page order, 1-indexed (e.g., "3,1,2"); document order when omitted
        #[arg(long)]
        order: Option<String>,

        /// Move the page at position FROM to position TO (1-indexed), applied in order
        #[arg(short, long = "move", value_name = "FROM:TO")]
        moves: Vec<String>,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Password-protect a PDF with AES-256
    Encrypt {
        /// PDF file to protect
        path: PathBuf,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Password required to open the document
        #[arg(short, long)]
        user_password: String,

        /// Password for full permissions (defaults to the user password)
        #[arg(long)]
        owner_password: Option<String>,
    },

    /// Remove password protection from a PDF
    Decrypt {
        /// Encrypted PDF file
        path: PathBuf,

        /// Output file
        #[arg(short, long)]
        output: PathBuf,

        /// Password that opens the document
        #[arg(short, long)]
        password: String,
    },
}
