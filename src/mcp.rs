use anyhow::Result;
use rmcp::{
    ServerHandler, ServiceExt,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo},
    schemars, tool, tool_router,
};
use serde::{Deserialize, Serialize};

use crate::commands::{reorder::reorder, split::split, text::text};
use crate::pdf::{assemble, security, PdfDocument};

// Request structs for tools

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PathRequest {
    #[schemars(description = "Path to the PDF file")]
    pub path: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MergeRequest {
    #[schemars(description = "PDF files to merge, in order")]
    pub inputs: Vec<String>,
    #[schemars(description = "Output file path")]
    pub output: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SplitRequest {
    #[schemars(description = "Path to the source PDF file")]
    pub path: String,
    #[schemars(description = "Pages to export, 1-indexed (e.g., '1,3,5-7')")]
    pub pages: String,
    #[schemars(description = "Output file path")]
    pub output: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ExtractTextRequest {
    #[schemars(description = "Path to the PDF file")]
    pub path: String,
    #[schemars(description = "Pages to read, 1-indexed (e.g., '1,3,5-7'); empty for all pages")]
    #[serde(default)]
    pub pages: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ReorderRequest {
    #[schemars(description = "Path to the source PDF file")]
    pub path: String,
    #[schemars(description = "Starting page order, 1-indexed (e.g., '3,1,2'); document order when omitted")]
    #[serde(default)]
    pub order: Option<String>,
    #[schemars(description = "Moves applied in order, each 'FROM:TO' with 1-indexed positions")]
    #[serde(default)]
    pub moves: Vec<String>,
    #[schemars(description = "Output file path")]
    pub output: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct EncryptRequest {
    #[schemars(description = "Path to the PDF file")]
    pub path: String,
    #[schemars(description = "Output file path")]
    pub output: String,
    #[schemars(description = "Password required to open the document")]
    pub user_password: String,
    #[schemars(description = "Password for full permissions (defaults to the user password)")]
    #[serde(default)]
    pub owner_password: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DecryptRequest {
    #[schemars(description = "Path to the encrypted PDF file")]
    pub path: String,
    #[schemars(description = "Output file path")]
    pub output: String,
    #[schemars(description = "Password that opens the document")]
    pub password: String,
}

#[derive(Debug, Clone)]
pub struct PdfServer {
    #[allow(dead_code)]
    tool_router: ToolRouter<Self>,
}

impl PdfServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for PdfServer {
    fn default() -> Self {
        Self::new()
    }
}

fn respond<T: Serialize>(tool: &str, result: Result<T>) -> String {
    match result {
        Ok(value) => {
            serde_json::to_string_pretty(&value).unwrap_or_else(|e| format!("Error: {}", e))
        }
        Err(e) => {
            tracing::warn!(error = %e, "{} failed", tool);
            format!("Error: {}", e)
        }
    }
}

#[tool_router]
impl PdfServer {
    #[tool(description = "Get PDF metadata including title, author, creator, producer, dates, and page count")]
    fn pdf_info(&self, Parameters(PathRequest { path }): Parameters<PathRequest>) -> String {
        let result = PdfDocument::open(&path).map(|doc| {
            let info = doc.info();
            PdfInfoResult {
                path,
                page_count: info.page_count,
                title: info.title,
                author: info.author,
                subject: info.subject,
                keywords: info.keywords,
                creator: info.creator,
                producer: info.producer,
                creation_date: info.creation_date,
                mod_date: info.mod_date,
            }
        });
        respond("pdf_info", result)
    }

    #[tool(description = "Merge several PDFs into one file, keeping the order given")]
    fn pdf_merge(&self, Parameters(req): Parameters<MergeRequest>) -> String {
        let result = assemble::merge(&req.inputs, &req.output).map(|page_count| WriteResult {
            output_path: req.output.clone(),
            page_count,
        });
        respond("pdf_merge", result)
    }

    #[tool(description = "Export selected pages of a PDF to a new file. Pages are 1-indexed, e.g. '1,3,5-7', and are written in the order given.")]
    fn pdf_split(&self, Parameters(req): Parameters<SplitRequest>) -> String {
        let result = split(&req.path, &req.pages, &req.output).map(|page_count| WriteResult {
            output_path: req.output.clone(),
            page_count,
        });
        respond("pdf_split", result)
    }

    #[tool(description = "Extract text from a PDF. Pages are 1-indexed, e.g. '1,3,5-7'; leave empty for the whole document.")]
    fn pdf_extract_text(&self, Parameters(req): Parameters<ExtractTextRequest>) -> String {
        let result = text(&req.path, &req.pages).map(|text| TextResult { text });
        respond("pdf_extract_text", result)
    }

    #[tool(description = "Rearrange the pages of a PDF and save the result")]
    fn pdf_reorder(&self, Parameters(req): Parameters<ReorderRequest>) -> String {
        let result = reorder(&req.path, req.order.as_deref(), &req.moves, &req.output).map(
            |order| ReorderResult {
                output_path: req.output.clone(),
                order: order.into_iter().map(|p| p + 1).collect(),
            },
        );
        respond("pdf_reorder", result)
    }

    #[tool(description = "Password-protect a PDF with AES-256")]
    fn pdf_encrypt(&self, Parameters(req): Parameters<EncryptRequest>) -> String {
        let result = security::encrypt(
            &req.path,
            &req.output,
            &req.user_password,
            req.owner_password.as_deref(),
        )
        .map(|()| PathResult {
            output_path: req.output.clone(),
        });
        respond("pdf_encrypt", result)
    }

    #[tool(description = "Remove password protection from an encrypted PDF")]
    fn pdf_decrypt(&self, Parameters(req): Parameters<DecryptRequest>) -> String {
        let result = security::decrypt(&req.path, &req.output, &req.password).map(|()| PathResult {
            output_path: req.output.clone(),
        });
        respond("pdf_decrypt", result)
    }
}

// Result types for MCP tools

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct PdfInfoResult {
    pub path: String,
    pub page_count: u32,
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub keywords: Option<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
    pub creation_date: Option<String>,
    pub mod_date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct WriteResult {
    pub output_path: String,
    pub page_count: u32,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct TextResult {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ReorderResult {
    pub output_path: String,
    /// 1-indexed source pages in output order
    pub order: Vec<u32>,
}

#[derive(Debug, Serialize, Deserialize, schemars::JsonSchema)]
pub struct PathResult {
    pub output_path: String,
}

impl ServerHandler for PdfServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "PDF organizing tools. Use pdf_info for page count and metadata, pdf_merge to \
                 combine files, pdf_split to export pages, pdf_extract_text to read text, \
                 pdf_reorder to rearrange pages, and pdf_encrypt / pdf_decrypt for password \
                 protection. Page numbers are 1-indexed."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

pub async fn run_server() -> Result<()> {
    tracing::info!("starting MCP server on stdio");
    let server = PdfServer::new();

    let service = server.serve((tokio::io::stdin(), tokio::io::stdout())).await?;

    service.waiting().await?;

    Ok(())
}
