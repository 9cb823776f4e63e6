//! A language server over stdio. Documents are kept parsed; every change is
//! applied incrementally and followed by fresh diagnostics.

mod diagnostics;
mod editor;
mod framework;
mod log;
mod lsp_error;
mod sync;
mod tokens;

use std::collections::HashMap;
use std::sync::Arc;

use ::log::{info, warn, LevelFilter};
use lsp_types::{self as lsp, Url};
use serde::Deserialize;

pub use self::lsp_error::LspError;

use self::framework::{Client, Error};
use self::log::{AtomicTraceValue, Logger};
use crate::meta;
use crate::syntax::{Document, Version};

/// Run the server on stdio, forwarding log records up to `level` to the
/// client.
pub fn run(level: LevelFilter) -> Result<(), LspError> {
    framework::stdio(Builder::new(level))
}

/// Options given by the client as `initializationOptions`.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct ServerOptions {
    pub grammar: Version,
}

struct Builder {
    level: LevelFilter,
    options: ServerOptions,
    problem: Option<String>,
}

impl Builder {
    fn new(level: LevelFilter) -> Self {
        Self {
            level,
            options: ServerOptions::default(),
            problem: None,
        }
    }
}

impl framework::Builder for Builder {
    fn build(self, trace: Arc<AtomicTraceValue>, client: Client) -> Server {
        Logger::init(self.level, trace, client.clone());

        if let Some(problem) = self.problem {
            warn!("ignoring initialization options: {problem}");
        }

        info!("using the {} grammar", self.options.grammar);
        Server::new(client, self.options)
    }

    fn initialize(&mut self, params: lsp::InitializeParams) -> lsp::InitializeResult {
        if let Some(options) = params.initialization_options {
            match serde_json::from_value(options) {
                Ok(options) => self.options = options,
                Err(e) => self.problem = Some(e.to_string()),
            }
        }

        let server_info = Some(lsp::ServerInfo {
            name: meta::NAME.into(),
            version: Some(meta::VERSION.into()),
        });

        let capabilities = lsp::ServerCapabilities {
            semantic_tokens_provider: Some(
                lsp::SemanticTokensServerCapabilities::SemanticTokensOptions(
                    lsp::SemanticTokensOptions {
                        legend: tokens::legend::get(),
                        full: Some(lsp::SemanticTokensFullOptions::Bool(true)),
                        ..Default::default()
                    },
                ),
            ),
            text_document_sync: Some(lsp::TextDocumentSyncCapability::Kind(
                lsp::TextDocumentSyncKind::INCREMENTAL,
            )),
            folding_range_provider: Some(lsp::FoldingRangeProviderCapability::Simple(true)),
            completion_provider: Some(lsp::CompletionOptions::default()),
            ..Default::default()
        };

        lsp::InitializeResult {
            server_info,
            capabilities,
        }
    }
}

struct Tracked {
    document: Document,
    version: i32,
}

struct Server {
    client: Client,
    options: ServerOptions,
    tracked: HashMap<Url, Tracked>,
}

impl Server {
    fn new(client: Client, options: ServerOptions) -> Self {
        Self {
            client,
            options,
            tracked: HashMap::new(),
        }
    }

    fn document(&self, name: &Url) -> Result<&Document, Error> {
        self.tracked
            .get(name)
            .map(|tracked| &tracked.document)
            .ok_or_else(|| Error::InvalidRequest(format!("unknown document `{name}`")))
    }
}

/// Protocol impl
impl Server {
    /// `textDocument/didChange`
    fn did_change_text_document(&mut self, params: lsp::DidChangeTextDocumentParams) {
        let name = params.text_document.uri;
        let version = params.text_document.version;

        if self.apply_changes(&name, version, params.content_changes) {
            self.send_diagnostics(&name);
        } else {
            warn!("change to untracked document `{name}`");
        }
    }

    /// `textDocument/didOpen`
    fn did_open_text_document(&mut self, params: lsp::DidOpenTextDocumentParams) {
        let document = params.text_document;
        self.insert_document(document.uri.clone(), document.version, document.text);
        self.send_diagnostics(&document.uri);
    }

    /// `textDocument/didClose`
    fn did_close_text_document(&mut self, params: lsp::DidCloseTextDocumentParams) {
        let name = params.text_document.uri;
        self.tracked.remove(&name);
        self.client.publish_diagnostics(name, Vec::new(), None);
    }

    /// `textDocument/didSave`
    fn did_save_text_document(&mut self, _: lsp::DidSaveTextDocumentParams) {}

    /// `textDocument/semanticTokens/full`
    fn semantic_tokens_full(
        &mut self,
        params: lsp::SemanticTokensParams,
    ) -> Result<Option<lsp::SemanticTokensResult>, Error> {
        let document = self.document(&params.text_document.uri)?;
        Ok(Some(lsp::SemanticTokensResult::Tokens(
            tokens::compute(document.tree()),
        )))
    }

    /// `textDocument/foldingRange`
    fn folding_range(
        &mut self,
        params: lsp::FoldingRangeParams,
    ) -> Result<Option<Vec<lsp::FoldingRange>>, Error> {
        let document = self.document(&params.text_document.uri)?;
        Ok(Some(editor::folding_ranges(document.tree())))
    }

    /// `textDocument/completion`
    fn completion(
        &mut self,
        params: lsp::CompletionParams,
    ) -> Result<Option<lsp::CompletionResponse>, Error> {
        let document = self.document(&params.text_document_position.text_document.uri)?;
        Ok(Some(lsp::CompletionResponse::Array(editor::completions(
            document.tree().version(),
        ))))
    }

    /// `shutdown`
    fn shutdown(&mut self) {
        info!("shutting down with {} open documents", self.tracked.len());
    }
}
