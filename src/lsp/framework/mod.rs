use std::sync::Arc;

pub use self::client::Client;

mod client;

use crossbeam_channel::Receiver;
use lsp_server::{Connection, Message, Notification, Request};
use lsp_types as lsp;
use lsp_types::notification::{self, Notification as _};
use lsp_types::request::{self, Request as _};
use serde::Serialize;

use super::log::AtomicTraceValue;
use super::{LspError, Server};

/// Initialize and run the given server on standard IO.
pub(super) fn stdio(mut builder: impl Builder) -> Result<(), LspError> {
    let (connection, _) = Connection::stdio();
    let (id, params) = connection.initialize_start()?;
    let params: lsp::InitializeParams = serde_json::from_value(params)?;
    let trace = params.trace;
    let result = builder.initialize(params);
    connection.initialize_finish(id, serde_json::to_value(result)?)?;

    let trace = Arc::new(trace.map(AtomicTraceValue::new).unwrap_or_default());

    let client = Client::new(connection.sender.clone());
    let server = builder.build(trace.clone(), client.clone());
    let main = Loop {
        server,
        requests: connection.receiver,
        client,
        state: State::Ready,
        trace,
    };

    match main.run() {
        Final::Exit { properly: true } => Ok(()),
        Final::Exit { properly: false } => Err(LspError::ImproperExit),
        Final::Error(e) => Err(e),
    }
}

pub(super) trait Builder {
    fn build(self, trace: Arc<AtomicTraceValue>, client: Client) -> Server;
    fn initialize(&mut self, params: lsp::InitializeParams) -> lsp::InitializeResult {
        let _ = params;
        Default::default()
    }
}

/// A failed request, reported to the client as a JSON-RPC error.
#[derive(Clone, Debug)]
pub enum Error {
    InvalidRequest(String),
    InternalError(String),
}

#[derive(Clone, Copy, Debug)]
enum State {
    Ready,
    ShuttingDown,
}

enum Final {
    Exit { properly: bool },
    Error(LspError),
}

impl<E: Into<LspError>> From<E> for Final {
    fn from(value: E) -> Self {
        Self::Error(value.into())
    }
}

type NotificationHandler<N> = fn(&mut Server, <N as notification::Notification>::Params);
type RequestHandler<R> = fn(
    &mut Server,
    <R as request::Request>::Params,
) -> Result<<R as request::Request>::Result, Error>;

struct Loop {
    server: Server,
    requests: Receiver<Message>,
    client: Client,

    state: State,
    trace: Arc<AtomicTraceValue>,
}

impl Loop {
    pub fn run(mut self) -> Final {
        while let Ok(message) = self.requests.recv() {
            let result = match message {
                Message::Notification(notification) => self.handle_notification(notification),
                Message::Request(request) => self.handle_request(request),
                Message::Response(response) => {
                    // The server never sends requests of its own.
                    self.client.log(
                        lsp::MessageType::WARNING,
                        format!("unexpected response to {:?}", response.id),
                    );
                    Ok(())
                }
            };

            if let Err(e) = result {
                return e;
            }
        }

        Final::Exit { properly: false }
    }

    fn handle_notification(&mut self, notification: Notification) -> Result<(), Final> {
        use notification::*;

        match (self.state, notification.method.as_str()) {
            (state, m) if m == Exit::METHOD => Err(Final::Exit {
                properly: matches!(state, State::ShuttingDown),
            }),

            (State::ShuttingDown, _) => Err(Final::Exit { properly: false }),

            (_, m) if m == Initialized::METHOD => Ok(()),

            (_, m) if m == SetTrace::METHOD => {
                let params: lsp::SetTraceParams = notification.extract(SetTrace::METHOD)?;
                self.set_trace(params.value);
                Ok(())
            }

            (_, m) if m == DidOpenTextDocument::METHOD => self.notify::<DidOpenTextDocument>(
                notification,
                Server::did_open_text_document,
            ),

            (_, m) if m == DidChangeTextDocument::METHOD => self.notify::<DidChangeTextDocument>(
                notification,
                Server::did_change_text_document,
            ),

            (_, m) if m == DidCloseTextDocument::METHOD => self.notify::<DidCloseTextDocument>(
                notification,
                Server::did_close_text_document,
            ),

            (_, m) if m == DidSaveTextDocument::METHOD => self.notify::<DidSaveTextDocument>(
                notification,
                Server::did_save_text_document,
            ),

            (_, m) => {
                self.client.log(
                    lsp::MessageType::ERROR,
                    format!("unexpected notification type `{m}`"),
                );
                Ok(())
            }
        }
    }

    fn handle_request(&mut self, request: Request) -> Result<(), Final> {
        use request::*;

        match (self.state, request.method.as_str()) {
            (State::Ready, m) if m == Shutdown::METHOD => {
                self.state = State::ShuttingDown;
                self.server.shutdown();
                self.client.respond(request.id, Ok(()));
                Ok(())
            }

            (State::ShuttingDown, _) => {
                self.client.respond(
                    request.id,
                    Err::<(), _>(Error::InvalidRequest(
                        "unexpected request after shutdown".into(),
                    )),
                );
                Ok(())
            }

            (_, m) if m == SemanticTokensFullRequest::METHOD => {
                self.respond::<SemanticTokensFullRequest>(request, Server::semantic_tokens_full)
            }

            (_, m) if m == FoldingRangeRequest::METHOD => {
                self.respond::<FoldingRangeRequest>(request, Server::folding_range)
            }

            (_, m) if m == Completion::METHOD => {
                self.respond::<Completion>(request, Server::completion)
            }

            (_, m) => {
                self.client.respond(
                    request.id,
                    Err::<(), _>(Error::InvalidRequest(format!("unknown request `{m}`"))),
                );
                Ok(())
            }
        }
    }

    fn notify<N: notification::Notification>(
        &mut self,
        notification: Notification,
        handler: NotificationHandler<N>,
    ) -> Result<(), Final> {
        let params = notification.extract(N::METHOD)?;
        handler(&mut self.server, params);
        Ok(())
    }

    fn respond<R>(&mut self, request: Request, handler: RequestHandler<R>) -> Result<(), Final>
    where
        R: request::Request,
        R::Result: Serialize,
    {
        let (id, params) = request.extract(R::METHOD)?;
        let result = handler(&mut self.server, params);
        self.client.respond(id, result);
        Ok(())
    }

    fn set_trace(&mut self, value: lsp::TraceValue) {
        self.trace.store(value);

        let word = match value {
            lsp::TraceValue::Off => "off",
            lsp::TraceValue::Messages => "messages",
            lsp::TraceValue::Verbose => "verbose",
        };

        self.client.log(
            lsp::MessageType::INFO,
            format!("set trace amount to `{word}`"),
        );
    }
}
