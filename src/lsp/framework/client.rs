use crossbeam_channel::Sender;
use lsp_server::{ErrorCode, Message, Notification, RequestId, Response};
use lsp_types as lsp;
use lsp_types::notification;
use serde::Serialize;

use super::Error;

#[derive(Clone, Debug)]
pub struct Client {
    messages: Sender<Message>,
}

impl Client {
    pub(super) fn new(messages: Sender<Message>) -> Self {
        Self { messages }
    }

    pub fn log(&mut self, typ: lsp::MessageType, message: impl Into<String>) {
        self.notify::<notification::LogMessage>(lsp::LogMessageParams {
            typ,
            message: message.into(),
        });
    }

    pub fn log_trace(&mut self, verbose: Option<impl Into<String>>, message: impl Into<String>) {
        self.notify::<notification::LogTrace>(lsp::LogTraceParams {
            message: message.into(),
            verbose: verbose.map(Into::into),
        });
    }

    pub fn publish_diagnostics(
        &mut self,
        uri: lsp::Url,
        diagnostics: Vec<lsp::Diagnostic>,
        version: Option<i32>,
    ) {
        self.notify::<notification::PublishDiagnostics>(lsp::PublishDiagnosticsParams {
            uri,
            diagnostics,
            version,
        });
    }

    pub fn respond<T: Serialize>(&mut self, id: RequestId, result: Result<T, Error>) {
        let result = result.and_then(|value| {
            serde_json::to_value(value).map_err(|e| Error::InternalError(e.to_string()))
        });

        let response = match result {
            Ok(value) => Response::new_ok(id, value),
            Err(Error::InvalidRequest(message)) => {
                Response::new_err(id, ErrorCode::InvalidRequest as i32, message)
            }
            Err(Error::InternalError(message)) => {
                Response::new_err(id, ErrorCode::InternalError as i32, message)
            }
        };

        self.send(Message::Response(response));
    }

    fn notify<N: notification::Notification>(&mut self, params: N::Params) {
        self.send(Message::Notification(Notification::new(N::METHOD.into(), params)));
    }

    fn send(&mut self, message: Message) {
        self.messages
            .send(message)
            .expect("attempting to send on closed channel");
    }
}
