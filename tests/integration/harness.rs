use protobuf_goto_language_server::ext::sync::{DidChangeSync, DidOpenSync};
use protobuf_goto_language_server::server::Backend;
use serde::de::DeserializeOwned;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tokio::io::{self, AsyncReadExt, AsyncWriteExt, DuplexStream};
use tower_lsp_server::jsonrpc::{Id, Request, Response};
use tower_lsp_server::lsp_types::request::Request as LspRequest;
use tower_lsp_server::{lsp_types::*, UriExt};
use tower_lsp_server::{LspService, Server};

use super::test_logger;

// The duplex-stream client below follows the approach of:
// https://github.com/veryl-lang/veryl/blob/fdac1dfafff82e1227239b77930700927b091de1/crates/languageserver/src/tests.rs#L15

#[derive(Debug)]
enum ServerMessage {
    Response(Response),
    Notification(Request),
}

pub struct TestHarness {
    req_stream: DuplexStream,
    res_stream: DuplexStream,
    read_buffer: Vec<u8>,
    responses: VecDeque<String>,
    request_id: i64,
    #[allow(dead_code)] // Unused, but keep so the directory isn't cleaned up.
    temp_dir: TempDir,
    pub root_path: PathBuf,
}

impl TestHarness {
    pub fn new() -> Self {
        test_logger::init();
        let (req_client, req_server) = io::duplex(1024);
        let (res_server, res_client) = io::duplex(1024);

        let (service, socket) = LspService::build(Backend::new)
            .custom_method(DidOpenSync::METHOD, Backend::did_open_sync)
            .custom_method(DidChangeSync::METHOD, Backend::did_change_sync)
            .finish();

        tokio::spawn(Server::new(req_server, res_server, socket).serve(service));

        let temp_dir = TempDir::new().unwrap();
        let root_path = temp_dir.path().canonicalize().unwrap();

        Self {
            req_stream: req_client,
            res_stream: res_client,
            read_buffer: Vec::new(),
            responses: VecDeque::new(),
            request_id: 0,
            temp_dir,
            root_path,
        }
    }

    pub fn file_uri<P: AsRef<Path>>(&self, path: P) -> Uri {
        Uri::from_file_path(self.root_path.join(path)).unwrap()
    }

    /// Writes the workspace to disk, initializes against the temp root and
    /// opens the given files through the synchronous test methods.
    pub async fn initialize_and_open(&mut self, workspace: &[(&str, &str)], files_to_open: &[&str]) {
        self.initialize(workspace, None, None).await;
        for name in files_to_open {
            self.open_file(name).await;
        }
    }

    pub async fn initialize(
        &mut self,
        workspace: &[(&str, &str)],
        folder_names: Option<&[&str]>,
        initialization_options: Option<serde_json::Value>,
    ) {
        for (name, content) in workspace {
            let path = self.root_path.join(name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::write(path, content).unwrap();
        }

        let mut params = InitializeParams {
            initialization_options,
            ..InitializeParams::default()
        };
        if let Some(folder_names) = folder_names {
            let mut folders = Vec::new();
            for name in folder_names {
                let folder_path = self.root_path.join(name);
                fs::create_dir_all(&folder_path).unwrap();
                folders.push(WorkspaceFolder {
                    uri: Uri::from_file_path(&folder_path).unwrap(),
                    name: (*name).to_string(),
                });
            }
            params.workspace_folders = Some(folders);
        } else {
            #[allow(deprecated)]
            {
                params.root_uri = Some(Uri::from_file_path(&self.root_path).unwrap());
            }
        }

        let id = self.next_request_id();
        let req = Request::build("initialize")
            .params(serde_json::to_value(params).unwrap())
            .id(id)
            .finish();
        self.send_request(req).await;
        let res = self.recv_response().await;
        assert!(res.is_ok());

        let req = Request::build("initialized")
            .params(serde_json::to_value(InitializedParams {}).unwrap())
            .finish();
        self.send_request(req).await;
    }

    pub async fn open_file(&mut self, name: &str) {
        let path = self.root_path.join(name);
        let text = fs::read_to_string(&path).unwrap();
        let language_id = if name.ends_with(".proto") { "proto" } else { "cpp" };

        let ack = self
            .call::<DidOpenSync>(DidOpenTextDocumentParams {
                text_document: TextDocumentItem {
                    uri: Uri::from_file_path(&path).unwrap(),
                    language_id: language_id.to_string(),
                    version: 1,
                    text,
                },
            })
            .await;
        assert_eq!(ack, 0);
    }

    /// Replaces a buffer's content without touching the file on disk.
    pub async fn change_file(&mut self, uri: Uri, version: i32, content: &str) {
        let ack = self
            .call::<DidChangeSync>(DidChangeTextDocumentParams {
                text_document: VersionedTextDocumentIdentifier::new(uri, version),
                content_changes: vec![TextDocumentContentChangeEvent {
                    range: None,
                    range_length: None,
                    text: content.to_string(),
                }],
            })
            .await;
        assert_eq!(ack, 0);
    }

    pub async fn goto_definition(
        &mut self,
        uri: Uri,
        position: Position,
    ) -> Option<GotoDefinitionResponse> {
        self.call::<request::GotoDefinition>(GotoDefinitionParams {
            text_document_position_params: TextDocumentPositionParams {
                text_document: TextDocumentIdentifier { uri },
                position,
            },
            work_done_progress_params: WorkDoneProgressParams::default(),
            partial_result_params: PartialResultParams::default(),
        })
        .await
    }

    pub async fn call<R: LspRequest>(&mut self, params: R::Params) -> R::Result
    where
        R::Result: DeserializeOwned,
    {
        let id = self.next_request_id();
        let req = Request::build(R::METHOD)
            .params(serde_json::to_value(params).unwrap())
            .id(id)
            .finish();
        self.send_request(req).await;

        let res = self.recv_response().await;
        assert_eq!(
            res.id(),
            &Id::Number(id),
            "received response for an unexpected request"
        );
        let value = res.result().expect("request failed").clone();
        serde_json::from_value(value).expect("failed to deserialize response result")
    }

    fn next_request_id(&mut self) -> i64 {
        self.request_id += 1;
        self.request_id
    }

    fn encode(payload: &str) -> String {
        format!("Content-Length: {}\r\n\r\n{}", payload.len(), payload)
    }

    async fn send_request(&mut self, req: Request) {
        let req = serde_json::to_string(&req).unwrap();
        let req = Self::encode(&req);
        self.req_stream.write_all(req.as_bytes()).await.unwrap();
    }

    async fn recv_response(&mut self) -> Response {
        loop {
            match self.recv_message().await {
                ServerMessage::Response(res) => return res,
                // This server pushes nothing we wait on; drop stray
                // notifications (e.g. window/logMessage).
                ServerMessage::Notification(_) => {}
            }
        }
    }

    async fn recv_message(&mut self) -> ServerMessage {
        while self.responses.is_empty() {
            if self.fill_buffer().await.is_err() {
                panic!("failed to read from server");
            }

            loop {
                let buf_str = String::from_utf8_lossy(&self.read_buffer);
                let Some(p) = buf_str.find("\r\n\r\n") else {
                    break;
                };
                let header_end = p + 4;
                let header = &buf_str[..p];

                let len_str = header
                    .strip_prefix("Content-Length: ")
                    .expect("missing Content-Length header");
                let len: usize = len_str.parse().expect("invalid Content-Length value");

                let message_end = header_end + len;
                if self.read_buffer.len() < message_end {
                    break;
                }

                let message_bytes = &self.read_buffer[header_end..message_end];
                let msg_str =
                    String::from_utf8(message_bytes.to_vec()).expect("server sent invalid UTF-8");
                self.responses.push_back(msg_str);
                self.read_buffer.drain(..message_end);
            }
        }

        let msg_str = self.responses.pop_front().unwrap();

        if let Ok(response) = serde_json::from_str::<Response>(&msg_str) {
            return ServerMessage::Response(response);
        }
        if let Ok(request) = serde_json::from_str::<Request>(&msg_str) {
            return ServerMessage::Notification(request);
        }
        panic!("failed to deserialize server message: {msg_str}");
    }

    async fn fill_buffer(&mut self) -> io::Result<()> {
        if !self.responses.is_empty() {
            return Ok(());
        }

        let mut buf = vec![0; 8192];
        match tokio::time::timeout(
            std::time::Duration::from_secs(5),
            self.res_stream.read(&mut buf),
        )
        .await
        {
            Ok(Ok(0)) => Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "server closed connection",
            )),
            Ok(Ok(n)) => {
                self.read_buffer.extend_from_slice(&buf[..n]);
                Ok(())
            }
            Ok(Err(e)) => Err(e),
            Err(_) => Err(io::Error::new(
                io::ErrorKind::TimedOut,
                "timed out waiting for a response",
            )),
        }
    }
}
