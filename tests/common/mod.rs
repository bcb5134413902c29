#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use panorama_client::transport::{RequestDescriptor, ResponseBody, Transport, TransportError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

type Responder = Box<dyn Fn(&RequestDescriptor) -> Result<ResponseBody, TransportError> + Send + Sync>;

/// Transport double that records every descriptor and answers from a closure.
pub struct RecordingTransport {
    requests: Mutex<Vec<RequestDescriptor>>,
    respond: Responder,
}

impl RecordingTransport {
    pub fn with<F>(respond: F) -> Arc<Self>
    where
        F: Fn(&RequestDescriptor) -> Result<ResponseBody, TransportError> + Send + Sync + 'static,
    {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            respond: Box::new(respond),
        })
    }

    pub fn answering(body: ResponseBody) -> Arc<Self> {
        Self::with(move |_| Ok(body.clone()))
    }

    pub fn failing(status: u16, message: &str) -> Arc<Self> {
        let message = message.to_string();
        Self::with(move |_| {
            Err(TransportError::Status {
                status,
                message: message.clone(),
            })
        })
    }

    pub fn requests(&self) -> Vec<RequestDescriptor> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> RequestDescriptor {
        self.requests().pop().expect("no request was issued")
    }
}

#[async_trait::async_trait]
impl Transport for RecordingTransport {
    async fn request(&self, descriptor: RequestDescriptor) -> Result<ResponseBody, TransportError> {
        let result = (self.respond)(&descriptor);
        self.requests.lock().unwrap().push(descriptor);
        result
    }
}

/// Serves one canned HTTP response on localhost and returns the base URL and the request head.
pub async fn serve_once(status_line: &'static str, body: Vec<u8>) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut head = Vec::new();
        let mut chunk = [0u8; 1024];
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&chunk[..n]);
        }

        let mut response = format!(
            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            status_line,
            body.len()
        )
        .into_bytes();
        response.extend_from_slice(&body);
        socket.write_all(&response).await.unwrap();
        socket.shutdown().await.unwrap();

        String::from_utf8_lossy(&head).to_string()
    });

    (format!("http://{}", addr), handle)
}
