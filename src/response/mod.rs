use crate::config::BuilderConfig;
use crate::errors::Error;
use crate::status::StatusCode;
use tracing::debug;

mod buffer;
mod scan;

use buffer::GrowableBuffer;
use scan::declares_content_type;

const CRLF: &[u8] = b"\r\n";
const SPACE: &[u8] = b" ";
const HEADER_SEPARATOR: &[u8] = b": ";
const CONTENT_LENGTH: &[u8] = b"Content-Length";
const EMPTY_CONTENT_LENGTH: &[u8] = b"Content-Length: 0\r\n";
const UNKNOWN_REASON: &str = "Unknown";

/// First line the builder was initialized with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Response { status: StatusCode },
    ReverseRequest,
}

/// Assembles one HTTP/1.x style message into a single buffer.
///
/// A builder is initialized with either a status line or a reverse request
/// line, takes headers in order and is closed by [`finish`]. After that
/// [`data`] hands out the bytes to write to the connection. Initializing
/// again starts a new message in the same allocation.
///
/// [`finish`]: ResponseBuilder::finish
/// [`data`]: ResponseBuilder::data
#[derive(Debug)]
pub struct ResponseBuilder {
    buffer: GrowableBuffer,
    kind: Option<MessageKind>,
    complete: bool,
    disconnect_after_send: bool,
    config: BuilderConfig,
}

impl ResponseBuilder {
    pub fn new() -> Result<Self, Error> {
        ResponseBuilder::with_config(BuilderConfig::default())
    }

    pub fn with_config(config: BuilderConfig) -> Result<Self, Error> {
        let buffer = match config.max_capacity {
            Some(max) => GrowableBuffer::with_limit(config.initial_capacity, max)?,
            None => GrowableBuffer::with_capacity(config.initial_capacity)?,
        };

        Ok(ResponseBuilder {
            buffer,
            kind: None,
            complete: false,
            disconnect_after_send: false,
            config,
        })
    }

    /// Start a response with the line `<protocol> <status> <message>`.
    pub fn init_as_response(
        &mut self,
        protocol: &str,
        status: StatusCode,
        message: &str,
    ) -> Result<(), Error> {
        self.reset();

        let code = status.to_string();
        self.append_line(&[
            protocol.as_bytes(),
            SPACE,
            code.as_bytes(),
            SPACE,
            message.as_bytes(),
        ])?;
        self.kind = Some(MessageKind::Response { status });

        Ok(())
    }

    /// Same as [`init_as_response`](ResponseBuilder::init_as_response) with
    /// the registered reason phrase of `status`.
    pub fn init_as_response_canonical(
        &mut self,
        protocol: &str,
        status: StatusCode,
    ) -> Result<(), Error> {
        let message = status.canonical_reason().unwrap_or(UNKNOWN_REASON);
        self.init_as_response(protocol, status, message)
    }

    /// Start a server initiated request with the line
    /// `<method> <url> <protocol>`.
    pub fn init_as_reverse_request(
        &mut self,
        method: &str,
        url: &str,
        protocol: &str,
    ) -> Result<(), Error> {
        self.reset();

        self.append_line(&[
            method.as_bytes(),
            SPACE,
            url.as_bytes(),
            SPACE,
            protocol.as_bytes(),
        ])?;
        self.kind = Some(MessageKind::ReverseRequest);

        Ok(())
    }

    /// Append `<name>: <value>`. Neither part is validated.
    pub fn add_header(&mut self, name: &str, value: &str) -> Result<(), Error> {
        self.ensure_writable()?;

        self.append_line(&[
            name.as_bytes(),
            HEADER_SEPARATOR,
            value.as_bytes(),
        ])
    }

    /// Close the header block and attach `body`.
    ///
    /// A non-empty body is always preceded by its `Content-Length`. Without
    /// a body, `Content-Length: 0` is added only when a content type was
    /// declared, as decided by the configured
    /// [`ContentTypeScan`](crate::config::ContentTypeScan).
    pub fn finish(&mut self, body: &[u8]) -> Result<(), Error> {
        self.ensure_writable()?;

        if !body.is_empty() {
            let length = body.len().to_string();
            self.buffer.append_all(&[
                CONTENT_LENGTH,
                HEADER_SEPARATOR,
                length.as_bytes(),
                CRLF,
                CRLF,
                body,
            ])?;
        } else {
            let scan = self.config.content_type_scan;
            if declares_content_type(self.buffer.as_slice(), scan) {
                debug!("content type without body, adding zero content length");
                self.buffer.append_all(&[EMPTY_CONTENT_LENGTH, CRLF])?;
            } else {
                self.buffer.append(CRLF)?;
            }
        }

        self.complete = true;
        debug!(
            kind = ?self.kind,
            length = self.buffer.len(),
            body_length = body.len(),
            "message finished"
        );

        Ok(())
    }

    pub fn set_disconnect_after_send(&mut self, disconnect: bool) {
        self.disconnect_after_send = disconnect;
    }

    pub fn should_disconnect_after_send(&self) -> bool {
        self.disconnect_after_send
    }

    /// The finished message. Fails until [`finish`](ResponseBuilder::finish)
    /// has been called.
    pub fn data(&self) -> Result<&[u8], Error> {
        if !self.complete {
            return Err(Error::Incomplete);
        }

        Ok(self.buffer.as_slice())
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn kind(&self) -> Option<MessageKind> {
        self.kind
    }

    /// Status of the current response, `None` in reverse request mode.
    pub fn status_code(&self) -> Option<StatusCode> {
        match self.kind {
            Some(MessageKind::Response { status }) => Some(status),
            _ => None,
        }
    }

    pub fn config(&self) -> &BuilderConfig {
        &self.config
    }

    fn reset(&mut self) {
        self.buffer.clear();
        self.kind = None;
        self.complete = false;
    }

    fn ensure_writable(&self) -> Result<(), Error> {
        if self.kind.is_none() {
            return Err(Error::NotInitialized);
        }

        if self.complete {
            return Err(Error::AlreadyComplete);
        }

        Ok(())
    }

    /// Write `parts` followed by CRLF as one line, or nothing at all.
    fn append_line(&mut self, parts: &[&[u8]]) -> Result<(), Error> {
        let mut line = Vec::with_capacity(parts.len() + 1);
        line.extend_from_slice(parts);
        line.push(CRLF);

        self.buffer.append_all(&line)
    }
}
