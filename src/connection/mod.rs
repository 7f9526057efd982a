use crate::config::BuilderConfig;
use crate::response::ResponseBuilder;
use std::io::Result;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

/// What the transport should do with the connection after a send.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    KeepAlive,
    Close,
}

/// Write the finished message of `response` and honor its disconnect hint.
///
/// The writer is shut down when the builder asks for a disconnect. An
/// unfinished builder fails with `InvalidData` before anything is written.
pub async fn send_response<W>(
    writer: &mut W,
    response: &ResponseBuilder,
) -> Result<Disposition>
where
    W: AsyncWrite + Unpin,
{
    let data = response.data()?;

    writer.write_all(data).await?;
    writer.flush().await?;
    debug!(bytes = data.len(), "message sent");

    if response.should_disconnect_after_send() {
        debug!("disconnecting after send");
        writer.shutdown().await?;
        return Ok(Disposition::Close);
    }

    Ok(Disposition::KeepAlive)
}

/// A stream paired with one builder that is reused for every message sent
/// on it.
pub struct Connection<S> {
    stream: S,
    response: ResponseBuilder,
    closed: bool,
}

impl<S> Connection<S>
where
    S: AsyncWrite + Unpin,
{
    pub fn new(stream: S) -> Result<Self> {
        Connection::with_config(stream, BuilderConfig::default())
    }

    pub fn with_config(stream: S, config: BuilderConfig) -> Result<Self> {
        let response = ResponseBuilder::with_config(config)?;

        Ok(Connection {
            stream,
            response,
            closed: false,
        })
    }

    /// Builder for the next message.
    pub fn response_mut(&mut self) -> &mut ResponseBuilder {
        &mut self.response
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub async fn send(&mut self) -> Result<Disposition> {
        if self.closed {
            return Err(std::io::ErrorKind::NotConnected.into());
        }

        match send_response(&mut self.stream, &self.response).await {
            Ok(disposition) => {
                self.closed = disposition == Disposition::Close;
                Ok(disposition)
            }
            Err(e) => {
                warn!(error = %e, "failed to send message");
                Err(e)
            }
        }
    }

    pub fn into_inner(self) -> S {
        self.stream
    }
}
