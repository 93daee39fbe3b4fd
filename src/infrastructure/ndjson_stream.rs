// Chunked NDJSON streaming utilities
use axum::body::Body;
use axum::http::{header, Response, StatusCode};
use axum::response::IntoResponse;
use bytes::{BufMut, Bytes, BytesMut};
use futures::stream::Stream;
use futures::StreamExt;
use serde::Serialize;
use tokio::sync::watch;

/// Create a chunked response carrying one JSON document per line
pub fn ndjson_stream<S, T>(stream: S) -> Result<Response<Body>, StatusCode>
where
    S: Stream<Item = T> + Send + 'static,
    T: Serialize + Send + 'static,
{
    let byte_stream = stream.map(|msg| serialize_line(&msg));

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/x-ndjson")
        .header(header::CACHE_CONTROL, "no-cache")
        .body(Body::from_stream(byte_stream))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

fn serialize_line<T: Serialize>(msg: &T) -> Result<Bytes, std::io::Error> {
    let json = serde_json::to_vec(msg).map_err(std::io::Error::other)?;
    let mut line = BytesMut::with_capacity(json.len() + 1);
    line.put_slice(&json);
    line.put_u8(b'\n');
    Ok(line.freeze())
}

/// The current value, then every later change until the sender goes away
pub fn watch_values<T>(mut rx: watch::Receiver<T>) -> impl Stream<Item = T>
where
    T: Clone + Send + Sync + 'static,
{
    async_stream::stream! {
        loop {
            let value = rx.borrow_and_update().clone();
            yield value;
            if rx.changed().await.is_err() {
                break;
            }
        }
    }
}

/// Helper to create a streaming response from a watch receiver
pub fn stream_from_watch<T>(rx: watch::Receiver<T>) -> impl IntoResponse
where
    T: Serialize + Clone + Send + Sync + 'static,
{
    match ndjson_stream(watch_values(rx)) {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_watch_values_yields_current_then_changes() {
        let (tx, rx) = watch::channel(1u32);
        let mut values = Box::pin(watch_values(rx));

        assert_eq!(values.next().await, Some(1));
        tx.send(2).unwrap();
        assert_eq!(values.next().await, Some(2));
        drop(tx);
        assert_eq!(values.next().await, None);
    }

    #[tokio::test]
    async fn test_lines_are_newline_terminated_json() {
        let stream = futures::stream::iter(vec![serde_json::json!({"a": 1}), serde_json::json!({"a": 2})]);
        let response = ndjson_stream(stream).unwrap();

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"{\"a\":1}\n{\"a\":2}\n");
    }
}
