//! Continuation-following page accumulation.
//!
//! Every paginated App Annie resource answers with the same envelope shape:
//! `{ "code": int, "<entity_key>": [...], "next_page": string? }`. The
//! collector follows `next_page` pointers iteratively, appending each page's
//! entities to one accumulator, and stops on the first terminal condition.
//! Failures truncate rather than abort: whatever was accumulated before the
//! failure is returned.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;
use tracing::{debug, warn};

use crate::fetcher::FetcherResult;

/// Envelope status code that marks a usable page.
const SUCCESS_CODE: i64 = 200;

/// Maximum number of continuation hops to follow for one resource.
///
/// A continuation chain is opaque to the client, so a misbehaving API could
/// hand out pointers forever; the guard bounds the walk.
pub const MAX_PAGE_HOPS: usize = 10_000;

/// Collect every entity of a paginated resource.
///
/// `fetch_page` is called with the path of each page, starting at
/// `first_path` and continuing with whatever `next_page` pointer the
/// previous envelope carried.
///
/// Terminal conditions, in check order:
/// - the fetch itself failed (logged, accumulator returned as-is)
/// - the envelope status is not the success code (silent stop)
/// - the entity collection is absent or does not decode (logged stop)
/// - the envelope carries no continuation pointer (normal completion)
pub async fn collect_pages<T, F, Fut>(first_path: &str, entity_key: &str, mut fetch_page: F) -> Vec<T>
where
    T: DeserializeOwned,
    F: FnMut(String) -> Fut,
    Fut: Future<Output = FetcherResult<Value>>,
{
    let mut entities: Vec<T> = Vec::new();
    let mut next = Some(first_path.to_string());
    let mut hops = 0usize;

    while let Some(path) = next.take() {
        if hops >= MAX_PAGE_HOPS {
            warn!(
                "continuation chain for '{}' exceeded {} hops, returning partial data",
                entity_key, MAX_PAGE_HOPS
            );
            break;
        }
        hops += 1;

        let mut envelope = match fetch_page(path).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("page fetch for '{}' failed: {}", entity_key, e);
                break;
            }
        };

        let code = envelope.get("code").and_then(Value::as_i64);
        if code != Some(SUCCESS_CODE) {
            debug!("envelope status {:?} for '{}', stopping", code, entity_key);
            break;
        }

        let Some(items) = envelope.get_mut(entity_key).map(Value::take) else {
            debug!("envelope carries no '{}' collection, stopping", entity_key);
            break;
        };

        match serde_json::from_value::<Vec<T>>(items) {
            Ok(mut page) => {
                debug!("page {} added {} '{}' entities", hops, page.len(), entity_key);
                entities.append(&mut page);
            }
            Err(e) => {
                warn!("failed to decode '{}' entities: {}", entity_key, e);
                break;
            }
        }

        next = envelope
            .get("next_page")
            .and_then(Value::as_str)
            .map(str::to_owned);
    }

    debug!(
        "pagination for '{}' finished after {} page(s) with {} entities",
        entity_key,
        hops,
        entities.len()
    );
    entities
}
