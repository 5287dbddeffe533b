//! Cursor-following pagination driver.

use std::future::Future;

use augur_core::AugurError;

/// Drain a paged listing into one ordered collection.
///
/// `next_page` is called with no cursor first, then with each returned
/// continuation cursor verbatim, until the service stops returning one
/// (`None` and the empty string both end the enumeration). Pages are
/// appended in arrival order and a consumed page is never re-requested.
///
/// No iteration cap is imposed here: termination relies on the service
/// eventually returning an empty cursor.
pub(crate) async fn drain<T, F, Fut>(mut next_page: F) -> Result<Vec<T>, AugurError>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<(Vec<T>, Option<String>), AugurError>>,
{
    let mut items = Vec::new();
    let mut cursor: Option<String> = None;
    loop {
        let (page, continuation) = next_page(cursor.take()).await?;
        items.extend(page);
        match continuation {
            Some(next) if !next.is_empty() => cursor = Some(next),
            _ => return Ok(items),
        }
    }
}
