//! Header sets injected into outbound requests

use http::header::Entry;
use http::{HeaderMap, HeaderName, HeaderValue};

use crate::error::{self, Result};

/// Headers a client adds to every request it sends.
///
/// Names map to ordered value sequences; a name with several values is sent
/// with all of them.
pub type HeaderSet = HeaderMap;

/// Overwrite every name in `extra` on `target` with `extra`'s values.
///
/// Names `target` carries that `extra` does not mention are left alone.
pub fn merge_headers(target: &mut HeaderMap, extra: &HeaderSet) {
    for name in extra.keys() {
        let mut values = extra.get_all(name).iter().cloned();
        let Some(first) = values.next() else {
            continue;
        };
        match target.entry(name.clone()) {
            Entry::Occupied(mut slot) => {
                slot.insert(first);
                for value in values {
                    slot.append(value);
                }
            }
            Entry::Vacant(slot) => {
                let mut slot = slot.insert_entry(first);
                for value in values {
                    slot.append(value);
                }
            }
        }
    }
}

/// Build a header set from string pairs; repeated names accumulate values.
///
/// # Errors
///
/// Returns a builder error naming the first invalid header name or value.
pub fn header_set<I, K, V>(pairs: I) -> Result<HeaderSet>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut headers = HeaderSet::new();
    for (name, value) in pairs {
        let name = HeaderName::from_bytes(name.as_ref().as_bytes()).map_err(error::builder)?;
        let value = HeaderValue::from_str(value.as_ref()).map_err(error::builder)?;
        headers.append(name, value);
    }
    Ok(headers)
}

#[cfg(test)]
mod tests {
    use http::header;

    use super::*;

    #[test]
    fn merge_replaces_all_values_for_named_headers() {
        let mut target = header_set([
            ("authorization", "Bearer old"),
            ("accept", "text/plain"),
            ("accept", "application/json"),
            ("x-request-id", "42"),
        ])
        .unwrap();
        let extra = header_set([
            ("authorization", "Bearer new"),
            ("accept", "application/xml"),
        ])
        .unwrap();

        merge_headers(&mut target, &extra);

        let auth: Vec<_> = target.get_all(header::AUTHORIZATION).iter().collect();
        assert_eq!(auth, ["Bearer new"]);
        let accept: Vec<_> = target.get_all(header::ACCEPT).iter().collect();
        assert_eq!(accept, ["application/xml"]);
        assert_eq!(target["x-request-id"], "42");
    }

    #[test]
    fn merge_keeps_multi_valued_extras_in_order() {
        let mut target = HeaderMap::new();
        let extra = header_set([("x-tag", "a"), ("x-tag", "b")]).unwrap();

        merge_headers(&mut target, &extra);

        let tags: Vec<_> = target.get_all("x-tag").iter().collect();
        assert_eq!(tags, ["a", "b"]);
    }

    #[test]
    fn invalid_header_name_is_a_builder_error() {
        let err = header_set([("bad header", "v")]).unwrap_err();
        assert!(err.is_builder());
    }
}
