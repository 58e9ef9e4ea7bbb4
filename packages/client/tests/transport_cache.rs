use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

use futures::future::BoxFuture;
use hostpool_client::cache::CacheStatsSnapshot;
use hostpool_client::error;
use hostpool_client::http::body;
use hostpool_client::{
    ClientSettings, HeaderSet, HttpRequest, HttpResponse, Result, SharedTransport, Transport,
    TransportCache,
};

struct Stub;

impl Transport for Stub {
    fn round_trip(&self, _: HttpRequest) -> BoxFuture<'static, Result<HttpResponse>> {
        Box::pin(async { Ok(http::Response::new(body::empty())) })
    }
}

fn counting_cache(builds: Arc<AtomicUsize>) -> TransportCache {
    TransportCache::with_factory(
        move |_: &ClientSettings| -> Result<SharedTransport> {
            builds.fetch_add(1, Ordering::SeqCst);
            thread::sleep(Duration::from_millis(20));
            Ok(Arc::new(Stub))
        },
        ClientSettings::default(),
    )
}

#[test]
fn concurrent_first_use_builds_one_transport() {
    const CALLERS: usize = 16;

    let builds = Arc::new(AtomicUsize::new(0));
    let cache = Arc::new(counting_cache(builds.clone()));
    let barrier = Arc::new(Barrier::new(CALLERS));

    let handles: Vec<_> = (0..CALLERS)
        .map(|i| {
            let cache = cache.clone();
            let barrier = barrier.clone();
            thread::spawn(move || {
                barrier.wait();
                cache
                    .client(&format!("https://auditr.io/v1/{i}"), None, HeaderSet::new())
                    .unwrap()
            })
        })
        .collect();
    let clients: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(builds.load(Ordering::SeqCst), 1);
    assert_eq!(cache.len(), 1);
    for client in &clients[1..] {
        assert!(Arc::ptr_eq(client.transport(), clients[0].transport()));
    }

    let stats = cache.stats();
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hits, CALLERS as u64 - 1);
    assert_eq!(stats.constructions, 1);
}

#[test]
fn malformed_urls_leave_cache_untouched() {
    let builds = Arc::new(AtomicUsize::new(0));
    let cache = counting_cache(builds.clone());

    for raw in [
        "",
        "auditr.io",
        "mailto:ops@auditr.io",
        "http://",
        "custom://a.example",
        "custom://b.example",
        "ws://auditr.io",
    ] {
        let err = cache.client(raw, None, HeaderSet::new()).unwrap_err();
        assert!(err.is_builder(), "{raw:?} gave {err}");
    }

    assert!(cache.is_empty());
    assert_eq!(builds.load(Ordering::SeqCst), 0);
    assert_eq!(cache.stats(), CacheStatsSnapshot::default());
}

#[test]
fn failed_construction_is_retried_later() {
    let attempts = Arc::new(AtomicUsize::new(0));
    let counter = attempts.clone();
    let cache = TransportCache::with_factory(
        move |_: &ClientSettings| -> Result<SharedTransport> {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(error::configuration("tls provider unavailable"))
            } else {
                Ok(Arc::new(Stub))
            }
        },
        ClientSettings::default(),
    );

    let err = cache.client("https://auditr.io", None, HeaderSet::new()).unwrap_err();
    assert!(err.is_configuration());
    assert!(!cache.contains("https://auditr.io"));

    cache.client("https://auditr.io", None, HeaderSet::new()).unwrap();
    assert!(cache.contains("https://auditr.io"));
    assert_eq!(attempts.load(Ordering::SeqCst), 2);
}

#[test]
fn supplied_transport_wins_only_on_first_use() {
    let builds = Arc::new(AtomicUsize::new(0));
    let cache = counting_cache(builds.clone());

    let first: SharedTransport = Arc::new(Stub);
    let client = cache
        .client("https://auditr.io", Some(first.clone()), HeaderSet::new())
        .unwrap();
    assert!(Arc::ptr_eq(client.transport(), &first));

    let second: SharedTransport = Arc::new(Stub);
    let client = cache
        .client("https://auditr.io/other", Some(second.clone()), HeaderSet::new())
        .unwrap();
    assert!(Arc::ptr_eq(client.transport(), &first));
    assert!(!Arc::ptr_eq(client.transport(), &second));

    assert_eq!(builds.load(Ordering::SeqCst), 0);
    assert_eq!(cache.stats().ignored_overrides, 1);
}

#[test]
fn origins_decide_sharing() {
    let builds = Arc::new(AtomicUsize::new(0));
    let cache = counting_cache(builds.clone());

    let a = cache.client("https://auditr.io/a?x=1", None, HeaderSet::new()).unwrap();
    let b = cache.client("https://auditr.io:443/b", None, HeaderSet::new()).unwrap();
    let c = cache.client("https://auditr.io:8443/a", None, HeaderSet::new()).unwrap();
    let d = cache.client("http://auditr.io/a", None, HeaderSet::new()).unwrap();

    assert!(Arc::ptr_eq(a.transport(), b.transport()));
    assert!(!Arc::ptr_eq(a.transport(), c.transport()));
    assert!(!Arc::ptr_eq(a.transport(), d.transport()));
    assert_eq!(builds.load(Ordering::SeqCst), 3);

    let cached = cache.get("https://auditr.io/anything").unwrap().unwrap();
    assert!(Arc::ptr_eq(&cached, a.transport()));
}

#[test]
fn default_cache_builds_http_transports_with_its_settings() {
    let settings = ClientSettings::default().with_max_host_idle_conns(4);
    let cache = TransportCache::with_settings(settings);
    assert_eq!(cache.settings(), &settings);

    let client = cache.client("https://auditr.io", None, HeaderSet::new()).unwrap();
    assert_eq!(client.host().as_str(), "https://auditr.io");
    assert_eq!(cache.stats().constructions, 1);
}
