use std::collections::HashSet;
use std::sync::Arc;
use tinylink_generator::RandomGenerator;
use tinylink_shortener::{Shortener, ShortenerError, ShortenerService, ShortenerSettings};
use tinylink_storage::InMemoryRepository;

const DOMAIN_URL: &str = "http://localhost:5000";

fn service() -> ShortenerService<InMemoryRepository, RandomGenerator> {
    ShortenerService::new(
        InMemoryRepository::new(),
        RandomGenerator::new(),
        ShortenerSettings::builder().domain_url(DOMAIN_URL).build(),
    )
}

fn extract_id(short_url: &str) -> &str {
    short_url
        .strip_prefix(DOMAIN_URL)
        .and_then(|rest| rest.strip_prefix('/'))
        .expect("short url should start with the domain prefix")
}

fn is_url_safe(id: &str) -> bool {
    id.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[tokio::test]
async fn end_to_end_example() {
    let service = service();

    let short_url = service.shorten("https://example.com").await.unwrap();
    let id = extract_id(&short_url);

    assert_eq!(id.len(), 8);
    assert!(is_url_safe(id), "unexpected character in {id}");
    assert_eq!(short_url, format!("http://localhost:5000/{id}"));
    assert_eq!(service.resolve(id).await.unwrap(), "https://example.com");
}

#[tokio::test]
async fn round_trip_preserves_url_exactly() {
    let service = service();
    let urls = [
        "https://example.com",
        "https://example.com/",
        "http://localhost:8080/path?q=1&r=two#frag",
        "ftp://files.example.org/pub/file.tar.gz",
        "https://例え.jp/パス",
        "mailto:someone@example.com",
    ];

    for url in urls {
        let short_url = service.shorten(url).await.unwrap();
        let resolved = service.resolve(extract_id(&short_url)).await.unwrap();
        assert_eq!(resolved, url);
    }
}

#[tokio::test]
async fn same_url_gets_distinct_short_urls() {
    let service = service();

    let first = service.shorten("https://example.com").await.unwrap();
    let second = service.shorten("https://example.com").await.unwrap();

    assert_ne!(first, second);
    assert_eq!(
        service.resolve(extract_id(&first)).await.unwrap(),
        "https://example.com"
    );
    assert_eq!(
        service.resolve(extract_id(&second)).await.unwrap(),
        "https://example.com"
    );
}

#[tokio::test]
async fn unknown_key_is_not_found() {
    let service = service();

    let err = service.resolve("doesnotexist").await.unwrap_err();
    assert_eq!(err, ShortenerError::NotFound("doesnotexist".to_string()));
}

#[tokio::test]
async fn identifiers_are_unique_under_load() {
    let service = service();
    let mut ids = HashSet::new();

    for i in 0..5_000 {
        let short_url = service
            .shorten(&format!("https://example.com/{i}"))
            .await
            .unwrap();
        let id = extract_id(&short_url).to_owned();
        assert_eq!(id.len(), 8);
        assert!(is_url_safe(&id));
        ids.insert(id);
    }

    assert_eq!(ids.len(), 5_000);
    assert_eq!(service.repository().len(), 5_000);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_callers_never_see_mismatched_urls() {
    let service = Arc::new(service());
    let callers = 16;
    let per_caller = 200;

    let handles: Vec<_> = (0..callers)
        .map(|caller| {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                let mut issued: Vec<(String, String)> = Vec::with_capacity(per_caller);
                for n in 0..per_caller {
                    let url = format!("https://caller{caller}.example.com/{n}");
                    let short_url = service.shorten(&url).await.unwrap();
                    let id = extract_id(&short_url).to_owned();

                    assert_eq!(service.resolve(&id).await.unwrap(), url);

                    // Interleave a lookup of an earlier mapping from this caller.
                    if let Some((old_id, old_url)) = issued.get(n / 2) {
                        assert_eq!(&service.resolve(old_id).await.unwrap(), old_url);
                    }
                    issued.push((id, url));
                }
                issued
            })
        })
        .collect();

    let mut all_ids = HashSet::new();
    for handle in handles {
        for (id, url) in handle.await.unwrap() {
            assert_eq!(service.resolve(&id).await.unwrap(), url);
            all_ids.insert(id);
        }
    }

    assert_eq!(all_ids.len(), callers * per_caller);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn readers_racing_writers_see_absent_or_complete_entries() {
    let service = Arc::new(service());
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<(String, String)>();

    let writer = {
        let service = Arc::clone(&service);
        tokio::spawn(async move {
            for n in 0..1_000 {
                let url = format!("https://writer.example.com/{n}");
                let short_url = service.shorten(&url).await.unwrap();
                tx.send((extract_id(&short_url).to_owned(), url)).unwrap();
            }
        })
    };

    let reader = {
        let service = Arc::clone(&service);
        tokio::spawn(async move {
            let mut seen = 0;
            while let Some((id, url)) = rx.recv().await {
                match service.resolve(&id).await {
                    Ok(found) => assert_eq!(found, url),
                    Err(err) => panic!("published id {id} did not resolve: {err}"),
                }
                seen += 1;
            }
            seen
        })
    };

    writer.await.unwrap();
    assert_eq!(reader.await.unwrap(), 1_000);
}
