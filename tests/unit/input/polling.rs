use super::*;
use crate::input::feed::PositionFeed;

#[test]
fn forwards_only_changed_positions() {
    let (tx, feed) = PositionFeed::channel();
    let mut calls = 0u32;
    let probe = move || {
        calls += 1;
        // Two distinct positions, each reported several times.
        Some(if calls < 4 {
            Point::new(10.0, 10.0)
        } else {
            Point::new(20.0, 5.0)
        })
    };
    let mut poller = PollingSource::spawn(probe, tx, Duration::from_millis(1)).unwrap();

    let first = feed.recv_timeout(Duration::from_secs(2)).unwrap();
    let second = feed.recv_timeout(Duration::from_secs(2)).unwrap();
    poller.stop();

    assert_eq!(first.position, Point::new(10.0, 10.0));
    assert_eq!(second.position, Point::new(20.0, 5.0));
    assert_eq!(first.source, SourceKind::Poll);
    assert_eq!(feed.drain().count(), 0);
    assert!(!poller.is_running());
}

#[test]
fn unavailable_probe_sends_nothing() {
    let (tx, feed) = PositionFeed::channel();
    let mut poller =
        PollingSource::spawn(|| None::<Point>, tx, Duration::from_millis(1)).unwrap();
    assert!(feed.recv_timeout(Duration::from_millis(30)).is_none());
    poller.stop();
}

#[test]
fn exits_when_feed_is_dropped() {
    let (tx, feed) = PositionFeed::channel();
    let mut n = 0.0;
    let poller = PollingSource::spawn(
        move || {
            n += 1.0;
            Some(Point::new(n, n))
        },
        tx,
        Duration::from_millis(1),
    )
    .unwrap();
    drop(feed);

    let deadline = std::time::Instant::now() + Duration::from_secs(2);
    while poller.is_running() && std::time::Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(2));
    }
    assert!(!poller.is_running());
}
