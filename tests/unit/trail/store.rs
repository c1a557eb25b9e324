use super::*;

fn positions(store: &TrailStore) -> Vec<(f64, f64)> {
    store.iter().map(|p| (p.position.x, p.position.y)).collect()
}

#[test]
fn insert_evicts_exactly_the_oldest() {
    let mut store = TrailStore::new(4);
    for x in 0..5 {
        store.insert(Point::new(f64::from(x), 0.0), Rgb::WHITE);
    }
    assert_eq!(store.len(), 4);
    assert_eq!(
        positions(&store),
        vec![(4.0, 0.0), (3.0, 0.0), (2.0, 0.0), (1.0, 0.0)]
    );
}

#[test]
fn insert_never_exceeds_capacity() {
    let mut store = TrailStore::new(16);
    for i in 0..100 {
        store.insert(Point::new(f64::from(i), 1.0), Rgb::WHITE);
        assert!(store.len() <= 16);
    }
    let head = store.head().unwrap();
    assert_eq!(head.position, Point::new(99.0, 1.0));
    assert_eq!(head.alpha, 1.0);
    assert_eq!(head.age, 0.0);
}

#[test]
fn aging_for_the_full_fade_evicts_everything() {
    let mut store = TrailStore::new(32);
    for i in 0..20 {
        store.insert(Point::new(f64::from(i), 0.0), Rgb::WHITE);
    }
    let fade = 0.5;
    let dt = 1.0 / 60.0;
    let mut elapsed = 0.0;
    while elapsed < fade {
        store.age_all(dt, fade);
        elapsed += dt;
        for p in store.iter() {
            assert!(p.alpha >= ALPHA_EPSILON);
        }
    }
    assert!(store.is_empty());
}

#[test]
fn alpha_tracks_age_over_fade() {
    let mut store = TrailStore::new(8);
    store.insert(Point::ZERO, Rgb::WHITE);
    store.age_all(0.25, 1.0);
    let p = store.head().unwrap();
    assert!((p.age - 0.25).abs() < 1e-12);
    assert!((p.alpha - 0.75).abs() < 1e-6);
}

#[test]
fn aging_is_a_no_op_on_empty_store() {
    let mut store = TrailStore::new(8);
    store.age_all(1.0, 1.0);
    assert!(store.is_empty());
}

#[test]
fn end_to_end_insert_then_age_out() {
    let mut store = TrailStore::new(4);
    for x in 0..5 {
        store.insert(Point::new(f64::from(x), 0.0), Rgb::WHITE);
    }
    assert_eq!(
        positions(&store),
        vec![(4.0, 0.0), (3.0, 0.0), (2.0, 0.0), (1.0, 0.0)]
    );
    store.age_all(1.0, 1.0);
    assert!(store.is_empty());
}

#[test]
fn set_capacity_truncates_on_shrink_only() {
    let mut store = TrailStore::new(8);
    for i in 0..8 {
        store.insert(Point::new(f64::from(i), 0.0), Rgb::WHITE);
    }
    store.set_capacity(3);
    assert_eq!(store.len(), 3);
    assert_eq!(store.head().unwrap().position.x, 7.0);

    store.set_capacity(64);
    assert_eq!(store.len(), 3);
    assert_eq!(store.capacity(), 64);

    store.set_capacity(0);
    assert_eq!(store.capacity(), 1);
    store.set_capacity(10_000);
    assert_eq!(store.capacity(), MAX_CAPACITY);
}

#[test]
fn zero_fade_evicts_immediately() {
    let mut store = TrailStore::new(8);
    store.insert(Point::ZERO, Rgb::WHITE);
    store.age_all(0.0, 0.0);
    assert!(store.is_empty());
}
