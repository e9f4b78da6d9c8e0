//! Filtering asynchronous record sources

use futures::stream::{self, StreamExt};
use sift::predicate::PredicateExt;
use sift::testing::Counting;
use sift::{sample_instruments, FilterStreamExt, InstrumentType, KindIs, Material, MaterialIs};

#[tokio::test]
async fn stream_of_instruments_filters_like_iterator() {
    let source = stream::iter(sample_instruments());
    let names: Vec<String> = source
        .filter_by(MaterialIs::new(Material::Metal).and(KindIs::new(InstrumentType::Wind)))
        .map(|i| i.name)
        .collect()
        .await;
    assert_eq!(names, vec!["Flute".to_string()]);
}

#[tokio::test]
async fn stream_pulls_only_what_the_consumer_asks_for() {
    let counting = Counting::new(MaterialIs::new(Material::Metal));
    let calls = counting.counter();

    let endless = stream::iter(sample_instruments()).cycle();
    let first_two: Vec<String> = endless
        .filter_by(counting)
        .take(2)
        .map(|i| i.name)
        .collect()
        .await;

    assert_eq!(first_two, vec!["Flute".to_string(), "Drums".to_string()]);
    assert_eq!(calls.get(), 3);
}

#[tokio::test]
async fn stream_of_borrowed_records() {
    let catalogue = sample_instruments();
    let wood: Vec<&str> = stream::iter(catalogue.iter())
        .filter_by(MaterialIs::new(Material::Wood))
        .map(|i| i.name.as_str())
        .collect()
        .await;
    assert_eq!(wood, vec!["Piano"]);
}

#[tokio::test]
async fn async_source_is_polled_through_the_filter() {
    let (tx, rx) = futures::channel::mpsc::unbounded();
    for instrument in sample_instruments() {
        tx.unbounded_send(instrument).unwrap();
    }
    drop(tx);

    let percussion: Vec<String> = rx
        .filter_by(KindIs::new(InstrumentType::Percussion))
        .map(|i| i.name)
        .collect()
        .await;
    assert_eq!(percussion, vec!["Drums".to_string()]);
}
