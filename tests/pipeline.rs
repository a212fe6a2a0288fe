use std::io::Write;
use std::time::Duration;

use proptest::prelude::*;

use wordfreq::chunker::chunk;
use wordfreq::fetch::{fetch_text, Source};
use wordfreq::formats::{ChartRenderer, TextChart};
use wordfreq::map::MapPartition;
use wordfreq::reduce::reduce;
use wordfreq::shuffle::shuffle;
use wordfreq::sort::top_n;
use wordfreq::tokenize::{join, tokenize};
use wordfreq::{MRController, MRParameters, WordCount, WordCounts};

/// Maps the chunks in the given order and runs shuffle and reduce over the result, on the
/// calling thread.
fn count_in_order(text: &str, num_chunks: usize, order: &[usize]) -> WordCounts {
    let chunks = chunk(&tokenize(text), num_chunks);
    let pairs = order.iter()
                     .flat_map(|&i| MapPartition::new(&WordCount, &chunks[i], i).run().unwrap());
    reduce(&WordCount, shuffle(pairs))
}

/// A text, a chunk count and a random processing order over the resulting chunks.
fn processing_order() -> impl Strategy<Value = (String, usize, Vec<usize>)> {
    ("[a-e .]{0,200}", 1usize..8).prop_flat_map(|(text, num_chunks)| {
        let n = chunk(&tokenize(&text), num_chunks).len();
        (Just(text), Just(num_chunks), Just((0..n).collect::<Vec<usize>>()).prop_shuffle())
    })
}

#[test]
fn test_file_to_chart() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "It is a truth universally acknowledged, that a single man").unwrap();
    writeln!(f, "in possession of a good fortune, must be in want of a wife.").unwrap();

    let text = fetch_text(&Source::File(f.path().to_path_buf()), Duration::from_secs(5)).unwrap();
    let params = MRParameters::new().set_concurrency(3).set_top_n(3);
    let counts = MRController::run(&WordCount, &params, &text).unwrap();

    assert_eq!(counts["a"], 4);
    assert_eq!(counts["in"], 2);
    assert_eq!(counts["of"], 2);
    assert_eq!(counts.values().sum::<u64>(), 23);

    let top = top_n(&counts, params.top_n);
    assert_eq!(top, vec![("a", 4), ("in", 2), ("of", 2)]);

    let mut out = Vec::new();
    TextChart::new(8, false).render(&mut out, &params.chart_title, &top).unwrap();
    let out = String::from_utf8(out).unwrap();
    assert_eq!(out.lines().next(), Some("Top 3 Most Frequent Words"));
    assert!(out.contains(" a | ████████ 4"));
}

#[test]
fn test_empty_document_renders_title_only() {
    let counts = MRController::run(&WordCount, &MRParameters::new(), "").unwrap();
    let top = top_n(&counts, 10);
    assert!(top.is_empty());

    let mut out = Vec::new();
    TextChart::new(20, false).render(&mut out, "Top 10 Most Frequent Words", &top).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Top 10 Most Frequent Words\n");
}

proptest! {
    #[test]
    fn test_chunk_order_does_not_change_counts((text, num_chunks, order) in processing_order()) {
        let in_order: Vec<usize> = (0..order.len()).collect();
        prop_assert_eq!(count_in_order(&text, num_chunks, &order),
                        count_in_order(&text, num_chunks, &in_order));
    }

    #[test]
    fn test_chunk_text_retokenizes_to_chunk(words in prop::collection::vec("[a-z0-9]{1,6}", 0..40),
                                            num_chunks in 1usize..6) {
        for c in chunk(&words, num_chunks) {
            prop_assert_eq!(tokenize(&join(&c)), c);
        }
    }
}
