//! Which posts come back for a query, over the shared blog corpus.

use super::common::{blog_corpus, hit_ids, make_post};
use blognote::{matches, parse_query, search_posts, ParsedQuery};

#[test]
fn test_blank_query_returns_nothing() {
    let posts = blog_corpus();
    assert!(search_posts(&posts, "").is_empty());
    assert!(search_posts(&posts, "    ").is_empty());
    assert!(search_posts(&posts, "!!!").is_empty());
}

#[test]
fn test_plain_word() {
    let posts = blog_corpus();
    let hits = search_posts(&posts, "rust");
    assert_eq!(hit_ids(&hits), vec!["p1"]);
    // Verbatim in title, nothing in content
    assert_eq!(hits[0].score, 7);
}

#[test]
fn test_tag_term() {
    let posts = blog_corpus();
    let hits = search_posts(&posts, "#rust");
    assert_eq!(hit_ids(&hits), vec!["p1"]);
    assert_eq!(hits[0].score, 5);
}

#[test]
fn test_exact_phrase_in_title_and_content() {
    let posts = blog_corpus();
    let hits = search_posts(&posts, r#""hello world""#);
    assert_eq!(hit_ids(&hits), vec!["p4"]);
    assert_eq!(hits[0].score, 13);
}

#[test]
fn test_exact_phrase_in_content_only() {
    let posts = blog_corpus();
    let hits = search_posts(&posts, r#""Borrow Checker""#);
    assert_eq!(hit_ids(&hits), vec!["p1"]);
    assert_eq!(hits[0].score, 3);
}

#[test]
fn test_case_does_not_matter() {
    let posts = blog_corpus();
    let upper = search_posts(&posts, "HELLO");
    let lower = search_posts(&posts, "hello");
    assert_eq!(hit_ids(&upper), vec!["p4"]);
    assert_eq!(upper, lower);
    assert_eq!(upper[0].score, 9);
}

#[test]
fn test_terms_are_anded() {
    let posts = blog_corpus();
    assert!(search_posts(&posts, "rust борщ").is_empty());
    assert!(search_posts(&posts, "#rust #еда").is_empty());
}

#[test]
fn test_tag_and_word_together() {
    let posts = blog_corpus();
    let hits = search_posts(&posts, "#еда борщ");
    assert_eq!(hit_ids(&hits), vec!["p3"]);
    // Tag 5, "борщ" verbatim inside the title's "борща" 7
    assert_eq!(hits[0].score, 12);
}

#[test]
fn test_untagged_post_never_passes_a_tag_term() {
    let post = make_post("1", "anything", "anything", &[]);
    assert!(!matches(&post, &parse_query("#anything")));
}

#[test]
fn test_empty_query_matches_every_post() {
    let q = ParsedQuery::default();
    for post in blog_corpus() {
        assert!(matches(&post, &q), "post {} should match the empty query", post.id);
    }
}

#[test]
fn test_phrase_needs_contiguous_text() {
    let posts = vec![
        make_post("split", "hello there", "big world", &[]),
        make_post("joined", "", "hello world", &[]),
    ];
    let hits = search_posts(&posts, r#""hello world""#);
    assert_eq!(hit_ids(&hits), vec!["joined"]);
}

#[test]
fn test_regression_fixture() {
    let posts = vec![make_post("1", "foo bar", "a search result", &["news"])];
    let hits = search_posts(&posts, r#""foo bar" #news search"#);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].score, 17);
}

#[test]
fn test_hits_borrow_from_input() {
    let posts = blog_corpus();
    let hits = search_posts(&posts, "rust");
    assert!(std::ptr::eq(hits[0].post, &posts[0]));
}
