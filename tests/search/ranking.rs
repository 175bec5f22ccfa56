//! Result ordering: score first, then recency.

use super::common::{blog_corpus, hit_ids, make_post};
use blognote::{parse_query, rank, score, search_posts, Post, SearchHit};

fn dated(id: &str, title: &str, content: &str, date: &str) -> Post {
    let mut post = make_post(id, title, content, &[]);
    post.date = date.to_string();
    post
}

#[test]
fn test_phrase_in_title_outranks_phrase_in_content() {
    let posts = vec![
        dated("content", "Other", "learning rust fast", "2024-06-01T00:00:00Z"),
        dated("title", "Learning Rust", "", "2020-01-01T00:00:00Z"),
    ];
    let hits = search_posts(&posts, r#""learning rust""#);
    assert_eq!(hit_ids(&hits), vec!["title", "content"]);
    assert!(hits[0].score > hits[1].score);
}

#[test]
fn test_verbatim_beats_fuzzy_within_a_field() {
    let q = parse_query("search");
    let exact = make_post("1", "search tips", "", &[]);
    let typo = make_post("2", "seerch tips", "", &[]);
    assert_eq!(score(&exact, &q), 7);
    assert_eq!(score(&typo, &q), 4);
}

#[test]
fn test_title_and_content_tiers_add() {
    let q = parse_query("rust");
    let post = make_post("1", "rust", "rust", &[]);
    assert_eq!(score(&post, &q), 7 + 2);
}

#[test]
fn test_equal_scores_newest_first() {
    let posts = vec![
        dated("2019", "rust", "", "2019-05-01T00:00:00Z"),
        dated("2024", "rust", "", "2024-05-01T00:00:00Z"),
        dated("2021", "rust", "", "2021-05-01"),
    ];
    let hits = search_posts(&posts, "rust");
    assert_eq!(hit_ids(&hits), vec!["2024", "2021", "2019"]);
}

#[test]
fn test_unparseable_dates_sort_after_real_ones() {
    let posts = vec![
        dated("broken", "rust", "", "вчера"),
        dated("old", "rust", "", "2001-01-01T00:00:00Z"),
        dated("empty", "rust", "", ""),
    ];
    let hits = search_posts(&posts, "rust");
    assert_eq!(hit_ids(&hits), vec!["old", "broken", "empty"]);
}

#[test]
fn test_typo_query_over_corpus() {
    let posts = blog_corpus();
    let hits = search_posts(&posts, "програмирование");
    // p1 and p5 tie on 5 (p1 is newer); p3 only hits through its content
    assert_eq!(hit_ids(&hits), vec!["p1", "p5", "p3"]);
    assert_eq!(hits.iter().map(|h| h.score).collect::<Vec<_>>(), vec![5, 5, 1]);
}

#[test]
fn test_rank_is_stable_for_full_ties() {
    let a = dated("a", "x", "", "2024-01-01");
    let b = dated("b", "x", "", "2024-01-01");
    let c = dated("c", "x", "", "2024-01-01");
    let mut hits = vec![
        SearchHit { post: &b, score: 1 },
        SearchHit { post: &a, score: 1 },
        SearchHit { post: &c, score: 1 },
    ];
    rank(&mut hits);
    assert_eq!(hit_ids(&hits), vec!["b", "a", "c"]);
}
