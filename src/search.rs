use serde::Serialize;

use crate::{
    compose::format_citation,
    error::Result,
    pipeline::Pipeline,
    text_util::{collapse_whitespace, truncate_chars},
};

/// Characters of chunk text shown per hit in human output.
const PREVIEW_CHARS: usize = 120;

/// One ranked chunk as listed by `docbrief search`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub rank: usize,
    pub score: f64,
    pub document_id: String,
    pub page_number: u32,
    /// Character offset of the chunk within its page.
    pub start_offset: usize,
    pub citation: String,
    pub snippet: String,
}

#[derive(Serialize)]
struct SearchReport<'a> {
    query: &'a str,
    result_count: usize,
    results: &'a [SearchHit],
}

/// Rank chunks for `query` without composing a report.
///
/// Unlike `ask`, hits are not deduplicated.
pub fn execute_search(
    pipeline: &Pipeline,
    query: &str,
    count: usize,
) -> Vec<SearchHit> {
    let snippet_chars = pipeline.composer().settings().snippet_chars;

    pipeline
        .retrieve(query, Some(count))
        .iter()
        .enumerate()
        .map(|(i, hit)| SearchHit {
            rank: i + 1,
            score: hit.score,
            document_id: hit.chunk.document_id.clone(),
            page_number: hit.chunk.page_number,
            start_offset: hit.chunk.start_offset,
            citation: format_citation(
                &hit.chunk.document_id,
                hit.chunk.page_number,
            ),
            snippet: collapse_whitespace(truncate_chars(
                &hit.chunk.text,
                snippet_chars,
            )),
        })
        .collect()
}

/// Format results for human-readable terminal output.
pub fn format_human(results: &[SearchHit]) -> String {
    if results.is_empty() {
        return "No results found.".to_string();
    }

    let mut out = String::new();
    for r in results {
        out.push_str(&format!(
            "{:>3}. [{:.3}] {}\n",
            r.rank, r.score, r.citation
        ));
        let preview = truncate_chars(&r.snippet, PREVIEW_CHARS);
        if preview.len() < r.snippet.len() {
            out.push_str(&format!("     {preview}...\n"));
        } else {
            out.push_str(&format!("     {preview}\n"));
        }
    }
    out.push_str(&format!("\n{} result(s)", results.len()));
    out
}

/// Format results as a JSON document.
pub fn format_json(results: &[SearchHit], query: &str) -> Result<String> {
    let report = SearchReport {
        query,
        result_count: results.len(),
        results,
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
