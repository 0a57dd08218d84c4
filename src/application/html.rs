//! Weighted fake-content generator.
//!
//! Each call produces a throwaway HTML document whose size is drawn from a
//! weighted distribution, so downstream clients see a realistic mix of small
//! and occasionally very large bodies instead of uniform payloads.

use rand::{Rng, rngs::ThreadRng, seq::SliceRandom};

const WORDS: &[&str] = &[
    "connector", "sync", "index", "pipeline", "document", "space", "content", "storage",
    "attachment", "payload", "cursor", "batch", "schedule", "filter", "extract", "transform",
    "ingest", "record", "snapshot", "delta", "source", "target", "throughput", "latency",
    "retry", "checkpoint", "metadata", "fixture", "harness", "profile", "backend", "service",
];

/// Paragraph counts per size class with their selection weights (percent).
const SIZE_CLASSES: &[(usize, u32)] = &[(1, 58), (4, 30), (12, 10), (32, 2)];

const SENTENCES_PER_PARAGRAPH: std::ops::Range<usize> = 3..7;
const WORDS_PER_SENTENCE: std::ops::Range<usize> = 8..17;

#[derive(Debug, Default)]
pub struct WeightedHtmlProvider;

impl WeightedHtmlProvider {
    pub fn new() -> Self {
        Self
    }

    /// Generate one fake HTML document.
    pub fn html(&self) -> String {
        let mut rng = rand::thread_rng();
        let paragraphs = pick_paragraph_count(&mut rng);

        let mut body = String::new();
        for _ in 0..paragraphs {
            body.push_str("<p>");
            body.push_str(&paragraph(&mut rng));
            body.push_str("</p>");
        }

        format!("<html><head><title>{}</title></head><body>{body}</body></html>", sentence(&mut rng))
    }
}

fn pick_paragraph_count(rng: &mut ThreadRng) -> usize {
    let total: u32 = SIZE_CLASSES.iter().map(|(_, weight)| weight).sum();
    let mut roll = rng.gen_range(0..total);
    for (paragraphs, weight) in SIZE_CLASSES {
        if roll < *weight {
            return *paragraphs;
        }
        roll -= weight;
    }
    // Weights always sum to `total`, so the loop returns before this.
    SIZE_CLASSES[0].0
}

fn paragraph(rng: &mut ThreadRng) -> String {
    let sentences = rng.gen_range(SENTENCES_PER_PARAGRAPH);
    let mut out = String::new();
    for i in 0..sentences {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(&sentence(rng));
    }
    out
}

fn sentence(rng: &mut ThreadRng) -> String {
    let words = rng.gen_range(WORDS_PER_SENTENCE);
    let mut out = String::new();
    for i in 0..words {
        let word = WORDS.choose(rng).copied().unwrap_or("document");
        if i == 0 {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        } else {
            out.push(' ');
            out.push_str(word);
        }
    }
    out.push('.');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_wellformed_html_shell() {
        let provider = WeightedHtmlProvider::new();
        let html = provider.html();
        assert!(html.starts_with("<html><head><title>"));
        assert!(html.ends_with("</body></html>"));
        assert!(html.contains("<p>"));
    }

    #[test]
    fn successive_documents_differ() {
        let provider = WeightedHtmlProvider::new();
        let a = provider.html();
        let b = provider.html();
        // Random bodies collide with negligible probability.
        assert_ne!(a, b);
    }

    #[test]
    fn size_class_weights_cover_the_whole_range() {
        let total: u32 = SIZE_CLASSES.iter().map(|(_, weight)| weight).sum();
        assert_eq!(total, 100);
    }
}
