//! Turning ranked hits into a sectioned, citation-tagged report.
//!
//! The composer never writes content of its own: every bullet is a quoted
//! slice of a retrieved chunk followed by its citation, and any section with
//! nothing to show says so explicitly. Grouping into sections is plain
//! keyword membership behind the [`Classifier`] trait, so a missing keyword
//! means a missing bullet.

use std::{
    collections::{BTreeSet, HashSet},
    fmt,
};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    retrieval::ScoredHit,
    text_util::{collapse_whitespace, truncate_chars},
};

pub const DEFAULT_SAFETY_NOTICE: &str = "Clinical decision support only (assistive, not diagnostic). \
     Final clinical decisions must be made by a licensed physician.";

pub const DEFAULT_SUMMARY_NOTE: &str = "Summary is based on extracted passages below (assistive; not a final diagnosis).";

/// Maximum number of characters in a rendered snippet.
pub const DEFAULT_SNIPPET_MAX_CHARS: usize = 400;

/// Characters of chunk text used to detect overlapping duplicates.
pub const DEFAULT_DEDUP_PREFIX_CHARS: usize = 80;

/// Maximum bullets per classified section.
pub const DEFAULT_CATEGORY_CAP: usize = 6;

/// Maximum bullets in the references section.
pub const DEFAULT_REFERENCE_CAP: usize = 10;

const RED_FLAG_KEYWORDS: &[&str] = &[
    "red flag",
    "hypotension",
    "syncope",
    "shock",
    "altered",
    "cyanosis",
    "hemoptysis",
    "chest pain",
];

const DIFFERENTIAL_KEYWORDS: &[&str] = &[
    "differential",
    "asthma",
    "copd",
    "pneumonia",
    "pe",
    "pulmonary embol",
    "heart failure",
    "acs",
    "pneumothorax",
    "anxiety",
];

const WORKUP_KEYWORDS: &[&str] = &[
    "ecg",
    "troponin",
    "x-ray",
    "ct",
    "d-dimer",
    "abg",
    "vbg",
    "labs",
    "imaging",
    "ultrasound",
    "spo2",
    "pulse oximetry",
];

const MANAGEMENT_KEYWORDS: &[&str] = &[
    "oxygen",
    "bronchodilator",
    "nebul",
    "antibiotic",
    "anticoag",
    "diuretic",
    "steroid",
    "epinephrine",
    "intub",
    "ventilation",
];

/// Supported output locales. Only headings differ between them.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ar,
}

impl Locale {
    /// Parse a locale selector, falling back to [`Locale::En`] for anything
    /// unrecognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use docbrief::compose::Locale;
    ///
    /// assert_eq!(Locale::parse_lenient("AR"), Locale::Ar);
    /// assert_eq!(Locale::parse_lenient("fr"), Locale::En);
    /// ```
    pub fn parse_lenient(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "default" => Self::En,
            "ar" | "alternate" => Self::Ar,
            other => {
                debug!(selector = other, "unknown locale, using en");
                Self::En
            }
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Heading text for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleStrings {
    pub title: String,
    pub summary: String,
    pub red_flags: String,
    pub differential: String,
    pub workup: String,
    pub management: String,
    pub references: String,
    pub not_found: String,
}

impl LocaleStrings {
    pub fn english() -> Self {
        Self {
            title: "Assistive answer (ONLY from uploaded sources)".into(),
            summary: "Clinical Summary".into(),
            red_flags: "Red Flags (Must-Not-Miss)".into(),
            differential: "Differential Diagnosis (Ranked)".into(),
            workup: "Recommended Initial Workup".into(),
            management: "Initial Management".into(),
            references: "Supporting Extracts (with citations)".into(),
            not_found: "Not found in the provided references".into(),
        }
    }

    pub fn arabic() -> Self {
        Self {
            title: "إجابة داعمة (من المصادر المرفوعة فقط)".into(),
            summary: "ملخص سريري".into(),
            red_flags: "إنذارات خطر".into(),
            differential: "تشخيصات تفريقية (مرتبة)".into(),
            workup: "فحوصات/تقييم أولي".into(),
            management: "تدبير أولي".into(),
            references: "المراجع (مقاطع داعمة)".into(),
            not_found: "غير موجود في المصادر المرفوعة".into(),
        }
    }

    fn heading(&self, kind: SectionKind) -> &str {
        match kind {
            SectionKind::Summary => &self.summary,
            SectionKind::RedFlags => &self.red_flags,
            SectionKind::Differential => &self.differential,
            SectionKind::Workup => &self.workup,
            SectionKind::Management => &self.management,
            SectionKind::References => &self.references,
        }
    }
}

/// Heading tables for every supported locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocaleTable {
    pub en: LocaleStrings,
    pub ar: LocaleStrings,
}

impl Default for LocaleTable {
    fn default() -> Self {
        Self {
            en: LocaleStrings::english(),
            ar: LocaleStrings::arabic(),
        }
    }
}

impl LocaleTable {
    pub fn get(&self, locale: Locale) -> &LocaleStrings {
        match locale {
            Locale::En => &self.en,
            Locale::Ar => &self.ar,
        }
    }
}

/// Semantic buckets a snippet can be filed under.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    RedFlags,
    Differential,
    Workup,
    Management,
}

impl Category {
    /// Render order.
    pub const ALL: [Category; 4] = [
        Self::RedFlags,
        Self::Differential,
        Self::Workup,
        Self::Management,
    ];

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::RedFlags => RED_FLAG_KEYWORDS,
            Self::Differential => DIFFERENTIAL_KEYWORDS,
            Self::Workup => WORKUP_KEYWORDS,
            Self::Management => MANAGEMENT_KEYWORDS,
        }
    }

    /// Noun used in the per-section "not found" line.
    fn statement_kind(self) -> &'static str {
        match self {
            Self::RedFlags => "red-flag",
            Self::Differential => "DDx",
            Self::Workup => "workup",
            Self::Management => "management",
        }
    }

    fn section(self) -> SectionKind {
        match self {
            Self::RedFlags => SectionKind::RedFlags,
            Self::Differential => SectionKind::Differential,
            Self::Workup => SectionKind::Workup,
            Self::Management => SectionKind::Management,
        }
    }
}

/// Decides which sections a snippet belongs to.
pub trait Classifier {
    /// Categories for one rendered snippet line. May be empty.
    fn classify(&self, snippet: &str) -> BTreeSet<Category>;
}

/// Case-insensitive substring matching against fixed keyword lists.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    rules: Vec<(Category, Vec<String>)>,
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new(
            Category::ALL
                .iter()
                .map(|&c| (c, c.keywords().iter().map(|k| k.to_string()))),
        )
    }
}

impl KeywordClassifier {
    pub fn new<I, K>(rules: I) -> Self
    where
        I: IntoIterator<Item = (Category, K)>,
        K: IntoIterator<Item = String>,
    {
        let rules = rules
            .into_iter()
            .map(|(category, keywords)| {
                let keywords =
                    keywords.into_iter().map(|k| k.to_lowercase()).collect();
                (category, keywords)
            })
            .collect();
        Self { rules }
    }
}

impl Classifier for KeywordClassifier {
    fn classify(&self, snippet: &str) -> BTreeSet<Category> {
        let lower = snippet.to_lowercase();
        self.rules
            .iter()
            .filter(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
            .map(|(category, _)| *category)
            .collect()
    }
}

/// A quoted, cited excerpt of one retrieved chunk.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snippet {
    pub document_id: String,
    pub page_number: u32,
    pub score: f64,
    /// At most `snippet_chars` characters, whitespace collapsed.
    pub text: String,
}

impl Snippet {
    /// `[<document_id> p.<page_number>]`
    pub fn citation(&self) -> String {
        format_citation(&self.document_id, self.page_number)
    }

    /// Snippet text followed by its citation.
    pub fn line(&self) -> String {
        format!("{} {}", self.text, self.citation())
    }
}

/// Format a citation marker.
///
/// # Examples
///
/// ```
/// use docbrief::compose::format_citation;
///
/// assert_eq!(format_citation("guideline.pdf", 12), "[guideline.pdf p.12]");
/// ```
pub fn format_citation(document_id: &str, page_number: u32) -> String {
    format!("[{document_id} p.{page_number}]")
}

/// Tunables for the composer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerSettings {
    pub safety_notice: String,
    pub summary_note: String,
    pub snippet_chars: usize,
    pub dedup_prefix_chars: usize,
    pub category_cap: usize,
    pub reference_cap: usize,
}

impl Default for ComposerSettings {
    fn default() -> Self {
        Self {
            safety_notice: DEFAULT_SAFETY_NOTICE.to_string(),
            summary_note: DEFAULT_SUMMARY_NOTE.to_string(),
            snippet_chars: DEFAULT_SNIPPET_MAX_CHARS,
            dedup_prefix_chars: DEFAULT_DEDUP_PREFIX_CHARS,
            category_cap: DEFAULT_CATEGORY_CAP,
            reference_cap: DEFAULT_REFERENCE_CAP,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Summary,
    RedFlags,
    Differential,
    Workup,
    Management,
    References,
}

/// One `##` section of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub heading: String,
    /// Bullet texts without the leading `- `.
    pub items: Vec<String>,
    /// Whether `items` holds the locale's placeholder instead of content.
    pub not_found: bool,
}

/// A fully composed report. Render with `Display`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    pub locale: Locale,
    pub title: String,
    pub question: String,
    pub safety_notice: String,
    pub sections: Vec<Section>,
}

impl Answer {
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// True when nothing in the corpus matched the question.
    pub fn is_empty(&self) -> bool {
        self.section(SectionKind::References)
            .is_none_or(|s| s.not_found)
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "**Question:** {}", self.question)?;
        writeln!(f)?;
        write!(f, "**Safety notice:** {}", self.safety_notice)?;

        for section in &self.sections {
            // Blank line between blocks, none after the last.
            writeln!(f)?;
            writeln!(f)?;
            write!(f, "## {}", section.heading)?;
            for item in &section.items {
                write!(f, "\n- {item}")?;
            }
        }
        Ok(())
    }
}

/// Builds [`Answer`]s from ranked hits.
#[derive(Debug, Clone)]
pub struct Composer<C = KeywordClassifier> {
    settings: ComposerSettings,
    locales: LocaleTable,
    classifier: C,
}

impl Default for Composer {
    fn default() -> Self {
        Self::new(ComposerSettings::default(), LocaleTable::default())
    }
}

impl Composer {
    pub fn new(settings: ComposerSettings, locales: LocaleTable) -> Self {
        Self::with_classifier(settings, locales, KeywordClassifier::default())
    }
}

impl<C: Classifier> Composer<C> {
    pub fn with_classifier(
        settings: ComposerSettings,
        locales: LocaleTable,
        classifier: C,
    ) -> Self {
        Self {
            settings,
            locales,
            classifier,
        }
    }

    pub fn settings(&self) -> &ComposerSettings {
        &self.settings
    }

    /// Deduplicate and trim hits into snippets, keeping rank order.
    ///
    /// A hit is dropped when its document, page and the first
    /// `dedup_prefix_chars` characters of its text match an earlier hit.
    pub fn snippets(&self, hits: &[ScoredHit<'_>]) -> Vec<Snippet> {
        let mut seen: HashSet<(&str, u32, &str)> = HashSet::new();
        let mut snippets = Vec::new();

        for hit in hits {
            let chunk = hit.chunk;
            let key = (
                chunk.document_id.as_str(),
                chunk.page_number,
                truncate_chars(&chunk.text, self.settings.dedup_prefix_chars),
            );
            if !seen.insert(key) {
                continue;
            }

            let text = collapse_whitespace(truncate_chars(
                &chunk.text,
                self.settings.snippet_chars,
            ));
            snippets.push(Snippet {
                document_id: chunk.document_id.clone(),
                page_number: chunk.page_number,
                score: hit.score,
                text,
            });
        }

        snippets
    }

    /// Compose the report for `question` from ranked `hits`.
    pub fn compose(
        &self,
        question: &str,
        hits: &[ScoredHit<'_>],
        locale: Locale,
    ) -> Answer {
        let strings = self.locales.get(locale);
        let mut answer = Answer {
            locale,
            title: strings.title.clone(),
            question: question.to_string(),
            safety_notice: self.settings.safety_notice.clone(),
            sections: Vec::with_capacity(6),
        };

        if hits.is_empty() {
            let placeholder = format!("{}.", strings.not_found);
            for kind in [SectionKind::Summary, SectionKind::References] {
                answer.sections.push(Section {
                    kind,
                    heading: strings.heading(kind).to_string(),
                    items: vec![placeholder.clone()],
                    not_found: true,
                });
            }
            return answer;
        }

        let lines: Vec<String> =
            self.snippets(hits).iter().map(Snippet::line).collect();
        let mut grouped = self.group(&lines);

        answer.sections.push(Section {
            kind: SectionKind::Summary,
            heading: strings.summary.clone(),
            items: vec![self.settings.summary_note.clone()],
            not_found: false,
        });

        for category in Category::ALL {
            let kind = category.section();
            let items = std::mem::take(&mut grouped[category as usize]);
            let section = if items.is_empty() {
                Section {
                    kind,
                    heading: strings.heading(kind).to_string(),
                    items: vec![format!(
                        "{} for explicit {} statements in top matches.",
                        strings.not_found,
                        category.statement_kind()
                    )],
                    not_found: true,
                }
            } else {
                Section {
                    kind,
                    heading: strings.heading(kind).to_string(),
                    items,
                    not_found: false,
                }
            };
            answer.sections.push(section);
        }

        answer.sections.push(Section {
            kind: SectionKind::References,
            heading: strings.references.clone(),
            items: lines
                .into_iter()
                .take(self.settings.reference_cap)
                .collect(),
            not_found: false,
        });

        answer
    }

    /// File each line under every category it matches, in line order, up to
    /// `category_cap` per category. Indexed by `Category as usize`.
    fn group(&self, lines: &[String]) -> [Vec<String>; 4] {
        let cap = self.settings.category_cap;
        let mut grouped: [Vec<String>; 4] = Default::default();

        for line in lines {
            if grouped.iter().all(|g| g.len() >= cap) {
                break;
            }
            for category in self.classifier.classify(line) {
                let bucket = &mut grouped[category as usize];
                if bucket.len() < cap {
                    bucket.push(line.clone());
                }
            }
        }

        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        chunking::Chunk,
        text_util::tokenize,
    };

    fn chunk(doc: &str, page: u32, text: &str) -> Chunk {
        Chunk {
            document_id: doc.to_string(),
            page_number: page,
            text: text.to_string(),
            tokens: tokenize(text),
            start_offset: 0,
        }
    }

    fn hits(chunks: &[Chunk]) -> Vec<ScoredHit<'_>> {
        chunks
            .iter()
            .enumerate()
            .map(|(i, chunk)| ScoredHit {
                score: 10.0 - i as f64,
                chunk,
            })
            .collect()
    }

    fn composer() -> Composer {
        Composer::default()
    }

    fn items(answer: &Answer, kind: SectionKind) -> Vec<String> {
        answer.section(kind).map(|s| s.items.clone()).unwrap_or_default()
    }

    #[test]
    fn empty_hits_render_only_fallbacks() {
        let answer = composer().compose("dyspnea?", &[], Locale::En);

        let kinds: Vec<_> = answer.sections.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, [SectionKind::Summary, SectionKind::References]);
        assert!(answer.is_empty());

        let text = answer.to_string();
        assert_eq!(
            text.matches("Not found in the provided references").count(),
            2
        );
        assert!(text.ends_with(
            "## Supporting Extracts (with citations)\n- Not found in the provided references."
        ));
        assert!(!text.contains("Red Flags"));
    }

    #[test]
    fn renders_full_layout() {
        let chunks = [chunk("guideline.pdf", 12, "Give oxygen if SpO2 is low.")];
        let answer =
            composer().compose("Adult SOB", &hits(&chunks), Locale::En);
        let text = answer.to_string();

        let expected = "\
# Assistive answer (ONLY from uploaded sources)

**Question:** Adult SOB

**Safety notice:** Clinical decision support only (assistive, not diagnostic). Final clinical decisions must be made by a licensed physician.

## Clinical Summary
- Summary is based on extracted passages below (assistive; not a final diagnosis).

## Red Flags (Must-Not-Miss)
- Not found in the provided references for explicit red-flag statements in top matches.

## Differential Diagnosis (Ranked)
- Not found in the provided references for explicit DDx statements in top matches.

## Recommended Initial Workup
- Give oxygen if SpO2 is low. [guideline.pdf p.12]

## Initial Management
- Give oxygen if SpO2 is low. [guideline.pdf p.12]

## Supporting Extracts (with citations)
- Give oxygen if SpO2 is low. [guideline.pdf p.12]";
        assert_eq!(text, expected);
    }

    #[test]
    fn snippet_in_multiple_sections_once_in_references() {
        let chunks = [
            chunk("a.pdf", 1, "Check troponin and give oxygen."),
            chunk("a.pdf", 1, "Check troponin and give oxygen."),
        ];
        let answer =
            composer().compose("q", &hits(&chunks), Locale::En);
        let line = "Check troponin and give oxygen. [a.pdf p.1]".to_string();

        assert_eq!(items(&answer, SectionKind::Workup), [line.clone()]);
        assert_eq!(items(&answer, SectionKind::Management), [line.clone()]);
        assert_eq!(items(&answer, SectionKind::References), [line]);
    }

    #[test]
    fn dedup_uses_document_page_and_prefix() {
        let prefix = "x".repeat(80);
        let chunks = [
            chunk("a.pdf", 1, &format!("{prefix} first tail")),
            chunk("a.pdf", 1, &format!("{prefix} second tail")),
            chunk("a.pdf", 2, &format!("{prefix} first tail")),
            chunk("b.pdf", 1, &format!("{prefix} first tail")),
        ];
        let snippets = composer().snippets(&hits(&chunks));
        let origins: Vec<_> = snippets
            .iter()
            .map(|s| (s.document_id.as_str(), s.page_number))
            .collect();
        assert_eq!(origins, [("a.pdf", 1), ("a.pdf", 2), ("b.pdf", 1)]);
    }

    #[test]
    fn snippets_are_truncated_and_collapsed() {
        let text = format!("alpha\n\nbeta   gamma {}", "z".repeat(500));
        let chunks = [chunk("a.pdf", 3, &text)];
        let snippets = composer().snippets(&hits(&chunks));

        assert_eq!(snippets.len(), 1);
        assert!(snippets[0].text.starts_with("alpha beta gamma z"));
        // 400 chars with two whitespace runs collapsed.
        assert_eq!(snippets[0].text.chars().count(), 400 - 1 - 2);
        assert_eq!(snippets[0].citation(), "[a.pdf p.3]");
    }

    #[test]
    fn category_cap_limits_each_section() {
        let chunks: Vec<Chunk> = (1..=9)
            .map(|p| chunk("a.pdf", p, &format!("syncope case {p}")))
            .collect();
        let answer =
            composer().compose("q", &hits(&chunks), Locale::En);

        let red = items(&answer, SectionKind::RedFlags);
        assert_eq!(red.len(), DEFAULT_CATEGORY_CAP);
        assert!(red[0].ends_with("[a.pdf p.1]"));
        assert_eq!(items(&answer, SectionKind::References).len(), 9);
    }

    #[test]
    fn references_capped_at_ten() {
        let chunks: Vec<Chunk> = (1..=14)
            .map(|p| chunk("a.pdf", p, &format!("note {p}")))
            .collect();
        let answer =
            composer().compose("q", &hits(&chunks), Locale::En);
        let refs = items(&answer, SectionKind::References);

        assert_eq!(refs.len(), DEFAULT_REFERENCE_CAP);
        for (i, line) in refs.iter().enumerate() {
            assert!(line.ends_with(&format!("[a.pdf p.{}]", i + 1)));
        }
    }

    #[test]
    fn keyword_match_is_case_insensitive_substring() {
        let classifier = KeywordClassifier::default();
        let got = classifier.classify("Consider PULMONARY EMBOLISM; ECG.");
        assert!(got.contains(&Category::Differential));
        assert!(got.contains(&Category::Workup));
        assert!(!got.contains(&Category::Management));
        assert!(classifier.classify("nothing relevant").is_empty());
    }

    #[test]
    fn custom_classifier_is_used() {
        struct Everything;
        impl Classifier for Everything {
            fn classify(&self, _snippet: &str) -> BTreeSet<Category> {
                Category::ALL.into_iter().collect()
            }
        }

        let composer = Composer::with_classifier(
            ComposerSettings::default(),
            LocaleTable::default(),
            Everything,
        );
        let chunks = [chunk("a.pdf", 1, "plain text")];
        let answer = composer.compose("q", &hits(&chunks), Locale::En);
        assert!(answer.sections.iter().all(|s| !s.not_found));
    }

    #[test]
    fn alternate_locale_changes_headings_only() {
        let chunks = [chunk("a.pdf", 1, "oxygen")];
        let en = composer().compose("q", &hits(&chunks), Locale::En);
        let ar = composer().compose("q", &hits(&chunks), Locale::Ar);

        assert_eq!(ar.title, LocaleStrings::arabic().title);
        assert_eq!(
            items(&en, SectionKind::Management),
            items(&ar, SectionKind::Management)
        );
        assert!(ar.to_string().contains("## تدبير أولي"));
    }

    #[test]
    fn unknown_locale_falls_back_to_english() {
        assert_eq!(Locale::parse_lenient("xx"), Locale::En);
        assert_eq!(Locale::parse_lenient(" alternate "), Locale::Ar);
        assert_eq!(Locale::parse_lenient(""), Locale::En);
    }

    #[test]
    fn every_reference_ends_with_its_citation() {
        let chunks = [
            chunk("one.pdf", 4, "shock and hypotension"),
            chunk("two.txt", 1, "asthma exacerbation"),
        ];
        let answer =
            composer().compose("q", &hits(&chunks), Locale::En);
        let refs = items(&answer, SectionKind::References);
        assert!(refs[0].ends_with("[one.pdf p.4]"));
        assert!(refs[1].ends_with("[two.txt p.1]"));
    }

    #[test]
    fn composing_is_deterministic() {
        let chunks = [
            chunk("a.pdf", 1, "chest pain with syncope; obtain ECG"),
            chunk("a.pdf", 2, "start bronchodilator"),
        ];
        let composer = composer();
        let first = composer.compose("q", &hits(&chunks), Locale::En);
        let second = composer.compose("q", &hits(&chunks), Locale::En);
        assert_eq!(first.to_string(), second.to_string());
    }
}
