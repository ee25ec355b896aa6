/// Terms signalling corporate actions worth an alert (takeovers, tender offers,
/// strategic investors, new contracts, debt repayment, stake increases).
const DEFAULT_KEYWORDS: [&str; 11] = [
    "pengambilalihan",
    "akuisisi",
    "tender offer",
    "pembelian saham",
    "investor strategis",
    "negosiasi",
    "divestasi",
    "pemenang tender",
    "kontrak baru",
    "pelunasan utang",
    "menambah kepemilikan",
];

/// A fixed, read-only list of lowercase substrings matched against titles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordSet {
    terms: Vec<String>,
}

impl KeywordSet {
    /// Builds a set from arbitrary terms. Terms are lower-cased; empty terms are
    /// dropped since they would match every title.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = terms
            .into_iter()
            .map(|t| t.as_ref().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect();
        Self { terms }
    }

    /// A set with no terms. Nothing ever matches it.
    pub const fn empty() -> Self {
        Self { terms: Vec::new() }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// True if any term occurs in the lower-cased `title`.
    pub fn matches(&self, title: &str) -> bool {
        if self.terms.is_empty() {
            return false;
        }
        let title = title.to_lowercase();
        self.terms.iter().any(|t| title.contains(t.as_str()))
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS)
    }
}
