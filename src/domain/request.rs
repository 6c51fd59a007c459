pub const LIST_PAGES_DEFAULT_LIMIT: u32 = 20;
pub const FIND_PAGES_DEFAULT_LIMIT: u32 = 10;

/// Kind of landing page; doubles as the REST resource name and the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Petition,
    Donation,
}

impl PageKind {
    pub fn resource(self) -> &'static str {
        match self {
            Self::Petition => "petitionpage",
            Self::Donation => "donationpage",
        }
    }
}

/// A petition or donation page to create. Always created visible (`hidden = false`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePage {
    kind: PageKind,
    name: String,
    title: String,
    language: String,
    canonical_url: String,
}

impl CreatePage {
    /// `language` is a URI reference to a language resource, e.g. `/rest/v1/language/100/`.
    pub fn new(
        kind: PageKind,
        name: impl Into<String>,
        title: impl Into<String>,
        language: impl Into<String>,
        canonical_url: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            name: name.into(),
            title: title.into(),
            language: language.into(),
            canonical_url: canonical_url.into(),
        }
    }

    pub fn petition(
        name: impl Into<String>,
        title: impl Into<String>,
        language: impl Into<String>,
        canonical_url: impl Into<String>,
    ) -> Self {
        Self::new(PageKind::Petition, name, title, language, canonical_url)
    }

    pub fn donation(
        name: impl Into<String>,
        title: impl Into<String>,
        language: impl Into<String>,
        canonical_url: impl Into<String>,
    ) -> Self {
        Self::new(PageKind::Donation, name, title, language, canonical_url)
    }

    pub fn kind(&self) -> PageKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn canonical_url(&self) -> &str {
        &self.canonical_url
    }
}

/// Pagination window for listing petition pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListPages {
    offset: u32,
    limit: u32,
}

impl Default for ListPages {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: LIST_PAGES_DEFAULT_LIMIT,
        }
    }
}

impl ListPages {
    pub fn new(offset: u32, limit: u32) -> Self {
        Self { offset, limit }
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }
}

/// Petition page lookup by exact name, with its own pagination window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindPages {
    name: String,
    offset: u32,
    limit: u32,
}

impl FindPages {
    /// Search for `name` starting at offset 0 with [`FIND_PAGES_DEFAULT_LIMIT`] results.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            offset: 0,
            limit: FIND_PAGES_DEFAULT_LIMIT,
        }
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }
}
