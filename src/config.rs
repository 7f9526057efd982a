/// Capacity a builder starts with when none is configured.
pub const DEFAULT_INITIAL_CAPACITY: usize = 1024;

/// How `finish` decides whether a body-less message declares a content type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentTypeScan {
    /// Case-sensitive search for `Content-Type` anywhere in the written
    /// bytes, including the first line and header values.
    Substring,
    /// Only a header line whose name is `Content-Type`, ignoring ASCII case.
    HeaderLines,
}

impl Default for ContentTypeScan {
    fn default() -> Self {
        ContentTypeScan::Substring
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BuilderConfig {
    pub initial_capacity: usize,
    pub content_type_scan: ContentTypeScan,
    /// Upper bound on the buffer capacity, `None` for no bound.
    pub max_capacity: Option<usize>,
}

impl BuilderConfig {
    pub fn new() -> Self {
        BuilderConfig {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            content_type_scan: ContentTypeScan::default(),
            max_capacity: None,
        }
    }

    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn with_content_type_scan(mut self, scan: ContentTypeScan) -> Self {
        self.content_type_scan = scan;
        self
    }

    pub fn with_max_capacity(mut self, max_capacity: usize) -> Self {
        self.max_capacity = Some(max_capacity);
        self
    }
}

impl Default for BuilderConfig {
    fn default() -> Self {
        BuilderConfig::new()
    }
}
