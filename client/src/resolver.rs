use std::{cell::RefCell, collections::HashMap};

use async_trait::async_trait;
use log::debug;

use dcs_shared::PageName;

/// Maps the embedded app's pathnames to stable page names and back.
///
/// Both lookups may suspend, e.g. while a route table is fetched.
#[async_trait(?Send)]
pub trait PageNameResolver {
    /// Existing page name for `pathname`, created on first request.
    async fn page_name(&self, pathname: &str) -> PageName;

    /// Reverse lookup; `None` when the page is unknown.
    async fn pathname(&self, page_name: &PageName) -> Option<String>;
}

/// In-memory resolver over a pathname ⇄ page-name table.
///
/// Unknown pathnames get a page name derived from their segments
/// (`/docs/getting-started` becomes `docs_getting-started`), made unique
/// with a numeric suffix if needed.
#[derive(Default)]
pub struct PageTable {
    inner: RefCell<PageTableInner>,
}

#[derive(Default)]
struct PageTableInner {
    by_pathname: HashMap<String, PageName>,
    by_page_name: HashMap<PageName, String>,
}

impl PageTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pages<'a>(pages: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let table = Self::new();
        for (pathname, page_name) in pages {
            table.insert(pathname, PageName::from(page_name));
        }
        table
    }

    /// Binds `pathname` to `page_name`, replacing any previous binding of
    /// either side. This is how a page keeps its name across a move.
    pub fn insert(&self, pathname: &str, page_name: PageName) {
        let mut inner = self.inner.borrow_mut();
        if let Some(old_page) = inner.by_pathname.remove(pathname) {
            inner.by_page_name.remove(&old_page);
        }
        if let Some(old_pathname) = inner.by_page_name.remove(&page_name) {
            inner.by_pathname.remove(&old_pathname);
        }
        inner.by_pathname.insert(pathname.to_owned(), page_name.clone());
        inner.by_page_name.insert(page_name, pathname.to_owned());
    }

    pub fn get_or_create(&self, pathname: &str) -> PageName {
        let mut inner = self.inner.borrow_mut();
        if let Some(page_name) = inner.by_pathname.get(pathname) {
            return page_name.clone();
        }

        let base = derive_page_name(pathname);
        let mut candidate = PageName::new(base.clone());
        let mut suffix = 2;
        while inner.by_page_name.contains_key(&candidate) {
            candidate = PageName::new(format!("{base}-{suffix}"));
            suffix += 1;
        }

        debug!("PageTable: new page {candidate} for {pathname}");
        inner.by_pathname.insert(pathname.to_owned(), candidate.clone());
        inner.by_page_name.insert(candidate.clone(), pathname.to_owned());
        candidate
    }

    pub fn get_pathname(&self, page_name: &PageName) -> Option<String> {
        self.inner.borrow().by_page_name.get(page_name).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().by_pathname.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn derive_page_name(pathname: &str) -> String {
    let segments: Vec<&str> = pathname.split('/').filter(|segment| !segment.is_empty()).collect();
    if segments.is_empty() {
        "index".to_owned()
    } else {
        segments.join("_")
    }
}

#[async_trait(?Send)]
impl PageNameResolver for PageTable {
    async fn page_name(&self, pathname: &str) -> PageName {
        self.get_or_create(pathname)
    }

    async fn pathname(&self, page_name: &PageName) -> Option<String> {
        self.get_pathname(page_name)
    }
}
