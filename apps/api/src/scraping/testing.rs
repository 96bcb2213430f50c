//! Scripted in-memory browser for exercising adapters without chromedriver.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::scraping::browser::{Browser, BrowserElement, BrowserError, BrowserSession};

#[derive(Debug, Clone, Copy)]
pub enum Readiness {
    Ready,
    TimesOut,
    /// `wait_for` never resolves.
    Hangs,
}

#[derive(Debug, Clone)]
pub struct ScriptedItem {
    fields: HashMap<String, String>,
    broken: bool,
}

impl ScriptedItem {
    pub fn with_fields(fields: &[(&str, &str)]) -> Self {
        Self {
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            broken: false,
        }
    }

    /// An element whose reads fail, e.g. detached from the DOM mid-scrape.
    pub fn broken() -> Self {
        Self {
            fields: HashMap::new(),
            broken: true,
        }
    }
}

/// Item carrying the `h3` / `h4` / `.loc` fields the test adapters read.
pub fn row(title: &str, company: &str, location: &str) -> ScriptedItem {
    ScriptedItem::with_fields(&[("h3", title), ("h4", company), (".loc", location)])
}

#[derive(Debug, Clone)]
pub struct ScriptedPage {
    readiness: Readiness,
    items: Vec<ScriptedItem>,
}

impl ScriptedPage {
    pub fn new(readiness: Readiness, items: Vec<ScriptedItem>) -> Self {
        Self { readiness, items }
    }

    pub fn ready(items: Vec<ScriptedItem>) -> Self {
        Self::new(Readiness::Ready, items)
    }
}

#[derive(Default)]
pub struct ScriptedBrowser {
    pages: HashMap<String, ScriptedPage>,
    unreachable: bool,
    opened: Arc<AtomicUsize>,
    closed: Arc<AtomicUsize>,
}

impl ScriptedBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `open` fails, as if chromedriver were down.
    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    pub fn with_page(mut self, url: &str, page: ScriptedPage) -> Self {
        self.pages.insert(url.to_string(), page);
        self
    }

    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Browser for ScriptedBrowser {
    async fn open(&self) -> Result<Box<dyn BrowserSession>, BrowserError> {
        if self.unreachable {
            return Err(BrowserError::Driver("connection refused".to_string()));
        }
        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(ScriptedSession {
            pages: self.pages.clone(),
            current: None,
            closed: self.closed.clone(),
            is_closed: false,
        }))
    }
}

struct ScriptedSession {
    pages: HashMap<String, ScriptedPage>,
    current: Option<ScriptedPage>,
    closed: Arc<AtomicUsize>,
    is_closed: bool,
}

impl ScriptedSession {
    fn page(&self) -> Result<&ScriptedPage, BrowserError> {
        self.current
            .as_ref()
            .ok_or_else(|| BrowserError::Session("no page loaded".to_string()))
    }
}

#[async_trait]
impl BrowserSession for ScriptedSession {
    async fn goto(&mut self, url: &str) -> Result<(), BrowserError> {
        match self.pages.get(url) {
            Some(page) => {
                self.current = Some(page.clone());
                Ok(())
            }
            None => Err(BrowserError::Driver(format!("net::ERR_NAME_NOT_RESOLVED at {url}"))),
        }
    }

    async fn wait_for(&mut self, selector: &str, deadline: Duration) -> Result<(), BrowserError> {
        let readiness = self.page()?.readiness;
        match readiness {
            Readiness::Ready => Ok(()),
            Readiness::TimesOut => Err(BrowserError::timeout(selector, deadline)),
            Readiness::Hangs => std::future::pending().await,
        }
    }

    async fn find_all(&self, _selector: &str) -> Result<Vec<Box<dyn BrowserElement>>, BrowserError> {
        Ok(self
            .page()?
            .items
            .iter()
            .cloned()
            .map(|item| Box::new(item) as Box<dyn BrowserElement>)
            .collect())
    }

    async fn close(&mut self) -> Result<(), BrowserError> {
        if self.is_closed {
            return Err(BrowserError::Session("session already closed".to_string()));
        }
        self.is_closed = true;
        self.closed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

#[async_trait]
impl BrowserElement for ScriptedItem {
    async fn child_text(&self, selector: &str) -> Result<Option<String>, BrowserError> {
        if self.broken {
            return Err(BrowserError::Driver("stale element reference".to_string()));
        }
        Ok(self.fields.get(selector).cloned())
    }
}
