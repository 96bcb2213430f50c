//! `thirtyfour`-backed browser: talks W3C WebDriver to a chromedriver endpoint.

use std::time::Duration;

use async_trait::async_trait;
use thirtyfour::prelude::*;
use thirtyfour::ChromeCapabilities;
use tracing::debug;

use crate::scraping::browser::{Browser, BrowserElement, BrowserError, BrowserSession};

const CHROME_ARGS: [&str; 5] = [
    "--headless=new",
    "--no-sandbox",
    "--disable-dev-shm-usage",
    "--disable-gpu",
    "--window-size=1920,1080",
];
const POLL_INTERVAL: Duration = Duration::from_millis(250);

impl From<WebDriverError> for BrowserError {
    fn from(err: WebDriverError) -> Self {
        BrowserError::Driver(err.to_string())
    }
}

fn chrome_capabilities() -> Result<ChromeCapabilities, BrowserError> {
    let mut caps = DesiredCapabilities::chrome();
    for arg in CHROME_ARGS {
        caps.add_chrome_arg(arg)?;
    }
    Ok(caps)
}

pub struct WebDriverBrowser {
    server_url: String,
}

impl WebDriverBrowser {
    pub fn new(server_url: &str) -> Self {
        Self {
            server_url: server_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl Browser for WebDriverBrowser {
    async fn open(&self) -> Result<Box<dyn BrowserSession>, BrowserError> {
        let driver = WebDriver::new(&self.server_url, chrome_capabilities()?).await?;
        debug!(server = %self.server_url, "WebDriver session opened");

        Ok(Box::new(WebDriverSession {
            driver: Some(driver),
        }))
    }
}

struct WebDriverSession {
    // Taken on close; `quit` consumes the handle.
    driver: Option<WebDriver>,
}

impl WebDriverSession {
    fn driver(&self) -> Result<&WebDriver, BrowserError> {
        self.driver
            .as_ref()
            .ok_or_else(|| BrowserError::Session("session already closed".to_string()))
    }
}

#[async_trait]
impl BrowserSession for WebDriverSession {
    async fn goto(&mut self, url: &str) -> Result<(), BrowserError> {
        self.driver()?.goto(url).await?;
        Ok(())
    }

    async fn wait_for(&mut self, selector: &str, deadline: Duration) -> Result<(), BrowserError> {
        let found = self
            .driver()?
            .query(By::Css(selector))
            .wait(deadline, POLL_INTERVAL)
            .exists()
            .await?;

        if found {
            Ok(())
        } else {
            Err(BrowserError::timeout(selector, deadline))
        }
    }

    async fn find_all(&self, selector: &str) -> Result<Vec<Box<dyn BrowserElement>>, BrowserError> {
        let elements = self.driver()?.find_all(By::Css(selector)).await?;
        Ok(elements
            .into_iter()
            .map(|element| Box::new(WebDriverElement(element)) as Box<dyn BrowserElement>)
            .collect())
    }

    async fn close(&mut self) -> Result<(), BrowserError> {
        match self.driver.take() {
            Some(driver) => {
                driver.quit().await?;
                debug!("WebDriver session closed");
                Ok(())
            }
            None => Err(BrowserError::Session("session already closed".to_string())),
        }
    }
}

struct WebDriverElement(WebElement);

#[async_trait]
impl BrowserElement for WebDriverElement {
    async fn child_text(&self, selector: &str) -> Result<Option<String>, BrowserError> {
        let Some(child) = self.0.find_all(By::Css(selector)).await?.into_iter().next() else {
            return Ok(None);
        };
        Ok(Some(child.text().await?))
    }
}
