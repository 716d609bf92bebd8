use std::collections::HashMap;

use async_trait::async_trait;
use eestikeelt_core::config::Endpoints;
use eestikeelt_core::error::{Result, ScrapeError};
use eestikeelt_core::services::fetch::Fetch;

/// In-memory stand-in for eki.ee.
#[derive(Default)]
pub struct FakeEki {
    pages: HashMap<String, Result<String>>,
}

impl FakeEki {
    pub fn page(mut self, url: String, body: &str) -> Self {
        self.pages.insert(url, Ok(body.to_string()));
        self
    }

    pub fn down(mut self, url: String) -> Self {
        let err = ScrapeError::transport(&url, "connection reset");
        self.pages.insert(url, Err(err));
        self
    }

    /// The help page plus "cat"/"cats" with one Estonian word each.
    pub fn cats(ep: &Endpoints) -> Self {
        Self::default()
            .page(
                ep.help(),
                r#"<table>
                    <tr><td><span class="nr">17</span></td><td>kass, kassi, kassi</td></tr>
                    <tr><td><i>võrdlus:</i> -</td></tr>
                </table>"#,
            )
            .page(ep.suggestions("cat"), r#"["<span>cat</span>","<span>cats</span>"]"#)
            .page(
                ep.en_to_est("cat"),
                r#"<div><span lang="en">cat</span><span class="x">kass</span></div>"#,
            )
            .page(
                ep.en_to_est("cats"),
                r#"<div><span lang="en">cats</span><span class="x">kassid</span></div>"#,
            )
            .page(
                ep.definition("kass"),
                r#"<div class="tervikart">kass+poeg<span class="grg"><span class="mt">1</span></span></div>
                   <div class="tervikart">kass<span class="grg"><span class="mvq">s</span><span class="mt">17</span></span></div>"#,
            )
            .page(ep.definition("kassid"), r#"<div class="tervikart">kassid+toit</div>"#)
    }
}

#[async_trait]
impl Fetch for FakeEki {
    async fn get_text(&self, url: &str) -> Result<String> {
        self.pages.get(url).cloned().unwrap_or_else(|| {
            Err(ScrapeError::UnexpectedStatus {
                url: url.to_string(),
                status: 404,
            })
        })
    }
}
