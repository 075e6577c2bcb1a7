use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use tera::{Context as TeraContext, Tera};

use crate::store::{DEFAULT_FEATURED_LIMIT, DEFAULT_LATEST_LIMIT, DEFAULT_RELATED_LIMIT};
use crate::types::{Fixture, HOME_SLUG};

const MODULE_TEMPLATE_NAME: &str = "mock_data.js";
const MODULE_TEMPLATE: &str = include_str!("../templates/mock_data.js.tera");

/// Index of the account exported as `mockUser`
const DEFAULT_USER_INDEX: usize = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// ES module with data exports and helper functions
    #[default]
    Js,
    /// Plain JSON document with categories, posts and users
    Json,
}

pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_template(MODULE_TEMPLATE_NAME, MODULE_TEMPLATE)
            .context("Failed to load module template")?;

        Ok(Self { tera })
    }

    pub fn render(&self, fixture: &Fixture, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Js => self.render_module(fixture),
            OutputFormat::Json => {
                let mut json = to_json_pretty(fixture)?;
                json.push('\n');
                Ok(json)
            }
        }
    }

    fn render_module(&self, fixture: &Fixture) -> Result<String> {
        let mut context = TeraContext::new();
        context.insert("categories", &fixture.categories);
        context.insert("posts_json", &to_json_pretty(&fixture.posts)?);
        context.insert("users", &fixture.users);
        context.insert("home_slug", HOME_SLUG);
        context.insert("default_user_index", &DEFAULT_USER_INDEX);
        context.insert("featured_limit", &DEFAULT_FEATURED_LIMIT);
        context.insert("latest_limit", &DEFAULT_LATEST_LIMIT);
        context.insert("related_limit", &DEFAULT_RELATED_LIMIT);

        self.tera
            .render(MODULE_TEMPLATE_NAME, &context)
            .context("Failed to render module template")
    }
}

/// Four-space indent, non-ASCII left as-is
fn to_json_pretty<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}
