//! The extraction engine: rendered HTML plus [`SiteRules`] in, records out.
//!
//! Rules are compiled once into [`Extractor`] so selector errors surface at
//! startup instead of per page. Extraction itself never fails: a missing
//! section yields no items, and an item missing a required field is skipped
//! with a warning while its siblings are still collected.
//!
//! # Per-item steps
//!
//! 1. Check the item's guard selectors (`require`)
//! 2. Read `title` and `url`; either missing drops the item
//! 3. Read the optional fields, resolving links against `base_url`
//! 4. Normalize `published_time` per the site's [`TimeFormat`]
//! 5. Stamp section flags and the page date
//!
//! Rank-bearing results are re-sorted by rank once all sections are done.
//!
//! Element text is the concatenation of its text nodes, so inline markup
//! inside a headline adds no spaces; only whitespace already in the page is
//! collapsed.
//!
//! The binary drives [`Extractor`] directly so detail-page lookups share the
//! compiled rules. The one-shot `extract` helper is test-only.

use crate::error::{RulesError, Skip};
use crate::models::{Author, Record};
use crate::rules::{
    AuthorRule, DEFAULT_SECONDARY_LIMIT, FieldRule, SecondaryFetch, Section, SiteRules, TimeFormat,
};
use crate::time::{normalize, shift_sub_day_clock};
use crate::utils::{clean_text, resolve_url, strip_prefixes};
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use std::collections::BTreeMap;
use tracing::{debug, instrument, warn};

static BACKGROUND_URL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"background(?:-image)?\s*:[^;]*url\(\s*['"]?([^'")]+?)['"]?\s*\)"#)
        .expect("valid background url pattern")
});

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d[\d,]*").expect("valid digits pattern"));

fn compile_selector(selector: &str) -> Result<Selector, RulesError> {
    Selector::parse(selector).map_err(|e| RulesError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// A [`FieldRule`] with its selector parsed.
#[derive(Debug, Clone)]
struct Field {
    selector: Option<Selector>,
    attr: Option<String>,
    background_url: bool,
    nth: usize,
    contains: Vec<String>,
    strip_prefix: Vec<String>,
    default: Option<String>,
}

impl Field {
    fn compile(rule: &FieldRule) -> Result<Self, RulesError> {
        Ok(Self {
            selector: rule.selector.as_deref().map(compile_selector).transpose()?,
            attr: rule.attr.clone(),
            background_url: rule.background_url,
            nth: rule.nth,
            contains: rule.contains.clone(),
            strip_prefix: rule.strip_prefix.clone(),
            default: rule.default.clone(),
        })
    }

    /// Matches inside `item` (or the item itself) that pass the text filter.
    fn matches<'a>(&self, item: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        let candidates: Vec<ElementRef<'a>> = match &self.selector {
            Some(selector) => item.select(selector).collect(),
            None => vec![item],
        };
        if self.contains.is_empty() {
            return candidates;
        }
        candidates
            .into_iter()
            .filter(|el| {
                let text = el.text().collect::<String>();
                self.contains.iter().any(|needle| text.contains(needle.as_str()))
            })
            .collect()
    }

    /// Raw value read from one matched element.
    fn read(&self, el: ElementRef<'_>) -> Option<String> {
        let value = if self.background_url {
            let style = el.value().attr("style")?;
            BACKGROUND_URL
                .captures(style)
                .map(|caps| caps[1].trim().to_string())?
        } else if let Some(attr) = &self.attr {
            el.value().attr(attr)?.trim().to_string()
        } else {
            clean_text(&el.text().collect::<String>())
        };
        let value = if self.strip_prefix.is_empty() {
            value
        } else {
            strip_prefixes(&value, &self.strip_prefix)
        };
        (!value.is_empty()).then_some(value)
    }

    /// The `nth` match's value, or the configured default.
    fn value(&self, item: ElementRef<'_>) -> Option<String> {
        self.matches(item)
            .into_iter()
            .nth(self.nth)
            .and_then(|el| self.read(el))
            .or_else(|| self.default.clone())
    }

    /// Every match's value, in document order.
    fn values(&self, item: ElementRef<'_>) -> Vec<String> {
        self.matches(item)
            .into_iter()
            .filter_map(|el| self.read(el))
            .collect()
    }

    fn present(&self, item: ElementRef<'_>) -> bool {
        self.matches(item).len() > self.nth
    }
}

#[derive(Debug, Clone)]
struct Authors {
    selector: Selector,
    name_attr: Option<String>,
    url_attr: Option<String>,
}

impl Authors {
    fn compile(rule: &AuthorRule) -> Result<Self, RulesError> {
        Ok(Self {
            selector: compile_selector(&rule.selector)?,
            name_attr: rule.name_attr.clone(),
            url_attr: rule.url_attr.clone(),
        })
    }

    fn read(&self, item: ElementRef<'_>, base_url: &str) -> Vec<Author> {
        item.select(&self.selector)
            .filter_map(|el| {
                let name = match &self.name_attr {
                    Some(attr) => clean_text(el.value().attr(attr)?),
                    None => clean_text(&el.text().collect::<String>()),
                };
                if name.is_empty() {
                    return None;
                }
                let url = self
                    .url_attr
                    .as_deref()
                    .and_then(|attr| el.value().attr(attr))
                    .map(|href| resolve_url(base_url, href));
                Some(Author { name, url })
            })
            .collect()
    }
}

#[derive(Debug, Clone)]
struct CompiledSection {
    container: Selector,
    container_src: String,
    item: Selector,
    flags: BTreeMap<String, bool>,
}

#[derive(Debug, Clone)]
struct Fields {
    title: Field,
    url: Field,
    content: Option<Field>,
    published_time: Option<Field>,
    category: Option<Field>,
    categories: Option<Field>,
    kind: Option<Field>,
    author: Option<Field>,
    authors: Option<Authors>,
    image_url: Option<Field>,
    data_source: Option<Field>,
    rank: Option<Field>,
    coin_tags: Option<Field>,
    flags: Vec<(String, Field)>,
    counts: Vec<(String, Field)>,
    require: Vec<(String, Selector)>,
}

#[derive(Debug, Clone)]
struct PageDate {
    selector: Selector,
    pattern: Regex,
}

/// Detail-page selectors for secondary fetches.
#[derive(Debug, Clone)]
pub struct BodyLookup {
    container: Selector,
    container_src: String,
    body: Selector,
    body_src: String,
    /// Wait applied when rendering the detail page.
    pub wait_ms: u64,
}

impl BodyLookup {
    fn compile(rule: &SecondaryFetch) -> Result<Self, RulesError> {
        Ok(Self {
            container: compile_selector(&rule.container)?,
            container_src: rule.container.clone(),
            body: compile_selector(&rule.body)?,
            body_src: rule.body.clone(),
            wait_ms: rule.wait_ms,
        })
    }

    /// Flattened article text from a detail page.
    pub fn body_text(&self, document: &Html) -> Result<String, Skip> {
        let wrapper = document
            .select(&self.container)
            .next()
            .ok_or_else(|| Skip::BodyMissing(self.container_src.clone()))?;
        let body = wrapper
            .select(&self.body)
            .next()
            .ok_or_else(|| Skip::BodyMissing(self.body_src.clone()))?;
        let text = clean_text(&body.text().collect::<String>());
        if text.is_empty() {
            return Err(Skip::BodyMissing(self.body_src.clone()));
        }
        Ok(text)
    }
}

fn compile_opt(rule: &Option<FieldRule>) -> Result<Option<Field>, RulesError> {
    rule.as_ref().map(Field::compile).transpose()
}

fn compile_named(rules: &BTreeMap<String, FieldRule>) -> Result<Vec<(String, Field)>, RulesError> {
    rules
        .iter()
        .map(|(name, rule)| Ok((name.clone(), Field::compile(rule)?)))
        .collect()
}

/// Compiled, reusable form of a [`SiteRules`] value.
#[derive(Debug, Clone)]
pub struct Extractor {
    site: String,
    base_url: String,
    sections: Vec<CompiledSection>,
    fields: Fields,
    time_format: TimeFormat,
    page_date: Option<PageDate>,
    limit: Option<usize>,
    secondary: Option<BodyLookup>,
}

impl Extractor {
    /// Parse every selector and pattern in `rules`.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError`] for an invalid selector or date pattern, or a
    /// site without sections.
    pub fn compile(rules: &SiteRules) -> Result<Self, RulesError> {
        if rules.sections.is_empty() {
            return Err(RulesError::NoSections(rules.id.clone()));
        }
        let sections = rules
            .sections
            .iter()
            .map(|Section { container, item, flags }| {
                Ok(CompiledSection {
                    container: compile_selector(container)?,
                    container_src: container.clone(),
                    item: compile_selector(item)?,
                    flags: flags.clone(),
                })
            })
            .collect::<Result<Vec<_>, RulesError>>()?;

        let f = &rules.fields;
        let fields = Fields {
            title: Field::compile(&f.title)?,
            url: Field::compile(&f.url)?,
            content: compile_opt(&f.content)?,
            published_time: compile_opt(&f.published_time)?,
            category: compile_opt(&f.category)?,
            categories: compile_opt(&f.categories)?,
            kind: compile_opt(&f.kind)?,
            author: compile_opt(&f.author)?,
            authors: f.authors.as_ref().map(Authors::compile).transpose()?,
            image_url: compile_opt(&f.image_url)?,
            data_source: compile_opt(&f.data_source)?,
            rank: compile_opt(&f.rank)?,
            coin_tags: compile_opt(&f.coin_tags)?,
            flags: compile_named(&f.flags)?,
            counts: compile_named(&f.counts)?,
            require: f
                .require
                .iter()
                .map(|s| Ok((s.clone(), compile_selector(s)?)))
                .collect::<Result<Vec<_>, RulesError>>()?,
        };

        let page_date = match &rules.page_date {
            Some(rule) => Some(PageDate {
                selector: compile_selector(&rule.selector)?,
                pattern: Regex::new(&rule.pattern)?,
            }),
            None => None,
        };

        let secondary = rules.secondary.as_ref().map(BodyLookup::compile).transpose()?;
        let limit = match (&secondary, rules.limit) {
            (Some(_), None) => Some(DEFAULT_SECONDARY_LIMIT),
            (_, limit) => limit,
        };

        Ok(Self {
            site: rules.id.clone(),
            base_url: rules.base_url.clone(),
            sections,
            fields,
            time_format: rules.time_format,
            page_date,
            limit,
            secondary,
        })
    }

    /// The detail-page lookup, for secondary-fetch sites.
    pub fn secondary(&self) -> Option<&BodyLookup> {
        self.secondary.as_ref()
    }

    /// Extract every valid record from a rendered listing page.
    ///
    /// `reference` anchors relative timestamps and is the fallback page date.
    #[instrument(level = "debug", skip_all, fields(site = %self.site))]
    pub fn extract(&self, document: &Html, reference: DateTime<Utc>) -> Vec<Record> {
        let page_date = self.page_date(document, reference);
        let mut records = Vec::new();

        for section in &self.sections {
            let container = match self.locate_container(document, section) {
                Ok(container) => container,
                Err(skip) => {
                    debug!(reason = %skip, "Section yields no items");
                    continue;
                }
            };

            let candidates = container.select(&section.item);
            let candidates: Box<dyn Iterator<Item = ElementRef<'_>>> = match self.limit {
                Some(limit) => Box::new(candidates.take(limit)),
                None => Box::new(candidates),
            };

            for (index, item) in candidates.enumerate() {
                match self.extract_item(item, section, page_date.as_deref(), reference) {
                    Ok(record) => records.push(record),
                    Err(skip) => warn!(index, reason = %skip, "Skipping item"),
                }
            }
        }

        if self.fields.rank.is_some() {
            records.sort_by_key(|r| r.rank);
        }
        debug!(count = records.len(), "Extracted records");
        records
    }

    fn locate_container<'a>(
        &self,
        document: &'a Html,
        section: &CompiledSection,
    ) -> Result<ElementRef<'a>, Skip> {
        document
            .select(&section.container)
            .next()
            .ok_or_else(|| Skip::SectionMissing(section.container_src.clone()))
    }

    fn page_date(&self, document: &Html, reference: DateTime<Utc>) -> Option<String> {
        let rule = self.page_date.as_ref()?;
        let found = document
            .select(&rule.selector)
            .next()
            .map(|el| el.text().collect::<String>())
            .and_then(|text| {
                let caps = rule.pattern.captures(&text)?;
                let year: i32 = caps.get(1)?.as_str().parse().ok()?;
                let month: u32 = caps.get(2)?.as_str().parse().ok()?;
                let day: u32 = caps.get(3)?.as_str().parse().ok()?;
                Some(format!("{year:04}-{month:02}-{day:02}"))
            });
        Some(found.unwrap_or_else(|| {
            debug!("Page date not found; using reference date");
            reference.format("%Y-%m-%d").to_string()
        }))
    }

    fn extract_item(
        &self,
        item: ElementRef<'_>,
        section: &CompiledSection,
        page_date: Option<&str>,
        reference: DateTime<Utc>,
    ) -> Result<Record, Skip> {
        let f = &self.fields;
        for (source, guard) in &f.require {
            if item.select(guard).next().is_none() {
                return Err(Skip::MissingGuard(source.clone()));
            }
        }

        let title = f.title.value(item).ok_or(Skip::MissingField("title"))?;
        let url = f
            .url
            .value(item)
            .map(|href| resolve_url(&self.base_url, &href))
            .ok_or(Skip::MissingField("url"))?;
        let rank = match &f.rank {
            Some(rule) => Some(
                rule.value(item)
                    .as_deref()
                    .and_then(parse_number)
                    .and_then(|n| u32::try_from(n).ok())
                    .ok_or(Skip::MissingField("rank"))?,
            ),
            None => None,
        };

        let read = |rule: &Option<Field>| rule.as_ref().and_then(|r| r.value(item));
        let published_time = read(&f.published_time).map(|raw| match self.time_format {
            TimeFormat::Raw => raw,
            TimeFormat::Normalize => normalize(&raw, reference),
            TimeFormat::SubDayClock => shift_sub_day_clock(&raw),
        });

        let mut flags = section.flags.clone();
        for (name, rule) in &f.flags {
            flags.insert(name.clone(), rule.present(item));
        }
        let counts = f
            .counts
            .iter()
            .filter_map(|(name, rule)| {
                let n = rule.value(item).as_deref().and_then(parse_number)?;
                Some((name.clone(), n))
            })
            .collect();

        Ok(Record {
            title,
            url,
            published_time,
            content: read(&f.content),
            category: read(&f.category),
            categories: f.categories.as_ref().map(|r| r.values(item)),
            kind: read(&f.kind),
            author: read(&f.author),
            authors: f.authors.as_ref().map(|r| r.read(item, &self.base_url)),
            image_url: read(&f.image_url).map(|src| resolve_url(&self.base_url, &src)),
            data_source: read(&f.data_source),
            rank,
            coin_tags: f.coin_tags.as_ref().map(|r| r.values(item)),
            date: page_date.map(str::to_string),
            flags,
            counts,
        })
    }
}

/// First run of digits in `text`, ignoring thousands separators.
fn parse_number(text: &str) -> Option<u64> {
    DIGITS.find(text)?.as_str().replace(',', "").parse().ok()
}

/// Compile `rules` and extract records from raw HTML in one step.
#[cfg(test)]
pub fn extract(
    html: &str,
    rules: &SiteRules,
    reference: DateTime<Utc>,
) -> Result<Vec<Record>, RulesError> {
    let extractor = Extractor::compile(rules)?;
    let document = Html::parse_document(html);
    Ok(extractor.extract(&document, reference))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{FieldRules, PageDateRule};
    use chrono::TimeZone;

    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 21, 12, 41, 0).unwrap()
    }

    fn rules() -> SiteRules {
        SiteRules {
            id: "example".to_string(),
            key: "news".to_string(),
            base_url: "https://example.com".to_string(),
            listing_url: "https://example.com/news".to_string(),
            categories: BTreeMap::new(),
            wait_ms: 5000,
            script: None,
            sections: vec![Section::new("ul.news", "li")],
            fields: FieldRules {
                title: FieldRule::text("h3"),
                url: FieldRule::attr("a", "href"),
                published_time: Some(FieldRule::text("time")),
                category: Some(FieldRule::text(".cat").or("Uncategorized")),
                image_url: Some(FieldRule::attr("img", "src")),
                ..Default::default()
            },
            time_format: TimeFormat::Normalize,
            page_date: None,
            limit: None,
            secondary: None,
            envelope: Default::default(),
        }
    }

    const PAGE: &str = r#"
        <html><body>
        <ul class="news">
          <li><a href="/news/a"><h3>  First
              story </h3></a><time>3 HRS AGO</time><span class="cat">Markets</span>
              <img src="/img/a.png"></li>
          <li><a href="/news/b"></a><time>Dec 20, 2024</time></li>
          <li><h3>No link here</h3></li>
          <li><a href="https://other.io/c"><h3>Third</h3></a><time>whenever</time></li>
        </ul>
        </body></html>
    "#;

    #[test]
    fn test_missing_container_yields_empty() {
        let records = extract("<html><body><p>nothing</p></body></html>", &rules(), reference()).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_invalid_items_are_isolated() {
        let records = extract(PAGE, &rules(), reference()).unwrap();
        let titles: Vec<_> = records.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["First story", "Third"]);
    }

    #[test]
    fn test_fields_resolved_and_normalized() {
        let records = extract(PAGE, &rules(), reference()).unwrap();
        let first = &records[0];
        assert_eq!(first.url, "https://example.com/news/a");
        assert_eq!(first.published_time.as_deref(), Some("2024-12-21T09:00:00"));
        assert_eq!(first.category.as_deref(), Some("Markets"));
        assert_eq!(first.image_url.as_deref(), Some("https://example.com/img/a.png"));

        let third = &records[1];
        assert_eq!(third.url, "https://other.io/c");
        assert_eq!(third.published_time.as_deref(), Some("whenever"));
        assert_eq!(third.category.as_deref(), Some("Uncategorized"));
        assert_eq!(third.image_url, None);
    }

    #[test]
    fn test_extraction_is_repeatable() {
        let first = extract(PAGE, &rules(), reference()).unwrap();
        let second = extract(PAGE, &rules(), reference()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_limit_caps_candidates() {
        let mut rules = rules();
        rules.limit = Some(2);
        let records = extract(PAGE, &rules, reference()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "First story");
    }

    #[test]
    fn test_rank_resort() {
        let mut rules = rules();
        rules.fields.rank = Some(FieldRule::text(".rank"));
        let html = r#"<ul class="news">
            <li><span class="rank">03.</span><a href="/c"><h3>Gamma</h3></a></li>
            <li><span class="rank">01.</span><a href="/a"><h3>Alpha</h3></a></li>
            <li><span class="rank">unranked</span><a href="/x"><h3>Dropped</h3></a></li>
            <li><span class="rank">02.</span><a href="/b"><h3>Beta</h3></a></li>
        </ul>"#;
        let records = extract(html, &rules, reference()).unwrap();
        let order: Vec<_> = records.iter().map(|r| (r.rank, r.title.as_str())).collect();
        assert_eq!(
            order,
            vec![(Some(1), "Alpha"), (Some(2), "Beta"), (Some(3), "Gamma")]
        );
    }

    #[test]
    fn test_guard_selector_drops_item() {
        let mut rules = rules();
        rules.fields.require = vec![".meta".to_string()];
        let html = r#"<ul class="news">
            <li><a href="/a"><h3>Has meta</h3></a><div class="meta"></div></li>
            <li><a href="/b"><h3>No meta</h3></a></li>
        </ul>"#;
        let records = extract(html, &rules, reference()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Has meta");
    }

    #[test]
    fn test_sections_flags_and_background_image() {
        let mut rules = rules();
        rules.sections = vec![
            Section::new("div.featured", "article").flag("is_featured", true),
            Section::new("div.mini", "article").flag("is_featured", false),
        ];
        rules.fields.image_url = Some(FieldRule::background(".bg"));
        rules.fields.flags.insert(
            "is_sponsored".to_string(),
            FieldRule::text("span").containing(&["SPONSORED"]),
        );
        let html = r#"
            <div class="mini"><article><a href="/m"><h3>Mini</h3></a><span>SPONSORED</span></article></div>
            <div class="featured"><article><a href="/f"><h3>Big</h3></a>
              <div class="bg" style="background-image: url('https://cdn.example.com/f.jpg');"></div>
            </article></div>"#;
        let records = extract(html, &rules, reference()).unwrap();
        assert_eq!(records[0].title, "Big");
        assert_eq!(records[0].flags.get("is_featured"), Some(&true));
        assert_eq!(records[0].flags.get("is_sponsored"), Some(&false));
        assert_eq!(
            records[0].image_url.as_deref(),
            Some("https://cdn.example.com/f.jpg")
        );
        assert_eq!(records[1].title, "Mini");
        assert_eq!(records[1].flags.get("is_featured"), Some(&false));
        assert_eq!(records[1].flags.get("is_sponsored"), Some(&true));
    }

    #[test]
    fn test_page_date_and_fallback() {
        let mut rules = rules();
        rules.page_date = Some(PageDateRule {
            selector: ".today".to_string(),
            pattern: r"(\d{4})-(\d{1,2})-(\d{1,2})".to_string(),
        });
        let html = r#"<div class="today">Today 2024-3-7</div>
            <ul class="news"><li><a href="/a"><h3>A</h3></a></li></ul>"#;
        let records = extract(html, &rules, reference()).unwrap();
        assert_eq!(records[0].date.as_deref(), Some("2024-03-07"));

        let html = r#"<ul class="news"><li><a href="/a"><h3>A</h3></a></li></ul>"#;
        let records = extract(html, &rules, reference()).unwrap();
        assert_eq!(records[0].date.as_deref(), Some("2024-12-21"));
    }

    #[test]
    fn test_invalid_selector_is_rules_error() {
        let mut rules = rules();
        rules.fields.title = FieldRule::text("h3[");
        let err = Extractor::compile(&rules).unwrap_err();
        assert!(matches!(err, RulesError::Selector { ref selector, .. } if selector == "h3["));
    }

    #[test]
    fn test_secondary_defaults_limit() {
        let mut rules = rules();
        rules.secondary = Some(SecondaryFetch {
            container: "article".to_string(),
            body: ".body".to_string(),
            wait_ms: 5000,
        });
        let extractor = Extractor::compile(&rules).unwrap();
        assert_eq!(extractor.limit, Some(DEFAULT_SECONDARY_LIMIT));
    }

    #[test]
    fn test_body_text_flattened() {
        let lookup = BodyLookup::compile(&SecondaryFetch {
            container: ".wrapper".to_string(),
            body: ".post-content".to_string(),
            wait_ms: 5000,
        })
        .unwrap();
        let doc = Html::parse_document(
            r#"<div class="wrapper"><div class="post-content"><p>Line one.</p>
               <p>  Line   two. </p></div></div>"#,
        );
        assert_eq!(lookup.body_text(&doc).unwrap(), "Line one. Line two.");

        let empty = Html::parse_document("<div class=\"wrapper\"></div>");
        assert_eq!(
            lookup.body_text(&empty).unwrap_err(),
            Skip::BodyMissing(".post-content".to_string())
        );
    }

    #[test]
    fn test_inline_markup_adds_no_spaces() {
        let html = r#"<ul class="news"><li><a href="/x"><h3>Bit<b>coin</b> ETF<span>s</span> hit $100<sup>k</sup></h3></a></li></ul>"#;
        let records = extract(html, &rules(), reference()).unwrap();
        assert_eq!(records[0].title, "Bitcoin ETFs hit $100k");

        let lookup = BodyLookup::compile(&SecondaryFetch {
            container: ".wrapper".to_string(),
            body: ".post-content".to_string(),
            wait_ms: 5000,
        })
        .unwrap();
        let doc = Html::parse_document(
            r#"<div class="wrapper"><div class="post-content"><p>Solana<em>'s</em> <a href="/t">TVL</a> rose.</p></div></div>"#,
        );
        assert_eq!(lookup.body_text(&doc).unwrap(), "Solana's TVL rose.");
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("01."), Some(1));
        assert_eq!(parse_number("10."), Some(10));
        assert_eq!(parse_number("1,204 votes"), Some(1204));
        assert_eq!(parse_number("none"), None);
    }
}
