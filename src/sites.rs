//! Built-in site catalog and YAML rule loading.
//!
//! | Site id | Page | Envelope key | Notes |
//! |---------|------|--------------|-------|
//! | `coindesk_top_stories` | CoinDesk home | `top_stories` | sponsored flag, normalized times |
//! | `coindesk_most_read` | CoinDesk home | `most_read` | ranked, author links |
//! | `coindesk_latest_news` | CoinDesk latest | `latest_news` | category defaults to "Uncategorized" |
//! | `cryptonews` | CryptoNews | `news` | featured and mini sections |
//! | `cryptoslate_top_news` | CryptoSlate top news | `top_news` | post-meta spans |
//! | `cryptoslate_insights` | CryptoSlate insights | `insights` | category list, data source |
//! | `coinness` | Coinness ticker | grouped by date | load-more click, 12-hour clock |
//! | `cointelegraph` | Cointelegraph tag pages | `articles` | article body fetch |
//! | `decrypt` | Decrypt sections | `articles` | article body fetch |
//! | `yahoo_finance` | Yahoo Finance topics | `articles` | article body fetch |
//! | `bitcoin_news` | Bitcoin.com categories | `articles` | article body fetch |
//!
//! Selectors mirror each site's markup at the time it was captured, and are
//! expected to drift. A rules file passed with `--rules` replaces entries by
//! id, so a broken selector can be fixed without a rebuild.

use crate::error::RulesError;
use crate::render::InteractionStep;
use crate::rules::{
    AuthorRule, DEFAULT_SECONDARY_LIMIT, DEFAULT_WAIT_MS, EnvelopeShape, FieldRule, FieldRules,
    PageDateRule, SecondaryFetch, Section, SiteRules, TimeFormat,
};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{info, instrument};

fn site(id: &str, key: &str, base_url: &str, listing_url: &str) -> SiteRules {
    SiteRules {
        id: id.to_string(),
        key: key.to_string(),
        base_url: base_url.to_string(),
        listing_url: listing_url.to_string(),
        categories: BTreeMap::new(),
        wait_ms: DEFAULT_WAIT_MS,
        script: None,
        sections: Vec::new(),
        fields: FieldRules::default(),
        time_format: TimeFormat::Raw,
        page_date: None,
        limit: None,
        secondary: None,
        envelope: EnvelopeShape::Keyed,
    }
}

fn categories(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(name, url)| (name.to_string(), url.to_string()))
        .collect()
}

fn coindesk_top_stories() -> SiteRules {
    let mut rules = site(
        "coindesk_top_stories",
        "top_stories",
        "https://www.coindesk.com",
        "https://www.coindesk.com",
    );
    rules.sections = vec![Section::new(
        r"div.grid.gap-4.grid-cols-4.md\:grid-cols-8.lg\:grid-cols-12.xl\:grid-cols-16 > div.order-2.col-span-4.md\:order-3.md\:col-span-5.lg\:col-span-9.xl\:order-3.xl\:col-span-12.xl\:row-span-6 > div.flex.flex-col",
        "div.flex",
    )];
    rules.fields = FieldRules {
        title: FieldRule::text(r"a.hover\:underline h3"),
        url: FieldRule::attr(r"a.hover\:underline", "href"),
        content: Some(FieldRule::text("p.line-clamp-3")),
        published_time: Some(FieldRule::text("span.uppercase")),
        category: Some(FieldRule::text("span.category")),
        image_url: Some(FieldRule::attr("img", "src")),
        flags: BTreeMap::from([(
            "is_sponsored".to_string(),
            FieldRule::text("span").containing(&["SPONSORED"]),
        )]),
        ..Default::default()
    };
    rules.time_format = TimeFormat::Normalize;
    rules
}

fn coindesk_most_read() -> SiteRules {
    let mut rules = site(
        "coindesk_most_read",
        "most_read",
        "https://www.coindesk.com",
        "https://www.coindesk.com",
    );
    rules.sections = vec![Section::new(
        "div.order-3 > div",
        r"div.flex.flex-col.gap-1.md\:flex-row",
    )];
    rules.fields = FieldRules {
        title: FieldRule::text("div.bg-white.flex.gap-6 a.text-color-charcoal-900 h3"),
        url: FieldRule::attr("div.bg-white.flex.gap-6 a.text-color-charcoal-900", "href"),
        rank: Some(FieldRule::text("span.text-color-charcoal-900.uppercase")),
        content: Some(FieldRule::text("div.bg-white.flex.gap-6 p.line-clamp-3")),
        authors: Some(AuthorRule {
            selector: r"div.bg-white.flex.gap-6 a.text-color-charcoal-900.hover\:underline[title]"
                .to_string(),
            name_attr: Some("title".to_string()),
            url_attr: Some("href".to_string()),
        }),
        published_time: Some(
            FieldRule::text("div.bg-white.flex.gap-6 span.uppercase").containing(&["AGO", "202"]),
        ),
        image_url: Some(FieldRule::attr("img.rounded", "src")),
        require: vec!["div.bg-white.flex.gap-6".to_string()],
        ..Default::default()
    };
    rules.time_format = TimeFormat::Normalize;
    rules
}

fn coindesk_latest_news() -> SiteRules {
    let mut rules = site(
        "coindesk_latest_news",
        "latest_news",
        "https://www.coindesk.com",
        "https://www.coindesk.com/latest-crypto-news",
    );
    rules.sections = vec![Section::new(
        r"div.flex.flex-wrap.justify-center.flex-col.border-0.md\:gap-6.mdmax\:gap-4.container-mobile-md.container-tablet-medium.container-desktop-lg.md\:mt-8.mdmax\:mt-6.mdmax\:mx-0",
        "div.flex.gap-4",
    )];
    rules.fields = FieldRules {
        title: FieldRule::text("div.flex.flex-col a.text-color-charcoal-900 h3"),
        url: FieldRule::attr("div.flex.flex-col a.text-color-charcoal-900", "href"),
        category: Some(FieldRule::text("div.flex.flex-col a.text-charcoal-600").or("Uncategorized")),
        content: Some(FieldRule::text("div.flex.flex-col p.line-clamp-3")),
        published_time: Some(FieldRule::text("div.flex.flex-col span.uppercase")),
        image_url: Some(FieldRule::attr("img", "src")),
        require: vec!["div.flex.flex-col".to_string()],
        ..Default::default()
    };
    rules.time_format = TimeFormat::Normalize;
    rules
}

fn cryptonews() -> SiteRules {
    const MAIN: &str = "body > div.main > div.container.archive-template > div:nth-child(2) > main";
    let mut rules = site(
        "cryptonews",
        "news",
        "https://cryptonews.com",
        "https://cryptonews.com/news/",
    );
    rules.sections = vec![
        Section::new(
            &format!("{MAIN} div.archive-template-latest-news-list"),
            "div.archive-template-latest-news__wrap",
        )
        .flag("is_featured", true),
        Section::new(
            &format!("{MAIN} div.archive-template-latest-news-list-mini"),
            "div.archive-template-latest-news__wrap",
        )
        .flag("is_featured", false),
    ];
    rules.fields = FieldRules {
        title: FieldRule::text(
            "a.archive-template-latest-news h5, a.archive-template-latest-news div.archive-template-latest-news__title",
        ),
        url: FieldRule::attr("a.archive-template-latest-news", "href"),
        category: Some(FieldRule::text("div.archive-template-latest-news__label")),
        content: Some(FieldRule::text("div.archive-template-latest-news__description")),
        published_time: Some(FieldRule::text("div.archive-template-latest-news__time")),
        author: Some(FieldRule::text("div.archive-template-latest-news__author").strip(&["by"])),
        image_url: Some(FieldRule::background("div.archive-template-latest-news__bg")),
        require: vec!["a.archive-template-latest-news".to_string()],
        ..Default::default()
    };
    rules
}

fn cryptoslate_top_news() -> SiteRules {
    let mut rules = site(
        "cryptoslate_top_news",
        "top_news",
        "https://cryptoslate.com",
        "https://cryptoslate.com/top-news/",
    );
    rules.sections = vec![Section::new(r"#\32 4Hours > div.posts", "article")];
    rules.fields = FieldRules {
        title: FieldRule::text("h2"),
        url: FieldRule::attr("a", "href"),
        image_url: Some(FieldRule::attr("img", "src")),
        category: Some(FieldRule::text("div.post-meta span:not([class])").or("Uncategorized")),
        kind: Some(FieldRule::text("div.post-meta span.type")),
        author: Some(FieldRule::text("div.post-meta span").nth(1).or("Unknown")),
        published_time: Some(FieldRule::text("div.post-meta span.read")),
        require: vec!["div.post-meta".to_string()],
        ..Default::default()
    };
    rules
}

fn cryptoslate_insights() -> SiteRules {
    let mut rules = site(
        "cryptoslate_insights",
        "insights",
        "https://cryptoslate.com",
        "https://cryptoslate.com/insights/",
    );
    rules.sections = vec![Section::new(
        "#main > div.container.clearfix > div.news-feed.slate > div.list-feed.insights.icon-feed",
        "article",
    )];
    rules.fields = FieldRules {
        title: FieldRule::text("h2"),
        url: FieldRule::attr("a", "href"),
        image_url: Some(FieldRule::attr("img.attachment-medium", "src")),
        categories: Some(FieldRule::text("div.inner span")),
        published_time: Some(FieldRule::text("span.read")),
        data_source: Some(
            FieldRule::text("span.insights")
                .containing(&["Data via"])
                .strip(&["Data via"]),
        ),
        ..Default::default()
    };
    rules
}

fn coinness() -> SiteRules {
    const MAIN: &str = "#root > div > div.Wrap-sc-v065lx-0.hwmGSB > div > main";
    let mut rules = site("coinness", "news", "https://coinness.com", "https://coinness.com/");
    rules.script = Some(vec![
        InteractionStep::click(&format!("{MAIN} > button")),
        InteractionStep::wait(500),
    ]);
    rules.sections = vec![Section::new("body", "div.BreakingNewsWrap-sc-glfxh-1")];
    rules.fields = FieldRules {
        title: FieldRule::text("div.BreakingNewsTitle-sc-glfxh-4 a"),
        url: FieldRule::attr("div.BreakingNewsTitle-sc-glfxh-4 a", "href"),
        content: Some(FieldRule::text("div.BreakingNewsContents-sc-glfxh-5 span")),
        published_time: Some(FieldRule::text("div.TimeBlock-sc-glfxh-2")),
        coin_tags: Some(FieldRule::text(
            "div.CoinWrap-sc-1ghqi0-0 button.MiniCoinBadge-sc-1ghqi0-1",
        )),
        flags: BTreeMap::from([(
            "isHighlight".to_string(),
            FieldRule::text("div.BreakingNewsTitle-sc-glfxh-4.dFiHgV"),
        )]),
        counts: BTreeMap::from([
            ("bull_count".to_string(), FieldRule::text(r#"span[type="bull"]"#)),
            ("bear_count".to_string(), FieldRule::text(r#"span[type="bear"]"#)),
            ("quote_count".to_string(), FieldRule::text("span.QuoteCount-sc-w7d7vw-0")),
        ]),
        ..Default::default()
    };
    rules.time_format = TimeFormat::SubDayClock;
    rules.page_date = Some(PageDateRule {
        selector: format!(
            "{MAIN} > div.Wrap-sc-n14h4a-0.izBKQg > div > div.Wrap-sc-907me6-0.cjdwpI > div"
        ),
        pattern: r"(\d{4})년\s*(\d{1,2})월\s*(\d{1,2})일".to_string(),
    });
    rules.envelope = EnvelopeShape::GroupedByDate;
    rules
}

/// Listing plus detail-page body, for the full-article sites.
fn article_site(
    id: &str,
    base_url: &str,
    pages: &[(&str, &str)],
    default_category: &str,
    section: Section,
    title: FieldRule,
    url: FieldRule,
    secondary: (&str, &str),
) -> SiteRules {
    let categories = categories(pages);
    let listing_url = categories
        .get(default_category)
        .cloned()
        .unwrap_or_else(|| base_url.to_string());
    let mut rules = site(id, "articles", base_url, &listing_url);
    rules.categories = categories;
    rules.sections = vec![section];
    rules.fields = FieldRules {
        title,
        url,
        ..Default::default()
    };
    rules.limit = Some(DEFAULT_SECONDARY_LIMIT);
    rules.secondary = Some(SecondaryFetch {
        container: secondary.0.to_string(),
        body: secondary.1.to_string(),
        wait_ms: DEFAULT_WAIT_MS,
    });
    rules
}

fn cointelegraph() -> SiteRules {
    article_site(
        "cointelegraph",
        "https://cointelegraph.com",
        &[
            ("market", "https://cointelegraph.com/tags/markets"),
            ("policy", "https://cointelegraph.com/tags/regulation"),
            ("tech", "https://cointelegraph.com/tags/technology"),
            ("nft", "https://cointelegraph.com/tags/nft"),
            ("business", "https://cointelegraph.com/tags/business"),
            ("research", "https://cointelegraph.com/tags/research-reports"),
        ],
        "market",
        Section::new("body", ".post-card-inline"),
        FieldRule::text(".post-card-inline__title"),
        FieldRule::attr("a.post-card-inline__figure-link", "href"),
        (".post__content-wrapper", "div.post-content"),
    )
}

fn decrypt() -> SiteRules {
    article_site(
        "decrypt",
        "https://decrypt.co/",
        &[
            ("crypto", "https://decrypt.co/news/cryptocurrencies"),
            ("nft", "https://decrypt.co/news/nft"),
            ("tech", "https://decrypt.co/news/technology"),
            ("market", "https://decrypt.co/news/markets"),
            ("business", "https://decrypt.co/news/business"),
        ],
        "crypto",
        Section::new("body", ".linkbox"),
        FieldRule::text("h2, h3, h4"),
        FieldRule::attr("a.linkbox__overlay", "href"),
        (".z-2", "div.post-content"),
    )
}

fn yahoo_finance() -> SiteRules {
    article_site(
        "yahoo_finance",
        "https://finance.yahoo.com",
        &[
            ("tech", "https://finance.yahoo.com/topic/tech/"),
            ("economy", "https://finance.yahoo.com/topic/economic-news/"),
            ("crypto", "https://finance.yahoo.com/topic/crypto/"),
            ("housing", "https://finance.yahoo.com/topic/housing-market/"),
        ],
        "crypto",
        Section::new(".stream-items", "a.subtle-link"),
        FieldRule::default(),
        FieldRule::own_attr("href"),
        (".body-wrap", "div.body"),
    )
}

fn bitcoin_news() -> SiteRules {
    article_site(
        "bitcoin_news",
        "https://news.bitcoin.com/",
        &[
            ("latest", "https://news.bitcoin.com/category/market-updates/"),
            ("market", "https://news.bitcoin.com/category/markets-and-prices/"),
            ("finance", "https://news.bitcoin.com/category/finance/"),
            ("policy", "https://news.bitcoin.com/category/regulation/"),
        ],
        "latest",
        Section::new("body", ".sc-fRrnCe"),
        FieldRule::text("a.sc-iDJa-DH"),
        FieldRule::attr("a.sc-iDJa-DH", "href"),
        (".sc-ledASJ", "div.article__body"),
    )
}

/// Every built-in site target, in run order.
pub fn catalog() -> Vec<SiteRules> {
    vec![
        coindesk_top_stories(),
        coindesk_most_read(),
        coindesk_latest_news(),
        cryptonews(),
        cryptoslate_top_news(),
        cryptoslate_insights(),
        coinness(),
        cointelegraph(),
        decrypt(),
        yahoo_finance(),
        bitcoin_news(),
    ]
}

/// Look up a site's rules by id.
pub fn find<'a>(rules: &'a [SiteRules], id: &str) -> Result<&'a SiteRules, RulesError> {
    rules
        .iter()
        .find(|r| r.id == id)
        .ok_or_else(|| RulesError::UnknownSite(id.to_string()))
}

/// Replace entries of `base` by id with `overrides`, appending new ids.
pub fn merge(mut base: Vec<SiteRules>, overrides: Vec<SiteRules>) -> Vec<SiteRules> {
    for rules in overrides {
        match base.iter_mut().find(|r| r.id == rules.id) {
            Some(existing) => *existing = rules,
            None => base.push(rules),
        }
    }
    base
}

/// Parse a YAML list of [`SiteRules`].
pub fn parse_rules(yaml: &str) -> Result<Vec<SiteRules>, RulesError> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Load a YAML rules file.
#[instrument(level = "info", skip_all, fields(path = %path.as_ref().display()))]
pub async fn load_rules(path: impl AsRef<Path>) -> Result<Vec<SiteRules>, RulesError> {
    let yaml = tokio::fs::read_to_string(path.as_ref()).await?;
    let rules = parse_rules(&yaml)?;
    info!(count = rules.len(), "Loaded site rules");
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{Extractor, extract};
    use crate::models::Author;
    use chrono::{DateTime, TimeZone, Utc};

    fn reference() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 21, 12, 41, 0).unwrap()
    }

    fn rules_for(id: &str) -> SiteRules {
        find(&catalog(), id).unwrap().clone()
    }

    #[test]
    fn test_catalog_compiles() {
        for rules in catalog() {
            assert!(
                Extractor::compile(&rules).is_ok(),
                "rules for {} should compile",
                rules.id
            );
        }
    }

    #[test]
    fn test_catalog_ids_unique() {
        let mut ids: Vec<_> = catalog().into_iter().map(|r| r.id).collect();
        let count = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), count);
    }

    #[test]
    fn test_find_unknown_site() {
        let err = find(&catalog(), "nope").unwrap_err();
        assert!(matches!(err, RulesError::UnknownSite(id) if id == "nope"));
    }

    #[test]
    fn test_category_urls() {
        let rules = rules_for("cointelegraph");
        assert_eq!(rules.page_url(None), "https://cointelegraph.com/tags/markets");
        assert_eq!(rules.page_url(Some("nft")), "https://cointelegraph.com/tags/nft");
        assert_eq!(rules.page_url(Some("memes")), "https://cointelegraph.com/tags/markets");
    }

    #[test]
    fn test_merge_replaces_and_appends() {
        let mut replacement = rules_for("decrypt");
        replacement.wait_ms = 9000;
        let mut extra = rules_for("decrypt");
        extra.id = "decrypt_mirror".to_string();

        let merged = merge(catalog(), vec![replacement, extra]);
        assert_eq!(merged.len(), catalog().len() + 1);
        assert_eq!(find(&merged, "decrypt").unwrap().wait_ms, 9000);
        assert!(find(&merged, "decrypt_mirror").is_ok());
    }

    #[test]
    fn test_catalog_survives_yaml() {
        let yaml = serde_yaml::to_string(&catalog()).unwrap();
        assert_eq!(parse_rules(&yaml).unwrap(), catalog());
    }

    #[test]
    fn test_coindesk_most_read() {
        let html = r#"<html><body><div class="order-3"><div>
          <div class="flex flex-col gap-1 md:flex-row">
            <span class="text-color-charcoal-900 uppercase">02.</span>
            <div class="bg-white flex gap-6">
              <a class="text-color-charcoal-900" href="/markets/beta"><h3>Beta story</h3></a>
              <p class="line-clamp-3">Beta preview</p>
              <a class="text-color-charcoal-900 hover:underline" title="Jane Doe" href="/author/jane-doe">Jane</a>
              <span class="uppercase">3 HRS AGO</span>
            </div>
            <img class="rounded" src="https://cdn.coindesk.com/beta.jpg">
          </div>
          <div class="flex flex-col gap-1 md:flex-row">
            <span class="text-color-charcoal-900 uppercase">01.</span>
            <div class="bg-white flex gap-6">
              <a class="text-color-charcoal-900" href="https://www.coindesk.com/policy/alpha"><h3>Alpha story</h3></a>
              <span class="uppercase">BY SOMEONE</span>
              <span class="uppercase">Dec 20, 2024</span>
            </div>
          </div>
          <div class="flex flex-col gap-1 md:flex-row">
            <span class="text-color-charcoal-900 uppercase">03.</span>
          </div>
        </div></div></body></html>"#;

        let records = extract(html, &rules_for("coindesk_most_read"), reference()).unwrap();
        assert_eq!(records.len(), 2);

        let alpha = &records[0];
        assert_eq!(alpha.rank, Some(1));
        assert_eq!(alpha.url, "https://www.coindesk.com/policy/alpha");
        assert_eq!(alpha.published_time.as_deref(), Some("2024-12-20T00:00:00"));
        assert_eq!(alpha.authors, Some(Vec::new()));

        let beta = &records[1];
        assert_eq!(beta.rank, Some(2));
        assert_eq!(beta.title, "Beta story");
        assert_eq!(beta.url, "https://www.coindesk.com/markets/beta");
        assert_eq!(beta.content.as_deref(), Some("Beta preview"));
        assert_eq!(beta.published_time.as_deref(), Some("2024-12-21T09:00:00"));
        assert_eq!(
            beta.authors,
            Some(vec![Author {
                name: "Jane Doe".to_string(),
                url: Some("https://www.coindesk.com/author/jane-doe".to_string()),
            }])
        );
        assert_eq!(beta.image_url.as_deref(), Some("https://cdn.coindesk.com/beta.jpg"));
    }

    #[test]
    fn test_cryptonews_sections() {
        let html = r#"<html><body><div class="main"><div class="container archive-template">
          <div class="crumbs"></div>
          <div><main>
            <div class="archive-template-latest-news-list">
              <div class="archive-template-latest-news__wrap">
                <a class="archive-template-latest-news" href="https://cryptonews.com/news/big/">
                  <div class="archive-template-latest-news__bg" style="background-image: url(https://cimg.co/big.jpg)"></div>
                  <div class="archive-template-latest-news__label">Bitcoin News</div>
                  <h5>Big headline</h5>
                  <div class="archive-template-latest-news__description">Big description</div>
                  <div class="archive-template-latest-news__time">2 hours ago</div>
                  <div class="archive-template-latest-news__author">by Jane Doe,</div>
                </a>
              </div>
            </div>
            <div class="archive-template-latest-news-list-mini">
              <div class="archive-template-latest-news__wrap">
                <a class="archive-template-latest-news" href="/news/mini/">
                  <div class="archive-template-latest-news__title">Mini headline</div>
                  <div class="archive-template-latest-news__author">by John Roe</div>
                </a>
              </div>
              <div class="archive-template-latest-news__wrap"><span>broken</span></div>
            </div>
          </main></div>
        </div></div></body></html>"#;

        let records = extract(html, &rules_for("cryptonews"), reference()).unwrap();
        assert_eq!(records.len(), 2);

        let big = &records[0];
        assert_eq!(big.title, "Big headline");
        assert_eq!(big.url, "https://cryptonews.com/news/big/");
        assert_eq!(big.category.as_deref(), Some("Bitcoin News"));
        assert_eq!(big.content.as_deref(), Some("Big description"));
        assert_eq!(big.published_time.as_deref(), Some("2 hours ago"));
        assert_eq!(big.author.as_deref(), Some("Jane Doe"));
        assert_eq!(big.image_url.as_deref(), Some("https://cimg.co/big.jpg"));
        assert_eq!(big.flags.get("is_featured"), Some(&true));

        let mini = &records[1];
        assert_eq!(mini.title, "Mini headline");
        assert_eq!(mini.url, "https://cryptonews.com/news/mini/");
        assert_eq!(mini.author.as_deref(), Some("John Roe"));
        assert_eq!(mini.image_url, None);
        assert_eq!(mini.flags.get("is_featured"), Some(&false));
    }

    #[test]
    fn test_cryptoslate_top_news() {
        let html = r#"<html><body><div id="24Hours"><div class="posts">
          <article>
            <a href="https://cryptoslate.com/alpha/"><img src="https://cryptoslate.com/alpha.jpg"><h2>Alpha</h2></a>
            <div class="post-meta"><span>Bitcoin</span><span>Jane Doe</span><span class="read">2 hours ago</span></div>
          </article>
          <article>
            <a href="https://cryptoslate.com/beta/"><h2>Beta without meta</h2></a>
          </article>
        </div></div></body></html>"#;

        let records = extract(html, &rules_for("cryptoslate_top_news"), reference()).unwrap();
        assert_eq!(records.len(), 1);
        let alpha = &records[0];
        assert_eq!(alpha.title, "Alpha");
        assert_eq!(alpha.category.as_deref(), Some("Bitcoin"));
        assert_eq!(alpha.author.as_deref(), Some("Jane Doe"));
        assert_eq!(alpha.kind, None);
        assert_eq!(alpha.published_time.as_deref(), Some("2 hours ago"));
        assert_eq!(alpha.image_url.as_deref(), Some("https://cryptoslate.com/alpha.jpg"));
    }

    #[test]
    fn test_cryptoslate_insights() {
        let html = r#"<html><body><div id="main"><div class="container clearfix">
          <div class="news-feed slate"><div class="list-feed insights icon-feed">
            <article>
              <a href="https://cryptoslate.com/insights/etf-flows/">
                <img class="attachment-medium" src="https://cryptoslate.com/etf.png"><h2>ETF flows</h2>
              </a>
              <div class="inner"><span>Bitcoin</span><span>ETFs</span></div>
              <span class="read">Dec 20, 2024</span>
              <span class="insights">Data via Farside Investors</span>
            </article>
          </div></div>
        </div></div></body></html>"#;

        let records = extract(html, &rules_for("cryptoslate_insights"), reference()).unwrap();
        assert_eq!(records.len(), 1);
        let item = &records[0];
        assert_eq!(item.title, "ETF flows");
        assert_eq!(
            item.categories,
            Some(vec!["Bitcoin".to_string(), "ETFs".to_string()])
        );
        assert_eq!(item.data_source.as_deref(), Some("Farside Investors"));
        assert_eq!(item.published_time.as_deref(), Some("Dec 20, 2024"));
    }

    #[test]
    fn test_coinness_ticker() {
        let html = r#"<html><body><div id="root"><div><div class="Wrap-sc-v065lx-0 hwmGSB"><div><main>
          <div class="Wrap-sc-n14h4a-0 izBKQg"><div><div class="Wrap-sc-907me6-0 cjdwpI">
            <div>2024년 12월 20일 금요일</div>
          </div></div></div>
          <div class="BreakingNewsWrap-sc-glfxh-1">
            <div class="TimeBlock-sc-glfxh-2">08:05</div>
            <div class="BreakingNewsTitle-sc-glfxh-4 dFiHgV"><a href="/news/1">BTC tops $100k</a></div>
            <div class="BreakingNewsContents-sc-glfxh-5"><span>  Bitcoin crossed
              six figures. </span></div>
            <span type="bull">12</span><span type="bear">3</span><span class="QuoteCount-sc-w7d7vw-0">4</span>
            <div class="CoinWrap-sc-1ghqi0-0">
              <button class="MiniCoinBadge-sc-1ghqi0-1">BTC</button>
              <button class="MiniCoinBadge-sc-1ghqi0-1">ETH</button>
            </div>
          </div>
          <div class="BreakingNewsWrap-sc-glfxh-1">
            <div class="TimeBlock-sc-glfxh-2">23:10</div>
            <div class="BreakingNewsTitle-sc-glfxh-4"><a href="/news/2">Quiet session</a></div>
          </div>
          <div class="BreakingNewsWrap-sc-glfxh-1">
            <div class="TimeBlock-sc-glfxh-2">09:00</div>
          </div>
        </main></div></div></div></div></body></html>"#;

        let records = extract(html, &rules_for("coinness"), reference()).unwrap();
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(first.title, "BTC tops $100k");
        assert_eq!(first.url, "https://coinness.com/news/1");
        assert_eq!(first.published_time.as_deref(), Some("20:05"));
        assert_eq!(first.content.as_deref(), Some("Bitcoin crossed six figures."));
        assert_eq!(first.date.as_deref(), Some("2024-12-20"));
        assert_eq!(first.flags.get("isHighlight"), Some(&true));
        assert_eq!(first.counts.get("bull_count"), Some(&12));
        assert_eq!(first.counts.get("bear_count"), Some(&3));
        assert_eq!(first.counts.get("quote_count"), Some(&4));
        assert_eq!(
            first.coin_tags,
            Some(vec!["BTC".to_string(), "ETH".to_string()])
        );

        let second = &records[1];
        assert_eq!(second.published_time.as_deref(), Some("23:10"));
        assert_eq!(second.flags.get("isHighlight"), Some(&false));
        assert!(second.counts.is_empty());
        assert_eq!(second.coin_tags, Some(Vec::new()));
    }
}
