//! Server-rendered HTML: the search surface and the multi-bang dispatch page

use super::error::ApiError;
use super::utils::{escape_html, script_json};
use crate::bangs::BangRegistry;
use crate::engine::MultiDestination;
use crate::settings::Settings;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 40rem; margin: 4rem auto; padding: 0 1rem; color: #222; }
input[type=search] { width: 100%; padding: .6rem; font-size: 1.1rem; box-sizing: border-box; }
code { background: #f2f2f2; padding: .1rem .3rem; border-radius: 3px; }
button { padding: .5rem 1rem; font-size: 1rem; }
.hidden { display: none; }
table { border-collapse: collapse; } td { padding: .15rem .75rem .15rem 0; }
"#;

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        escape_html(title)
    )
}

/// Search surface shown for an empty query
pub fn home(search_template: &str, settings: &Settings, registry: &BangRegistry) -> String {
    let default_bang = registry
        .get(&settings.default_trigger)
        .map(|bang| format!("!{} ({})", bang.trigger, bang.domain))
        .unwrap_or_else(|| format!("!{} (unavailable, using !ddg)", settings.default_trigger));

    let toggles = [
        ("Multiple bangs per query", settings.multi_bang_enabled),
        ("!r searches site:reddit.com on the default engine", settings.reddit_site_search),
        ("Hide DuckDuckGo ads", settings.disable_ddg_ads),
        ("Hide DuckDuckGo promotions", settings.disable_ddg_promos),
        ("Hide Google AI overview", settings.disable_google_ai),
    ];
    let rows: String = toggles
        .iter()
        .map(|(label, on)| {
            format!(
                "<tr><td>{}</td><td>{}</td></tr>\n",
                escape_html(label),
                if *on { "on" } else { "off" }
            )
        })
        .collect();

    let custom: String = registry
        .custom()
        .iter()
        .map(|bang| {
            format!(
                "<li><code>!{}</code> {}</li>\n",
                escape_html(&bang.trigger),
                escape_html(&bang.domain)
            )
        })
        .collect();
    let custom = if custom.is_empty() {
        "<p>No custom bangs yet.</p>".to_string()
    } else {
        format!("<ul>\n{custom}</ul>")
    };

    let body = format!(
        r#"<h1>Quackly</h1>
<form method="get" action="/">
  <input type="search" name="q" placeholder="Search with !bangs" autofocus>
</form>
<p>Add this URL as a custom search engine in your browser:<br><code>{template}</code></p>
<h2>Settings</h2>
<table>
<tr><td>Default bang</td><td><code>{default_bang}</code></td></tr>
<tr><td>DuckAssist</td><td>{duck_assist}</td></tr>
{rows}</table>
<p>Change settings with <code>PUT /api/settings</code>.</p>
<h2>Custom bangs</h2>
{custom}"#,
        template = escape_html(search_template),
        default_bang = escape_html(&default_bang),
        duck_assist = settings.duck_assist_level.label(),
    );

    layout("Quackly", &body)
}

const DISPATCH_SCRIPT: &str = r#"
(function () {
  var urls = JSON.parse(document.getElementById("destinations").textContent);
  var additional = urls.slice(1);
  var opened = 0;
  additional.forEach(function (url) {
    if (window.open(url, "_blank")) { opened++; }
  });

  if (urls.length > 0 && opened === additional.length) {
    window.location.replace(urls[0]);
    return;
  }

  document.getElementById("automatic").classList.add("hidden");
  document.getElementById("fallback").classList.remove("hidden");
  var button = document.getElementById("open-all");
  button.addEventListener("click", function () {
    if (button.disabled) { return; }
    urls.forEach(function (url) { window.open(url, "_blank"); });
    button.disabled = true;
    button.textContent = "Tabs opened";
  });
})();
"#;

/// Page that opens every destination of a multi-bang query
///
/// Additional URLs open in new tabs and the page replaces itself with the
/// primary one. If the browser blocks any of them, an "Open tabs" button
/// opens all of them once instead.
pub fn dispatch(destination: &MultiDestination, host: &str) -> Result<String, ApiError> {
    let links: String = destination
        .urls
        .iter()
        .map(|url| {
            let url = escape_html(url);
            format!("<li><a href=\"{url}\" target=\"_blank\" rel=\"noopener\">{url}</a></li>\n")
        })
        .collect();

    let body = format!(
        r#"<h1>Opening {count} searches for <q>{query}</q></h1>
<div id="automatic"><p>Opening tabs&hellip;</p></div>
<div id="fallback" class="hidden">
  <p>Your browser blocked some tabs. Allow pop-ups for <strong>{host}</strong> to open them automatically next time.</p>
  <p><button id="open-all" type="button">Open tabs</button></p>
</div>
<noscript><ul>
{links}</ul></noscript>
<script type="application/json" id="destinations">{urls}</script>
<script>{DISPATCH_SCRIPT}</script>"#,
        count = destination.urls.len(),
        query = escape_html(&destination.query),
        host = escape_html(host),
        urls = script_json(&destination.urls)?,
    );

    Ok(layout("Quackly multi-bang", &body))
}

/// Script-driven replacement for URLs that cannot travel in a Location header
pub fn redirect(url: &str) -> Result<String, ApiError> {
    let body = format!(
        "<p>Redirecting to <a href=\"{href}\">{href}</a></p>\n<script>window.location.replace({target});</script>",
        href = escape_html(url),
        target = script_json(url)?,
    );
    Ok(layout("Redirecting", &body))
}
