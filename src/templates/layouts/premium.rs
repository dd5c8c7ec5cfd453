// templates/layouts/premium.rs
use maud::{html, Markup, PreEscaped, DOCTYPE};

// Forwards listings posted by a parent frame to `/embed` and swaps in the
// returned markup. The server decides whether the sender is trusted.
// Responses are applied newest-first: one that comes back after a later
// message was already applied is dropped.
const EMBED_SCRIPT: &str = r#"
(function () {
  var issued = 0, applied = 0;
  window.addEventListener('message', function (event) {
    var seq = ++issued;
    fetch('/embed', {
      method: 'POST',
      headers: { 'Content-Type': 'application/json' },
      body: JSON.stringify({ origin: event.origin, data: event.data })
    })
      .then(function (r) { return r.status === 200 ? r.text() : null; })
      .then(function (html) {
        if (html === null || seq < applied) return;
        var root = document.getElementById('listing-root');
        if (!root) return;
        applied = seq;
        root.outerHTML = html;
        if (window.htmx) window.htmx.process(document.body);
      })
      .catch(function (err) { console.error('listing handoff failed', err); });
  });
})();
"#;

pub fn premium_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                script src="https://cdn.tailwindcss.com" {}
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
            }
            body class="min-h-screen bg-slate-950" {
                (content)
                script { (PreEscaped(EMBED_SCRIPT)) }
            }
        }
    }
}

/// Bare page for error states, without the embed handoff.
pub fn plain_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                script src="https://cdn.tailwindcss.com" {}
            }
            body class="min-h-screen bg-slate-950" { (content) }
        }
    }
}
