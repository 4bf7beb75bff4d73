use std::fs;
use std::io::Write;
use std::path::PathBuf;

use tracing::info;

use super::widget::{CheckoutWidget, WidgetBuilder};
use crate::core::Result;
use crate::modules::checkout::models::CheckoutOptions;

/// Where the rendered checkout page goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

/// Checkout widget backed by the vendor's hosted `checkout.js`
///
/// Opening renders a page that loads the script, passes the options and
/// activates the widget as soon as the browser runs it.
#[derive(Debug)]
pub struct HostedCheckout {
    options: CheckoutOptions,
    script_url: String,
    target: OutputTarget,
}

impl HostedCheckout {
    pub fn options(&self) -> &CheckoutOptions {
        &self.options
    }

    pub fn render(&self) -> Result<String> {
        render_page(&self.options, &self.script_url)
    }
}

impl CheckoutWidget for HostedCheckout {
    fn open(self) -> Result<()> {
        let page = self.render()?;

        match &self.target {
            OutputTarget::Stdout => {
                let stdout = std::io::stdout();
                let mut out = stdout.lock();
                out.write_all(page.as_bytes())?;
                out.flush()?;
            }
            OutputTarget::File(path) => fs::write(path, &page)?,
        }

        info!(
            order_id = %self.options.order_id,
            target = ?self.target,
            bytes = page.len(),
            "Checkout page rendered"
        );

        Ok(())
    }
}

/// Builds hosted checkout widgets that all write to the same target
#[derive(Debug, Clone)]
pub struct HostedCheckoutBuilder {
    script_url: String,
    target: OutputTarget,
}

impl HostedCheckoutBuilder {
    pub fn new(script_url: impl Into<String>, target: OutputTarget) -> Self {
        Self {
            script_url: script_url.into(),
            target,
        }
    }
}

impl WidgetBuilder for HostedCheckoutBuilder {
    type Widget = HostedCheckout;

    fn build(&self, options: CheckoutOptions) -> Result<HostedCheckout> {
        options.validate()?;

        Ok(HostedCheckout {
            options,
            script_url: self.script_url.clone(),
            target: self.target.clone(),
        })
    }
}

/// Renders the HTML page that opens the widget
pub fn render_page(options: &CheckoutOptions, script_url: &str) -> Result<String> {
    let options_json = script_safe_json(&serde_json::to_string_pretty(options)?);

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
</head>
<body>
  <script src="{script_url}"></script>
  <script>
    var options = {options_json};
    options.handler = function (response) {{
      alert(response.razorpay_payment_id);
      alert(response.razorpay_order_id);
      alert(response.razorpay_signature);
    }};
    var checkout = new Razorpay(options);
    checkout.open();
  </script>
</body>
</html>
"#,
        title = escape_html(&options.name),
        script_url = escape_html(script_url),
        options_json = options_json,
    ))
}

// JSON stays valid; `</script>` and friends can no longer end the script block
fn script_safe_json(json: &str) -> String {
    json.replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('&', "\\u0026")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
