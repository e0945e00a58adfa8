use std::fmt::Write;

use crate::handlers::session::dto::QUERY_ERROR_MESSAGE;
use crate::models::SessionState;
use crate::utils::{escape_html, shorten_address};

const GRID_COLUMNS: usize = 5;

const STYLE: &str = "\
body{margin:0;font-family:sans-serif;background:#1a202c;color:#fff}\
.badge{position:absolute;top:16px;right:16px;background:#4a5568;padding:2%;border-radius:6px;display:flex;align-items:center;gap:40px}\
.center{display:flex;flex-direction:column;align-items:center;justify-content:center}\
input{color:#000;width:600px;text-align:center;padding:16px;background:#fff;font-size:24px}\
.grid{display:grid;width:80vw;gap:64px}\
.card{display:flex;flex-direction:column;background:blue;color:#fff;padding:8px}\
.card img{max-width:100%}\
.error{color:red;font-size:1.25rem;font-weight:bold;margin:2%}\
.muted{color:gray}";

/// Render the whole page for one session snapshot
pub fn render_page(state: &SessionState) -> Result<String, std::fmt::Error> {
    let mut html = String::new();

    write!(
        html,
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>ERC-20 Token Indexer</title><style>{}</style></head><body>",
        STYLE
    )?;

    if let Some(account) = &state.connected_account {
        write!(
            html,
            "<div class=\"badge\"><b>{}</b><form method=\"post\" action=\"/page/disconnect\"><button type=\"submit\" style=\"color:red\">Disconnect</button></form></div>",
            escape_html(&shorten_address(account))
        )?;
    } else if state.has_result() {
        html.push_str(
            "<div class=\"badge\"><form method=\"post\" action=\"/page/reset\"><button type=\"submit\" style=\"color:yellow;background:green\">New Query</button></form></div>",
        );
    }

    if !state.has_result() {
        render_query_form(&mut html, &state.input)?;
    }

    if state.is_error() {
        write!(
            html,
            "<div class=\"center\"><p class=\"error\">{}</p></div>",
            escape_html(QUERY_ERROR_MESSAGE)
        )?;
    }

    html.push_str("<div class=\"center\"><h2>ERC-20 token balances:</h2>");
    if state.is_loading() {
        html.push_str("<p class=\"muted\">Loading...</p>");
    } else if state.has_result() {
        write!(
            html,
            "<div class=\"grid\" style=\"grid-template-columns:repeat({},1fr)\">",
            GRID_COLUMNS
        )?;
        for row in state.rows() {
            write!(
                html,
                "<div class=\"card\"><div><b>Symbol:</b> {}</div><div><b>Balance:</b> {}</div>",
                escape_html(row.symbol_or_unknown()),
                escape_html(&row.balance)
            )?;
            if let Some(logo) = &row.logo {
                write!(html, "<img src=\"{}\" alt=\"\">", escape_html(logo))?;
            }
            html.push_str("</div>");
        }
        html.push_str("</div>");
    } else {
        html.push_str("<p>Please make a query! This may take a few seconds...</p>");
    }
    html.push_str("</div></body></html>");

    Ok(html)
}

fn render_query_form(html: &mut String, input: &str) -> std::fmt::Result {
    write!(
        html,
        "<div class=\"center\">\
<h1>ERC-20 Token Indexer</h1>\
<p>Plug in an address and this website will return all of its ERC-20 token balances!</p>\
<h2>Get all the ERC-20 token balances of this address:</h2>\
<form method=\"post\" action=\"/page/query\" class=\"center\">\
<input name=\"address\" value=\"{}\">\
<button type=\"submit\" style=\"font-size:20px;margin-top:36px;background:blue;color:#fff\">Check ERC-20 Token Balances</button>\
</form>\
<h2>Or</h2>\
<form method=\"post\" action=\"/page/connect\">\
<button type=\"submit\" style=\"font-size:20px;background:orange\">Connect your Wallet</button>\
</form>\
</div>",
        escape_html(input)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Action, DisplayRow};
    use chrono::Utc;

    fn row(symbol: &str, balance: &str, logo: Option<&str>) -> DisplayRow {
        DisplayRow {
            contract_address: "0xabc".to_string(),
            symbol: Some(symbol.to_string()),
            name: None,
            logo: logo.map(str::to_string),
            raw_balance: "0".to_string(),
            decimals: 18,
            balance: balance.to_string(),
        }
    }

    fn with_rows(rows: Vec<DisplayRow>) -> SessionState {
        let loading = SessionState::default().apply(Action::QueryStarted);
        loading.apply(Action::QuerySucceeded {
            generation: loading.generation,
            rows,
            completed_at: Utc::now(),
        })
    }

    #[test]
    fn test_idle_page_shows_form_and_placeholder() {
        let state = SessionState::default().apply(Action::InputChanged("0xab\"c".to_string()));
        let html = render_page(&state).unwrap();

        assert!(html.contains("Check ERC-20 Token Balances"));
        assert!(html.contains("Connect your Wallet"));
        assert!(html.contains("value=\"0xab&quot;c\""));
        assert!(html.contains("Please make a query!"));
        assert!(!html.contains("New Query"));
    }

    #[test]
    fn test_loading_page() {
        let state = SessionState::default().apply(Action::QueryStarted);
        let html = render_page(&state).unwrap();
        assert!(html.contains("Loading..."));
        assert!(!html.contains("Please make a query!"));
    }

    #[test]
    fn test_error_banner() {
        let state = SessionState::default()
            .apply(Action::QueryStarted)
            .apply(Action::QueryFailed { generation: 1 });
        let html = render_page(&state).unwrap();
        assert!(html.contains("Unable to fetch token balances"));
        assert!(html.contains("Check ERC-20 Token Balances"));
    }

    #[test]
    fn test_result_grid_hides_form() {
        let state = with_rows(vec![
            row("USDC", "100.0000", Some("https://logo/usdc.png")),
            row("<b>", "1.0000", None),
        ]);
        let html = render_page(&state).unwrap();

        assert!(html.contains("<b>Symbol:</b> USDC"));
        assert!(html.contains("<b>Balance:</b> 100.0000"));
        assert!(html.contains("<img src=\"https://logo/usdc.png\""));
        assert!(html.contains("&lt;b&gt;"));
        assert!(html.contains("New Query"));
        assert!(!html.contains("Check ERC-20 Token Balances"));
    }

    #[test]
    fn test_connected_badge_replaces_new_query() {
        let state = with_rows(vec![row("DAI", "2.0000", None)]).apply(Action::WalletConnected(
            "0x742d35Cc6634C0532925a3b844Bc454e4438f44e".to_string(),
        ));
        let html = render_page(&state).unwrap();

        assert!(html.contains("0x742d...f44e"));
        assert!(html.contains("Disconnect"));
        assert!(!html.contains("New Query"));
    }
}
