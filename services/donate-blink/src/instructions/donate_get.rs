use std::collections::HashMap;

use anchor_lang::prelude::Pubkey;
use axum::{
    extract::{RawQuery, State},
    response::IntoResponse,
    Json,
};

use crate::{
    contexts::{
        ActionGetResponse, ActionLinks, ActionParameter, DonateQuery, LinkedAction,
        ParameterOption, ParameterType,
    },
    cors::ACTIONS_CORS_HEADERS,
    errors::Result,
    states::{AssetRegistry, DonationRequest},
    utils::price_label,
    AppState, DONATE_PATH,
};

pub const TITLE: &str = "Donate to Market Spy";
pub const ICON: &str = "https://assets.marketspy.au/imgs/marketspy-logo-black.svg";
pub const DESCRIPTION: &str =
    "Help support a free project tracking crypto prices from CEXs in real time!";

pub fn action_href(public_url: Option<&str>, to: &Pubkey) -> String {
    let base = public_url.unwrap_or_default().trim_end_matches('/');
    format!("{base}{DONATE_PATH}?to={to}&token={{token}}&amount={{amount}}")
}

/// Builds the action description. Assets missing from `prices` are labelled
/// as unavailable.
pub fn donation_metadata(
    to: &Pubkey,
    assets: &AssetRegistry,
    prices: &HashMap<Pubkey, f64>,
    public_url: Option<&str>,
) -> ActionGetResponse {
    let options = assets
        .iter()
        .map(|asset| ParameterOption {
            label: price_label(asset.symbol, prices.get(&asset.price_mint()).copied()),
            value: asset.symbol.to_string(),
            selected: (asset.symbol == assets.selected()).then_some(true),
        })
        .collect();

    ActionGetResponse {
        title: TITLE.to_string(),
        icon: ICON.to_string(),
        description: DESCRIPTION.to_string(),
        label: "Transfer".to_string(),
        links: Some(ActionLinks {
            actions: vec![LinkedAction {
                label: "Donate".to_string(),
                href: action_href(public_url, to),
                parameters: vec![
                    ActionParameter {
                        kind: ParameterType::Select,
                        name: "token".to_string(),
                        label: None,
                        required: None,
                        options,
                    },
                    ActionParameter {
                        kind: ParameterType::Text,
                        name: "amount".to_string(),
                        label: Some("Amount to send".to_string()),
                        required: Some(true),
                        options: Vec::new(),
                    },
                ],
            }],
        }),
    }
}

pub async fn donate_get(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<impl IntoResponse> {
    let query = DonateQuery::from_raw(query.as_deref());
    let request = DonationRequest::from_query(&query, &state.assets)?;

    let prices = match state.prices.prices(&state.assets.price_mints()).await {
        Ok(prices) => prices,
        Err(err) => {
            tracing::warn!(error = %err, "price lookup failed, serving labels without prices");
            HashMap::new()
        }
    };
    tracing::info!(to = %request.to, quotes = prices.len(), "serving donate action metadata");

    let payload = donation_metadata(
        &request.to,
        &state.assets,
        &prices,
        state.public_url.as_deref(),
    );
    Ok((ACTIONS_CORS_HEADERS, Json(payload)))
}
