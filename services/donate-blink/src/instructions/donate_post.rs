use std::str::FromStr;

use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::{instruction::Instruction, system_instruction};
use anchor_spl::associated_token::get_associated_token_address;
use anchor_spl::token::spl_token;
use axum::{
    body::Bytes,
    extract::{RawQuery, State},
    response::IntoResponse,
    Json,
};

use spl_associated_token_account::instruction::create_associated_token_account;

use crate::{
    contexts::{ActionPostRequest, ActionPostResponse, DonateQuery},
    cors::ACTIONS_CORS_HEADERS,
    errors::{BlinkError, Result},
    ledger::Ledger,
    states::{AssetKind, DonationRequest, NATIVE_DECIMALS},
    transaction::UnsignedTransaction,
    utils::ui_amount_to_base_units,
    AppState,
};

pub const THANK_YOU_MESSAGE: &str = "Thank you for your support!";

/// Simple system accounts that only hold SOL carry no data.
const SYSTEM_ACCOUNT_DATA_LEN: usize = 0;

pub fn parse_account(body: &[u8]) -> Result<Pubkey> {
    let request: ActionPostRequest =
        serde_json::from_slice(body).map_err(|_| BlinkError::InvalidAccount)?;
    Pubkey::from_str(request.account.trim()).map_err(|_| BlinkError::InvalidAccount)
}

/// Rejects donations that would leave a fresh receiving account below the
/// rent exempt minimum.
pub async fn ensure_rent_exempt(ledger: &dyn Ledger, request: &DonationRequest) -> Result<()> {
    let minimum_balance = ledger
        .minimum_balance_for_rent_exemption(SYSTEM_ACCOUNT_DATA_LEN)
        .await?;
    // per-asset overflow is checked when the transfer is built
    let lamports = ui_amount_to_base_units(request.amount, NATIVE_DECIMALS).unwrap_or(u64::MAX);
    if lamports < minimum_balance {
        return Err(BlinkError::RentExemption(request.to));
    }

    Ok(())
}

/// Assembles the transfer instructions for a validated donation, creating the
/// recipient's associated token account first when it does not exist yet.
pub async fn build_donation_instructions(
    ledger: &dyn Ledger,
    payer: &Pubkey,
    request: &DonationRequest,
) -> Result<Vec<Instruction>> {
    let amount = ui_amount_to_base_units(request.amount, request.asset.decimals)
        .ok_or(BlinkError::InvalidAmount)?;

    let mint = match request.asset.kind {
        AssetKind::Native => {
            return Ok(vec![system_instruction::transfer(payer, &request.to, amount)]);
        }
        AssetKind::Token { mint } => mint,
    };

    let from_token_account = get_associated_token_address(payer, &mint);
    let to_token_account = get_associated_token_address(&request.to, &mint);

    let mut instructions = Vec::with_capacity(2);
    if !ledger.account_exists(&to_token_account).await? {
        tracing::debug!(%to_token_account, %mint, "recipient token account missing, creating it");
        instructions.push(create_associated_token_account(
            payer,
            &request.to,
            &mint,
            &spl_token::ID,
        ));
    }
    instructions.push(spl_token::instruction::transfer(
        &spl_token::ID,
        &from_token_account,
        &to_token_account,
        payer,
        &[],
        amount,
    )?);

    Ok(instructions)
}

pub async fn build_donation_transaction(
    ledger: &dyn Ledger,
    payer: &Pubkey,
    request: &DonationRequest,
) -> Result<UnsignedTransaction> {
    ensure_rent_exempt(ledger, request).await?;
    let instructions = build_donation_instructions(ledger, payer, request).await?;
    let blockhash = ledger.latest_blockhash().await?;

    Ok(UnsignedTransaction::new(&instructions, payer, blockhash))
}

pub async fn donate_post(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
    body: Bytes,
) -> Result<impl IntoResponse> {
    let account = parse_account(&body)?;
    let query = DonateQuery::from_raw(query.as_deref());
    let request = DonationRequest::from_query(&query, &state.assets)?;

    let transaction = build_donation_transaction(state.ledger.as_ref(), &account, &request).await?;
    tracing::info!(
        %account,
        to = %request.to,
        token = request.asset.symbol,
        amount = request.amount,
        instructions = transaction.message.instructions.len(),
        "built donation transaction"
    );

    let payload = ActionPostResponse {
        transaction: transaction.to_base64(),
        message: Some(THANK_YOU_MESSAGE.to_string()),
    };
    Ok((ACTIONS_CORS_HEADERS, Json(payload)))
}
